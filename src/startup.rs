use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::configuration::{Environment, HospitalSettings, Settings};
use crate::cors::{AllowedOrigins, Cors};
use crate::error::IntakeError;
use crate::graphql::schema::{AppSchema, create_schema};
use crate::intake::{IntakeHandler, IntakeStores, Notifier};
use crate::mailer::{Mailer, SmtpMailer};
use crate::models::appointment::Appointment;
use crate::models::contact::Contact;
use crate::models::health_package::HealthPackage;
use crate::openapi::ApiDoc;
use crate::routes;

/// Facts about the running service that routes report on.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    pub environment: Environment,
    pub email_enabled: bool,
    pub admin_configured: bool,
}

impl ServiceInfo {
    pub fn expose_details(&self) -> bool {
        self.environment.exposes_error_details()
    }
}

/// Everything the routes share, built once per process.
///
/// The stores start empty and live as long as the state does.
#[derive(Clone)]
pub struct AppState {
    appointments: web::Data<IntakeHandler<Appointment>>,
    contacts: web::Data<IntakeHandler<Contact>>,
    health_packages: web::Data<IntakeHandler<HealthPackage>>,
    service: web::Data<ServiceInfo>,
    schema: web::Data<AppSchema>,
    stores: IntakeStores,
}

impl AppState {
    pub fn new(notifier: Notifier, hospital: HospitalSettings, environment: Environment) -> Self {
        let stores = IntakeStores::default();
        let service = ServiceInfo {
            environment,
            email_enabled: notifier.is_enabled(),
            admin_configured: notifier.admin_configured(),
        };
        let schema = create_schema(stores.clone(), service.email_enabled);

        Self {
            appointments: web::Data::new(IntakeHandler::new(
                stores.appointments.clone(),
                notifier.clone(),
                hospital.clone(),
            )),
            contacts: web::Data::new(IntakeHandler::new(
                stores.contacts.clone(),
                notifier.clone(),
                hospital.clone(),
            )),
            health_packages: web::Data::new(IntakeHandler::new(
                stores.health_packages.clone(),
                notifier,
                hospital,
            )),
            service: web::Data::new(service),
            schema: web::Data::new(schema),
            stores,
        }
    }

    pub fn stores(&self) -> &IntakeStores {
        &self.stores
    }

    /// Registers shared state, the JSON body policy and every `/api` route.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let expose_details = self.service.expose_details();
        // Bodies are parsed as JSON whatever their declared content type
        let json_config = web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(move |err, _req| {
                tracing::info!(error = %err, "Rejected request body");
                let response = IntakeError::Request(err.to_string()).to_response(expose_details);
                InternalError::from_response(err, response).into()
            });

        cfg.app_data(self.appointments.clone())
            .app_data(self.contacts.clone())
            .app_data(self.health_packages.clone())
            .app_data(self.service.clone())
            .app_data(self.schema.clone())
            .app_data(json_config)
            .configure(routes::configure);
    }
}

/// Wraps the actix `Server` together with the port it actually bound.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Given `Settings`:
    /// 1. builds the SMTP transport, or disables mail when credentials are missing
    /// 2. checks the SMTP connection in the background
    /// 3. binds the listener and starts the server with [`run`]
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let mailer = match SmtpMailer::from_settings(&settings.email) {
            Ok(mailer) => mailer,
            Err(e) => {
                tracing::error!(error = %e, "Invalid SMTP configuration; email notifications disabled");
                None
            }
        };

        match &mailer {
            Some(mailer) => {
                actix_web::rt::spawn(verify_smtp(mailer.clone()));
            }
            None => tracing::warn!("SMTP credentials not configured; email notifications disabled"),
        }
        if settings.email.admin_email.is_none() {
            tracing::warn!("ADMIN_EMAIL not set; admin notifications disabled");
        }

        let mailer = mailer.map(|m| Arc::new(m) as Arc<dyn Mailer>);
        let notifier = Notifier::from_settings(mailer, &settings.email);
        let state = AppState::new(
            notifier,
            settings.hospital,
            settings.application.environment,
        );

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))?;
        let port = listener.local_addr()?.port();
        tracing::info!(
            port,
            environment = settings.application.environment.as_str(),
            "Listening"
        );

        let server = run(listener, state, settings.cors.allowed_origins)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Only returns once the server stops.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn verify_smtp(mailer: SmtpMailer) {
    match mailer.verify().await {
        Ok(true) => tracing::info!("SMTP connection verified"),
        Ok(false) => tracing::warn!("SMTP server refused the verification handshake"),
        Err(e) => tracing::error!(error = %e, "SMTP verification failed"),
    }
}

pub fn run(
    listener: TcpListener,
    state: AppState,
    allowed_origins: AllowedOrigins,
) -> Result<Server, std::io::Error> {
    let openapi = ApiDoc::openapi();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::new(allowed_origins.clone()))
            .wrap(TracingLogger::default())
            .configure(|cfg| state.configure(cfg))
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .listen(listener)?
    .run();
    Ok(server)
}
