use hospital_intake::configuration::Settings;
use hospital_intake::startup::Application;
use hospital_intake::telemetry::{get_subscriber, init_subscriber};

/// Hospital Intake Service Entry Point
///
/// Loads `.env` when present, installs the `tracing` subscriber, reads
/// settings from the environment and runs the Actix-web server.
///
/// # Endpoints
/// - Forms: `/api/appointments`, `/api/contact`, `/api/health-packages`
/// - Health: `/api/health`
/// - GraphQL: `/api/graphql`, Playground at `/api/playground`
/// - Swagger UI: `/swagger-ui/`, OpenAPI spec at `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let subscriber = get_subscriber("info".into(), std::io::stdout);
    init_subscriber(subscriber).map_err(std::io::Error::other)?;

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    let application = Application::build(settings).await?;
    application.run_until_stopped().await
}
