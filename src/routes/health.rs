use crate::models::HealthResponse;
use crate::startup::ServiceInfo;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp
/// and whether email notifications are available.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "emailNotifications": "disabled"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health Check",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health(service: web::Data<ServiceInfo>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(service.email_enabled))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Environment;
    use actix_web::{App, test};
    use serde_json::from_str;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let service = ServiceInfo {
            environment: Environment::Production,
            email_enabled: false,
            admin_configured: false,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let health_response: HealthResponse = from_str(body_str).unwrap();

        assert_eq!(health_response.status, "UP");
        assert_eq!(health_response.email_notifications, "disabled");
        assert!(!health_response.timestamp.is_empty());
    }
}
