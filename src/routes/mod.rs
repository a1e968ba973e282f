use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /api/health`: service status plus whether email notifications are on.
pub mod health;

/// # Appointment Booking
///
/// `POST /api/appointments` books, `GET /api/appointments` reports the count.
pub mod appointments;

/// # Contact Messages
///
/// `POST /api/contact` and `GET /api/contact`.
pub mod contact;

/// # Health Package Inquiries
///
/// `POST /api/health-packages` and `GET /api/health-packages`.
pub mod health_packages;

pub mod graphql;

/// Request handling shared by the three intake endpoints.
pub mod intake;


/// # API Route Configuration
///
/// Mounts every endpoint under `/api`.
///
/// ```text
/// GET  /api/health              - Service health status
/// POST /api/appointments        - Book an appointment
/// POST /api/contact             - Send a contact message
/// POST /api/health-packages     - Ask about a health package
/// GET  /api/{form}[?action=test] - Submission count or diagnostics
/// POST /api/graphql             - GraphQL queries
/// GET  /api/playground          - GraphQL Playground
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(appointments::configure_routes)
            .configure(contact::configure_routes)
            .configure(health_packages::configure_routes)
            .configure(graphql::configure_routes),
    );
}
