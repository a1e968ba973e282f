use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers. Served as `/api-docs/openapi.json` and browsable under
/// `/swagger-ui/`.
///
/// # Tags
/// 1. **Health Check**: service monitoring
/// 2. **Appointments**, **Contact**, **Health Packages**: form intake
/// 3. **GraphQL**: read-only query interface (not described here)
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::appointments::book_appointment,
        crate::routes::appointments::appointments_status,
        crate::routes::contact::send_message,
        crate::routes::contact::contact_status,
        crate::routes::health_packages::submit_inquiry,
        crate::routes::health_packages::inquiries_status,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::appointment::AppointmentPayload,
            crate::models::contact::ContactPayload,
            crate::models::health_package::HealthPackagePayload,
            crate::models::submission::EmailStatus,
            crate::routes::intake::AppointmentAccepted,
            crate::routes::intake::ContactAccepted,
            crate::routes::intake::InquiryAccepted,
            crate::routes::intake::StatusResponse,
            crate::routes::intake::DiagnosticResponse,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Appointments", description = "Appointment booking"),
        (name = "Contact", description = "General contact messages"),
        (name = "Health Packages", description = "Health package inquiries"),
        (name = "GraphQL", description = "Read-only GraphQL API at /api/graphql")
    ),
    info(
        description = "Form intake for the hospital website: appointments, contact messages and health package inquiries",
        title = "Hospital Intake API",
        version = "0.4.0",
    )
)]
pub struct ApiDoc;
