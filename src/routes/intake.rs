use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::IntakeError;
use crate::intake::{IntakeHandler, IntakeSchema, StoreError};
use crate::models::submission::EmailStatus;
use crate::startup::ServiceInfo;

/// # Appointment Booked
///
/// Returned with 200 once an appointment is stored.
///
/// ```json
/// {
///   "success": true,
///   "message": "Appointment booked! Confirmation email sent.",
///   "appointmentId": "5f0c6f1e-3b0a-4d7e-9a55-0d7a3c1b2e44",
///   "emailStatus": "sent"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentAccepted {
    pub success: bool,
    pub message: String,
    pub appointment_id: String,
    pub email_status: EmailStatus,
    /// Present when the confirmation email could not be delivered.
    pub warning: Option<String>,
}

/// Returned with 200 once a contact message is stored.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
    pub contact_id: String,
    pub email_status: EmailStatus,
    pub warning: Option<String>,
}

/// Returned with 200 once a health package inquiry is stored.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryAccepted {
    pub success: bool,
    pub message: String,
    pub inquiry_id: String,
    pub email_status: EmailStatus,
    pub warning: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// `test` switches to the diagnostic view.
    pub action: Option<String>,
}

impl StatusQuery {
    fn wants_diagnostics(&self) -> bool {
        self.action.as_deref() == Some("test")
    }
}

/// Default answer of `GET` on an intake endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub message: String,
    pub total: usize,
    pub last_submission_at: Option<DateTime<Utc>>,
}

/// Answer of `GET ?action=test`. Reports whether addresses are configured, never
/// the addresses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResponse {
    pub status: String,
    pub timestamp: String,
    pub total: usize,
    pub email_configured: bool,
    pub admin_email: bool,
}

pub async fn submit<S: IntakeSchema>(
    handler: &IntakeHandler<S>,
    service: &ServiceInfo,
    payload: S::Payload,
) -> HttpResponse {
    match handler.submit(payload).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => e.to_response(service.expose_details()),
    }
}

pub fn status<S: IntakeSchema>(
    handler: &IntakeHandler<S>,
    service: &ServiceInfo,
    query: &StatusQuery,
) -> HttpResponse {
    let api = S::MESSAGES.api_name;
    let report = || -> Result<HttpResponse, StoreError> {
        let store = handler.store();
        if query.wants_diagnostics() {
            return Ok(HttpResponse::Ok().json(DiagnosticResponse {
                status: format!("{api} is working"),
                timestamp: Utc::now().to_rfc3339(),
                total: store.len()?,
                email_configured: service.email_enabled,
                admin_email: service.admin_configured,
            }));
        }
        Ok(HttpResponse::Ok().json(StatusResponse {
            message: format!("{api} is working"),
            total: store.len()?,
            last_submission_at: store.last_created_at()?,
        }))
    };

    report().unwrap_or_else(|e| IntakeError::from(e).to_response(service.expose_details()))
}
