use actix_web::{HttpResponse, get, post, web};

use super::intake::{self, AppointmentAccepted, StatusQuery, StatusResponse};
use crate::error::ErrorBody;
use crate::intake::IntakeHandler;
use crate::models::appointment::{Appointment, AppointmentPayload};
use crate::startup::ServiceInfo;

/// # Book Appointment
///
/// Stores the booking with status `pending`, then notifies the front desk
/// and the patient. The booking stands even when the emails fail.
///
/// ## Responses
/// - **200 OK**: stored, `appointmentId` and `emailStatus` in the body
/// - **400 Bad Request**: missing or malformed fields
/// - **500 Internal Server Error**: the booking could not be stored
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = AppointmentPayload,
    responses(
        (status = 200, description = "Appointment stored", body = AppointmentAccepted),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 500, description = "Submission could not be stored", body = ErrorBody)
    )
)]
#[post("/appointments")]
pub async fn book_appointment(
    handler: web::Data<IntakeHandler<Appointment>>,
    service: web::Data<ServiceInfo>,
    payload: web::Json<AppointmentPayload>,
) -> HttpResponse {
    intake::submit(handler.get_ref(), service.get_ref(), payload.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    params(StatusQuery),
    responses(
        (status = 200, description = "Booking count, or the diagnostic view with `action=test`", body = StatusResponse)
    )
)]
#[get("/appointments")]
pub async fn appointments_status(
    handler: web::Data<IntakeHandler<Appointment>>,
    service: web::Data<ServiceInfo>,
    query: web::Query<StatusQuery>,
) -> HttpResponse {
    intake::status(handler.get_ref(), service.get_ref(), &query.into_inner())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(book_appointment).service(appointments_status);
}
