use actix_web::{HttpResponse, get, post, web};

use super::intake::{self, ContactAccepted, StatusQuery, StatusResponse};
use crate::error::ErrorBody;
use crate::intake::IntakeHandler;
use crate::models::contact::{Contact, ContactPayload};
use crate::startup::ServiceInfo;

/// # Contact Message
///
/// Accepts a general inquiry. `phone` is optional and only checked when given.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactPayload,
    responses(
        (status = 200, description = "Message stored", body = ContactAccepted),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 500, description = "Submission could not be stored", body = ErrorBody)
    )
)]
#[post("/contact")]
pub async fn send_message(
    handler: web::Data<IntakeHandler<Contact>>,
    service: web::Data<ServiceInfo>,
    payload: web::Json<ContactPayload>,
) -> HttpResponse {
    intake::submit(handler.get_ref(), service.get_ref(), payload.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "Contact",
    params(StatusQuery),
    responses(
        (status = 200, description = "Message count, or the diagnostic view with `action=test`", body = StatusResponse)
    )
)]
#[get("/contact")]
pub async fn contact_status(
    handler: web::Data<IntakeHandler<Contact>>,
    service: web::Data<ServiceInfo>,
    query: web::Query<StatusQuery>,
) -> HttpResponse {
    intake::status(handler.get_ref(), service.get_ref(), &query.into_inner())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(send_message).service(contact_status);
}
