use actix_web::{HttpResponse, get, post, web};

use super::intake::{self, InquiryAccepted, StatusQuery, StatusResponse};
use crate::error::ErrorBody;
use crate::intake::IntakeHandler;
use crate::models::health_package::{HealthPackage, HealthPackagePayload};
use crate::startup::ServiceInfo;

#[utoipa::path(
    post,
    path = "/api/health-packages",
    tag = "Health Packages",
    request_body = HealthPackagePayload,
    responses(
        (status = 200, description = "Inquiry stored", body = InquiryAccepted),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 500, description = "Submission could not be stored", body = ErrorBody)
    )
)]
#[post("/health-packages")]
pub async fn submit_inquiry(
    handler: web::Data<IntakeHandler<HealthPackage>>,
    service: web::Data<ServiceInfo>,
    payload: web::Json<HealthPackagePayload>,
) -> HttpResponse {
    intake::submit(handler.get_ref(), service.get_ref(), payload.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/api/health-packages",
    tag = "Health Packages",
    params(StatusQuery),
    responses(
        (status = 200, description = "Inquiry count, or the diagnostic view with `action=test`", body = StatusResponse)
    )
)]
#[get("/health-packages")]
pub async fn inquiries_status(
    handler: web::Data<IntakeHandler<HealthPackage>>,
    service: web::Data<ServiceInfo>,
    query: web::Query<StatusQuery>,
) -> HttpResponse {
    intake::status(handler.get_ref(), service.get_ref(), &query.into_inner())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_inquiry).service(inquiries_status);
}
