use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::intake::StoreError;
use crate::validation::fields::ValidationError;

const INTERNAL_ERROR_MESSAGE: &str = "Failed to process your submission. Please try again later.";
const REQUEST_ERROR_MESSAGE: &str = "Invalid request body. Please send the form as JSON.";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid request body: {0}")]
    Request(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for IntakeError {
    fn from(err: StoreError) -> Self {
        IntakeError::Internal(err.to_string())
    }
}

/// # Error Response
///
/// Body of every 4xx/5xx answer from the intake endpoints.
///
/// ```json
/// {
///   "success": false,
///   "error": "Missing required fields: subject",
///   "fields": ["subject"]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntakeError {
    /// Builds the response, echoing internal detail only when `expose_details` is set.
    pub fn to_response(&self, expose_details: bool) -> HttpResponse {
        let body = match self {
            IntakeError::Validation(err) => ErrorBody {
                success: false,
                error: err.to_string(),
                fields: err.fields().into_iter().map(str::to_string).collect(),
                details: None,
            },
            IntakeError::Request(detail) => ErrorBody {
                success: false,
                error: REQUEST_ERROR_MESSAGE.to_string(),
                fields: Vec::new(),
                details: expose_details.then(|| detail.clone()),
            },
            IntakeError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error while handling submission");
                ErrorBody {
                    success: false,
                    error: INTERNAL_ERROR_MESSAGE.to_string(),
                    fields: Vec::new(),
                    details: expose_details.then(|| detail.clone()),
                }
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl ResponseError for IntakeError {
    fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::Validation(_) | IntakeError::Request(_) => StatusCode::BAD_REQUEST,
            IntakeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_of(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_error_lists_fields() {
        let err = IntakeError::from(ValidationError::MissingFields(vec!["subject"]));
        let response = err.to_response(false);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields: subject");
        assert_eq!(body["fields"], serde_json::json!(["subject"]));
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_internal_error_hides_detail_in_production() {
        let err = IntakeError::from(StoreError::Poisoned);
        let response = err.to_response(false);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_internal_error_shows_detail_in_development() {
        let err = IntakeError::from(StoreError::Poisoned);
        let body = body_of(err.to_response(true)).await;
        assert!(body["details"].as_str().unwrap().contains("poisoned"));
    }

    #[actix_web::test]
    async fn test_request_error_is_bad_request() {
        let err = IntakeError::Request("EOF while parsing".to_string());
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(body["error"], REQUEST_ERROR_MESSAGE);
    }
}
