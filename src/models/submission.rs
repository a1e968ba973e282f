use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Initial state of a stored submission. It is written once and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Pending,
}

/// # Stored Submission
///
/// One accepted form, wrapped with the bookkeeping the store adds: a random id,
/// the initial status, and the moment it was accepted. The intake specific
/// fields are flattened next to them on the wire.
///
/// ```json
/// {
///   "id": "5f0c6f1e-3b0a-4d7e-9a55-0d7a3c1b2e44",
///   "status": "new",
///   "createdAt": "2025-03-01T10:00:00Z",
///   "name": "Ravi",
///   "email": "ravi@example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission<R> {
    pub id: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: R,
}

/// How the notification emails for a submission went, as reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    /// Admin notification and confirmation both delivered.
    Sent,
    /// Confirmation delivered, admin notification not.
    Partial,
    /// Confirmation could not be delivered.
    Failed,
    /// No mail transport configured.
    Disabled,
}
