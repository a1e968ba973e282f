use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Operational status of the service with a timestamp and whether email
/// notifications can currently go out.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "emailNotifications": "enabled"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// `"enabled"` or `"disabled"`.
    pub email_notifications: String,
}

impl HealthResponse {
    pub fn up(email_enabled: bool) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            email_notifications: notifications_label(email_enabled).to_string(),
        }
    }
}

pub fn notifications_label(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_response_up() {
        let response = HealthResponse::up(false);

        assert_eq!(response.status, "UP");
        assert_eq!(response.email_notifications, "disabled");

        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }

    #[test]
    fn test_health_response_wire_names() {
        let value = serde_json::to_value(HealthResponse::up(true)).unwrap();
        assert_eq!(value["emailNotifications"], "enabled");
        assert!(value.get("email_notifications").is_none());
    }
}
