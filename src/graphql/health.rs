use crate::graphql::schema::MailStatus;
use crate::models::health::HealthResponse;
use async_graphql::{Context, Object, Result};

/// GraphQL representation of service health status
///
/// Mirrors the REST health response.
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub email_notifications: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
            email_notifications: response.email_notifications,
        }
    }
}

#[Object]
impl Health {
    /// Current service status indicator, `"UP"` while the service answers.
    async fn status(&self) -> &str {
        &self.status
    }

    /// RFC 3339 timestamp of the check, in UTC.
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// `"enabled"` when a mail transport is configured, `"disabled"` otherwise.
    async fn email_notifications(&self) -> &str {
        &self.email_notifications
    }
}

#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self, ctx: &Context<'_>) -> Result<Health> {
        let mail = ctx.data::<MailStatus>()?;
        Ok(Health::from(HealthResponse::up(mail.enabled)))
    }
}
