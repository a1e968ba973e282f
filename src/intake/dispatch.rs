use std::sync::Arc;
use std::time::Duration;

use crate::configuration::EmailSettings;
use crate::mailer::{MailError, Mailer, OutgoingEmail};
use crate::templates::RenderedEmail;

/// What happened to one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
    /// Not attempted because the transport or the address is not configured.
    Skipped,
}

/// Outcome of both notifications for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub transport_configured: bool,
    pub admin: Delivery,
    pub user: Delivery,
}

#[derive(Clone)]
struct Transport {
    mailer: Arc<dyn Mailer>,
    sender: String,
}

/// Best-effort sender of the admin notification and the submitter confirmation.
///
/// Without a transport every delivery is [`Delivery::Skipped`]. Each send is
/// bounded by `timeout` on top of whatever the transport enforces itself.
#[derive(Clone)]
pub struct Notifier {
    transport: Option<Transport>,
    admin_address: Option<String>,
    timeout: Duration,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("enabled", &self.is_enabled())
            .field("admin_configured", &self.admin_configured())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Notifier {
    pub fn disabled() -> Self {
        Self {
            transport: None,
            admin_address: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn new(
        mailer: Arc<dyn Mailer>,
        sender: impl Into<String>,
        admin_address: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport: Some(Transport {
                mailer,
                sender: sender.into(),
            }),
            admin_address,
            timeout,
        }
    }

    /// Wires `mailer` up according to `settings`. A missing sender disables mail.
    pub fn from_settings(mailer: Option<Arc<dyn Mailer>>, settings: &EmailSettings) -> Self {
        match (mailer, settings.sender()) {
            (Some(mailer), Some(sender)) => Self::new(
                mailer,
                sender,
                settings.admin_email.clone(),
                // Slightly above the transport's own limit so its error wins
                settings.timeout + Duration::from_secs(5),
            ),
            _ => Self {
                admin_address: settings.admin_email.clone(),
                ..Self::disabled()
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    pub fn admin_configured(&self) -> bool {
        self.admin_address.is_some()
    }

    /// Sends the admin notification and then the user confirmation.
    ///
    /// Neither failure affects the other; both are logged and reported, never returned.
    pub async fn dispatch(
        &self,
        submission_id: &str,
        admin: RenderedEmail,
        user_address: &str,
        user: RenderedEmail,
    ) -> DispatchReport {
        let Some(transport) = &self.transport else {
            tracing::warn!(
                submission_id,
                "Mail transport not configured; notifications skipped"
            );
            return DispatchReport {
                transport_configured: false,
                admin: Delivery::Skipped,
                user: Delivery::Skipped,
            };
        };

        let admin = match &self.admin_address {
            Some(address) => {
                self.deliver(transport, submission_id, "admin", address, admin)
                    .await
            }
            None => {
                tracing::info!(submission_id, "ADMIN_EMAIL not set; admin notification skipped");
                Delivery::Skipped
            }
        };
        let user = self
            .deliver(transport, submission_id, "user", user_address, user)
            .await;

        DispatchReport {
            transport_configured: true,
            admin,
            user,
        }
    }

    async fn deliver(
        &self,
        transport: &Transport,
        submission_id: &str,
        recipient: &'static str,
        to: &str,
        rendered: RenderedEmail,
    ) -> Delivery {
        let email = OutgoingEmail {
            from: transport.sender.clone(),
            to: to.to_string(),
            subject: rendered.subject,
            html: rendered.html,
        };

        let result = match tokio::time::timeout(self.timeout, transport.mailer.send(email)).await {
            Ok(result) => result,
            Err(_) => Err(MailError::Timeout(self.timeout)),
        };

        match result {
            Ok(()) => {
                tracing::info!(submission_id, recipient, "Notification sent");
                Delivery::Sent
            }
            Err(e) => {
                tracing::error!(submission_id, recipient, error = %e, "Notification failed");
                Delivery::Failed
            }
        }
    }
}
