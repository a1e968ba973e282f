use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailError, Mailer, OutgoingEmail};
use crate::configuration::{EmailSettings, SmtpSecurity};

/// [`Mailer`] backed by an authenticated SMTP relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer").field("host", &self.host).finish()
    }
}

impl SmtpMailer {
    /// Builds a transport from settings.
    ///
    /// Returns `Ok(None)` when credentials are missing: mail is then disabled
    /// rather than broken.
    pub fn from_settings(settings: &EmailSettings) -> Result<Option<Self>, MailError> {
        let Some((user, pass)) = settings.credentials() else {
            return Ok(None);
        };

        let builder = match settings.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|e| MailError::Smtp(e.to_string()))?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                    .map_err(|e| MailError::Smtp(e.to_string()))?
            }
            SmtpSecurity::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            }
        };

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Some(Self {
            transport,
            host: settings.host.clone(),
        }))
    }

    /// Opens a connection and runs the SMTP handshake without sending anything.
    pub async fn verify(&self) -> Result<bool, MailError> {
        self.transport
            .test_connection()
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;
        Ok(())
    }
}

fn build_message(email: OutgoingEmail) -> Result<Message, MailError> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|_| MailError::InvalidAddress(email.from.clone()))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject)
        .header(ContentType::TEXT_HTML)
        .body(email.html)
        .map_err(|e| MailError::Build(e.to_string()))
}
