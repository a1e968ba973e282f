//! Outgoing mail.
//!
//! [`Mailer`] is the only thing the intake workflow knows about email. The SMTP
//! implementation lives in [`smtp`]; tests use the generated `MockMailer`.

use async_trait::async_trait;
use thiserror::Error;

pub mod smtp;

pub use smtp::SmtpMailer;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("transport did not answer within {0:?}")]
    Timeout(std::time::Duration),
}

/// A fully rendered HTML email ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one message.
    ///
    /// # Errors
    ///
    /// Returns `MailError` when an address is malformed, the message cannot be
    /// built, or the transport rejects it.
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}
