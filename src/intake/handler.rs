use serde::ser::{Serialize, SerializeMap, Serializer};
use std::marker::PhantomData;

use super::dispatch::{Delivery, DispatchReport, Notifier};
use super::store::SubmissionStore;
use super::{IntakeMessages, IntakeSchema};
use crate::configuration::HospitalSettings;
use crate::error::IntakeError;
use crate::models::submission::EmailStatus;

/// # Intake Handler
///
/// Runs one form through the intake workflow:
///
/// 1. validate the payload (presence, then format); failures have no side effects
/// 2. append the normalized record to the store
/// 3. send the admin notification, then the submitter confirmation
/// 4. describe the email outcome in the response
///
/// Once step 2 succeeds the submission counts as accepted, whatever happens to
/// the emails.
pub struct IntakeHandler<S: IntakeSchema> {
    store: SubmissionStore<S::Record>,
    notifier: Notifier,
    hospital: HospitalSettings,
    _schema: PhantomData<fn() -> S>,
}

impl<S: IntakeSchema> std::fmt::Debug for IntakeHandler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeHandler")
            .field("kind", &S::KIND)
            .field("notifier", &self.notifier)
            .finish()
    }
}

impl<S: IntakeSchema> IntakeHandler<S> {
    pub fn new(
        store: SubmissionStore<S::Record>,
        notifier: Notifier,
        hospital: HospitalSettings,
    ) -> Self {
        Self {
            store,
            notifier,
            hospital,
            _schema: PhantomData,
        }
    }

    pub fn store(&self) -> &SubmissionStore<S::Record> {
        &self.store
    }

    #[tracing::instrument(name = "Accepting form submission", skip(self, payload), fields(kind = %S::KIND))]
    pub async fn submit(&self, payload: S::Payload) -> Result<SubmitOutcome, IntakeError> {
        let record = S::validate(payload).inspect_err(|e| {
            tracing::info!(fields = ?e.fields(), "Submission rejected: {e}");
        })?;

        let submission = self.store.append(S::INITIAL_STATUS, record)?;
        tracing::info!(submission_id = %submission.id, "Submission stored");

        let admin = S::admin_notification(&submission, &self.hospital);
        let user = S::user_confirmation(&submission, &self.hospital);
        let report = self
            .notifier
            .dispatch(&submission.id, admin, S::recipient(&submission.fields), user)
            .await;

        Ok(SubmitOutcome::compose(
            submission.id,
            S::ID_FIELD,
            &S::MESSAGES,
            report,
        ))
    }
}

/// Caller-facing result of an accepted submission.
///
/// Serializes as `{success: true, message, <idField>, emailStatus, warning?}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub id: String,
    pub id_field: &'static str,
    pub message: String,
    pub email_status: EmailStatus,
    pub warning: Option<String>,
}

impl SubmitOutcome {
    /// Picks the response for a stored submission from its email outcome.
    ///
    /// Checked in order: no transport, both sent, user sent, user not sent.
    /// An admin failure on its own only shows up as `partial`.
    pub fn compose(
        id: String,
        id_field: &'static str,
        messages: &IntakeMessages,
        report: DispatchReport,
    ) -> Self {
        let accepted = messages.accepted;
        let (email_status, message, warning) = if !report.transport_configured {
            (
                EmailStatus::Disabled,
                format!("{accepted} (Email notifications are currently unavailable)"),
                None,
            )
        } else {
            match (report.admin, report.user) {
                (Delivery::Sent, Delivery::Sent) => (
                    EmailStatus::Sent,
                    format!("{accepted} Confirmation email sent."),
                    None,
                ),
                (_, Delivery::Sent) => (
                    EmailStatus::Partial,
                    format!("{accepted} Confirmation email sent to you."),
                    None,
                ),
                (admin, _) => {
                    let noun = messages.saved_noun;
                    let warning = if admin == Delivery::Failed {
                        format!("{noun} saved but the admin notification and confirmation email failed.")
                    } else {
                        format!("{noun} saved but confirmation email failed.")
                    };
                    (
                        EmailStatus::Failed,
                        format!("{accepted} We will contact you soon."),
                        Some(warning),
                    )
                }
            }
        };

        Self {
            id,
            id_field,
            message,
            email_status,
            warning,
        }
    }
}

impl Serialize for SubmitOutcome {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let len = if self.warning.is_some() { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry(self.id_field, &self.id)?;
        map.serialize_entry("emailStatus", &self.email_status)?;
        if let Some(warning) = &self.warning {
            map.serialize_entry("warning", warning)?;
        }
        map.end()
    }
}
