//! Submission intake shared by every form the site exposes.
//!
//! A form plugs in by implementing [`IntakeSchema`]: it says which payload it
//! accepts, how that payload is validated into a record, and which emails go out
//! once the record is stored. [`IntakeHandler`] runs the workflow itself.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::configuration::HospitalSettings;
use crate::models::submission::{Submission, SubmissionStatus};
use crate::templates::RenderedEmail;
use crate::validation::fields::ValidationError;

pub mod dispatch;
pub mod handler;
pub mod store;

pub use dispatch::{Delivery, DispatchReport, Notifier};
pub use handler::{IntakeHandler, SubmitOutcome};
pub use store::{IntakeStores, StoreError, SubmissionStore};

/// The three kinds of form the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeKind {
    Appointment,
    Contact,
    HealthPackage,
}

impl IntakeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeKind::Appointment => "appointment",
            IntakeKind::Contact => "contact",
            IntakeKind::HealthPackage => "health_package",
        }
    }
}

impl fmt::Display for IntakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-facing wording for one intake type.
#[derive(Debug, Clone, Copy)]
pub struct IntakeMessages {
    /// Opening of every success message, e.g. "Appointment booked!".
    pub accepted: &'static str,
    /// Subject of the "saved but ..." warning, e.g. "Appointment".
    pub saved_noun: &'static str,
    /// Shown by the status endpoint, e.g. "Appointments API".
    pub api_name: &'static str,
}

pub trait IntakeSchema: Send + Sync + 'static {
    type Payload: DeserializeOwned + Send + 'static;
    type Record: Serialize + Clone + Send + Sync + 'static;

    const KIND: IntakeKind;
    /// JSON key carrying the stored submission's id in the response.
    const ID_FIELD: &'static str;
    const INITIAL_STATUS: SubmissionStatus;
    const MESSAGES: IntakeMessages;

    /// Presence checks first, then format checks; returns the normalized record.
    fn validate(payload: Self::Payload) -> Result<Self::Record, ValidationError>;

    /// Address the submitter confirmation goes to.
    fn recipient(record: &Self::Record) -> &str;

    fn admin_notification(
        submission: &Submission<Self::Record>,
        hospital: &HospitalSettings,
    ) -> RenderedEmail;

    fn user_confirmation(
        submission: &Submission<Self::Record>,
        hospital: &HospitalSettings,
    ) -> RenderedEmail;
}
