use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::configuration::HospitalSettings;
use crate::intake::{IntakeKind, IntakeMessages, IntakeSchema};
use crate::models::lenient::optional_text;
use crate::models::submission::{Submission, SubmissionStatus};
use crate::templates::{self, RenderedEmail};
use crate::validation::fields::{self, RequiredFields, ValidationError};

/// Body of `POST /api/contact`. `phone` is optional but must be ten digits when given.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ContactPayload {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug)]
pub struct Contact;

impl IntakeSchema for Contact {
    type Payload = ContactPayload;
    type Record = ContactRecord;

    const KIND: IntakeKind = IntakeKind::Contact;
    const ID_FIELD: &'static str = "contactId";
    const INITIAL_STATUS: SubmissionStatus = SubmissionStatus::New;
    const MESSAGES: IntakeMessages = IntakeMessages {
        accepted: "Thank you for your message!",
        saved_noun: "Message",
        api_name: "Contact API",
    };

    fn validate(payload: ContactPayload) -> Result<ContactRecord, ValidationError> {
        let mut required = RequiredFields::new();
        let name = required.take("name", payload.name);
        let email = required.take("email", payload.email);
        let subject = required.take("subject", payload.subject);
        let message = required.take("message", payload.message);
        required.finish()?;

        let email = fields::email("email", &email)?;
        let phone = fields::optional(payload.phone)
            .map(|phone| fields::phone("phone", &phone))
            .transpose()?;

        Ok(ContactRecord {
            name,
            email,
            phone,
            subject,
            message,
        })
    }

    fn recipient(record: &ContactRecord) -> &str {
        &record.email
    }

    fn admin_notification(
        submission: &Submission<ContactRecord>,
        _hospital: &HospitalSettings,
    ) -> RenderedEmail {
        templates::contact::admin(submission)
    }

    fn user_confirmation(
        submission: &Submission<ContactRecord>,
        hospital: &HospitalSettings,
    ) -> RenderedEmail {
        templates::contact::user(submission, hospital)
    }
}
