use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::configuration::HospitalSettings;
use crate::intake::{IntakeKind, IntakeMessages, IntakeSchema};
use crate::models::lenient::optional_text;
use crate::models::submission::{Submission, SubmissionStatus};
use crate::templates::{self, RenderedEmail};
use crate::validation::fields::{self, RequiredFields, ValidationError};

/// # Health Package Inquiry Form
///
/// Body of `POST /api/health-packages`. `name`, `email`, `mobile` and `date`
/// are required; `mobile` must be exactly ten digits.
///
/// ```json
/// {
///   "name": "Meera",
///   "email": "meera@example.com",
///   "mobile": "9123456780",
///   "date": "2025-04-12",
///   "packageName": "Executive Health Check",
///   "message": "Is fasting required?"
/// }
/// ```
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthPackagePayload {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPackageRecord {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub date: String,
    pub message: Option<String>,
    pub package_name: Option<String>,
}

impl HealthPackageRecord {
    /// Package name for subjects and headings; inquiries without one are general.
    pub fn package_label(&self) -> &str {
        self.package_name.as_deref().unwrap_or("General")
    }
}

#[derive(Debug)]
pub struct HealthPackage;

impl IntakeSchema for HealthPackage {
    type Payload = HealthPackagePayload;
    type Record = HealthPackageRecord;

    const KIND: IntakeKind = IntakeKind::HealthPackage;
    const ID_FIELD: &'static str = "inquiryId";
    const INITIAL_STATUS: SubmissionStatus = SubmissionStatus::New;
    const MESSAGES: IntakeMessages = IntakeMessages {
        accepted: "Your inquiry has been submitted successfully!",
        saved_noun: "Inquiry",
        api_name: "Health Packages API",
    };

    fn validate(payload: HealthPackagePayload) -> Result<HealthPackageRecord, ValidationError> {
        let mut required = RequiredFields::new();
        let name = required.take("name", payload.name);
        let email = required.take("email", payload.email);
        let mobile = required.take("mobile", payload.mobile);
        let date = required.take("date", payload.date);
        required.finish()?;

        Ok(HealthPackageRecord {
            name,
            email: fields::email("email", &email)?,
            mobile: fields::phone("mobile", &mobile)?,
            date,
            message: fields::optional(payload.message),
            package_name: fields::optional(payload.package_name),
        })
    }

    fn recipient(record: &HealthPackageRecord) -> &str {
        &record.email
    }

    fn admin_notification(
        submission: &Submission<HealthPackageRecord>,
        _hospital: &HospitalSettings,
    ) -> RenderedEmail {
        templates::health_package::admin(submission)
    }

    fn user_confirmation(
        submission: &Submission<HealthPackageRecord>,
        hospital: &HospitalSettings,
    ) -> RenderedEmail {
        templates::health_package::user(submission, hospital)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(mobile: &str) -> HealthPackagePayload {
        HealthPackagePayload {
            name: Some("Meera".to_string()),
            email: Some("Meera@Example.com".to_string()),
            mobile: Some(mobile.to_string()),
            date: Some("2025-04-12".to_string()),
            message: None,
            package_name: Some(" Executive Health Check ".to_string()),
        }
    }

    #[test]
    fn test_short_mobile_is_rejected() {
        let err = HealthPackage::validate(payload("12345")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "mobile",
                reason: "Please provide a valid 10-digit mobile number."
            }
        );
    }

    #[test]
    fn test_missing_mobile_and_date_are_listed_together() {
        let err = HealthPackage::validate(HealthPackagePayload {
            mobile: None,
            date: Some("  ".to_string()),
            ..payload("9123456780")
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["mobile", "date"]));
    }

    #[test]
    fn test_valid_inquiry_is_normalized() {
        let record = HealthPackage::validate(payload(" 9123456780 ")).unwrap();
        assert_eq!(record.email, "meera@example.com");
        assert_eq!(record.mobile, "9123456780");
        assert_eq!(record.package_name.as_deref(), Some("Executive Health Check"));
        assert_eq!(record.package_label(), "Executive Health Check");
    }

    #[test]
    fn test_package_label_defaults_to_general() {
        let record = HealthPackage::validate(HealthPackagePayload {
            package_name: None,
            ..payload("9123456780")
        })
        .unwrap();
        assert_eq!(record.package_label(), "General");
    }

    #[test]
    fn test_camel_case_package_name() {
        let payload: HealthPackagePayload =
            serde_json::from_str(r#"{"packageName": "Cardiac Care", "mobile": 9123456780}"#)
                .unwrap();
        assert_eq!(payload.package_name.as_deref(), Some("Cardiac Care"));
        assert_eq!(payload.mobile.as_deref(), Some("9123456780"));
    }
}
