use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::configuration::HospitalSettings;
use crate::intake::{IntakeKind, IntakeMessages, IntakeSchema};
use crate::models::lenient::optional_text;
use crate::models::submission::{Submission, SubmissionStatus};
use crate::templates::{self, RenderedEmail};
use crate::validation::fields::{self, RequiredFields, ValidationError};

/// # Appointment Booking Form
///
/// Body of `POST /api/appointments`. Every field except `reason` is required.
/// `age` may be sent as a number or a numeric string.
///
/// ```json
/// {
///   "name": "Asha Rao",
///   "email": "asha@example.com",
///   "phone": "9876543210",
///   "age": 34,
///   "gender": "F",
///   "department": "Cardiology",
///   "doctor": "Dr. Mehta",
///   "date": "2025-03-01",
///   "time": "10:00"
/// }
/// ```
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AppointmentPayload {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub doctor: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub gender: String,
    pub department: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub reason: Option<String>,
}

/// Intake schema for appointment bookings.
#[derive(Debug)]
pub struct Appointment;

impl IntakeSchema for Appointment {
    type Payload = AppointmentPayload;
    type Record = AppointmentRecord;

    const KIND: IntakeKind = IntakeKind::Appointment;
    const ID_FIELD: &'static str = "appointmentId";
    const INITIAL_STATUS: SubmissionStatus = SubmissionStatus::Pending;
    const MESSAGES: IntakeMessages = IntakeMessages {
        accepted: "Appointment booked!",
        saved_noun: "Appointment",
        api_name: "Appointments API",
    };

    fn validate(payload: AppointmentPayload) -> Result<AppointmentRecord, ValidationError> {
        let mut required = RequiredFields::new();
        let name = required.take("name", payload.name);
        let email = required.take("email", payload.email);
        let phone = required.take("phone", payload.phone);
        let age = required.take("age", payload.age);
        let gender = required.take("gender", payload.gender);
        let department = required.take("department", payload.department);
        let doctor = required.take("doctor", payload.doctor);
        let date = required.take("date", payload.date);
        let time = required.take("time", payload.time);
        required.finish()?;

        Ok(AppointmentRecord {
            name,
            email: fields::email("email", &email)?,
            phone: fields::phone("phone", &phone)?,
            age: fields::age("age", &age)?,
            gender,
            department,
            doctor,
            date,
            time,
            reason: fields::optional(payload.reason),
        })
    }

    fn recipient(record: &AppointmentRecord) -> &str {
        &record.email
    }

    fn admin_notification(
        submission: &Submission<AppointmentRecord>,
        _hospital: &HospitalSettings,
    ) -> RenderedEmail {
        templates::appointment::admin(submission)
    }

    fn user_confirmation(
        submission: &Submission<AppointmentRecord>,
        hospital: &HospitalSettings,
    ) -> RenderedEmail {
        templates::appointment::patient(submission, hospital)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> AppointmentPayload {
        AppointmentPayload {
            name: Some("Asha Rao".to_string()),
            email: Some("asha@example.com".to_string()),
            phone: Some("9876543210".to_string()),
            age: Some("34".to_string()),
            gender: Some("F".to_string()),
            department: Some("Cardiology".to_string()),
            doctor: Some("Dr. Mehta".to_string()),
            date: Some("2025-03-01".to_string()),
            time: Some("10:00".to_string()),
            reason: None,
        }
    }

    #[test]
    fn test_valid_payload_becomes_record() {
        let record = Appointment::validate(valid_payload()).unwrap();
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.age, 34);
        assert_eq!(record.reason, None);
        assert_eq!(Appointment::recipient(&record), "asha@example.com");
    }

    #[test]
    fn test_fields_are_normalized() {
        let payload = AppointmentPayload {
            name: Some("  Asha Rao ".to_string()),
            email: Some(" ASHA@Example.com ".to_string()),
            reason: Some("  chest pain\n since monday ".to_string()),
            ..valid_payload()
        };
        let record = Appointment::validate(payload).unwrap();
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.email, "asha@example.com");
        assert_eq!(record.reason.as_deref(), Some("chest pain\n since monday"));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let payload = AppointmentPayload {
            gender: None,
            doctor: Some(" ".to_string()),
            time: None,
            ..valid_payload()
        };
        assert_eq!(
            Appointment::validate(payload).unwrap_err(),
            ValidationError::MissingFields(vec!["gender", "doctor", "time"])
        );
    }

    #[test]
    fn test_presence_is_checked_before_format() {
        let payload = AppointmentPayload {
            email: Some("not-an-email".to_string()),
            date: None,
            ..valid_payload()
        };
        assert_eq!(
            Appointment::validate(payload).unwrap_err().fields(),
            vec!["date"]
        );
    }

    #[test]
    fn test_format_errors_name_the_field() {
        let bad_age = AppointmentPayload {
            age: Some("0".to_string()),
            ..valid_payload()
        };
        assert_eq!(Appointment::validate(bad_age).unwrap_err().fields(), vec!["age"]);

        let bad_phone = AppointmentPayload {
            phone: Some("98765".to_string()),
            ..valid_payload()
        };
        assert_eq!(
            Appointment::validate(bad_phone).unwrap_err().fields(),
            vec!["phone"]
        );
    }

    #[test]
    fn test_numeric_age_deserializes() {
        let payload: AppointmentPayload =
            serde_json::from_str(r#"{"name": "Asha", "age": 34}"#).unwrap();
        assert_eq!(payload.age.as_deref(), Some("34"));
        assert!(payload.email.is_none());
    }
}
