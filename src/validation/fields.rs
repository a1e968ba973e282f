use thiserror::Error;

/// Lowest and highest age accepted on an appointment form.
pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 1..=120;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Names of the fields that failed, in the order they were checked.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ValidationError::MissingFields(fields) => fields.clone(),
            ValidationError::InvalidFormat { field, .. } => vec![*field],
        }
    }
}

/// Collects required fields, remembering every one that is absent or blank.
///
/// Values come back trimmed. A missing value comes back empty, which is fine
/// because [`RequiredFields::finish`] rejects the whole form before anything
/// reads it.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self, field: &'static str, value: Option<String>) -> String {
        match optional(value) {
            Some(value) => value,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(self.missing))
        }
    }
}

/// Trims an optional field and drops it when nothing is left.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims and lower-cases an address, then checks it looks like `local@domain.tld`.
pub fn email(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let normalized = value.trim().to_lowercase();
    if is_valid_email(&normalized) {
        Ok(normalized)
    } else {
        Err(ValidationError::InvalidFormat {
            field,
            reason: "Please provide a valid email address.",
        })
    }
}

/// Checks a ten digit phone or mobile number.
pub fn phone(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if is_valid_phone(trimmed) {
        return Ok(trimmed.to_string());
    }
    let reason = if field == "mobile" {
        "Please provide a valid 10-digit mobile number."
    } else {
        "Please provide a valid 10-digit phone number."
    };
    Err(ValidationError::InvalidFormat { field, reason })
}

pub fn age(field: &'static str, value: &str) -> Result<u8, ValidationError> {
    parse_age(value).ok_or(ValidationError::InvalidFormat {
        field,
        reason: "Please provide a valid age between 1 and 120.",
    })
}

/// Accepts addresses shaped like `local@domain.tld`.
///
/// No whitespace anywhere, exactly one `@`, a non-empty local part, and a
/// domain containing a dot with text on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot must have at least one character before and after it
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_age(age: &str) -> Option<u8> {
    age.trim()
        .parse::<u8>()
        .ok()
        .filter(|age| AGE_RANGE.contains(age))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_reports_every_missing_field() {
        let mut required = RequiredFields::new();
        let name = required.take("name", Some("  Ravi ".to_string()));
        required.take("subject", None);
        required.take("message", Some("   ".to_string()));

        assert_eq!(name, "Ravi");
        assert_eq!(
            required.finish(),
            Err(ValidationError::MissingFields(vec!["subject", "message"]))
        );
    }

    #[test]
    fn test_required_fields_pass_when_all_present() {
        let mut required = RequiredFields::new();
        required.take("name", Some("Ravi".to_string()));
        assert!(required.finish().is_ok());
    }

    #[test]
    fn test_missing_fields_message_names_fields() {
        let err = ValidationError::MissingFields(vec!["subject", "date"]);
        assert_eq!(err.to_string(), "Missing required fields: subject, date");
        assert_eq!(err.fields(), vec!["subject", "date"]);
    }

    #[test]
    fn test_optional_trims_and_drops_blank() {
        assert_eq!(optional(Some(" note ".to_string())), Some("note".to_string()));
        assert_eq!(optional(Some("  ".to_string())), None);
        assert_eq!(optional(None), None);
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "asha@example.com",
            "first.last+tag@sub.example.co.in",
            "a@b.c",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "asha@",
            "asha@example",
            "asha@.com",
            "asha@example.",
            "asha@@example.com",
            "asha rao@example.com",
            "asha@exa mple.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_email_is_normalized() {
        assert_eq!(
            email("email", "  Asha@Example.COM ").unwrap(),
            "asha@example.com"
        );
        assert_eq!(
            email("email", "nope").unwrap_err().fields(),
            vec!["email"]
        );
    }

    #[test]
    fn test_phone_numbers() {
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("98765-4321"));
        assert!(!is_valid_phone("९८७६५४३२१०"));

        assert_eq!(phone("phone", " 9876543210 ").unwrap(), "9876543210");
        assert_eq!(
            phone("mobile", "12345").unwrap_err().to_string(),
            "Please provide a valid 10-digit mobile number."
        );
    }

    #[test]
    fn test_age_bounds() {
        assert_eq!(parse_age("1"), Some(1));
        assert_eq!(parse_age(" 34 "), Some(34));
        assert_eq!(parse_age("120"), Some(120));
        assert_eq!(parse_age("0"), None);
        assert_eq!(parse_age("121"), None);
        assert_eq!(parse_age("-4"), None);
        assert_eq!(parse_age("34.5"), None);
        assert_eq!(parse_age("thirty"), None);

        assert_eq!(age("age", "300").unwrap_err().fields(), vec!["age"]);
    }
}
