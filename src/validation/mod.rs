/// Presence and format checks for submitted form fields.
///
/// Presence is checked first for every required field, so a caller learns
/// about all missing fields at once. Format checks run afterwards and stop at
/// the first bad value.
///
/// # Examples
/// ```
/// use hospital_intake::validation::fields::{is_valid_email, is_valid_phone, parse_age};
///
/// assert!(is_valid_email("asha@example.com"));
/// assert!(is_valid_phone("9876543210"));
/// assert!(!is_valid_phone("12345"));
/// assert_eq!(parse_age("34"), Some(34));
/// ```
pub mod fields;
