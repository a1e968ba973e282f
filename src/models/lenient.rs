use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a form field that browsers may send as a string or as a number.
///
/// `null` and an absent key both become `None`; numbers keep their JSON
/// spelling. Booleans, arrays and objects are rejected as a malformed body.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "optional_text")]
        age: Option<String>,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let form: Form = serde_json::from_str(r#"{"age": "34"}"#).unwrap();
        assert_eq!(form.age.as_deref(), Some("34"));

        let form: Form = serde_json::from_str(r#"{"age": 34}"#).unwrap();
        assert_eq!(form.age.as_deref(), Some("34"));
    }

    #[test]
    fn test_null_and_absent_are_none() {
        let form: Form = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert!(form.age.is_none());

        let form: Form = serde_json::from_str(r#"{}"#).unwrap();
        assert!(form.age.is_none());
    }

    #[test]
    fn test_rejects_structured_values() {
        assert!(serde_json::from_str::<Form>(r#"{"age": true}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"age": [34]}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"age": {"years": 34}}"#).is_err());
    }
}
