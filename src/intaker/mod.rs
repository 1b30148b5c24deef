use serde_json::Value;

use crate::{
    error::{CaseforgeError, InvalidInputReason},
    CaseforgeResult,
};

/// An untyped value arriving at the conversion boundary.
///
/// Callers that already hold text can pass `&str` or `String` straight through. Callers that
/// parse request bodies hand over the raw `serde_json::Value` and let the intake decide.
#[derive(Clone, PartialEq, Debug)]
pub enum RawInput {
    Text(String),
    Null,
    /// Any non-text value, tagged with the name of its type.
    Other(&'static str),
}

impl RawInput {
    /// Validates the value and returns the text it carries.
    ///
    /// # Returns
    /// - `Ok(String)` with the original, untrimmed text.
    /// - `Err(CaseforgeError::InvalidInput)` when the value is absent, is not text, or is
    ///   empty once surrounding whitespace is trimmed.
    pub fn into_text(self) -> CaseforgeResult<String> {
        match self {
            RawInput::Null => Err(CaseforgeError::raise_invalid_input_error(
                InvalidInputReason::NullOrUndefined,
            )),
            RawInput::Other(type_name) => Err(CaseforgeError::raise_invalid_input_error(
                InvalidInputReason::NotAString(type_name.to_string()),
            )),
            RawInput::Text(text) if text.trim().is_empty() => Err(
                CaseforgeError::raise_invalid_input_error(InvalidInputReason::EmptyOrWhitespace),
            ),
            RawInput::Text(text) => Ok(text),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        RawInput::Text(value.clone())
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => RawInput::Null,
        }
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawInput::Null,
            Value::String(text) => RawInput::Text(text),
            Value::Bool(_) => RawInput::Other("boolean"),
            Value::Number(_) => RawInput::Other("number"),
            Value::Array(_) => RawInput::Other("array"),
            Value::Object(_) => RawInput::Other("object"),
        }
    }
}

impl From<&Value> for RawInput {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{error::InvalidInputReason, intaker::RawInput};

    #[test]
    fn test_text_passes_through_untrimmed() {
        let text = RawInput::from("  hello world ").into_text().unwrap();

        assert_eq!(text, "  hello world ");
    }

    #[test]
    fn test_none_is_null() {
        let input: Option<&str> = None;
        let err = RawInput::from(input).into_text().unwrap_err();

        assert_eq!(err.get_reason(), Some(&InvalidInputReason::NullOrUndefined));
    }

    #[test]
    fn test_some_is_text() {
        let input = RawInput::from(Some("user_id".to_string()));

        assert_eq!(input, RawInput::Text("user_id".to_string()));
    }

    #[test]
    fn test_whitespace_only_is_rejected() {
        for raw in ["", "   ", "\t\n "] {
            let err = RawInput::from(raw).into_text().unwrap_err();

            assert!(err.is_invalid_input());
            assert_eq!(
                err.get_reason(),
                Some(&InvalidInputReason::EmptyOrWhitespace)
            );
        }
    }

    #[test]
    fn test_json_values_are_tagged() {
        assert_eq!(RawInput::from(json!(null)), RawInput::Null);
        assert_eq!(
            RawInput::from(json!("screen name")),
            RawInput::Text("screen name".to_string())
        );
        assert_eq!(RawInput::from(json!(123)), RawInput::Other("number"));
        assert_eq!(RawInput::from(json!(true)), RawInput::Other("boolean"));
        assert_eq!(RawInput::from(json!(["a"])), RawInput::Other("array"));
        assert_eq!(RawInput::from(json!({"a": 1})), RawInput::Other("object"));
    }

    #[test]
    fn test_non_text_json_is_rejected_with_its_type() {
        let body = json!({ "text": 123 });
        let err = RawInput::from(&body["text"]).into_text().unwrap_err();

        assert_eq!(
            err.get_reason(),
            Some(&InvalidInputReason::NotAString("number".to_string()))
        );
        assert_eq!(err.get_message(), "Input must be a string, received number");
    }

    #[test]
    fn test_missing_json_field_is_null() {
        let body = json!({ "other": "value" });
        let err = RawInput::from(&body["text"]).into_text().unwrap_err();

        assert_eq!(err.get_reason(), Some(&InvalidInputReason::NullOrUndefined));
    }
}
