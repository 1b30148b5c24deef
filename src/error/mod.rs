use std::fmt;

use tracing::error;

/// Enum representing errors in the Caseforge system. Conversion failures are always an
/// `InvalidInput`, anything else (configuration, unknown style names) is a `GeneralError`.
#[derive(Clone, PartialEq, Debug)]
pub enum CaseforgeError {
    /// The value handed to a converter can not be turned into a cased string.
    InvalidInput(InvalidInputReason),
    /// A failure outside of input validation, such as reading or parsing the configuration.
    GeneralError { kind: ErrorKind, message: String },
}

impl fmt::Display for CaseforgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KIND: {:?}\nMESSAGE: {}",
            self.get_kind(),
            self.get_message()
        )
    }
}

impl std::error::Error for CaseforgeError {}

impl CaseforgeError {
    /// Checks if the error came from input validation.
    ///
    /// # Returns
    /// `true` if the error is an `InvalidInput`, otherwise `false`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CaseforgeError::InvalidInput(_))
    }

    /// Retrieves the validation reason, if this is an input error.
    pub fn get_reason(&self) -> Option<&InvalidInputReason> {
        match self {
            CaseforgeError::InvalidInput(reason) => Some(reason),
            CaseforgeError::GeneralError { .. } => None,
        }
    }

    /// Retrieves the error message associated with the error.
    ///
    /// # Returns
    /// A `String` representing the error message.
    pub fn get_message(&self) -> String {
        match self {
            CaseforgeError::InvalidInput(reason) => reason.get_message(),
            CaseforgeError::GeneralError { message, .. } => message.clone(),
        }
    }

    /// Retrieves the kind of the error.
    ///
    /// # Returns
    /// An `ErrorKind` indicating the specific category of the error.
    pub fn get_kind(&self) -> ErrorKind {
        match self {
            CaseforgeError::InvalidInput(_) => ErrorKind::InvalidInput,
            CaseforgeError::GeneralError { kind, .. } => kind.clone(),
        }
    }

    /// Raises an input validation error.
    ///
    /// Input errors are returned to the caller without being logged.
    pub fn raise_invalid_input_error(reason: InvalidInputReason) -> Self {
        CaseforgeError::InvalidInput(reason)
    }

    /// Raises a general error, e.g. a configuration file that can not be read.
    ///
    /// # Parameters
    /// - `kind`: The specific kind of error.
    /// - `message`: A message describing the error.
    ///
    /// # Returns
    /// A `CaseforgeError::GeneralError` with the associated details.
    pub fn raise_general_error(kind: ErrorKind, message: &str) -> Self {
        error!(
            "General Error raised. Kind: {:?}, Message: '{}'",
            kind, message
        );

        CaseforgeError::GeneralError {
            kind,
            message: message.to_string(),
        }
    }
}

/// The reasons a value is rejected before any case conversion takes place.
#[derive(Clone, PartialEq, Debug)]
pub enum InvalidInputReason {
    /// The value is present but is not text. Carries the name of the received type.
    NotAString(String),
    /// The value is absent.
    NullOrUndefined,
    /// The text is empty once surrounding whitespace is trimmed.
    EmptyOrWhitespace,
    /// Nothing is left after splitting on delimiters and punctuation.
    NoValidWords,
}

impl InvalidInputReason {
    /// Renders the reason as a human-readable message.
    pub fn get_message(&self) -> String {
        match self {
            InvalidInputReason::NotAString(received) => {
                format!("Input must be a string, received {}", received)
            }
            InvalidInputReason::NullOrUndefined => {
                "Input cannot be null or undefined".to_string()
            }
            InvalidInputReason::EmptyOrWhitespace => {
                "Input cannot be an empty or whitespace-only string".to_string()
            }
            InvalidInputReason::NoValidWords => {
                "Input must contain at least one valid word".to_string()
            }
        }
    }
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_message())
    }
}

/// The `ErrorKind` enum defines the specific kind of error that occurred.
#[derive(Clone, PartialEq, Debug)]
pub enum ErrorKind {
    InvalidInput,
    ConfigFileReadError,
    ConfigFileParsingError,
    UnknownCaseStyle,
}

#[cfg(test)]
mod tests {
    use crate::error::{CaseforgeError, ErrorKind, InvalidInputReason};

    #[test]
    fn test_assert_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<CaseforgeError>();
        assert_sync::<CaseforgeError>();
    }

    #[test]
    fn test_is_invalid_input() {
        let input_error =
            CaseforgeError::raise_invalid_input_error(InvalidInputReason::NullOrUndefined);
        assert!(input_error.is_invalid_input());

        let general_error =
            CaseforgeError::raise_general_error(ErrorKind::ConfigFileReadError, "missing file");
        assert!(!general_error.is_invalid_input());
    }

    #[test]
    fn test_get_reason() {
        let input_error =
            CaseforgeError::raise_invalid_input_error(InvalidInputReason::NoValidWords);
        assert_eq!(
            input_error.get_reason(),
            Some(&InvalidInputReason::NoValidWords)
        );

        let general_error =
            CaseforgeError::raise_general_error(ErrorKind::ConfigFileParsingError, "bad json");
        assert_eq!(general_error.get_reason(), None);
    }

    #[test]
    fn test_get_message() {
        let input_error = CaseforgeError::raise_invalid_input_error(
            InvalidInputReason::NotAString("number".to_string()),
        );
        assert_eq!(
            input_error.get_message(),
            "Input must be a string, received number"
        );

        let general_error =
            CaseforgeError::raise_general_error(ErrorKind::ConfigFileParsingError, "bad json");
        assert_eq!(general_error.get_message(), "bad json");
    }

    #[test]
    fn test_get_kind() {
        let input_error =
            CaseforgeError::raise_invalid_input_error(InvalidInputReason::EmptyOrWhitespace);
        assert_eq!(input_error.get_kind(), ErrorKind::InvalidInput);

        let general_error =
            CaseforgeError::raise_general_error(ErrorKind::ConfigFileReadError, "missing file");
        assert_eq!(general_error.get_kind(), ErrorKind::ConfigFileReadError);
    }

    #[test]
    fn test_display() {
        let input_error =
            CaseforgeError::raise_invalid_input_error(InvalidInputReason::EmptyOrWhitespace);
        assert_eq!(
            format!("{}", input_error),
            "KIND: InvalidInput\nMESSAGE: Input cannot be an empty or whitespace-only string"
        );

        let general_error =
            CaseforgeError::raise_general_error(ErrorKind::ConfigFileReadError, "missing file");
        assert_eq!(
            format!("{}", general_error),
            "KIND: ConfigFileReadError\nMESSAGE: missing file"
        );
    }
}
