use thiserror::Error;

use crate::value::ValueKind;

/// Message used when an emptiness check fails without a caller-supplied message.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Invalid input - must not be empty.";

/// Message used when a value does not survive numeric coercion.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid number input.";

/// Errors raised while validating, normalizing or aggregating input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    /// A validation rule rejected the input.
    #[error("{message}")]
    InvalidInput { message: String },

    /// Aggregation was asked to walk something that is not a sequence.
    #[error("{found} is not iterable")]
    NotIterable { found: String },

    /// The emptiness check was handed a value that cannot be trimmed.
    #[error("value.trim is not a function (got {found})")]
    MissingTrim { found: ValueKind },
}

impl TallyError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_iterable(found: impl Into<String>) -> Self {
        Self::NotIterable {
            found: found.into(),
        }
    }

    /// Returns true for validation failures (as opposed to structural ones).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_displays_bare_message() {
        let err = TallyError::invalid_input("Please enter a name");
        assert_eq!(err.to_string(), "Please enter a name");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn not_iterable_names_the_input() {
        let err = TallyError::not_iterable("undefined");
        assert_eq!(err.to_string(), "undefined is not iterable");
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn missing_trim_reports_kind() {
        let err = TallyError::MissingTrim {
            found: ValueKind::Number,
        };
        assert_eq!(err.to_string(), "value.trim is not a function (got number)");
    }
}
