//! Validation rules for raw inputs.
//!
//! Validators return `Ok(())` or a [`TallyError`]; they never coerce or
//! rewrite the value they inspect.

use tracing::debug;

use tally_model::error::{DEFAULT_EMPTY_MESSAGE, INVALID_NUMBER_MESSAGE};
use tally_model::{NormalizedNumber, Result, ScalarInput, TallyError};

/// Reject text that is empty once leading and trailing whitespace is removed.
///
/// Only string values can be trimmed. Any other kind yields
/// [`TallyError::MissingTrim`] rather than being silently accepted.
pub fn validate_not_empty(value: &ScalarInput, message: Option<&str>) -> Result<()> {
    match value.as_text() {
        Some(text) => validate_text_not_empty(text, message),
        None => Err(TallyError::MissingTrim {
            found: value.kind(),
        }),
    }
}

/// Typed variant of [`validate_not_empty`] for callers already holding text.
pub fn validate_text_not_empty(text: &str, message: Option<&str>) -> Result<()> {
    if text.trim().is_empty() {
        debug!(len = text.len(), "rejected empty input");
        return Err(TallyError::invalid_input(
            message.unwrap_or(DEFAULT_EMPTY_MESSAGE),
        ));
    }
    Ok(())
}

/// Reject the not-a-number sentinel.
///
/// Takes an already coerced value. Callers holding raw input use
/// `tally_normalize::normalize_checked`, which coerces and then calls this.
pub fn validate_number(value: NormalizedNumber) -> Result<()> {
    if value.is_nan() {
        return Err(TallyError::invalid_input(INVALID_NUMBER_MESSAGE));
    }
    Ok(())
}
