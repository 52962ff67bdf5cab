//! Validated conversion of raw input sequences.

use tracing::debug;

use tally_model::{CleanOptions, NormalizedNumber, Result, ScalarInput};
use tally_validate::validate_not_empty;

use crate::coerce::normalize_checked;

/// Clean a sequence with default options.
///
/// See [`clean_sequence_with`].
pub fn clean_sequence(values: &[ScalarInput]) -> Result<Vec<NormalizedNumber>> {
    clean_sequence_with(values, &CleanOptions::default())
}

/// Convert every element to a number, stopping at the first invalid one.
///
/// Text elements are checked for emptiness before coercion; other kinds go
/// straight to coercion. Every coerced value must then be a number, so a
/// non-numeric string (or an object) fails with `InvalidInput`.
pub fn clean_sequence_with(
    values: &[ScalarInput],
    options: &CleanOptions,
) -> Result<Vec<NormalizedNumber>> {
    let mut numbers = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        if value.is_text() {
            validate_not_empty(value, Some(&options.empty_message))
                .inspect_err(|err| debug!(index, %err, "empty element"))?;
        }
        let number = normalize_checked(value).inspect_err(|err| {
            debug!(index, input = %value.describe(), %err, "non-numeric element");
        })?;
        numbers.push(number);
    }
    Ok(numbers)
}
