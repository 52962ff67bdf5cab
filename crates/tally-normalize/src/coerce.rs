//! Total numeric coercion.

use tracing::debug;

use tally_model::{NormalizedNumber, Result, ScalarInput};
use tally_validate::validate_number;

use crate::numeric::parse_numeric;

/// Coerce any input to a number. Never fails.
///
/// | input               | result                    |
/// |---------------------|---------------------------|
/// | `Number(n)`         | `n`                       |
/// | `Text` literal      | parsed value              |
/// | blank `Text`        | `0`                       |
/// | other `Text`        | `NaN`                     |
/// | `Bool`              | `1` / `0`                 |
/// | `Null`              | `0`                       |
/// | `Absent`            | `NaN`                     |
/// | `List`, `Object`    | `NaN`                     |
///
/// Feeding the result back in as `ScalarInput::Number` returns it unchanged.
pub fn normalize_to_number(value: &ScalarInput) -> NormalizedNumber {
    let number = match value {
        ScalarInput::Number(n) => *n,
        ScalarInput::Text(text) => parse_numeric(text).unwrap_or(f64::NAN),
        ScalarInput::Bool(true) => 1.0,
        ScalarInput::Bool(false) | ScalarInput::Null => 0.0,
        ScalarInput::Absent | ScalarInput::List(_) | ScalarInput::Object(_) => f64::NAN,
    };
    if number.is_nan() && !matches!(value, ScalarInput::Number(_)) {
        debug!(kind = %value.kind(), "value coerced to NaN");
    }
    NormalizedNumber::new(number)
}

/// Coerce `value` and reject it when the result is `NaN`.
pub fn normalize_checked(value: &ScalarInput) -> Result<NormalizedNumber> {
    let number = normalize_to_number(value);
    validate_number(number)?;
    Ok(number)
}
