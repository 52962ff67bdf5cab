//! Summation.

use tracing::{debug, warn};

use tally_model::{NormalizedNumber, Result, ScalarInput, TallyError};
use tally_normalize::normalize_to_number;

/// Sum a sequence input, coercing each element.
///
/// Fails with [`TallyError::NotIterable`] when `values` is not a list. An
/// empty list sums to `0`. Elements that coerce to `NaN` make the whole
/// result `NaN`; that is not an error.
pub fn sum(values: &ScalarInput) -> Result<NormalizedNumber> {
    let Some(items) = values.as_sequence() else {
        return Err(TallyError::not_iterable(values.describe()));
    };
    let total: NormalizedNumber = items.iter().map(normalize_to_number).sum();
    if total.is_nan() {
        warn!(len = items.len(), "sum is NaN");
    } else {
        debug!(len = items.len(), %total, "summed sequence");
    }
    Ok(total)
}

/// Sum a positional argument list that must hold exactly one sequence.
pub fn sum_arguments(args: &[ScalarInput]) -> Result<NormalizedNumber> {
    match args {
        [values] => sum(values),
        [] => Err(TallyError::not_iterable(ScalarInput::Absent.describe())),
        _ => Err(TallyError::not_iterable(format!(
            "argument list of {} values",
            args.len()
        ))),
    }
}

/// Sum numbers that have already been cleaned.
pub fn sum_numbers(numbers: &[NormalizedNumber]) -> NormalizedNumber {
    numbers.iter().copied().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_plain_numbers() {
        let values = ScalarInput::from(vec![1, 2, 3]);
        assert_eq!(sum(&values).unwrap().value(), 6.0);
    }

    #[test]
    fn lone_text_is_not_iterable() {
        let err = sum(&ScalarInput::from("123")).unwrap_err();
        assert_eq!(err.to_string(), "\"123\" is not iterable");
    }

    #[test]
    fn sum_numbers_of_empty_slice_is_zero() {
        assert_eq!(sum_numbers(&[]), NormalizedNumber::ZERO);
    }
}
