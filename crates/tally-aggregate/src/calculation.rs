//! Clean-then-sum calculation and its display text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tally_model::{CleanOptions, ScalarInput};
use tally_normalize::clean_sequence_with;

use crate::sum::sum_numbers;

/// Text shown when the entered values could not be used.
pub const INVALID_RESULT_TEXT: &str = "Invalid input. You must enter valid numbers.";

/// Clean `values` and sum them, rendering either the total or the error message.
pub fn calculate_result(values: &[ScalarInput]) -> String {
    calculate_result_with(values, &CleanOptions::default())
}

pub fn calculate_result_with(values: &[ScalarInput], options: &CleanOptions) -> String {
    match clean_sequence_with(values, options) {
        Ok(numbers) => sum_numbers(&numbers).to_string(),
        Err(err) => {
            debug!(%err, "calculation rejected input");
            err.to_string()
        }
    }
}

/// Outcome of a calculation as consumed by [`generate_result_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationOutcome {
    /// Nothing was calculated yet.
    NoCalc,
    Invalid,
    Value(String),
}

impl CalculationOutcome {
    /// Clean and sum `values`. Any validation failure is [`Self::Invalid`].
    pub fn from_values(values: &[ScalarInput], options: &CleanOptions) -> Self {
        match clean_sequence_with(values, options) {
            Ok(numbers) => Self::Value(sum_numbers(&numbers).to_string()),
            Err(err) => {
                debug!(%err, "calculation marked invalid");
                Self::Invalid
            }
        }
    }

    /// Map the raw markers `"no-calc"` and `"invalid"`; anything else is a value.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "no-calc" => Self::NoCalc,
            "invalid" => Self::Invalid,
            other => Self::Value(other.to_string()),
        }
    }
}

pub fn generate_result_text(outcome: &CalculationOutcome) -> String {
    match outcome {
        CalculationOutcome::NoCalc => String::new(),
        CalculationOutcome::Invalid => INVALID_RESULT_TEXT.to_string(),
        CalculationOutcome::Value(value) => format!("Result: {value}"),
    }
}
