//! Aggregation of normalized inputs.
//!
//! This crate provides:
//! - **sum**: left-to-right summation with NaN propagation
//! - **form**: extraction of entered operands from form-like sources
//! - **calculation**: clean-then-sum with user-facing result text
//!
//! # Example
//!
//! ```
//! use tally_aggregate::sum;
//! use tally_model::ScalarInput;
//!
//! let values = ScalarInput::from(vec!["1", "2", "3"]);
//! assert_eq!(sum(&values).unwrap().value(), 6.0);
//! ```

pub mod calculation;
pub mod form;
pub mod sum;

pub use calculation::{
    CalculationOutcome, INVALID_RESULT_TEXT, calculate_result, calculate_result_with,
    generate_result_text,
};
pub use form::{FormSource, extract_entered_values};
pub use sum::{sum, sum_arguments, sum_numbers};
