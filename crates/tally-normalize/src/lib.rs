//! Normalization of raw inputs into numbers.
//!
//! - **numeric**: parsing of numeric text literals
//! - **coerce**: total coercion of any [`ScalarInput`] to a [`NormalizedNumber`]
//! - **clean**: validated conversion of a whole sequence
//!
//! Coercion never fails; it degrades to [`NormalizedNumber::NAN`]. Cleaning
//! is the strict path and returns a [`TallyError`](tally_model::TallyError)
//! at the first element that does not pass validation.
//!
//! [`ScalarInput`]: tally_model::ScalarInput
//! [`NormalizedNumber`]: tally_model::NormalizedNumber
//! [`NormalizedNumber::NAN`]: tally_model::NormalizedNumber::NAN

pub mod clean;
pub mod coerce;
pub mod numeric;

pub use clean::{clean_sequence, clean_sequence_with};
pub use coerce::{normalize_checked, normalize_to_number};
pub use numeric::{is_numeric, parse_numeric};
