//! Tests for coercion and sequence cleaning.

use std::collections::BTreeMap;

use proptest::prelude::*;
use tally_model::{CleanOptions, NormalizedNumber, ScalarInput, TallyError};
use tally_normalize::{
    clean_sequence, clean_sequence_with, normalize_checked, normalize_to_number,
};

fn texts(values: &[&str]) -> Vec<ScalarInput> {
    values.iter().copied().map(ScalarInput::from).collect()
}

#[test]
fn clean_converts_numeric_strings() {
    let cleaned = clean_sequence(&texts(&["1", "2"])).unwrap();
    assert_eq!(
        cleaned,
        vec![NormalizedNumber::new(1.0), NormalizedNumber::new(2.0)]
    );
}

#[test]
fn clean_accepts_numbers_directly() {
    let values = vec![ScalarInput::from(1), ScalarInput::from("2")];
    let cleaned = clean_sequence(&values).unwrap();
    assert_eq!(cleaned.len(), 2);
}

#[test]
fn clean_of_empty_sequence_is_empty() {
    assert!(clean_sequence(&[]).unwrap().is_empty());
}

#[test]
fn clean_rejects_non_numeric_string() {
    let err = clean_sequence(&texts(&["1", "invalid"])).unwrap_err();
    assert_eq!(err, TallyError::invalid_input("Invalid number input."));
}

#[test]
fn clean_rejects_blank_string_before_coercion() {
    // Blank text coerces to 0, so only the emptiness check catches it.
    let err = clean_sequence(&texts(&["1", "   "])).unwrap_err();
    assert_eq!(err.to_string(), "Invalid input - must not be empty.");
}

#[test]
fn clean_uses_configured_empty_message() {
    let options = CleanOptions::new().with_empty_message("Enter both numbers");
    let err = clean_sequence_with(&texts(&[""]), &options).unwrap_err();
    assert_eq!(err, TallyError::invalid_input("Enter both numbers"));
}

#[test]
fn clean_stops_at_first_invalid_element() {
    let err = clean_sequence(&texts(&["", "abc"])).unwrap_err();
    assert_eq!(err.to_string(), "Invalid input - must not be empty.");
}

#[test]
fn non_text_elements_skip_the_emptiness_check() {
    // Null is not text, so it is never checked for emptiness and coerces to 0.
    let cleaned = clean_sequence(&[ScalarInput::Null, ScalarInput::from(true)]).unwrap();
    assert_eq!(
        cleaned,
        vec![NormalizedNumber::ZERO, NormalizedNumber::new(1.0)]
    );
}

#[test]
fn clean_rejects_objects_as_invalid_numbers() {
    let err = clean_sequence(&[ScalarInput::Object(BTreeMap::new())]).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn checked_normalization_accepts_numeric_input() {
    assert_eq!(
        normalize_checked(&ScalarInput::from("42")).unwrap(),
        NormalizedNumber::new(42.0)
    );
    assert_eq!(
        normalize_checked(&ScalarInput::from(1.5)).unwrap().value(),
        1.5
    );
}

#[test]
fn checked_normalization_rejects_raw_non_numeric_input() {
    let err = normalize_checked(&ScalarInput::from("abc")).unwrap_err();
    assert_eq!(err, TallyError::invalid_input("Invalid number input."));
    assert!(normalize_checked(&ScalarInput::Absent).is_err());
}

proptest! {
    #[test]
    fn normalization_is_idempotent(n in proptest::num::f64::ANY) {
        let once = normalize_to_number(&ScalarInput::from(n));
        let twice = normalize_to_number(&ScalarInput::from(once));
        prop_assert_eq!(once.is_nan(), twice.is_nan());
        if !once.is_nan() {
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn text_normalization_is_idempotent(s in "\\PC{0,12}") {
        let once = normalize_to_number(&ScalarInput::from(s.as_str()));
        let twice = normalize_to_number(&ScalarInput::from(once));
        prop_assert_eq!(once.is_nan(), twice.is_nan());
        if !once.is_nan() {
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn integer_text_round_trips(n in -1_000_000i64..1_000_000) {
        let number = normalize_to_number(&ScalarInput::from(n.to_string()));
        prop_assert_eq!(number.value(), n as f64);
    }
}
