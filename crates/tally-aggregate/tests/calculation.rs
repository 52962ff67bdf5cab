//! Tests for result calculation and rendering.

use tally_aggregate::{
    CalculationOutcome, INVALID_RESULT_TEXT, calculate_result, calculate_result_with,
    generate_result_text,
};
use tally_model::{CleanOptions, ScalarInput};

fn inputs(values: &[&str]) -> Vec<ScalarInput> {
    values.iter().copied().map(ScalarInput::from).collect()
}

#[test]
fn valid_inputs_render_the_sum() {
    assert_eq!(calculate_result(&inputs(&["1", "2"])), "3");
    assert_eq!(calculate_result(&inputs(&["0.5", "0.25"])), "0.75");
}

#[test]
fn invalid_number_renders_error_message() {
    assert_eq!(
        calculate_result(&inputs(&["1", "abc"])),
        "Invalid number input."
    );
}

#[test]
fn empty_field_renders_configured_message() {
    let options = CleanOptions::new().with_empty_message("Both fields are required");
    assert_eq!(
        calculate_result_with(&inputs(&["", "2"]), &options),
        "Both fields are required"
    );
}

#[test]
fn missing_field_counts_as_zero() {
    let values = vec![ScalarInput::from("4"), ScalarInput::Null];
    assert_eq!(calculate_result(&values), "4");
}

#[test]
fn result_text_for_each_outcome() {
    assert_eq!(generate_result_text(&CalculationOutcome::NoCalc), "");
    assert_eq!(
        generate_result_text(&CalculationOutcome::Invalid),
        INVALID_RESULT_TEXT
    );
    insta::assert_snapshot!(
        generate_result_text(&CalculationOutcome::from_raw("5")),
        @"Result: 5"
    );
}

#[test]
fn extreme_magnitudes_render_in_exponent_form() {
    assert_eq!(calculate_result(&inputs(&["1e21", "0"])), "1e+21");
    assert_eq!(calculate_result(&inputs(&["1e-7", "0"])), "1e-7");
}
