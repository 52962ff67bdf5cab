use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use tally_aggregate::{
    CalculationOutcome, extract_entered_values, generate_result_text, sum, sum_arguments,
};
use tally_model::{CleanOptions, NormalizedNumber, ScalarInput, TallyOptions};
use tally_normalize::clean_sequence_with;
use tally_validate::validate_text_not_empty;

use crate::cli::{CalcArgs, CleanArgs, InputArgs, ValidateArgs};

/// One cleaned value alongside the input it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRow {
    pub input: ScalarInput,
    pub number: NormalizedNumber,
}

pub fn run_sum(args: &InputArgs) -> Result<NormalizedNumber> {
    let _guard = info_span!("sum").entered();
    let total = match &args.json {
        Some(json) => sum_arguments(&[parse_json(json)?])?,
        None => sum(&text_list(&args.values))?,
    };
    info!(%total, "sum complete");
    Ok(total)
}

pub fn run_clean(args: &CleanArgs, options: &TallyOptions) -> Result<Vec<CleanRow>> {
    let _guard = info_span!("clean").entered();
    let inputs = match &args.input.json {
        Some(json) => match parse_json(json)? {
            ScalarInput::List(items) => items,
            other => return Err(anyhow!("clean expects a JSON array, got {}", other.kind())),
        },
        None => args
            .input
            .values
            .iter()
            .map(|v| ScalarInput::from(v.as_str()))
            .collect(),
    };
    let clean_options = clean_options(&options.clean, args.empty_message.as_deref());
    let numbers = clean_sequence_with(&inputs, &clean_options)?;
    info!(count = numbers.len(), "clean complete");
    Ok(inputs
        .into_iter()
        .zip(numbers)
        .map(|(input, number)| CleanRow { input, number })
        .collect())
}

/// Returns the result text; empty when no fields were submitted.
pub fn run_calc(args: &CalcArgs, options: &TallyOptions) -> Result<String> {
    let _guard = info_span!("calc").entered();
    let mut form = parse_fields(&args.fields)?;
    // Operand flags win over --field entries for the same key.
    let [first, second] = options.form_keys.as_array();
    for (key, value) in [(first, &args.num1), (second, &args.num2)] {
        if let Some(value) = value {
            form.insert(key.to_string(), value.clone());
        }
    }
    let outcome = if form.is_empty() {
        CalculationOutcome::NoCalc
    } else {
        let values = extract_entered_values(&form, &options.form_keys);
        let clean_options = clean_options(&options.clean, args.empty_message.as_deref());
        CalculationOutcome::from_values(&values, &clean_options)
    };
    info!(?outcome, "calc complete");
    Ok(generate_result_text(&outcome))
}

pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let _guard = info_span!("validate").entered();
    validate_text_not_empty(&args.text, args.message.as_deref())?;
    info!(len = args.text.len(), "validate complete");
    Ok(())
}

fn clean_options(base: &CleanOptions, empty_message: Option<&str>) -> CleanOptions {
    match empty_message {
        Some(message) => base.clone().with_empty_message(message),
        None => base.clone(),
    }
}

fn text_list(values: &[String]) -> ScalarInput {
    ScalarInput::List(values.iter().map(|v| ScalarInput::from(v.as_str())).collect())
}

fn parse_json(json: &str) -> Result<ScalarInput> {
    let value: serde_json::Value = serde_json::from_str(json).context("parse --json input")?;
    Ok(value.into())
}

fn parse_fields(fields: &[String]) -> Result<BTreeMap<String, String>> {
    fields
        .iter()
        .map(|field| {
            field
                .split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("field '{field}' must be KEY=VALUE"))
        })
        .collect()
}
