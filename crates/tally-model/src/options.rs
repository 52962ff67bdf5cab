//! Configuration options for normalization and form extraction.

use serde::{Deserialize, Serialize};

use crate::error::DEFAULT_EMPTY_MESSAGE;

/// Options for cleaning a sequence of raw inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Message carried by the error raised for empty or whitespace-only text.
    pub empty_message: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}

/// Field names read from a form-like source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormKeys {
    pub first: String,
    pub second: String,
}

impl Default for FormKeys {
    fn default() -> Self {
        Self {
            first: "num1".to_string(),
            second: "num2".to_string(),
        }
    }
}

impl FormKeys {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Keys in extraction order.
    pub fn as_array(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

/// Top-level options, loadable from a JSON file.
///
/// Every field falls back to its default when missing, so `{}` is a valid
/// options document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyOptions {
    pub clean: CleanOptions,
    pub form_keys: FormKeys,
}

impl TallyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clean(mut self, clean: CleanOptions) -> Self {
        self.clean = clean;
        self
    }

    pub fn with_form_keys(mut self, keys: FormKeys) -> Self {
        self.form_keys = keys;
        self
    }
}
