//! Form-like input sources.

use std::collections::{BTreeMap, HashMap};

use tally_model::{FormKeys, ScalarInput};

/// Anything that can look up a field by name, like submitted form data.
pub trait FormSource {
    /// Value stored under `key`, or `None` when the field is missing.
    fn get(&self, key: &str) -> Option<ScalarInput>;
}

impl FormSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<ScalarInput> {
        HashMap::get(self, key).map(|v| ScalarInput::from(v.as_str()))
    }
}

impl FormSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<ScalarInput> {
        BTreeMap::get(self, key).map(|v| ScalarInput::from(v.as_str()))
    }
}

impl FormSource for BTreeMap<String, ScalarInput> {
    fn get(&self, key: &str) -> Option<ScalarInput> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Read the two operand fields named by `keys`.
///
/// A missing field becomes [`ScalarInput::Null`].
pub fn extract_entered_values<F: FormSource + ?Sized>(
    form: &F,
    keys: &FormKeys,
) -> Vec<ScalarInput> {
    keys.as_array()
        .into_iter()
        .map(|key| form.get(key).unwrap_or(ScalarInput::Null))
        .collect()
}
