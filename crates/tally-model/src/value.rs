//! Untyped caller input.
//!
//! [`ScalarInput`] models every shape a caller may hand to the normalizer:
//! numbers, numeric or free-form text, booleans, explicit nulls, missing
//! values, and the container shapes that arrive from JSON documents.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value intended to represent a number, before any coercion.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum ScalarInput {
    /// No value was supplied at all.
    #[default]
    Absent,
    /// An explicit null (e.g. a form field that is not present).
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// The only sequence shape; aggregation walks these.
    List(Vec<ScalarInput>),
    Object(BTreeMap<String, ScalarInput>),
}

/// Coarse classification of a [`ScalarInput`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl ScalarInput {
    pub fn kind(&self) -> ValueKind {
        match self {
            ScalarInput::Absent => ValueKind::Undefined,
            ScalarInput::Null => ValueKind::Null,
            ScalarInput::Bool(_) => ValueKind::Boolean,
            ScalarInput::Number(_) => ValueKind::Number,
            ScalarInput::Text(_) => ValueKind::String,
            ScalarInput::List(_) => ValueKind::Array,
            ScalarInput::Object(_) => ValueKind::Object,
        }
    }

    /// Borrow the text when this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarInput::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the elements when this is a sequence.
    pub fn as_sequence(&self) -> Option<&[ScalarInput]> {
        match self {
            ScalarInput::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ScalarInput::Text(_))
    }

    /// Short human-readable rendering for logs and error messages.
    ///
    /// Scalars render as their value, containers by kind only.
    pub fn describe(&self) -> String {
        match self {
            ScalarInput::Absent => "undefined".to_string(),
            ScalarInput::Null => "null".to_string(),
            ScalarInput::Bool(b) => b.to_string(),
            ScalarInput::Number(n) => crate::NormalizedNumber::new(*n).to_string(),
            ScalarInput::Text(text) => format!("{text:?}"),
            ScalarInput::List(items) => format!("array({})", items.len()),
            ScalarInput::Object(_) => "object".to_string(),
        }
    }
}

impl From<serde_json::Value> for ScalarInput {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => ScalarInput::Null,
            Value::Bool(b) => ScalarInput::Bool(b),
            Value::Number(n) => ScalarInput::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => ScalarInput::Text(s),
            Value::Array(items) => ScalarInput::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                ScalarInput::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for ScalarInput {
    fn from(value: &str) -> Self {
        ScalarInput::Text(value.to_string())
    }
}

impl From<String> for ScalarInput {
    fn from(value: String) -> Self {
        ScalarInput::Text(value)
    }
}

impl From<f64> for ScalarInput {
    fn from(value: f64) -> Self {
        ScalarInput::Number(value)
    }
}

impl From<i64> for ScalarInput {
    fn from(value: i64) -> Self {
        ScalarInput::Number(value as f64)
    }
}

impl From<i32> for ScalarInput {
    fn from(value: i32) -> Self {
        ScalarInput::Number(f64::from(value))
    }
}

impl From<bool> for ScalarInput {
    fn from(value: bool) -> Self {
        ScalarInput::Bool(value)
    }
}

impl<T: Into<ScalarInput>> From<Vec<T>> for ScalarInput {
    fn from(values: Vec<T>) -> Self {
        ScalarInput::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ScalarInput>> From<Option<T>> for ScalarInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarInput::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_maps_onto_input_shapes() {
        let input: ScalarInput = json!([1, "2", null, true, {"a": 1}]).into();
        let items = input.as_sequence().expect("array becomes a list");
        assert_eq!(items[0], ScalarInput::Number(1.0));
        assert_eq!(items[1], ScalarInput::Text("2".to_string()));
        assert_eq!(items[2], ScalarInput::Null);
        assert_eq!(items[3], ScalarInput::Bool(true));
        assert_eq!(items[4].kind(), ValueKind::Object);
    }

    #[test]
    fn deserializes_from_json_text() {
        let input: ScalarInput = serde_json::from_str(r#"["1", 2.5]"#).unwrap();
        assert_eq!(input, ScalarInput::from(vec![
            ScalarInput::from("1"),
            ScalarInput::from(2.5),
        ]));
    }

    #[test]
    fn scalars_are_not_sequences() {
        assert!(ScalarInput::from(1).as_sequence().is_none());
        assert!(ScalarInput::from("123").as_sequence().is_none());
        assert!(ScalarInput::Absent.as_sequence().is_none());
    }

    #[test]
    fn default_is_absent() {
        assert_eq!(ScalarInput::default().kind(), ValueKind::Undefined);
    }

    #[test]
    fn describe_keeps_containers_short() {
        assert_eq!(ScalarInput::from("7").describe(), "\"7\"");
        assert_eq!(ScalarInput::from(3).describe(), "3");
        assert_eq!(ScalarInput::from(vec![1, 2]).describe(), "array(2)");
        assert_eq!(ScalarInput::Absent.describe(), "undefined");
    }

    #[test]
    fn missing_option_becomes_null() {
        let missing: Option<&str> = None;
        assert_eq!(ScalarInput::from(missing), ScalarInput::Null);
    }
}
