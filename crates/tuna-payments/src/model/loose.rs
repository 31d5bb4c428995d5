//! Loosely-Typed Wire Values
//!
//! The gateway sends some card fields either as JSON strings or as JSON
//! numbers (`"4111111111111111"` vs `4111111111111111`, `"12"` vs `12`).
//! [`LooseValue`] accepts both and makes the conversion explicit.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value observed on the wire as either a string or a number
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(serde_json::Number),
    Text(String),
}

impl LooseValue {
    /// Textual form; numbers are rendered without quotes
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            LooseValue::Text(s) => Cow::Borrowed(s.as_str()),
            LooseValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Integer form, parsing text if needed
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            LooseValue::Number(n) => n.as_i64(),
            LooseValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, LooseValue::Text(_))
    }
}

impl fmt::Display for LooseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<String> for LooseValue {
    fn from(value: String) -> Self {
        LooseValue::Text(value)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        LooseValue::Text(value.to_string())
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        LooseValue::Number(value.into())
    }
}
