//! Structured alert values.

use courier_core::{MessageError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `aps.alert` value: a plain string or a dictionary of alert keys
/// (`title`, `body`, `loc-key`, `loc-args`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alert {
    /// Plain alert string.
    Text(String),
    /// Alert dictionary, encoded in insertion order.
    Dictionary(Map<String, Value>),
}

impl Alert {
    /// Alert dictionary with a title and body.
    #[must_use]
    pub fn title_body(title: impl Into<String>, body: impl Into<String>) -> Self {
        let mut dict = Map::new();
        let _ = dict.insert("title".to_string(), Value::String(title.into()));
        let _ = dict.insert("body".to_string(), Value::String(body.into()));
        Self::Dictionary(dict)
    }
}

impl From<String> for Alert {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Alert {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Map<String, Value>> for Alert {
    fn from(dict: Map<String, Value>) -> Self {
        Self::Dictionary(dict)
    }
}

impl TryFrom<Value> for Alert {
    type Error = MessageError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::Text(s)),
            Value::Object(dict) => Ok(Self::Dictionary(dict)),
            other => Err(MessageError::validation(format!(
                "Alert must be string or dictionary, got {other}"
            ))),
        }
    }
}
