//! Payload dictionary assembly.
//!
//! The document always has the reserved `aps` dictionary first, followed by
//! the custom properties as top-level siblings in insertion order. `aps` is a
//! struct, so an `aps` with no fields set serializes as `{}` and never as
//! `[]`.

use courier_core::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::alert::Alert;
use crate::message::Message;

/// The `aps` dictionary. Key order here is the wire order.
#[derive(Serialize)]
struct Aps<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<AlertField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<&'a str>,
    #[serde(rename = "content-available", skip_serializing_if = "Option::is_none")]
    content_available: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum AlertField<'a> {
    Structured(&'a Alert),
    Text(&'a str),
}

#[derive(Serialize)]
struct Document<'a> {
    aps: Aps<'a>,
    #[serde(flatten)]
    custom: &'a IndexMap<String, Value>,
}

impl Message {
    fn document(&self) -> Document<'_> {
        let alert = match (&self.alert, &self.text) {
            (Some(alert), _) => Some(AlertField::Structured(alert)),
            (None, Some(text)) => Some(AlertField::Text(text)),
            (None, None) => None,
        };
        Document {
            aps: Aps {
                alert,
                badge: self.badge.filter(|badge| *badge >= 0),
                sound: self.sound.as_deref(),
                content_available: self.content_available.then_some(1),
                category: self.category.as_deref(),
            },
            custom: &self.custom_properties,
        }
    }

    /// The payload dictionary as a JSON value, without size enforcement.
    pub fn payload_dictionary(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.document())?)
    }

    /// Serialize the payload dictionary.
    ///
    /// `serde_json` writes non-ASCII characters as literal UTF-8 rather than
    /// `\uXXXX` escapes, so the byte length of the result is the wire size.
    pub(crate) fn encode_document(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document())?)
    }
}
