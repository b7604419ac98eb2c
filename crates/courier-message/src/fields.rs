//! Message fields from loosely typed JSON.
//!
//! Callers holding a request body or queued job as a [`Value`] can apply it
//! field by field. Every field is type-checked and rejected with
//! [`MessageError::Validation`] rather than coerced: a badge of `3.5` or
//! `"3"` fails, `3` succeeds. `null` clears an optional field.

use courier_core::constants::DEFAULT_SOUND;
use courier_core::{DeviceToken, MessageError, Result};
use serde_json::{Map, Value};

use crate::alert::Alert;
use crate::message::{Message, checked_property_name};

impl Message {
    /// Build a message from a JSON object of fields.
    ///
    /// Fields are applied in document order with [`Message::apply_field`];
    /// the first invalid field aborts.
    pub fn from_json(fields: &Value) -> Result<Self> {
        let object = fields
            .as_object()
            .ok_or_else(|| MessageError::validation("Message fields must be a JSON object"))?;
        let mut message = Self::new();
        for (name, value) in object {
            message.apply_field(name, value)?;
        }
        Ok(message)
    }

    /// Set one field from a JSON value.
    ///
    /// Recognized names: `text`, `alert`, `badge`, `sound`, `category`,
    /// `contentAvailable`, `expiry`, `customIdentifier`,
    /// `autoAdjustLongPayload`, `recipients`, `custom`. On error the
    /// message is unchanged.
    pub fn apply_field(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "text" => self.text = optional_string(name, value)?,
            "alert" => {
                self.alert = match value {
                    Value::Null => None,
                    other => Some(Alert::try_from(other.clone())?),
                };
            }
            "badge" => {
                self.badge = match value {
                    Value::Null => None,
                    other => Some(integer(other, "badge number")?),
                };
            }
            "sound" => {
                self.sound = match value {
                    Value::Bool(true) => Some(DEFAULT_SOUND.to_string()),
                    other => optional_string(name, other)?,
                };
            }
            "category" => self.category = optional_string(name, value)?,
            "contentAvailable" => {
                self.content_available = value.as_bool().ok_or_else(|| {
                    MessageError::validation(format!("Invalid content-available value '{value}'"))
                })?;
            }
            "expiry" => self.expiry = integer(value, "seconds number")?,
            "customIdentifier" => {
                self.custom_identifier = (!value.is_null()).then(|| value.clone());
            }
            "autoAdjustLongPayload" => {
                self.auto_adjust_long_payload = value.as_bool().ok_or_else(|| {
                    MessageError::validation(format!(
                        "Invalid autoAdjustLongPayload value '{value}'"
                    ))
                })?;
            }
            "recipients" => self.extend_recipients(value)?,
            "custom" => self.extend_custom_properties(value)?,
            other => {
                return Err(MessageError::validation(format!(
                    "Unknown message field '{other}'"
                )));
            }
        }
        Ok(())
    }

    /// Validate every token before appending any.
    fn extend_recipients(&mut self, value: &Value) -> Result<()> {
        let items = value
            .as_array()
            .ok_or_else(|| MessageError::validation("Recipients must be an array"))?;
        let tokens = items
            .iter()
            .map(|item| match item {
                Value::String(s) => DeviceToken::parse(s.as_str()),
                other => Err(MessageError::validation(format!(
                    "Invalid device token '{other}'"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        self.recipients.extend(tokens);
        Ok(())
    }

    /// Validate every name before inserting any.
    fn extend_custom_properties(&mut self, value: &Value) -> Result<()> {
        let object: &Map<String, Value> = value
            .as_object()
            .ok_or_else(|| MessageError::validation("Custom properties must be an object"))?;
        let entries = object
            .iter()
            .map(|(name, value)| -> Result<(String, Value)> {
                Ok((checked_property_name(name)?.to_string(), value.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        for (name, value) in entries {
            let _ = self.custom_properties.insert(name, value);
        }
        Ok(())
    }
}

fn optional_string(field: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(MessageError::validation(format!(
            "Field '{field}' must be a string, got {other}"
        ))),
    }
}

fn integer(value: &Value, what: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| MessageError::validation(format!("Invalid {what} '{value}'")))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
