//! The push notification message entity.

use std::fmt;

use courier_core::constants::{APPLE_RESERVED_NAMESPACE, DEFAULT_EXPIRY_SECS, DEFAULT_SOUND};
use courier_core::{DeviceToken, MessageError, Result};
use courier_settings::MessageSettings;
use indexmap::IndexMap;
use serde_json::Value;

use crate::alert::Alert;

/// A notification to be delivered to one or more devices.
///
/// Fields are validated as they are set, so a `Message` never holds a
/// malformed device token or a custom property in the reserved `aps`
/// namespace. Call [`Message::payload`] to encode it.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub(crate) recipients: Vec<DeviceToken>,
    pub(crate) text: Option<String>,
    pub(crate) alert: Option<Alert>,
    pub(crate) badge: Option<i64>,
    pub(crate) sound: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) content_available: bool,
    pub(crate) custom_properties: IndexMap<String, Value>,
    pub(crate) expiry: i64,
    pub(crate) custom_identifier: Option<Value>,
    pub(crate) auto_adjust_long_payload: bool,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            recipients: Vec::new(),
            text: None,
            alert: None,
            badge: None,
            sound: None,
            category: None,
            content_available: false,
            custom_properties: IndexMap::new(),
            expiry: DEFAULT_EXPIRY_SECS,
            custom_identifier: None,
            auto_adjust_long_payload: true,
        }
    }
}

impl Message {
    /// Create an empty message with no recipients.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a message addressed to a single device.
    pub fn with_recipient(token: impl Into<String>) -> Result<Self> {
        let mut message = Self::new();
        message.add_recipient(token)?;
        Ok(message)
    }

    /// Create an empty message using configured defaults.
    #[must_use]
    pub fn with_settings(settings: &MessageSettings) -> Self {
        Self {
            expiry: settings.default_expiry_secs,
            auto_adjust_long_payload: settings.auto_adjust_long_payload,
            sound: settings.default_sound.clone(),
            ..Self::default()
        }
    }

    // ── Recipients ──────────────────────────────────────────────────────

    /// Append a device token. Malformed tokens are rejected and the
    /// recipient list is left unchanged.
    pub fn add_recipient(&mut self, token: impl Into<String>) -> Result<()> {
        let token = DeviceToken::parse(token)?;
        self.recipients.push(token);
        Ok(())
    }

    /// Recipient at `index` (0-based).
    pub fn recipient(&self, index: usize) -> Result<&DeviceToken> {
        self.recipients
            .get(index)
            .ok_or_else(|| MessageError::validation(format!("No recipient at index '{index}'")))
    }

    /// All recipients in insertion order.
    pub fn recipients(&self) -> &[DeviceToken] {
        &self.recipients
    }

    /// Number of recipients.
    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }

    // ── Alert ───────────────────────────────────────────────────────────

    /// Alert text shown to the user. Shortened in place by
    /// [`Message::payload`] when the payload is too large.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the alert text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Structured alert. Takes precedence over the alert text when set.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Set the structured alert.
    pub fn set_alert(&mut self, alert: impl Into<Alert>) {
        self.alert = Some(alert.into());
    }

    // ── Badge, sound, category ──────────────────────────────────────────

    /// Badge number. Negative values are kept but not encoded.
    pub fn badge(&self) -> Option<i64> {
        self.badge
    }

    /// Set the number to badge the application icon with.
    pub fn set_badge(&mut self, badge: i64) {
        self.badge = Some(badge);
    }

    /// Sound to play.
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    /// Set the sound to play.
    pub fn set_sound(&mut self, sound: impl Into<String>) {
        self.sound = Some(sound.into());
    }

    /// Play the system default sound.
    pub fn set_default_sound(&mut self) {
        self.set_sound(DEFAULT_SOUND);
    }

    /// Notification category for actionable notifications.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Set the notification category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
    }

    /// Whether the notification wakes the app for a background fetch.
    pub fn content_available(&self) -> bool {
        self.content_available
    }

    /// Set the background fetch flag. `false` is the same as never set.
    pub fn set_content_available(&mut self, content_available: bool) {
        self.content_available = content_available;
    }

    // ── Custom properties ───────────────────────────────────────────────

    /// Set a custom top-level property.
    ///
    /// The name is trimmed before it is stored. The reserved `aps` name is
    /// rejected. Overwriting keeps the property's original position.
    pub fn set_custom_property(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let name = checked_property_name(name)?;
        let _ = self.custom_properties.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Value of the custom property `name` (trimmed before lookup).
    pub fn custom_property(&self, name: &str) -> Result<&Value> {
        self.custom_properties.get(name.trim()).ok_or_else(|| {
            MessageError::validation(format!(
                "No property exists with the specified name '{name}'."
            ))
        })
    }

    /// Custom property names in insertion order.
    pub fn custom_property_names(&self) -> Vec<&str> {
        self.custom_properties.keys().map(String::as_str).collect()
    }

    /// All custom properties in insertion order.
    pub fn custom_properties(&self) -> &IndexMap<String, Value> {
        &self.custom_properties
    }

    /// Name of the first custom property.
    #[deprecated(note = "use `custom_property_names` instead")]
    pub fn first_custom_property_name(&self) -> Option<&str> {
        self.custom_properties.keys().next().map(String::as_str)
    }

    /// Value of the first custom property.
    #[deprecated(note = "use `custom_property` instead")]
    pub fn first_custom_property_value(&self) -> Option<&Value> {
        self.custom_properties.values().next()
    }

    // ── Delivery metadata (not encoded) ─────────────────────────────────

    /// Seconds until the message expires if undelivered.
    pub fn expiry(&self) -> i64 {
        self.expiry
    }

    /// Set the expiry in seconds.
    pub fn set_expiry(&mut self, seconds: i64) {
        self.expiry = seconds;
    }

    /// Caller-supplied identifier for correlating delivery results.
    pub fn custom_identifier(&self) -> Option<&Value> {
        self.custom_identifier.as_ref()
    }

    /// Set the caller-supplied identifier.
    pub fn set_custom_identifier(&mut self, identifier: impl Into<Value>) {
        self.custom_identifier = Some(identifier.into());
    }

    /// Whether oversized payloads shorten the alert text.
    pub fn auto_adjust_long_payload(&self) -> bool {
        self.auto_adjust_long_payload
    }

    /// Enable or disable alert text shortening for oversized payloads.
    pub fn set_auto_adjust_long_payload(&mut self, auto_adjust: bool) {
        self.auto_adjust_long_payload = auto_adjust;
    }
}

/// Trim `name` and reject the reserved namespace.
pub(crate) fn checked_property_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name == APPLE_RESERVED_NAMESPACE {
        return Err(MessageError::validation(format!(
            "Property name '{APPLE_RESERVED_NAMESPACE}' can not be used for custom property."
        )));
    }
    Ok(name)
}

/// Renders the encoded payload, or an empty string if it cannot be encoded.
///
/// Encodes a copy, so any alert shortening is not kept on `self`.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = self.clone().payload().unwrap_or_default();
        f.write_str(&payload)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
