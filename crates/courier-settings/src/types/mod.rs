//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` to match the JSON
//! settings file. Each type implements [`Default`] with production default
//! values, and `#[serde(default)]` lets partial files fill in the rest.

mod logging;
mod message;

pub use logging::*;
pub use message::*;

use serde::{Deserialize, Serialize};

/// Root settings type.
///
/// Loaded from `~/.courier/settings.json` with defaults applied for
/// missing fields. Environment variables can override specific values.
///
/// # JSON Format
///
/// ```json
/// {
///   "message": { "defaultExpirySecs": 3600, "defaultSound": "chime.caf" },
///   "logging": { "level": "debug" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourierSettings {
    /// Defaults applied to newly built messages.
    pub message: MessageSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(CourierSettings::default()).unwrap();
        assert_eq!(json["message"]["defaultExpirySecs"], 604_800);
        assert_eq!(json["message"]["autoAdjustLongPayload"], true);
        assert!(json["message"]["defaultSound"].is_null());
        assert_eq!(json["logging"]["level"], "warn");
        assert_eq!(json["logging"]["format"], "compact");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: CourierSettings =
            serde_json::from_str(r#"{"message": {"defaultSound": "chime.caf"}}"#).unwrap();
        assert_eq!(settings.message.default_sound.as_deref(), Some("chime.caf"));
        assert_eq!(settings.message.default_expiry_secs, 604_800);
        assert_eq!(settings.logging, LoggingSettings::default());
    }
}
