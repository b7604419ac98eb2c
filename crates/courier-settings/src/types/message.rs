//! Message default settings.

use courier_core::constants::DEFAULT_EXPIRY_SECS;
use serde::{Deserialize, Serialize};

/// Defaults applied when a message is built from settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageSettings {
    /// Seconds until an undelivered message expires.
    pub default_expiry_secs: i64,
    /// Shorten the alert text when the payload is over the size ceiling.
    pub auto_adjust_long_payload: bool,
    /// Sound set on every new message, if any.
    pub default_sound: Option<String>,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            default_expiry_secs: DEFAULT_EXPIRY_SECS,
            auto_adjust_long_payload: true,
            default_sound: None,
        }
    }
}
