//! # courier-settings
//!
//! Layered defaults for courier messages.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`CourierSettings::default()`]
//! 2. **User file** — `~/.courier/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `COURIER_*` overrides (highest priority)
//!
//! The payload size ceiling is a protocol constant and is not configurable.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;

use std::sync::OnceLock;

/// Global settings singleton.
static SETTINGS: OnceLock<CourierSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.courier/settings.json` with env var
/// overrides. If loading fails, logs the error and returns compiled defaults.
pub fn get_settings() -> &'static CourierSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            CourierSettings::default()
        })
    })
}

/// Initialize the global settings with a specific value.
///
/// Returns `Err(settings)` if the global was already initialized.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: CourierSettings) -> std::result::Result<(), CourierSettings> {
    SETTINGS.set(settings)
}

/// Install the stderr tracing subscriber described by `settings.logging`.
pub fn init_logging(settings: &CourierSettings) {
    match settings.logging.format {
        LogFormat::Compact => courier_core::logging::init_subscriber(&settings.logging.level),
        LogFormat::Json => courier_core::logging::init_json_subscriber(&settings.logging.level),
    }
}
