//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`CourierSettings::default()`]
//! 2. If `~/.courier/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//! 4. Validate the result
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{Result, SettingsError};
use crate::types::CourierSettings;

/// Longest expiry accepted from the environment (one year).
const MAX_EXPIRY_SECS: i64 = 31_536_000;

/// Resolve the path to the settings file (`~/.courier/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".courier").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<CourierSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON or out-of-range values, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<CourierSettings> {
    let mut settings = load_file(path)?;
    apply_env_overrides(&mut settings);
    validate(&settings)?;
    Ok(settings)
}

fn load_file(path: &Path) -> Result<CourierSettings> {
    let defaults = serde_json::to_value(CourierSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Reject values the message layer cannot use.
pub fn validate(settings: &CourierSettings) -> Result<()> {
    if settings.message.default_expiry_secs < 0 {
        return Err(SettingsError::InvalidValue(format!(
            "defaultExpirySecs must be >= 0, got {}",
            settings.message.default_expiry_secs
        )));
    }
    if settings.message.default_sound.as_deref() == Some("") {
        return Err(SettingsError::InvalidValue(
            "defaultSound must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Apply `COURIER_*` environment variable overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut CourierSettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup`.
///
/// Each variable has strict parsing rules:
/// - Integers must be valid and within range
/// - Booleans accept: `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`
/// - Invalid values are ignored with a warning (fall back to file/default)
pub fn apply_overrides(settings: &mut CourierSettings, lookup: impl Fn(&str) -> Option<String>) {
    // ── Message settings ────────────────────────────────────────────
    if let Some(v) = read_i64(&lookup, "COURIER_DEFAULT_EXPIRY", 0, MAX_EXPIRY_SECS) {
        settings.message.default_expiry_secs = v;
    }
    if let Some(v) = read_bool(&lookup, "COURIER_AUTO_ADJUST") {
        settings.message.auto_adjust_long_payload = v;
    }
    if let Some(v) = read_string(&lookup, "COURIER_DEFAULT_SOUND") {
        settings.message.default_sound = Some(v);
    }

    // ── Logging settings ────────────────────────────────────────────
    if let Some(v) = read_string(&lookup, "COURIER_LOG_LEVEL") {
        settings.logging.level = v;
    }
}

// ── Pure parsing functions (testable without env vars) ──────────────────────

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a string as an `i64` within an inclusive range.
pub fn parse_i64_range(val: &str, min: i64, max: i64) -> Option<i64> {
    let n: i64 = val.parse().ok()?;
    (min..=max).contains(&n).then_some(n)
}

// ── Readers (thin wrappers) ─────────────────────────────────────────────────

fn read_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.is_empty())
}

fn read_bool(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    let val = lookup(name)?;
    let result = parse_bool(&val);
    if result.is_none() {
        warn!(key = name, value = %val, "invalid boolean env var, ignoring");
    }
    result
}

fn read_i64(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    min: i64,
    max: i64,
) -> Option<i64> {
    let val = lookup(name)?;
    let result = parse_i64_range(&val, min, max);
    if result.is_none() {
        warn!(key = name, value = %val, "invalid integer env var, ignoring");
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
