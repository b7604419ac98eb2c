//! Validated device token newtype.
//!
//! A [`DeviceToken`] can only be constructed from 64 hexadecimal characters
//! (either case), so a value of this type is always well formed. The
//! original spelling is kept; tokens are not case-normalized.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{MessageError, Result};

static DEVICE_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-f0-9]{64}$").unwrap());

/// APNs device token: 64 hex characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceToken(String);

impl DeviceToken {
    /// Validate and wrap a device token.
    pub fn parse(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if !Self::is_valid(&token) {
            return Err(MessageError::validation(format!(
                "Invalid device token '{token}'"
            )));
        }
        Ok(Self(token))
    }

    /// Whether `token` is a well-formed device token.
    pub fn is_valid(token: &str) -> bool {
        DEVICE_TOKEN_PATTERN.is_match(token)
    }

    /// Return the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::ops::Deref for DeviceToken {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DeviceToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DeviceToken {
    type Error = MessageError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DeviceToken {
    type Error = MessageError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<DeviceToken> for String {
    fn from(token: DeviceToken) -> Self {
        token.0
    }
}

impl std::str::FromStr for DeviceToken {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
