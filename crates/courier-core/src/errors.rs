//! Error types for message construction and encoding.
//!
//! Every fallible operation on a message returns [`MessageError`]:
//!
//! - [`MessageError::Validation`]: a setter rejected its input; the message is unchanged
//! - [`MessageError::PayloadTooLarge`]: the encoded document does not fit the ceiling
//! - [`MessageError::Serialization`]: `serde_json` failed to encode a value

use thiserror::Error;

/// Machine-readable code for validation failures.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Machine-readable code for oversized payloads.
pub const PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";
/// Machine-readable code for serializer failures.
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Errors raised while building or encoding a message.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Input rejected by a setter or accessor.
    #[error("{message}")]
    Validation {
        /// Description of what is wrong.
        message: String,
    },

    /// Encoded payload exceeds the size ceiling.
    #[error(
        "JSON payload is too long: {size} bytes. Maximum size is {max} bytes{}",
        not_adjustable_suffix(.adjustable)
    )]
    PayloadTooLarge {
        /// Actual encoded size in bytes.
        size: usize,
        /// Ceiling in bytes.
        max: usize,
        /// Whether auto-adjustment was enabled but could not shorten the text enough.
        adjustable: bool,
    },

    /// The serializer failed.
    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MessageError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => VALIDATION_ERROR,
            Self::PayloadTooLarge { .. } => PAYLOAD_TOO_LARGE,
            Self::Serialization(_) => SERIALIZATION_ERROR,
        }
    }

    /// Whether this error came from input validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn not_adjustable_suffix(adjustable: &bool) -> &'static str {
    if *adjustable {
        ". The message text can not be auto-adjusted."
    } else {
        ""
    }
}

/// Result type for message operations.
pub type Result<T> = std::result::Result<T, MessageError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
