//! APNs protocol constants.

/// Maximum size in bytes of an encoded notification payload.
pub const PAYLOAD_MAXIMUM_SIZE: usize = 2048;

/// Top-level key Apple reserves for the notification dictionary.
pub const APPLE_RESERVED_NAMESPACE: &str = "aps";

/// Default time-to-live of a message (7 days).
pub const DEFAULT_EXPIRY_SECS: i64 = 86_400 * 7;

/// Sound name that plays the system default sound.
pub const DEFAULT_SOUND: &str = "default";

/// Number of hex characters in a device token.
pub const DEVICE_TOKEN_LEN: usize = 64;
