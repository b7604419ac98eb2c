//! # courier-message
//!
//! The push notification [`Message`]: recipients, validated fields, and the
//! encoder that turns them into an APNs JSON payload of at most
//! [`PAYLOAD_MAXIMUM_SIZE`] bytes.
//!
//! ```no_run
//! use courier_message::Message;
//!
//! let mut message = Message::with_recipient("a".repeat(64))?;
//! message.set_text("Hi");
//! message.set_badge(5);
//! message.set_default_sound();
//! assert_eq!(
//!     message.payload()?,
//!     r#"{"aps":{"alert":"Hi","badge":5,"sound":"default"}}"#
//! );
//! # Ok::<(), courier_core::MessageError>(())
//! ```
//!
//! When the document is too large and auto-adjustment is on (the default),
//! [`Message::payload`] drops trailing characters from the alert text until
//! the document fits, storing the shortened text on the message.

#![deny(unsafe_code)]

pub mod alert;
mod encode;
mod fields;
pub mod message;
mod payload;

pub use alert::Alert;
pub use courier_core::constants::{APPLE_RESERVED_NAMESPACE, PAYLOAD_MAXIMUM_SIZE};
pub use courier_core::{DeviceToken, MessageError, Result};
pub use message::Message;
