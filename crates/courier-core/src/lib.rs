//! # courier-core
//!
//! Foundation types, errors, and utilities for building APNs payloads.
//!
//! This crate provides the shared vocabulary the other courier crates depend on:
//!
//! - **Constants**: payload ceiling, the Apple-reserved `aps` key, defaults
//! - **Errors**: [`errors::MessageError`] via `thiserror`, with machine-readable codes
//! - **Device tokens**: [`token::DeviceToken`], a newtype that only holds well-formed tokens
//! - **Text**: UTF-8–safe truncation used by the payload shrinker
//! - **Logging**: [`logging::init_subscriber`] for the `tracing` stderr subscriber

#![deny(unsafe_code)]

pub mod constants;
pub mod errors;
pub mod logging;
pub mod text;
pub mod token;

pub use errors::{MessageError, Result};
pub use token::DeviceToken;
