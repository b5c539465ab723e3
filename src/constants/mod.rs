//! Application constants module.
//!
//! Centralizes the message strings used in API responses.

pub mod messages;

pub use messages::*;
