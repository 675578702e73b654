//! An out-of-the-box chat session for the terminal.
//!
//! The crate includes a CLI tool for using in the terminal. And you can also
//! use it as a library to pick a generation backend from the environment and
//! render messages the same way the CLI does.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod config;
pub mod input;
mod placeholder;
pub mod render;

pub use config::{Config, ConfigError};
pub use placeholder::{PLACEHOLDER_REPLY, PlaceholderError, PlaceholderProvider};

/// Re-exports of [`little_chat_core`] crate.
pub mod core {
    pub use little_chat_core::*;
}
