//! The protocol between a chat session and the external text generation
//! service.
//!
//! A chat session sends exactly one prompt per user message and expects
//! exactly one generated text back. This crate pins down the shape of that
//! exchange, so that the session can work with any backend (a remote HTTP
//! function, a local placeholder, a scripted fake for tests) without
//! knowing which one it is talking to.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
