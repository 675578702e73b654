//! Core logic of a chat session: the conversation store, the reply
//! requester and the session actor that ties them together.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod actor;
mod chat;
pub mod conversation;
mod model_client;
mod notification;
mod request_state;

pub use chat::{Chat, ChatBuilder, ChatClosedError, Snapshot};
pub use model_client::{DEFAULT_REQUEST_TIMEOUT, RequestError};
pub use notification::{Notification, NotificationLevel};
pub use request_state::{RequestStage, RequestState};
