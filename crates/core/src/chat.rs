mod builder;
mod state;

use tokio::sync::oneshot;

use crate::actor::{Actor, ActorDeadError};
use crate::conversation::{Conversation, Message};
use crate::model_client::ModelClient;
use crate::notification::Notification;
use crate::request_state::RequestState;
pub use builder::ChatBuilder;
use state::{Submit, TakeSnapshot};

type MessageCallback = Box<dyn Fn(&Message) + Send + Sync>;
type NotificationCallback = Box<dyn Fn(&Notification) + Send + Sync>;
type IdleCallback = Box<dyn Fn() + Send + Sync>;

/// The error returned when the chat session is no longer running.
#[derive(Debug, thiserror::Error)]
#[error("the chat session has been closed")]
pub struct ChatClosedError;

impl From<ActorDeadError> for ChatClosedError {
    #[inline]
    fn from(_: ActorDeadError) -> Self {
        Self
    }
}

/// A chat session, which owns the conversation and the request state.
///
/// Both are only ever mutated by the session's own task, in the order the
/// calls to this handle were made. A submission is either accepted, which
/// appends the user message and starts a request, or silently dropped when
/// the text is blank or a reply is still being awaited.
#[derive(Clone)]
pub struct Chat {
    handle: Actor<ChatState>,
}

struct ChatState {
    model_client: ModelClient,
    conversation: Conversation,
    request_state: RequestState,

    on_message: Option<MessageCallback>,
    on_notification: Option<NotificationCallback>,
    on_idle: Option<IdleCallback>,
}

/// A copy of the session state at one point in time.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// All messages in arrival order.
    pub messages: Vec<Message>,
    /// The state of the reply requester.
    pub request_state: RequestState,
}

impl Snapshot {
    /// Returns `true` while a reply is being awaited.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.request_state.is_busy()
    }
}

impl Chat {
    /// Submits a prompt.
    ///
    /// This returns as soon as the submission is queued. Observe the outcome
    /// with the callbacks registered on [`ChatBuilder`], or with
    /// [`Chat::snapshot`].
    pub fn submit<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<(), ChatClosedError> {
        self.handle.send(Submit(text.into()))?;
        Ok(())
    }

    /// Returns a copy of the current state.
    ///
    /// Every submission made before this call has been processed by the time
    /// the snapshot is taken.
    pub async fn snapshot(&self) -> Result<Snapshot, ChatClosedError> {
        let (tx, rx) = oneshot::channel();
        self.handle.send(TakeSnapshot(tx))?;
        rx.await.map_err(|_| ChatClosedError)
    }
}

impl Chat {
    fn spawn_from_builder(builder: ChatBuilder) -> Self {
        let ChatBuilder {
            model_client,
            on_message,
            on_notification,
            on_idle,
        } = builder;

        let state = ChatState {
            model_client,
            conversation: Conversation::new(),
            request_state: Default::default(),
            on_message,
            on_notification,
            on_idle,
        };
        Self {
            handle: Actor::spawn(state, "chat"),
        }
    }
}
