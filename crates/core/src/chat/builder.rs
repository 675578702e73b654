use std::time::Duration;

use little_chat_model::ModelProvider;

use super::Chat;
use crate::conversation::Message;
use crate::model_client::ModelClient;
use crate::notification::Notification;

/// [`Chat`] builder.
pub struct ChatBuilder {
    pub(crate) model_client: ModelClient,
    pub(crate) on_message: Option<super::MessageCallback>,
    pub(crate) on_notification: Option<super::NotificationCallback>,
    pub(crate) on_idle: Option<super::IdleCallback>,
}

impl ChatBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            on_message: None,
            on_notification: None,
            on_idle: None,
        }
    }

    /// Bounds how long a request may stay in flight.
    ///
    /// Defaults to [`crate::DEFAULT_REQUEST_TIMEOUT`].
    #[inline]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.model_client = self.model_client.with_timeout(timeout);
        self
    }

    /// Attaches a callback to be invoked whenever a message is appended.
    ///
    /// The welcome message is part of the initial conversation and is not
    /// reported.
    #[inline]
    pub fn on_message(
        mut self,
        on_message: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.on_message = Some(Box::new(on_message));
        self
    }

    /// Attaches a callback to be invoked when a request settles.
    #[inline]
    pub fn on_notification(
        mut self,
        on_notification: impl Fn(&Notification) + Send + Sync + 'static,
    ) -> Self {
        self.on_notification = Some(Box::new(on_notification));
        self
    }

    /// Attaches a callback to be invoked when the session becomes idle
    /// again after a request.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.on_idle = Some(Box::new(on_idle));
        self
    }

    /// Builds the session.
    ///
    /// Must be called within a Tokio runtime.
    #[inline]
    pub fn build(self) -> Chat {
        Chat::spawn_from_builder(self)
    }
}
