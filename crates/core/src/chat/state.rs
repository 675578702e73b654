use tokio::sync::oneshot;

use super::{ChatState, Snapshot};
use crate::actor::{Actor, Message};
use crate::model_client::RequestError;
use crate::notification::Notification;

impl ChatState {
    fn submit(&mut self, text: String, handle: &Actor<Self>) {
        if self.request_state.is_busy() {
            debug!("still awaiting a reply, dropped the submission");
            return;
        }
        let Some(msg) = self.conversation.append_user_message(&text) else {
            debug!("blank input, dropped the submission");
            return;
        };
        let prompt = msg.content().to_owned();
        if let Some(on_message) = &self.on_message {
            on_message(msg);
        }

        let began = self.request_state.try_begin();
        debug_assert!(began, "stage was checked above");

        let model_client = self.model_client.clone();
        let handle = handle.clone();
        tokio::spawn(async move {
            let result = model_client.generate(prompt).await;
            handle.send(ReplySettled(result)).ok();
        });
    }

    fn settle(&mut self, result: Result<String, RequestError>) {
        let notification = match result {
            Ok(text) => {
                let msg = self.conversation.append_assistant_message(text);
                if let Some(on_message) = &self.on_message {
                    on_message(msg);
                }
                Notification::reply_received()
            }
            Err(err) => {
                warn!("failed to get a reply: {err}");
                Notification::reply_failed()
            }
        };
        self.request_state.finish();

        if let Some(on_notification) = &self.on_notification {
            on_notification(&notification);
        }
        if let Some(on_idle) = &self.on_idle {
            on_idle();
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            messages: self.conversation.messages().to_vec(),
            request_state: self.request_state,
        }
    }
}

#[derive(Debug)]
pub struct Submit(pub String);

impl Message<ChatState> for Submit {
    fn handle(
        self: Box<Self>,
        state: &mut ChatState,
        handle: &Actor<ChatState>,
    ) {
        state.submit(self.0, handle);
    }
}

#[derive(Debug)]
struct ReplySettled(Result<String, RequestError>);

impl Message<ChatState> for ReplySettled {
    #[inline]
    fn handle(
        self: Box<Self>,
        state: &mut ChatState,
        _handle: &Actor<ChatState>,
    ) {
        state.settle(self.0);
    }
}

#[derive(Debug)]
pub struct TakeSnapshot(pub oneshot::Sender<Snapshot>);

impl Message<ChatState> for TakeSnapshot {
    #[inline]
    fn handle(
        self: Box<Self>,
        state: &mut ChatState,
        _handle: &Actor<ChatState>,
    ) {
        self.0.send(state.snapshot()).ok();
    }
}
