//! A minimal single-task actor.
//!
//! The state lives inside one spawned task and is only touched by the
//! messages the task pulls out of its mailbox, one at a time. Handles can be
//! cloned and sent anywhere; the task quits once the last handle is gone.

use std::fmt::Debug;
use std::sync::{Arc, Weak};

use tokio::sync::mpsc;
use tracing::Instrument;

/// A type of error which can be returned whenever messages are sent to
/// an actor that has dead.
#[derive(Debug)]
pub struct ActorDeadError;

/// The message that an actor can handle.
pub trait Message<S>: Send + Debug + 'static {
    /// Handles the message with mutable access to the actor's state.
    fn handle(self: Box<Self>, state: &mut S, handle: &Actor<S>);
}

struct Mailbox<S> {
    msg_tx: mpsc::UnboundedSender<Box<dyn Message<S>>>,
}

/// Handle to an actor.
pub struct Actor<S> {
    mailbox: Arc<Mailbox<S>>,
}

impl<S: Send + 'static> Actor<S> {
    /// Spawns a new actor with the specified state.
    pub fn spawn(state: S, label: &str) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mailbox = Arc::new(Mailbox { msg_tx });
        tokio::spawn(
            run_actor(Arc::downgrade(&mailbox), state, msg_rx)
                .instrument(trace_span!("actor", label = label)),
        );
        Self { mailbox }
    }

    /// Sends a message to the actor.
    #[inline]
    pub fn send<M: Message<S>>(&self, msg: M) -> Result<(), ActorDeadError> {
        self.mailbox
            .msg_tx
            .send(Box::new(msg))
            .map_err(|_| ActorDeadError)
    }
}

impl<S> Clone for Actor<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            mailbox: Arc::clone(&self.mailbox),
        }
    }
}

async fn run_actor<S: Send + 'static>(
    mailbox: Weak<Mailbox<S>>,
    mut state: S,
    mut msg_rx: mpsc::UnboundedReceiver<Box<dyn Message<S>>>,
) {
    debug!("started");
    loop {
        let Some(msg) = msg_rx.recv().await else {
            break;
        };
        trace!("received message: {msg:?}");

        let Some(mailbox) = mailbox.upgrade() else {
            warn!("last handle has been dropped, discard the message");
            break;
        };
        trace_span!("proc msg").in_scope(|| {
            msg.handle(&mut state, &Actor { mailbox });
            trace!("finished");
        });
    }
    debug!("will terminate");
}

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use super::*;

    #[derive(Default)]
    struct Counter {
        value: u32,
    }

    #[derive(Debug)]
    struct Add(u32);

    impl Message<Counter> for Add {
        fn handle(self: Box<Self>, state: &mut Counter, _: &Actor<Counter>) {
            state.value += self.0;
        }
    }

    #[derive(Debug)]
    struct Get(oneshot::Sender<u32>);

    impl Message<Counter> for Get {
        fn handle(self: Box<Self>, state: &mut Counter, _: &Actor<Counter>) {
            self.0.send(state.value).ok();
        }
    }

    #[tokio::test]
    async fn test_send_message() {
        let actor = Actor::spawn(Counter::default(), "counter");
        actor.send(Add(40)).unwrap();
        actor.clone().send(Add(2)).unwrap();

        let (tx, rx) = oneshot::channel();
        actor.send(Get(tx)).unwrap();
        assert_eq!(rx.await.unwrap(), 42);
    }
}
