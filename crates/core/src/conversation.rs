//! Conversation-related types.

use std::fmt::{self, Display};
use std::slice;

use chrono::{DateTime, Utc};

/// The greeting every conversation starts with.
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your digital assistant. How can I help you today?";

/// Identifies a message within its conversation.
///
/// Ids are handed out by a per-conversation counter, so a larger id always
/// means a later message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    /// Returns the raw counter value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg:{}", self.0)
    }
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Typed by the user.
    User,
    /// Produced by the assistant.
    Assistant,
}

/// A single chat entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    content: String,
    origin: Origin,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Returns the id of this message.
    #[inline]
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the text of this message.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns who authored this message.
    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns when this message was created.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Represents a conversation.
///
/// Messages are only ever appended, never edited or removed, so the order of
/// [`Conversation::messages`] is the order in which they arrived.
#[derive(Clone, Debug)]
pub struct Conversation {
    items: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    /// Creates a conversation holding only the assistant's welcome message.
    pub fn new() -> Self {
        let mut conversation = Self {
            items: Vec::new(),
            next_id: 0,
        };
        conversation.push(Origin::Assistant, WELCOME_MESSAGE.to_owned());
        conversation
    }

    /// Appends a user message.
    ///
    /// The text is stored as given. Returns `None` without touching the
    /// conversation if it is empty or whitespace only.
    pub fn append_user_message(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(Origin::User, text.to_owned()))
    }

    /// Appends an assistant message.
    #[inline]
    pub fn append_assistant_message<S: Into<String>>(
        &mut self,
        text: S,
    ) -> &Message {
        self.push(Origin::Assistant, text.into())
    }

    /// Returns all messages in arrival order.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.items
    }

    /// Returns an iterator over the messages in arrival order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Message> {
        self.items.iter()
    }

    /// Returns the most recent message.
    #[inline]
    pub fn last(&self) -> Option<&Message> {
        self.items.last()
    }

    /// Returns the number of messages, including the welcome message.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a conversation built by [`Conversation::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, origin: Origin, content: String) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.items.push(Message {
            id,
            content,
            origin,
            timestamp: Utc::now(),
        });
        &self.items[self.items.len() - 1]
    }
}

impl Default for Conversation {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = slice::Iter<'a, Message>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_starts_with_welcome() {
        let conversation = Conversation::new();
        assert_eq!(conversation.len(), 1);
        let welcome = &conversation.messages()[0];
        assert_eq!(welcome.origin(), Origin::Assistant);
        assert_eq!(welcome.content(), WELCOME_MESSAGE);
        assert!(welcome.timestamp() <= Utc::now());
    }

    #[test]
    fn test_append_user_message() {
        let mut conversation = Conversation::new();
        let msg = conversation.append_user_message("  Hi \n").unwrap();
        assert_eq!(msg.origin(), Origin::User);
        assert_eq!(msg.content(), "  Hi \n");
        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn test_blank_user_message_is_ignored() {
        let mut conversation = Conversation::new();
        assert!(conversation.append_user_message("").is_none());
        assert!(conversation.append_user_message(" \t\n").is_none());
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut conversation = Conversation::new();
        for i in 0..5 {
            conversation.append_user_message(&format!("question {i}"));
            conversation.append_assistant_message(format!("answer {i}"));
        }
        assert_eq!(conversation.len(), 11);

        let ids: Vec<_> = conversation.iter().map(Message::id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());

        let timestamps: Vec<_> =
            conversation.iter().map(Message::timestamp).collect();
        assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_message_id_display() {
        let conversation = Conversation::new();
        assert_eq!(conversation.messages()[0].id().to_string(), "msg:0");
    }
}
