//! Plain-text rendering of chat messages.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use little_chat_core::conversation::{Message, Origin};

/// Returns the short label shown next to a message.
#[inline]
pub fn speaker_label(origin: Origin) -> &'static str {
    match origin {
        Origin::User => "You",
        Origin::Assistant => "AI",
    }
}

/// Formats a timestamp as `HH:MM`.
#[inline]
pub fn format_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    timestamp.format("%H:%M").to_string()
}

/// Renders a message as `[HH:MM] Label: content`, in local time.
pub fn format_message(msg: &Message) -> String {
    let local = msg.timestamp().with_timezone(&Local);
    format!(
        "[{}] {}: {}",
        format_time(&local),
        speaker_label(msg.origin()),
        msg.content()
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use little_chat_core::conversation::{Conversation, WELCOME_MESSAGE};

    use super::*;

    #[test]
    fn test_speaker_label() {
        assert_eq!(speaker_label(Origin::User), "You");
        assert_eq!(speaker_label(Origin::Assistant), "AI");
    }

    #[test]
    fn test_format_time() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 59).unwrap();
        assert_eq!(format_time(&ts), "07:05");
    }

    #[test]
    fn test_format_message() {
        let mut conversation = Conversation::new();
        let welcome = format_message(&conversation.messages()[0]);
        assert!(welcome.starts_with('['));
        assert!(welcome.ends_with(&format!("] AI: {WELCOME_MESSAGE}")));

        let msg = conversation.append_user_message("Hi").unwrap();
        assert!(format_message(msg).ends_with("] You: Hi"));
    }
}
