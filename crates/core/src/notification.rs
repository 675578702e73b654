/// How a notification should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    /// A reply arrived.
    Success,
    /// The reply could not be obtained.
    Error,
}

/// A short, user-facing notice about the outcome of a request.
///
/// Notifications never carry the underlying cause of a failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Notification {
    level: NotificationLevel,
    title: &'static str,
    description: &'static str,
}

impl Notification {
    pub(crate) fn reply_received() -> Self {
        Self {
            level: NotificationLevel::Success,
            title: "Message received",
            description: "Your message has been sent successfully.",
        }
    }

    pub(crate) fn reply_failed() -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Something went wrong",
            description: "Couldn't get a reply. Please try again.",
        }
    }

    /// Returns the level of this notification.
    #[inline]
    pub fn level(&self) -> NotificationLevel {
        self.level
    }

    /// Returns the title.
    #[inline]
    pub fn title(&self) -> &str {
        self.title
    }

    /// Returns the description.
    #[inline]
    pub fn description(&self) -> &str {
        self.description
    }
}
