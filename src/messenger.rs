//! Outbound notification boundary.
//!
//! The chat platform is an external collaborator; the engine only ever talks
//! to it through the [`Messenger`] trait. The trait abstracts the outbound
//! operations for easier testing with mocks, the adapter layer provides the
//! real implementation.

use std::fmt;

use mockall::automock;

/// Error delivering an outbound message or reaction.
///
/// Delivery failures are never fatal to the engine: they are logged and the
/// current cycle continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    message: String,
}

impl NotifyError {
    /// Creates a delivery error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        NotifyError {
            message: message.into(),
        }
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "notification failed: {}", self.message)
    }
}

impl std::error::Error for NotifyError {}

/// Outbound operations the engine needs from the chat platform.
///
/// Implementations deliver plain text; any platform-specific formatting or
/// embed building happens on the adapter side.
#[automock]
pub trait Messenger {
    /// Sends a message to a channel.
    async fn send_message(&self, channel_id: &str, body: &str) -> Result<(), NotifyError>;

    /// Adds an emoji reaction to a previously received message.
    async fn react(&self, channel_id: &str, message_id: &str, emoji: &str)
    -> Result<(), NotifyError>;

    /// Resolves a player name to a pingable mention string.
    ///
    /// Returns `None` when the user is no longer resolvable; callers log and
    /// skip that player rather than failing the notification.
    async fn resolve_mention(&self, username: &str) -> Option<String>;
}
