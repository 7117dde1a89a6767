//! Update envelope delivered by the feed.

use super::message::Message;

/// One entry from the update feed.
#[derive(Debug, Clone)]
pub struct Update {
    pub id: u32,
    pub kind: UpdateKind,
}

/// Payload of an update. Only new messages are dispatched.
#[derive(Debug, Clone)]
pub enum UpdateKind {
    Message(Message),
    /// Edited messages, callback queries, member changes and anything else.
    Other,
}

impl Update {
    /// Returns the message when this update carries a new message.
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(message) => Some(message),
            UpdateKind::Other => None,
        }
    }
}
