//! Conversation and message models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which side of the conversation authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    /// The signed-in user.
    Me,
    /// The conversation counterpart.
    Other,
}

/// A single message.
///
/// Messages are immutable once created; the per-conversation list only ever
/// grows at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    pub id: String,
    pub conversation_id: String,
    pub text: String,
    pub sender: MessageSender,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    pub sender_name: String,
}

/// Inbox summary of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participant_name: String,
    pub participant_role: String,
    /// Preview of the latest message.
    pub last_message: String,
    /// Timestamp of the latest message, epoch milliseconds.
    pub timestamp: i64,
    /// Unseen-message signal. Zero means fully read.
    pub unread: u32,
    /// Pinned conversations sort ahead of unpinned ones regardless of
    /// recency.
    #[serde(default)]
    pub pinned: bool,
}

/// The whole messaging snapshot: inbox plus message history per
/// conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationsState {
    pub conversations: Vec<Conversation>,
    pub messages_by_conversation: HashMap<String, Vec<ConversationMessage>>,
}

/// Orders the inbox: pinned conversations first, then most recent first
/// within each group.
pub fn sort_conversations(conversations: &mut [Conversation]) {
    conversations.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then(b.timestamp.cmp(&a.timestamp))
    });
}
