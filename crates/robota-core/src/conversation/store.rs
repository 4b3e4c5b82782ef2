//! Conversation store.
//!
//! Drives the inbox: opening a chat clears its unread signal, sending a
//! message appends to the history and refreshes the conversation summary,
//! pinning keeps a chat at the top. Every snapshot leaves this store with the
//! inbox already sorted (pinned first, then most recent first).

use super::model::{
    Conversation, ConversationMessage, ConversationsState, MessageSender, sort_conversations,
};
use super::seed;
use crate::storage::KeyValueStore;
use crate::store::{SubscriberSet, Subscription};
use std::sync::RwLock;
use uuid::Uuid;

const CONVERSATIONS_KEY: &str = "conversationsState";

/// Display name for messages authored by the signed-in user.
const SELF_SENDER_NAME: &str = "Я";

/// Store for conversations and their message histories.
pub struct ConversationStore {
    state: RwLock<ConversationsState>,
    subscribers: SubscriberSet<ConversationsState>,
    storage: KeyValueStore,
}

impl ConversationStore {
    /// Creates the store, loading the persisted snapshot or the demo seed.
    pub fn new(storage: KeyValueStore) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let mut initial = storage.get_json(CONVERSATIONS_KEY, seed::seed_state(now));
        sort_conversations(&mut initial.conversations);

        Self {
            state: RwLock::new(initial),
            subscribers: SubscriberSet::new(),
            storage,
        }
    }

    /// Current inbox, pinned-first then most recent first.
    pub fn conversations(&self) -> Vec<Conversation> {
        self.state.read().unwrap().conversations.clone()
    }

    /// Full snapshot of conversations and message histories.
    pub fn snapshot(&self) -> ConversationsState {
        self.state.read().unwrap().clone()
    }

    /// Message history for `conversation_id` in chronological order, empty
    /// for an unknown id.
    pub fn messages_for(&self, conversation_id: &str) -> Vec<ConversationMessage> {
        self.state
            .read()
            .unwrap()
            .messages_by_conversation
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Sum of unread counters across the inbox.
    pub fn unread_count(&self) -> u32 {
        self.state
            .read()
            .unwrap()
            .conversations
            .iter()
            .map(|conversation| conversation.unread)
            .sum()
    }

    /// Registers a listener, invoking it once with the current snapshot.
    pub fn subscribe(
        &self,
        listener: impl Fn(&ConversationsState) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribers.subscribe_with(listener, &self.snapshot())
    }

    /// Marks a conversation as read. No-op for an unknown id.
    pub fn open_conversation(&self, conversation_id: &str) {
        self.update_conversation(conversation_id, |conversation| {
            conversation.unread = 0;
        });
    }

    /// Flips a conversation's pinned flag. No-op for an unknown id.
    pub fn toggle_pin(&self, conversation_id: &str) {
        self.update_conversation(conversation_id, |conversation| {
            conversation.pinned = !conversation.pinned;
        });
    }

    /// Raises the unread signal without inventing a count: an already-unread
    /// conversation keeps its counter, a read one goes to 1.
    pub fn mark_unread(&self, conversation_id: &str) {
        self.update_conversation(conversation_id, |conversation| {
            conversation.unread = conversation.unread.max(1);
        });
    }

    /// Sends a message from the signed-in user.
    ///
    /// The text is trimmed; nothing happens for blank input or an unknown
    /// conversation id. Otherwise the message is appended to the history and
    /// the conversation summary takes the new text, timestamp and a cleared
    /// unread counter.
    pub fn send_message(&self, conversation_id: &str, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        let snapshot = {
            let mut state = self.state.write().unwrap();
            let Some(conversation) = state
                .conversations
                .iter_mut()
                .find(|conversation| conversation.id == conversation_id)
            else {
                tracing::debug!(conversation_id, "dropping message for unknown conversation");
                return;
            };

            let message = ConversationMessage {
                id: Uuid::new_v4().to_string(),
                conversation_id: conversation_id.to_string(),
                text: trimmed.to_string(),
                sender: MessageSender::Me,
                timestamp: chrono::Utc::now().timestamp_millis(),
                sender_name: SELF_SENDER_NAME.to_string(),
            };

            conversation.last_message = trimmed.to_string();
            conversation.timestamp = message.timestamp;
            conversation.unread = 0;

            state
                .messages_by_conversation
                .entry(conversation_id.to_string())
                .or_default()
                .push(message);

            sort_conversations(&mut state.conversations);
            state.clone()
        };
        self.commit(&snapshot);
    }

    /// Applies `apply` to one conversation, then re-sorts, persists and
    /// notifies. Unknown ids are ignored.
    fn update_conversation(&self, conversation_id: &str, apply: impl FnOnce(&mut Conversation)) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            let Some(conversation) = state
                .conversations
                .iter_mut()
                .find(|conversation| conversation.id == conversation_id)
            else {
                tracing::debug!(conversation_id, "ignoring update for unknown conversation");
                return;
            };
            apply(conversation);
            sort_conversations(&mut state.conversations);
            state.clone()
        };
        self.commit(&snapshot);
    }

    fn commit(&self, snapshot: &ConversationsState) {
        self.storage.set_json(CONVERSATIONS_KEY, snapshot);
        self.subscribers.notify(snapshot);
    }
}
