//! Messaging domain: conversations, per-conversation message lists, and the
//! store that drives the inbox.

pub mod model;
pub mod seed;
pub mod store;

pub use model::{Conversation, ConversationMessage, ConversationsState, MessageSender};
pub use store::ConversationStore;
