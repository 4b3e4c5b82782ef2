//! Demo inbox used until a real messaging transport exists.
//!
//! Loaded when no conversations snapshot has been persisted yet. Timestamps
//! are offsets from `now` so the seed always looks fresh.

use super::model::{Conversation, ConversationMessage, ConversationsState, MessageSender};
use std::collections::HashMap;

const MINUTE_MS: i64 = 60 * 1000;

/// Builds the seed state relative to `now` (epoch milliseconds).
pub fn seed_state(now: i64) -> ConversationsState {
    let conversations = vec![
        Conversation {
            id: "1".to_string(),
            participant_name: "IT Company".to_string(),
            participant_role: "Роботодавець".to_string(),
            last_message: "Чудово, чекаємо на вас на співбесіду!".to_string(),
            timestamp: now - 5 * MINUTE_MS,
            unread: 2,
            pinned: true,
        },
        Conversation {
            id: "2".to_string(),
            participant_name: "John Doe".to_string(),
            participant_role: "Кандидат".to_string(),
            last_message: "Дякую за можливість!".to_string(),
            timestamp: now - 60 * MINUTE_MS,
            unread: 0,
            pinned: false,
        },
    ];

    let mut messages_by_conversation = HashMap::new();
    messages_by_conversation.insert(
        "1".to_string(),
        vec![
            message(
                "1",
                "1",
                "Доброго дня! Зацікавила ваша вакансія React Native розробника.",
                MessageSender::Me,
                now - 30 * MINUTE_MS,
                "Я",
            ),
            message(
                "2",
                "1",
                "Привіт! Раді це чути. Розкажіть, будь ласка, про ваш досвід.",
                MessageSender::Other,
                now - 25 * MINUTE_MS,
                "IT Company",
            ),
            message(
                "3",
                "1",
                "Я маю 3 роки досвіду з React Native та 2 роки з React.",
                MessageSender::Me,
                now - 20 * MINUTE_MS,
                "Я",
            ),
            message(
                "4",
                "1",
                "Чудово, чекаємо на вас на співбесіду!",
                MessageSender::Other,
                now - 5 * MINUTE_MS,
                "IT Company",
            ),
        ],
    );
    messages_by_conversation.insert(
        "2".to_string(),
        vec![message(
            "5",
            "2",
            "Дякую за можливість!",
            MessageSender::Other,
            now - 60 * MINUTE_MS,
            "John Doe",
        )],
    );

    ConversationsState {
        conversations,
        messages_by_conversation,
    }
}

fn message(
    id: &str,
    conversation_id: &str,
    text: &str,
    sender: MessageSender,
    timestamp: i64,
    sender_name: &str,
) -> ConversationMessage {
    ConversationMessage {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        text: text.to_string(),
        sender,
        timestamp,
        sender_name: sender_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let state = seed_state(1_000_000);
        assert_eq!(state.conversations.len(), 2);
        assert_eq!(state.messages_by_conversation["1"].len(), 4);
        assert_eq!(state.messages_by_conversation["2"].len(), 1);

        // The pinned employer chat starts with two unread messages.
        let pinned = &state.conversations[0];
        assert!(pinned.pinned);
        assert_eq!(pinned.unread, 2);
    }

    #[test]
    fn test_seed_messages_are_chronological() {
        let state = seed_state(10_000_000);
        let messages = &state.messages_by_conversation["1"];
        assert!(
            messages
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp)
        );
    }
}
