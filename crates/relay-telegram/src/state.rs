//! Shared state for the bot handlers.

use std::sync::Arc;

use relay_runtime::RelayContext;
use teloxide::types::ChatId;

/// State shared by every update handler.
#[derive(Debug, Clone)]
pub struct BotState {
    /// Cached status and announcement state.
    pub context: Arc<RelayContext>,
    /// The only chat where `!` commands are answered.
    pub command_chat: ChatId,
}

impl BotState {
    pub fn new(context: Arc<RelayContext>, command_chat: ChatId) -> Self {
        Self {
            context,
            command_chat,
        }
    }

    /// Whether a plain-text message may trigger a `!` command.
    ///
    /// `sender_is_bot` is `None` when the message has no user sender; such
    /// messages count as automated.
    pub fn accepts_prefix(&self, chat: ChatId, sender_is_bot: Option<bool>) -> bool {
        if sender_is_bot.unwrap_or(true) {
            return false;
        }
        chat == self.command_chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_prefix_in_command_chat() {
        let state = BotState::new(RelayContext::shared(), ChatId(-100));
        assert!(state.accepts_prefix(ChatId(-100), Some(false)));
    }

    #[test]
    fn test_rejects_other_chats_and_bots() {
        let state = BotState::new(RelayContext::shared(), ChatId(-100));
        assert!(!state.accepts_prefix(ChatId(-200), Some(false)));
        assert!(!state.accepts_prefix(ChatId(-100), Some(true)));
        assert!(!state.accepts_prefix(ChatId(-100), None));
    }
}
