//! Error types for the Telegram bot.

use thiserror::Error;

/// Errors that can occur in the Telegram bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set TELEGRAM_BOT_TOKEN environment variable.")]
    NoToken,

    /// A required environment variable is missing.
    #[error("{0} not set")]
    MissingVar(&'static str),

    /// A chat id variable is not a number.
    #[error("{var} must be a numeric chat id, got {value:?}")]
    InvalidChatId { var: &'static str, value: String },

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// The command message carries no sender.
    #[error("message has no sender")]
    NoRequester,

    /// Telegram API request error.
    #[error("Telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_error_display() {
        assert_eq!(
            BotError::MissingVar("MONGODB_URI").to_string(),
            "MONGODB_URI not set"
        );
        assert_eq!(
            BotError::InvalidChatId {
                var: "STATUS_CHAT_ID",
                value: "abc".into()
            }
            .to_string(),
            "STATUS_CHAT_ID must be a numeric chat id, got \"abc\""
        );
    }
}
