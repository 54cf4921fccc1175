//! Status notifications delivered through the Telegram Bot API.

use async_trait::async_trait;
use relay_models::StatusPayload;
use relay_runtime::{NotificationId, Notifier, Result, RuntimeError};
use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};
use tracing::debug;

use crate::format::{payload_html, presence_text};

/// Posts status notifications into a single chat.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Chat receiving the notifications.
    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }
}

fn notify_error(e: impl std::fmt::Display) -> RuntimeError {
    RuntimeError::Notify(e.to_string())
}

/// Converts a stored notification id back into a Telegram message id.
pub fn message_id(id: NotificationId) -> Result<MessageId> {
    i32::try_from(id.0)
        .map(MessageId)
        .map_err(|_| RuntimeError::Notify(format!("message id {} out of range", id)))
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, payload: &StatusPayload) -> Result<NotificationId> {
        let sent = self
            .bot
            .send_message(self.chat_id, payload_html(payload))
            .parse_mode(ParseMode::Html)
            .await
            .map_err(notify_error)?;

        debug!(chat_id = %self.chat_id, message_id = sent.id.0, "Status notification posted");
        Ok(NotificationId(i64::from(sent.id.0)))
    }

    async fn delete(&self, id: NotificationId) -> Result<()> {
        self.bot
            .delete_message(self.chat_id, message_id(id)?)
            .await
            .map_err(notify_error)?;
        Ok(())
    }

    async fn set_presence(&self, is_online: bool) -> Result<()> {
        self.bot
            .set_my_short_description()
            .short_description(presence_text(is_online))
            .await
            .map_err(notify_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_conversion() {
        assert_eq!(message_id(NotificationId(17)).unwrap(), MessageId(17));
        assert!(message_id(NotificationId(i64::MAX)).is_err());
    }

    #[test]
    fn test_notifier_chat() {
        let notifier = TelegramNotifier::new(Bot::new("123:test"), ChatId(-100));
        assert_eq!(notifier.chat_id(), ChatId(-100));
    }
}
