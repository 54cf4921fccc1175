//! Bot configuration loaded from the environment.

use relay_store::StoreConfig;
use teloxide::types::ChatId;

use crate::error::{BotError, Result};

/// Settings the bot needs before it can log in.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token.
    pub token: String,
    /// Chat that receives status notifications.
    pub status_chat: ChatId,
    /// Chat where `!` commands are accepted.
    pub command_chat: ChatId,
    /// Status store connection settings.
    pub store: StoreConfig,
}

impl BotConfig {
    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = non_empty("TELEGRAM_BOT_TOKEN").ok_or(BotError::NoToken)?;

        let status_chat = parse_chat_id(
            "STATUS_CHAT_ID",
            non_empty("STATUS_CHAT_ID").ok_or(BotError::MissingVar("STATUS_CHAT_ID"))?,
        )?;

        let command_chat = match non_empty("COMMAND_CHAT_ID") {
            Some(value) => parse_chat_id("COMMAND_CHAT_ID", value)?,
            None => status_chat,
        };

        let uri = non_empty("MONGODB_URI").ok_or(BotError::MissingVar("MONGODB_URI"))?;
        let mut store = StoreConfig::new(uri);
        if let Some(database) = non_empty("MONGODB_DATABASE") {
            store = store.with_database(database);
        }
        if let Some(collection) = non_empty("MONGODB_COLLECTION") {
            store = store.with_collection(collection);
        }

        Ok(Self {
            token,
            status_chat,
            command_chat,
            store,
        })
    }
}

fn parse_chat_id(var: &'static str, value: String) -> Result<ChatId> {
    value
        .trim()
        .parse::<i64>()
        .map(ChatId)
        .map_err(|_| BotError::InvalidChatId { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("STATUS_CHAT_ID", "-1001234"),
            ("MONGODB_URI", "mongodb://localhost:27017/status"),
        ]
    }

    #[test]
    fn test_config_from_required_vars() {
        let config = BotConfig::from_lookup(lookup(&required())).unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.status_chat, ChatId(-1001234));
        assert_eq!(config.command_chat, ChatId(-1001234));
        assert_eq!(config.store.uri, "mongodb://localhost:27017/status");
        assert!(config.store.database.is_none());
        assert_eq!(config.store.collection, "servicestatuses");
    }

    #[test]
    fn test_config_optional_overrides() {
        let mut vars = required();
        vars.push(("COMMAND_CHAT_ID", "42"));
        vars.push(("MONGODB_DATABASE", "prod"));
        vars.push(("MONGODB_COLLECTION", "statuses"));

        let config = BotConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.command_chat, ChatId(42));
        assert_eq!(config.store.database.as_deref(), Some("prod"));
        assert_eq!(config.store.collection, "statuses");
    }

    #[test]
    fn test_config_missing_token() {
        let vars: Vec<_> = required()
            .into_iter()
            .filter(|(k, _)| *k != "TELEGRAM_BOT_TOKEN")
            .collect();
        let err = BotConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, BotError::NoToken));
    }

    #[test]
    fn test_config_blank_token_is_missing() {
        let mut vars = required();
        vars[0] = ("TELEGRAM_BOT_TOKEN", "  ");
        let err = BotConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, BotError::NoToken));
    }

    #[test]
    fn test_config_missing_uri() {
        let vars: Vec<_> = required()
            .into_iter()
            .filter(|(k, _)| *k != "MONGODB_URI")
            .collect();
        let err = BotConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, BotError::MissingVar("MONGODB_URI")));
    }

    #[test]
    fn test_config_invalid_chat_id() {
        let mut vars = required();
        vars[1] = ("STATUS_CHAT_ID", "status-channel");
        let err = BotConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            BotError::InvalidChatId { var: "STATUS_CHAT_ID", .. }
        ));
    }
}
