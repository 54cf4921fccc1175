//! Telegram front end for Status Relay.
//!
//! This crate connects the relay runtime to a Telegram chat:
//! - posts a status notification whenever the watched service flips
//!   between online and offline, replacing the previous one
//! - answers bot commands from any chat
//! - answers `!check`, `!online` and `!offline` in the designated chat
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//! - `STATUS_CHAT_ID`: Chat that receives status notifications
//! - `MONGODB_URI`: Connection string of the status store
//!
//! Optional:
//! - `COMMAND_CHAT_ID`: Chat where `!` commands are accepted (default: `STATUS_CHAT_ID`)
//! - `MONGODB_DATABASE`: Database name (default: from the URI)
//! - `MONGODB_COLLECTION`: Collection name (default: `servicestatuses`)
//! - `PORT`, `HOST`, `POLL_INTERVAL_SECS`: see `relay-telegram --help`
//!
//! # Commands
//!
//! - `/ping` - Replies with Pong!
//! - `/hello` - Says hello to the user
//! - `/user` - Shows user information
//! - `/status` - Check service status

pub mod bot;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod notifier;
pub mod state;

pub use bot::StatusBot;
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use handlers::{Command, PrefixTrigger, Reply, Requester};
pub use notifier::TelegramNotifier;
pub use state::BotState;
