//! Main Telegram bot implementation.

use std::sync::Arc;

use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use crate::error::{BotError, Result};
use crate::handlers::{handle_command, handle_message, Command};
use crate::notifier::TelegramNotifier;
use crate::state::BotState;

/// The status relay's Telegram bot.
pub struct StatusBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Shared state across handlers.
    state: Arc<BotState>,
}

impl StatusBot {
    pub fn new(token: &str, state: Arc<BotState>) -> Self {
        Self {
            bot: Bot::new(token),
            state,
        }
    }

    /// Notifier posting into `chat_id` with this bot's credentials.
    pub fn notifier(&self, chat_id: ChatId) -> TelegramNotifier {
        TelegramNotifier::new(self.bot.clone(), chat_id)
    }

    /// Get the bot's username. Fails when the token is rejected.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Publish the command list. Failures are logged only.
    pub async fn register_commands(&self) {
        match self.bot.set_my_commands(Command::bot_commands()).await {
            Ok(_) => info!("Successfully registered application commands"),
            Err(e) => error!(error = %e, "Failed to register application commands"),
        }
    }

    /// Run the update dispatcher until Ctrl+C.
    pub async fn run(&self) {
        info!("Starting Telegram bot in polling mode...");

        let state_for_commands = Arc::clone(&self.state);
        let state_for_messages = Arc::clone(&self.state);

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let state = Arc::clone(&state_for_commands);
                        info!(chat_id = %msg.chat.id, "Command matched: {:?}", cmd);
                        async move { handle_command(bot, msg, cmd, state).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.text().is_some())
                    .endpoint(move |bot: Bot, msg: Message| {
                        let state = Arc::clone(&state_for_messages);
                        async move { handle_message(bot, msg, state).await }
                    }),
            );

        Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|upd| async move {
                warn!("Unhandled update: {:?}", upd.kind);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Bot stopped");
    }
}
