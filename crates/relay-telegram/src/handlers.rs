//! Command and message handlers for the Telegram bot.

use std::sync::Arc;

use relay_models::{render_status_payload, render_status_report, ServiceStatus, StatusPayload};
use teloxide::prelude::*;
use teloxide::requests::Requester as _;
use teloxide::types::{ParseMode, User};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info};

use crate::error::{BotError, Result};
use crate::format::{payload_html, report_html, user_card_html};
use crate::state::BotState;

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Replies with Pong!")]
    Ping,

    #[command(description = "Says hello to the user")]
    Hello,

    #[command(description = "Shows user information")]
    User,

    #[command(description = "Check service status")]
    Status,
}

impl Command {
    /// Generic reply sent when handling this command fails.
    pub fn error_reply(&self) -> &'static str {
        match self {
            Command::Status => "❌ Error fetching status",
            _ => "❌ Something went wrong",
        }
    }
}

/// The user who issued a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub name: String,
    pub id: u64,
}

impl From<&User> for Requester {
    fn from(user: &User) -> Self {
        Self {
            name: user
                .username
                .clone()
                .unwrap_or_else(|| user.first_name.clone()),
            id: user.id.0,
        }
    }
}

/// Reply content, tagged with how Telegram should parse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Html(String),
}

/// Builds the reply to a command from the cached status.
pub fn command_reply(
    cmd: &Command,
    requester: Option<&Requester>,
    status: &ServiceStatus,
) -> Result<Reply> {
    match cmd {
        Command::Ping => Ok(Reply::Text("Pong!".to_string())),
        Command::Hello => {
            let requester = requester.ok_or(BotError::NoRequester)?;
            Ok(Reply::Text(format!("Hello {}!", requester.name)))
        }
        Command::User => {
            let requester = requester.ok_or(BotError::NoRequester)?;
            Ok(Reply::Html(user_card_html(&requester.name, requester.id)))
        }
        Command::Status => Ok(Reply::Html(report_html(&render_status_report(status)))),
    }
}

/// Plain-text commands accepted in the command chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixTrigger {
    /// Show the cached state.
    Check,
    /// Preview the online notification.
    Online,
    /// Preview the offline notification with the cached message.
    Offline,
}

impl PrefixTrigger {
    /// Matches the full message text against a trigger.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "!check" => Some(Self::Check),
            "!online" => Some(Self::Online),
            "!offline" => Some(Self::Offline),
            _ => None,
        }
    }

    /// Builds the payload for this trigger. Announcement state is untouched.
    pub fn payload(self, status: &ServiceStatus) -> StatusPayload {
        match self {
            Self::Check => render_status_payload(status.is_online, status.message.as_deref()),
            Self::Online => render_status_payload(true, None),
            Self::Offline => render_status_payload(false, Some(status.effective_message())),
        }
    }
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<()> {
    match reply {
        Reply::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
        Reply::Html(html) => {
            bot.send_message(chat_id, html)
                .parse_mode(ParseMode::Html)
                .await?;
        }
    }
    Ok(())
}

/// Handle a bot command.
///
/// Failures are logged and answered with a generic error reply.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    let requester = msg.from.as_ref().map(Requester::from);
    let status = state.context.status().await;

    let outcome = match command_reply(&cmd, requester.as_ref(), &status) {
        Ok(reply) => send_reply(&bot, msg.chat.id, reply).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        error!(chat_id = %msg.chat.id, command = ?cmd, error = %e, "Command failed");
        bot.send_message(msg.chat.id, cmd.error_reply()).await?;
    }

    Ok(())
}

/// Decides the answer to a plain-text message.
///
/// Returns `None` unless the message comes from a human in the command chat
/// and its text is exactly a trigger.
pub async fn prefix_reply(
    state: &BotState,
    chat: ChatId,
    sender_is_bot: Option<bool>,
    text: Option<&str>,
) -> Option<(PrefixTrigger, StatusPayload)> {
    if !state.accepts_prefix(chat, sender_is_bot) {
        return None;
    }
    let trigger = text.and_then(PrefixTrigger::parse)?;
    let status = state.context.status().await;
    Some((trigger, trigger.payload(&status)))
}

/// Handle a plain-text message.
pub async fn handle_message(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let sender_is_bot = msg.from.as_ref().map(|u| u.is_bot);
    debug!(
        chat_id = %msg.chat.id,
        from = ?msg.from.as_ref().map(|u| &u.username),
        text = ?msg.text(),
        "Message received"
    );

    let Some((trigger, payload)) =
        prefix_reply(&state, msg.chat.id, sender_is_bot, msg.text()).await
    else {
        return Ok(());
    };

    info!(chat_id = %msg.chat.id, trigger = ?trigger, "Prefix command received");

    if let Err(e) = bot
        .send_message(msg.chat.id, payload_html(&payload))
        .parse_mode(ParseMode::Html)
        .await
    {
        error!(chat_id = %msg.chat.id, trigger = ?trigger, error = %e, "Failed to answer prefix command");
    }

    Ok(())
}
