//! Status Relay Telegram bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx STATUS_CHAT_ID=-100123 MONGODB_URI=mongodb://localhost/status \
//!     cargo run -p relay-telegram
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use relay_api::{serve, ApiConfig, AppState};
use relay_runtime::{RelayConfig, RelayContext, RelayRuntime};
use relay_store::MongoStatusStore;
use relay_telegram::{BotConfig, BotState, StatusBot};
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

/// Status Relay - announce service availability in Telegram
#[derive(Parser, Debug)]
#[command(name = "relay-telegram")]
#[command(about = "Relays service status changes from MongoDB to a Telegram chat")]
struct Args {
    /// Health server bind host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Health server port
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Seconds between status reads
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    poll_interval: u64,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment first so clap's env fallbacks see .env values
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "relay_telegram=info,relay_runtime=info,relay_store=info,relay_api=info,teloxide=warn",
        1 => "relay_telegram=debug,relay_runtime=debug,relay_store=debug,relay_api=debug,teloxide=info",
        2 => "relay_telegram=trace,relay_runtime=trace,relay_store=trace,relay_api=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BotConfig::from_env()?;
    let context = RelayContext::shared();

    let store = MongoStatusStore::connect(&config.store).await?;
    tracing::info!(database = %store.database_name(), "Status store configured");

    let bot = StatusBot::new(
        &config.token,
        Arc::new(BotState::new(Arc::clone(&context), config.command_chat)),
    );

    let mut runtime = RelayRuntime::new(
        RelayConfig::new().with_poll_interval(Duration::from_secs(args.poll_interval)),
        Arc::clone(&context),
        Arc::new(store),
        Arc::new(bot.notifier(config.status_chat)),
    );

    // Health server answers before the bot has logged in
    let api_state = AppState::new(
        ApiConfig::new(args.host, args.port),
        Arc::clone(&context),
        runtime.connection(),
    );
    let (api_shutdown_tx, api_shutdown_rx) = oneshot::channel::<()>();
    let api_task = tokio::spawn({
        let api_state = api_state.clone();
        async move {
            let shutdown = async {
                let _ = api_shutdown_rx.await;
            };
            if let Err(e) = serve(api_state, shutdown).await {
                tracing::error!(error = %e, "Health server failed");
            }
        }
    });

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Logged in as @{}", username);
            api_state.set_bot_identity(format!("@{}", username)).await;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get bot info");
            return Err(e.into());
        }
    }

    bot.register_commands().await;
    runtime.start().await?;

    bot.run().await;

    let _ = api_shutdown_tx.send(());
    let _ = api_task.await;
    runtime.shutdown().await?;

    Ok(())
}
