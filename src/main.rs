mod commands;
mod config;
mod market;
mod report;

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::info;

use commands::Command;
use config::Config;
use market::MarketClient;

/// State shared across command handlers. Read-only after startup.
pub struct BotState {
    pub config: Config,
    pub market: MarketClient,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "narad_bot=info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("narad-bot: {e}");
            std::process::exit(1);
        }
    };

    info!("🚀 NĀRAD bot: initializing (polling mode)...");

    let bot = Bot::new(&config.bot_token);
    let market = MarketClient::new(config.price_api_url.clone(), config.solana_rpc_url.clone());
    let state = Arc::new(BotState { config, market });

    if let Some(chat_id) = state.config.alert_chat_id {
        info!("Alert chat configured: {chat_id} (reserved for proactive alerts)");
    }

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(commands::answer);

    info!("NĀRAD bot: starting polling loop");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
