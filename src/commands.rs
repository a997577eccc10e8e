//! Command dispatch: binds each recognized command to its report.
//!
//! Handlers share no mutable state; a failed fetch in one reply never affects
//! another in-flight command. Unrecognized commands fail the
//! `filter_command` parse upstream and are ignored by the dispatcher tree.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::info;

use crate::BotState;
use crate::market::MarketClient;
use crate::report;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "latest verified news scan")]
    Naradnews,
    #[command(description = "instant Solana price and network update")]
    Solalert,
    #[command(description = "large wallet movement scan")]
    Whalemove,
    #[command(description = "market risk assessment")]
    Risk,
}

/// Build the reply text for a command. Only `/solalert` touches the network.
pub async fn reply_text(cmd: &Command, market: &MarketClient) -> String {
    match cmd {
        Command::Naradnews => report::news_report(report::now_ist()),
        Command::Solalert => {
            let quote = market.fetch_price("solana").await;
            let sample = market.fetch_throughput().await;
            report::market_report(quote.as_ref(), sample.as_ref())
        }
        Command::Whalemove => report::whale_report(),
        Command::Risk => report::risk_report(),
    }
}

/// Dispatcher endpoint: render the report and reply to the originating chat.
pub async fn answer(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    info!("Command {cmd:?} from chat {}", msg.chat.id);

    let text = reply_text(&cmd, &state.market).await;
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Markdown)
        .await?;

    Ok(())
}
