use std::env;
use std::fmt;

use teloxide::types::ChatId;

const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Errors that can occur when building configuration from the environment.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    MissingVar(&'static str),
    /// BOT_TOKEN does not look like a Telegram bot token.
    InvalidToken,
    /// ALERT_CHAT_ID is set but is not a numeric chat id.
    InvalidChatId(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVar(name) => {
                write!(f, "required environment variable {name} is not set")
            }
            Self::InvalidToken => {
                write!(
                    f,
                    "BOT_TOKEN appears invalid (expected format: 123456789:ABCdefGHI...)"
                )
            }
            Self::InvalidChatId(value) => {
                write!(f, "ALERT_CHAT_ID '{value}' is not a valid chat id")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Process-wide configuration, read once at startup and immutable thereafter.
pub struct Config {
    pub bot_token: String,
    /// Destination for future proactive alerts; no handler sends here yet.
    pub alert_chat_id: Option<ChatId>,
    /// CoinGecko simple-price endpoint (overridable for tests or mirrors).
    pub price_api_url: String,
    /// Solana JSON-RPC endpoint (overridable for private RPC providers).
    pub solana_rpc_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("BOT_TOKEN").ok(),
            env::var("ALERT_CHAT_ID").ok(),
            env::var("PRICE_API_URL").ok(),
            env::var("SOLANA_RPC_URL").ok(),
        )
    }

    fn from_vars(
        bot_token: Option<String>,
        alert_chat_id: Option<String>,
        price_api_url: Option<String>,
        solana_rpc_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bot_token = bot_token
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingVar("BOT_TOKEN"))?;

        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let token_parts: Vec<&str> = bot_token.split(':').collect();
        if token_parts.len() != 2
            || token_parts[0].parse::<u64>().is_err()
            || token_parts[1].is_empty()
        {
            return Err(ConfigError::InvalidToken);
        }

        let alert_chat_id = match alert_chat_id.filter(|v| !v.is_empty()) {
            Some(raw) => {
                let id = raw
                    .parse::<i64>()
                    .map_err(|_| ConfigError::InvalidChatId(raw.clone()))?;
                Some(ChatId(id))
            }
            None => None,
        };

        Ok(Self {
            bot_token,
            alert_chat_id,
            price_api_url: price_api_url
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PRICE_API_URL.to_string()),
            solana_rpc_url: solana_rpc_url
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SOLANA_RPC_URL.to_string()),
        })
    }
}
