use std::fmt;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Service configuration parsed from environment variables
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub bot_token: Option<String>,
    pub discord_api_url: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let bot_token = lookup("DISCORD_BOT_TOKEN").filter(|t| !t.is_empty());

        let discord_api_url =
            lookup("DISCORD_API_URL").unwrap_or_else(|| DEFAULT_DISCORD_API_URL.to_string());

        let request_timeout = lookup("DISCORD_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            port,
            bot_token,
            discord_api_url,
            request_timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Keeps the bot token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("discord_api_url", &self.discord_api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
