//! Discord API HTTP client

use crate::error::{DiscordError, Result};
use crate::types::DiscordUser;
use reqwest::{header, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the Discord REST API, authenticated as a bot
pub struct DiscordClient {
    http: reqwest::Client,
    base_url: String,
    bot_token: String,
}

impl DiscordClient {
    /// Base URL for Discord API v10
    pub const DEFAULT_BASE_URL: &'static str = "https://discord.com/api/v10";
    /// Default request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new client against the public Discord API (30 second timeout)
    pub fn new(bot_token: &str) -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, bot_token, Self::DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom API base URL and timeout
    pub fn with_base_url(base_url: &str, bot_token: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
        })
    }

    /// The API base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a user by snowflake ID
    ///
    /// 401 and 404 responses are classified as [`DiscordError::Unauthorized`]
    /// and [`DiscordError::NotFound`]; every other non-success status becomes
    /// [`DiscordError::Status`].
    pub async fn get_user(&self, user_id: &str) -> Result<DiscordUser> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(user_id));
        debug!(url = %url, "Fetching Discord user");

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bot {}", self.bot_token))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, user_id, body = %body, "Discord API request failed");

            return Err(match status {
                StatusCode::UNAUTHORIZED => DiscordError::Unauthorized,
                StatusCode::NOT_FOUND => DiscordError::NotFound,
                _ => DiscordError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let bytes = response.bytes().await?;
        let user: DiscordUser = serde_json::from_slice(&bytes)?;

        debug!(user_id, username = %user.username, "Fetched Discord user");
        Ok(user)
    }
}
