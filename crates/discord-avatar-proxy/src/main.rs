//! Discord Avatar Proxy - resolves Discord user IDs to avatar URLs
//!
//! This service looks up a user through the Discord API with a bot token
//! and returns their CDN avatar URL and display name.

mod avatar;
mod config;
mod error;
mod resolver;
mod server;
mod types;

use crate::config::Config;
use crate::error::Result;
use crate::resolver::AvatarResolver;
use crate::server::{start_server, ServerState, SharedState};
use discord_api::DiscordClient;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("discord_avatar_proxy=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Discord avatar proxy...");

    let config = Config::from_env();
    info!("Port: {}", config.port);
    info!("Discord API: {}", config.discord_api_url);

    let bot_token = config.bot_token.as_deref().unwrap_or_else(|| {
        warn!("DISCORD_BOT_TOKEN is not set; Discord will reject every lookup");
        ""
    });

    let client = DiscordClient::with_base_url(
        &config.discord_api_url,
        bot_token,
        config.request_timeout,
    )?;

    let state: SharedState = Arc::new(ServerState::new(AvatarResolver::new(Arc::new(client))));

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}
