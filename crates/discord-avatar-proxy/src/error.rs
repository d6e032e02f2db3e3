//! Error types for the Discord avatar proxy

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use discord_api::DiscordError;
use serde_json::json;
use std::fmt;

/// Request-level failure of an avatar lookup
#[derive(Debug)]
pub enum AvatarError {
    /// No `userId` was supplied; nothing was sent upstream
    MissingInput,
    /// Discord rejected the bot token
    UpstreamUnauthorized,
    /// Discord has no user with that ID
    UpstreamNotFound,
    /// Any other upstream failure, with the underlying message
    UpstreamError(String),
}

impl fmt::Display for AvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "Missing userId parameter"),
            Self::UpstreamUnauthorized => write!(f, "Invalid Discord bot token"),
            Self::UpstreamNotFound => write!(f, "Discord user not found"),
            Self::UpstreamError(msg) => write!(f, "Failed to fetch Discord avatar: {}", msg),
        }
    }
}

impl std::error::Error for AvatarError {}

impl From<DiscordError> for AvatarError {
    fn from(err: DiscordError) -> Self {
        match err {
            DiscordError::Unauthorized => Self::UpstreamUnauthorized,
            DiscordError::NotFound => Self::UpstreamNotFound,
            other => Self::UpstreamError(other.to_string()),
        }
    }
}

impl IntoResponse for AvatarError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AvatarError::MissingInput => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing userId parameter" }),
            ),
            AvatarError::UpstreamUnauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid Discord bot token" }),
            ),
            AvatarError::UpstreamNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Discord user not found" }),
            ),
            AvatarError::UpstreamError(details) => {
                tracing::error!(error = %details, "Failed to fetch Discord avatar");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to fetch Discord avatar", "details": details }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Startup failure of the service itself
#[derive(Debug)]
pub enum ProxyError {
    Discord(DiscordError),
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::Discord(err) => write!(f, "Discord client error: {}", err),
            ProxyError::Io(err) => write!(f, "IO error: {}", err),
            ProxyError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::Discord(err) => Some(err),
            ProxyError::Io(err) => Some(err.as_ref()),
            ProxyError::Config(_) => None,
        }
    }
}

impl From<DiscordError> for ProxyError {
    fn from(err: DiscordError) -> Self {
        ProxyError::Discord(err)
    }
}

impl From<std::io::Error> for ProxyError {
    fn from(err: std::io::Error) -> Self {
        ProxyError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for ProxyError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        ProxyError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
