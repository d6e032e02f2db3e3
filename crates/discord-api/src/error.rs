//! Error types for the Discord API client

use std::fmt;

/// Errors that can occur when interacting with the Discord API
#[derive(Debug)]
pub enum DiscordError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// Discord rejected the bot token (401)
    Unauthorized,
    /// The requested resource does not exist (404)
    NotFound,
    /// Any other non-success status, with the response body for diagnostics
    Status { status: u16, body: String },
}

impl fmt::Display for DiscordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Discord HTTP error: {}", e),
            Self::Json(e) => write!(f, "Discord JSON parse error: {}", e),
            Self::Unauthorized => write!(f, "Discord rejected the bot token"),
            Self::NotFound => write!(f, "Discord resource not found"),
            Self::Status { status, body } if body.is_empty() => {
                write!(f, "Discord API returned status {}", status)
            }
            Self::Status { status, body } => {
                write!(f, "Discord API returned status {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for DiscordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DiscordError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for DiscordError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for Discord API operations
pub type Result<T> = std::result::Result<T, DiscordError>;
