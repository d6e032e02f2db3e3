//! Core types for the Discord avatar proxy

use serde::Serialize;

/// Resolved avatar and display metadata for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarResult {
    pub avatar_url: String,
    pub username: String,
    pub display_name: String,
}

/// Query parameters for `GET /avatar`
#[derive(Debug, Default)]
pub struct AvatarQuery {
    pub user_id: Option<String>,
}

impl From<Vec<(String, String)>> for AvatarQuery {
    /// The first `userId` wins when the parameter is repeated.
    fn from(pairs: Vec<(String, String)>) -> Self {
        let user_id = pairs
            .into_iter()
            .find(|(key, _)| key == "userId")
            .map(|(_, value)| value);

        Self { user_id }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}
