//! Resolves Discord user IDs to avatar URLs and display names

use crate::avatar;
use crate::error::AvatarError;
use crate::types::AvatarResult;
use async_trait::async_trait;
use discord_api::{DiscordClient, DiscordUser};
use std::sync::Arc;
use tracing::debug;

/// Source of Discord user records
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn get_user(&self, user_id: &str) -> discord_api::Result<DiscordUser>;
}

#[async_trait]
impl UserLookup for DiscordClient {
    async fn get_user(&self, user_id: &str) -> discord_api::Result<DiscordUser> {
        DiscordClient::get_user(self, user_id).await
    }
}

pub struct AvatarResolver {
    lookup: Arc<dyn UserLookup>,
}

impl AvatarResolver {
    pub fn new(lookup: Arc<dyn UserLookup>) -> Self {
        Self { lookup }
    }

    /// Look up a user and derive their avatar URL and display name.
    ///
    /// An empty `user_id` fails with [`AvatarError::MissingInput`] without
    /// contacting Discord. Upstream failures are not retried.
    pub async fn resolve(&self, user_id: &str) -> Result<AvatarResult, AvatarError> {
        if user_id.is_empty() {
            return Err(AvatarError::MissingInput);
        }

        let user = self.lookup.get_user(user_id).await?;

        let result = AvatarResult {
            avatar_url: avatar::avatar_url(user_id, user.avatar.as_deref()),
            display_name: avatar::display_name(&user.username, user.global_name.as_deref()),
            username: user.username,
        };

        debug!(user_id, avatar_url = %result.avatar_url, "Resolved avatar");
        Ok(result)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeLookup, FakeResponse};
    use super::*;

    #[tokio::test]
    async fn test_empty_user_id_skips_lookup() {
        let lookup = FakeLookup::with_user(Some("abc123"), "bob", None);
        let resolver = AvatarResolver::new(lookup.clone());

        let result = resolver.resolve("").await;
        assert!(matches!(result, Err(AvatarError::MissingInput)));
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_custom_avatar() {
        let lookup = FakeLookup::with_user(Some("abc123"), "bob", Some("Bobby"));
        let resolver = AvatarResolver::new(lookup.clone());

        let result = resolver.resolve("100").await.unwrap();
        assert_eq!(
            result.avatar_url,
            "https://cdn.discordapp.com/avatars/100/abc123.png?size=256"
        );
        assert_eq!(result.username, "bob");
        assert_eq!(result.display_name, "Bobby");
        assert_eq!(lookup.calls(), 1);
    }

    #[tokio::test]
    async fn test_animated_avatar() {
        let resolver = AvatarResolver::new(FakeLookup::with_user(Some("a_abc123"), "bob", None));

        let result = resolver.resolve("100").await.unwrap();
        assert!(result.avatar_url.ends_with("/a_abc123.gif?size=256"));
    }

    #[tokio::test]
    async fn test_default_avatar_and_empty_global_name() {
        let resolver = AvatarResolver::new(FakeLookup::with_user(None, "bob", Some("")));

        let result = resolver.resolve("250000000000000000").await.unwrap();
        assert_eq!(
            result.avatar_url,
            "https://cdn.discordapp.com/embed/avatars/3.png"
        );
        assert_eq!(result.display_name, "bob");
    }

    #[tokio::test]
    async fn test_upstream_failures_are_classified() {
        let resolver = AvatarResolver::new(FakeLookup::new(FakeResponse::Unauthorized));
        assert!(matches!(
            resolver.resolve("100").await,
            Err(AvatarError::UpstreamUnauthorized)
        ));

        let resolver = AvatarResolver::new(FakeLookup::new(FakeResponse::NotFound));
        assert!(matches!(
            resolver.resolve("100").await,
            Err(AvatarError::UpstreamNotFound)
        ));

        let resolver = AvatarResolver::new(FakeLookup::new(FakeResponse::Status(502)));
        match resolver.resolve("100").await {
            Err(AvatarError::UpstreamError(msg)) => assert!(msg.contains("502")),
            other => panic!("expected UpstreamError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failures_are_not_retried() {
        let lookup = FakeLookup::new(FakeResponse::Status(500));
        let resolver = AvatarResolver::new(lookup.clone());

        let _ = resolver.resolve("100").await;
        assert_eq!(lookup.calls(), 1);
    }
}
