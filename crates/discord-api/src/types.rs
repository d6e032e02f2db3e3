//! Discord API response types

use serde::{Deserialize, Serialize};

/// A Discord user object as returned by `GET /users/{id}`
///
/// Only the fields needed for display are modelled; the rest of the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordUser {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    /// Avatar hash, `None` when the user has no custom avatar
    #[serde(default)]
    pub avatar: Option<String>,
    /// Display name set by the user, if any
    #[serde(default)]
    pub global_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization_full() {
        let json = r#"{
            "id": "80351110224678912",
            "username": "nelly",
            "discriminator": "0",
            "global_name": "Nelly",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "public_flags": 64
        }"#;

        let user: DiscordUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_deref(), Some("80351110224678912"));
        assert_eq!(user.username, "nelly");
        assert_eq!(user.global_name.as_deref(), Some("Nelly"));
        assert_eq!(
            user.avatar.as_deref(),
            Some("8342729096ea3675442027381ff50dfe")
        );
    }

    #[test]
    fn test_user_deserialization_nulls() {
        let json = r#"{"id": "1", "username": "bob", "avatar": null, "global_name": null}"#;

        let user: DiscordUser = serde_json::from_str(json).unwrap();
        assert!(user.avatar.is_none());
        assert!(user.global_name.is_none());
    }

    #[test]
    fn test_user_deserialization_absent_optionals() {
        let user: DiscordUser = serde_json::from_str(r#"{"username": "bob"}"#).unwrap();
        assert!(user.id.is_none());
        assert!(user.avatar.is_none());
        assert!(user.global_name.is_none());
    }

    #[test]
    fn test_user_without_username_is_rejected() {
        let result = serde_json::from_str::<DiscordUser>(r#"{"id": "1", "avatar": "abc"}"#);
        assert!(result.is_err());
    }
}
