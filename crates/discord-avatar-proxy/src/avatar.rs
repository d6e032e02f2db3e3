//! Discord CDN avatar URL derivation
//!
//! See <https://discord.com/developers/docs/reference#image-formatting>.

const CDN_BASE_URL: &str = "https://cdn.discordapp.com";
const AVATAR_SIZE: u32 = 256;

/// Hash prefix Discord uses for animated avatars
const ANIMATED_PREFIX: &str = "a_";

/// Default avatar bucketing for users without a custom avatar:
/// `(user_id >> 22) % 6`. Owned by Discord, update if they change it.
const DEFAULT_AVATAR_SHIFT: u32 = 22;
const DEFAULT_AVATAR_COUNT: u64 = 6;

/// URL of a user's avatar.
///
/// Uses the custom avatar when `avatar_hash` is present and non-empty,
/// otherwise the built-in default avatar for that user ID.
pub fn avatar_url(user_id: &str, avatar_hash: Option<&str>) -> String {
    match avatar_hash.filter(|h| !h.is_empty()) {
        Some(hash) => custom_avatar_url(user_id, hash),
        None => default_avatar_url(default_avatar_index(user_id)),
    }
}

pub fn custom_avatar_url(user_id: &str, avatar_hash: &str) -> String {
    let ext = if avatar_hash.starts_with(ANIMATED_PREFIX) {
        "gif"
    } else {
        "png"
    };
    format!(
        "{}/avatars/{}/{}.{}?size={}",
        CDN_BASE_URL, user_id, avatar_hash, ext, AVATAR_SIZE
    )
}

pub fn default_avatar_url(index: u64) -> String {
    format!("{}/embed/avatars/{}.png", CDN_BASE_URL, index)
}

/// Index of the default avatar for a snowflake ID.
///
/// IDs that are not valid snowflakes get index 0.
pub fn default_avatar_index(user_id: &str) -> u64 {
    user_id
        .parse::<u64>()
        .map(|id| (id >> DEFAULT_AVATAR_SHIFT) % DEFAULT_AVATAR_COUNT)
        .unwrap_or(0)
}

/// Name to show for a user: the global display name when set, else the username
pub fn display_name(username: &str, global_name: Option<&str>) -> String {
    global_name
        .filter(|n| !n.is_empty())
        .unwrap_or(username)
        .to_string()
}
