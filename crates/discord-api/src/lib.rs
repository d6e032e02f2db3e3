//! Minimal Rust client for the Discord REST API
//!
//! Only the user lookup endpoint is covered. Requests are authenticated
//! with a bot token.
//!
//! # Example
//!
//! ```no_run
//! use discord_api::DiscordClient;
//!
//! # async fn example() -> Result<(), discord_api::DiscordError> {
//! let client = DiscordClient::new("my-bot-token")?;
//!
//! let user = client.get_user("80351110224678912").await?;
//! println!("{} ({:?})", user.username, user.global_name);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /users/{user.id}` - Get a user by ID

mod client;
mod error;
mod types;

pub use client::DiscordClient;
pub use error::{DiscordError, Result};
pub use types::DiscordUser;
