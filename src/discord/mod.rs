//! Remote presence service integration.
//!
//! This module provides the data structures exchanged with the remote service
//! and the collaborators used by the status commands:
//!
//! - `api` - HTTP client for the REST endpoints
//! - `session` - The [`Session`] trait and its HTTP backed implementation
//!
//! # Examples
//!
//! ```no_run
//! use cordstat::discord::{ApiClient, HttpSession};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = ApiClient::new("https://discord.com/api/v9", "token");
//! let session = HttpSession::connect(api).await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod session;

use serde::{Deserialize, Serialize};

pub use crate::discord::api::ApiClient;
#[cfg(test)]
pub use crate::discord::session::MockSession;
pub use crate::discord::session::{HttpSession, Session};

/// Coarse online status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Idle,
    #[serde(rename = "dnd")]
    DoNotDisturb,
    Invisible,
    Offline,
    /// Any status value the service sends that is not known yet
    #[serde(other)]
    Unknown,
}

/// A user account as seen by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Legacy four digits discriminator, `"0"` or empty on migrated accounts
    #[serde(default)]
    pub discriminator: String,
    /// Bot accounts can't change their status through the settings endpoint
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Returns the display tag of the user: `name#discriminator`, or the bare
    /// username when the account has no discriminator.
    pub fn tag(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }
}

/// Association between a user and its current status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    pub user: User,
    pub status: Status,
}

/// Snapshot of the settings of the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, discriminator: &str) -> User {
        User {
            id: "1".to_string(),
            username: username.to_string(),
            discriminator: discriminator.to_string(),
            bot: false,
        }
    }

    #[test]
    fn test_tag_with_discriminator() {
        assert_eq!(user("Marcel", "7299").tag(), "Marcel#7299");
    }

    #[test]
    fn test_tag_without_discriminator() {
        assert_eq!(user("marcel", "0").tag(), "marcel");
        assert_eq!(user("marcel", "").tag(), "marcel");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&Status::DoNotDisturb).unwrap(),
            "\"dnd\""
        );
        assert_eq!(
            serde_json::from_str::<Status>("\"idle\"").unwrap(),
            Status::Idle
        );
        assert_eq!(
            serde_json::from_str::<Status>("\"streaming\"").unwrap(),
            Status::Unknown
        );
    }

    #[test]
    fn test_settings_ignores_unknown_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"status": "online", "theme": "dark", "locale": "fr"}"#)
                .unwrap();
        assert_eq!(settings.status, Status::Online);
    }
}
