//! Status command interpretation and response formatting.
//!
//! This module provides the complete command processing pipeline: a command
//! line, already split into tokens, is resolved to a [`StatusCommand`] and
//! routed to its handler, which writes a console response.
//!
//! # Architecture
//!
//! ```text
//! tokens
//!   │
//!   ▼
//! ┌──────────────────┐
//! │  StatusCommand   │  ← resolve(name) by name or alias
//! └──────────────────┘
//!   │
//!   ▼
//! ┌──────────────────┐
//! │    Commander     │  ← execute(command, writer, args)
//! └──────────────────┘
//!   │
//!   ▼
//! ┌───────────────────────────┐
//! │ Action Handlers           │
//! │  - handle_status          │──► status-get / status-set
//! │  - handle_status_get      │──► presence_format
//! │  - handle_status_set      │──► Session::update_status
//! │  - handle_status_set_custom│──► flags, expiry, ApiClient
//! └───────────────────────────┘
//!   │
//!   ▼
//! console response (text with [color] tags)
//! ```
//!
//! # Available Commands
//!
//! | Command | Aliases | Arguments |
//! |---------|---------|-----------|
//! | `status` | | `[get [user]\|set <status>\|update <status>\|<user>]` |
//! | `status-get` | | `[user]` |
//! | `status-set` | `status-update` | `<online\|available\|dnd\|donotdisturb\|busy\|idle\|invisible>` |
//! | `status-set-custom` | `status-custom` | `[-s text] [-e emoji] [-i <N><s\|m\|h>]` |
//!
//! # Module Organization
//!
//! - [`commander`] - Entry point holding the collaborators
//! - [`command`] - Command enum, names, aliases and help pages
//! - [`actions`] - Individual command handlers
//! - [`flags`] - Flag extraction for custom statuses
//! - [`expiry`] - Duration suffix parsing
//! - [`presence_format`] - Status labels
//! - [`console_response`] - Response and help texts

mod actions;
mod command;
mod commander;
mod console_response;
mod expiry;
mod flags;
mod presence_format;

pub use crate::commands::command::StatusCommand;
pub use crate::commands::commander::Commander;
pub use crate::commands::console_response::{
    format_command_list, format_unbalanced_quotes, format_unknown_command,
};
use crate::{discord::ApiClient, emoji::EmojiResolver, theme::Theme};

/// Collaborators available to the command handlers.
///
/// # Fields
///
/// * `session` - Current user, cached settings, presences and status updates
/// * `api` - Authenticated client for the settings endpoint
/// * `emojis` - Emoji shorthand resolution
/// * `theme` - Colors of the console output
pub struct CommandContext<'a, S> {
    pub session: &'a S,
    pub api: &'a ApiClient,
    pub emojis: &'a dyn EmojiResolver,
    pub theme: &'a Theme,
}
