//! Status command definitions.
//!
//! This module provides the [`StatusCommand`] enum and its metadata (name,
//! aliases, help page) used to register the commands in a console.

use log::debug;

use crate::commands::console_response::{
    STATUS_GET_HELP, STATUS_HELP, STATUS_SET_CUSTOM_HELP, STATUS_SET_HELP,
};

/// The status commands.
///
/// `Status` routes to `Get` or `Set` depending on its first argument, the
/// other variants are registered directly as well.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum StatusCommand {
    /// `status [get|set|update ...]`
    Status,
    /// `status-get [user]`
    Get,
    /// `status-set <status>`
    Set,
    /// `status-set-custom [-s text] [-e emoji] [-i expiry]`
    SetCustom,
}

impl StatusCommand {
    /// Every command, in registration order.
    pub const ALL: [StatusCommand; 4] = [
        StatusCommand::Status,
        StatusCommand::Get,
        StatusCommand::Set,
        StatusCommand::SetCustom,
    ];

    /// Canonical name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            StatusCommand::Status => "status",
            StatusCommand::Get => "status-get",
            StatusCommand::Set => "status-set",
            StatusCommand::SetCustom => "status-set-custom",
        }
    }

    /// Alternate names usable in place of [`Self::name`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            StatusCommand::Status | StatusCommand::Get => &[],
            StatusCommand::Set => &["status-update"],
            StatusCommand::SetCustom => &["status-custom"],
        }
    }

    /// Help page of the command.
    pub fn help(&self) -> &'static str {
        match self {
            StatusCommand::Status => STATUS_HELP,
            StatusCommand::Get => STATUS_GET_HELP,
            StatusCommand::Set => STATUS_SET_HELP,
            StatusCommand::SetCustom => STATUS_SET_CUSTOM_HELP,
        }
    }

    /// Finds the command registered under a name or an alias.
    ///
    /// # Examples
    ///
    /// ```
    /// assert_eq!(StatusCommand::resolve("status-update"), Some(StatusCommand::Set));
    /// assert_eq!(StatusCommand::resolve("unknown"), None);
    /// ```
    pub fn resolve(name: &str) -> Option<Self> {
        let command = Self::ALL
            .into_iter()
            .find(|command| command.name() == name || command.aliases().contains(&name));

        debug!("resolved {} -> {:?}", name, command);

        command
    }
}
