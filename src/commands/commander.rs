//! Command execution.
//!
//! This module provides the [`Commander`] struct, which owns the collaborators
//! of the status commands and routes each command to its handler.
//!
//! # Examples
//!
//! ```no_run
//! # use cordstat::commands::{Commander, StatusCommand};
//! # async fn example(commander: Commander<cordstat::discord::HttpSession>) -> std::io::Result<()> {
//! let mut stdout = std::io::stdout();
//! let args = vec!["set".to_string(), "idle".to_string()];
//! commander.execute(StatusCommand::Status, &mut stdout, &args).await?;
//! # Ok(())
//! # }
//! ```

use std::io::{Result, Write};

use log::debug;

use crate::{
    commands::{
        CommandContext,
        actions::{
            handle_status, handle_status_get, handle_status_set, handle_status_set_custom,
        },
        command::StatusCommand,
    },
    discord::{ApiClient, Session},
    emoji::EmojiResolver,
    theme::Theme,
};

/// Executes the status commands against a session.
///
/// The collaborators are given at construction time, the handlers don't read
/// any global state.
pub struct Commander<S: Session> {
    /// Session of the current user
    session: S,
    /// Authenticated client for the custom status requests
    api: ApiClient,
    /// Emoji shorthand resolution
    emojis: Box<dyn EmojiResolver>,
    /// Colors of the console output
    theme: Theme,
}

impl<S: Session> Commander<S> {
    pub fn new(session: S, api: ApiClient, emojis: Box<dyn EmojiResolver>, theme: Theme) -> Self {
        Commander {
            session,
            api,
            emojis,
            theme,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn context(&self) -> CommandContext<'_, S> {
        CommandContext {
            session: &self.session,
            api: &self.api,
            emojis: self.emojis.as_ref(),
            theme: &self.theme,
        }
    }

    /// Executes a command with its argument tokens, writing the response to `writer`.
    ///
    /// Command failures are written as text; an error is only returned when
    /// writing to `writer` fails.
    ///
    /// # Command Handlers
    ///
    /// - [`StatusCommand::Status`] → [`handle_status`]
    /// - [`StatusCommand::Get`] → [`handle_status_get`]
    /// - [`StatusCommand::Set`] → [`handle_status_set`]
    /// - [`StatusCommand::SetCustom`] → [`handle_status_set_custom`]
    pub async fn execute(
        &self,
        command: StatusCommand,
        writer: &mut dyn Write,
        args: &[String],
    ) -> Result<()> {
        debug!("executing {} with {:?}", command.name(), args);

        let context = self.context();
        match command {
            StatusCommand::Status => handle_status(&context, writer, args).await,
            StatusCommand::Get => handle_status_get(&context, writer, args),
            StatusCommand::Set => handle_status_set(&context, writer, args).await,
            StatusCommand::SetCustom => handle_status_set_custom(&context, writer, args).await,
        }
    }

    /// Writes the help page of a command.
    pub fn print_help(&self, command: StatusCommand, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "{}", command.help())
    }
}
