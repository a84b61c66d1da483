//! Status command handler.
//!
//! Routes to the status-get or status-set handlers depending on the first
//! argument:
//!
//! - `status set <value>` / `status update <value>` → status-set with `<value>`
//! - `status get [user]` → status-get with `[user]`
//! - `status <user>` → status-get with `<user>`
//! - `status` → status-get without arguments

use std::io::{Result, Write};

use log::debug;

use crate::{
    commands::{
        CommandContext,
        actions::{handle_status_get, handle_status_set},
    },
    discord::Session,
};

pub async fn handle_status<S: Session>(
    context: &CommandContext<'_, S>,
    writer: &mut dyn Write,
    args: &[String],
) -> Result<()> {
    debug!("handling status command: {:?}", args);

    match args.split_first() {
        Some((subcommand, rest)) if subcommand == "set" || subcommand == "update" => {
            handle_status_set(context, writer, rest).await
        }
        Some((subcommand, rest)) if subcommand == "get" => {
            handle_status_get(context, writer, rest)
        }
        // Anything else is a user key
        _ => handle_status_get(context, writer, args),
    }
}
