//! Status-set command handler.
//!
//! Updates the status of the current user. Accepted values (case-insensitive):
//!
//! | Value | Status |
//! |-------|--------|
//! | `online`, `available` | Online |
//! | `dnd`, `donotdisturb`, `busy` | Do not disturb |
//! | `idle` | Idle |
//! | `invisible` | Invisible |
//!
//! `offline` is not accepted, the service does not allow setting it directly.

use std::io::{Result, Write};

use log::{debug, error, info};

use crate::{
    commands::{
        CommandContext,
        command::StatusCommand,
        console_response::{
            format_bot_restricted, format_invalid_parameters, format_invalid_status,
            format_status_update_error,
        },
    },
    discord::{Session, Status},
};

/// Maps a lowercase user value to a status.
fn parse_status(value: &str) -> Option<Status> {
    match value {
        "online" | "available" => Some(Status::Online),
        "dnd" | "donotdisturb" | "busy" => Some(Status::DoNotDisturb),
        "idle" => Some(Status::Idle),
        "invisible" => Some(Status::Invisible),
        _ => None,
    }
}

/// Sets the status of the current user to `args[0]`.
///
/// On success the cached settings of the session are replaced by the ones
/// sent back by the service, so `status-get` reflects the change.
pub async fn handle_status_set<S: Session>(
    context: &CommandContext<'_, S>,
    writer: &mut dyn Write,
    args: &[String],
) -> Result<()> {
    debug!("handling status-set command: {:?}", args);

    let theme = context.theme;

    if context.session.current_user().bot {
        debug!("status-set refused for bot account");
        return writeln!(writer, "{}", format_bot_restricted(theme));
    }

    let [value] = args else {
        writeln!(writer, "{}", format_invalid_parameters(theme))?;
        return writeln!(writer, "{}", StatusCommand::Set.help());
    };

    let value = value.to_lowercase();
    let Some(status) = parse_status(&value) else {
        debug!("invalid status {}", value);
        writeln!(writer, "{}", format_invalid_status(theme, &value))?;
        return writeln!(writer, "{}", StatusCommand::Set.help());
    };

    match context.session.update_status(status).await {
        Err(e) => {
            error!("failed to update status: {}", e);
            writeln!(writer, "{}", format_status_update_error(theme, &e))
        }
        Ok(Some(settings)) => {
            info!("status updated to {:?}", settings.status);
            context.session.set_settings(settings);
            Ok(())
        }
        Ok(None) => {
            info!("status updated to {:?}", status);
            Ok(())
        }
    }
}
