//! Status-set-custom command handler.
//!
//! Sets a custom status message on the current user, with an optional emoji
//! and expiry. The flags are extracted by [`extract_custom_status`], then the
//! request is sent as a `PATCH` on the settings endpoint:
//!
//! ```json
//! {"custom_status":{"text":"shining bright","emoji_name":"🌞"}}
//! ```
//!
//! # Errors
//!
//! Every failure is written to the output and stops the command: invalid
//! flags, encoding, request construction, transport, and any answer other
//! than `200 OK` (whose body is printed).

use std::io::{Result, Write};

use chrono::Utc;
use log::{debug, error, info, warn};
use reqwest::StatusCode;

use crate::{
    commands::{
        CommandContext,
        command::StatusCommand,
        console_response::{
            format_bad_status, format_bot_restricted, format_custom_status_updated,
            format_encoding_error, format_invalid_emoji, format_invalid_expiry,
            format_invalid_parameters, format_invalid_time_character, format_missing_status_text,
            format_read_body_error, format_request_construction_error, format_response_body,
            format_send_error,
        },
        expiry::ExpiryError,
        flags::{CustomStatusRequest, FlagError, extract_custom_status},
    },
    discord::Session,
    theme::Theme,
};

/// Formats a flag extraction error into a human-readable message.
fn format_flag_error(error: FlagError, theme: &Theme) -> String {
    match error {
        FlagError::MissingStatus => format_missing_status_text(theme),
        FlagError::InvalidEmoji => format_invalid_emoji(theme),
        FlagError::InvalidExpiry(ExpiryError::InvalidUnit(unit)) => {
            format_invalid_time_character(theme, unit)
        }
        FlagError::InvalidExpiry(_) => format_invalid_expiry(theme),
    }
}

/// Sets the custom status described by the `-s`, `-e` and `-i` flags of `args`.
pub async fn handle_status_set_custom<S: Session>(
    context: &CommandContext<'_, S>,
    writer: &mut dyn Write,
    args: &[String],
) -> Result<()> {
    debug!("handling status-set-custom command: {:?}", args);

    let theme = context.theme;

    if context.session.current_user().bot {
        debug!("status-set-custom refused for bot account");
        return writeln!(writer, "{}", format_bot_restricted(theme));
    }

    if args.is_empty() {
        writeln!(writer, "{}", format_invalid_parameters(theme))?;
        return writeln!(writer, "{}", StatusCommand::SetCustom.help());
    }

    let custom_status = match extract_custom_status(args, context.emojis, Utc::now()) {
        Ok(custom_status) => custom_status,
        Err(e) => {
            debug!("invalid custom status flags: {:?}", e);
            return writeln!(writer, "{}", format_flag_error(e, theme));
        }
    };

    let body = match serde_json::to_vec(&CustomStatusRequest { custom_status }) {
        Ok(body) => body,
        Err(e) => {
            error!("failed to encode custom status: {}", e);
            return writeln!(writer, "{}", format_encoding_error(theme));
        }
    };

    let request = match context.api.build_settings_patch(body) {
        Ok(request) => request,
        Err(e) => {
            error!("failed to build custom status request: {}", e);
            return writeln!(writer, "{}", format_request_construction_error(theme));
        }
    };

    // The response, and its body, is released when it goes out of scope on every path
    let response = match context.api.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            error!("failed to send custom status request: {}", e);
            return writeln!(writer, "{}", format_send_error(theme));
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        warn!("custom status request answered with {}", status);
        writeln!(writer, "{}", format_bad_status(theme, status.as_u16()))?;
        return match response.text().await {
            Ok(body) => writeln!(writer, "{}", format_response_body(theme, &body)),
            Err(e) => {
                error!("failed to read response body: {}", e);
                writeln!(writer, "{}", format_read_body_error(theme))
            }
        };
    }
    drop(response);

    info!("custom status updated");

    writeln!(writer, "{}", format_custom_status_updated())
}
