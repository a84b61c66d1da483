//! Console response formatters for the status commands.
//!
//! Responses are plain text annotated with `[color]` tags. Error messages are
//! prefixed with the error color of the [`Theme`].

use crate::theme::{ColorRole, Theme};

/// Help page of the `status` command.
pub const STATUS_HELP: &str = "[::b]NAME
\tstatus - view your status or the status of another user, or update your own

[::b]SYNOPSIS
\t[::b]status[::-] [get [user]|set <status>|update <status>|<user>]

[::b]DESCRIPTION
\tWithout subcommand, prints your current status or the status of the given user.
\tCheck the help pages of the subcommands for more information.

[::b]SUBCOMMANDS
\t[::b]status-get (default)
\t\tprints the status of the given user or your own
\t[::b]status-set
\t\tupdates your current status
\t[::b]status-set-custom
\t\tsets a custom status message";

/// Help page of the `status-get` command.
pub const STATUS_GET_HELP: &str = "[::b]NAME
\tstatus-get - prints your current status or the status of the given user

[::b]SYNOPSIS
\t[::b]status-get[::-] [Username|Username#NNNN|UserID[]

[::b]DESCRIPTION
\tPrints your current status if no user is given. Otherwise the user is
\tlooked up in the known presences by id, username or tag.

[::b]EXAMPLES
\t[gray]$ status-get
\t[yellow]Idle

\t[gray]$ status-get Marcel#7299
\t[green]Online";

/// Help page of the `status-set` command.
pub const STATUS_SET_HELP: &str = "[::b]NAME
\tstatus-set - updates your own status

[::b]SYNOPSIS
\t[::b]status-set[::-] <online|available|dnd|donotdisturb|busy|idle|invisible>

[::b]DESCRIPTION
\tSets your online status to the given value. Other users see the change
\timmediately. Setting yourself offline is not supported, use invisible.

[::b]EXAMPLES
\t[gray]$ status-set invisible";

/// Help page of the `status-set-custom` command.
pub const STATUS_SET_CUSTOM_HELP: &str = "[::b]NAME
\tstatus-set-custom - sets a custom status

[::b]SYNOPSIS
\t[::b]status-set-custom[::-] [OPTION[]...

[::b]DESCRIPTION
\tSets a custom status message, with an optional emoji and expiry.

[::b]OPTIONS
\t[::b]-s, --status <text>
\t\tstatus message
\t[::b]-e, --emoji <emoji|:shorthand:>
\t\temoji displayed next to the message
\t[::b]-i, --expire, --expiry <N><s|m|h>
\t\ttime after which the status is cleared

[::b]EXAMPLES
\t[gray]$ status-set-custom -s \"shining bright\" -e :sun:
\t[gray]$ status-set-custom -s \"shining bright\" -e 🌞
\t[gray]$ status-set-custom -s test -i 1h";

/// Formats a usage error for a wrong number of arguments.
pub fn format_invalid_parameters(theme: &Theme) -> String {
    format!("{}Invalid parameters", theme.tag(ColorRole::Error))
}

/// Formats the error printed when no presence matches the given key.
pub fn format_no_match(theme: &Theme, key: &str) -> String {
    format!("{}No match for '{}'.", theme.tag(ColorRole::Error), key)
}

/// Formats the listing printed when several presences match the given key.
///
/// Each tag is printed on its own line, in the given order.
pub fn format_multiple_matches(key: &str, tags: &[String]) -> String {
    let matches = tags
        .iter()
        .map(|tag| format!("\t{}", tag))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "Multiple matches were found for '{}'. Please be more precise.\n\
        The following matches were found:\n{}",
        key, matches
    )
}

/// Formats the refusal printed when a bot account runs a restricted command.
pub fn format_bot_restricted(theme: &Theme) -> String {
    format!(
        "{}This command can't be used by bots due to Discord API restrictions.",
        theme.tag(ColorRole::Error)
    )
}

/// Formats a usage error for an unknown status value.
pub fn format_invalid_status(theme: &Theme, value: &str) -> String {
    format!("{}Invalid status: '{}'", theme.tag(ColorRole::Error), value)
}

/// Formats the error returned by the status update call.
pub fn format_status_update_error(theme: &Theme, error: &anyhow::Error) -> String {
    let tag = theme.tag(ColorRole::Error);
    format!("{}Error setting status:\n\t{}'{}'", tag, tag, error)
}

pub fn format_missing_status_text(theme: &Theme) -> String {
    format!(
        "{}Error, you didn't supply a status",
        theme.tag(ColorRole::Error)
    )
}

pub fn format_invalid_emoji(theme: &Theme) -> String {
    format!("{}Invalid emoji", theme.tag(ColorRole::Error))
}

pub fn format_invalid_expiry(theme: &Theme) -> String {
    format!("{}Invalid expiry", theme.tag(ColorRole::Error))
}

pub fn format_invalid_time_character(theme: &Theme, unit: char) -> String {
    format!(
        "{}Invalid time character: {} != <s|m|h>",
        theme.tag(ColorRole::Error),
        unit
    )
}

pub fn format_encoding_error(theme: &Theme) -> String {
    format!(
        "{}Error encoding status request",
        theme.tag(ColorRole::Error)
    )
}

pub fn format_request_construction_error(theme: &Theme) -> String {
    format!(
        "{}Error constructing custom status update request.",
        theme.tag(ColorRole::Error)
    )
}

pub fn format_send_error(theme: &Theme) -> String {
    format!(
        "{}Error sending status update request.",
        theme.tag(ColorRole::Error)
    )
}

/// Formats the error printed when the service answers with another code than 200.
pub fn format_bad_status(theme: &Theme, code: u16) -> String {
    format!(
        "{}Bad status return; {} != 200",
        theme.tag(ColorRole::Error),
        code
    )
}

pub fn format_read_body_error(theme: &Theme) -> String {
    format!(
        "{}Error reading response body",
        theme.tag(ColorRole::Error)
    )
}

/// Formats the raw body of a failed response.
pub fn format_response_body(theme: &Theme, body: &str) -> String {
    format!("{}{}", theme.tag(ColorRole::Error), body)
}

pub fn format_custom_status_updated() -> String {
    "[green]Updated custom status.".to_owned()
}

/// Formats the error printed by the console for an unknown command name.
pub fn format_unknown_command(theme: &Theme, name: &str) -> String {
    format!(
        "{}Unknown command '{}'. Type 'help' for the list of commands.",
        theme.tag(ColorRole::Error),
        name
    )
}

pub fn format_unbalanced_quotes(theme: &Theme) -> String {
    format!("{}Unbalanced quotes", theme.tag(ColorRole::Error))
}

/// Formats the list of commands printed by the console `help`.
pub fn format_command_list(commands: &[(&str, &[&str])]) -> String {
    let lines = commands
        .iter()
        .map(|(name, aliases)| match aliases.is_empty() {
            true => format!("\t{}", name),
            false => format!("\t{} (aliases: {})", name, aliases.join(", ")),
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "Commands:\n{}\nType 'help <command>' for the help page of a command.",
        lines
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ERROR_COLOR;

    #[test]
    fn test_format_invalid_parameters() {
        assert_eq!(
            format_invalid_parameters(&Theme::new("#ff0000")),
            "[#ff0000]Invalid parameters"
        );
    }

    #[test]
    fn test_format_multiple_matches() {
        let tags = vec!["Marcel#7299".to_string(), "Marcel#0001".to_string()];
        assert_eq!(
            format_multiple_matches("Marcel", &tags),
            "Multiple matches were found for 'Marcel'. Please be more precise.\n\
            The following matches were found:\n\tMarcel#7299\n\tMarcel#0001"
        );
    }

    #[test]
    fn test_format_status_update_error() {
        let error = anyhow::anyhow!("rate limited");
        assert_eq!(
            format_status_update_error(&Theme::new("red"), &error),
            "[red]Error setting status:\n\t[red]'rate limited'"
        );
    }

    #[test]
    fn test_format_bad_status() {
        assert!(format_bad_status(&Theme::new(DEFAULT_ERROR_COLOR), 403).contains("403"));
    }

    #[test]
    fn test_format_command_list() {
        let no_aliases: &[&str] = &[];
        let aliases: &[&str] = &["status-custom"];
        let list = format_command_list(&[("status", no_aliases), ("status-set-custom", aliases)]);
        assert!(list.contains("\tstatus\n"));
        assert!(list.contains("\tstatus-set-custom (aliases: status-custom)"));
    }
}
