//! Status-get command handler.
//!
//! Prints the status of the current user, or of the user matching the given
//! key among the known presences. A key matches a user by id, username or
//! display tag.
//!
//! This is a read-only command.

use std::io::{Result, Write};

use log::debug;

use crate::{
    commands::{
        CommandContext,
        command::StatusCommand,
        console_response::{format_invalid_parameters, format_multiple_matches, format_no_match},
        presence_format::format_status,
    },
    discord::{Presence, Session, User},
};

/// Ways a key can designate a user. Each one is checked independently.
const USER_MATCHERS: [fn(&User, &str) -> bool; 3] = [
    |user, key| user.id == key,
    |user, key| user.username == key,
    |user, key| user.tag() == key,
];

fn matches_user(user: &User, key: &str) -> bool {
    USER_MATCHERS.iter().any(|matcher| matcher(user, key))
}

/// Prints the status of the current user or of the user designated by `args[0]`.
///
/// - No argument: status of the current user, from the cached settings
/// - One argument: status of the single matching presence, a "no match" error,
///   or the list of matching tags when the key is ambiguous
/// - More arguments: usage error followed by the help page
pub fn handle_status_get<S: Session>(
    context: &CommandContext<'_, S>,
    writer: &mut dyn Write,
    args: &[String],
) -> Result<()> {
    debug!("handling status-get command: {:?}", args);

    let theme = context.theme;

    if args.len() > 1 {
        writeln!(writer, "{}", format_invalid_parameters(theme))?;
        return writeln!(writer, "{}", StatusCommand::Get.help());
    }

    let Some(key) = args.first() else {
        let settings = context.session.settings();
        return writeln!(writer, "{}", format_status(settings.status, theme));
    };

    let matches: Vec<Presence> = context
        .session
        .presences()
        .into_iter()
        .filter(|presence| matches_user(&presence.user, key))
        .collect();

    debug!("{} presences match {}", matches.len(), key);

    match matches.as_slice() {
        [] => writeln!(writer, "{}", format_no_match(theme, key)),
        [presence] => writeln!(writer, "{}", format_status(presence.status, theme)),
        _ => {
            let tags: Vec<String> = matches.iter().map(|presence| presence.user.tag()).collect();
            writeln!(writer, "{}", format_multiple_matches(key, &tags))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::tests::{TestContext, args, output},
        discord::{MockSession, Settings, Status},
    };

    fn presence(id: &str, username: &str, discriminator: &str, status: Status) -> Presence {
        Presence {
            user: User {
                id: id.to_string(),
                username: username.to_string(),
                discriminator: discriminator.to_string(),
                bot: false,
            },
            status,
        }
    }

    fn session_with_presences(presences: Vec<Presence>) -> MockSession {
        let mut session = MockSession::new();
        session.expect_presences().return_const(presences);
        session.expect_settings().never();
        session
    }

    #[test]
    fn test_own_status() {
        let mut session = MockSession::new();
        session.expect_settings().times(1).return_const(Settings {
            status: Status::Idle,
        });
        session.expect_presences().never();
        let test_context = TestContext::new(session);

        let mut writer = Vec::new();
        handle_status_get(&test_context.context(), &mut writer, &[]).unwrap();

        assert_eq!(output(writer), "[yellow]Idle[white]\n");
    }

    #[test]
    fn test_match_by_id_username_and_tag() {
        let presences = vec![
            presence("1", "Marcel", "7299", Status::Online),
            presence("2", "Alice", "0001", Status::Idle),
        ];
        let test_context = TestContext::new(session_with_presences(presences));

        for key in ["1", "Marcel", "Marcel#7299"] {
            let mut writer = Vec::new();
            handle_status_get(&test_context.context(), &mut writer, &args(&[key])).unwrap();
            assert_eq!(output(writer), "[green]Online[white]\n");
        }
    }

    #[test]
    fn test_no_match() {
        let presences = vec![presence("1", "Marcel", "7299", Status::Online)];
        let test_context = TestContext::new(session_with_presences(presences));

        let mut writer = Vec::new();
        handle_status_get(&test_context.context(), &mut writer, &args(&["Bob"])).unwrap();

        assert_eq!(output(writer), "[red]No match for 'Bob'.\n");
    }

    #[test]
    fn test_ambiguous_match_keeps_order() {
        let presences = vec![
            presence("1", "Marcel", "7299", Status::Online),
            presence("2", "Alice", "0001", Status::Online),
            presence("3", "Marcel", "0042", Status::DoNotDisturb),
        ];
        let test_context = TestContext::new(session_with_presences(presences));

        let mut writer = Vec::new();
        handle_status_get(&test_context.context(), &mut writer, &args(&["Marcel"])).unwrap();

        let output = output(writer);
        assert!(output.starts_with("Multiple matches were found for 'Marcel'."));
        assert!(output.ends_with("\tMarcel#7299\n\tMarcel#0042\n"));
        assert!(!output.contains("Online"));
    }

    #[test]
    fn test_too_many_args() {
        let mut session = MockSession::new();
        session.expect_presences().never();
        session.expect_settings().never();
        let test_context = TestContext::new(session);

        let mut writer = Vec::new();
        handle_status_get(&test_context.context(), &mut writer, &args(&["a", "b"])).unwrap();

        let output = output(writer);
        assert!(output.starts_with("[red]Invalid parameters\n"));
        assert!(output.contains(StatusCommand::Get.help()));
    }
}
