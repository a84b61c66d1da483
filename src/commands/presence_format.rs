//! Styled labels for presence statuses.

use crate::{
    discord::Status,
    theme::{ColorRole, Theme},
};

/// Formats a status into a colored, human readable label.
///
/// "Do not disturb" uses the error color of the theme, the other labels use
/// fixed colors.
pub fn format_status(status: Status, theme: &Theme) -> String {
    match status {
        Status::Online => "[green]Online[white]".to_owned(),
        Status::DoNotDisturb => format!("{}Do not disturb[white]", theme.tag(ColorRole::Error)),
        Status::Idle => "[yellow]Idle[white]".to_owned(),
        Status::Invisible => "[gray]Invisible[white]".to_owned(),
        Status::Offline => "[gray]Offline[white]".to_owned(),
        Status::Unknown => "Unknown status".to_owned(),
    }
}
