//! Line based console driving the status commands.
//!
//! Each line is split with shell-like quoting, so `-s "shining bright"` is a
//! single argument. The first token names the command (or an alias), the
//! remaining tokens are its arguments. Lines are executed one after the other.

use std::io::{self, Write};

use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    commands::{
        Commander, StatusCommand, format_command_list, format_unbalanced_quotes,
        format_unknown_command,
    },
    discord::Session,
};

/// What the console should do after a line.
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Executes a single console line.
///
/// Besides the status commands, the console understands `help [command]`
/// and `exit` / `quit`. Empty lines are ignored.
pub async fn run_line<S: Session>(
    commander: &Commander<S>,
    line: &str,
    writer: &mut dyn Write,
) -> io::Result<LineOutcome> {
    let Some(tokens) = shlex::split(line) else {
        writeln!(writer, "{}", format_unbalanced_quotes(commander.theme()))?;
        return Ok(LineOutcome::Continue);
    };

    let Some((name, args)) = tokens.split_first() else {
        return Ok(LineOutcome::Continue);
    };

    debug!("console line: {} {:?}", name, args);

    match name.as_str() {
        "exit" | "quit" => return Ok(LineOutcome::Exit),
        "help" => match args.first() {
            None => {
                let commands: Vec<(&str, &[&str])> = StatusCommand::ALL
                    .iter()
                    .map(|command| (command.name(), command.aliases()))
                    .collect();
                writeln!(writer, "{}", format_command_list(&commands))?;
            }
            Some(name) => match StatusCommand::resolve(name) {
                Some(command) => commander.print_help(command, writer)?,
                None => writeln!(writer, "{}", format_unknown_command(commander.theme(), name))?,
            },
        },
        _ => match StatusCommand::resolve(name) {
            Some(command) => commander.execute(command, writer, args).await?,
            None => writeln!(writer, "{}", format_unknown_command(commander.theme(), name))?,
        },
    }

    Ok(LineOutcome::Continue)
}

/// Reads lines from stdin and executes them until `exit` or end of input.
pub async fn run<S: Session>(commander: &Commander<S>) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    info!("console ready, type 'help' for the list of commands");

    while let Some(line) = lines.next_line().await? {
        let outcome = run_line(commander, &line, &mut stdout).await?;
        stdout.flush()?;

        if outcome == LineOutcome::Exit {
            break;
        }
    }

    info!("console closed");

    Ok(())
}
