//! Cordstat - A console command interpreter for Discord presence and custom status.
//!
//! Cordstat reads command lines, resolves them to status commands and prints a
//! lightly color annotated response.
//!
//! # Commands
//!
//! - `status [get [user]|set <status>|update <status>|<user>]` - View or update a status
//! - `status-get [user]` - Print your status, or the status of a user by id, username or tag
//! - `status-set <status>` (alias `status-update`) - Set your status
//! - `status-set-custom [-s text] [-e emoji] [-i <N><s|m|h>]` (alias `status-custom`) - Set a custom status
//! - `help [command]` - List the commands or print the help page of one
//! - `exit` - Leave the console
//!
//! # Configuration
//!
//! Create a `config.yaml` file:
//!
//! ```yaml
//! discord:
//!   api_url: "https://discord.com/api/v9"
//!   token: "your-token"
//!
//! theme:
//!   error_color: "#ff0000"
//! ```
//!
//! Any value can be overridden with a `CORDSTAT_` environment variable:
//!
//! ```bash
//! export CORDSTAT_DISCORD__TOKEN="your-token"
//! ```
//!
//! # Usage
//!
//! ```bash
//! cordstat --config config.yaml
//! cordstat --config config.yaml --command 'status-set-custom -s "shining bright" -e :sun:'
//! ```
//!
//! # Architecture
//!
//! - [`commands`] - Command resolution, handlers and response formatting
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`console`] - Line reading and tokenizing
//! - [`discord`] - Data structures, session and REST API client
//! - [`emoji`] - Emoji shorthand resolution
//! - [`theme`] - Output colors
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`), logs go to stderr

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{
    commands::Commander,
    config::Config,
    console::LineOutcome,
    discord::{ApiClient, HttpSession},
    emoji::EmojiTable,
    theme::Theme,
};

mod commands;
mod config;
mod console;
mod discord;
mod emoji;
mod theme;

/// Command-line arguments for cordstat.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: String,

    /// Command line to execute instead of reading commands from stdin.
    ///
    /// ```bash
    /// cordstat --config config.yaml --command "status-set idle"
    /// ```
    #[arg(long)]
    command: Option<String>,
}

/// Main entry point for cordstat.
///
/// 1. **Logging Setup**: `info` level by default, overridden by `RUST_LOG`
/// 2. **Configuration Loading**: YAML file merged with `CORDSTAT_` variables
/// 3. **Session**: fetches the current user and its settings
/// 4. **Execution**: runs `--command`, or the console until `exit`
///
/// Configuration and login failures are logged and end the process without panicking.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting cordstat {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    let api = ApiClient::new(&config.discord.api_url, &config.discord.token);
    let session = match HttpSession::connect(api.clone()).await {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to open session: {}", e);
            return;
        }
    };

    let commander = Commander::new(
        session,
        api,
        Box::new(EmojiTable::new(&config.emojis)),
        Theme::new(&config.theme.error_color),
    );

    let result = match args.command {
        Some(line) => {
            let mut stdout = std::io::stdout();
            console::run_line(&commander, &line, &mut stdout)
                .await
                .map(|_: LineOutcome| ())
        }
        None => console::run(&commander).await,
    };

    if let Err(e) = result {
        error!("Failed to write output: {}", e);
    }
}
