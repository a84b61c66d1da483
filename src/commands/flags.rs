//! Flag extraction for the `status-set-custom` command.
//!
//! Walks the argument tokens in order. A recognized flag consumes the token
//! right after it as its value, so a value is never read as a flag. Tokens
//! that are neither flags nor values are ignored.
//!
//! | Flags | Field | Value |
//! |-------|-------|-------|
//! | `-s`, `--status` | `text` | verbatim |
//! | `-e`, `--emoji` | `emoji_name` | literal emoji or known shorthand |
//! | `-i`, `--expire`, `--expiry` | `expires_at` | `<N><s\|m\|h>` from now |

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    commands::expiry::{ExpiryError, format_timestamp, parse_expiry},
    emoji::EmojiResolver,
};

/// Fields of a custom status. Missing fields are left out of the request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_name: Option<String>,
    /// RFC 3339 timestamp after which the service clears the status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Body of the custom status settings update.
///
/// ```json
/// {"custom_status":{"text":"snail","expires_at":"2020-01-05T08:00:00.000Z","emoji_name":"🐌"}}
/// ```
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomStatusRequest {
    pub custom_status: CustomStatus,
}

/// Flag families recognized by [`extract_custom_status`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum Flag {
    Status,
    Emoji,
    Expiry,
}

impl Flag {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "-s" | "--status" => Some(Flag::Status),
            "-e" | "--emoji" => Some(Flag::Emoji),
            "-i" | "--expire" | "--expiry" => Some(Flag::Expiry),
            _ => None,
        }
    }
}

/// Errors that stop the flag extraction.
#[derive(Debug, PartialEq)]
pub enum FlagError {
    /// `-s` is the last token
    MissingStatus,
    /// The `-e` value is neither a literal emoji nor a known shorthand
    InvalidEmoji,
    /// The `-i` value has a valid shape but can't be turned into a timestamp
    InvalidExpiry(ExpiryError),
}

/// Extracts the custom status fields from the argument tokens.
///
/// A missing value after `-e` or `-i` is skipped, as is an `-i` value that
/// does not look like a duration. A missing value after `-s` is an error.
///
/// # Arguments
///
/// * `tokens` - The command arguments
/// * `emojis` - Resolver for the `-e` values
/// * `now` - Reference time for the `-i` values
pub fn extract_custom_status(
    tokens: &[String],
    emojis: &dyn EmojiResolver,
    now: DateTime<Utc>,
) -> Result<CustomStatus, FlagError> {
    let mut custom_status = CustomStatus::default();
    let mut index = 0;

    while index < tokens.len() {
        let Some(flag) = Flag::from_token(&tokens[index]) else {
            index += 1;
            continue;
        };

        let Some(value) = tokens.get(index + 1) else {
            debug!("no value for flag {:?}", flag);
            if flag == Flag::Status {
                return Err(FlagError::MissingStatus);
            }
            break;
        };

        match flag {
            Flag::Status => custom_status.text = Some(value.clone()),
            Flag::Emoji => custom_status.emoji_name = Some(resolve_emoji(value, emojis)?),
            Flag::Expiry => match parse_expiry(value, now) {
                Ok(expires_at) => custom_status.expires_at = Some(format_timestamp(&expires_at)),
                Err(ExpiryError::Malformed) => debug!("ignoring malformed expiry {}", value),
                Err(e) => return Err(FlagError::InvalidExpiry(e)),
            },
        }

        index += 2;
    }

    debug!("extracted custom status {:?}", custom_status);

    Ok(custom_status)
}

fn resolve_emoji(token: &str, emojis: &dyn EmojiResolver) -> Result<String, FlagError> {
    if emojis.is_emoji(token) {
        return Ok(token.to_owned());
    }

    let emoji = emojis.replace(token);
    if emoji != token {
        return Ok(emoji);
    }

    debug!("invalid emoji {}", token);
    Err(FlagError::InvalidEmoji)
}
