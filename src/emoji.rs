//! Emoji shorthand resolution.
//!
//! Custom statuses accept either a literal emoji (`🌞`) or a shorthand
//! (`:sun:`). The [`EmojiResolver`] trait abstracts the lookup so the command
//! handlers can be tested with a mock table.

use std::collections::HashMap;

use mockall::automock;

/// Built-in shorthand table.
const BUILTIN_EMOJIS: &[(&str, &str)] = &[
    (":sun:", "🌞"),
    (":snail:", "🐌"),
    (":smile:", "😄"),
    (":heart:", "❤️"),
    (":fire:", "🔥"),
    (":tada:", "🎉"),
    (":coffee:", "☕"),
    (":zzz:", "💤"),
    (":rocket:", "🚀"),
    (":thumbsup:", "👍"),
];

/// Resolves emoji tokens typed by the user.
#[automock]
pub trait EmojiResolver {
    /// Returns `true` if the token already contains a literal emoji.
    fn is_emoji(&self, token: &str) -> bool;
    /// Returns the literal emoji of a shorthand, or the token unchanged if unknown.
    fn replace(&self, token: &str) -> String;
}

/// Shorthand table backed [`EmojiResolver`].
#[derive(Debug)]
pub struct EmojiTable {
    /// Shorthand → literal emoji
    shorthands: HashMap<String, String>,
}

impl EmojiTable {
    /// Creates a table with the built-in shorthands, extended (or overridden) by `extra`.
    pub fn new(extra: &HashMap<String, String>) -> Self {
        let mut shorthands: HashMap<String, String> = BUILTIN_EMOJIS
            .iter()
            .map(|(shorthand, emoji)| (shorthand.to_string(), emoji.to_string()))
            .collect();
        shorthands.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        EmojiTable { shorthands }
    }
}

impl EmojiResolver for EmojiTable {
    fn is_emoji(&self, token: &str) -> bool {
        self.shorthands
            .values()
            .any(|emoji| token.contains(emoji.as_str()))
    }

    fn replace(&self, token: &str) -> String {
        match self.shorthands.get(token) {
            Some(emoji) => emoji.clone(),
            None => token.to_owned(),
        }
    }
}
