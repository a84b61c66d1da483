//! Configuration file structures for cordstat.
//!
//! The configuration is read from a YAML file and can be overridden with
//! environment variables prefixed with `CORDSTAT_` (nested keys are separated
//! by `__`, e.g. `CORDSTAT_DISCORD__TOKEN`).
//!
//! ```yaml
//! discord:
//!   # Base URL of the REST API, without trailing slash
//!   api_url: "https://discord.com/api/v9"
//!   # Value sent in the authorization header
//!   token: "your-token"
//!
//! theme:
//!   # Color tag used for error messages
//!   error_color: "#ff0000"
//!
//! # Additional emoji shorthands
//! emojis:
//!   ":party:": "🥳"
//! ```

use std::collections::HashMap;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Default base URL of the REST API.
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v9";

/// Default color used to tag errors.
pub const DEFAULT_ERROR_COLOR: &str = "red";

/// Root configuration structure.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Remote service settings
    pub discord: Discord,
    /// Output styling
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Extra emoji shorthands, merged over the built-in table
    #[serde(default)]
    pub emojis: HashMap<String, String>,
}

/// Remote service configuration.
#[derive(Debug, Deserialize)]
pub struct Discord {
    /// Base URL of the REST API.
    ///
    /// Trailing slashes are removed by [`Config::load`].
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Token sent verbatim in the `authorization` header.
    pub token: String,
}

/// Output styling configuration.
#[derive(Debug, Deserialize)]
pub struct ThemeConfig {
    /// Color tag used to prefix error messages
    #[serde(default = "default_error_color")]
    pub error_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            error_color: default_error_color(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

fn default_error_color() -> String {
    DEFAULT_ERROR_COLOR.to_owned()
}

impl Config {
    /// Loads the configuration from a YAML file merged with `CORDSTAT_` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file is not valid YAML or if a required
    /// value (such as `discord.token`) is missing from both the file and the environment.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        let mut config: Config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("CORDSTAT_").split("__"))
            .extract()?;

        // Normalize API URL by removing trailing slashes
        while config.discord.api_url.ends_with('/') {
            config.discord.api_url.pop();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_full_config() {
        let file = write_config(
            "discord:\n  api_url: \"http://localhost:8080/api/\"\n  token: \"abc\"\ntheme:\n  error_color: \"#ff0000\"\nemojis:\n  \":party:\": \"🥳\"\n",
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.discord.api_url, "http://localhost:8080/api");
        assert_eq!(config.discord.token, "abc");
        assert_eq!(config.theme.error_color, "#ff0000");
        assert_eq!(config.emojis.get(":party:").unwrap(), "🥳");
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        let file = write_config("discord:\n  token: \"abc\"\n");

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.discord.api_url, DEFAULT_API_URL);
        assert_eq!(config.theme.error_color, DEFAULT_ERROR_COLOR);
        assert!(config.emojis.is_empty());
    }

    #[test]
    #[serial]
    fn test_load_missing_token() {
        let file = write_config("theme:\n  error_color: \"red\"\n");
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    #[serial]
    fn test_load_env_override() {
        let file = write_config("discord:\n  token: \"from-file\"\n");

        // SAFETY: serialized with the other config tests, no concurrent env access
        unsafe { std::env::set_var("CORDSTAT_DISCORD__TOKEN", "from-env") };
        let config = Config::load(file.path().to_str().unwrap());
        unsafe { std::env::remove_var("CORDSTAT_DISCORD__TOKEN") };

        assert_eq!(config.unwrap().discord.token, "from-env");
    }
}
