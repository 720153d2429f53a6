//! The configuration of the `mrweb` command line tool.
//!
//! See `default.toml` next to this file for the documented defaults.

use serde::Deserialize;
pub use validator::Validate;

/// The embedded default configuration file.
pub const DEFAULT_CONFIG_STR: &str = include_str!("default.toml");

/// See [`crate::Client::from_config`] for how this becomes a client.
#[non_exhaustive]
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Config {
    /// The MrWeb API host.
    #[validate(url(message = "base_url must be a valid URL"))]
    pub base_url: String,
    /// Request timeout in seconds, `0` means no timeout.
    pub timeout: u64,
    /// Use the public test key.
    #[serde(default)]
    pub use_test_key: bool,
    /// Read the key from `MRWEB_APIKEY`.
    #[serde(default)]
    pub api_key_from_env: bool,
    /// The API key.
    #[serde(default)]
    #[validate(length(min = 1, message = "api_key must not be empty"))]
    pub api_key: Option<String>,
}
