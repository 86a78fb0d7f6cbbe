//! Configuration schema.
//!
//! The config file is a flat `key=value` text file; everything lands in a raw
//! string map, with the two keys the bot cannot run without promoted to typed
//! fields at load time.

use std::collections::HashMap;
use std::path::PathBuf;

/// Key naming the messages file. Required.
pub const KEY_MESSAGES_FILE: &str = "messages_file";

/// Key naming the base delay (in whole seconds) between sends. Required.
pub const KEY_DELAY: &str = "delay_between_messages";

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Raw key/value pairs as parsed from disk.
    values: HashMap<String, String>,

    /// Base delay in seconds between consecutive sends.
    pub delay_secs: u64,

    /// Path to the newline-delimited messages file.
    pub messages_file: PathBuf,
}

impl BotConfig {
    pub(crate) fn new(
        values: HashMap<String, String>,
        delay_secs: u64,
        messages_file: PathBuf,
    ) -> Self {
        Self {
            values,
            delay_secs,
            messages_file,
        }
    }

    /// Look up a raw config value. Absent keys read as the empty string.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Value sent as the `User-ID` header.
    pub fn user_id(&self) -> &str {
        self.get("user_id")
    }

    /// Value sent as the `Authorization` header.
    pub fn token(&self) -> &str {
        self.get("token")
    }

    /// Channel the messages endpoint is keyed on.
    pub fn channel_id(&self) -> &str {
        self.get("channel_id")
    }

    /// Value sent as the `Referrer` header, and logged at startup.
    pub fn channel_url(&self) -> &str {
        self.get("channel_url")
    }
}
