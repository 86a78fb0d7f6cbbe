//! Configuration loading from disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{BotConfig, KEY_DELAY, KEY_MESSAGES_FILE};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("config file not found: {0}")]
    Read(#[from] std::io::Error),

    /// The `messages_file` key is absent.
    #[error("'messages_file' key is missing")]
    MissingMessagesFile,

    /// The `delay_between_messages` value is not a non-negative integer.
    #[error("invalid delay_between_messages value: {0:?}")]
    InvalidDelay(String),
}

/// Parse config file content.
///
/// One `key=value` pair per line; whitespace around key and value is trimmed;
/// blank lines and lines without `=` are skipped; a later duplicate key
/// overwrites an earlier one.
pub fn parse_config(content: &str) -> Result<BotConfig, ConfigError> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        values.insert(key.trim().to_string(), value.trim().to_string());
    }

    let messages_file = values
        .get(KEY_MESSAGES_FILE)
        .map(PathBuf::from)
        .ok_or(ConfigError::MissingMessagesFile)?;

    let raw_delay = values.get(KEY_DELAY).map(String::as_str).unwrap_or("");
    let delay_secs: u64 = raw_delay
        .parse()
        .map_err(|_| ConfigError::InvalidDelay(raw_delay.to_string()))?;

    Ok(BotConfig::new(values, delay_secs, messages_file))
}

/// Load and validate configuration from a flat key=value file.
pub fn load_config(path: &Path) -> Result<BotConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
