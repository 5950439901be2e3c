//! Configuration management for staffbook.
//!
//! This module handles loading and validating configuration from
//! environment variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book JSON lives (default: data/addressbook.json)
    pub data_file: PathBuf,

    /// Where the account list JSON lives (default: data/accounts.json)
    pub accounts_file: PathBuf,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `STAFFBOOK_DATA_FILE`: address book file path
    /// - `STAFFBOOK_ACCOUNTS_FILE`: account list file path
    /// - `LOG_LEVEL`: logging level
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = Self::path_var("STAFFBOOK_DATA_FILE", "data/addressbook.json")?;
        let accounts_file = Self::path_var("STAFFBOOK_ACCOUNTS_FILE", "data/accounts.json")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_file,
            accounts_file,
            log_level,
        })
    }

    /// Read a path from an environment variable with a default value.
    fn path_var(var_name: &str, default: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                Ok(PathBuf::from(val))
            }
            Err(_) => Ok(PathBuf::from(default)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("data/addressbook.json"),
            accounts_file: PathBuf::from("data/accounts.json"),
            log_level: "warn".to_string(),
        }
    }
}
