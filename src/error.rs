//! Error types for staffbook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced while turning user input into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input did not match the `word + arguments` shape, or a
    /// command's argument tail was malformed. Carries the usage text of
    /// the command the user should consult.
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: String },

    /// The leading word is not in the known command set.
    #[error("Unknown command")]
    UnknownCommand,

    /// The command exists but is not available with IT staff access rights.
    #[error("This command requires administrator access rights!")]
    InsufficientAccessRights,

    /// A field value inside the argument tail failed validation.
    #[error("{0}")]
    InvalidValue(String),
}

impl ParseError {
    /// Format error pointing the user at `usage`.
    pub fn invalid_format(usage: &str) -> Self {
        ParseError::InvalidFormat {
            usage: usage.to_string(),
        }
    }
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        ParseError::InvalidValue(err.to_string())
    }
}

/// Errors produced while executing an already-parsed command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Adding or editing would produce two persons with the same name.
    #[error("This person already exists in the address book")]
    DuplicatePerson,

    /// The 1-based index does not point into the visible person list.
    #[error("The person index provided is invalid")]
    InvalidIndex,

    /// The import file could not be read or decoded.
    #[error("Import failed: {0}")]
    ImportFailed(String),
}

/// Errors that can occur while loading or saving data files.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not decode as the expected JSON shape.
    #[error("Malformed data file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors from account registration and lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Username and password cannot be empty")]
    EmptyCredentials,

    #[error("An account with this username already exists")]
    DuplicateUsername,
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type ExecResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
