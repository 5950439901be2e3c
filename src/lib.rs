//! Staffbook - a terminal contact manager for organisation staff and the
//! devices issued to them.
//!
//! Typed commands are parsed into a closed set of command values and run
//! against an in-memory address book, behind a two-tier login gate
//! (administrator vs IT staff).
//!
//! # Architecture
//!
//! - **domain**: validated value objects for person fields
//! - **models**: the `Person` aggregate and the `AddressBook`
//! - **parser**: command-word dispatch and per-command argument parsers
//! - **commands**: the command variants and `CommandResult`
//! - **services**: application state and the account/access-level model
//! - **storage**: JSON persistence for persons and accounts
//! - **config**: configuration from environment variables
//! - **repl**: the terminal front end
//! - **error**: custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod repl;
pub mod services;
pub mod storage;

// Re-export commonly used types
pub use commands::{Command, CommandResult};
pub use config::Config;
pub use error::{AccountError, CommandError, ConfigError, ParseError, StorageError};
pub use models::{AddressBook, Person, PersonBuilder};
pub use parser::CommandParser;
pub use repl::{Repl, Session};
pub use services::{AccessLevel, Account, AccountService, AddressBookService, SearchField};
pub use storage::{JsonAccountStorage, JsonAddressBookStorage};
