//! Application services: mutable state behind the commands.

pub mod account_service;
pub mod address_book_service;

pub use account_service::{AccessLevel, Account, AccountService};
pub use address_book_service::{AddressBookService, SearchField};
