//! Persistence for the address book and the account list.
//!
//! The traits keep the front end decoupled from the on-disk format, so
//! tests can substitute in-memory stores.

pub mod json;

use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::services::Account;

pub use json::{read_persons, JsonAccountStorage, JsonAddressBookStorage};

/// Load/save for the person records.
pub trait AddressBookStorage {
    fn load(&self) -> StorageResult<AddressBook>;
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}

/// Load/save for the registered accounts.
pub trait AccountStorage {
    fn load(&self) -> StorageResult<Vec<Account>>;
    fn save(&self, accounts: &[Account]) -> StorageResult<()>;
}
