//! JSON file storage for the address book and the account list.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Person};
use crate::services::Account;
use crate::storage::{AccountStorage, AddressBookStorage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn io_err(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn malformed(path: &Path, source: serde_json::Error) -> StorageError {
    StorageError::Malformed {
        path: path.display().to_string(),
        source,
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_err(path, e))?;
        }
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| malformed(path, e))?;
    fs::write(path, json).map_err(|e| io_err(path, e))
}

/// Read a JSON array of persons, the `import` command's file format.
pub fn read_persons(path: &Path) -> StorageResult<Vec<Person>> {
    let data = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_json::from_str(&data).map_err(|e| malformed(path, e))
}

/// Address book persistence at a fixed JSON file path.
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    /// A missing file is an empty book, so first launch works without
    /// any setup.
    fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(AddressBook::new());
        }
        let data = fs::read_to_string(&self.path).map_err(|e| io_err(&self.path, e))?;
        let book: AddressBook = serde_json::from_str(&data).map_err(|e| malformed(&self.path, e))?;
        debug!(path = %self.path.display(), persons = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        write_json(&self.path, book)
    }
}

/// Account list persistence at a fixed JSON file path.
#[derive(Debug, Clone)]
pub struct JsonAccountStorage {
    path: PathBuf,
}

impl JsonAccountStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AccountStorage for JsonAccountStorage {
    fn load(&self) -> StorageResult<Vec<Account>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path).map_err(|e| io_err(&self.path, e))?;
        serde_json::from_str(&data).map_err(|e| malformed(&self.path, e))
    }

    fn save(&self, accounts: &[Account]) -> StorageResult<()> {
        write_json(&self.path, &accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonBuilder;

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonAddressBookStorage::new(dir.path().join("book.json"));
        assert!(storage.load().unwrap().is_empty());

        let accounts = JsonAccountStorage::new(dir.path().join("accounts.json"));
        assert!(accounts.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_persons() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonAddressBookStorage::new(dir.path().join("nested/book.json"));

        let mut book = AddressBook::new();
        book.add_person(PersonBuilder::new().with_tags(["friends"]).build().unwrap());
        book.add_person(
            PersonBuilder::new()
                .with_name("Bob Choo")
                .with_phone("91230000")
                .with_status("blocked")
                .build()
                .unwrap(),
        );

        storage.save(&book).unwrap();
        assert_eq!(storage.load().unwrap(), book);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = fs::canonicalize(dir.path()).unwrap().join("book.json");
        fs::write(&path, "{not json").unwrap();

        let storage = JsonAddressBookStorage::new(&path);
        assert!(matches!(
            storage.load(),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn test_read_persons_rejects_invalid_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        // phone fails validation during deserialize
        fs::write(
            &path,
            r#"[{"name":"Amy Bee","phone":"12","email":"amy@gmail.com","address":"a",
                "org_id":"0000000555","device_info":"Device123"}]"#,
        )
        .unwrap();
        assert!(matches!(
            read_persons(&path),
            Err(StorageError::Malformed { .. })
        ));
    }
}
