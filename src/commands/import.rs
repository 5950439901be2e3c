//! Imports persons from a JSON file.

use crate::commands::CommandResult;
use crate::error::{CommandError, ExecResult};
use crate::services::AddressBookService;
use crate::storage;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCommand {
    path: String,
}

impl ImportCommand {
    pub const COMMAND_WORD: &'static str = "import";
    pub const MESSAGE_USAGE: &'static str = "import: Imports persons from a JSON file holding an array of person records. \
        Persons already in the address book (by name) are skipped.\n\
        Parameters: FILE\n\
        Example: import exports/new-hires.json";

    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        let persons = storage::read_persons(Path::new(&self.path))
            .map_err(|e| CommandError::ImportFailed(e.to_string()))?;

        let total = persons.len();
        let (added, skipped) = service.import(persons);
        info!(path = %self.path, total, added, skipped, "import finished");
        Ok(CommandResult::new(format!(
            "Imported {} persons ({} duplicates skipped)",
            added, skipped
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressBook;

    #[test]
    fn test_import_missing_file_fails() {
        let mut service = AddressBookService::new(AddressBook::new());
        let err = ImportCommand::new("no/such/file.json")
            .execute(&mut service)
            .unwrap_err();
        assert!(matches!(err, CommandError::ImportFailed(_)));
    }
}
