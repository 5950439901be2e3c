//! Deletes a person from the address book.

use crate::commands::CommandResult;
use crate::error::ExecResult;
use crate::services::AddressBookService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: usize,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person at the given index in the displayed list.\n\
        Parameters: INDEX (a positive integer)\n\
        Example: delete 1";

    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        let removed = service.remove_person(self.index)?;
        Ok(CommandResult::new(format!("Deleted Person: {}", removed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::models::{AddressBook, PersonBuilder};

    #[test]
    fn test_delete_valid_and_invalid_index() {
        let mut book = AddressBook::new();
        book.add_person(PersonBuilder::new().build().unwrap());
        let mut service = AddressBookService::new(book);

        assert_eq!(
            DeleteCommand::new(2).execute(&mut service),
            Err(CommandError::InvalidIndex)
        );

        let result = DeleteCommand::new(1).execute(&mut service).unwrap();
        assert!(result.feedback().starts_with("Deleted Person: Amy Bee"));
        assert!(service.book().is_empty());
    }
}
