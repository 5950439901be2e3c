//! Adds a person to the address book.

use crate::commands::CommandResult;
use crate::error::{CommandError, ExecResult};
use crate::models::Person;
use crate::services::AddressBookService;

#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS o/ORG_ID d/DEVICE_INFO [t/TAG]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 o/0000000123 d/Laptop-42 t/friends";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        if service.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        service.add_person(self.person.clone());
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressBook, PersonBuilder};

    #[test]
    fn test_add_then_duplicate_rejected() {
        let mut service = AddressBookService::new(AddressBook::new());
        let amy = PersonBuilder::new().build().unwrap();

        let result = AddCommand::new(amy.clone()).execute(&mut service).unwrap();
        assert!(result.feedback().starts_with("New person added: Amy Bee"));
        assert_eq!(service.book().len(), 1);

        let same_name = PersonBuilder::new().with_phone("91234567").build().unwrap();
        assert_eq!(
            AddCommand::new(same_name).execute(&mut service),
            Err(CommandError::DuplicatePerson)
        );
    }
}
