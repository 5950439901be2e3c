//! Finds persons whose names contain any of the given keywords.

use crate::commands::{persons_listed, CommandResult};
use crate::error::ExecResult;
use crate::services::AddressBookService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of the given keywords \
        (case-insensitive, whole words) and lists them.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        let count = service.filter_by_name_keywords(&self.keywords);
        Ok(CommandResult::new(persons_listed(count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressBook, PersonBuilder};

    #[test]
    fn test_find_reports_count() {
        let mut book = AddressBook::new();
        book.add_person(PersonBuilder::new().build().unwrap());
        book.add_person(PersonBuilder::new().with_name("Bob Choo").with_phone("91230000").build().unwrap());
        let mut service = AddressBookService::new(book);

        let result = FindCommand::new(vec!["amy".to_string()]).execute(&mut service).unwrap();
        assert_eq!(result.feedback(), "1 persons listed!");
        assert_eq!(service.visible_count(), 1);

        let result = FindCommand::new(vec!["nobody".to_string()]).execute(&mut service).unwrap();
        assert_eq!(result.feedback(), "0 persons listed!");
    }
}
