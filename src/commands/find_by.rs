//! Finds persons by a single chosen field.

use crate::commands::{persons_listed, CommandResult};
use crate::error::ExecResult;
use crate::services::{AddressBookService, SearchField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindByCommand {
    field: SearchField,
    keyword: String,
}

impl FindByCommand {
    pub const COMMAND_WORD: &'static str = "findby";
    pub const MESSAGE_USAGE: &'static str = "findby: Finds all persons whose chosen field contains the keyword \
        (case-insensitive) and lists them. Exactly one field must be given.\n\
        Parameters: n/KEYWORD | p/KEYWORD | e/KEYWORD | a/KEYWORD | o/KEYWORD | d/KEYWORD\n\
        Example: findby e/alice@example.com";

    pub fn new(field: SearchField, keyword: impl Into<String>) -> Self {
        Self {
            field,
            keyword: keyword.into(),
        }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        let count = service.filter_by_field(self.field, &self.keyword);
        Ok(CommandResult::new(persons_listed(count)))
    }
}
