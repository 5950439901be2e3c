//! Lists every person in the address book.

use crate::commands::CommandResult;
use crate::error::ExecResult;
use crate::services::AddressBookService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all persons";

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        service.show_all();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
