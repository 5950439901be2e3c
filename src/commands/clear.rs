//! Clears the address book.

use crate::commands::CommandResult;
use crate::error::ExecResult;
use crate::services::AddressBookService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        service.clear();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
