//! Filters the displayed list down to persons with a given status.

use crate::commands::{persons_listed, CommandResult};
use crate::domain::Status;
use crate::error::ExecResult;
use crate::services::AddressBookService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStatusCommand {
    status: Status,
}

impl FilterStatusCommand {
    pub const COMMAND_WORD: &'static str = "filterstatus";
    pub const MESSAGE_USAGE: &'static str = "filterstatus: Lists all persons with the given status.\n\
        Parameters: s/STATUS (one of: none, active, inactive, blocked)\n\
        Example: filterstatus s/inactive";

    pub fn new(status: Status) -> Self {
        Self { status }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        let count = service.filter_by_status(self.status);
        Ok(CommandResult::new(persons_listed(count)))
    }
}
