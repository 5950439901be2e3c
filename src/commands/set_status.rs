//! Sets the status of a person.

use crate::commands::CommandResult;
use crate::domain::Status;
use crate::error::{CommandError, ExecResult};
use crate::services::AddressBookService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStatusCommand {
    index: usize,
    status: Status,
}

impl SetStatusCommand {
    pub const COMMAND_WORD: &'static str = "setstatus";
    pub const MESSAGE_USAGE: &'static str = "setstatus: Sets the status of the person at the given index in the displayed list.\n\
        Parameters: INDEX s/STATUS (one of: none, active, inactive, blocked)\n\
        Example: setstatus 2 s/active";

    pub fn new(index: usize, status: Status) -> Self {
        Self { index, status }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        let target = service
            .person_at(self.index)
            .ok_or(CommandError::InvalidIndex)?;
        let updated = target.with_status(self.status);
        service.set_person(self.index, updated.clone())?;
        Ok(CommandResult::new(format!("Updated status of person: {}", updated)))
    }
}
