//! Edits an existing person in the address book.

use crate::commands::CommandResult;
use crate::domain::{Address, DeviceInfo, Email, Name, OrgId, Phone, Tag};
use crate::error::{CommandError, ExecResult};
use crate::models::Person;
use crate::services::AddressBookService;
use std::collections::HashSet;

/// The fields to change; everything left as `None` keeps its value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub org_id: Option<OrgId>,
    pub device_info: Option<DeviceInfo>,
    pub tags: Option<HashSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.org_id.is_some()
            || self.device_info.is_some()
            || self.tags.is_some()
    }

    /// The replacement person: edited fields from the descriptor, the rest
    /// from `person`. Status is untouched (`setstatus` owns it).
    fn apply_to(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address.clone().unwrap_or_else(|| person.address().clone()),
            self.org_id.clone().unwrap_or_else(|| person.org_id().clone()),
            self.device_info
                .clone()
                .unwrap_or_else(|| person.device_info().clone()),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
            person.status(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    index: usize,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the person at the given index in the displayed list.\n\
        Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [o/ORG_ID] [d/DEVICE_INFO] [t/TAG]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    /// `index` is the 1-based position in the visible list.
    pub fn new(index: usize, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        let target = service
            .person_at(self.index)
            .ok_or(CommandError::InvalidIndex)?
            .clone();
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same_person(&edited) && service.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        service.set_person(self.index, edited.clone())?;
        Ok(CommandResult::new(format!("Edited Person: {}", edited)))
    }
}
