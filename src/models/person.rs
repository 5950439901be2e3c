//! Person model: an immutable aggregate of validated field values.

use crate::domain::{
    Address, DeviceInfo, Email, Name, OrgId, Phone, Status, Tag, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A person in the address book.
///
/// Every field is validated before a `Person` can exist, and none of them
/// can be changed afterwards: an edit builds a replacement `Person`.
/// Two persons are considered the same record when their names match
/// exactly; full equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    org_id: OrgId,
    device_info: DeviceInfo,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    tags: HashSet<Tag>,
    #[serde(default)]
    status: Status,
}

impl Person {
    /// Assemble a person from already-validated field values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        org_id: OrgId,
        device_info: DeviceInfo,
        tags: HashSet<Tag>,
        status: Status,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            org_id,
            device_info,
            tags,
            status,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn org_id(&self) -> &OrgId {
        &self.org_id
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    pub fn tags(&self) -> &HashSet<Tag> {
        &self.tags
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether `other` refers to the same record, i.e. has the same name.
    /// This is the weaker notion of identity used for duplicate detection.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// A copy of this person with a different status.
    pub fn with_status(&self, status: Status) -> Person {
        let mut updated = self.clone();
        updated.status = status;
        updated
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Org ID: {}; Device: {}; Status: {}",
            self.name, self.phone, self.email, self.address, self.org_id, self.device_info, self.status
        )?;
        if !self.tags.is_empty() {
            let mut tags: Vec<&Tag> = self.tags.iter().collect();
            tags.sort();
            write!(f, "; Tags: ")?;
            for tag in tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}

/// A utility for building `Person` values field by field.
///
/// Starts from a complete set of defaults, so tests and sample data only
/// spell out the fields they care about. Raw strings are validated when
/// `build` runs.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    org_id: String,
    device_info: String,
    tags: Vec<String>,
    status: String,
}

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";
pub const DEFAULT_ORG_ID: &str = "0000000555";
pub const DEFAULT_DEVICE_INFO: &str = "Device123";
pub const DEFAULT_STATUS: &str = "none";

impl PersonBuilder {
    /// A builder primed with the default details.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            org_id: DEFAULT_ORG_ID.to_string(),
            device_info: DEFAULT_DEVICE_INFO.to_string(),
            tags: Vec::new(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    /// A builder primed with the data of an existing person.
    pub fn from(person: &Person) -> Self {
        Self {
            name: person.name().as_str().to_string(),
            phone: person.phone().as_str().to_string(),
            email: person.email().as_str().to_string(),
            address: person.address().as_str().to_string(),
            org_id: person.org_id().as_str().to_string(),
            device_info: person.device_info().as_str().to_string(),
            tags: person.tags().iter().map(|t| t.as_str().to_string()).collect(),
            status: person.status().as_str().to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = org_id.into();
        self
    }

    pub fn with_device_info(mut self, device_info: impl Into<String>) -> Self {
        self.device_info = device_info.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Validate every field and assemble the person.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn build(self) -> Result<Person, ValidationError> {
        let tags = self
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Person::new(
            Name::new(self.name)?,
            Phone::new(self.phone)?,
            Email::new(self.email)?,
            Address::new(self.address)?,
            OrgId::new(self.org_id)?,
            DeviceInfo::new(self.device_info)?,
            tags,
            self.status.parse()?,
        ))
    }
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
