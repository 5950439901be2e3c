//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a person
//! record: names, phone numbers, email addresses, postal addresses,
//! organisation IDs, device identifiers, tags and statuses. These value
//! objects provide validation at construction time and prevent invalid
//! data from being represented in the system.

pub mod address;
pub mod device_info;
pub mod email;
pub mod errors;
pub mod name;
pub mod org_id;
pub mod phone;
pub mod status;
pub mod tag;

pub use address::Address;
pub use device_info::DeviceInfo;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use org_id::OrgId;
pub use phone::Phone;
pub use status::Status;
pub use tag::Tag;
