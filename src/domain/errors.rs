//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is blank or contains unsupported characters.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is blank.
    EmptyAddress,

    /// The provided organisation ID is not a 10-digit string.
    InvalidOrgId(String),

    /// The provided device info is invalid.
    InvalidDeviceInfo(String),

    /// The provided tag is not a single alphanumeric word.
    InvalidTag(String),

    /// The provided status is not a recognized status value.
    InvalidStatus(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name '{}': names should only contain alphanumeric characters and spaces, and should not be blank",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number '{}': phone numbers should only contain digits, and should be at least 3 digits long",
                phone
            ),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::EmptyAddress => write!(f, "Addresses can take any value, but should not be blank"),
            Self::InvalidOrgId(id) => write!(
                f,
                "Invalid organisation ID '{}': org IDs are exactly 10 digits",
                id
            ),
            Self::InvalidDeviceInfo(info) => write!(
                f,
                "Invalid device info '{}': device info uses alphanumeric characters, spaces and hyphens, up to 50 characters",
                info
            ),
            Self::InvalidTag(tag) => {
                write!(f, "Invalid tag '{}': tags should be a single alphanumeric word", tag)
            }
            Self::InvalidStatus(status) => write!(
                f,
                "Unknown status '{}': expected one of none, active, inactive, blocked",
                status
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
