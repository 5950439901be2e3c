//! Status value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Standing of a staff member's record, from the closed set
/// `none | active | inactive | blocked`.
///
/// New persons default to `None` until a status is assigned explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    None,
    Active,
    Inactive,
    Blocked,
}

impl Status {
    /// All status values, in display order.
    pub const ALL: [Status; 4] = [Status::None, Status::Active, Status::Inactive, Status::Blocked];

    /// Get the status as its lowercase string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::None => "none",
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Blocked => "blocked",
        }
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    /// Parse a status, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Status::None),
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            "blocked" => Ok(Status::Blocked),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
