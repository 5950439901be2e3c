//! Device info value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const MAX_LEN: usize = 50;

/// Identifier of the device issued to a staff member.
///
/// Non-blank, alphanumerics/spaces/hyphens, at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceInfo(String);

impl DeviceInfo {
    /// Create a new DeviceInfo.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDeviceInfo` if the value is blank,
    /// too long, or contains unsupported characters.
    pub fn new(info: impl Into<String>) -> Result<Self, ValidationError> {
        let info = info.into();
        if !Self::is_valid(&info) {
            return Err(ValidationError::InvalidDeviceInfo(info));
        }
        Ok(Self(info))
    }

    fn is_valid(info: &str) -> bool {
        !info.trim().is_empty()
            && info.len() <= MAX_LEN
            && info
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
    }

    /// Get the device info as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for DeviceInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DeviceInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DeviceInfo::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
