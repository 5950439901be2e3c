//! Organisation ID value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A staff member's organisation ID: exactly 10 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgId(String);

impl OrgId {
    /// Create a new OrgId.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidOrgId` unless the ID is exactly
    /// 10 digits.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.len() != 10 || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidOrgId(id));
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for OrgId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OrgId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OrgId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_id_valid() {
        let id = OrgId::new("0000000555").unwrap();
        assert_eq!(id.as_str(), "0000000555");
    }

    #[test]
    fn test_org_id_validates_format() {
        assert!(OrgId::new("").is_err());
        assert!(OrgId::new("123").is_err()); // too short
        assert!(OrgId::new("12345678901").is_err()); // too long
        assert!(OrgId::new("00000O0555").is_err()); // letter O
        assert!(OrgId::new("1234567890").is_ok());
    }
}
