//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern is valid"));

/// A type-safe wrapper for person names.
///
/// Names are validated at construction time: the first character must be
/// alphanumeric, and the rest may only be alphanumerics and spaces.
///
/// # Example
///
/// ```
/// use staffbook::domain::Name;
///
/// let name = Name::new("Amy Bee").unwrap();
/// assert_eq!(name.as_str(), "Amy Bee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is blank or
    /// contains characters other than alphanumerics and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !NAME_FORMAT.is_match(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
