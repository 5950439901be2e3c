//! Email value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for email addresses.
///
/// Validation is structural: a non-empty local part, one '@', and a dotted
/// domain with no empty labels.
///
/// # Example
///
/// ```
/// use staffbook::domain::Email;
///
/// let email = Email::new("amy@gmail.com").unwrap();
/// assert_eq!(email.as_str(), "amy@gmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    fn is_valid(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // SAFETY: Constructor validates '@' exists
        self.0.split('@').next().expect("email validated to contain '@'")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        // SAFETY: Constructor validates '@' exists
        self.0.split('@').nth(1).expect("email validated to contain '@'")
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
