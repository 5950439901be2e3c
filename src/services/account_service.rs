//! Account service: registration and the two-tier access-rights model.

use crate::error::AccountError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Privilege tier attached to an account.
///
/// Admins reach the full command set; IT staff get the restricted dispatch
/// that refuses `add`, `edit`, `delete` and `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Admin,
    ItStaff,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    username: String,
    password: String,
    level: AccessLevel,
}

impl Account {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn level(&self) -> AccessLevel {
        self.level
    }
}

/// Keeps the registered accounts and answers login checks.
#[derive(Debug, Default)]
pub struct AccountService {
    accounts: Vec<Account>,
}

impl AccountService {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Register a new account and return its access level.
    ///
    /// The very first account registered becomes the administrator; every
    /// later account is IT staff.
    ///
    /// # Errors
    ///
    /// `EmptyCredentials` when either field is blank after trimming,
    /// `DuplicateUsername` when the username is taken.
    pub fn register(&mut self, username: &str, password: &str) -> Result<AccessLevel, AccountError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::EmptyCredentials);
        }
        if self.accounts.iter().any(|a| a.username == username) {
            return Err(AccountError::DuplicateUsername);
        }

        let level = if self.accounts.is_empty() {
            AccessLevel::Admin
        } else {
            AccessLevel::ItStaff
        };
        self.accounts.push(Account {
            username: username.to_string(),
            password: password.to_string(),
            level,
        });
        info!(username, ?level, "registered account");
        Ok(level)
    }

    /// Check credentials; `Some(level)` on a match.
    pub fn verify(&self, username: &str, password: &str) -> Option<AccessLevel> {
        self.accounts
            .iter()
            .find(|a| a.username == username.trim() && a.password == password)
            .map(|a| a.level)
    }
}
