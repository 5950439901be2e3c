//! Result of a command execution.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Feedback returned to the front end after a command runs, plus the
/// transition flags the front end reads to decide what to do next.
#[derive(Debug, Clone)]
pub struct CommandResult {
    feedback: String,

    /// Help information should be shown to the user.
    show_help: bool,

    /// The application should exit.
    exit: bool,

    /// The login prompt should be shown to the user.
    show_login: bool,

    /// The registration prompt should be shown to the user.
    show_register: bool,

    /// The application should log out and hide user data.
    logout: bool,
}

impl CommandResult {
    /// A result carrying only feedback, with every flag cleared.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            show_login: false,
            show_register: false,
            logout: false,
        }
    }

    pub fn showing_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn showing_login(mut self) -> Self {
        self.show_login = true;
        self
    }

    pub fn showing_register(mut self) -> Self {
        self.show_register = true;
        self
    }

    pub fn logging_out(mut self) -> Self {
        self.logout = true;
        self
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }

    pub fn is_show_login(&self) -> bool {
        self.show_login
    }

    pub fn is_show_register(&self) -> bool {
        self.show_register
    }

    pub fn is_logout(&self) -> bool {
        self.logout
    }
}

// Equality tracks the feedback and every flag except `logout`.
impl PartialEq for CommandResult {
    fn eq(&self, other: &Self) -> bool {
        self.feedback == other.feedback
            && self.show_help == other.show_help
            && self.exit == other.exit
            && self.show_login == other.show_login
            && self.show_register == other.show_register
    }
}

impl Eq for CommandResult {}

// The hash covers feedback, show_help and exit only: a subset of the
// equality fields, so equal results always hash alike.
impl Hash for CommandResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.feedback.hash(state);
        self.show_help.hash(state);
        self.exit.hash(state);
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CommandResult{{feedback: {}, show_help: {}, exit: {}}}",
            self.feedback, self.show_help, self.exit
        )
    }
}
