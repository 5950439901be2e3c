//! Session commands: help, exit, and the login-gate transitions.
//!
//! None of these touch the address book; each one returns a
//! `CommandResult` whose flags tell the front end which transition to
//! perform. Credential collection itself happens in the front end.

use crate::commands::CommandResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";
    pub const MESSAGE_SHOWING_HELP: &'static str = "Showing help.";

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::MESSAGE_SHOWING_HELP).showing_help()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting Staffbook as requested ...";

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT).exiting()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginCommand;

impl LoginCommand {
    pub const COMMAND_WORD: &'static str = "login";
    pub const MESSAGE_SUCCESS: &'static str = "Please proceed to log in.";

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::MESSAGE_SUCCESS).showing_login()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutCommand;

impl LogoutCommand {
    pub const COMMAND_WORD: &'static str = "logout";
    pub const MESSAGE_SUCCESS: &'static str = "Logged out.";

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::MESSAGE_SUCCESS).logging_out()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterCommand;

impl RegisterCommand {
    pub const COMMAND_WORD: &'static str = "register";
    pub const MESSAGE_SUCCESS: &'static str = "Please proceed with registration.";

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::MESSAGE_SUCCESS).showing_register()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_match_command() {
        assert!(HelpCommand.execute().is_show_help());
        assert!(ExitCommand.execute().is_exit());
        assert!(LoginCommand.execute().is_show_login());
        assert!(LogoutCommand.execute().is_logout());
        assert!(RegisterCommand.execute().is_show_register());

        // Each command raises exactly its own flag.
        let result = LoginCommand.execute();
        assert!(!result.is_show_help());
        assert!(!result.is_exit());
        assert!(!result.is_show_register());
        assert!(!result.is_logout());
    }
}
