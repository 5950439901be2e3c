//! Commands the parser can produce, and the result they return.
//!
//! `Command` is a tagged union over every concrete command; `execute`
//! dispatches to the variant's own implementation. Commands that only flip
//! front-end flags live in `session`.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod filter_status;
pub mod find;
pub mod find_by;
pub mod import;
pub mod list;
pub mod result;
pub mod session;
pub mod set_status;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use filter_status::FilterStatusCommand;
pub use find::FindCommand;
pub use find_by::FindByCommand;
pub use import::ImportCommand;
pub use list::ListCommand;
pub use result::CommandResult;
pub use session::{ExitCommand, HelpCommand, LoginCommand, LogoutCommand, RegisterCommand};
pub use set_status::SetStatusCommand;

use crate::error::ExecResult;
use crate::services::AddressBookService;

/// A fully-parsed command, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Clear(ClearCommand),
    Find(FindCommand),
    FindBy(FindByCommand),
    List(ListCommand),
    SetStatus(SetStatusCommand),
    FilterStatus(FilterStatusCommand),
    Import(ImportCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
    Login(LoginCommand),
    Logout(LogoutCommand),
    Register(RegisterCommand),
}

impl Command {
    /// Run the command against the application state.
    pub fn execute(&self, service: &mut AddressBookService) -> ExecResult<CommandResult> {
        match self {
            Command::Add(cmd) => cmd.execute(service),
            Command::Edit(cmd) => cmd.execute(service),
            Command::Delete(cmd) => cmd.execute(service),
            Command::Clear(cmd) => cmd.execute(service),
            Command::Find(cmd) => cmd.execute(service),
            Command::FindBy(cmd) => cmd.execute(service),
            Command::List(cmd) => cmd.execute(service),
            Command::SetStatus(cmd) => cmd.execute(service),
            Command::FilterStatus(cmd) => cmd.execute(service),
            Command::Import(cmd) => cmd.execute(service),
            Command::Help(cmd) => Ok(cmd.execute()),
            Command::Exit(cmd) => Ok(cmd.execute()),
            Command::Login(cmd) => Ok(cmd.execute()),
            Command::Logout(cmd) => Ok(cmd.execute()),
            Command::Register(cmd) => Ok(cmd.execute()),
        }
    }
}

/// The "N persons listed!" overview shared by the list-producing commands.
pub(crate) fn persons_listed(count: usize) -> String {
    format!("{} persons listed!", count)
}

/// One-screen summary of every command, shown when help is requested.
pub fn usage_summary() -> String {
    [
        AddCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        "clear: Clears all entries from the address book.",
        FindCommand::MESSAGE_USAGE,
        FindByCommand::MESSAGE_USAGE,
        "list: Lists all persons.",
        SetStatusCommand::MESSAGE_USAGE,
        FilterStatusCommand::MESSAGE_USAGE,
        ImportCommand::MESSAGE_USAGE,
        HelpCommand::MESSAGE_USAGE,
        "login: Log in to an account.",
        "logout: Log out of the current account.",
        "register: Register a new account.",
        "exit: Exits the program.",
    ]
    .join("\n\n")
}
