//! Terminal front end.
//!
//! Reads a line at a time, routes it through the parser that matches the
//! session's access level, prints the feedback, and performs whatever
//! transition the `CommandResult` flags request. Credential prompts live
//! here; the commands themselves never see a password.

use crate::commands::{usage_summary, CommandResult};
use crate::parser::CommandParser;
use crate::services::{AccessLevel, AccountService, AddressBookService};
use crate::storage::{AccountStorage, AddressBookStorage};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// The login gate has exactly two states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    LoggedIn {
        username: String,
        level: AccessLevel,
    },
}

/// Command words accepted while logged out.
const LOGGED_OUT_WORDS: [&str; 4] = ["login", "register", "help", "exit"];

pub struct Repl<B, A>
where
    B: AddressBookStorage,
    A: AccountStorage,
{
    parser: CommandParser,
    service: AddressBookService,
    accounts: AccountService,
    book_storage: B,
    account_storage: A,
    session: Session,
}

impl<B, A> Repl<B, A>
where
    B: AddressBookStorage,
    A: AccountStorage,
{
    pub fn new(
        service: AddressBookService,
        accounts: AccountService,
        book_storage: B,
        account_storage: A,
    ) -> Self {
        Self {
            parser: CommandParser::new(),
            service,
            accounts,
            book_storage,
            account_storage,
            session: Session::LoggedOut,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn service(&self) -> &AddressBookService {
        &self.service
    }

    /// Drive the loop until `exit` or end of input.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
        writeln!(
            output,
            "Welcome to Staffbook. Type 'login', 'register' or 'help' to begin."
        )?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break; // end of input
            }
            let line = line.trim_end_matches(['\r', '\n']);

            if !self.handle_line(line, input, output)? {
                break;
            }
        }
        Ok(())
    }

    /// Process one line; `Ok(false)` means the loop should stop.
    fn handle_line(
        &mut self,
        line: &str,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<bool> {
        let word = line.trim().split_whitespace().next().unwrap_or("");
        if self.session == Session::LoggedOut
            && !word.is_empty()
            && !LOGGED_OUT_WORDS.contains(&word)
        {
            writeln!(
                output,
                "Please log in first. Available commands: login, register, help, exit"
            )?;
            return Ok(true);
        }

        let parsed = match &self.session {
            Session::LoggedIn {
                level: AccessLevel::ItStaff,
                ..
            } => self.parser.parse_command_it(line),
            _ => self.parser.parse_command(line),
        };

        let command = match parsed {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                return Ok(true);
            }
        };

        let result = match command.execute(&mut self.service) {
            Ok(result) => result,
            Err(e) => {
                writeln!(output, "{}", e)?;
                return Ok(true);
            }
        };

        writeln!(output, "{}", result.feedback())?;
        self.apply_transitions(&result, input, output)?;
        self.persist(output)?;
        Ok(!result.is_exit())
    }

    fn apply_transitions(
        &mut self,
        result: &CommandResult,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<()> {
        if result.is_show_help() {
            writeln!(output, "\n{}", usage_summary())?;
        }
        if result.is_show_login() {
            self.prompt_login(input, output)?;
        }
        if result.is_show_register() {
            self.prompt_register(input, output)?;
        }
        if result.is_logout() {
            self.session = Session::LoggedOut;
        }
        Ok(())
    }

    fn prompt_login(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
        let username = prompt(input, output, "Username: ")?;
        let password = prompt(input, output, "Password: ")?;

        match self.accounts.verify(&username, &password) {
            Some(level) => {
                info!(%username, ?level, "login succeeded");
                writeln!(output, "Logged in as {} ({})", username, describe(level))?;
                self.session = Session::LoggedIn { username, level };
            }
            None => {
                info!(%username, "login failed");
                writeln!(output, "Login failed: unknown username or wrong password.")?;
            }
        }
        Ok(())
    }

    fn prompt_register(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<()> {
        let username = prompt(input, output, "New username: ")?;
        let password = prompt(input, output, "New password: ")?;

        match self.accounts.register(&username, &password) {
            Ok(level) => {
                writeln!(
                    output,
                    "Account '{}' registered as {}.",
                    username.trim(),
                    describe(level)
                )?;
                if let Err(e) = self.account_storage.save(self.accounts.accounts()) {
                    warn!(error = %e, "could not save accounts");
                    writeln!(output, "Warning: could not save accounts: {}", e)?;
                }
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
        Ok(())
    }

    fn persist(&mut self, output: &mut impl Write) -> io::Result<()> {
        if let Err(e) = self.book_storage.save(self.service.book()) {
            warn!(error = %e, "could not save address book");
            writeln!(output, "Warning: could not save data: {}", e)?;
        }
        Ok(())
    }
}

fn describe(level: AccessLevel) -> &'static str {
    match level {
        AccessLevel::Admin => "administrator",
        AccessLevel::ItStaff => "IT staff",
    }
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
