//! Parses user input into commands.
//!
//! The entry points split a raw line into a command word and an argument
//! tail, check the word against the closed command-word tables, and hand
//! the tail to the matching argument parser. `parse_command` serves
//! administrators; `parse_command_it` serves IT staff and refuses the
//! mutating commands outright.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod find_by;
pub mod import;
pub mod status;
pub mod tokenizer;
pub mod util;

use crate::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, ExitCommand,
    FilterStatusCommand, FindByCommand, FindCommand, HelpCommand, ImportCommand, ListCommand,
    LoginCommand, LogoutCommand, RegisterCommand, SetStatusCommand,
};
use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Used for initial separation of command word and args.
static BASIC_COMMAND_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<word>\S+)(?P<arguments>(?s).*)$").expect("basic command pattern is valid"));

/// Commands that make use of one or more prefixes.
pub const COMMAND_WORDS_PREFIXED: [&str; 5] = [
    AddCommand::COMMAND_WORD,
    EditCommand::COMMAND_WORD,
    FindByCommand::COMMAND_WORD,
    SetStatusCommand::COMMAND_WORD,
    FilterStatusCommand::COMMAND_WORD,
];

/// Commands that take a single argument without any prefix.
pub const COMMAND_WORDS_SINGLE_ARG: [&str; 4] = [
    DeleteCommand::COMMAND_WORD,
    ClearCommand::COMMAND_WORD,
    FindCommand::COMMAND_WORD,
    ImportCommand::COMMAND_WORD,
];

/// Commands that do not require any arguments.
pub const COMMAND_WORDS_STANDALONE: [&str; 6] = [
    ListCommand::COMMAND_WORD,
    ExitCommand::COMMAND_WORD,
    HelpCommand::COMMAND_WORD,
    LoginCommand::COMMAND_WORD,
    LogoutCommand::COMMAND_WORD,
    RegisterCommand::COMMAND_WORD,
];

/// Every known command word.
pub fn known_command_words() -> impl Iterator<Item = &'static str> {
    COMMAND_WORDS_STANDALONE
        .into_iter()
        .chain(COMMAND_WORDS_SINGLE_ARG)
        .chain(COMMAND_WORDS_PREFIXED)
}

/// Parses user input.
#[derive(Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses user input into a command for execution. The caller has full
    /// administrator rights and access to all commands.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` when the input does not split into a word and an
    /// argument tail (or a tail is malformed), `UnknownCommand` when the
    /// word is not in the known set.
    pub fn parse_command(&self, user_input: &str) -> ParseResult<Command> {
        let (word, arguments) = split_input(user_input)?;
        debug!(command_word = word, arguments, "tokenized user input");

        if !known_command_words().any(|w| w == word) {
            trace!(user_input, "input rejected as unknown command");
            return Err(ParseError::UnknownCommand);
        }

        match word {
            AddCommand::COMMAND_WORD => add::parse(arguments),
            EditCommand::COMMAND_WORD => edit::parse(arguments),
            DeleteCommand::COMMAND_WORD => delete::parse(arguments),
            ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
            FindByCommand::COMMAND_WORD => find_by::parse(arguments),
            FindCommand::COMMAND_WORD => find::parse(arguments),
            ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
            ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
            HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
            LoginCommand::COMMAND_WORD => Ok(Command::Login(LoginCommand)),
            LogoutCommand::COMMAND_WORD => Ok(Command::Logout(LogoutCommand)),
            SetStatusCommand::COMMAND_WORD => status::parse_set_status(arguments),
            FilterStatusCommand::COMMAND_WORD => status::parse_filter_status(arguments),
            ImportCommand::COMMAND_WORD => import::parse(arguments),
            RegisterCommand::COMMAND_WORD => Ok(Command::Register(RegisterCommand)),
            _ => Err(ParseError::UnknownCommand),
        }
    }

    /// Parses user input into a command for execution. The caller only has
    /// IT staff access rights: `add`, `edit`, `delete` and `clear` are
    /// refused before their argument tails are even looked at.
    ///
    /// Unknown words are not screened against the word tables first; they
    /// land on the final arm directly. `parse_command` screens them before
    /// dispatching.
    ///
    /// # Errors
    ///
    /// As `parse_command`, plus `InsufficientAccessRights` for the
    /// restricted words.
    pub fn parse_command_it(&self, user_input: &str) -> ParseResult<Command> {
        let (word, arguments) = split_input(user_input)?;
        debug!(command_word = word, arguments, "tokenized user input");

        match word {
            AddCommand::COMMAND_WORD
            | EditCommand::COMMAND_WORD
            | DeleteCommand::COMMAND_WORD
            | ClearCommand::COMMAND_WORD => {
                trace!(user_input, "input rejected for IT staff access rights");
                Err(ParseError::InsufficientAccessRights)
            }
            FindByCommand::COMMAND_WORD => find_by::parse(arguments),
            FindCommand::COMMAND_WORD => find::parse(arguments),
            ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
            ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
            HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
            LoginCommand::COMMAND_WORD => Ok(Command::Login(LoginCommand)),
            LogoutCommand::COMMAND_WORD => Ok(Command::Logout(LogoutCommand)),
            SetStatusCommand::COMMAND_WORD => status::parse_set_status(arguments),
            FilterStatusCommand::COMMAND_WORD => status::parse_filter_status(arguments),
            ImportCommand::COMMAND_WORD => import::parse(arguments),
            RegisterCommand::COMMAND_WORD => Ok(Command::Register(RegisterCommand)),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}

/// Initial separation of command word and args.
fn split_input(user_input: &str) -> ParseResult<(&str, &str)> {
    let trimmed = user_input.trim();
    let captures = BASIC_COMMAND_FORMAT
        .captures(trimmed)
        .ok_or_else(|| ParseError::invalid_format(HelpCommand::MESSAGE_USAGE))?;

    let word = captures.name("word").map_or("", |m| m.as_str());
    let arguments = captures.name("arguments").map_or("", |m| m.as_str());
    Ok((word, arguments))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESTRICTED_INPUTS: [&str; 4] = [
        " n/Amy Bee p/85355255 e/amy@gmail.com a/addr o/0000000555 d/Device123",
        " 1 p/91234567",
        " 1",
        "",
    ];

    fn parser() -> CommandParser {
        CommandParser::new()
    }

    #[test]
    fn test_every_known_word_parses_to_its_variant() {
        let cases: Vec<(String, fn(&Command) -> bool)> = vec![
            (
                "add n/Amy Bee p/85355255 e/amy@gmail.com a/addr o/0000000555 d/Device123".into(),
                |c| matches!(c, Command::Add(_)),
            ),
            (" edit 1 p/91234567".into(), |c| matches!(c, Command::Edit(_))),
            ("delete 1".into(), |c| matches!(c, Command::Delete(_))),
            ("clear".into(), |c| matches!(c, Command::Clear(_))),
            ("clear 3".into(), |c| matches!(c, Command::Clear(_))),
            ("find alice".into(), |c| matches!(c, Command::Find(_))),
            ("findby n/alice".into(), |c| matches!(c, Command::FindBy(_))),
            ("list".into(), |c| matches!(c, Command::List(_))),
            ("setstatus 1 s/active".into(), |c| matches!(c, Command::SetStatus(_))),
            ("filterstatus s/none".into(), |c| matches!(c, Command::FilterStatus(_))),
            ("import file.json".into(), |c| matches!(c, Command::Import(_))),
            ("help".into(), |c| matches!(c, Command::Help(_))),
            ("exit".into(), |c| matches!(c, Command::Exit(_))),
            ("login".into(), |c| matches!(c, Command::Login(_))),
            ("logout".into(), |c| matches!(c, Command::Logout(_))),
            ("register".into(), |c| matches!(c, Command::Register(_))),
        ];

        for (input, is_expected_variant) in cases {
            let command = parser()
                .parse_command(&input)
                .unwrap_or_else(|e| panic!("input {:?} failed to parse: {}", input, e));
            assert!(is_expected_variant(&command), "wrong variant for {:?}", input);
        }
    }

    #[test]
    fn test_word_tables_cover_every_dispatch_arm() {
        // 5 prefixed + 4 single-arg + 6 standalone = the full set.
        assert_eq!(known_command_words().count(), 15);
        for word in known_command_words() {
            let input = match word {
                "add" => "add n/Amy p/123 e/a@b.com a/x o/0000000000 d/Dev".to_string(),
                "edit" => "edit 1 p/91234567".to_string(),
                "delete" => "delete 1".to_string(),
                "find" => "find alice".to_string(),
                "findby" => "findby n/alice".to_string(),
                "setstatus" => "setstatus 1 s/active".to_string(),
                "filterstatus" => "filterstatus s/none".to_string(),
                "import" => "import file.json".to_string(),
                other => other.to_string(),
            };
            assert!(
                !matches!(parser().parse_command(&input), Err(ParseError::UnknownCommand)),
                "word {:?} fell through to unknown-command",
                word
            );
        }
    }

    #[test]
    fn test_empty_input_is_format_error_with_help_usage() {
        for input in ["", "   ", "\t \n"] {
            for result in [parser().parse_command(input), parser().parse_command_it(input)] {
                match result {
                    Err(ParseError::InvalidFormat { usage }) => {
                        assert_eq!(usage, HelpCommand::MESSAGE_USAGE);
                    }
                    other => panic!("expected format error for {:?}, got {:?}", input, other),
                }
            }
        }
    }

    #[test]
    fn test_unknown_word_rejected_by_both_entry_points() {
        assert_eq!(
            parser().parse_command("frobnicate 123"),
            Err(ParseError::UnknownCommand)
        );
        // The restricted entry point has no up-front membership screen;
        // the unknown word reaches its final arm and gets the same error.
        assert_eq!(
            parser().parse_command_it("frobnicate 123"),
            Err(ParseError::UnknownCommand)
        );
    }

    #[test]
    fn test_it_staff_denied_mutating_commands() {
        for word in ["add", "edit", "delete", "clear"] {
            for args in RESTRICTED_INPUTS {
                let input = format!("{}{}", word, args);
                assert_eq!(
                    parser().parse_command_it(&input),
                    Err(ParseError::InsufficientAccessRights),
                    "input {:?} should be refused before argument parsing",
                    input
                );
            }
        }
    }

    #[test]
    fn test_it_staff_allowed_commands_still_parse() {
        for input in ["find alice", "list", "setstatus 1 s/active", "import f.json", "logout"] {
            assert!(parser().parse_command_it(input).is_ok(), "input {:?}", input);
        }
    }

    #[test]
    fn test_arguments_preserve_leading_space() {
        let command = parser().parse_command("find  Alice   Bob").unwrap();
        assert_eq!(
            command,
            Command::Find(FindCommand::new(vec!["Alice".into(), "Bob".into()]))
        );
    }

    #[test]
    fn test_malformed_tail_propagates_command_usage() {
        match parser().parse_command("delete x") {
            Err(ParseError::InvalidFormat { usage }) => {
                assert_eq!(usage, DeleteCommand::MESSAGE_USAGE);
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }
}
