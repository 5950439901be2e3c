//! Argument parser for the `find` command.

use crate::commands::{Command, FindCommand};
use crate::error::{ParseError, ParseResult};

pub fn parse(args: &str) -> ParseResult<Command> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(FindCommand::MESSAGE_USAGE));
    }
    let keywords = trimmed.split_whitespace().map(String::from).collect();
    Ok(Command::Find(FindCommand::new(keywords)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        let parsed = parse(" alice  bob ").unwrap();
        let expected = FindCommand::new(vec!["alice".to_string(), "bob".to_string()]);
        assert_eq!(parsed, Command::Find(expected));
    }

    #[test]
    fn test_empty_args_is_format_error() {
        assert!(matches!(parse("   "), Err(ParseError::InvalidFormat { .. })));
    }
}
