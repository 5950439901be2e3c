//! Argument parser for the `import` command.

use crate::commands::{Command, ImportCommand};
use crate::error::{ParseError, ParseResult};

pub fn parse(args: &str) -> ParseResult<Command> {
    let path = args.trim();
    if path.is_empty() {
        return Err(ParseError::invalid_format(ImportCommand::MESSAGE_USAGE));
    }
    Ok(Command::Import(ImportCommand::new(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        assert_eq!(
            parse(" exports/new-hires.json").unwrap(),
            Command::Import(ImportCommand::new("exports/new-hires.json"))
        );
    }

    #[test]
    fn test_empty_path_is_format_error() {
        assert!(matches!(parse("  "), Err(ParseError::InvalidFormat { .. })));
    }
}
