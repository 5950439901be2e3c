//! Argument parser for the `delete` command.

use crate::commands::{Command, DeleteCommand};
use crate::error::{ParseError, ParseResult};
use crate::parser::util;

pub fn parse(args: &str) -> ParseResult<Command> {
    let index = util::parse_index(args)
        .map_err(|_| ParseError::invalid_format(DeleteCommand::MESSAGE_USAGE))?;
    Ok(Command::Delete(DeleteCommand::new(index)))
}
