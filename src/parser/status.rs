//! Argument parsers for the `setstatus` and `filterstatus` commands.

use crate::commands::{Command, FilterStatusCommand, SetStatusCommand};
use crate::error::{ParseError, ParseResult};
use crate::parser::tokenizer::{tokenize, PREFIX_STATUS};
use crate::parser::util;

pub fn parse_set_status(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_STATUS]);

    let index = util::parse_index(map.preamble())
        .map_err(|_| ParseError::invalid_format(SetStatusCommand::MESSAGE_USAGE))?;
    map.verify_no_duplicates(&[PREFIX_STATUS])?;

    let Some(value) = map.value_of(PREFIX_STATUS) else {
        return Err(ParseError::invalid_format(SetStatusCommand::MESSAGE_USAGE));
    };
    let status = util::parse_status(value)?;

    Ok(Command::SetStatus(SetStatusCommand::new(index, status)))
}

pub fn parse_filter_status(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_STATUS]);

    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(FilterStatusCommand::MESSAGE_USAGE));
    }
    map.verify_no_duplicates(&[PREFIX_STATUS])?;

    let Some(value) = map.value_of(PREFIX_STATUS) else {
        return Err(ParseError::invalid_format(FilterStatusCommand::MESSAGE_USAGE));
    };
    let status = util::parse_status(value)?;

    Ok(Command::FilterStatus(FilterStatusCommand::new(status)))
}
