//! Argument parser for the `findby` command.

use crate::commands::{Command, FindByCommand};
use crate::error::{ParseError, ParseResult};
use crate::parser::tokenizer::{
    tokenize, Prefix, PREFIX_ADDRESS, PREFIX_DEVICE, PREFIX_EMAIL, PREFIX_NAME, PREFIX_ORG_ID,
    PREFIX_PHONE,
};
use crate::services::SearchField;

const SEARCHABLE: [(Prefix, SearchField); 6] = [
    (PREFIX_NAME, SearchField::Name),
    (PREFIX_PHONE, SearchField::Phone),
    (PREFIX_EMAIL, SearchField::Email),
    (PREFIX_ADDRESS, SearchField::Address),
    (PREFIX_ORG_ID, SearchField::OrgId),
    (PREFIX_DEVICE, SearchField::DeviceInfo),
];

pub fn parse(args: &str) -> ParseResult<Command> {
    let prefixes: Vec<Prefix> = SEARCHABLE.iter().map(|&(p, _)| p).collect();
    let map = tokenize(args, &prefixes);

    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(FindByCommand::MESSAGE_USAGE));
    }
    map.verify_no_duplicates(&prefixes)?;

    let present: Vec<(SearchField, &str)> = SEARCHABLE
        .iter()
        .filter_map(|&(prefix, field)| map.value_of(prefix).map(|v| (field, v)))
        .collect();

    match present.as_slice() {
        [(field, keyword)] if !keyword.is_empty() => {
            Ok(Command::FindBy(FindByCommand::new(*field, *keyword)))
        }
        _ => Err(ParseError::invalid_format(FindByCommand::MESSAGE_USAGE)),
    }
}
