//! Argument parser for the `edit` command.

use crate::commands::{Command, EditCommand, EditPersonDescriptor};
use crate::error::{ParseError, ParseResult};
use crate::parser::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_DEVICE, PREFIX_EMAIL, PREFIX_NAME, PREFIX_ORG_ID,
    PREFIX_PHONE, PREFIX_TAG,
};
use crate::parser::util;

pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_ORG_ID,
            PREFIX_DEVICE,
            PREFIX_TAG,
        ],
    );

    let index = util::parse_index(map.preamble())
        .map_err(|_| ParseError::invalid_format(EditCommand::MESSAGE_USAGE))?;

    map.verify_no_duplicates(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_ORG_ID,
        PREFIX_DEVICE,
    ])?;

    let mut descriptor = EditPersonDescriptor::default();
    if let Some(v) = map.value_of(PREFIX_NAME) {
        descriptor.name = Some(util::parse_name(v)?);
    }
    if let Some(v) = map.value_of(PREFIX_PHONE) {
        descriptor.phone = Some(util::parse_phone(v)?);
    }
    if let Some(v) = map.value_of(PREFIX_EMAIL) {
        descriptor.email = Some(util::parse_email(v)?);
    }
    if let Some(v) = map.value_of(PREFIX_ADDRESS) {
        descriptor.address = Some(util::parse_address(v)?);
    }
    if let Some(v) = map.value_of(PREFIX_ORG_ID) {
        descriptor.org_id = Some(util::parse_org_id(v)?);
    }
    if let Some(v) = map.value_of(PREFIX_DEVICE) {
        descriptor.device_info = Some(util::parse_device_info(v)?);
    }
    descriptor.tags = util::parse_tags_for_edit(&map.all_values(PREFIX_TAG))?;

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::InvalidValue(EditCommand::MESSAGE_NOT_EDITED.to_string()));
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}
