//! Argument parser for the `add` command.

use crate::commands::{AddCommand, Command};
use crate::domain::Status;
use crate::error::{ParseError, ParseResult};
use crate::models::Person;
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

    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(AddCommand::MESSAGE_USAGE));
    }

    let (Some(name), Some(phone), Some(email), Some(address), Some(org_id), Some(device)) = (
        map.value_of(PREFIX_NAME),
        map.value_of(PREFIX_PHONE),
        map.value_of(PREFIX_EMAIL),
        map.value_of(PREFIX_ADDRESS),
        map.value_of(PREFIX_ORG_ID),
        map.value_of(PREFIX_DEVICE),
    ) else {
        return Err(ParseError::invalid_format(AddCommand::MESSAGE_USAGE));
    };

    map.verify_no_duplicates(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_ORG_ID,
        PREFIX_DEVICE,
    ])?;

    let person = Person::new(
        util::parse_name(name)?,
        util::parse_phone(phone)?,
        util::parse_email(email)?,
        util::parse_address(address)?,
        util::parse_org_id(org_id)?,
        util::parse_device_info(device)?,
        util::parse_tags(&map.all_values(PREFIX_TAG))?,
        Status::default(),
    );

    Ok(Command::Add(AddCommand::new(person)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonBuilder;

    const VALID_ARGS: &str =
        " n/Amy Bee p/85355255 e/amy@gmail.com a/123, Jurong West Ave 6, #08-111 o/0000000555 d/Device123";

    #[test]
    fn test_parse_all_fields() {
        let expected = PersonBuilder::new().with_tags(["friends"]).build().unwrap();
        let parsed = parse(&format!("{} t/friends", VALID_ARGS)).unwrap();
        assert_eq!(parsed, Command::Add(AddCommand::new(expected)));
    }

    #[test]
    fn test_parse_without_tags() {
        let expected = PersonBuilder::new().build().unwrap();
        assert_eq!(parse(VALID_ARGS).unwrap(), Command::Add(AddCommand::new(expected)));
    }

    #[test]
    fn test_missing_required_prefix_is_format_error() {
        let missing_phone = " n/Amy Bee e/amy@gmail.com a/addr o/0000000555 d/Device123";
        assert!(matches!(
            parse(missing_phone),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_nonempty_preamble_is_format_error() {
        assert!(matches!(
            parse(&format!(" oops{}", VALID_ARGS)),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let duplicated = format!("{} p/99999999", VALID_ARGS);
        assert!(matches!(parse(&duplicated), Err(ParseError::InvalidValue(_))));
    }

    #[test]
    fn test_invalid_field_value_rejected() {
        let bad_email = VALID_ARGS.replace("amy@gmail.com", "not-an-email");
        assert!(matches!(parse(&bad_email), Err(ParseError::InvalidValue(_))));
    }
}
