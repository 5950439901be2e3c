//! Shared helpers for the per-command argument parsers.
//!
//! Each helper trims its input, runs the domain validation, and converts
//! the `ValidationError` into a `ParseError` carrying the constraint
//! message.

use crate::domain::{Address, DeviceInfo, Email, Name, OrgId, Phone, Status, Tag};
use crate::error::{ParseError, ParseResult};
use std::collections::HashSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parse a 1-based list index.
pub fn parse_index(s: &str) -> ParseResult<usize> {
    let trimmed = s.trim();
    let valid = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit());
    match trimmed.parse::<usize>() {
        Ok(n) if valid && n > 0 => Ok(n),
        _ => Err(ParseError::InvalidValue(MESSAGE_INVALID_INDEX.to_string())),
    }
}

pub fn parse_name(s: &str) -> ParseResult<Name> {
    Ok(Name::new(s.trim())?)
}

pub fn parse_phone(s: &str) -> ParseResult<Phone> {
    Ok(Phone::new(s.trim())?)
}

pub fn parse_email(s: &str) -> ParseResult<Email> {
    Ok(Email::new(s.trim())?)
}

pub fn parse_address(s: &str) -> ParseResult<Address> {
    Ok(Address::new(s.trim())?)
}

pub fn parse_org_id(s: &str) -> ParseResult<OrgId> {
    Ok(OrgId::new(s.trim())?)
}

pub fn parse_device_info(s: &str) -> ParseResult<DeviceInfo> {
    Ok(DeviceInfo::new(s.trim())?)
}

pub fn parse_status(s: &str) -> ParseResult<Status> {
    Ok(s.trim().parse()?)
}

pub fn parse_tags(values: &[&str]) -> ParseResult<HashSet<Tag>> {
    values.iter().map(|v| Ok(Tag::new(v.trim())?)).collect()
}

/// Tag edits distinguish "not mentioned" from "clear them": no `t/` at all
/// leaves tags untouched, a single empty `t/` clears them.
pub fn parse_tags_for_edit(values: &[&str]) -> ParseResult<Option<HashSet<Tag>>> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(HashSet::new()));
    }
    parse_tags(values).map(Some)
}
