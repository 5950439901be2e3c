//! Prefix-based argument tokenizer.
//!
//! Argument tails look like ` n/John Doe p/98765432 t/friends`. A prefix
//! only counts when it is preceded by whitespace, so values are free to
//! contain slashes. Values run until the next prefix (or end of input)
//! and are trimmed.

use crate::error::{ParseError, ParseResult};
use std::collections::HashMap;

/// A field marker such as `n/` or `p/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_ORG_ID: Prefix = Prefix("o/");
pub const PREFIX_DEVICE: Prefix = Prefix("d/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_STATUS: Prefix = Prefix("s/");

/// The tokenized argument tail: the preamble (text before the first
/// prefix) plus every prefixed value, in input order per prefix.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if any.
    pub fn value_of(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Reject repeated single-valued prefixes.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|&&p| self.values.get(&p).is_some_and(|v| v.len() > 1))
            .map(|p| p.as_str())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::InvalidValue(format!(
                "Multiple values specified for the following single-valued field(s): {}",
                duplicated.join(" ")
            )))
        }
    }
}

/// Split `args` into a preamble and prefixed values.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // Every prefix occurrence that follows whitespace, in input order.
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(|&(i, _)| {
                    args[..i].chars().next_back().is_some_and(char::is_whitespace)
                })
                .map(move |(i, _)| (i, prefix))
        })
        .collect();
    positions.sort_by_key(|&(i, _)| i);

    let mut map = ArgumentMultimap {
        preamble: args[..positions.first().map_or(args.len(), |&(i, _)| i)]
            .trim()
            .to_string(),
        values: HashMap::new(),
    };

    for (k, &(start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(k + 1).map_or(args.len(), |&(i, _)| i);
        map.values
            .entry(prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    map
}
