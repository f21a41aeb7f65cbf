//! Token grammar for the options region.
//!
//! This module classifies a single token as an option, the `--` break,
//! a malformed option, or something that is not an option at all.
//! Short tokens (`-v`, `-v=1`) are rewritten to their long form first.

use crate::value::OptionValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

/// Introducer of a long option, and the literal break token.
pub const BREAK: &str = "--";

/// `-X` or `-X=VALUE`, X a single ASCII word character.
static SHORT_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-([A-Za-z0-9_])(?:=((?s:.*)))?$").expect("short option pattern is valid")
});

/// `NAME` or `NAME=VALUE` after the `--` introducer.
static LONG_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9_-]*)(?:=((?s:.*)))?$")
        .expect("long option pattern is valid")
});

/// Classification of a token in the options region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Exactly `--`
    Break,
    /// `--NAME`, `--NAME=` or `--NAME=VALUE`
    Option { name: &'a str, value: OptionValue },
    /// Starts with `--` but the rest does not fit the name grammar
    Malformed,
    /// Does not start with `--`; ends the options region
    NotOption,
}

/// Rewrite a short option token into its long form.
///
/// The single character is looked up in `short_map`; when it is not mapped
/// the character itself becomes the long name, so `-x` and `--x` end up
/// the same. Anything that is not short-option shaped is returned untouched.
pub fn rewrite_short<'a>(token: &'a str, short_map: &HashMap<char, String>) -> Cow<'a, str> {
    let Some(caps) = SHORT_OPTION.captures(token) else {
        return Cow::Borrowed(token);
    };

    let short = &caps[1];
    let name = short
        .chars()
        .next()
        .and_then(|c| short_map.get(&c))
        .map(String::as_str)
        .unwrap_or(short);

    let long = match caps.get(2) {
        Some(value) => format!("{BREAK}{name}={}", value.as_str()),
        None => format!("{BREAK}{name}"),
    };
    log::trace!("rewrote short option {token:?} to {long:?}");
    Cow::Owned(long)
}

/// Classify a single (already rewritten) token.
///
/// # Rules
///
/// - `--` alone is the break
/// - `--` followed by a valid name, optionally `=VALUE`, is an option
/// - `--` followed by anything else is malformed
/// - Everything else (including lone `-` and `-abc`) is not an option
pub fn classify(token: &str) -> Token<'_> {
    let Some(rest) = token.strip_prefix(BREAK) else {
        return Token::NotOption;
    };

    if rest.is_empty() {
        return Token::Break;
    }

    match LONG_OPTION.captures(rest) {
        Some(caps) => {
            // Group 1 always participates in a match.
            let name = caps.get(1).map_or("", |m| m.as_str());
            let value = match caps.get(2) {
                Some(v) => OptionValue::Value(v.as_str().to_string()),
                None => OptionValue::Present,
            };
            Token::Option { name, value }
        }
        None => Token::Malformed,
    }
}
