//! Predicates behind the field rules

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::constants::{CONTACT_DIGITS, HYPHENATED_UUID_LENGTH};

// ASCII only and case-insensitive. The regex crate has no lookahead, so the
// leading-dot and double-dot restrictions are checked in `is_email`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("Failed to compile email regex")
});

// Unicode whitespace, plus U+FEFF which JavaScript's `\s` also matches
static NO_WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}]*$").expect("Failed to compile no-whitespace regex")
});

// ASCII digits only; `\d` would also accept other Unicode digits
static CONTACT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[0-9]{{{}}}$", CONTACT_DIGITS))
        .expect("Failed to compile contact regex")
});

/// Validates email addresses: a local part of letters, digits and `_'+-.`
/// that neither starts nor ends with a dot, and a dotted domain whose last
/// label has at least two letters. No two dots may follow each other.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

/// Accepts any UUID version or variant, in hyphenated form only.
pub fn is_uuid(value: &str) -> bool {
    value.len() == HYPHENATED_UUID_LENGTH && Uuid::try_parse(value).is_ok()
}

/// Length is counted in UTF-16 code units, the way browsers and JavaScript
/// clients measure it: characters outside the BMP count twice.
pub fn has_min_length<const N: usize>(value: &str) -> bool {
    value.encode_utf16().count() >= N
}

pub fn has_no_whitespace(value: &str) -> bool {
    NO_WHITESPACE_REGEX.is_match(value)
}

pub fn is_contact_number(value: &str) -> bool {
    CONTACT_REGEX.is_match(value)
}
