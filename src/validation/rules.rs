//! Field-level constraint tables.
//!
//! Each [`Field`] owns an ordered list of [`Rule`]s. A value is checked against
//! the rules in order and the first one that fails is reported; later rules
//! for the same field are not evaluated.

use std::fmt;

use log::debug;

use super::constants::{MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use super::error::{ErrorKind, FieldError};
use super::validators::{has_min_length, has_no_whitespace, is_contact_number, is_email, is_uuid};
use crate::error_messages::*;

/// A predicate over one field value, plus what to report when it does not hold
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: ErrorKind,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    const fn new(kind: ErrorKind, message: &'static str, check: fn(&str) -> bool) -> Self {
        Self { kind, message, check }
    }

    pub fn holds(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

const EMAIL_RULES: &[Rule] = &[Rule::new(ErrorKind::InvalidFormat, INVALID_EMAIL, is_email)];

const PASSWORD_RULES: &[Rule] = &[Rule::new(
    ErrorKind::TooShort,
    PASSWORD_TOO_SHORT,
    has_min_length::<MIN_PASSWORD_LENGTH>,
)];

const USERNAME_RULES: &[Rule] = &[
    Rule::new(
        ErrorKind::TooShort,
        USERNAME_TOO_SHORT,
        has_min_length::<MIN_USERNAME_LENGTH>,
    ),
    Rule::new(ErrorKind::PatternMismatch, USERNAME_HAS_SPACES, has_no_whitespace),
];

const NAME_RULES: &[Rule] = &[Rule::new(
    ErrorKind::TooShort,
    NAME_TOO_SHORT,
    has_min_length::<MIN_NAME_LENGTH>,
)];

const CONTACT_RULES: &[Rule] = &[Rule::new(
    ErrorKind::PatternMismatch,
    INVALID_CONTACT,
    is_contact_number,
)];

const USER_ID_RULES: &[Rule] = &[Rule::new(ErrorKind::InvalidFormat, INVALID_UUID, is_uuid)];

/// Every field any schema may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    Username,
    Name,
    Contact,
    UserId,
}

impl Field {
    /// The key this field is read from in a raw input
    pub const fn key(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Username => "username",
            Field::Name => "name",
            Field::Contact => "contact",
            Field::UserId => "userId",
        }
    }

    pub const fn rules(self) -> &'static [Rule] {
        match self {
            Field::Email => EMAIL_RULES,
            Field::Password => PASSWORD_RULES,
            Field::Username => USERNAME_RULES,
            Field::Name => NAME_RULES,
            Field::Contact => CONTACT_RULES,
            Field::UserId => USER_ID_RULES,
        }
    }

    /// Runs the rule chain, stopping at the first rule that fails.
    pub fn check(self, value: &str) -> Result<(), FieldError> {
        match self.rules().iter().find(|rule| !rule.holds(value)) {
            Some(rule) => {
                debug!("Field '{}' rejected: {}", self.key(), rule.message);
                Err(FieldError::new(self.key(), rule.kind, rule.message))
            }
            None => Ok(()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_boundary() {
        assert!(Field::Password.check("secret").is_ok(), "6 characters must pass");

        let error = Field::Password.check("secre").unwrap_err();
        assert_eq!(error.field, "password");
        assert_eq!(error.kind, ErrorKind::TooShort);
        assert_eq!(error.message, "Password must be at least 6 characters long.");
    }

    #[test]
    fn test_username_rules() {
        assert!(Field::Username.check("abc").is_ok());

        let cases = vec![
            ("ab", ErrorKind::TooShort, "Username must be at least 3 characters long."),
            ("a b", ErrorKind::PatternMismatch, "Username must not contain spaces."),
            ("john doe", ErrorKind::PatternMismatch, "Username must not contain spaces."),
        ];

        for (value, kind, message) in cases {
            let error = Field::Username.check(value).unwrap_err();
            assert_eq!(error.kind, kind, "Unexpected kind for {:?}", value);
            assert_eq!(error.message, message, "Unexpected message for {:?}", value);
        }
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        // Too short and contains a space: only the length rule is reported
        let error = Field::Username.check(" a").unwrap_err();
        assert_eq!(error.kind, ErrorKind::TooShort);
    }

    #[test]
    fn test_name_contact_and_ids() {
        assert!(Field::Name.check("Alice").is_ok());
        assert_eq!(Field::Name.check("Al").unwrap_err().kind, ErrorKind::TooShort);

        assert!(Field::Contact.check("0123456789").is_ok());
        assert_eq!(Field::Contact.check("12345").unwrap_err().message,
                   "Contact must be a valid 10-digit number.");

        assert!(Field::Email.check("a@b.com").is_ok());
        assert_eq!(Field::Email.check("bad").unwrap_err().kind, ErrorKind::InvalidFormat);

        let error = Field::UserId.check("not-a-uuid").unwrap_err();
        assert_eq!(error.field, "userId");
        assert_eq!(error.kind, ErrorKind::InvalidFormat);
        assert_eq!(error.message, "Invalid uuid");
    }

    #[test]
    fn test_every_field_has_rules() {
        let fields = vec![
            Field::Email,
            Field::Password,
            Field::Username,
            Field::Name,
            Field::Contact,
            Field::UserId,
        ];

        for field in fields {
            assert!(!field.rules().is_empty(), "Field {} has no rules", field);
        }
    }
}
