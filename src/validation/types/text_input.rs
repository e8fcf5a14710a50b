//! Validated free-text account fields: passwords, usernames and display names.
//!
//! Lengths are counted in UTF-16 code units. None of these values are trimmed or
//! normalized; what was submitted is what is kept.

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::validation::{Field, FieldError};

/// A password that satisfies the minimum length.
///
/// The content is never printed: there is no `Display` impl and `Debug`
/// is redacted.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(\"********\")")
    }
}

impl TryFrom<String> for Password {
    type Error = FieldError;

    fn try_from(password: String) -> Result<Self, Self::Error> {
        Field::Password.check(&password)?;
        Ok(Self(password))
    }
}

impl TryFrom<&str> for Password {
    type Error = FieldError;

    fn try_from(password: &str) -> Result<Self, Self::Error> {
        Self::try_from(password.to_owned())
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.0
    }
}

/// Wrapper type for a username that has been validated: long enough and
/// without any whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = FieldError;

    fn try_from(username: String) -> Result<Self, Self::Error> {
        Field::Username.check(&username)?;
        Ok(Self(username))
    }
}

impl TryFrom<&str> for Username {
    type Error = FieldError;

    fn try_from(username: &str) -> Result<Self, Self::Error> {
        Self::try_from(username.to_owned())
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A display name. Spaces are allowed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Field::Name.check(&name)?;
        Ok(Self(name))
    }
}

impl TryFrom<&str> for Name {
    type Error = FieldError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::try_from(name.to_owned())
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
