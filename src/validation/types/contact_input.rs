//! A contact phone number made of exactly ten ASCII digits.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::validation::{Field, FieldError};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Contact(String);

impl Contact {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Contact {
    type Error = FieldError;

    fn try_from(contact: String) -> Result<Self, Self::Error> {
        Field::Contact.check(&contact)?;
        Ok(Self(contact))
    }
}

impl TryFrom<&str> for Contact {
    type Error = FieldError;

    fn try_from(contact: &str) -> Result<Self, Self::Error> {
        Self::try_from(contact.to_owned())
    }
}

impl From<Contact> for String {
    fn from(contact: Contact) -> Self {
        contact.0
    }
}

impl AsRef<str> for Contact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
