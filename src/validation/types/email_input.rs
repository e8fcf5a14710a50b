//! Represents a validated email address.
//!
//! This module provides a type-safe wrapper around email addresses that ensures
//! they meet the email rule of the account schemas: an ASCII local part that
//! does not start or end with a dot, and a dotted domain ending in a
//! top-level domain of at least two letters.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::validation::{Field, FieldError};

/// A validated email address.
/// This type can only be constructed through validation, ensuring that any
/// instance is a properly formatted email address. The address is kept exactly
/// as submitted: it is neither trimmed nor lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailInput(String);

impl EmailInput {
    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailInput {
    type Error = FieldError;

    /// # Example
    /// ```
    /// use account_schemas::validation::EmailInput;
    ///
    /// let email = EmailInput::try_from("user@example.com").unwrap();
    /// assert_eq!(email.as_str(), "user@example.com");
    /// assert!(EmailInput::try_from("not-an-email").is_err());
    /// ```
    fn try_from(email: String) -> Result<Self, Self::Error> {
        Field::Email.check(&email)?;
        Ok(Self(email))
    }
}

impl TryFrom<&str> for EmailInput {
    type Error = FieldError;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        Self::try_from(email.to_owned())
    }
}

impl From<EmailInput> for String {
    fn from(email: EmailInput) -> Self {
        email.0
    }
}

/// Allows using EmailInput wherever a string reference is needed
impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
