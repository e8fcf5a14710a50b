//! Errors produced when an input does not satisfy its schema.
//!
//! Rejections are data: every violated rule becomes one [`FieldError`], and a
//! whole input yields a [`ValidationErrors`] list that callers render as they
//! see fit.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error_messages::{unexpected_type, REQUIRED};

/// The family of rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field is absent
    MissingField,
    /// The field is present but is not a string (or the input is not an object)
    WrongType,
    /// The value is shorter than the field's minimum length
    TooShort,
    /// The value does not match the field's pattern
    PatternMismatch,
    /// The value is not a valid email address or UUID
    InvalidFormat,
}

/// One violated rule, attached to the field it was found on.
///
/// `field` is the key as it appears in the raw input (`userId`, not `user_id`).
/// It is empty when the input as a whole is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    pub fn missing(field: &'static str) -> Self {
        Self::new(field, ErrorKind::MissingField, REQUIRED)
    }

    /// A field that was present but held something other than a string
    pub fn wrong_type(field: &'static str, received: &Value) -> Self {
        Self::new(field, ErrorKind::WrongType, unexpected_type("string", received))
    }

    /// The raw input itself was not a JSON object
    pub fn not_an_object(received: &Value) -> Self {
        Self::new("", ErrorKind::WrongType, unexpected_type("object", received))
    }
}

/// Every violation found in one input, in schema declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Errors reported for a single input key
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |error| error.field == field)
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }

    /// `Ok(value)` when nothing was collected, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
