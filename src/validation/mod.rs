//! Root module for the validation system.
//! Exposes the field rules, the schema tables and the validated field types.

mod constants;
mod error;
mod rules;
mod schema;
mod types;
mod validators;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::{ErrorKind, FieldError, ValidationErrors};
pub use rules::{Field, Rule};
pub use schema::{check_fields, CheckedFields, FieldTable, Operation, Presence};
pub use types::{Contact, EmailInput, Name, Password, UserId, Username};
