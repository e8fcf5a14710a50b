//! Validation schemas for the inputs of a user-management API.
//!
//! Four operations are covered: sign-up, sign-in, update-user and
//! delete-user. Each takes an untyped JSON object and either produces a
//! strongly-typed record or the complete list of field errors found in it.
//!
//! ```
//! use account_schemas::{validate, Operation, ValidatedInput};
//! use serde_json::json;
//!
//! let raw = json!({ "email": "a@b.com", "password": "secret1" });
//!
//! match validate(Operation::SignIn, &raw) {
//!     Ok(ValidatedInput::SignIn(record)) => assert_eq!(record.email.as_str(), "a@b.com"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! With the `axum` feature (on by default), [`ValidationErrors`] is a
//! `400 Bad Request` response and [`http::Validated`] validates request bodies.

pub mod error_messages;
#[cfg(feature = "axum")]
pub mod http;
pub mod records;
pub mod validation;

pub use records::{
    validate, DeleteUserRecord, Schema, SignInRecord, SignUpRecord, UpdateUserRecord,
    ValidatedInput,
};
pub use validation::{ErrorKind, FieldError, Operation, ValidationErrors};
