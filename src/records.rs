//! The four account inputs and the entry point that validates them.
//!
//! Each record declares its schema as a [`FieldTable`]: which fields it reads
//! and whether they are required. The generic pass in
//! [`check_fields`](crate::validation::check_fields) evaluates that table
//! against a raw JSON value; the record is then assembled from the checked
//! values. Absent optional fields stay `None` and are omitted when the record
//! is serialized.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::validation::Presence::{Optional, Required};
use crate::validation::{
    check_fields, CheckedFields, Contact, EmailInput, Field, FieldError, FieldTable, Name,
    Operation, Password, UserId, Username, ValidationErrors,
};

/// A record type that can be produced by validating a raw input
pub trait Schema: Sized {
    /// The operation this record is the input of
    const OPERATION: Operation;

    /// Declared fields, in the order they are checked and reported
    const FIELDS: FieldTable;

    /// Assembles the record from fields that already passed their rules
    fn from_checked(fields: CheckedFields) -> Result<Self, FieldError>;

    /// Checks `raw` against [`Schema::FIELDS`], reporting every violation
    fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let checked = check_fields(Self::FIELDS, raw)?;
        Ok(Self::from_checked(checked)?)
    }
}

/// Input of the sign-up operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRecord {
    pub email: EmailInput,
    pub password: Password,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Username>,
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

impl Schema for SignUpRecord {
    const OPERATION: Operation = Operation::SignUp;

    // username and contact are optional on sign-up
    const FIELDS: FieldTable = &[
        (Field::Email, Required),
        (Field::Password, Required),
        (Field::Username, Optional),
        (Field::Name, Required),
        (Field::Contact, Optional),
    ];

    fn from_checked(mut fields: CheckedFields) -> Result<Self, FieldError> {
        Ok(Self {
            email: fields.take_required(Field::Email)?,
            password: fields.take_required(Field::Password)?,
            username: fields.take(Field::Username)?,
            name: fields.take_required(Field::Name)?,
            contact: fields.take(Field::Contact)?,
        })
    }
}

/// Input of the sign-in operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRecord {
    pub email: EmailInput,
    pub password: Password,
}

impl Schema for SignInRecord {
    const OPERATION: Operation = Operation::SignIn;

    const FIELDS: FieldTable = &[(Field::Email, Required), (Field::Password, Required)];

    fn from_checked(mut fields: CheckedFields) -> Result<Self, FieldError> {
        Ok(Self {
            email: fields.take_required(Field::Email)?,
            password: fields.take_required(Field::Password)?,
        })
    }
}

/// Input of the update-user operation. Only the id is required; every other
/// field is changed only when it is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRecord {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Username>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

impl Schema for UpdateUserRecord {
    const OPERATION: Operation = Operation::UpdateUser;

    const FIELDS: FieldTable = &[
        (Field::UserId, Required),
        (Field::Password, Optional),
        (Field::Username, Optional),
        (Field::Name, Optional),
        (Field::Contact, Optional),
    ];

    fn from_checked(mut fields: CheckedFields) -> Result<Self, FieldError> {
        Ok(Self {
            user_id: fields.take_required(Field::UserId)?,
            password: fields.take(Field::Password)?,
            username: fields.take(Field::Username)?,
            name: fields.take(Field::Name)?,
            contact: fields.take(Field::Contact)?,
        })
    }
}

/// Input of the delete-user operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRecord {
    pub user_id: UserId,
}

impl Schema for DeleteUserRecord {
    const OPERATION: Operation = Operation::DeleteUser;

    const FIELDS: FieldTable = &[(Field::UserId, Required)];

    fn from_checked(mut fields: CheckedFields) -> Result<Self, FieldError> {
        Ok(Self {
            user_id: fields.take_required(Field::UserId)?,
        })
    }
}

macro_rules! impl_try_from_value {
    ($($record:ty),+ $(,)?) => {
        $(
            impl TryFrom<&Value> for $record {
                type Error = ValidationErrors;

                fn try_from(raw: &Value) -> Result<Self, Self::Error> {
                    <Self as Schema>::validate(raw)
                }
            }
        )+
    };
}

impl_try_from_value!(SignUpRecord, SignInRecord, UpdateUserRecord, DeleteUserRecord);

/// A record that passed validation, tagged with its operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum ValidatedInput {
    SignUp(SignUpRecord),
    SignIn(SignInRecord),
    UpdateUser(UpdateUserRecord),
    DeleteUser(DeleteUserRecord),
}

impl ValidatedInput {
    pub fn operation(&self) -> Operation {
        match self {
            ValidatedInput::SignUp(_) => Operation::SignUp,
            ValidatedInput::SignIn(_) => Operation::SignIn,
            ValidatedInput::UpdateUser(_) => Operation::UpdateUser,
            ValidatedInput::DeleteUser(_) => Operation::DeleteUser,
        }
    }
}

impl Operation {
    /// The schema table of this operation
    pub fn fields(self) -> FieldTable {
        match self {
            Operation::SignUp => SignUpRecord::FIELDS,
            Operation::SignIn => SignInRecord::FIELDS,
            Operation::UpdateUser => UpdateUserRecord::FIELDS,
            Operation::DeleteUser => DeleteUserRecord::FIELDS,
        }
    }
}

/// Validates `raw` against the schema of `operation`.
///
/// On success the record holds exactly the declared fields that were present.
/// On failure every violated rule is reported, one entry per field, in the
/// order the schema declares its fields.
///
/// # Example
/// ```
/// use account_schemas::{validate, Operation};
/// use serde_json::json;
///
/// let raw = json!({ "email": "a@b.com", "password": "secret1", "name": "Al" });
/// let errors = validate(Operation::SignUp, &raw).unwrap_err();
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.errors()[0].field, "name");
/// assert_eq!(errors.errors()[0].message, "Name must be at least 3 characters long.");
/// ```
pub fn validate(operation: Operation, raw: &Value) -> Result<ValidatedInput, ValidationErrors> {
    let result = match operation {
        Operation::SignUp => SignUpRecord::validate(raw).map(ValidatedInput::SignUp),
        Operation::SignIn => SignInRecord::validate(raw).map(ValidatedInput::SignIn),
        Operation::UpdateUser => UpdateUserRecord::validate(raw).map(ValidatedInput::UpdateUser),
        Operation::DeleteUser => DeleteUserRecord::validate(raw).map(ValidatedInput::DeleteUser),
    };

    match &result {
        Ok(_) => debug!("{} input accepted", operation),
        Err(errors) => debug!("{} input rejected with {} error(s)", operation, errors.len()),
    }

    result
}
