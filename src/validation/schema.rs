//! Schema tables and the pass that checks a raw input against one.

use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};

use super::error::{FieldError, ValidationErrors};
use super::rules::Field;

/// The operations an input can be validated for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    SignUp,
    SignIn,
    UpdateUser,
    DeleteUser,
}

/// Whether a schema requires a field to be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// The fields a schema declares, in the order they are checked and reported
pub type FieldTable = &'static [(Field, Presence)];

/// String values that passed every rule of their field.
///
/// Only fields present in the raw input end up here, so a missing optional
/// field stays missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckedFields {
    values: BTreeMap<Field, String>,
}

impl CheckedFields {
    /// Removes an optional field and converts it to its validated type
    pub fn take<T>(&mut self, field: Field) -> Result<Option<T>, FieldError>
    where
        T: TryFrom<String, Error = FieldError>,
    {
        self.values
            .remove(&field)
            .map(<T as TryFrom<String>>::try_from)
            .transpose()
    }

    /// Same as [`CheckedFields::take`], for a field the schema requires
    pub fn take_required<T>(&mut self, field: Field) -> Result<T, FieldError>
    where
        T: TryFrom<String, Error = FieldError>,
    {
        self.take(field)?
            .ok_or_else(|| FieldError::missing(field.key()))
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Checks every declared field of `raw` independently and collects all the
/// violations before returning. Keys not declared by the table are ignored.
pub fn check_fields(table: FieldTable, raw: &Value) -> Result<CheckedFields, ValidationErrors> {
    let object = raw
        .as_object()
        .ok_or_else(|| ValidationErrors::from(FieldError::not_an_object(raw)))?;

    let mut checked = CheckedFields::default();
    let mut errors = ValidationErrors::new();

    for &(field, presence) in table {
        match (object.get(field.key()), presence) {
            (None, Presence::Optional) => trace!("Optional field '{}' absent", field),
            (None, Presence::Required) => errors.push(FieldError::missing(field.key())),
            (Some(Value::String(value)), _) => match field.check(value) {
                Ok(()) => {
                    checked.values.insert(field, value.clone());
                }
                Err(error) => errors.push(error),
            },
            (Some(other), _) => errors.push(FieldError::wrong_type(field.key(), other)),
        }
    }

    errors.into_result(checked)
}
