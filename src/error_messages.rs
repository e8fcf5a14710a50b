//! Messages reported to callers when an input is rejected

use serde_json::Value;

pub const VALIDATION_ERROR: &str = "Validation failed";

pub const REQUIRED: &str = "Required";

pub const INVALID_EMAIL: &str = "Invalid email";

pub const INVALID_UUID: &str = "Invalid uuid";

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long.";

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters long.";

pub const USERNAME_HAS_SPACES: &str = "Username must not contain spaces.";

pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters long.";

pub const INVALID_CONTACT: &str = "Contact must be a valid 10-digit number.";

/// Builds the message for a value whose JSON type is not the one expected,
/// e.g. `Expected string, received number`.
pub fn unexpected_type(expected: &str, received: &Value) -> String {
    format!("Expected {}, received {}", expected, json_type_name(received))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
