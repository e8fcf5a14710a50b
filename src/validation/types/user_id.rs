//! Identifier of an existing user account.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error_messages::INVALID_UUID;
use crate::validation::{ErrorKind, Field, FieldError, HYPHENATED_UUID_LENGTH};

/// A user identifier parsed from its hyphenated UUID form.
///
/// Any UUID version or variant is accepted. It is displayed and serialized
/// back in lowercase hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl TryFrom<&str> for UserId {
    type Error = FieldError;

    fn try_from(user_id: &str) -> Result<Self, Self::Error> {
        if user_id.len() != HYPHENATED_UUID_LENGTH {
            return Err(invalid_user_id());
        }
        Uuid::try_parse(user_id)
            .map(Self)
            .map_err(|_| invalid_user_id())
    }
}

fn invalid_user_id() -> FieldError {
    FieldError::new(Field::UserId.key(), ErrorKind::InvalidFormat, INVALID_UUID)
}

impl TryFrom<String> for UserId {
    type Error = FieldError;

    fn try_from(user_id: String) -> Result<Self, Self::Error> {
        Self::try_from(user_id.as_str())
    }
}

impl From<UserId> for String {
    fn from(user_id: UserId) -> Self {
        user_id.0.hyphenated().to_string()
    }
}

impl From<UserId> for Uuid {
    fn from(user_id: UserId) -> Self {
        user_id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_id() {
        let uuid = Uuid::new_v4();
        let user_id = UserId::try_from(uuid.to_string()).unwrap();

        assert_eq!(user_id.as_uuid(), &uuid);
        assert_eq!(user_id.to_string(), uuid.hyphenated().to_string());
    }

    #[test]
    fn test_uppercase_is_normalized_on_output() {
        let raw = "6BA7B810-9DAD-11D1-80B4-00C04FD430C8";
        let user_id = UserId::try_from(raw).unwrap();

        assert_eq!(String::from(user_id), raw.to_lowercase());
    }

    #[test]
    fn test_invalid_user_id() {
        let invalid_cases = vec![
            "".to_string(),
            "not-a-uuid".to_string(),
            Uuid::new_v4().simple().to_string(),
            Uuid::new_v4().braced().to_string(),
        ];

        for user_id in invalid_cases {
            let error = UserId::try_from(user_id.as_str()).unwrap_err();
            assert_eq!(error.field, "userId");
            assert_eq!(error.message, "Invalid uuid", "Invalid id {:?} was accepted !", user_id);
        }
    }

    #[test]
    fn test_agrees_with_field_rule() {
        let uuid = Uuid::new_v4();
        let cases = vec![
            uuid.to_string(),
            uuid.to_string().to_uppercase(),
            uuid.simple().to_string(),
            uuid.urn().to_string(),
            "6ba7b810-9dad-11d1-80b4-00c04fd430cg".to_string(),
            "6ba7b810_9dad_11d1_80b4_00c04fd430c8".to_string(),
            "not-a-uuid".to_string(),
        ];

        for raw in cases {
            assert_eq!(UserId::try_from(raw.as_str()).err(), Field::UserId.check(&raw).err(),
                       "UserId and the userId rule disagree on {:?}", raw);
        }
    }

    #[test]
    fn test_serde_roundtrip_keeps_string_form() {
        let uuid = Uuid::new_v4();
        let user_id: UserId = serde_json::from_value(serde_json::json!(uuid.to_string())).unwrap();

        assert_eq!(serde_json::to_value(user_id).unwrap(), serde_json::json!(uuid.to_string()));
    }
}
