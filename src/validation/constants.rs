//! Constants used throughout the validation system


/// Minimum length of a password
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum length of a username
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Minimum length of a display name
pub const MIN_NAME_LENGTH: usize = 3;
/// Exact number of digits in a contact number
pub const CONTACT_DIGITS: usize = 10;
/// Length of a UUID in its canonical hyphenated form
pub const HYPHENATED_UUID_LENGTH: usize = 36;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_messages::*;

    // The messages are literals, keep them in line with the thresholds.
    #[test]
    fn test_messages_match_thresholds() {
        let cases = vec![
            (PASSWORD_TOO_SHORT, MIN_PASSWORD_LENGTH),
            (USERNAME_TOO_SHORT, MIN_USERNAME_LENGTH),
            (NAME_TOO_SHORT, MIN_NAME_LENGTH),
            (INVALID_CONTACT, CONTACT_DIGITS),
        ];

        for (message, threshold) in cases {
            assert!(message.contains(&threshold.to_string()),
                    "Message '{}' does not mention {}", message, threshold);
        }
    }
}
