//! Validated field types

mod contact_input;
mod email_input;
mod text_input;
mod user_id;

// Re-export commonly used types
pub use contact_input::Contact;
pub use email_input::EmailInput;
pub use text_input::{Name, Password, Username};
pub use user_id::UserId;
