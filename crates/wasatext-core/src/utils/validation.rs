//! Input validation shared by front ends.
//!
//! The backend enforces the same rules; checking them locally saves a
//! round trip and gives a clearer message.

use crate::ports::ChatPortError;

/// Shortest accepted username or group name, in bytes.
pub const MIN_NAME_LEN: usize = 3;

/// Longest accepted username or group name, in bytes.
pub const MAX_NAME_LEN: usize = 16;

/// Validates a username or group name.
///
/// # Examples
///
/// ```rust
/// use wasatext_core::utils::validation::validate_name;
///
/// assert!(validate_name("alice").is_ok());
/// assert!(validate_name("al").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), ChatPortError> {
    if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len()) {
        Ok(())
    } else {
        Err(ChatPortError::Validation {
            message: format!(
                "name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters"
            ),
        })
    }
}

/// Validates an outgoing message: text is required unless it is a photo.
pub fn validate_message(text: &str, is_photo: bool) -> Result<(), ChatPortError> {
    if text.is_empty() && !is_photo {
        return Err(ChatPortError::Validation {
            message: "message or photo is required".to_string(),
        });
    }
    Ok(())
}
