//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::state::room::ROOM_CODE_LENGTH;

/// Maximum length accepted for a player display name.
const DISPLAY_NAME_MAX_CHARS: usize = 40;
/// Maximum length accepted for a chip name.
const CHIP_NAME_MAX_CHARS: usize = 64;

/// Validates that a room code is exactly six alphanumeric characters.
///
/// Codes are matched case-insensitively, so `abc123` passes here and gets
/// normalised to uppercase before the lookup.
///
/// # Examples
///
/// ```ignore
/// validate_room_code("QK7X2P") // Ok
/// validate_room_code("qk7x2p") // Ok - normalised later
/// validate_room_code("QK7X2")  // Err - too short
/// ```
pub fn validate_room_code(code: &str) -> Result<(), ValidationError> {
    let code = code.trim();
    if code.len() != ROOM_CODE_LENGTH {
        let mut err = ValidationError::new("room_code_length");
        err.message = Some(
            format!(
                "Room code must be exactly {ROOM_CODE_LENGTH} characters (got {})",
                code.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut err = ValidationError::new("room_code_format");
        err.message = Some("Room code must contain only letters and digits".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a display name is non-blank and reasonably short.
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("display_name_blank");
        err.message = Some("Display name must not be blank".into());
        return Err(err);
    }

    if trimmed.chars().count() > DISPLAY_NAME_MAX_CHARS {
        let mut err = ValidationError::new("display_name_length");
        err.message = Some(
            format!("Display name must be at most {DISPLAY_NAME_MAX_CHARS} characters").into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Validates that a chip name is non-blank and reasonably short.
pub fn validate_chip_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("chip_name_blank");
        err.message = Some("Chip name must not be blank".into());
        return Err(err);
    }

    if trimmed.chars().count() > CHIP_NAME_MAX_CHARS {
        let mut err = ValidationError::new("chip_name_length");
        err.message =
            Some(format!("Chip name must be at most {CHIP_NAME_MAX_CHARS} characters").into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_room_code_valid() {
        assert!(validate_room_code("QK7X2P").is_ok());
        assert!(validate_room_code("qk7x2p").is_ok());
        assert!(validate_room_code("  QK7X2P  ").is_ok());
        assert!(validate_room_code("000000").is_ok());
    }

    #[test]
    fn test_validate_room_code_invalid() {
        assert!(validate_room_code("QK7X2").is_err()); // too short
        assert!(validate_room_code("QK7X2PP").is_err()); // too long
        assert!(validate_room_code("QK7-2P").is_err()); // punctuation
        assert!(validate_room_code("QK7 2P").is_err()); // inner space
        assert!(validate_room_code("").is_err()); // empty
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Alex").is_ok());
        assert!(validate_display_name(&"x".repeat(40)).is_ok());
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"x".repeat(41)).is_err());
    }

    #[test]
    fn test_validate_chip_name() {
        assert!(validate_chip_name("Birdie Chip").is_ok());
        assert!(validate_chip_name("").is_err());
        assert!(validate_chip_name("   ").is_err());
        assert!(validate_chip_name(&"x".repeat(65)).is_err());
    }
}
