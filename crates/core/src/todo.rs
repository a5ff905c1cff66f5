//! Todo field validation.
//!
//! Validation helpers used by the API layer before a todo is persisted.

use crate::error::CoreError;

/// Validate that a todo title is present and non-empty.
///
/// Whitespace-only titles are rejected along with empty ones.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normal_title() {
        assert!(validate_title("Buy milk").is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        assert!(validate_title("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_title() {
        assert!(validate_title("   \t").is_err());
    }
}
