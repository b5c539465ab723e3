//! User-related custom validators.

use validator::ValidationError;

/// Custom validator for required text fields.
/// Rejects empty strings and strings made only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Name is required".into());
        return Err(error);
    }
    Ok(())
}
