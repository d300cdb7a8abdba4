//! Field validation helpers shared by the parameter models.

use crate::server::error::AppError;

/// Trims a required text field, rejecting empty values.
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - Value is empty after trimming
pub fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("{} is required", field)));
    }

    Ok(trimmed.to_string())
}

/// Trims an optional text field; blank values become `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalizes an email address to lowercase and checks its basic shape.
pub fn email(value: &str) -> Result<String, AppError> {
    let email = required_text("Email", value)?.to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };

    if !valid || email.contains(char::is_whitespace) {
        return Err(AppError::bad_request("Email is invalid"));
    }

    Ok(email)
}

/// Rejects negative amounts and non-finite numbers.
pub fn non_negative(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::bad_request(format!(
            "{} must be zero or greater",
            field
        )));
    }

    Ok(value)
}
