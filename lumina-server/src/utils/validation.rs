//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! transaction-entry boundary. Rejections happen before any mutation; the
//! record store is left untouched on failure.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest/group labels
pub const MAX_NAME_LEN: usize = 200;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a monetary amount is a finite, non-negative number.
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative amount"
        )));
    }
    Ok(())
}
