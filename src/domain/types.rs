//! Normalization helpers applied at the domain boundary.
//!
//! Values passing these functions can be treated as trusted by the rest of
//! the domain layer.

use phonenumber::{Mode, parse};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when normalizing a constrained value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid phone number")]
    InvalidPhone,
    #[error("value cannot be empty")]
    EmptyString,
}

/// Trims, lowercases and validates an email address.
pub fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Strips all markup from user-entered free text and drops it when nothing
/// printable remains. Notes are stored and displayed as plain text, so no
/// tag survives, not even the ones ammonia allows by default.
pub fn sanitize_note<S: Into<String>>(value: S) -> Option<String> {
    let cleaned = ammonia::Builder::empty().clean(&value.into()).to_string();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
