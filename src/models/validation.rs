//! Field-level shape checks shared by the record types and the tools.

use miette::Diagnostic;
use thiserror::Error;

/// Upper bound for names, colors and external identifiers.
pub const NAME_MAX: usize = 255;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    #[diagnostic(code(plane_mcp::models::empty))]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters (got {actual})")]
    #[diagnostic(code(plane_mcp::models::too_long))]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} must be between {min} and {max} (got {actual})")]
    #[diagnostic(code(plane_mcp::models::out_of_range))]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("{field} must be a non-negative number (got {actual})")]
    #[diagnostic(code(plane_mcp::models::negative))]
    Negative { field: &'static str, actual: String },

    #[error("{field} may only contain {allowed} (got '{value}')")]
    #[diagnostic(code(plane_mcp::models::invalid_characters))]
    InvalidCharacters {
        field: &'static str,
        allowed: &'static str,
        value: String,
    },
}

pub type ValidationResult = Result<(), ValidationError>;

/// Records that carry field-level constraints.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

pub fn not_empty(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub fn max_chars(field: &'static str, value: &str, max: usize) -> ValidationResult {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

pub fn optional_max_chars(field: &'static str, value: Option<&str>, max: usize) -> ValidationResult {
    value.map_or(Ok(()), |v| max_chars(field, v, max))
}

pub fn in_range(field: &'static str, value: i64, min: i64, max: i64) -> ValidationResult {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            actual: value,
        });
    }
    Ok(())
}

pub fn optional_in_range(field: &'static str, value: Option<i64>, min: i64, max: i64) -> ValidationResult {
    value.map_or(Ok(()), |v| in_range(field, v, min, max))
}

pub fn non_negative(field: &'static str, value: f64) -> ValidationResult {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(ValidationError::Negative {
        field,
        actual: value.to_string(),
    })
}

/// Reject any character `allowed` returns false for.
pub fn charset(
    field: &'static str,
    value: &str,
    description: &'static str,
    allowed: impl Fn(char) -> bool,
) -> ValidationResult {
    if value.chars().all(allowed) {
        return Ok(());
    }
    Err(ValidationError::InvalidCharacters {
        field,
        allowed: description,
        value: value.to_string(),
    })
}
