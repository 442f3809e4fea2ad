use crate::utils::error::{PrefixError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrefixError::invalid_argument(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(PrefixError::invalid_argument(
            field_name,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PrefixError::invalid_argument(
            field_name,
            format!("Value must be at least {}, got {}", min_value, value),
        ));
    }
    Ok(())
}

/// Converts a signed length into `usize`, rejecting negatives.
pub fn validate_non_negative(field_name: &str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(PrefixError::invalid_argument(
            field_name,
            format!("must not be negative, got {}", value),
        ));
    }
    usize::try_from(value).map_err(|_| {
        PrefixError::invalid_argument(field_name, format!("{} does not fit in usize", value))
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrefixError::invalid_argument(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PrefixError::invalid_argument(
            field_name,
            format!("'{}' is not one of: {}", value, allowed.join(", ")),
        ));
    }
    Ok(())
}
