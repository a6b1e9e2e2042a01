use crate::utils::error::{PracticeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PracticeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// A bounded queue must hold the whole batch, otherwise the producer blocks
/// while workers wait on a full result queue.
pub fn validate_capacity(field_name: &str, capacity: usize, required: usize) -> Result<()> {
    if capacity < required {
        return Err(PracticeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: capacity.to_string(),
            reason: format!("Capacity must hold at least {} items", required),
        });
    }
    Ok(())
}
