// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Record Invariants
//!
//! Business rules shared by every cloud-resource record. All functions are
//! pure (no side effects) and report the violated invariant by name.
//!
//! # Invariant Categories
//!
//! 1. **Identity**: names and cluster references must be non-empty
//! 2. **Ranges**: counts are non-negative, grace periods are positive
//! 3. **Capacity bounds**: `min < max` and `min <= desired <= max`
//! 4. **Enumerations**: string values must belong to a closed set
//!
//! Records expose these through the [`Validate`] trait.

use tracing::debug;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required string field is empty
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// Count or size is below zero
    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: i32 },

    /// Value must be strictly positive
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveValue { field: &'static str, value: i32 },

    /// Maximum size does not exceed minimum size
    #[error("max_size ({max}) must be greater than min_size ({min})")]
    SizeRange { min: i32, max: i32 },

    /// Desired capacity outside of [min, max]
    #[error("desired_capacity {desired} must be within [{min}, {max}]")]
    DesiredCapacityOutOfRange { desired: i32, min: i32, max: i32 },

    /// String is not one of the allowed enumeration values
    #[error("Invalid {kind}: {value:?} (expected one of {allowed})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        allowed: &'static str,
    },

    /// Disabled records never pass validation
    #[error("{field} must be true, record is disabled")]
    Disabled { field: &'static str },
}

/// Validation over the current field values of a record
pub trait Validate {
    /// Human-readable record kind used in log output
    const KIND: &'static str;

    /// Every violated invariant, in declaration order
    fn violations(&self) -> Vec<ValidationError>;

    /// Check all invariants, reporting the first violation
    fn validate(&self) -> ValidationResult {
        match self.violations().into_iter().next() {
            Some(err) => {
                debug!(kind = Self::KIND, error = %err, "validation failed");
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Coarse boolean form of [`Validate::validate`]
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Validate that a required string field is present
pub fn validate_non_empty(field: &'static str, value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Validate that a count is zero or more
pub fn validate_non_negative(field: &'static str, value: i32) -> ValidationResult {
    if value < 0 {
        return Err(ValidationError::NegativeValue { field, value });
    }
    Ok(())
}

/// Validate that a duration or size is strictly positive
pub fn validate_positive(field: &'static str, value: i32) -> ValidationResult {
    if value <= 0 {
        return Err(ValidationError::NonPositiveValue { field, value });
    }
    Ok(())
}

/// Validate the size range of a scaling group
///
/// # Rules
/// - `max_size` must be strictly greater than `min_size`
pub fn validate_size_range(min: i32, max: i32) -> ValidationResult {
    if max <= min {
        return Err(ValidationError::SizeRange { min, max });
    }
    Ok(())
}

/// Validate that the desired capacity sits inside the size range
///
/// # Rules
/// - `min <= desired <= max` (both ends inclusive)
pub fn validate_desired_capacity(desired: i32, min: i32, max: i32) -> ValidationResult {
    if desired < min || desired > max {
        return Err(ValidationError::DesiredCapacityOutOfRange { desired, min, max });
    }
    Ok(())
}

/// Collect the error side of each result
pub(crate) fn collect_violations(
    results: impl IntoIterator<Item = ValidationResult>,
) -> Vec<ValidationError> {
    results.into_iter().filter_map(Result::err).collect()
}
