//! Boundary checks shared by the request types.

use costlens_core::errors::ValidationError;

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

pub(crate) fn in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    let value = finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

pub(crate) fn at_least(field: &'static str, value: f64, min: f64) -> Result<(), ValidationError> {
    in_range(field, value, min, f64::INFINITY)
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    at_least(field, value, 0.0)
}

pub(crate) fn dimension(field: &'static str, value: i64) -> Result<(), ValidationError> {
    in_range(
        field,
        value as f64,
        0.0,
        costlens_core::constants::MAX_DIMENSION_SCORE as f64,
    )
}
