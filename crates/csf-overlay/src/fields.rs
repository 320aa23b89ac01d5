//! Field checks shared by the overlay record conversions.

use csf_core::{Timestamp, ValidationError};

/// Unwrap a required field or report it missing.
pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Check an integer against an inclusive range.
pub(crate) fn int_in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<u8, ValidationError> {
    if (min..=max).contains(&value) {
        u8::try_from(value).map_err(|_| ValidationError::out_of_range(field, value, min, max))
    } else {
        Err(ValidationError::out_of_range(field, value, min, max))
    }
}

/// Check a score against an inclusive range. NaN is always out of range.
pub(crate) fn score_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(field, value, min, max))
    }
}

/// Parse an optional timestamp, defaulting to now.
pub(crate) fn timestamp_or_now(value: Option<String>) -> Result<Timestamp, ValidationError> {
    Ok(optional_timestamp(value)?.unwrap_or_else(Timestamp::now))
}

/// Parse an optional timestamp.
pub(crate) fn optional_timestamp(
    value: Option<String>,
) -> Result<Option<Timestamp>, ValidationError> {
    value.as_deref().map(Timestamp::parse).transpose()
}
