//! Shared validation helpers for inbound HTTP adapters.
//!
//! These helpers reject malformed wire input before it reaches the domain
//! and attach structured `details` (field, code, offending value) so clients
//! can surface precise messages.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{BookingId, Error};

/// Validation error codes embedded in HTTP error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyField,
    InvalidBookingId,
    InvalidDate,
    NonPositiveNumber,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::InvalidBookingId => "invalid_booking_id",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::NonPositiveNumber => "non_positive_number",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn value_error(field: FieldName, message: String, code: ErrorCode, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Require a non-empty string field.
pub(crate) fn require_non_empty(value: String, field: FieldName) -> Result<String, Error> {
    if value.trim().is_empty() {
        let name = field.as_str();
        return Err(field_error(
            field,
            format!("{name} must not be empty"),
            ErrorCode::EmptyField,
        ));
    }
    Ok(value)
}

/// Require an optional string field to be non-empty when supplied.
pub(crate) fn require_non_empty_when_present(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<String>, Error> {
    value.map(|v| require_non_empty(v, field)).transpose()
}

/// Require a positive, finite number.
pub(crate) fn require_positive(value: f64, field: FieldName) -> Result<f64, Error> {
    if !value.is_finite() || value <= 0.0 {
        let name = field.as_str();
        return Err(value_error(
            field,
            format!("{name} must be a positive number"),
            ErrorCode::NonPositiveNumber,
            &value.to_string(),
        ));
    }
    Ok(value)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        value_error(
            field,
            format!("{name} must be a YYYY-MM-DD date"),
            ErrorCode::InvalidDate,
            value,
        )
    })
}

/// Parse a booking identifier from a path segment.
pub(crate) fn parse_booking_id(value: &str, field: FieldName) -> Result<BookingId, Error> {
    value.parse().map_err(|_| {
        let name = field.as_str();
        value_error(
            field,
            format!("{name} must be a valid booking id"),
            ErrorCode::InvalidBookingId,
            value,
        )
    })
}
