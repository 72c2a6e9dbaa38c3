//! Field coercion from table cell text.
//!
//! Pure functions turning already-trimmed cell text into typed values.
//! They never substitute defaults: malformed input is an error.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Timestamp layout used by the exports, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout written to CSV output, with an explicit UTC offset.
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

const TIMESTAMP_LEN: usize = "YYYY-MM-DD HH:MM:SS".len();

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("invalid timestamp '{value}' (expected 'YYYY-MM-DD HH:MM:SS')")]
    Timestamp { value: String },

    #[error("invalid integer '{value}': {source}")]
    Integer {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float '{value}': {reason}")]
    Float { value: String, reason: String },
}

/// Parse `YYYY-MM-DD HH:MM:SS` as a UTC instant.
pub fn parse_utc_timestamp(value: &str) -> Result<DateTime<Utc>, CoercionError> {
    let invalid = || CoercionError::Timestamp {
        value: value.to_string(),
    };

    // chrono accepts unpadded fields, the export layout is fixed-width
    if value.len() != TIMESTAMP_LEN {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| invalid())
}

/// Render a timestamp as written to CSV output, e.g. `2024-10-25 13:02:11+00:00`.
pub fn format_utc_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(OUTPUT_TIMESTAMP_FORMAT).to_string()
}

/// Inverse of [`format_utc_timestamp`]; the offset is required and any
/// offset is normalised to UTC.
pub fn parse_output_timestamp(value: &str) -> Result<DateTime<Utc>, CoercionError> {
    DateTime::parse_from_str(value, OUTPUT_TIMESTAMP_FORMAT)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| CoercionError::Timestamp {
            value: value.to_string(),
        })
}

/// Parse an optionally signed base-10 integer.
pub fn parse_int(value: &str) -> Result<i64, CoercionError> {
    value.parse::<i64>().map_err(|source| CoercionError::Integer {
        value: value.to_string(),
        source,
    })
}

/// Parse a finite decimal number.
pub fn parse_float(value: &str) -> Result<f64, CoercionError> {
    let parsed = value
        .parse::<f64>()
        .map_err(|e: ParseFloatError| CoercionError::Float {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    if !parsed.is_finite() {
        return Err(CoercionError::Float {
            value: value.to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    Ok(parsed)
}

/// Parse a percentage, allowing a single trailing `%`.
pub fn parse_percentage(value: &str) -> Result<f64, CoercionError> {
    let number = value.strip_suffix('%').unwrap_or(value);
    parse_float(number).map_err(|_| CoercionError::Float {
        value: value.to_string(),
        reason: "not a percentage".to_string(),
    })
}
