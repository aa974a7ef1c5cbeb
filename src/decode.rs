//! Boundary parsing of booking-API responses.
//!
//! The remote API is loosely typed; its JSON is parsed into the model here,
//! failing fast on a shape mismatch instead of trusting the cast deeper in.

use crate::model::{AvailabilityBlock, Booking, Branch, Unit};

#[derive(Debug)]
pub enum DecodeError {
    MalformedResponse {
        what: &'static str,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::MalformedResponse { what, source } => {
                write!(f, "malformed {what} response: {source}")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::MalformedResponse { source, .. } => Some(source),
        }
    }
}

fn decode_list<T: serde::de::DeserializeOwned>(
    what: &'static str,
    raw: &str,
) -> Result<Vec<T>, DecodeError> {
    serde_json::from_str(raw).map_err(|source| DecodeError::MalformedResponse { what, source })
}

pub fn decode_branches(raw: &str) -> Result<Vec<Branch>, DecodeError> {
    decode_list("branch", raw)
}

pub fn decode_units(raw: &str) -> Result<Vec<Unit>, DecodeError> {
    decode_list("unit", raw)
}

pub fn decode_bookings(raw: &str) -> Result<Vec<Booking>, DecodeError> {
    decode_list("booking", raw)
}

pub fn decode_blocks(raw: &str) -> Result<Vec<AvailabilityBlock>, DecodeError> {
    decode_list("availability-block", raw)
}
