use chrono::NaiveDate;

/// Hour component of a slot label.
pub type Hour = u32;

/// First bookable hour of the day.
pub const OPEN_HOUR: Hour = 10;
/// Last bookable hour of the day.
pub const LAST_HOUR: Hour = 24;

/// The fixed slot vocabulary, in order: "10.00" through "24.00".
pub fn slot_labels() -> impl Iterator<Item = String> {
    (OPEN_HOUR..=LAST_HOUR).map(|h| format!("{h}.00"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    InvalidDate(String),
    InvalidSlot(String),
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::InvalidDate(raw) => write!(f, "invalid date: {raw:?}"),
            TimeError::InvalidSlot(raw) => write!(f, "invalid slot label: {raw:?}"),
        }
    }
}

impl std::error::Error for TimeError {}

/// Normalize any date-like wire string to its calendar date.
///
/// Accepts date-only strings ("2025-03-10") and ISO datetimes
/// ("2025-03-10T14:00:00Z", "2025-03-10 14:00:00"). Only the date part is
/// kept; time-of-day and offset are discarded rather than converted, so a
/// record stays on the calendar day it was written with.
pub fn date_key(raw: &str) -> Result<NaiveDate, TimeError> {
    let raw = raw.trim();
    let date_part = match raw.split_once(['T', ' ']) {
        Some((date, _)) => date,
        None => raw,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(raw.to_string()))
}

/// Parse the hour out of a slot label: the leading integer before the
/// decimal point ("14.00" -> 14).
pub fn slot_hour(label: &str) -> Result<Hour, TimeError> {
    let head = label.trim().split('.').next().unwrap_or("");
    head.parse::<Hour>()
        .map_err(|_| TimeError::InvalidSlot(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_date_only() {
        let d = date_key("2025-03-10").unwrap();
        assert_eq!(d.to_string(), "2025-03-10");
    }

    #[test]
    fn date_key_iso_datetime_discards_time() {
        let d = date_key("2025-03-10T23:59:59Z").unwrap();
        assert_eq!(d.to_string(), "2025-03-10");
    }

    #[test]
    fn date_key_space_separated_datetime() {
        let d = date_key("2025-03-10 14:00:00").unwrap();
        assert_eq!(d.to_string(), "2025-03-10");
    }

    #[test]
    fn date_key_offset_not_converted() {
        // +07:00 could shift the calendar day if converted to UTC; it must not.
        let d = date_key("2025-03-10T00:30:00+07:00").unwrap();
        assert_eq!(d.to_string(), "2025-03-10");
    }

    #[test]
    fn date_key_normalizes_to_zero_padded() {
        let d = date_key("2025-3-9").unwrap();
        assert_eq!(d.to_string(), "2025-03-09");
    }

    #[test]
    fn date_key_garbage_fails() {
        assert_eq!(
            date_key("besok"),
            Err(TimeError::InvalidDate("besok".into()))
        );
        assert!(date_key("").is_err());
    }

    #[test]
    fn slot_hour_parses_label() {
        assert_eq!(slot_hour("14.00").unwrap(), 14);
        assert_eq!(slot_hour("10.00").unwrap(), 10);
        assert_eq!(slot_hour("24.00").unwrap(), 24);
    }

    #[test]
    fn slot_hour_bare_integer() {
        assert_eq!(slot_hour("14").unwrap(), 14);
    }

    #[test]
    fn slot_hour_garbage_fails() {
        assert_eq!(
            slot_hour("siang"),
            Err(TimeError::InvalidSlot("siang".into()))
        );
        assert!(slot_hour("").is_err());
        assert!(slot_hour(".00").is_err());
    }

    #[test]
    fn slot_vocabulary_covers_open_hours() {
        let labels: Vec<String> = slot_labels().collect();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels.first().unwrap(), "10.00");
        assert_eq!(labels.last().unwrap(), "24.00");
        for label in &labels {
            let h = slot_hour(label).unwrap();
            assert!((OPEN_HOUR..=LAST_HOUR).contains(&h));
        }
    }
}
