//! Codec for the schedule's compact date/time encoding.
//!
//! Dates arrive as `YYYYMMDD` optionally followed by `HHMM` (hour and minute
//! are both present or both absent). A field may also encode a range as
//! `<start>-<end>`, with each side in the compact format.

use crate::utils::error::FormatError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Raw components recovered from a compact date/time string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

/// Calendar values derived from one compact string.
///
/// `date` is the calendar date at midnight; `time` is set only when the
/// source encoded a time of day; `date_time` combines the two, falling back
/// to midnight when no time was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateParts {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub date_time: NaiveDateTime,
}

/// Parse a compact date/time string into its components
///
/// # Errors
/// * `FormatError::BadCompactDate` - not 8 or 12 ASCII digits
pub fn parse_compact_date_time(s: &str) -> Result<CompactDateTime, FormatError> {
    if !matches!(s.len(), 8 | 12) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::BadCompactDate(s.to_string()));
    }

    // All-digit input, so these slices always parse
    let year: i32 = s[0..4].parse().unwrap_or_default();
    let month: u32 = s[4..6].parse().unwrap_or_default();
    let day: u32 = s[6..8].parse().unwrap_or_default();

    let (hour, minute) = if s.len() == 12 {
        (
            Some(s[8..10].parse().unwrap_or_default()),
            Some(s[10..12].parse().unwrap_or_default()),
        )
    } else {
        (None, None)
    };

    Ok(CompactDateTime {
        year,
        month,
        day,
        hour,
        minute,
    })
}

/// Parse a compact string into derived calendar values
///
/// # Errors
/// * `FormatError::BadCompactDate` - string shape mismatch
/// * `FormatError::OutOfRange` - components do not form a valid date or time
pub fn parse_date_parts(s: &str) -> Result<DateParts, FormatError> {
    let parsed = parse_compact_date_time(s)?;

    let date = NaiveDate::from_ymd_opt(parsed.year, parsed.month, parsed.day)
        .ok_or_else(|| FormatError::OutOfRange(s.to_string()))?;

    let time = match (parsed.hour, parsed.minute) {
        (Some(hour), Some(minute)) => Some(
            NaiveTime::from_hms_opt(hour, minute, 0)
                .ok_or_else(|| FormatError::OutOfRange(s.to_string()))?,
        ),
        _ => None,
    };

    Ok(DateParts {
        date,
        time,
        date_time: date.and_time(time.unwrap_or(NaiveTime::MIN)),
    })
}

/// Parse a possibly-ranged compact string.
///
/// Splits on the first `-` and parses each side independently; the end value
/// exists only if a second segment exists.
pub fn parse_date_range(s: &str) -> Result<(DateParts, Option<DateParts>), FormatError> {
    match s.split_once('-') {
        Some((start, end)) => Ok((parse_date_parts(start)?, Some(parse_date_parts(end)?))),
        None => Ok((parse_date_parts(s)?, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let parsed = parse_compact_date_time("20240601").unwrap();
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.month, 6);
        assert_eq!(parsed.day, 1);
        assert_eq!(parsed.hour, None);
        assert_eq!(parsed.minute, None);
    }

    #[test]
    fn test_parse_date_and_time() {
        let parsed = parse_compact_date_time("202406010930").unwrap();
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.month, 6);
        assert_eq!(parsed.day, 1);
        assert_eq!(parsed.hour, Some(9));
        assert_eq!(parsed.minute, Some(30));
    }

    #[test]
    fn test_parse_rejects_partial_time() {
        // Hour without minute is not a valid encoding
        assert!(matches!(
            parse_compact_date_time("2024060109"),
            Err(FormatError::BadCompactDate(_))
        ));
        assert!(matches!(
            parse_compact_date_time("202406"),
            Err(FormatError::BadCompactDate(_))
        ));
        assert!(matches!(
            parse_compact_date_time("2024o6o1"),
            Err(FormatError::BadCompactDate(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            parse_date_parts("20241301"),
            Err(FormatError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_date_parts("202406012500"),
            Err(FormatError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_date_parts_midnight_fallback() {
        let parts = parse_date_parts("20240601").unwrap();
        assert_eq!(parts.time, None);
        assert_eq!(
            parts.date_time,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn test_date_parts_combined() {
        let parts = parse_date_parts("202406010930").unwrap();
        assert_eq!(parts.time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(
            parts.date_time,
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_range() {
        let (start, end) = parse_date_range("202406010900-202406011000").unwrap();
        let end = end.unwrap();
        assert_eq!(start.time, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(end.time, NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(start.date, end.date);
    }

    #[test]
    fn test_parse_range_without_end() {
        let (start, end) = parse_date_range("20240601").unwrap();
        assert_eq!(end, None);
        assert_eq!(start.time, None);
    }
}
