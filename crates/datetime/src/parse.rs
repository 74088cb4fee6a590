//! Parsers for the three textual date shapes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::date::CalendarDate;
use crate::error::ParseError;

/// Splits `segment` on `separator` into exactly `N` numeric components.
fn numeric_fields<const N: usize>(segment: &str, separator: char) -> Option<[u32; N]> {
    let mut fields = [0u32; N];
    let mut parts = segment.split(separator);
    for field in &mut fields {
        *field = parts.next()?.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(fields)
}

/// Parses a plain `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDate`] if the string does not split
/// into three numeric components, and [`ParseError::OutOfRange`] if the
/// components do not name a real calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    let [year, month, day] = numeric_fields(input, '-').ok_or_else(|| {
        warn!(input, "date does not split into three numeric components");
        ParseError::MalformedDate {
            input: input.to_string(),
        }
    })?;
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        warn!(input, "date components are out of range");
        ParseError::OutOfRange {
            input: input.to_string(),
        }
    })
}

/// Parses a local `YYYY-MM-DD HH:MM` date-time.
///
/// The string splits on its first space into a date segment and a
/// 24-hour `HH:MM` time segment; seconds are zero.
///
/// # Errors
///
/// Returns [`ParseError::MalformedTime`] when the space or time segment
/// is missing, plus every failure [`parse_date`] can produce.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, ParseError> {
    let (date_segment, time_segment) = input.split_once(' ').ok_or_else(|| {
        warn!(input, "local date-time has no space separator");
        ParseError::MalformedTime {
            input: input.to_string(),
            expected: "YYYY-MM-DD HH:MM",
        }
    })?;
    let date = parse_date(date_segment)?;
    let [hour, minute] = numeric_fields(time_segment, ':').ok_or_else(|| {
        warn!(input, "time does not split into two numeric components");
        ParseError::MalformedTime {
            input: time_segment.to_string(),
            expected: "HH:MM",
        }
    })?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        warn!(input, "time components are out of range");
        ParseError::OutOfRange {
            input: input.to_string(),
        }
    })?;
    Ok(NaiveDateTime::new(date, time))
}

/// Parses a backend `YYYY-MM-DDTHH:MM:SS+offset` timestamp.
///
/// Only the substring before the first `+` is consumed; its fields are
/// read as UTC and the offset segment is discarded. The backend emits
/// timestamps whose pre-`+` fields already denote the intended UTC
/// instant.
///
/// # Errors
///
/// Returns [`ParseError::MissingOffset`] when no `+` is present,
/// [`ParseError::MalformedDate`] when the `T` separator or date fields
/// are missing, and the usual time-segment failures.
pub fn parse_backend_date(input: &str) -> Result<CalendarDate, ParseError> {
    let (stamp, _offset) = input.split_once('+').ok_or_else(|| {
        warn!(input, "backend timestamp has no offset suffix");
        ParseError::MissingOffset {
            input: input.to_string(),
        }
    })?;
    let (date_segment, time_segment) = stamp.split_once('T').ok_or_else(|| {
        warn!(input, "backend timestamp has no T separator");
        ParseError::MalformedDate {
            input: stamp.to_string(),
        }
    })?;
    let date = parse_date(date_segment)?;
    let [hour, minute, second] = numeric_fields(time_segment, ':').ok_or_else(|| {
        warn!(input, "time does not split into three numeric components");
        ParseError::MalformedTime {
            input: time_segment.to_string(),
            expected: "HH:MM:SS",
        }
    })?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        warn!(input, "time components are out of range");
        ParseError::OutOfRange {
            input: input.to_string(),
        }
    })?;
    Ok(CalendarDate::utc(NaiveDateTime::new(date, time).and_utc()))
}
