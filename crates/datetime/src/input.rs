//! Input classification and normalization.

use chrono::NaiveTime;

use crate::date::CalendarDate;
use crate::error::ParseError;
use crate::parse::{parse_date, parse_date_time};

/// A caller-supplied date: either an already-normalized value or raw
/// text in one of the front-end shapes.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    /// An already-normalized value, passed through unchanged.
    Value(CalendarDate),
    /// Raw text, classified by [`TextShape`].
    Text(&'a str),
}

impl From<CalendarDate> for DateInput<'static> {
    fn from(date: CalendarDate) -> Self {
        Self::Value(date)
    }
}

impl From<chrono::NaiveDateTime> for DateInput<'static> {
    fn from(datetime: chrono::NaiveDateTime) -> Self {
        Self::Value(CalendarDate::from(datetime))
    }
}

impl From<chrono::NaiveDate> for DateInput<'static> {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::Value(CalendarDate::from(date))
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// The two textual shapes accepted by [`get_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextShape {
    /// `YYYY-MM-DD`.
    PlainDate,
    /// `YYYY-MM-DD HH:MM`.
    LocalDateTime,
}

impl TextShape {
    /// Classifies raw text by the presence of the date/time separator.
    pub fn classify(text: &str) -> Self {
        if text.contains(' ') {
            Self::LocalDateTime
        } else {
            Self::PlainDate
        }
    }
}

/// Normalizes any accepted input into a [`CalendarDate`].
///
/// Native values pass through unchanged. Text is routed through
/// [`TextShape::classify`]: a plain date becomes local midnight, a local
/// date-time keeps its hour and minute.
///
/// # Errors
///
/// Propagates the underlying parser's [`ParseError`].
pub fn get_date<'a>(input: impl Into<DateInput<'a>>) -> Result<CalendarDate, ParseError> {
    match input.into() {
        DateInput::Value(date) => Ok(date),
        DateInput::Text(text) => match TextShape::classify(text) {
            TextShape::PlainDate => {
                Ok(CalendarDate::local(parse_date(text)?.and_time(NaiveTime::MIN)))
            }
            TextShape::LocalDateTime => Ok(CalendarDate::local(parse_date_time(text)?)),
        },
    }
}

/// Normalizes input and zeroes the time of day to midnight.
///
/// # Errors
///
/// Propagates the underlying parser's [`ParseError`]; a failed parse can
/// never hand back a partially-built day.
pub fn get_day<'a>(input: impl Into<DateInput<'a>>) -> Result<CalendarDate, ParseError> {
    Ok(get_date(input)?.at_midnight())
}
