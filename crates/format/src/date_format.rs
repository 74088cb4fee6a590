//! Date display formatting in fixed `en-US` conventions.

use tracing::warn;

use terma_datetime::{get_date, DateInput};

/// Placeholder rendered when input cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Rendering style for [`DateFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Jan 5, 2024`
    #[default]
    Long,
    /// `1/5/24`
    Short,
    /// `Jan 5, 2024, 2:30 PM`
    LongWithTime,
}

/// An immutable, reusable date formatter bound to `en-US` conventions.
///
/// Accepts a native [`terma_datetime::CalendarDate`] or any parseable
/// front-end string; UTC-tagged values render in local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatter {
    style: DateStyle,
}

impl DateFormatter {
    /// Builds a formatter for the given style.
    pub fn new(style: DateStyle) -> Self {
        Self { style }
    }

    /// Renders the input, or [`INVALID_DATE`] when it cannot be parsed.
    ///
    /// Failures are logged and absorbed; this never panics.
    pub fn format<'a>(&self, input: impl Into<DateInput<'a>>) -> String {
        let date = match get_date(input) {
            Ok(date) => date,
            Err(e) => {
                warn!(error = %e, "cannot format unparseable date");
                return INVALID_DATE.to_string();
            }
        };
        let local = date.local_naive();
        match self.style {
            DateStyle::Long => local.format("%b %-d, %Y").to_string(),
            DateStyle::Short => local.format("%-m/%-d/%y").to_string(),
            DateStyle::LongWithTime => local.format("%b %-d, %Y, %-I:%M %p").to_string(),
        }
    }
}

/// Renders `Jan 5, 2024` style dates.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> String {
    DateFormatter::new(DateStyle::Long).format(input)
}

/// Renders `1/5/24` style dates.
pub fn format_short_date<'a>(input: impl Into<DateInput<'a>>) -> String {
    DateFormatter::new(DateStyle::Short).format(input)
}

/// Renders `Jan 5, 2024, 2:30 PM` style date-times.
pub fn format_date_time<'a>(input: impl Into<DateInput<'a>>) -> String {
    DateFormatter::new(DateStyle::LongWithTime).format(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_style() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
    }

    #[test]
    fn short_style() {
        assert_eq!(format_short_date("2024-01-05"), "1/5/24");
        assert_eq!(format_short_date("1999-11-30"), "11/30/99");
    }

    #[test]
    fn long_with_time_style() {
        assert_eq!(format_date_time("2024-01-05 14:30"), "Jan 5, 2024, 2:30 PM");
        assert_eq!(format_date_time("2024-01-05 00:05"), "Jan 5, 2024, 12:05 AM");
    }

    #[test]
    fn plain_date_renders_midnight_when_time_requested() {
        assert_eq!(format_date_time("2024-01-05"), "Jan 5, 2024, 12:00 AM");
    }

    #[test]
    fn unparseable_input_is_absorbed() {
        assert_eq!(format_date("not-a-date"), INVALID_DATE);
        assert_eq!(format_short_date("2024-13-01"), INVALID_DATE);
        assert_eq!(format_date_time("2024-01-05 2pm"), INVALID_DATE);
    }

    #[test]
    fn formatter_is_reusable() {
        let formatter = DateFormatter::new(DateStyle::Long);
        assert_eq!(formatter.format("2024-01-05"), "Jan 5, 2024");
        assert_eq!(formatter.format("2024-02-29"), "Feb 29, 2024");
    }
}
