//! Error types for the terma-datetime crate.

/// Error type for all fallible parsing operations in terma-datetime.
///
/// Malformed input is reported through these variants rather than a
/// panic; callers decide whether a failed parse is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Returned when a date segment does not split into exactly three
    /// numeric `-`-separated components.
    #[error("malformed date {input:?} (expected YYYY-MM-DD)")]
    MalformedDate {
        /// The date segment that could not be split.
        input: String,
    },

    /// Returned when a time segment does not split into the expected
    /// numeric `:`-separated components.
    #[error("malformed time {input:?} (expected {expected})")]
    MalformedTime {
        /// The time segment that could not be split.
        input: String,
        /// The shape the segment was expected to have.
        expected: &'static str,
    },

    /// Returned when the numeric components do not name a real calendar
    /// date or time of day.
    #[error("no such date or time: {input:?}")]
    OutOfRange {
        /// The input whose components were out of range.
        input: String,
    },

    /// Returned when a backend timestamp carries no `+` offset suffix to
    /// delimit the UTC fields.
    #[error("backend timestamp {input:?} has no offset suffix")]
    MissingOffset {
        /// The timestamp that was missing its offset.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_date() {
        let err = ParseError::MalformedDate {
            input: "not-a-date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed date \"not-a-date\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn display_malformed_time() {
        let err = ParseError::MalformedTime {
            input: "14".to_string(),
            expected: "HH:MM",
        };
        assert_eq!(err.to_string(), "malformed time \"14\" (expected HH:MM)");
    }

    #[test]
    fn display_out_of_range() {
        let err = ParseError::OutOfRange {
            input: "2024-13-01".to_string(),
        };
        assert_eq!(err.to_string(), "no such date or time: \"2024-13-01\"");
    }

    #[test]
    fn display_missing_offset() {
        let err = ParseError::MissingOffset {
            input: "2024-01-05T14:30:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "backend timestamp \"2024-01-05T14:30:00\" has no offset suffix"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ParseError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let a = ParseError::MalformedDate {
            input: "x".to_string(),
        };
        assert_eq!(a.clone(), a);
    }
}
