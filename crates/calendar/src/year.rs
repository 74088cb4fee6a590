//! Academic-year interval and membership.

use chrono::{Datelike, NaiveDate};

/// First month of the academic year (July).
pub(crate) const START_MONTH: u32 = 7;

/// A July–June academic year as a closed `[start, end]` date interval.
///
/// `start` is always July 1 and `end` is always June 30 of the following
/// calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcademicYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl AcademicYear {
    /// Returns the academic year containing `date`.
    ///
    /// Dates in January–June belong to the year that opened the previous
    /// July; dates in July–December open a new year. For any input,
    /// `start() <= date <= end()`.
    pub fn of(date: NaiveDate) -> Self {
        let start_year = if date.month() < START_MONTH {
            date.year() - 1
        } else {
            date.year()
        };
        Self {
            start: NaiveDate::from_ymd_opt(start_year, 7, 1)
                .expect("July 1 exists in every year"),
            end: NaiveDate::from_ymd_opt(start_year + 1, 6, 30)
                .expect("June 30 exists in every year"),
        }
    }

    /// July 1 opening the year.
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// June 30 closing the year.
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Calendar year in which the academic year begins.
    pub fn start_year(self) -> i32 {
        self.start.year()
    }

    /// Whether `date` falls within the closed interval.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn first_half_belongs_to_previous_start_year() {
        let year = AcademicYear::of(ymd(2024, 1, 5));
        assert_eq!(year.start(), ymd(2023, 7, 1));
        assert_eq!(year.end(), ymd(2024, 6, 30));
        assert_eq!(year.start_year(), 2023);
    }

    #[test]
    fn second_half_opens_a_new_year() {
        let year = AcademicYear::of(ymd(2024, 8, 15));
        assert_eq!(year.start(), ymd(2024, 7, 1));
        assert_eq!(year.end(), ymd(2025, 6, 30));
        assert_eq!(year.start_year(), 2024);
    }

    #[test]
    fn july_first_boundary() {
        let year = AcademicYear::of(ymd(2024, 7, 1));
        assert_eq!(year.start(), ymd(2024, 7, 1));
        assert_eq!(year.end(), ymd(2025, 6, 30));
    }

    #[test]
    fn june_thirtieth_boundary() {
        let year = AcademicYear::of(ymd(2024, 6, 30));
        assert_eq!(year.start(), ymd(2023, 7, 1));
        assert_eq!(year.end(), ymd(2024, 6, 30));
    }

    #[test]
    fn contains_its_own_bounds() {
        let year = AcademicYear::of(ymd(2023, 11, 2));
        assert!(year.contains(year.start()));
        assert!(year.contains(year.end()));
        assert!(year.contains(ymd(2023, 11, 2)));
        assert!(!year.contains(ymd(2023, 6, 30)));
        assert!(!year.contains(ymd(2024, 7, 1)));
    }

    #[test]
    fn always_contains_its_reference() {
        for month in 1..=12u32 {
            let d = ymd(2024, month, 15);
            let year = AcademicYear::of(d);
            assert!(year.contains(d), "month {month} not inside its own year");
            assert_eq!(year.start().month(), 7);
            assert_eq!(year.start().day(), 1);
            assert_eq!(year.end().month(), 6);
            assert_eq!(year.end().day(), 30);
        }
    }

    #[test]
    fn negative_year() {
        let year = AcademicYear::of(ymd(-1, 3, 10));
        assert_eq!(year.start(), ymd(-2, 7, 1));
        assert_eq!(year.end(), ymd(-1, 6, 30));
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<AcademicYear>();
    }
}
