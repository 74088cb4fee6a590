//! Reporting block start sequence.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::year::AcademicYear;

/// Number of reporting blocks covering one academic year.
pub const BLOCKS_PER_YEAR: usize = 13;

/// Nominal block length in days.
pub const BLOCK_DAYS: i64 = 28;

/// Returns the start dates of the 13 reporting blocks of the academic
/// year containing `reference`.
///
/// Block 0 always starts on July 1. Block 1 is block 0 plus 28 days,
/// moved to the Monday of its Sunday-based week, so block 0 absorbs the
/// alignment slack. Blocks 2..=12 each follow exactly 28 days after the
/// previous one and are never re-derived from block 0.
pub fn year_block_starts(reference: NaiveDate) -> Vec<NaiveDate> {
    let year = AcademicYear::of(reference);
    let mut blocks = Vec::with_capacity(BLOCKS_PER_YEAR);
    blocks.push(year.start());

    // Monday alignment: a Sunday working date moves forward one day,
    // every other weekday rolls back to its week's Monday.
    let mut d = year.start() + TimeDelta::days(BLOCK_DAYS);
    let from_sunday = i64::from(d.weekday().num_days_from_sunday());
    d = d - TimeDelta::days(from_sunday - 1);
    blocks.push(d);

    for _ in 2..BLOCKS_PER_YEAR {
        d = d + TimeDelta::days(BLOCK_DAYS);
        blocks.push(d);
    }

    blocks
}
