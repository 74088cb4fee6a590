use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use terma_calendar::{year_block_starts, AcademicYear, BLOCKS_PER_YEAR, BLOCK_DAYS};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn sequence_invariants_hold_across_decades() {
    for start_year in 1990..=2040 {
        let reference = ymd(start_year, 7, 1);
        let blocks = year_block_starts(reference);

        assert_eq!(blocks.len(), BLOCKS_PER_YEAR, "year {start_year}");
        assert_eq!(blocks[0], ymd(start_year, 7, 1));
        assert_eq!(
            blocks[1].weekday(),
            Weekday::Mon,
            "year {start_year}: block 1 is {}",
            blocks[1]
        );
        for i in 2..BLOCKS_PER_YEAR {
            assert_eq!(blocks[i] - blocks[i - 1], TimeDelta::days(BLOCK_DAYS));
        }
    }
}

#[test]
fn blocks_start_inside_their_academic_year() {
    for start_year in [2022, 2023, 2024, 2029] {
        let reference = ymd(start_year, 11, 11);
        let year = AcademicYear::of(reference);
        for (i, start) in year_block_starts(reference).iter().enumerate() {
            assert!(
                year.contains(*start),
                "year {start_year}: block {i} starts {start}, outside {}..{}",
                year.start(),
                year.end()
            );
        }
    }
}

#[test]
fn first_gap_absorbs_the_alignment_slack() {
    // The gap between block 0 and block 1 is 23..=29 days depending on
    // the weekday of July 29; all later gaps are exactly 28.
    for start_year in 1990..=2040 {
        let blocks = year_block_starts(ymd(start_year, 7, 1));
        let first_gap = (blocks[1] - blocks[0]).num_days();
        assert!(
            (BLOCK_DAYS - 5..=BLOCK_DAYS + 1).contains(&first_gap),
            "year {start_year}: first gap {first_gap} days"
        );
    }
}

#[test]
fn reference_dates_agree_on_the_sequence() {
    // Any reference inside the same academic year produces the same
    // sequence of starts.
    let expected = year_block_starts(ymd(2023, 7, 1));
    for reference in [
        ymd(2023, 7, 2),
        ymd(2023, 12, 31),
        ymd(2024, 1, 1),
        ymd(2024, 6, 30),
    ] {
        assert_eq!(year_block_starts(reference), expected, "{reference}");
    }
}
