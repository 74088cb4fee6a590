//! # terma-calendar
//!
//! Pure date arithmetic for the July–June academic year and its 28-day
//! reporting blocks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use terma_calendar::{AcademicYear, year_block_starts};
//!
//! let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//!
//! // Academic year containing a date
//! let year = AcademicYear::of(d);
//! assert_eq!(year.start(), NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
//! assert_eq!(year.end(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
//!
//! // The 13 reporting block starts of that year
//! let blocks = year_block_starts(d);
//! assert_eq!(blocks.len(), 13);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Academic-year interval and membership |
//! | `blocks` | Reporting block start sequence |
//!
//! Every operation is infallible: any valid [`chrono::NaiveDate`] maps to
//! exactly one academic year and one block sequence.

mod blocks;
mod year;

pub use blocks::{year_block_starts, BLOCKS_PER_YEAR, BLOCK_DAYS};
pub use year::AcademicYear;
