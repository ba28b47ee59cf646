//! Calendar months and the grid laid out for them.

mod grid;

pub use grid::{CalendarGrid, DayCell, Week, build_calendar};

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{CampusError, CampusResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single month of a proleptic Gregorian year.
///
/// `month0` is zero-based (0 = January). The first weekday and day count
/// are derived once at construction and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    year: i32,
    month0: u32,
    first_weekday: u32,
    day_count: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month0: u32) -> CampusResult<Self> {
        if month0 > 11 {
            return Err(CampusError::InvalidArgument(format!(
                "month index {} is outside 0-11",
                month0
            )));
        }

        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or_else(|| {
            CampusError::InvalidArgument(format!("year {} is out of range", year))
        })?;

        // Day 0 of the following month, i.e. the last day of this one.
        let day_count = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .ok_or_else(|| {
                CampusError::InvalidArgument(format!("year {} is out of range", year))
            })?;

        Ok(CalendarMonth {
            year,
            month0,
            first_weekday: first.weekday().num_days_from_sunday(),
            day_count,
        })
    }

    /// The month a given date falls in.
    pub fn containing(date: NaiveDate) -> CampusResult<Self> {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (0 = January).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month number (1 = January).
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    /// Weekday of day 1, 0 = Sunday through 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first_weekday
    }

    /// Number of days in the month (28-31).
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    pub fn next(&self) -> CampusResult<Self> {
        if self.month0 == 11 {
            Self::new(self.year + 1, 0)
        } else {
            Self::new(self.year, self.month0 + 1)
        }
    }

    pub fn prev(&self) -> CampusResult<Self> {
        if self.month0 == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month0 - 1)
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
