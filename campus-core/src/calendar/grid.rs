//! Month grid layout.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::calendar::CalendarMonth;
use crate::constants::{DAYS_PER_WEEK, MAX_WEEKS};
use crate::error::CampusResult;
use crate::event::EventEntry;

/// One grid position: padding, or a day with an optional event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayCell {
    pub day_number: Option<u32>,
    pub is_today: bool,
    pub event: Option<EventEntry>,
}

impl DayCell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.day_number.is_none()
    }
}

/// A Sunday-first row of the grid.
pub type Week = [DayCell; DAYS_PER_WEEK];

#[derive(Debug, Clone)]
pub struct CalendarGrid {
    month: CalendarMonth,
    rows: Vec<Week>,
}

impl CalendarGrid {
    pub fn month(&self) -> &CalendarMonth {
        &self.month
    }

    pub fn rows(&self) -> &[Week] {
        &self.rows
    }

    /// All cells in row-major order, padding included.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Cells that carry a day number.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells().filter(|cell| !cell.is_empty())
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.day_number == Some(day))
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.days().find(|cell| cell.is_today)
    }
}

/// Lay out `month0` of `year` as rows of seven cells, Sunday first.
///
/// Leading cells before the first weekday and trailing cells after the last
/// day are empty. Rows stop as soon as every day has been placed, so there is
/// never a fully empty row. `events` is keyed by day number and `today` only
/// marks a cell when it falls inside the displayed month.
pub fn build_calendar(
    year: i32,
    month0: u32,
    events: &BTreeMap<u32, EventEntry>,
    today: NaiveDate,
) -> CampusResult<CalendarGrid> {
    let month = CalendarMonth::new(year, month0)?;
    let today_in_month = month.contains(today).then(|| today.day());

    let mut day = 1;
    let mut rows = Vec::with_capacity(MAX_WEEKS);

    for week in 0..MAX_WEEKS {
        if day > month.day_count() {
            break;
        }

        let row: Week = std::array::from_fn(|col| {
            let leading = week == 0 && (col as u32) < month.first_weekday();
            if leading || day > month.day_count() {
                return DayCell::empty();
            }

            let cell = DayCell {
                day_number: Some(day),
                is_today: today_in_month == Some(day),
                event: events.get(&day).cloned(),
            };
            day += 1;
            cell
        });

        rows.push(row);
    }

    debug!("Built grid for {} with {} rows", month, rows.len());

    Ok(CalendarGrid { month, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CampusError;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn entry(name: &str) -> EventEntry {
        EventEntry::new(name, "6:00 PM", "#e3f2fd")
    }

    fn campus_events() -> BTreeMap<u32, EventEntry> {
        BTreeMap::from([
            (18, EventEntry::new("Music Festival", "6:00 PM", "#e3f2fd")),
            (19, EventEntry::new("Hackathon", "9:00 AM", "#f3e5f5")),
            (20, EventEntry::new("Art Show", "1:00 PM", "#fff3e0")),
        ])
    }

    fn first_day_column(grid: &CalendarGrid) -> usize {
        grid.rows()[0].iter().position(|cell| !cell.is_empty()).unwrap()
    }

    #[test]
    fn october_2025_example() {
        let grid = build_calendar(2025, 9, &campus_events(), date(2025, 10, 5)).unwrap();

        assert_eq!(grid.month().first_weekday(), 3);
        assert_eq!(grid.month().day_count(), 31);
        assert_eq!(grid.rows().len(), 5);
        assert_eq!(first_day_column(&grid), 3);

        let today = grid.today().unwrap();
        assert_eq!(today.day_number, Some(5));

        assert_eq!(grid.day(18).unwrap().event.as_ref().unwrap().name, "Music Festival");
        assert_eq!(grid.day(19).unwrap().event.as_ref().unwrap().name, "Hackathon");
        assert_eq!(grid.day(20).unwrap().event.as_ref().unwrap().name, "Art Show");
        assert_eq!(grid.days().filter(|c| c.event.is_some()).count(), 3);
    }

    #[test]
    fn every_month_places_each_day_once() {
        let events = BTreeMap::new();
        let today = date(2025, 10, 5);

        for year in [1900, 1999, 2000, 2023, 2024, 2025, 2026, 2100] {
            for month0 in 0..12 {
                let grid = build_calendar(year, month0, &events, today).unwrap();
                let month = grid.month();

                let numbers: Vec<u32> = grid.days().filter_map(|c| c.day_number).collect();
                let expected: Vec<u32> = (1..=month.day_count()).collect();
                assert_eq!(numbers, expected, "{}", month);

                assert_eq!(first_day_column(&grid) as u32, month.first_weekday(), "{}", month);
                assert!(grid.rows().len() >= 4 && grid.rows().len() <= MAX_WEEKS);

                let last_row = grid.rows().last().unwrap();
                assert!(last_row.iter().any(|cell| !cell.is_empty()), "{}", month);
            }
        }
    }

    #[test]
    fn leap_february() {
        let events = BTreeMap::new();
        let today = date(2025, 1, 1);
        assert_eq!(build_calendar(2024, 1, &events, today).unwrap().days().count(), 29);
        assert_eq!(build_calendar(2023, 1, &events, today).unwrap().days().count(), 28);
    }

    #[test]
    fn sunday_start_has_no_leading_padding() {
        // June 1, 2025 is a Sunday.
        let grid = build_calendar(2025, 5, &BTreeMap::new(), date(2025, 6, 1)).unwrap();
        assert_eq!(grid.rows()[0][0].day_number, Some(1));
    }

    #[test]
    fn full_last_week_adds_no_trailing_row() {
        // February 2026 starts on Sunday and has exactly four weeks.
        let grid = build_calendar(2026, 1, &BTreeMap::new(), date(2026, 2, 1)).unwrap();
        assert_eq!(grid.rows().len(), 4);
        assert_eq!(grid.rows()[3][6].day_number, Some(28));
    }

    #[test]
    fn six_row_month() {
        // August 2026 starts on Saturday with 31 days.
        let grid = build_calendar(2026, 7, &BTreeMap::new(), date(2026, 8, 1)).unwrap();
        assert_eq!(grid.rows().len(), 6);
        assert_eq!(grid.rows()[5][1].day_number, Some(31));
        assert!(grid.rows()[5][2].is_empty());
    }

    #[test]
    fn today_outside_month_marks_nothing() {
        let grid = build_calendar(2025, 9, &BTreeMap::new(), date(2025, 11, 5)).unwrap();
        assert_eq!(grid.cells().filter(|c| c.is_today).count(), 0);

        let grid = build_calendar(2025, 9, &BTreeMap::new(), date(2024, 10, 5)).unwrap();
        assert_eq!(grid.cells().filter(|c| c.is_today).count(), 0);
    }

    #[test]
    fn today_inside_month_marks_exactly_one() {
        let grid = build_calendar(2025, 9, &BTreeMap::new(), date(2025, 10, 31)).unwrap();
        let marked: Vec<_> = grid.cells().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].day_number, Some(31));
    }

    #[test]
    fn event_only_on_its_day() {
        let events = BTreeMap::from([(18, entry("Music Festival"))]);
        let grid = build_calendar(2025, 9, &events, date(2025, 10, 5)).unwrap();

        for cell in grid.cells() {
            if cell.day_number == Some(18) {
                assert_eq!(cell.event, Some(entry("Music Festival")));
            } else {
                assert!(cell.event.is_none());
            }
        }
    }

    #[test]
    fn events_past_day_count_are_ignored() {
        let events = BTreeMap::from([(30, entry("Late Show"))]);
        let grid = build_calendar(2026, 1, &events, date(2026, 2, 1)).unwrap();
        assert!(grid.cells().all(|c| c.event.is_none()));
    }

    #[test]
    fn invalid_month_index() {
        let err = build_calendar(2025, 12, &BTreeMap::new(), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, CampusError::InvalidArgument(_)));
    }
}
