//! Events page: month calendar, navigation, category filter and detail view.

use std::fmt;

use chrono::NaiveDate;

use crate::calendar::{CalendarGrid, CalendarMonth, build_calendar};
use crate::error::CampusResult;
use crate::event::{EventCatalog, EventCategory, EventEntry};

const TBA: &str = "TBA";
const NO_DESCRIPTION: &str = "More details coming soon!";

/// Everything the event detail view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDialog {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub duration: String,
    pub description: String,
}

impl fmt::Display for EventDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Date: {}", self.date.format("%B %-d, %Y"))?;
        writeln!(f, "Time: {}", self.time)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Duration: {}", self.duration)?;
        writeln!(f)?;
        write!(f, "{}", self.description)
    }
}

#[derive(Debug)]
pub struct EventsPage {
    month: CalendarMonth,
    today: NaiveDate,
    catalog: EventCatalog,
    filter: EventCategory,
}

impl EventsPage {
    /// Start on the month containing `today`.
    pub fn new(today: NaiveDate, catalog: EventCatalog) -> CampusResult<Self> {
        Ok(EventsPage {
            month: CalendarMonth::containing(today)?,
            today,
            catalog,
            filter: EventCategory::All,
        })
    }

    pub fn month(&self) -> &CalendarMonth {
        &self.month
    }

    pub fn grid(&self) -> CampusResult<CalendarGrid> {
        build_calendar(
            self.month.year(),
            self.month.month0(),
            self.catalog.by_day(),
            self.today,
        )
    }

    pub fn show_month(&mut self, month: CalendarMonth) {
        self.month = month;
    }

    pub fn previous_month(&mut self) -> CampusResult<&CalendarMonth> {
        self.month = self.month.prev()?;
        Ok(&self.month)
    }

    pub fn next_month(&mut self) -> CampusResult<&CalendarMonth> {
        self.month = self.month.next()?;
        Ok(&self.month)
    }

    pub fn go_to_today(&mut self) -> CampusResult<&CalendarMonth> {
        self.month = CalendarMonth::containing(self.today)?;
        Ok(&self.month)
    }

    pub fn set_filter(&mut self, category: EventCategory) {
        self.filter = category;
    }

    pub fn filter(&self) -> EventCategory {
        self.filter
    }

    /// Events in the displayed month that pass the active filter.
    pub fn visible_events(&self) -> Vec<(NaiveDate, &EventEntry)> {
        self.catalog
            .filter(self.filter)
            .into_iter()
            .filter_map(|(day, entry)| self.month.date(day).map(|date| (date, entry)))
            .collect()
    }

    /// Detail view for an event in the displayed month.
    pub fn event_details(&self, name: &str) -> Option<EventDialog> {
        let (day, entry) = self.catalog.find(name)?;
        let date = self.month.date(day)?;
        let details = self.catalog.details_for(&entry.name).cloned().unwrap_or_default();

        Some(EventDialog {
            name: entry.name.clone(),
            date,
            time: entry.time.clone(),
            location: details.location.unwrap_or_else(|| TBA.to_string()),
            duration: details.duration.unwrap_or_else(|| TBA.to_string()),
            description: details.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn october_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
    }

    fn page() -> EventsPage {
        EventsPage::new(october_5(), EventCatalog::campus_default()).unwrap()
    }

    #[test]
    fn opens_on_current_month() {
        let page = page();
        assert_eq!(page.month().to_string(), "October 2025");
        let grid = page.grid().unwrap();
        assert_eq!(grid.today().unwrap().day_number, Some(5));
        assert_eq!(grid.rows().len(), 5);
    }

    #[test]
    fn navigation_moves_months_and_returns_to_today() {
        let mut page = page();
        page.next_month().unwrap();
        page.next_month().unwrap();
        page.next_month().unwrap();
        assert_eq!(page.month().to_string(), "January 2026");
        assert!(page.grid().unwrap().today().is_none());

        page.previous_month().unwrap();
        assert_eq!(page.month().to_string(), "December 2025");

        page.go_to_today().unwrap();
        assert_eq!(page.month().to_string(), "October 2025");
    }

    #[test]
    fn filter_limits_visible_events() {
        let mut page = page();
        assert_eq!(page.visible_events().len(), 3);

        page.set_filter(EventCategory::Tech);
        let visible = page.visible_events();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, NaiveDate::from_ymd_opt(2025, 10, 19).unwrap());
        assert_eq!(visible[0].1.name, "Hackathon");
    }

    #[test]
    fn details_for_known_event() {
        let dialog = page().event_details("music festival").unwrap();
        assert_eq!(dialog.name, "Music Festival");
        assert_eq!(dialog.location, "Main Quad");
        assert_eq!(
            dialog.to_string().lines().nth(1),
            Some("Date: October 18, 2025")
        );
    }

    #[test]
    fn details_fall_back_to_tba() {
        let catalog = EventCatalog::new(
            BTreeMap::from([(2, EventEntry::new("Open Mic", "8:00 PM", "#ffffff"))]),
            HashMap::new(),
        );
        let page = EventsPage::new(october_5(), catalog).unwrap();
        let dialog = page.event_details("Open Mic").unwrap();
        assert_eq!(dialog.location, "TBA");
        assert_eq!(dialog.duration, "TBA");
        assert_eq!(dialog.description, "More details coming soon!");
        assert!(page.event_details("Bake Sale").is_none());
    }

    #[test]
    fn events_past_month_end_are_hidden() {
        let catalog = EventCatalog::new(
            BTreeMap::from([(30, EventEntry::new("Gala", "7:00 PM", "#ffffff"))]),
            HashMap::new(),
        );
        let mut page = EventsPage::new(october_5(), catalog).unwrap();
        page.show_month(CalendarMonth::new(2026, 1).unwrap());
        assert!(page.visible_events().is_empty());
        assert!(page.event_details("Gala").is_none());
    }
}
