//! Core types for the campus life app.
//!
//! This crate holds everything that isn't terminal rendering:
//! - `calendar` builds month grids with per-day event annotations
//! - `event` holds the injected event catalog and category filters
//! - `weather` talks to the Open-Meteo forecast API
//! - `pages` has one controller per site page, each owning its own state

pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod pages;
pub mod weather;

pub use calendar::{CalendarGrid, CalendarMonth, DayCell, build_calendar};
pub use error::{CampusError, CampusResult};
pub use event::{EventCatalog, EventCategory, EventDetails, EventEntry};
