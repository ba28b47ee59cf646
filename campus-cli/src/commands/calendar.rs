use anyhow::Result;
use campus_core::calendar::CalendarMonth;
use campus_core::event::EventCatalog;
use campus_core::pages::EventsPage;
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(catalog: EventCatalog, year: Option<i32>, month: Option<u32>, offset: i32) -> Result<()> {
    let today = Local::now().date_naive();
    let mut page = EventsPage::new(today, catalog)?;

    if year.is_some() || month.is_some() {
        let month0 = month.map(|m| m - 1).unwrap_or(today.month0());
        page.show_month(CalendarMonth::new(year.unwrap_or(today.year()), month0)?);
    }

    for _ in 0..offset.unsigned_abs() {
        if offset > 0 {
            page.next_month()?;
        } else {
            page.previous_month()?;
        }
    }

    let grid = page.grid()?;
    println!("{}", grid.render());

    let events = page.visible_events();
    if events.is_empty() {
        return Ok(());
    }

    println!();
    for (date, entry) in events {
        println!("  {} {}", date.format("%a %b %-d").bold(), entry.render());
    }
    println!();
    println!("{}", "Run `campus event <name>` to see details".dimmed());

    Ok(())
}
