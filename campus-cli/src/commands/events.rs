use anyhow::Result;
use campus_core::event::{EventCatalog, EventCategory};
use campus_core::pages::EventsPage;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render::{Render, render_filter_bar};

pub fn run(catalog: EventCatalog, filter: EventCategory) -> Result<()> {
    let mut page = EventsPage::new(Local::now().date_naive(), catalog)?;
    page.set_filter(filter);

    println!("{}", render_filter_bar(page.filter()));
    println!();

    let events = page.visible_events();
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (date, entry) in events {
        println!("{}", date.format("%a %b %-d").bold());
        println!("  {}", entry.render());
    }

    Ok(())
}
