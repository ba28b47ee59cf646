use anyhow::{Result, bail};
use campus_core::event::EventCatalog;
use campus_core::pages::EventsPage;
use chrono::Local;

use crate::render::Render;

pub fn run(catalog: EventCatalog, name: &str) -> Result<()> {
    let page = EventsPage::new(Local::now().date_naive(), catalog)?;

    let Some(dialog) = page.event_details(name) else {
        let available: Vec<_> = page
            .visible_events()
            .into_iter()
            .map(|(_, entry)| entry.name.clone())
            .collect();
        bail!(
            "Event '{}' not found this month. Available: {}",
            name,
            available.join(", ")
        );
    };

    println!("{}", dialog.render());

    Ok(())
}
