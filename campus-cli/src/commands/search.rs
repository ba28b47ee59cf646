use std::time::Duration;

use anyhow::Result;
use campus_core::pages::{MapPage, SearchOutcome};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::create_spinner;

/// How long the search button shows its spinner.
const SEARCH_DELAY: Duration = Duration::from_millis(800);

pub async fn run(query: &str) -> Result<()> {
    let mut page = MapPage::new();

    let outcome = page.search(query);
    if outcome == SearchOutcome::Empty {
        println!("{}", outcome.render());
        println!(
            "{} {}",
            "Popular locations:".dimmed(),
            page.suggestions().join(", ")
        );
        return Ok(());
    }

    let spinner = create_spinner("Searching...");
    tokio::time::sleep(SEARCH_DELAY).await;
    spinner.finish_and_clear();

    println!("{}", outcome.render());

    let matches = page.matching_suggestions(query);
    if matches.is_empty() {
        println!("   {}", "No matching campus locations".dimmed());
    } else {
        for location in matches {
            println!("   📍 {}", location);
        }
    }

    Ok(())
}
