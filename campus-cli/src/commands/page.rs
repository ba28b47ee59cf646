use anyhow::{Result, bail};
use campus_core::pages::{HomePage, MapPage, Page};
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(path: &str, toggle_carousel: bool, suggestion: Option<usize>) -> Result<()> {
    let Some(page) = Page::from_path(path) else {
        println!("{}", format!("No page controller for '{}'", path).dimmed());
        return Ok(());
    };

    println!("{} → {}", path, page.title().bold());

    match page {
        Page::Map => {
            let mut map = MapPage::new();
            println!("   {} {}", "Suggestions:".dimmed(), map.suggestions().join(", "));

            if let Some(n) = suggestion {
                let Some(outcome) = n.checked_sub(1).and_then(|i| map.choose_suggestion(i)) else {
                    bail!(
                        "No suggestion {}. Pick 1-{}",
                        n,
                        map.suggestions().len()
                    );
                };
                println!("   {}", outcome.render());
            } else {
                println!("   {}", "campus search <query>".dimmed());
            }
        }
        Page::Community => println!("   {}", "campus post <text>".dimmed()),
        Page::Events => {
            println!("   {}", "campus calendar | campus events | campus weather".dimmed())
        }
        Page::Home => {
            let mut home = HomePage::new(Local::now());
            println!("   {}", home.last_updated().dimmed());

            if toggle_carousel {
                home.carousel_mut().toggle();
            }
            println!("   Carousel: {}", home.carousel().control_label());
        }
    }

    Ok(())
}
