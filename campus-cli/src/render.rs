//! Terminal rendering for campus-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use campus_core::calendar::{CalendarGrid, DayCell};
use campus_core::event::{EventCategory, EventEntry};
use campus_core::pages::{CharacterCounter, EventDialog, Post, SearchOutcome};
use campus_core::weather::WeatherReport;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Width of one calendar column, including the separating space.
const CELL_WIDTH: usize = 4;

/// Parse "#rrggbb" into its components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

impl Render for DayCell {
    fn render(&self) -> String {
        let Some(day) = self.day_number else {
            return " ".repeat(CELL_WIDTH);
        };

        let label = format!("{:>3}", day);

        let label = if self.is_today {
            label.bold().reversed().to_string()
        } else if let Some(event) = &self.event {
            match parse_hex_color(&event.color_hint) {
                Some((r, g, b)) => label.black().on_truecolor(r, g, b).to_string(),
                None => label.cyan().to_string(),
            }
        } else {
            label
        };

        format!("{} ", label)
    }
}

impl Render for CalendarGrid {
    fn render(&self) -> String {
        let width = CELL_WIDTH * WEEKDAY_HEADER.len();
        let title = self.month().to_string();

        let mut lines = Vec::new();
        lines.push(format!("{:^width$}", title.bold(), width = width));
        lines.push(
            WEEKDAY_HEADER
                .iter()
                .map(|d| format!("{:>3} ", d))
                .collect::<String>()
                .dimmed()
                .to_string(),
        );

        for row in self.rows() {
            lines.push(row.iter().map(|cell| cell.render()).collect());
        }

        lines.join("\n")
    }
}

impl Render for EventEntry {
    fn render(&self) -> String {
        let swatch = match parse_hex_color(&self.color_hint) {
            Some((r, g, b)) => "■".truecolor(r, g, b).to_string(),
            None => "■".to_string(),
        };
        format!("{} {} {}", swatch, self.name, self.time.dimmed())
    }
}

impl Render for EventDialog {
    fn render(&self) -> String {
        let mut lines = vec![format!("📅 {}", self.name.bold())];
        lines.push(format!("   {} {}", "Date:".dimmed(), self.date.format("%B %-d, %Y")));
        lines.push(format!("   {} {}", "Time:".dimmed(), self.time));
        lines.push(format!("   {} {}", "Location:".dimmed(), self.location));
        lines.push(format!("   {} {}", "Duration:".dimmed(), self.duration));
        lines.push(String::new());
        lines.push(format!("   {}", self.description));
        lines.join("\n")
    }
}

impl Render for WeatherReport {
    fn render(&self) -> String {
        match self {
            WeatherReport::Conditions { .. } => format!(
                "{} {}\n   {}",
                "📅 Event Planning Weather:".bold(),
                self,
                self.hint().dimmed()
            ),
            WeatherReport::Unavailable => format!(
                "{} {}\n   {}",
                "Weather:".bold(),
                self.yellow(),
                self.hint().dimmed()
            ),
        }
    }
}

impl Render for CharacterCounter {
    fn render(&self) -> String {
        if self.is_warning() {
            self.to_string().red().to_string()
        } else {
            self.to_string().dimmed().to_string()
        }
    }
}

impl Render for Post {
    fn render(&self) -> String {
        format!(
            "{}  {}\n   {}\n   {}",
            self.title.bold(),
            self.posted.dimmed(),
            self.body,
            format!("Posted by {}", self.author).dimmed()
        )
    }
}

impl Render for SearchOutcome {
    fn render(&self) -> String {
        match self {
            SearchOutcome::Empty => self.message().yellow().to_string(),
            SearchOutcome::Searching(_) => self.message(),
        }
    }
}

/// The filter buttons, with the active one highlighted.
pub fn render_filter_bar(active: EventCategory) -> String {
    EventCategory::ALL
        .iter()
        .map(|category| {
            let label = format!("[{}]", category.label());
            if *category == active {
                label.green().bold().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::calendar::build_calendar;
    use campus_core::event::EventCatalog;
    use chrono::NaiveDate;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#e3f2fd"), Some((0xe3, 0xf2, 0xfd)));
        assert_eq!(parse_hex_color("#FFF3E0"), Some((0xff, 0xf3, 0xe0)));
        assert_eq!(parse_hex_color("e3f2fd"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn padding_cell_is_blank() {
        assert_eq!(DayCell::empty().render(), "    ");
    }

    #[test]
    fn plain_day_cell() {
        let cell = DayCell {
            day_number: Some(7),
            is_today: false,
            event: None,
        };
        assert_eq!(cell.render(), "  7 ");
    }

    #[test]
    fn calendar_has_title_header_and_rows() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        let catalog = EventCatalog::campus_default();
        let grid = build_calendar(2025, 9, catalog.by_day(), today).unwrap();

        let rendered = grid.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[0].contains("October 2025"));
    }
}
