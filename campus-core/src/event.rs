//! Campus events shown on the calendar.
//!
//! The catalog is injected rather than baked into the grid builder: it maps a
//! day of the displayed month to an `EventEntry`, and an event name to its
//! longer `EventDetails`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CampusError;

/// Short event metadata attached to a calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    pub name: String,
    pub time: String,
    /// Background color for the cell, e.g. "#e3f2fd".
    #[serde(rename = "color")]
    pub color_hint: String,
}

impl EventEntry {
    pub fn new(name: &str, time: &str, color_hint: &str) -> Self {
        EventEntry {
            name: name.to_string(),
            time: time.to_string(),
            color_hint: color_hint.to_string(),
        }
    }
}

/// Longer description shown when an event is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
}

/// Event filter buttons on the events page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EventCategory {
    #[default]
    All,
    Music,
    Tech,
    Art,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::All,
        EventCategory::Music,
        EventCategory::Tech,
        EventCategory::Art,
    ];

    /// Case-insensitive keyword match on an event title.
    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        match self {
            EventCategory::All => true,
            EventCategory::Music => title.contains("music"),
            EventCategory::Tech => title.contains("hackathon"),
            EventCategory::Art => title.contains("art"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::All => "All Events",
            EventCategory::Music => "Music",
            EventCategory::Tech => "Tech",
            EventCategory::Art => "Art",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventCategory::All => "all",
            EventCategory::Music => "music",
            EventCategory::Tech => "tech",
            EventCategory::Art => "art",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EventCategory {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(EventCategory::All),
            "music" => Ok(EventCategory::Music),
            "tech" => Ok(EventCategory::Tech),
            "art" => Ok(EventCategory::Art),
            other => Err(CampusError::InvalidArgument(format!(
                "unknown event category '{}' (expected all, music, tech or art)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    by_day: BTreeMap<u32, EventEntry>,
    details: HashMap<String, EventDetails>,
}

impl EventCatalog {
    pub fn new(by_day: BTreeMap<u32, EventEntry>, details: HashMap<String, EventDetails>) -> Self {
        EventCatalog { by_day, details }
    }

    /// The three events the campus runs mid-month.
    pub fn campus_default() -> Self {
        let by_day = BTreeMap::from([
            (18, EventEntry::new("Music Festival", "6:00 PM", "#e3f2fd")),
            (19, EventEntry::new("Hackathon", "9:00 AM", "#f3e5f5")),
            (20, EventEntry::new("Art Show", "1:00 PM", "#fff3e0")),
        ]);

        let details = HashMap::from([
            (
                "Music Festival".to_string(),
                EventDetails {
                    description: Some(
                        "Join local bands for a night of live performances and food trucks. Free entry for all students!"
                            .to_string(),
                    ),
                    location: Some("Main Quad".to_string()),
                    duration: Some("4 hours".to_string()),
                },
            ),
            (
                "Hackathon".to_string(),
                EventDetails {
                    description: Some(
                        "Compete in coding challenges and win prizes. Open to all skill levels. Teams of 1-4 members."
                            .to_string(),
                    ),
                    location: Some("Computer Science Building".to_string()),
                    duration: Some("24 hours".to_string()),
                },
            ),
            (
                "Art Show".to_string(),
                EventDetails {
                    description: Some(
                        "Showcasing student art, photography, and sculpture. Free entry! Meet the artists and enjoy refreshments."
                            .to_string(),
                    ),
                    location: Some("Art Gallery".to_string()),
                    duration: Some("4 hours".to_string()),
                },
            ),
        ]);

        EventCatalog { by_day, details }
    }

    pub fn by_day(&self) -> &BTreeMap<u32, EventEntry> {
        &self.by_day
    }

    pub fn entry_for_day(&self, day: u32) -> Option<&EventEntry> {
        self.by_day.get(&day)
    }

    /// Day and entry of the first event with this name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<(u32, &EventEntry)> {
        self.by_day
            .iter()
            .find(|(_, entry)| entry.name.eq_ignore_ascii_case(name))
            .map(|(day, entry)| (*day, entry))
    }

    pub fn details_for(&self, name: &str) -> Option<&EventDetails> {
        self.details.get(name)
    }

    /// Entries ordered by day.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &EventEntry)> {
        self.by_day.iter().map(|(day, entry)| (*day, entry))
    }

    pub fn filter(&self, category: EventCategory) -> Vec<(u32, &EventEntry)> {
        self.entries()
            .filter(|(_, entry)| category.matches(&entry.name))
            .collect()
    }
}
