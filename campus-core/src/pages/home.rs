//! Home page: announcements timestamp and the photo carousel.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    paused: bool,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between cycling and paused; returns the new paused state.
    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Icon and label for the toggle button.
    pub fn control_label(&self) -> &'static str {
        if self.paused { "▶ Play" } else { "⏸ Pause" }
    }
}

#[derive(Debug)]
pub struct HomePage {
    carousel: Carousel,
    last_updated: DateTime<Local>,
}

impl HomePage {
    pub fn new(now: DateTime<Local>) -> Self {
        HomePage {
            carousel: Carousel::new(),
            last_updated: now,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn last_updated(&self) -> String {
        format!("Last updated: {}", self.last_updated.format("%-m/%-d/%Y, %-I:%M:%S %p"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn carousel_toggles() {
        let mut carousel = Carousel::new();
        assert!(!carousel.is_paused());
        assert_eq!(carousel.control_label(), "⏸ Pause");

        assert!(carousel.toggle());
        assert_eq!(carousel.control_label(), "▶ Play");

        assert!(!carousel.toggle());
        assert!(!carousel.is_paused());
    }

    #[test]
    fn last_updated_stamp() {
        let now = Local.with_ymd_and_hms(2025, 10, 5, 14, 7, 9).unwrap();
        let page = HomePage::new(now);
        assert_eq!(page.last_updated(), "Last updated: 10/5/2025, 2:07:09 PM");
    }
}
