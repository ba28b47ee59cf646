//! One controller per site page.
//!
//! Each controller is constructed once and owns whatever state its page
//! needs (draft text, displayed month, carousel playback), so nothing is
//! shared between pages.

pub mod community;
pub mod events;
pub mod home;
pub mod map;

pub use community::{CharacterCounter, CommunityPage, Post};
pub use events::{EventDialog, EventsPage};
pub use home::{Carousel, HomePage};
pub use map::{MapPage, SearchOutcome};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Map,
    Community,
    Events,
    Home,
}

impl Page {
    /// Route a URL path to the page it initializes. An empty last segment
    /// is the home page; unknown pages get no controller.
    pub fn from_path(path: &str) -> Option<Page> {
        let page = path.rsplit('/').next().unwrap_or_default();
        let page = if page.is_empty() { "index.html" } else { page };

        if page.contains("map.html") {
            Some(Page::Map)
        } else if page.contains("community.html") {
            Some(Page::Community)
        } else if page.contains("events.html") {
            Some(Page::Events)
        } else if page.contains("index.html") {
            Some(Page::Home)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Map => "Campus Map",
            Page::Community => "Community Board",
            Page::Events => "Events Calendar",
            Page::Home => "Home",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Escape text for inclusion in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_last_segment() {
        assert_eq!(Page::from_path("/site/map.html"), Some(Page::Map));
        assert_eq!(Page::from_path("/community.html"), Some(Page::Community));
        assert_eq!(Page::from_path("events.html"), Some(Page::Events));
        assert_eq!(Page::from_path("/campus/index.html"), Some(Page::Home));
    }

    #[test]
    fn empty_segment_is_home() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/campus/"), Some(Page::Home));
    }

    #[test]
    fn unknown_page_has_no_controller() {
        assert_eq!(Page::from_path("/about.html"), None);
        assert_eq!(Page::from_path("/map.html/extra"), None);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
