//! Campus map search box.

/// Quick links shown under the search box.
pub const LOCATION_SUGGESTIONS: [&str; 6] = [
    "Library",
    "Student Center",
    "Dining Hall",
    "Recreation Center",
    "Science Building",
    "Art Gallery",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing to search for; the user is asked for a location.
    Empty,
    Searching(String),
}

impl SearchOutcome {
    pub fn message(&self) -> String {
        match self {
            SearchOutcome::Empty => "Please enter a location to search.".to_string(),
            SearchOutcome::Searching(query) => format!("Searching for \"{}\"...", query),
        }
    }
}

#[derive(Debug, Default)]
pub struct MapPage {
    last_query: Option<String>,
}

impl MapPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&mut self, query: &str) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::Empty;
        }

        self.last_query = Some(query.to_string());
        SearchOutcome::Searching(query.to_string())
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        &LOCATION_SUGGESTIONS
    }

    /// Fill the search box with a suggestion and search for it.
    pub fn choose_suggestion(&mut self, index: usize) -> Option<SearchOutcome> {
        let location = LOCATION_SUGGESTIONS.get(index)?;
        Some(self.search(location))
    }

    /// Suggestions containing the query, ignoring case.
    pub fn matching_suggestions(&self, query: &str) -> Vec<&'static str> {
        let query = query.trim().to_lowercase();
        LOCATION_SUGGESTIONS
            .iter()
            .copied()
            .filter(|location| !query.is_empty() && location.to_lowercase().contains(&query))
            .collect()
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }
}
