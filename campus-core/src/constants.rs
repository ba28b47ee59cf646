/// Columns in a calendar row, Sunday first.
pub const DAYS_PER_WEEK: usize = 7;

/// A month never spans more than six weeks.
pub const MAX_WEEKS: usize = 6;

/// Maximum length of a community post.
pub const POST_MAX_LENGTH: usize = 280;

/// The character counter turns into a warning below this many characters left.
pub const POST_WARNING_THRESHOLD: usize = 50;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";

pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;
