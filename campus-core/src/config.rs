//! Campus configuration at ~/.config/campus/config.toml

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File};
use log::debug;
use serde::Deserialize;

use crate::constants::{DEFAULT_WEATHER_BASE_URL, DEFAULT_WEATHER_TIMEOUT_SECS};
use crate::error::{CampusError, CampusResult};
use crate::event::{EventCatalog, EventDetails, EventEntry};
use crate::weather::{TemperatureUnit, WeatherClient, WeatherLocation};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CampusConfig {
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Overrides the built-in campus events when non-empty.
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WeatherConfig {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_unit: TemperatureUnit,
    pub timezone: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        let location = WeatherLocation::default();
        WeatherConfig {
            label: location.label,
            latitude: location.latitude,
            longitude: location.longitude,
            temperature_unit: location.temperature_unit,
            timezone: location.timezone,
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            timeout_secs: DEFAULT_WEATHER_TIMEOUT_SECS,
        }
    }
}

impl WeatherConfig {
    pub fn location(&self) -> WeatherLocation {
        WeatherLocation {
            label: self.label.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            temperature_unit: self.temperature_unit,
            timezone: self.timezone.clone(),
        }
    }

    pub fn client(&self) -> CampusResult<WeatherClient> {
        WeatherClient::new(&self.base_url, Duration::from_secs(self.timeout_secs))
    }
}

/// One `[[events]]` table.
#[derive(Debug, Deserialize, Clone)]
pub struct EventConfig {
    pub day: u32,
    pub name: String,
    pub time: String,
    pub color: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
}

impl CampusConfig {
    pub fn config_path() -> CampusResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CampusError::Config("Could not determine config directory".into()))?
            .join("campus");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template on first run.
    pub fn load() -> CampusResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (if it exists) with `CAMPUS_` environment overrides,
    /// e.g. `CAMPUS_WEATHER__LATITUDE=40.7`.
    pub fn load_from(path: &Path) -> CampusResult<Self> {
        debug!("Loading config from {}", path.display());

        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("CAMPUS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CampusError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CampusError::Config(e.to_string()))
    }

    /// The configured events, or the built-in campus events when none are set.
    pub fn event_catalog(&self) -> CampusResult<EventCatalog> {
        if self.events.is_empty() {
            return Ok(EventCatalog::campus_default());
        }

        let mut by_day = BTreeMap::new();
        let mut details = HashMap::new();

        for event in &self.events {
            if !(1..=31).contains(&event.day) {
                return Err(CampusError::Config(format!(
                    "event '{}' has day {}, expected 1-31",
                    event.name, event.day
                )));
            }

            if by_day.contains_key(&event.day) {
                return Err(CampusError::Config(format!(
                    "event '{}' is on day {}, which already has an event",
                    event.name, event.day
                )));
            }

            by_day.insert(
                event.day,
                EventEntry::new(&event.name, &event.time, &event.color),
            );
            details.insert(
                event.name.clone(),
                EventDetails {
                    description: event.description.clone(),
                    location: event.location.clone(),
                    duration: event.duration.clone(),
                },
            );
        }

        Ok(EventCatalog::new(by_day, details))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CampusResult<()> {
        let defaults = WeatherConfig::default();
        let contents = format!(
            "\
# campus configuration

# Where the events page gets its weather from:
# [weather]
# label = \"{}\"
# latitude = {}
# longitude = {}
# temperature_unit = \"fahrenheit\"
# timezone = \"{}\"

# Calendar events, keyed by day of the displayed month:
# [[events]]
# day = 18
# name = \"Music Festival\"
# time = \"6:00 PM\"
# color = \"#e3f2fd\"
# location = \"Main Quad\"
# duration = \"4 hours\"
",
            defaults.label, defaults.latitude, defaults.longitude, defaults.timezone
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CampusError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CampusError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
