//! Current conditions from the Open-Meteo forecast API.
//!
//! One unauthenticated GET per report, no retries. Callers that only want
//! something to show use [`WeatherClient::report`], which never fails.

use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CampusError, CampusResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn query_value(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

/// Where to ask for the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherLocation {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_unit: TemperatureUnit,
    pub timezone: String,
}

impl Default for WeatherLocation {
    /// Des Moines, Iowa
    fn default() -> Self {
        WeatherLocation {
            label: "Des Moines".to_string(),
            latitude: 41.5868,
            longitude: -93.6250,
            temperature_unit: TemperatureUnit::Fahrenheit,
            timezone: "America/Chicago".to_string(),
        }
    }
}

impl WeatherLocation {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("current", "temperature_2m,weather_code".to_string()),
            ("temperature_unit", self.temperature_unit.query_value().to_string()),
            ("timezone", self.timezone.clone()),
        ]
    }
}

/// The `current` block of a forecast response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub weather_code: u32,
}

impl CurrentConditions {
    /// Temperature rounded half-up to a whole degree.
    pub fn rounded_temperature(&self) -> i64 {
        (self.temperature + 0.5).floor() as i64
    }

    pub fn description(&self) -> &'static str {
        describe_weather_code(self.weather_code)
    }
}

#[derive(Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    weather_code: u32,
}

/// Decode a forecast response body.
pub fn parse_current(body: &[u8]) -> CampusResult<CurrentConditions> {
    let forecast: ForecastResponse =
        serde_json::from_slice(body).map_err(|e| CampusError::Serialization(e.to_string()))?;

    Ok(CurrentConditions {
        temperature: forecast.current.temperature_2m,
        weather_code: forecast.current.weather_code,
    })
}

/// Human-readable text for a WMO weather code.
pub fn describe_weather_code(code: u32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51 => "Light drizzle",
        61 => "Light rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Light snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        95 => "Thunderstorm",
        _ => "Variable conditions",
    }
}

/// What the events page shows in its weather banner.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Conditions {
        label: String,
        temperature: i64,
        unit: TemperatureUnit,
        description: &'static str,
    },
    Unavailable,
}

impl WeatherReport {
    pub fn from_conditions(location: &WeatherLocation, conditions: &CurrentConditions) -> Self {
        WeatherReport::Conditions {
            label: location.label.clone(),
            temperature: conditions.rounded_temperature(),
            unit: location.temperature_unit,
            description: conditions.description(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, WeatherReport::Conditions { .. })
    }

    /// Secondary line under the headline.
    pub fn hint(&self) -> &'static str {
        match self {
            WeatherReport::Conditions { .. } => "Perfect for planning your campus activities!",
            WeatherReport::Unavailable => "Check local forecast for event planning.",
        }
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherReport::Conditions {
                label,
                temperature,
                unit,
                description,
            } => write!(
                f,
                "Current conditions in {}: {}{}, {}.",
                label,
                temperature,
                unit.symbol(),
                description
            ),
            WeatherReport::Unavailable => write!(f, "Unable to load current conditions."),
        }
    }
}

pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: &str, timeout: Duration) -> CampusResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("campus/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(WeatherClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/v1/forecast", self.base_url)
    }

    pub async fn fetch_current(&self, location: &WeatherLocation) -> CampusResult<CurrentConditions> {
        let url = self.forecast_url();
        debug!("Fetching weather for {} from {}", location.label, url);

        let response = self
            .http
            .get(&url)
            .query(&location.query_params())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CampusError::Weather(format!(
                "forecast request returned HTTP {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        parse_current(&body)
    }

    /// Fetch current conditions, falling back to `Unavailable` on any error.
    pub async fn report(&self, location: &WeatherLocation) -> WeatherReport {
        match self.fetch_current(location).await {
            Ok(conditions) => WeatherReport::from_conditions(location, &conditions),
            Err(e) => {
                warn!("Error fetching weather: {}", e);
                WeatherReport::Unavailable
            }
        }
    }
}
