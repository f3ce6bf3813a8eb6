use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Maximum number of daily forecast entries shown by the widget.
pub const FORECAST_DAYS: usize = 4;

/// Unit used for all temperatures in a fetched report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureUnit::Celsius => f.write_str("celsius"),
            TemperatureUnit::Fahrenheit => f.write_str("fahrenheit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A geocoded place: where it is, and how to present it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub coordinate: Coordinate,
    pub name: String,
    /// Missing for a few territories in the geocoding data.
    pub country: Option<String>,
}

impl ResolvedPlace {
    /// `"<name>, <country>"`, or the bare name when no country is known.
    pub fn display_label(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// Current conditions at a place.
///
/// The observation time is the location-local timestamp reported by the
/// forecast service, so it carries no offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
    pub observation_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub max_temp: f64,
    pub min_temp: f64,
}

/// What the forecast collaborator returns for a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub current: CurrentConditions,
    pub daily: Vec<ForecastDay>,
}

/// Payload of a successful search: the place and its weather, always from
/// the same round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub place: ResolvedPlace,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}
