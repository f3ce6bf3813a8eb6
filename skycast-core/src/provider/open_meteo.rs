//! Open-Meteo implementations of the geocoding and forecast collaborators.
//!
//! Both services are keyless. The geocoder resolves a free-text name to
//! candidate places; the forecaster returns current conditions plus a daily
//! series for a coordinate.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::SearchError,
    model::{Coordinate, CurrentConditions, FORECAST_DAYS, Forecast, ForecastDay, ResolvedPlace, TemperatureUnit},
    provider::{ForecastProvider, GeocodingProvider},
};

const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";
const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn http_client() -> Result<Client, SearchError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self { http: http_client()?, base_url: GEOCODING_BASE_URL.to_string() })
    }

    #[cfg(test)]
    fn with_base_url(base_url: String) -> Result<Self, SearchError> {
        Ok(Self { http: http_client()?, base_url })
    }
}

#[async_trait]
impl GeocodingProvider for OpenMeteoGeocoder {
    async fn search(&self, name: &str) -> Result<Vec<ResolvedPlace>, SearchError> {
        let url = format!("{}/search", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, body = %truncate_body(&body), "geocoding request failed");
            return Err(SearchError::Status(status));
        }

        let parsed: GeoSearchResponse = serde_json::from_str(&body)
            .map_err(|e| SearchError::Malformed(format!("geocoding JSON: {e}")))?;

        Ok(parsed
            .results
            .into_iter()
            .map(|candidate| ResolvedPlace {
                coordinate: Coordinate {
                    latitude: candidate.latitude,
                    longitude: candidate.longitude,
                },
                name: candidate.name,
                country: candidate.country,
            })
            .collect())
    }
}

// The API omits `results` entirely when nothing matches.
#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    #[serde(default)]
    results: Vec<GeoCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeoCandidate {
    latitude: f64,
    longitude: f64,
    name: String,
    country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    http: Client,
    base_url: String,
    unit: TemperatureUnit,
}

impl OpenMeteoForecast {
    pub fn new(unit: TemperatureUnit) -> Result<Self, SearchError> {
        Ok(Self { http: http_client()?, base_url: FORECAST_BASE_URL.to_string(), unit })
    }

    #[cfg(test)]
    fn with_base_url(base_url: String, unit: TemperatureUnit) -> Result<Self, SearchError> {
        Ok(Self { http: http_client()?, base_url, unit })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoForecast {
    async fn fetch(&self, coordinate: Coordinate) -> Result<Forecast, SearchError> {
        let url = format!("{}/forecast", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("latitude", coordinate.latitude.to_string()),
            ("longitude", coordinate.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("daily", "temperature_2m_max,temperature_2m_min,weathercode".to_string()),
            ("timezone", "auto".to_string()),
        ];
        if self.unit == TemperatureUnit::Fahrenheit {
            query.push(("temperature_unit", self.unit.to_string()));
        }

        let res = self.http.get(&url).query(&query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, body = %truncate_body(&body), "forecast request failed");
            return Err(SearchError::Status(status));
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|e| SearchError::Malformed(format!("forecast JSON: {e}")))?;

        parsed.into_domain()
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: RawCurrentWeather,
    daily: RawDaily,
}

#[derive(Debug, Deserialize)]
struct RawCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    time: String,
}

// Parallel arrays indexed by day.
#[derive(Debug, Deserialize)]
struct RawDaily {
    time: Vec<NaiveDate>,
    weathercode: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

impl ForecastResponse {
    fn into_domain(self) -> Result<Forecast, SearchError> {
        let current = CurrentConditions {
            temperature: self.current_weather.temperature,
            wind_speed_kmh: self.current_weather.windspeed,
            weather_code: self.current_weather.weathercode,
            observation_time: parse_observation_time(&self.current_weather.time)?,
        };

        let daily = self.daily;
        let len = daily.time.len();
        if daily.weathercode.len() != len
            || daily.temperature_2m_max.len() != len
            || daily.temperature_2m_min.len() != len
        {
            return Err(SearchError::Malformed("daily series lengths differ".to_string()));
        }

        let days = daily
            .time
            .into_iter()
            .zip(daily.weathercode)
            .zip(daily.temperature_2m_max.into_iter().zip(daily.temperature_2m_min))
            .map(|((date, weather_code), (max_temp, min_temp))| ForecastDay {
                date,
                weather_code,
                max_temp,
                min_temp,
            })
            .take(FORECAST_DAYS)
            .collect();

        Ok(Forecast { current, daily: days })
    }
}

// Reported in the location's local time, with or without seconds.
fn parse_observation_time(raw: &str) -> Result<NaiveDateTime, SearchError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| SearchError::Malformed(format!("observation time {raw:?}: {e}")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
