//! Core library for the `skycast` weather widget.
//!
//! This crate defines:
//! - The search-fetch controller: debounced queries, at most one live
//!   request, and a single published view state
//! - Abstractions over the geocoding and forecast collaborators, with
//!   Open-Meteo implementations
//! - Shared domain models, the weather-code glyph table, and preferences
//!
//! It is used by `skycast-cli`, but can also be reused by other front-ends.

pub mod condition;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;

pub use condition::{Animation, Glyph, glyph_for};
pub use config::Config;
pub use controller::{DEFAULT_DEBOUNCE, SearchController, ViewState};
pub use error::SearchError;
pub use model::{
    Coordinate, CurrentConditions, FORECAST_DAYS, Forecast, ForecastDay, ResolvedPlace,
    TemperatureUnit, WeatherReport,
};
pub use provider::{ForecastProvider, GeocodingProvider};
