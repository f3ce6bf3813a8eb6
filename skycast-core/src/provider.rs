use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::SearchError,
    model::{Coordinate, Forecast, ResolvedPlace},
};

pub mod open_meteo;

/// Resolves a free-text place name to candidate locations.
///
/// An empty candidate list means "no such place"; the caller decides what to
/// make of that.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn search(&self, name: &str) -> Result<Vec<ResolvedPlace>, SearchError>;
}

/// Fetches current conditions and the daily forecast for a coordinate.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, coordinate: Coordinate) -> Result<Forecast, SearchError>;
}
