use thiserror::Error;

/// Everything that can go wrong between submitting a query and publishing a
/// view state.
///
/// `Cancelled` is the one variant that never reaches the user: a search that
/// was superseded by a newer one simply disappears.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Geocoding returned no candidates for the query.
    #[error("City not found")]
    NotFound,

    /// Transport-level failure talking to either collaborator.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The collaborator answered with a non-success HTTP status.
    #[error("Weather data not available (status {0})")]
    Status(reqwest::StatusCode),

    /// The response arrived but did not have the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The request was superseded by a newer search.
    #[error("request cancelled")]
    Cancelled,
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}
