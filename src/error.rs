use crate::climate_data::api_config::ConfigError;
use crate::climate_data::error::FetchError;
use crate::locations::error::LocationError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateMirrorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
