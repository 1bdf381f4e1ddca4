//! Monthly NASA POWER climate data for Kenyan counties: fetch, analyze, compare.
//!
//! The pipeline runs region names through a [`LocationTable`], fetches each region's
//! monthly series with a [`ClimateFetcher`] (cached for a fixed TTL), summarizes it with a
//! [`TrendAnalyzer`] and pairs two summaries into a [`ComparisonReport`]. [`ClimateMirror`]
//! wires these together from a [`DashboardProfile`].

mod analysis;
mod climate_data;
mod climate_mirror;
mod error;
mod locations;
mod profile;
mod report;
mod types;

pub use climate_mirror::*;
pub use error::ClimateMirrorError;
pub use profile::DashboardProfile;

pub use analysis::trend_analyzer::{analyze, AnalysisOptions, TrendAnalyzer};
pub use report::comparison_builder::{compare, ComparisonBuilder, ReportStyle};

pub use climate_data::api_config::{
    ClimateApiConfig, ConfigError, RAINFALL_CODE, SOLAR_RADIATION_CODE, TEMPERATURE_CODE,
};
pub use climate_data::data_loader::ClimateDataLoader;
pub use climate_data::error::{FailureKind, FetchError};
pub use climate_data::fetcher::{CacheKeyPolicy, ClimateFetcher};

pub use locations::error::LocationError;
pub use locations::location_table::LocationTable;

pub use types::analysis::{
    ClimateAnalysis, PeriodChange, RiskLevel, YearlyAggregate, HIGH_RISK_SLOPE, MEDIUM_RISK_SLOPE,
};
pub use types::comparison::{ComparisonDeltas, ComparisonReport};
pub use types::location::{LatLon, Location};
pub use types::observation::{ObservationSample, ObservationSeries};
pub use types::period::Month;
