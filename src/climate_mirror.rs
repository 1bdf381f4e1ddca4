//! This module provides the main entry point of the crate. A [`ClimateMirror`] resolves
//! region names, fetches their monthly climate series (through a TTL cache), analyzes them
//! and builds a comparison report for the presentation layer.

use crate::analysis::trend_analyzer::TrendAnalyzer;
use crate::climate_data::api_config::ClimateApiConfig;
use crate::climate_data::error::FetchError;
use crate::climate_data::fetcher::ClimateFetcher;
use crate::error::ClimateMirrorError;
use crate::locations::location_table::LocationTable;
use crate::profile::DashboardProfile;
use crate::report::comparison_builder::ComparisonBuilder;
use crate::types::analysis::ClimateAnalysis;
use crate::types::comparison::ComparisonReport;
use crate::types::location::Location;
use crate::types::observation::ObservationSeries;
use bon::bon;
use log::{info, warn};
use std::sync::Arc;

/// Fetched series of one region together with its analysis.
#[derive(Debug, Clone)]
pub struct RegionData {
    pub series: Arc<ObservationSeries>,
    /// `None` only if the series is empty.
    pub analysis: Option<ClimateAnalysis>,
}

/// Result of processing one side of a comparison. A failed fetch is recorded here rather
/// than aborting the other side.
#[derive(Debug)]
pub struct RegionOutcome {
    pub location: Location,
    pub result: Result<RegionData, FetchError>,
}

impl RegionOutcome {
    pub fn region(&self) -> &str {
        &self.location.name
    }

    pub fn analysis(&self) -> Option<&ClimateAnalysis> {
        self.result.as_ref().ok()?.analysis.as_ref()
    }

    pub fn series(&self) -> Option<&ObservationSeries> {
        self.result.as_ref().ok().map(|data| data.series.as_ref())
    }

    /// User-facing error text, if the fetch failed.
    pub fn error_message(&self) -> Option<String> {
        self.result
            .as_ref()
            .err()
            .map(|e| e.user_message(self.region()))
    }
}

/// Both sides of a comparison and, when both succeeded, the report.
#[derive(Debug)]
pub struct RegionComparison {
    pub first: RegionOutcome,
    pub second: RegionOutcome,
    pub report: Option<ComparisonReport>,
}

/// The pipeline client.
///
/// Owns the location table, a caching fetcher, the analyzer and the report builder, all
/// configured from a [`DashboardProfile`].
///
/// # Examples
///
/// ```no_run
/// # use climate_mirror::{ClimateMirror, ClimateMirrorError};
/// # async fn run() -> Result<(), ClimateMirrorError> {
/// let client = ClimateMirror::new()?;
/// let comparison = client
///     .compare()
///     .first("Nairobi")
///     .second("Mombasa")
///     .call()
///     .await?;
/// if let Some(report) = comparison.report {
///     println!("{}", report.narrative);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ClimateMirror {
    profile: DashboardProfile,
    fetcher: ClimateFetcher,
    analyzer: TrendAnalyzer,
    reporter: ComparisonBuilder,
}

#[bon]
impl ClimateMirror {
    /// Creates a client with the classic profile and the public API defaults.
    pub fn new() -> Result<Self, ClimateMirrorError> {
        Self::with_config(DashboardProfile::default(), ClimateApiConfig::default())
    }

    /// Creates a client from an explicit profile and API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateMirrorError::Config`] if the API configuration is inconsistent and
    /// [`ClimateMirrorError::HttpClient`] if the HTTP client cannot be built.
    pub fn with_config(
        profile: DashboardProfile,
        api_config: ClimateApiConfig,
    ) -> Result<Self, ClimateMirrorError> {
        let fetcher = ClimateFetcher::new(api_config, profile.cache_key)?;
        Ok(Self {
            analyzer: TrendAnalyzer::new(profile.analysis),
            reporter: ComparisonBuilder::new(profile.report.clone()),
            fetcher,
            profile,
        })
    }

    pub fn profile(&self) -> &DashboardProfile {
        &self.profile
    }

    pub fn locations(&self) -> &LocationTable {
        &self.profile.locations
    }

    pub fn fetcher(&self) -> &ClimateFetcher {
        &self.fetcher
    }

    /// Fetches and analyzes a single region.
    ///
    /// # Errors
    ///
    /// [`ClimateMirrorError::Location`] for an unknown name, [`ClimateMirrorError::Fetch`]
    /// if the data could not be retrieved or was empty.
    pub async fn analyze_region(&self, region: &str) -> Result<RegionData, ClimateMirrorError> {
        let location = self.profile.locations.resolve(region)?.clone();
        Ok(self.process(&location).await?)
    }

    /// Compares two regions.
    ///
    /// Both names are resolved first; an unknown name fails the whole call. The two fetches
    /// then run concurrently and independently. The report is present only when both
    /// regions produced an analysis.
    ///
    /// # Arguments
    ///
    /// * `.first(&str)`: **Required.** Name of the first region.
    /// * `.second(&str)`: **Required.** Name of the second region.
    #[builder]
    pub async fn compare(
        &self,
        first: &str,
        second: &str,
    ) -> Result<RegionComparison, ClimateMirrorError> {
        let first = self.profile.locations.resolve(first)?.clone();
        let second = self.profile.locations.resolve(second)?.clone();

        let (first_result, second_result) =
            tokio::join!(self.process(&first), self.process(&second));

        let first = RegionOutcome {
            location: first,
            result: first_result,
        };
        let second = RegionOutcome {
            location: second,
            result: second_result,
        };

        for outcome in [&first, &second] {
            if let Some(message) = outcome.error_message() {
                warn!("{}", message);
            }
        }

        let report = self
            .reporter
            .compare(first.analysis(), second.analysis());
        if report.is_some() {
            info!(
                "Built comparison report for {} vs {}",
                first.region(),
                second.region()
            );
        }

        Ok(RegionComparison {
            first,
            second,
            report,
        })
    }

    async fn process(&self, location: &Location) -> Result<RegionData, FetchError> {
        let series = self
            .fetcher
            .fetch(location.lat_lon(), &location.name)
            .await?;
        let analysis = self.analyzer.analyze(&series, &location.name);
        Ok(RegionData { series, analysis })
    }
}
