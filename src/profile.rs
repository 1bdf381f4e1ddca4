//! Dashboard profiles: the settings that used to distinguish the two dashboard variants.

use crate::analysis::trend_analyzer::AnalysisOptions;
use crate::climate_data::fetcher::CacheKeyPolicy;
use crate::locations::location_table::LocationTable;
use crate::report::comparison_builder::ReportStyle;
use serde::Serialize;

/// Everything that varies between dashboard flavours: which regions can be picked, how
/// fetched series are cached, the analysis windows and the report wording.
///
/// # Examples
///
/// ```
/// use climate_mirror::{CacheKeyPolicy, DashboardProfile};
///
/// let extended = DashboardProfile::extended();
/// assert_eq!(extended.cache_key, CacheKeyPolicy::CoordinatesAndName);
/// assert!(extended.locations.get("Lamu").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardProfile {
    pub name: String,
    pub locations: LocationTable,
    pub cache_key: CacheKeyPolicy,
    pub analysis: AnalysisOptions,
    pub report: ReportStyle,
}

impl DashboardProfile {
    /// Ten counties, cache keyed by coordinates.
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            locations: LocationTable::kenya_counties(),
            cache_key: CacheKeyPolicy::Coordinates,
            analysis: AnalysisOptions::default(),
            report: ReportStyle::default(),
        }
    }

    /// Wider county coverage, cache keyed by coordinates and region name.
    pub fn extended() -> Self {
        let mut report = ReportStyle::default();
        report.hashtags.push("#KenyaCounties".to_string());
        Self {
            name: "extended".to_string(),
            locations: LocationTable::kenya_extended(),
            cache_key: CacheKeyPolicy::CoordinatesAndName,
            analysis: AnalysisOptions::default(),
            report,
        }
    }

    /// Replaces the location table, keeping every other setting.
    pub fn with_locations(mut self, locations: LocationTable) -> Self {
        self.locations = locations;
        self
    }
}

impl Default for DashboardProfile {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::Location;

    #[test]
    fn test_presets_differ_in_coverage_and_cache_key() {
        let classic = DashboardProfile::classic();
        let extended = DashboardProfile::extended();
        assert_eq!(classic.locations.len(), 10);
        assert!(extended.locations.len() > classic.locations.len());
        assert_eq!(classic.cache_key, CacheKeyPolicy::Coordinates);
        assert_eq!(extended.cache_key, CacheKeyPolicy::CoordinatesAndName);
        assert_eq!(classic.analysis, extended.analysis);
        assert_eq!(DashboardProfile::default(), classic);
    }

    #[test]
    fn test_with_locations() -> Result<(), crate::LocationError> {
        let table = LocationTable::new(vec![Location::new("Nyeri", -0.42, 36.95)])?;
        let profile = DashboardProfile::classic().with_locations(table);
        assert_eq!(profile.locations.len(), 1);
        assert_eq!(profile.name, "classic");
        Ok(())
    }
}
