use crate::climate_data::api_config::ClimateApiConfig;
use crate::climate_data::data_loader::ClimateDataLoader;
use crate::climate_data::error::FetchError;
use crate::error::ClimateMirrorError;
use crate::types::location::LatLon;
use crate::types::observation::ObservationSeries;
use log::{info, warn};
use moka::future::Cache;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What identifies a cached series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheKeyPolicy {
    /// Same coordinates share one entry regardless of the region name.
    #[default]
    Coordinates,
    /// Coordinates and region name together form the key.
    CoordinatesAndName,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    latitude: OrderedFloat<f64>,
    longitude: OrderedFloat<f64>,
    region: Option<String>,
}

impl CacheKey {
    fn new(policy: CacheKeyPolicy, location: LatLon, region: &str) -> Self {
        Self {
            latitude: OrderedFloat(location.latitude()),
            longitude: OrderedFloat(location.longitude()),
            region: match policy {
                CacheKeyPolicy::Coordinates => None,
                CacheKeyPolicy::CoordinatesAndName => Some(region.to_string()),
            },
        }
    }
}

/// Read-through cache in front of [`ClimateDataLoader`].
///
/// Successful series are kept for the configured TTL. Failures are never cached, so the
/// next call after an error always goes back to the network.
pub struct ClimateFetcher {
    loader: ClimateDataLoader,
    cache: Cache<CacheKey, Arc<ObservationSeries>>,
    key_policy: CacheKeyPolicy,
}

impl ClimateFetcher {
    /// # Errors
    ///
    /// [`ClimateMirrorError::Config`] for an inconsistent configuration and
    /// [`ClimateMirrorError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(
        config: ClimateApiConfig,
        key_policy: CacheKeyPolicy,
    ) -> Result<Self, ClimateMirrorError> {
        let cache = Cache::builder().time_to_live(config.cache_ttl()).build();
        Ok(Self {
            loader: ClimateDataLoader::new(config)?,
            cache,
            key_policy,
        })
    }

    pub fn config(&self) -> &ClimateApiConfig {
        self.loader.config()
    }

    pub fn key_policy(&self) -> CacheKeyPolicy {
        self.key_policy
    }

    /// Returns the series for `location`, from cache when a fresh entry exists.
    ///
    /// The returned series is always labelled `region`, even when the cached entry was
    /// fetched under another name for the same coordinates.
    pub async fn fetch(
        &self,
        location: LatLon,
        region: &str,
    ) -> Result<Arc<ObservationSeries>, FetchError> {
        let key = CacheKey::new(self.key_policy, location, region);

        if let Some(series) = self.cache.get(&key).await {
            info!("Cache hit for {} at {:?}", region, location);
            return Ok(Self::labelled(series, region));
        }

        warn!(
            "Cache miss for {} at {:?}. Downloading and processing.",
            region, location
        );
        // Concurrent misses for the same key may both download; the last insert wins.
        let series = Arc::new(self.loader.load(location, region).await?);
        self.cache.insert(key, Arc::clone(&series)).await;
        Ok(series)
    }

    fn labelled(series: Arc<ObservationSeries>, region: &str) -> Arc<ObservationSeries> {
        if series.region == region {
            series
        } else {
            Arc::new(series.with_region(region))
        }
    }

    /// Number of live cached series.
    pub async fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_policy() {
        let point = LatLon(-1.29, 36.82);
        let by_coordinates_a = CacheKey::new(CacheKeyPolicy::Coordinates, point, "Nairobi");
        let by_coordinates_b = CacheKey::new(CacheKeyPolicy::Coordinates, point, "Nairobi City");
        assert_eq!(by_coordinates_a, by_coordinates_b);

        let by_name_a = CacheKey::new(CacheKeyPolicy::CoordinatesAndName, point, "Nairobi");
        let by_name_b = CacheKey::new(CacheKeyPolicy::CoordinatesAndName, point, "Nairobi City");
        assert_ne!(by_name_a, by_name_b);
    }

    #[test]
    fn test_new_validates_config() {
        let config = ClimateApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let result = ClimateFetcher::new(config, CacheKeyPolicy::Coordinates);
        assert!(matches!(result, Err(ClimateMirrorError::Config(_))));
    }

    #[tokio::test]
    async fn test_new_fetcher_is_empty() -> Result<(), ClimateMirrorError> {
        let fetcher = ClimateFetcher::new(ClimateApiConfig::default(), CacheKeyPolicy::default())?;
        assert_eq!(fetcher.cached_entries().await, 0);
        assert_eq!(fetcher.key_policy(), CacheKeyPolicy::Coordinates);
        Ok(())
    }

    #[test]
    fn test_policy_serde_names() -> Result<(), serde_json::Error> {
        let policy: CacheKeyPolicy = serde_json::from_str("\"coordinates_and_name\"")?;
        assert_eq!(policy, CacheKeyPolicy::CoordinatesAndName);
        assert_eq!(CacheKeyPolicy::default(), CacheKeyPolicy::Coordinates);
        Ok(())
    }
}
