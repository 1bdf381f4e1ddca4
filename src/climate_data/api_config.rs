//! Settings for the NASA POWER monthly point endpoint.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::types::location::LatLon;

/// Mean air temperature at 2 m, °C.
pub const TEMPERATURE_CODE: &str = "T2M";
/// Bias-corrected total precipitation.
pub const RAINFALL_CODE: &str = "PRECTOTCORR";
/// All-sky surface shortwave downward irradiance.
pub const SOLAR_RADIATION_CODE: &str = "ALLSKY_SFC_SW_DWN";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Start year {start} is after end year {end}")]
    YearRange { start: i32, end: i32 },

    #[error("End year {end} is in the future (current year is {current})")]
    FutureEndYear { end: i32, current: i32 },

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Climate API configuration. Every field has a default matching the public POWER API,
/// so an empty JSON object deserializes to a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateApiConfig {
    /// API root, without the `/temporal/monthly/point` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// POWER user community; controls units and defaults on the server side.
    #[serde(default = "default_community")]
    pub community: String,

    #[serde(default = "default_start_year")]
    pub start_year: i32,

    #[serde(default = "default_end_year")]
    pub end_year: i32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// How long a fetched series stays cached, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Sentinel the API uses for missing values.
    #[serde(default = "default_fill_value")]
    pub fill_value: f64,
}

fn default_base_url() -> String {
    "https://power.larc.nasa.gov/api".to_string()
}

fn default_community() -> String {
    "AG".to_string()
}

const fn default_start_year() -> i32 {
    2000
}

const fn default_end_year() -> i32 {
    2024
}

const fn default_timeout() -> u64 {
    30
}

const fn default_cache_ttl() -> u64 {
    3600
}

const fn default_fill_value() -> f64 {
    -999.0
}

impl Default for ClimateApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            community: default_community(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            timeout_secs: default_timeout(),
            cache_ttl_secs: default_cache_ttl(),
            fill_value: default_fill_value(),
        }
    }
}

impl ClimateApiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_year > self.end_year {
            return Err(ConfigError::YearRange {
                start: self.start_year,
                end: self.end_year,
            });
        }
        let current = Utc::now().year();
        if self.end_year > current {
            return Err(ConfigError::FutureEndYear {
                end: self.end_year,
                current,
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// `true` if `year` lies in the configured range.
    pub fn covers_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// Endpoint for monthly point data, without a query string.
    pub fn monthly_point_endpoint(&self) -> String {
        format!("{}/temporal/monthly/point", self.base_url.trim_end_matches('/'))
    }

    /// Query parameters for one point. Values are raw; the HTTP client encodes them.
    pub fn monthly_point_query(&self, location: LatLon) -> Vec<(&'static str, String)> {
        vec![
            (
                "parameters",
                [TEMPERATURE_CODE, RAINFALL_CODE, SOLAR_RADIATION_CODE].join(","),
            ),
            ("community", self.community.clone()),
            ("longitude", location.longitude().to_string()),
            ("latitude", location.latitude().to_string()),
            ("start", self.start_year.to_string()),
            ("end", self.end_year.to_string()),
            ("format", "JSON".to_string()),
        ]
    }
}
