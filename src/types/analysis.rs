//! Derived per-region summaries produced by the trend analyzer.

use polars::prelude::{DataFrame, PolarsResult};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Raw per-year temperature slope above which a region is classified [`RiskLevel::High`].
pub const HIGH_RISK_SLOPE: f64 = 0.02;
/// Raw per-year temperature slope above which a region is classified [`RiskLevel::Medium`].
pub const MEDIUM_RISK_SLOPE: f64 = 0.01;
/// Slopes within this distance of a threshold count as equal to it.
const SLOPE_TOLERANCE: f64 = 1e-9;

/// Coarse warming risk derived only from the temperature trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies a temperature slope in °C per *year* (not per decade).
    ///
    /// Thresholds are exclusive on the upper side, so a slope of exactly `0.02` is
    /// `Medium` and exactly `0.01` is `Low`. Regression noise within `1e-9` of a threshold
    /// is treated as landing on it.
    ///
    /// ```
    /// use climate_mirror::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_slope(0.0201), RiskLevel::High);
    /// assert_eq!(RiskLevel::from_slope(0.02), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_slope(0.01), RiskLevel::Low);
    /// ```
    pub fn from_slope(slope_per_year: f64) -> Self {
        if slope_per_year > HIGH_RISK_SLOPE + SLOPE_TOLERANCE {
            RiskLevel::High
        } else if slope_per_year > MEDIUM_RISK_SLOPE + SLOPE_TOLERANCE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Urgent climate adaptation needed: invest in drought-resistant crops, water harvesting and early-warning systems."
            }
            RiskLevel::Medium => {
                "Monitor trends closely and plan adaptation measures for water and agriculture."
            }
            RiskLevel::Low => {
                "Maintain current conservation efforts and keep tracking climate indicators."
            }
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// Per-year statistics of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyAggregate {
    pub year: i32,
    pub temperature_mean: f64,
    pub rainfall_mean: f64,
    pub rainfall_total: f64,
    pub solar_radiation_mean: f64,
    /// Number of monthly samples that fell in this year.
    pub months: usize,
}

impl YearlyAggregate {
    /// Builds a Polars frame from a slice of aggregates, one row per year.
    pub fn to_frame(aggregates: &[YearlyAggregate]) -> PolarsResult<DataFrame> {
        let years: Vec<i32> = aggregates.iter().map(|a| a.year).collect();
        let temperature: Vec<f64> = aggregates.iter().map(|a| a.temperature_mean).collect();
        let rainfall_mean: Vec<f64> = aggregates.iter().map(|a| a.rainfall_mean).collect();
        let rainfall_total: Vec<f64> = aggregates.iter().map(|a| a.rainfall_total).collect();
        let solar: Vec<f64> = aggregates.iter().map(|a| a.solar_radiation_mean).collect();

        polars::df!(
            "year" => years,
            "temperature_mean" => temperature,
            "rainfall_mean" => rainfall_mean,
            "rainfall_total" => rainfall_total,
            "solar_radiation_mean" => solar
        )
    }
}

/// Early-versus-recent comparison inside one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodChange {
    /// Last year (inclusive) of the early window.
    pub early_end: i32,
    /// First year (inclusive) of the recent window.
    pub recent_start: i32,
    pub temperature_early: f64,
    pub temperature_recent: f64,
    pub rainfall_early: f64,
    pub rainfall_recent: f64,
}

impl PeriodChange {
    /// `recent - early` mean monthly temperature, °C.
    pub fn temperature_change(&self) -> f64 {
        self.temperature_recent - self.temperature_early
    }

    /// `recent - early` mean monthly rainfall, mm.
    pub fn rainfall_change(&self) -> f64 {
        self.rainfall_recent - self.rainfall_early
    }
}

/// Summary of a single region's series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateAnalysis {
    pub region: String,
    pub mean_temperature_c: f64,
    pub mean_rainfall_mm: f64,
    pub mean_solar_radiation_mj_m2: f64,
    /// Mean over years of the yearly rainfall total.
    pub mean_annual_rainfall_mm: f64,
    /// Least-squares slope of yearly mean temperature, °C per year.
    pub temperature_slope_per_year: f64,
    /// `temperature_slope_per_year * 10`.
    pub temperature_trend_per_decade: f64,
    /// Least-squares slope of yearly mean rainfall times ten, mm per decade.
    pub rainfall_trend_per_decade: f64,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    pub hottest_year: i32,
    /// Year with the highest yearly rainfall total.
    pub wettest_year: i32,
    /// Year with the lowest yearly rainfall total.
    pub driest_year: i32,
    pub yearly: Vec<YearlyAggregate>,
    pub period_change: Option<PeriodChange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_boundaries() {
        assert_eq!(RiskLevel::from_slope(0.0201), RiskLevel::High);
        assert_eq!(RiskLevel::from_slope(0.0200), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_slope(0.0101), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_slope(0.0100), RiskLevel::Low);
        assert_eq!(RiskLevel::from_slope(-0.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_slope(0.020_000_000_000_014), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_slope(0.010_000_000_000_005), RiskLevel::Low);
    }

    #[test]
    fn test_risk_serializes_uppercase() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium)?, "\"MEDIUM\"");
        assert_eq!(RiskLevel::High.to_string(), "HIGH");
        Ok(())
    }

    #[test]
    fn test_period_change_differences() {
        let change = PeriodChange {
            early_end: 2010,
            recent_start: 2015,
            temperature_early: 20.0,
            temperature_recent: 20.75,
            rainfall_early: 80.0,
            rainfall_recent: 72.5,
        };
        assert_eq!(change.temperature_change(), 0.75);
        assert_eq!(change.rainfall_change(), -7.5);
    }
}
