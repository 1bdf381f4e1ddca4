//! Output of the comparison report builder.

use crate::types::analysis::ClimateAnalysis;
use serde::Serialize;

/// Signed differences `first - second` between two analyses.
///
/// Trend deltas and period-mean deltas measure different things and are kept apart: a
/// region can have a higher mean rainfall while drying faster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonDeltas {
    /// Difference of temperature trends, °C per decade.
    pub temperature_trend_delta: f64,
    /// Difference of rainfall trends, mm per decade.
    pub rainfall_trend_delta: f64,
    /// Difference of full-period mean monthly temperature, °C.
    pub temperature_mean_delta: f64,
    /// Difference of full-period mean monthly rainfall, mm.
    pub rainfall_mean_delta: f64,
    /// Difference of early-vs-recent temperature changes, when both regions have one.
    pub period_temperature_change_delta: Option<f64>,
    /// Difference of early-vs-recent rainfall changes, when both regions have one.
    pub period_rainfall_change_delta: Option<f64>,
}

impl ComparisonDeltas {
    pub fn between(first: &ClimateAnalysis, second: &ClimateAnalysis) -> Self {
        let both = first.period_change.zip(second.period_change);
        Self {
            temperature_trend_delta: first.temperature_trend_per_decade
                - second.temperature_trend_per_decade,
            rainfall_trend_delta: first.rainfall_trend_per_decade
                - second.rainfall_trend_per_decade,
            temperature_mean_delta: first.mean_temperature_c - second.mean_temperature_c,
            rainfall_mean_delta: first.mean_rainfall_mm - second.mean_rainfall_mm,
            period_temperature_change_delta: both
                .map(|(a, b)| a.temperature_change() - b.temperature_change()),
            period_rainfall_change_delta: both
                .map(|(a, b)| a.rainfall_change() - b.rainfall_change()),
        }
    }
}

/// Two analyses side by side, with their deltas and the generated text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub first: ClimateAnalysis,
    pub second: ClimateAnalysis,
    pub deltas: ComparisonDeltas,
    /// Markdown narrative for the presentation layer.
    pub narrative: String,
    /// Short shareable text, present when the report style asks for it.
    pub share_message: Option<String>,
}
