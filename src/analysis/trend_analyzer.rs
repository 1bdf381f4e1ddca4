//! Turns an [`ObservationSeries`] into a [`ClimateAnalysis`]: means, yearly aggregates,
//! least-squares trends, notable years and a risk classification.

use crate::analysis::regression::{first_max_by, first_min_by, linear_slope, mean};
use crate::types::analysis::{ClimateAnalysis, PeriodChange, RiskLevel, YearlyAggregate};
use crate::types::observation::{ObservationSample, ObservationSeries};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tunables for the analyzer. The defaults split 2000-2024 data into a 2000-2010 early
/// window and a 2015-2024 recent window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Last year (inclusive) of the early comparison window.
    #[serde(default = "default_early_end")]
    pub early_end: i32,
    /// First year (inclusive) of the recent comparison window.
    #[serde(default = "default_recent_start")]
    pub recent_start: i32,
}

const fn default_early_end() -> i32 {
    2010
}

const fn default_recent_start() -> i32 {
    2015
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            early_end: default_early_end(),
            recent_start: default_recent_start(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    options: AnalysisOptions,
}

#[derive(Default)]
struct YearAccumulator {
    temperature: f64,
    rainfall: f64,
    solar: f64,
    months: usize,
}

impl TrendAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> AnalysisOptions {
        self.options
    }

    /// Analyzes a series. Returns `None` when the series has no samples; that is the
    /// normal "no data" signal, not an error.
    pub fn analyze(&self, series: &ObservationSeries, region: &str) -> Option<ClimateAnalysis> {
        let samples = series.samples();
        let mean_temperature_c = mean(samples.iter().map(|s| s.temperature_c))?;
        let mean_rainfall_mm = mean(samples.iter().map(|s| s.rainfall_mm))?;
        let mean_solar_radiation_mj_m2 = mean(samples.iter().map(|s| s.solar_radiation_mj_m2))?;

        let yearly = Self::yearly_aggregates(samples);
        let mean_annual_rainfall_mm = mean(yearly.iter().map(|y| y.rainfall_total))?;

        let temperature_points: Vec<(f64, f64)> = yearly
            .iter()
            .map(|y| (f64::from(y.year), y.temperature_mean))
            .collect();
        let rainfall_points: Vec<(f64, f64)> = yearly
            .iter()
            .map(|y| (f64::from(y.year), y.rainfall_mean))
            .collect();
        let temperature_slope_per_year = linear_slope(&temperature_points);
        let rainfall_slope_per_year = linear_slope(&rainfall_points);

        let risk_level = RiskLevel::from_slope(temperature_slope_per_year);

        let hottest_year = first_max_by(&yearly, |y| y.year, |y| y.temperature_mean)?;
        let wettest_year = first_max_by(&yearly, |y| y.year, |y| y.rainfall_total)?;
        let driest_year = first_min_by(&yearly, |y| y.year, |y| y.rainfall_total)?;

        let period_change = self.period_change(samples);

        debug!(
            "Analyzed {} months for {}: slope {:.4} °C/yr, risk {}",
            samples.len(),
            region,
            temperature_slope_per_year,
            risk_level
        );

        Some(ClimateAnalysis {
            region: region.to_string(),
            mean_temperature_c,
            mean_rainfall_mm,
            mean_solar_radiation_mj_m2,
            mean_annual_rainfall_mm,
            temperature_slope_per_year,
            temperature_trend_per_decade: temperature_slope_per_year * 10.0,
            rainfall_trend_per_decade: rainfall_slope_per_year * 10.0,
            risk_level,
            recommendation: risk_level.recommendation().to_string(),
            hottest_year,
            wettest_year,
            driest_year,
            yearly,
            period_change,
        })
    }

    /// Groups samples by year, ascending.
    pub fn yearly_aggregates(samples: &[ObservationSample]) -> Vec<YearlyAggregate> {
        let mut by_year: BTreeMap<i32, YearAccumulator> = BTreeMap::new();
        for sample in samples {
            let acc = by_year.entry(sample.month.year()).or_default();
            acc.temperature += sample.temperature_c;
            acc.rainfall += sample.rainfall_mm;
            acc.solar += sample.solar_radiation_mj_m2;
            acc.months += 1;
        }

        by_year
            .into_iter()
            .map(|(year, acc)| {
                let n = acc.months as f64;
                YearlyAggregate {
                    year,
                    temperature_mean: acc.temperature / n,
                    rainfall_mean: acc.rainfall / n,
                    rainfall_total: acc.rainfall,
                    solar_radiation_mean: acc.solar / n,
                    months: acc.months,
                }
            })
            .collect()
    }

    fn period_change(&self, samples: &[ObservationSample]) -> Option<PeriodChange> {
        let early = || {
            samples
                .iter()
                .filter(|s| s.month.year() <= self.options.early_end)
        };
        let recent = || {
            samples
                .iter()
                .filter(|s| s.month.year() >= self.options.recent_start)
        };

        Some(PeriodChange {
            early_end: self.options.early_end,
            recent_start: self.options.recent_start,
            temperature_early: mean(early().map(|s| s.temperature_c))?,
            temperature_recent: mean(recent().map(|s| s.temperature_c))?,
            rainfall_early: mean(early().map(|s| s.rainfall_mm))?,
            rainfall_recent: mean(recent().map(|s| s.rainfall_mm))?,
        })
    }
}

/// Analyzes a series with the default [`AnalysisOptions`].
pub fn analyze(series: &ObservationSeries, region: &str) -> Option<ClimateAnalysis> {
    TrendAnalyzer::default().analyze(series, region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::LatLon;
    use crate::types::period::Month;

    fn sample(year: i32, month: u32, temperature: f64, rainfall: f64) -> ObservationSample {
        ObservationSample {
            month: Month::new(month, year),
            temperature_c: temperature,
            rainfall_mm: rainfall,
            solar_radiation_mj_m2: 20.0,
        }
    }

    fn series(samples: Vec<ObservationSample>) -> ObservationSeries {
        ObservationSeries::new("Test", LatLon(-1.29, 36.82), samples, 0)
    }

    fn full_years(years: std::ops::RangeInclusive<i32>, temperature: impl Fn(i32) -> f64) -> ObservationSeries {
        let samples = years
            .flat_map(|year| (1..=12).map(move |m| (year, m)))
            .map(|(year, m)| sample(year, m, temperature(year), 60.0))
            .collect();
        series(samples)
    }

    #[test]
    fn test_empty_series_is_absent() {
        assert!(analyze(&series(vec![]), "Empty").is_none());
    }

    #[test]
    fn test_single_sample_is_present() {
        let analysis = analyze(&series(vec![sample(2003, 5, 22.0, 10.0)]), "One");
        assert!(analysis.is_some());
    }

    #[test]
    fn test_single_year_has_zero_trend() {
        let samples = (1..=12)
            .map(|m| sample(2012, m, 18.0 + m as f64, 5.0 * m as f64))
            .collect();
        let analysis = analyze(&series(samples), "Single").unwrap();
        assert_eq!(analysis.temperature_trend_per_decade, 0.0);
        assert_eq!(analysis.rainfall_trend_per_decade, 0.0);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.hottest_year, 2012);
    }

    #[test]
    fn test_step_in_last_year() {
        let s = full_years(2000..=2005, |year| if year == 2005 { 21.0 } else { 20.0 });
        let analysis = analyze(&s, "Step").unwrap();

        let means: Vec<f64> = analysis.yearly.iter().map(|y| y.temperature_mean).collect();
        assert_eq!(means, vec![20.0, 20.0, 20.0, 20.0, 20.0, 21.0]);

        // Sxy = 2.5, Sxx = 17.5
        let expected = 2.5 / 17.5;
        assert!((analysis.temperature_slope_per_year - expected).abs() < 1e-9);
        assert!((analysis.temperature_trend_per_decade - expected * 10.0).abs() < 1e-9);
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.hottest_year, 2005);
    }

    #[test]
    fn test_slow_warming_is_medium() {
        let s = full_years(2000..=2020, |year| 20.0 + 0.015 * f64::from(year - 2000));
        let analysis = analyze(&s, "Slow").unwrap();
        assert!((analysis.temperature_slope_per_year - 0.015).abs() < 1e-9);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(
            analysis.recommendation,
            RiskLevel::Medium.recommendation().to_string()
        );
    }

    #[test]
    fn test_slope_exactly_on_threshold_takes_lower_tier() {
        let on_high = full_years(2000..=2024, |year| 20.0 + 0.02 * f64::from(year - 2000));
        let analysis = analyze(&on_high, "OnHigh").unwrap();
        assert!((analysis.temperature_slope_per_year - 0.02).abs() < 1e-9);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);

        let on_medium = full_years(2000..=2024, |year| 20.0 + 0.01 * f64::from(year - 2000));
        let analysis = analyze(&on_medium, "OnMedium").unwrap();
        assert!((analysis.temperature_slope_per_year - 0.01).abs() < 1e-9);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_wettest_and_driest_use_yearly_totals() {
        // 2000 has a higher monthly mean but fewer months, so 2001 has the larger total.
        let mut samples = vec![sample(2000, 1, 20.0, 100.0), sample(2000, 2, 20.0, 100.0)];
        samples.extend((1..=12).map(|m| sample(2001, m, 20.0, 50.0)));
        samples.extend((1..=12).map(|m| sample(2002, m, 20.0, 50.0)));
        let analysis = analyze(&series(samples), "Rain").unwrap();

        assert_eq!(analysis.wettest_year, 2001);
        assert_eq!(analysis.driest_year, 2000);
        let totals: Vec<f64> = analysis.yearly.iter().map(|y| y.rainfall_total).collect();
        assert_eq!(totals, vec![200.0, 600.0, 600.0]);
        assert!((analysis.mean_annual_rainfall_mm - 1400.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_period_change() {
        let s = full_years(2000..=2024, |year| if year >= 2015 { 21.0 } else { 20.0 });
        let change = analyze(&s, "Periods").unwrap().period_change.unwrap();
        assert_eq!(change.temperature_early, 20.0);
        assert_eq!(change.temperature_recent, 21.0);
        assert_eq!(change.temperature_change(), 1.0);
        assert_eq!(change.rainfall_change(), 0.0);
    }

    #[test]
    fn test_period_change_absent_without_recent_data() {
        let s = full_years(2000..=2008, |_| 20.0);
        assert!(analyze(&s, "Early only").unwrap().period_change.is_none());
    }

    #[test]
    fn test_custom_windows() {
        let analyzer = TrendAnalyzer::new(AnalysisOptions {
            early_end: 2001,
            recent_start: 2003,
        });
        let s = full_years(2000..=2004, |year| f64::from(year - 2000));
        let change = analyzer.analyze(&s, "Custom").unwrap().period_change.unwrap();
        assert_eq!(change.temperature_early, 0.5);
        assert_eq!(change.temperature_recent, 3.5);
    }
}
