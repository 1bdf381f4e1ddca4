//! Normalized monthly observations for one region, as produced by the fetcher.

use crate::types::location::LatLon;
use crate::types::period::Month;
use polars::prelude::{DataFrame, IntoLazy, LazyFrame, PolarsResult};
use serde::Serialize;

/// One month of measurements. All three values are always present; records missing any
/// of them never make it into a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObservationSample {
    pub month: Month,
    /// Mean air temperature at 2 m (`T2M`), °C.
    pub temperature_c: f64,
    /// Corrected precipitation (`PRECTOTCORR`), mm.
    pub rainfall_mm: f64,
    /// All-sky surface shortwave downward irradiance (`ALLSKY_SFC_SW_DWN`), MJ/m².
    pub solar_radiation_mj_m2: f64,
}

/// An ordered monthly time series for a single region.
///
/// Samples are sorted ascending by month and contain no duplicate months. The series keeps
/// a count of the upstream records that were skipped while parsing so callers can see how
/// lossy a response was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSeries {
    pub region: String,
    pub location: LatLon,
    samples: Vec<ObservationSample>,
    dropped_records: usize,
}

impl ObservationSeries {
    /// Builds a series, sorting the samples and discarding repeated months (the first one wins).
    pub fn new(
        region: impl Into<String>,
        location: LatLon,
        mut samples: Vec<ObservationSample>,
        dropped_records: usize,
    ) -> Self {
        samples.sort_by_key(|s| s.month);
        let before = samples.len();
        samples.dedup_by_key(|s| s.month);
        let duplicates = before - samples.len();
        Self {
            region: region.into(),
            location,
            samples,
            dropped_records: dropped_records + duplicates,
        }
    }

    /// Copy of this series under another region name.
    pub fn with_region(&self, region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..self.clone()
        }
    }

    pub fn samples(&self) -> &[ObservationSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of upstream records skipped because they were incomplete or malformed.
    pub fn dropped_records(&self) -> usize {
        self.dropped_records
    }

    pub fn first_month(&self) -> Option<Month> {
        self.samples.first().map(|s| s.month)
    }

    pub fn last_month(&self) -> Option<Month> {
        self.samples.last().map(|s| s.month)
    }

    /// Converts the series into a Polars `DataFrame` for charting.
    ///
    /// Columns: `year`, `month`, `temperature_c`, `rainfall_mm`, `solar_radiation_mj_m2`.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let years: Vec<i32> = self.samples.iter().map(|s| s.month.year()).collect();
        let months: Vec<i32> = self.samples.iter().map(|s| s.month.month() as i32).collect();
        let temperature: Vec<f64> = self.samples.iter().map(|s| s.temperature_c).collect();
        let rainfall: Vec<f64> = self.samples.iter().map(|s| s.rainfall_mm).collect();
        let solar: Vec<f64> = self
            .samples
            .iter()
            .map(|s| s.solar_radiation_mj_m2)
            .collect();

        polars::df!(
            "year" => years,
            "month" => months,
            "temperature_c" => temperature,
            "rainfall_mm" => rainfall,
            "solar_radiation_mj_m2" => solar
        )
    }

    /// Same as [`ObservationSeries::to_frame`], wrapped lazily so the caller can filter or
    /// aggregate before collecting.
    pub fn to_lazy_frame(&self) -> PolarsResult<LazyFrame> {
        Ok(self.to_frame()?.lazy())
    }
}
