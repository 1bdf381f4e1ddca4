//! Lenient decoding of NASA POWER monthly point responses.
//!
//! Expected shape: `properties.parameter.<CODE>` maps `"YYYYMM"` keys to numbers. Records
//! that cannot be used are skipped and counted instead of failing the whole response,
//! since upstream data is routinely partial.

use crate::climate_data::api_config::{
    ClimateApiConfig, RAINFALL_CODE, SOLAR_RADIATION_CODE, TEMPERATURE_CODE,
};
use crate::climate_data::error::FetchError;
use crate::types::location::LatLon;
use crate::types::observation::{ObservationSample, ObservationSeries};
use crate::types::period::Month;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: HashMap<String, HashMap<String, Value>>,
}

/// Decodes a response body into a series for `region`.
///
/// A body that is not the documented JSON shape is a [`FetchError::ResponseDecode`]; a
/// well-formed body without a single usable month is a [`FetchError::EmptyResult`].
pub(crate) fn parse_series(
    body: &[u8],
    url: &str,
    region: &str,
    location: LatLon,
    config: &ClimateApiConfig,
) -> Result<ObservationSeries, FetchError> {
    let response: PowerResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::ResponseDecode(url.to_string(), e))?;

    let series = extract_series(&response.properties.parameter, region, location, config);

    if series.dropped_records() > 0 {
        warn!(
            "Dropped {} incomplete or malformed monthly records for {}",
            series.dropped_records(),
            region
        );
    }
    if series.is_empty() {
        return Err(FetchError::EmptyResult {
            region: region.to_string(),
            dropped: series.dropped_records(),
        });
    }
    debug!(
        "Parsed {} monthly samples for {} ({:?} to {:?})",
        series.len(),
        region,
        series.first_month(),
        series.last_month()
    );
    Ok(series)
}

fn extract_series(
    parameters: &HashMap<String, HashMap<String, Value>>,
    region: &str,
    location: LatLon,
    config: &ClimateApiConfig,
) -> ObservationSeries {
    let empty = HashMap::new();
    let temperature = parameters.get(TEMPERATURE_CODE).unwrap_or(&empty);
    let rainfall = parameters.get(RAINFALL_CODE).unwrap_or(&empty);
    let solar = parameters.get(SOLAR_RADIATION_CODE).unwrap_or(&empty);

    let usable = |value: &Value| -> Option<f64> {
        value
            .as_f64()
            .filter(|v| v.is_finite() && *v != config.fill_value)
    };
    let value_at = |map: &HashMap<String, Value>, key: &str| map.get(key).and_then(usable);

    let mut samples = Vec::with_capacity(temperature.len());
    let mut dropped = 0;
    for (key, raw_temperature) in temperature {
        let sample = Month::from_date_key(key)
            .filter(|month| config.covers_year(month.year()))
            .and_then(|month| {
                Some(ObservationSample {
                    month,
                    temperature_c: usable(raw_temperature)?,
                    rainfall_mm: value_at(rainfall, key)?,
                    solar_radiation_mj_m2: value_at(solar, key)?,
                })
            });
        match sample {
            Some(sample) => samples.push(sample),
            None => dropped += 1,
        }
    }

    ObservationSeries::new(region, location, samples, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAIROBI: LatLon = LatLon(-1.29, 36.82);

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    fn parse(value: Value) -> Result<ObservationSeries, FetchError> {
        parse_series(
            &body(value),
            "http://test",
            "Nairobi",
            NAIROBI,
            &ClimateApiConfig::default(),
        )
    }

    #[test]
    fn test_complete_records_in_order() -> Result<(), FetchError> {
        let series = parse(json!({
            "properties": {"parameter": {
                "T2M": {"200003": 21.0, "200001": 19.5, "200002": 20.25},
                "PRECTOTCORR": {"200001": 1.5, "200002": 2.5, "200003": 3.5},
                "ALLSKY_SFC_SW_DWN": {"200001": 22.0, "200002": 23.0, "200003": 24.0}
            }}
        }))?;

        assert_eq!(series.len(), 3);
        assert_eq!(series.dropped_records(), 0);
        let months: Vec<Month> = series.samples().iter().map(|s| s.month).collect();
        assert_eq!(
            months,
            vec![Month::new(1, 2000), Month::new(2, 2000), Month::new(3, 2000)]
        );
        assert_eq!(series.samples()[1].temperature_c, 20.25);
        assert_eq!(series.samples()[1].rainfall_mm, 2.5);
        assert_eq!(series.samples()[1].solar_radiation_mj_m2, 23.0);
        assert_eq!(series.region, "Nairobi");
        Ok(())
    }

    #[test]
    fn test_missing_companion_value_drops_record() -> Result<(), FetchError> {
        let series = parse(json!({
            "properties": {"parameter": {
                "T2M": {"200001": 19.5, "200002": 20.0, "200003": 21.0},
                "PRECTOTCORR": {"200001": 1.5, "200003": 3.5},
                "ALLSKY_SFC_SW_DWN": {"200001": 22.0, "200002": 23.0, "200003": 24.0}
            }}
        }))?;
        assert_eq!(series.len(), 2);
        assert_eq!(series.dropped_records(), 1);
        Ok(())
    }

    #[test]
    fn test_annual_keys_fill_values_and_out_of_range_years_are_dropped() -> Result<(), FetchError> {
        let series = parse(json!({
            "properties": {"parameter": {
                "T2M": {
                    "200001": 19.5,
                    "200013": 20.0,
                    "199912": 18.0,
                    "200002": -999.0,
                    "200003": null,
                    "2000-4": 20.0,
                    "200005": "warm"
                },
                "PRECTOTCORR": {"200001": 1.5, "200013": 1.0, "199912": 1.0, "200002": 1.0, "200003": 1.0, "200005": 1.0},
                "ALLSKY_SFC_SW_DWN": {"200001": 22.0, "200013": 22.0, "199912": 22.0, "200002": 22.0, "200003": 22.0, "200005": 22.0}
            }}
        }))?;
        assert_eq!(series.len(), 1);
        assert_eq!(series.dropped_records(), 6);
        Ok(())
    }

    #[test]
    fn test_no_valid_records_is_empty_result() {
        let result = parse(json!({
            "properties": {"parameter": {
                "T2M": {"200013": 20.0, "bad": 1.0},
                "PRECTOTCORR": {},
                "ALLSKY_SFC_SW_DWN": {}
            }}
        }));
        match result {
            Err(FetchError::EmptyResult { region, dropped }) => {
                assert_eq!(region, "Nairobi");
                assert_eq!(dropped, 2);
            }
            other => panic!("expected EmptyResult, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_variable_is_empty_result() {
        let result = parse(json!({
            "properties": {"parameter": {
                "T2M": {"200001": 20.0},
                "PRECTOTCORR": {"200001": 2.0}
            }}
        }));
        assert!(matches!(result, Err(FetchError::EmptyResult { .. })));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let result = parse(json!({"messages": ["service unavailable"]}));
        assert!(matches!(result, Err(FetchError::ResponseDecode(..))));

        let garbage = parse_series(b"<html>", "http://test", "Nairobi", NAIROBI, &ClimateApiConfig::default());
        assert!(matches!(garbage, Err(FetchError::ResponseDecode(..))));
    }
}
