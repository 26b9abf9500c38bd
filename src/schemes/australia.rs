//! Australia AQI
//!
//! Source: <https://www.legislation.gov.au/Details/F2016C00215>
//!
//! The AU AQI is not a breakpoint scheme: each pollutant reports as the
//! percentage of its NEPM standard, capped at the scheme maximum.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::core::{AdvisoryScale, Error, Result, SubIndex};
use crate::schemes::{advisory, record, summarize, AqiSummary};
use crate::scoring::truncate;

const INDEX: [(f64, f64); 6] = [
    (0.0, 33.0),
    (34.0, 66.0),
    (67.0, 99.0),
    (100.0, 149.0),
    (150.0, 200.0),
    (201.0, 201.0),
];

const LEVELS: [&str; 6] = [
    "very good",
    "good",
    "fair",
    "poor",
    "very poor",
    "hazardous",
];

const GENERAL: [&str; 6] = [
    "Enjoy normal activities",
    "Enjoy normal activities",
    "Adults are not likely to be affected when the AQI is in this range.",
    "Adults are not likely to be affected. Anyone who experiences symptoms should reduce outdoor activities.",
    "Adults should reduce or reschedule strenuous outdoor activities.",
    "Adults should avoid strenuous outdoor activities.",
];

const RISK: [&str; 6] = [
    "Enjoy normal activities",
    "Enjoy normal activities",
    "People unusually sensitive to air pollution should reduce or reschedule strenuous outdoor activities.",
    "Sensitive groups should reduce strenuous outdoor activities.",
    "Sensitive groups should avoid strenuous outdoor activities.",
    "Sensitive groups should avoid all outdoor activities.",
];

static ADVISORY: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&INDEX, &GENERAL, &RISK, &LEVELS));

const MAX_INDEX: u32 = 201;

// NEPM ambient air quality standards
const CO_STANDARD_8H: f64 = 9.0;
const NO2_STANDARD_1H: f64 = 0.12;
const O3_STANDARD_1H: f64 = 0.10;
const O3_STANDARD_4H: f64 = 0.08;
const SO2_STANDARD_24H: f64 = 0.20;
const PM25_STANDARD_24H: f64 = 25.0;
const PM10_STANDARD_24H: f64 = 50.0;

fn standard_index(concentration: f64, standard: f64) -> Result<SubIndex> {
    if !concentration.is_finite() {
        return Err(Error::InvalidConcentration(concentration));
    }
    let value = ((concentration / standard * 100.0).round() as u32).min(MAX_INDEX);
    let (general, sensitive) = ADVISORY.texts_for(value);
    Ok(SubIndex {
        value,
        general,
        sensitive,
    })
}

/// O3 (1h) AU AQI, concentration in ppm
pub fn o3_1h(concentration: f64) -> Result<SubIndex> {
    standard_index(truncate(concentration, 2), O3_STANDARD_1H)
}

/// O3 (4h) AU AQI, concentration in ppm
pub fn o3_4h(concentration: f64) -> Result<SubIndex> {
    standard_index(truncate(concentration, 2), O3_STANDARD_4H)
}

/// CO (8h) AU AQI, concentration in ppm
pub fn co_8h(concentration: f64) -> Result<SubIndex> {
    standard_index(truncate(concentration, 1), CO_STANDARD_8H)
}

/// NO2 (1h) AU AQI, concentration in ppm
pub fn no2_1h(concentration: f64) -> Result<SubIndex> {
    standard_index(truncate(concentration, 2), NO2_STANDARD_1H)
}

/// SO2 (24h) AU AQI, concentration in ppm
pub fn so2_24h(concentration: f64) -> Result<SubIndex> {
    standard_index(truncate(concentration, 2), SO2_STANDARD_24H)
}

/// PM2.5 (24h) AU AQI, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    standard_index(truncate(concentration, 0), PM25_STANDARD_24H)
}

/// PM10 (24h) AU AQI, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    standard_index(truncate(concentration, 0), PM10_STANDARD_24H)
}

/// Level label for an AU AQI value
pub fn level(index: u32) -> Option<&'static str> {
    ADVISORY.level_for(index)
}

/// Raw pollutant readings for the AU aggregate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (1h), ppm
    pub o3_1h: Option<f64>,
    /// O3 average (4h), ppm
    pub o3_4h: Option<f64>,
    /// CO average (8h), ppm
    pub co_8h: Option<f64>,
    /// NO2 average (1h), ppm
    pub no2_1h: Option<f64>,
    /// SO2 average (24h), ppm
    pub so2_24h: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
}

/// AU AQI: maximum of the scored sub-indices
pub fn aqi(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.o3_1h {
        record(&mut pollutants, "o3_1h", o3_1h(c));
    }
    if let Some(c) = readings.o3_4h {
        record(&mut pollutants, "o3_4h", o3_4h(c));
    }
    if let Some(c) = readings.co_8h {
        record(&mut pollutants, "co_8h", co_8h(c));
    }
    if let Some(c) = readings.no2_1h {
        record(&mut pollutants, "no2_1h", no2_1h(c));
    }
    if let Some(c) = readings.so2_24h {
        record(&mut pollutants, "so2_24h", so2_24h(c));
    }
    if let Some(c) = readings.pm25_24h {
        record(&mut pollutants, "pm25_24h", pm25_24h(c));
    }
    if let Some(c) = readings.pm10_24h {
        record(&mut pollutants, "pm10_24h", pm10_24h(c));
    }
    summarize(pollutants, level)
}
