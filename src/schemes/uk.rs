//! DAQI UK
//!
//! Source: <https://uk-air.defra.gov.uk/air-pollution/daqi>
//!
//! The DAQI is banded, not interpolated: a concentration ranks into one of
//! ten bands and the 1-based rank is the index. Advisory texts align with
//! the ranks; level labels group ranks into low/moderate/high/very high.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::core::{AdvisoryScale, Band, Result, SubIndex};
use crate::risk::band_rank;
use crate::schemes::{advisory, bands, record, summarize, AqiSummary};
use crate::scoring::truncate;

const LEVEL_BANDS: [(f64, f64); 4] = [(1.0, 3.0), (4.0, 6.0), (7.0, 9.0), (10.0, 10.0)];

const LEVELS: [&str; 4] = ["low", "moderate", "high", "very high"];

const GENERAL: [&str; 10] = [
    "Enjoy your usual outdoor activities.",
    "Enjoy your usual outdoor activities.",
    "Enjoy your usual outdoor activities.",
    "Enjoy your usual outdoor activities.",
    "Enjoy your usual outdoor activities.",
    "Enjoy your usual outdoor activities.",
    "Anyone experiencing discomfort such as sore eyes, cough or sore throat should consider reducing activity, particularly outdoors.",
    "Anyone experiencing discomfort such as sore eyes, cough or sore throat should consider reducing activity, particularly outdoors.",
    "Anyone experiencing discomfort such as sore eyes, cough or sore throat should consider reducing activity, particularly outdoors.",
    "Reduce physical exertion, particularly outdoors, especially if you experience symptoms such as cough or sore throat.",
];

const RISK: [&str; 10] = [
    "Enjoy your usual outdoor activities.",
    "Enjoy your usual outdoor activities.",
    "Enjoy your usual outdoor activities.",
    "Adults and children with lung problems, and adults with heart problems, who experience symptoms, should consider reducing strenuous physical activity, particularly outdoors.",
    "Adults and children with lung problems, and adults with heart problems, who experience symptoms, should consider reducing strenuous physical activity, particularly outdoors.",
    "Adults and children with lung problems, and adults with heart problems, who experience symptoms, should consider reducing strenuous physical activity, particularly outdoors.",
    "Adults and children with lung problems, and adults with heart problems, should reduce strenuous physical exertion, particularly outdoors, and particularly if they experience symptoms. People with asthma may find they need to use their reliever inhaler more often. Older people should also reduce physical exertion.",
    "Adults and children with lung problems, and adults with heart problems, should reduce strenuous physical exertion, particularly outdoors, and particularly if they experience symptoms. People with asthma may find they need to use their reliever inhaler more often. Older people should also reduce physical exertion.",
    "Adults and children with lung problems, and adults with heart problems, should reduce strenuous physical exertion, particularly outdoors, and particularly if they experience symptoms. People with asthma may find they need to use their reliever inhaler more often. Older people should also reduce physical exertion.",
    "Adults and children with lung problems, adults with heart problems, and older people, should avoid strenuous physical activity. People with asthma may find they need to use their reliever inhaler more often.",
];

static LEVEL_SCALE: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&LEVEL_BANDS, &[], &[], &LEVELS));

static O3_1H: Lazy<Vec<Band>> = Lazy::new(|| {
    bands(&[
        (0.0, 16.0),
        (17.0, 33.0),
        (34.0, 50.0),
        (51.0, 60.0),
        (61.0, 70.0),
        (71.0, 80.0),
        (81.0, 93.0),
        (94.0, 106.0),
        (107.0, 120.0),
        (121.0, 121.0),
    ])
});

static NO2_1H: Lazy<Vec<Band>> = Lazy::new(|| {
    bands(&[
        (0.0, 35.0),
        (36.0, 71.0),
        (72.0, 106.0),
        (107.0, 142.0),
        (143.0, 177.0),
        (178.0, 212.0),
        (213.0, 248.0),
        (249.0, 284.0),
        (285.0, 319.0),
        (320.0, 320.0),
    ])
});

static SO2_15M: Lazy<Vec<Band>> = Lazy::new(|| {
    bands(&[
        (0.0, 33.0),
        (34.0, 67.0),
        (68.0, 101.0),
        (102.0, 134.0),
        (135.0, 168.0),
        (169.0, 202.0),
        (203.0, 270.0),
        (271.0, 338.0),
        (339.0, 405.0),
        (406.0, 406.0),
    ])
});

static PM25_24H: Lazy<Vec<Band>> = Lazy::new(|| {
    bands(&[
        (0.0, 11.0),
        (12.0, 23.0),
        (24.0, 35.0),
        (36.0, 41.0),
        (42.0, 47.0),
        (48.0, 53.0),
        (54.0, 58.0),
        (59.0, 64.0),
        (65.0, 70.0),
        (71.0, 71.0),
    ])
});

static PM10_24H: Lazy<Vec<Band>> = Lazy::new(|| {
    bands(&[
        (0.0, 16.0),
        (17.0, 33.0),
        (34.0, 50.0),
        (51.0, 58.0),
        (59.0, 66.0),
        (67.0, 75.0),
        (76.0, 83.0),
        (84.0, 91.0),
        (92.0, 100.0),
        (101.0, 101.0),
    ])
});

fn ranked(concentration: f64, pollutant_bands: &[Band]) -> Result<SubIndex> {
    if !concentration.is_finite() {
        return Err(crate::core::Error::InvalidConcentration(concentration));
    }
    let value = band_rank(concentration, pollutant_bands);
    let slot = (value - 1) as usize;
    Ok(SubIndex {
        value,
        general: GENERAL.get(slot).copied().unwrap_or(""),
        sensitive: RISK.get(slot).copied().unwrap_or(""),
    })
}

/// O3 (1h) UK DAQI, concentration in ppm
pub fn o3_1h(concentration: f64) -> Result<SubIndex> {
    ranked(truncate(concentration * 1000.0, 0), &O3_1H)
}

/// NO2 (1h) UK DAQI, concentration in ppm
pub fn no2_1h(concentration: f64) -> Result<SubIndex> {
    ranked(truncate(concentration * 1000.0, 0), &NO2_1H)
}

/// SO2 (15m) UK DAQI, concentration in ppm
pub fn so2_15m(concentration: f64) -> Result<SubIndex> {
    ranked(truncate(concentration * 1000.0, 0), &SO2_15M)
}

/// PM2.5 (24h) UK DAQI, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    ranked(truncate(concentration, 0), &PM25_24H)
}

/// PM10 (24h) UK DAQI, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    ranked(truncate(concentration, 0), &PM10_24H)
}

/// Level label for a UK DAQI rank
pub fn level(index: u32) -> Option<&'static str> {
    LEVEL_SCALE.level_for(index)
}

/// Raw pollutant readings for the UK aggregate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (1h), ppm
    pub o3_1h: Option<f64>,
    /// NO2 average (1h), ppm
    pub no2_1h: Option<f64>,
    /// SO2 average (15m), ppm
    pub so2_15m: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
}

/// UK DAQI: maximum of the per-pollutant ranks
pub fn daqi(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.o3_1h {
        record(&mut pollutants, "o3_1h", o3_1h(c));
    }
    if let Some(c) = readings.no2_1h {
        record(&mut pollutants, "no2_1h", no2_1h(c));
    }
    if let Some(c) = readings.so2_15m {
        record(&mut pollutants, "so2_15m", so2_15m(c));
    }
    if let Some(c) = readings.pm25_24h {
        record(&mut pollutants, "pm25_24h", pm25_24h(c));
    }
    if let Some(c) = readings.pm10_24h {
        record(&mut pollutants, "pm10_24h", pm10_24h(c));
    }
    summarize(pollutants, level)
}
