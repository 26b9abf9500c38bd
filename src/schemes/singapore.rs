//! Singapore PSI
//!
//! Source: <https://www.haze.gov.sg/docs/default-source/faq/computation-of-the-pollutant-standards-index-(psi).pdf>

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::core::{AdvisoryScale, BreakpointScale, Result, SubIndex};
use crate::schemes::{advisory, record, scale, scored, summarize, AqiSummary};
use crate::scoring::truncate;

const INDEX: [(f64, f64); 6] = [
    (0.0, 50.0),
    (51.0, 100.0),
    (101.0, 200.0),
    (201.0, 300.0),
    (301.0, 400.0),
    (401.0, 500.0),
];

const LEVELS: [&str; 6] = [
    "good",
    "moderate",
    "unhealthy",
    "very unhealthy",
    "hazardous",
    "hazardous",
];

const GENERAL: [&str; 6] = [
    "Normal activities",
    "Normal activities",
    "Reduce prolonged or strenuous outdoor physical exertion",
    "Avoid prolonged or strenuous outdoor physical exertion",
    "Minimise outdoor activity",
    "Healthy people may experience adverse symptoms that affect normal activity.",
];

const RISK: [&str; 6] = [
    "Normal activities",
    "Normal activities",
    "Avoid prolonged or strenuous outdoor physical exertion",
    "Avoid outdoor activity",
    "Avoid outdoor activity",
    "PSI levels above 400 may be life-threatening to ill and elderly persons",
];

static ADVISORY: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&INDEX, &GENERAL, &RISK, &LEVELS));

static PM25_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 12.0, 0.0, 50.0),
        (13.0, 55.0, 51.0, 100.0),
        (56.0, 150.0, 101.0, 200.0),
        (151.0, 250.0, 201.0, 300.0),
        (251.0, 350.0, 301.0, 400.0),
        (351.0, 500.0, 401.0, 500.0),
    ])
});

static PM10_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 50.0, 0.0, 50.0),
        (51.0, 150.0, 51.0, 100.0),
        (151.0, 350.0, 101.0, 200.0),
        (351.0, 420.0, 201.0, 300.0),
        (421.0, 500.0, 301.0, 400.0),
        (501.0, 600.0, 401.0, 500.0),
    ])
});

static SO2_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 30.0, 0.0, 50.0),
        (31.0, 139.0, 51.0, 100.0),
        (140.0, 304.0, 101.0, 200.0),
        (305.0, 610.0, 201.0, 300.0),
        (611.0, 801.0, 301.0, 400.0),
        (802.0, 1000.0, 401.0, 500.0),
    ])
});

static CO_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 4.4, 0.0, 50.0),
        (4.5, 8.7, 51.0, 100.0),
        (8.8, 14.8, 101.0, 200.0),
        (14.9, 29.7, 201.0, 300.0),
        (29.8, 40.1, 301.0, 400.0),
        (40.2, 50.2, 401.0, 500.0),
    ])
});

static O3_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 59.0, 0.0, 50.0),
        (60.0, 78.0, 51.0, 100.0),
        (79.0, 117.0, 101.0, 200.0),
        (118.0, 392.0, 201.0, 300.0),
        (393.0, 490.0, 301.0, 400.0),
        (491.0, 590.0, 401.0, 500.0),
    ])
});

static NO2_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    // NO2 does not define PSI values below 101
    scale(&[
        (0.0, 601.0, 101.0, 200.0),
        (602.0, 1202.0, 201.0, 300.0),
        (1203.0, 1595.0, 301.0, 400.0),
        (1596.0, 1995.0, 401.0, 500.0),
    ])
});

/// O3 (8h) Singapore PSI, concentration in ppm
pub fn o3_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &O3_8H, &ADVISORY)
}

/// NO2 (1h) Singapore PSI, concentration in ppm
pub fn no2_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &NO2_1H, &ADVISORY)
}

/// SO2 (24h) Singapore PSI, concentration in ppm
pub fn so2_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &SO2_24H, &ADVISORY)
}

/// CO (8h) Singapore PSI, concentration in ppm
pub fn co_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 1), &CO_8H, &ADVISORY)
}

/// PM2.5 (24h) Singapore PSI, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM25_24H, &ADVISORY)
}

/// PM10 (24h) Singapore PSI, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM10_24H, &ADVISORY)
}

/// Level label for a Singapore PSI value
pub fn level(index: u32) -> Option<&'static str> {
    ADVISORY.level_for(index)
}

/// Raw pollutant readings for the Singapore aggregate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (8h), ppm
    pub o3_8h: Option<f64>,
    /// NO2 average (1h), ppm
    pub no2_1h: Option<f64>,
    /// SO2 average (24h), ppm
    pub so2_24h: Option<f64>,
    /// CO average (8h), ppm
    pub co_8h: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
}

/// Singapore PSI: maximum of the scored sub-indices
pub fn psi(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.o3_8h {
        record(&mut pollutants, "o3_8h", o3_8h(c));
    }
    if let Some(c) = readings.no2_1h {
        record(&mut pollutants, "no2_1h", no2_1h(c));
    }
    if let Some(c) = readings.so2_24h {
        record(&mut pollutants, "so2_24h", so2_24h(c));
    }
    if let Some(c) = readings.co_8h {
        record(&mut pollutants, "co_8h", co_8h(c));
    }
    if let Some(c) = readings.pm25_24h {
        record(&mut pollutants, "pm25_24h", pm25_24h(c));
    }
    if let Some(c) = readings.pm10_24h {
        record(&mut pollutants, "pm10_24h", pm10_24h(c));
    }
    summarize(pollutants, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::assert_band_continuity;

    #[test]
    fn tables_validate_and_are_continuous() {
        for scale in [&PM25_24H, &PM10_24H, &SO2_24H, &CO_8H, &O3_8H, &NO2_1H] {
            assert_band_continuity(scale);
        }
    }

    #[test]
    fn small_no2_reading_scores_the_first_defined_band() {
        assert_eq!(no2_1h(0.0001).unwrap().value, 101);
    }

    #[test]
    fn levels_cover_the_scale() {
        assert_eq!(level(0), Some("good"));
        assert_eq!(level(100), Some("moderate"));
        assert_eq!(level(450), Some("hazardous"));
    }
}
