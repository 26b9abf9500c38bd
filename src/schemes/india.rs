//! India AQI
//!
//! Source: <http://www.indiaenvironmentportal.org.in/files/file/Air%20Quality%20Index.pdf>
//!
//! India publishes one effects table and no separate caution wording, so
//! both advisory slots carry the effects text.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::core::{AdvisoryScale, BreakpointScale, Result, SubIndex};
use crate::schemes::{advisory, record, scale, scored, summarize, AqiSummary};
use crate::scoring::truncate;

const INDEX: [(f64, f64); 6] = [
    (0.0, 50.0),
    (51.0, 100.0),
    (101.0, 250.0),
    (251.0, 350.0),
    (351.0, 400.0),
    (401.0, 500.0),
];

const LEVELS: [&str; 6] = [
    "good",
    "satisfactory",
    "moderately polluted",
    "poor",
    "very poor",
    "severe",
];

const EFFECTS: [&str; 6] = [
    "Minimal impact",
    "May cause minor breathing discomfort to sensitive people.",
    "May cause breathing discomfort to people with lung disease such as asthma, and discomfort to people with heart disease, children and older adults.",
    "May cause breathing discomfort to people on prolonged exposure, and discomfort to people with heart disease.",
    "May cause respiratory illness to the people on prolonged exposure. Effect may be more pronounced in people with lung and heart diseases.",
    "May cause respiratory impact even on healthy people, and serious health impacts on people with lung/heart disease. The health impacts may be experienced even during light physical activity.",
];

static ADVISORY: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&INDEX, &EFFECTS, &EFFECTS, &LEVELS));

static PM10_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 50.0, 0.0, 50.0),
        (51.0, 100.0, 51.0, 100.0),
        (101.0, 250.0, 101.0, 250.0),
        (251.0, 350.0, 251.0, 350.0),
        (351.0, 429.0, 351.0, 400.0),
        (430.0, 430.0, 401.0, 500.0),
    ])
});

static PM25_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 30.0, 0.0, 50.0),
        (31.0, 60.0, 51.0, 100.0),
        (61.0, 90.0, 101.0, 250.0),
        (91.0, 120.0, 251.0, 350.0),
        (121.0, 249.0, 351.0, 400.0),
        (250.0, 250.0, 401.0, 500.0),
    ])
});

static NO2_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 21.0, 0.0, 50.0),
        (22.0, 42.0, 51.0, 100.0),
        (43.0, 95.0, 101.0, 250.0),
        (96.0, 148.0, 251.0, 350.0),
        (149.0, 212.0, 351.0, 400.0),
        (213.0, 213.0, 401.0, 500.0),
    ])
});

static O3_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 25.0, 0.0, 50.0),
        (26.0, 50.0, 51.0, 100.0),
        (51.0, 84.0, 101.0, 250.0),
        (85.0, 104.0, 251.0, 350.0),
        (105.0, 373.0, 351.0, 400.0),
        (374.0, 374.0, 401.0, 500.0),
    ])
});

static CO_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 0.9, 0.0, 50.0),
        (1.0, 1.7, 51.0, 100.0),
        (1.8, 8.6, 101.0, 250.0),
        (8.7, 14.7, 251.0, 350.0),
        (14.8, 29.6, 351.0, 400.0),
        (29.7, 29.7, 401.0, 500.0),
    ])
});

static SO2_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 15.0, 0.0, 50.0),
        (16.0, 30.0, 51.0, 100.0),
        (31.0, 144.0, 101.0, 250.0),
        (145.0, 305.0, 251.0, 350.0),
        (306.0, 610.0, 351.0, 400.0),
        (611.0, 611.0, 401.0, 500.0),
    ])
});

static NH3_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 287.0, 0.0, 50.0),
        (288.0, 574.0, 51.0, 100.0),
        (575.0, 1148.0, 101.0, 250.0),
        (1149.0, 1721.0, 251.0, 350.0),
        (1722.0, 2581.0, 351.0, 400.0),
        (2582.0, 2582.0, 401.0, 500.0),
    ])
});

static PB_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 0.058, 0.0, 50.0),
        (0.059, 0.129, 51.0, 100.0),
        (0.130, 0.247, 101.0, 250.0),
        (0.248, 0.365, 251.0, 350.0),
        (0.366, 0.412, 351.0, 400.0),
        (0.413, 0.413, 401.0, 500.0),
    ])
});

/// O3 (8h) India AQI, concentration in ppm
pub fn o3_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &O3_8H, &ADVISORY)
}

/// CO (8h) India AQI, concentration in ppm
pub fn co_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 1), &CO_8H, &ADVISORY)
}

/// NO2 (24h) India AQI, concentration in ppm
pub fn no2_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &NO2_24H, &ADVISORY)
}

/// SO2 (24h) India AQI, concentration in ppm
pub fn so2_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &SO2_24H, &ADVISORY)
}

/// NH3 (24h) India AQI, concentration in ppm
pub fn nh3_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &NH3_24H, &ADVISORY)
}

/// Pb (24h) India AQI, concentration in ppm
pub fn pb_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 3), &PB_24H, &ADVISORY)
}

/// PM2.5 (24h) India AQI, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM25_24H, &ADVISORY)
}

/// PM10 (24h) India AQI, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM10_24H, &ADVISORY)
}

/// Level label for an India AQI value
pub fn level(index: u32) -> Option<&'static str> {
    ADVISORY.level_for(index)
}

/// Raw pollutant readings for the India aggregate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (8h), ppm
    pub o3_8h: Option<f64>,
    /// CO average (8h), ppm
    pub co_8h: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
    /// SO2 average (24h), ppm
    pub so2_24h: Option<f64>,
    /// NO2 average (24h), ppm
    pub no2_24h: Option<f64>,
    /// NH3 average (24h), ppm
    pub nh3_24h: Option<f64>,
    /// Pb average (24h), ppm
    pub pb_24h: Option<f64>,
}

/// India AQI: maximum of the scored sub-indices
pub fn aqi(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.o3_8h {
        record(&mut pollutants, "o3_8h", o3_8h(c));
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
    if let Some(c) = readings.so2_24h {
        record(&mut pollutants, "so2_24h", so2_24h(c));
    }
    if let Some(c) = readings.no2_24h {
        record(&mut pollutants, "no2_24h", no2_24h(c));
    }
    if let Some(c) = readings.nh3_24h {
        record(&mut pollutants, "nh3_24h", nh3_24h(c));
    }
    if let Some(c) = readings.pb_24h {
        record(&mut pollutants, "pb_24h", pb_24h(c));
    }
    summarize(pollutants, level)
}
