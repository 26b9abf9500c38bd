//! South Korea CAI
//!
//! Source: <http://www.airkorea.or.kr/eng/khaiInfo?pMENU_NO=166>
//!
//! The CAI publishes one advisory per band; both slots carry it.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::core::{AdvisoryScale, BreakpointScale, Result, SubIndex};
use crate::schemes::{advisory, record, scale, scored, summarize, AqiSummary};
use crate::scoring::truncate;

const INDEX: [(f64, f64); 4] = [(0.0, 50.0), (51.0, 100.0), (101.0, 250.0), (251.0, 500.0)];

const LEVELS: [&str; 4] = ["good", "moderate", "unhealthy", "very unhealthy"];

const GENERAL: [&str; 4] = [
    "A level that will not impact patients suffering from diseases related to air pollution",
    "A level which may have a meager impact on patients in case of chronic exposure",
    "A level that may have harmful impacts on patients and members of sensitive groups (children, aged or weak people), and also cause the general public unpleasant feelings",
    "A level which may need to take emergency measures for patients and members of sensitive groups and have harmful impacts on the general public",
];

static ADVISORY: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&INDEX, &GENERAL, &GENERAL, &LEVELS));

static O3_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 0.03, 0.0, 50.0),
        (0.031, 0.09, 51.0, 100.0),
        (0.091, 0.15, 101.0, 250.0),
        (0.151, 0.6, 251.0, 500.0),
    ])
});

static CO_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 2.0, 0.0, 50.0),
        (2.01, 9.0, 51.0, 100.0),
        (9.01, 15.0, 101.0, 250.0),
        (15.01, 50.0, 251.0, 500.0),
    ])
});

static SO2_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 0.02, 0.0, 50.0),
        (0.021, 0.05, 51.0, 100.0),
        (0.051, 0.15, 101.0, 250.0),
        (0.151, 1.0, 251.0, 500.0),
    ])
});

static NO2_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 0.03, 0.0, 50.0),
        (0.031, 0.06, 51.0, 100.0),
        (0.061, 0.2, 101.0, 250.0),
        (0.201, 2.0, 251.0, 500.0),
    ])
});

static PM25_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 15.0, 0.0, 50.0),
        (16.0, 35.0, 51.0, 100.0),
        (36.0, 75.0, 101.0, 250.0),
        (76.0, 500.0, 251.0, 500.0),
    ])
});

static PM10_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 30.0, 0.0, 50.0),
        (31.0, 80.0, 51.0, 100.0),
        (81.0, 150.0, 101.0, 250.0),
        (151.0, 600.0, 251.0, 500.0),
    ])
});

/// O3 (1h) South Korea CAI, concentration in ppm
pub fn o3_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 3), &O3_1H, &ADVISORY)
}

/// CO (1h) South Korea CAI, concentration in ppm
pub fn co_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 2), &CO_1H, &ADVISORY)
}

/// SO2 (1h) South Korea CAI, concentration in ppm
pub fn so2_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 3), &SO2_1H, &ADVISORY)
}

/// NO2 (1h) South Korea CAI, concentration in ppm
pub fn no2_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 3), &NO2_1H, &ADVISORY)
}

/// PM2.5 (24h) South Korea CAI, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM25_24H, &ADVISORY)
}

/// PM10 (24h) South Korea CAI, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM10_24H, &ADVISORY)
}

/// Level label for a South Korea CAI value
pub fn level(index: u32) -> Option<&'static str> {
    ADVISORY.level_for(index)
}

/// Raw pollutant readings for the South Korea aggregate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (1h), ppm
    pub o3_1h: Option<f64>,
    /// CO average (1h), ppm
    pub co_1h: Option<f64>,
    /// SO2 average (1h), ppm
    pub so2_1h: Option<f64>,
    /// NO2 average (1h), ppm
    pub no2_1h: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
}

/// South Korea CAI: maximum of the scored sub-indices
pub fn cai(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.o3_1h {
        record(&mut pollutants, "o3_1h", o3_1h(c));
    }
    if let Some(c) = readings.co_1h {
        record(&mut pollutants, "co_1h", co_1h(c));
    }
    if let Some(c) = readings.so2_1h {
        record(&mut pollutants, "so2_1h", so2_1h(c));
    }
    if let Some(c) = readings.no2_1h {
        record(&mut pollutants, "no2_1h", no2_1h(c));
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
        for scale in [&O3_1H, &CO_1H, &SO2_1H, &NO2_1H, &PM25_24H, &PM10_24H] {
            assert_band_continuity(scale);
        }
    }

    #[test]
    fn levels_cover_the_scale() {
        assert_eq!(level(0), Some("good"));
        assert_eq!(level(90), Some("moderate"));
        assert_eq!(level(500), Some("very unhealthy"));
    }
}
