//! Mainland China AQI
//!
//! Source: <https://core.ac.uk/download/pdf/38094372.pdf>

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::core::{AdvisoryScale, BreakpointScale, Result, SubIndex};
use crate::schemes::{advisory, record, scale, scored, summarize, AqiSummary};
use crate::scoring::truncate;

const INDEX: [(f64, f64); 6] = [
    (0.0, 50.0),
    (51.0, 100.0),
    (101.0, 150.0),
    (151.0, 200.0),
    (201.0, 299.0),
    (300.0, 300.0),
];

const LEVELS: [&str; 6] = [
    "excellent",
    "good",
    "lightly polluted",
    "moderately polluted",
    "heavily polluted",
    "severely polluted",
];

const EFFECTS: [&str; 6] = [
    "No health implications.",
    "Some pollutants may slightly affect very few hypersensitive individuals.",
    "Healthy people may experience slight irritations and sensitive individuals will be slightly affected to a larger extent.",
    "Sensitive individuals will experience more serious conditions. The hearts and respiratory systems of healthy people may be affected.",
    "Healthy people will commonly show symptoms. People with respiratory or heart diseases will be significantly affected and will experience reduced endurance in activities.",
    "Healthy people will experience reduced endurance in activities and may also show noticeably strong symptoms. Other illnesses may be triggered in healthy people. Elders and the sick should remain indoors and avoid exercise. Healthy individuals should avoid outdoor activities.",
];

const CAUTIONS: [&str; 6] = [
    "Everyone can continue their outdoor activities normally.",
    "Only very few hypersensitive people should reduce outdoor activities.",
    "Children, seniors and individuals with respiratory or heart diseases should reduce sustained and high-intensity outdoor exercises.",
    "Children, seniors and individuals with respiratory or heart diseases should avoid sustained and high-intensity outdoor exercises. General population should moderately reduce outdoor activities.",
    "Children, seniors and individuals with heart or lung diseases should stay indoors and avoid outdoor activities. General population should reduce outdoor activities.",
    "Children, seniors and the sick should stay indoors and avoid physical exertion. General population should avoid outdoor activities.",
];

static ADVISORY: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&INDEX, &EFFECTS, &CAUTIONS, &LEVELS));

static SO2_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 18.0, 0.0, 50.0),
        (19.0, 57.0, 51.0, 100.0),
        (58.0, 181.0, 101.0, 150.0),
        (182.0, 305.0, 151.0, 200.0),
        (306.0, 610.0, 201.0, 299.0),
        (611.0, 1000.0, 300.0, 300.0),
    ])
});

static NO2_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 21.0, 0.0, 50.0),
        (22.0, 42.0, 51.0, 100.0),
        (43.0, 95.0, 101.0, 150.0),
        (96.0, 148.0, 151.0, 200.0),
        (149.0, 300.0, 201.0, 299.0),
        (301.0, 500.0, 300.0, 300.0),
    ])
});

static CO_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 1.6, 0.0, 50.0),
        (1.7, 3.4, 51.0, 100.0),
        (3.5, 12.1, 101.0, 150.0),
        (12.2, 20.8, 151.0, 200.0),
        (20.9, 31.3, 201.0, 299.0),
        (31.4, 52.4, 300.0, 300.0),
    ])
});

static O3_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 80.0, 0.0, 50.0),
        (81.0, 100.0, 51.0, 100.0),
        (101.0, 150.0, 101.0, 150.0),
        (151.0, 200.0, 151.0, 200.0),
        (201.0, 400.0, 201.0, 299.0),
        (401.0, 600.0, 300.0, 300.0),
    ])
});

static O3_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    // 8-hour ozone stops at the fifth band; the scheme still saturates at 300
    scale(&[
        (0.0, 50.0, 0.0, 50.0),
        (51.0, 80.0, 51.0, 100.0),
        (81.0, 107.0, 101.0, 150.0),
        (108.0, 132.0, 151.0, 200.0),
        (133.0, 400.0, 201.0, 299.0),
    ])
    .with_cap(300)
});

static PM25_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 50.0, 0.0, 50.0),
        (51.0, 150.0, 51.0, 100.0),
        (151.0, 250.0, 101.0, 150.0),
        (251.0, 350.0, 151.0, 200.0),
        (351.0, 420.0, 201.0, 299.0),
        (421.0, 600.0, 300.0, 300.0),
    ])
});

static PM10_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 35.0, 0.0, 50.0),
        (36.0, 75.0, 51.0, 100.0),
        (76.0, 115.0, 101.0, 150.0),
        (116.0, 150.0, 151.0, 200.0),
        (151.0, 250.0, 201.0, 299.0),
        (251.0, 500.0, 300.0, 300.0),
    ])
});

/// O3 (1h) CN AQI, concentration in ppm
pub fn o3_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &O3_1H, &ADVISORY)
}

/// O3 (8h) CN AQI, concentration in ppm
pub fn o3_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &O3_8H, &ADVISORY)
}

/// CO (24h) CN AQI, concentration in ppm
pub fn co_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 1), &CO_24H, &ADVISORY)
}

/// PM2.5 (24h) CN AQI, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 1), &PM25_24H, &ADVISORY)
}

/// PM10 (24h) CN AQI, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    scored(concentration.round(), &PM10_24H, &ADVISORY)
}

/// SO2 (24h) CN AQI, concentration in ppm
pub fn so2_24h(concentration: f64) -> Result<SubIndex> {
    scored((concentration * 1000.0).round(), &SO2_24H, &ADVISORY)
}

/// NO2 (24h) CN AQI, concentration in ppm
pub fn no2_24h(concentration: f64) -> Result<SubIndex> {
    scored((concentration * 1000.0).round(), &NO2_24H, &ADVISORY)
}

/// Level label for a CN AQI value
pub fn level(index: u32) -> Option<&'static str> {
    ADVISORY.level_for(index)
}

/// Raw pollutant readings for the CN aggregate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (1h), ppm
    pub o3_1h: Option<f64>,
    /// O3 average (8h), ppm
    pub o3_8h: Option<f64>,
    /// CO average (24h), ppm
    pub co_24h: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
    /// SO2 average (24h), ppm
    pub so2_24h: Option<f64>,
    /// NO2 average (24h), ppm
    pub no2_24h: Option<f64>,
}

/// CN AQI: maximum of the scored sub-indices
pub fn aqi(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.o3_1h {
        record(&mut pollutants, "o3_1h", o3_1h(c));
    }
    if let Some(c) = readings.o3_8h {
        record(&mut pollutants, "o3_8h", o3_8h(c));
    }
    if let Some(c) = readings.co_24h {
        record(&mut pollutants, "co_24h", co_24h(c));
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
    summarize(pollutants, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::assert_band_continuity;

    #[test]
    fn tables_validate_and_are_continuous() {
        for scale in [
            &SO2_24H, &NO2_24H, &CO_24H, &O3_1H, &O3_8H, &PM25_24H, &PM10_24H,
        ] {
            assert_band_continuity(scale);
        }
    }

    #[test]
    fn levels_cover_the_scale() {
        assert_eq!(level(0), Some("excellent"));
        assert_eq!(level(97), Some("good"));
        assert_eq!(level(300), Some("severely polluted"));
    }
}
