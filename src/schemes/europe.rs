//! CAQI Europe
//!
//! Source: <https://www.airqualitynow.eu/download/CITEAIR-Comparing_Urban_Air_Quality_across_Borders.pdf>
//!
//! The CAQI grid defines level labels but no advisory wording; sub-indices
//! carry empty texts.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::core::{AdvisoryScale, BreakpointScale, Result, SubIndex};
use crate::schemes::{advisory, record, scale, scored, summarize, AqiSummary};
use crate::scoring::truncate;

const INDEX: [(f64, f64); 5] = [
    (0.0, 24.0),
    (25.0, 49.0),
    (50.0, 74.0),
    (75.0, 99.0),
    (100.0, 100.0),
];

const LEVELS: [&str; 5] = ["very low", "low", "medium", "high", "very high"];

static ADVISORY: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&INDEX, &[], &[], &LEVELS));

static NO2_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 26.0, 0.0, 24.0),
        (27.0, 52.0, 25.0, 49.0),
        (53.0, 105.0, 50.0, 74.0),
        (106.0, 212.0, 75.0, 99.0),
        (213.0, 213.0, 100.0, 100.0),
    ])
});

static PM10_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 24.0, 0.0, 24.0),
        (25.0, 49.0, 25.0, 49.0),
        (50.0, 89.0, 50.0, 74.0),
        (90.0, 179.0, 75.0, 99.0),
        (180.0, 180.0, 100.0, 100.0),
    ])
});

static PM10_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 14.0, 0.0, 24.0),
        (15.0, 29.0, 25.0, 49.0),
        (30.0, 49.0, 50.0, 74.0),
        (50.0, 99.0, 75.0, 99.0),
        (100.0, 100.0, 100.0, 100.0),
    ])
});

static PM25_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 14.0, 0.0, 24.0),
        (15.0, 29.0, 25.0, 49.0),
        (30.0, 54.0, 50.0, 74.0),
        (55.0, 109.0, 75.0, 99.0),
        (110.0, 110.0, 100.0, 100.0),
    ])
});

static PM25_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 9.0, 0.0, 24.0),
        (10.0, 19.0, 25.0, 49.0),
        (20.0, 29.0, 50.0, 74.0),
        (30.0, 59.0, 75.0, 99.0),
        (60.0, 60.0, 100.0, 100.0),
    ])
});

static O3_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 29.0, 0.0, 24.0),
        (30.0, 59.0, 25.0, 49.0),
        (60.0, 89.0, 50.0, 74.0),
        (90.0, 119.0, 75.0, 99.0),
        (120.0, 120.0, 100.0, 100.0),
    ])
});

static CO_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 4.3, 0.0, 24.0),
        (4.4, 6.5, 25.0, 49.0),
        (6.6, 8.6, 50.0, 74.0),
        (8.7, 17.4, 75.0, 99.0),
        (17.5, 17.5, 100.0, 100.0),
    ])
});

static SO2_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 18.0, 0.0, 24.0),
        (19.0, 37.0, 25.0, 49.0),
        (38.0, 133.0, 50.0, 74.0),
        (134.0, 190.0, 75.0, 99.0),
        (191.0, 191.0, 100.0, 100.0),
    ])
});

/// NO2 (1h) CAQI Europe, concentration in ppm
pub fn no2_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &NO2_1H, &ADVISORY)
}

/// SO2 (1h) CAQI Europe, concentration in ppm
pub fn so2_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &SO2_1H, &ADVISORY)
}

/// O3 (1h) CAQI Europe, concentration in ppm
pub fn o3_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration * 1000.0, 0), &O3_1H, &ADVISORY)
}

/// CO (8h) CAQI Europe, concentration in ppm
pub fn co_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 1), &CO_8H, &ADVISORY)
}

/// PM2.5 (1h) CAQI Europe, concentration in µg/m³
pub fn pm25_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM25_1H, &ADVISORY)
}

/// PM2.5 (24h) CAQI Europe, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM25_24H, &ADVISORY)
}

/// PM10 (1h) CAQI Europe, concentration in µg/m³
pub fn pm10_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM10_1H, &ADVISORY)
}

/// PM10 (24h) CAQI Europe, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 0), &PM10_24H, &ADVISORY)
}

/// Level label for a CAQI value
pub fn level(index: u32) -> Option<&'static str> {
    ADVISORY.level_for(index)
}

/// Raw pollutant readings for the CAQI aggregate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// CO average (8h), ppm
    pub co_8h: Option<f64>,
    /// O3 average (1h), ppm
    pub o3_1h: Option<f64>,
    /// NO2 average (1h), ppm
    pub no2_1h: Option<f64>,
    /// PM2.5 average (1h), µg/m³
    pub pm25_1h: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (1h), µg/m³
    pub pm10_1h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
    /// SO2 average (1h), ppm
    pub so2_1h: Option<f64>,
}

/// CAQI Europe: maximum of the scored sub-indices
pub fn caqi(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.no2_1h {
        record(&mut pollutants, "no2_1h", no2_1h(c));
    }
    if let Some(c) = readings.so2_1h {
        record(&mut pollutants, "so2_1h", so2_1h(c));
    }
    if let Some(c) = readings.o3_1h {
        record(&mut pollutants, "o3_1h", o3_1h(c));
    }
    if let Some(c) = readings.co_8h {
        record(&mut pollutants, "co_8h", co_8h(c));
    }
    if let Some(c) = readings.pm25_1h {
        record(&mut pollutants, "pm25_1h", pm25_1h(c));
    }
    if let Some(c) = readings.pm25_24h {
        record(&mut pollutants, "pm25_24h", pm25_24h(c));
    }
    if let Some(c) = readings.pm10_1h {
        record(&mut pollutants, "pm10_1h", pm10_1h(c));
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
        for scale in [
            &NO2_1H, &PM10_1H, &PM10_24H, &PM25_1H, &PM25_24H, &O3_1H, &CO_8H, &SO2_1H,
        ] {
            assert_band_continuity(scale);
        }
    }

    #[test]
    fn sub_indices_carry_no_texts() {
        let sub = o3_1h(0.05).unwrap();
        assert_eq!(sub.general, "");
        assert_eq!(sub.sensitive, "");
    }

    #[test]
    fn levels_cover_the_scale() {
        assert_eq!(level(0), Some("very low"));
        assert_eq!(level(65), Some("medium"));
        assert_eq!(level(100), Some("very high"));
    }
}
