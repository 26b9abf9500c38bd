//! Hong Kong AQHI
//!
//! Source: <https://www.aqhi.gov.hk/en/what-is-aqhi/faqs.html>
//!
//! Like Canada's AQHI but with five pollutants, µg/m³ conversion factors,
//! and eleven added-risk bands ranked by containment. The eleven advisory
//! texts align 1:1 with the ranks.

use once_cell::sync::Lazy;

use crate::core::AdvisoryScale;
use crate::risk::{added_risk, RiskBanding};
use crate::schemes::{advisory, bands, AqhiSummary};

const LEVEL_BANDS: [(f64, f64); 5] = [
    (1.0, 3.0),
    (4.0, 6.0),
    (7.0, 7.0),
    (8.0, 10.0),
    (11.0, 11.0),
];

const LEVELS: [&str; 5] = ["low", "moderate", "high", "very high", "serious"];

const GENERAL: [&str; 11] = [
    "No response action is required.",
    "No response action is required.",
    "No response action is required.",
    "No response action is required.",
    "No response action is required.",
    "No response action is required.",
    "No response action is required.",
    "The general public is advised to reduce outdoor physical exertion, and to reduce the time of their stay outdoors, especially in areas with heavy traffic.",
    "The general public is advised to reduce outdoor physical exertion, and to reduce the time of their stay outdoors, especially in areas with heavy traffic.",
    "The general public is advised to reduce outdoor physical exertion, and to reduce the time of their stay outdoors, especially in areas with heavy traffic.",
    "The general public is advised to reduce to the minimum outdoor physical exertion, and to reduce to the minimum the time of their stay outdoors, especially in areas with heavy traffic.",
];

// People with existing heart or respiratory illnesses
const RISK: [&str; 11] = [
    "No response action is required.",
    "No response action is required.",
    "No response action is required.",
    "No response action is normally required. Individuals who are experiencing symptoms are advised to consider reducing outdoor physical exertion.",
    "No response action is normally required. Individuals who are experiencing symptoms are advised to consider reducing outdoor physical exertion.",
    "No response action is normally required. Individuals who are experiencing symptoms are advised to consider reducing outdoor physical exertion.",
    "People with existing heart or respiratory illnesses are advised to reduce outdoor physical exertion, and to reduce the time of their stay outdoors, especially in areas with heavy traffic. They should also seek advice from a medical doctor before participating in sport activities and take more breaks during physical activities.",
    "People with existing heart or respiratory illnesses are advised to reduce to the minimum outdoor physical exertion, and to reduce to the minimum the time of their stay outdoors, especially in areas with heavy traffic.",
    "People with existing heart or respiratory illnesses are advised to reduce to the minimum outdoor physical exertion, and to reduce to the minimum the time of their stay outdoors, especially in areas with heavy traffic.",
    "People with existing heart or respiratory illnesses are advised to reduce to the minimum outdoor physical exertion, and to reduce to the minimum the time of their stay outdoors, especially in areas with heavy traffic.",
    "People with existing heart or respiratory illnesses are advised to avoid outdoor physical exertion, and to avoid staying outdoors, especially in areas with heavy traffic.",
];

static LEVEL_SCALE: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&LEVEL_BANDS, &[], &[], &LEVELS));

static BANDING: Lazy<RiskBanding> = Lazy::new(|| RiskBanding::Containment {
    bands: bands(&[
        (0.00, 1.87),
        (1.88, 3.76),
        (3.76, 5.63),
        (5.64, 7.51),
        (7.52, 9.40),
        (9.41, 11.28),
        (11.29, 12.90),
        (12.91, 15.06),
        (15.07, 17.21),
        (17.22, 19.36),
        (19.37, 19.37),
    ]),
});

const BETA_NO2: f64 = 0.0004462559;
const BETA_SO2: f64 = 0.0001393235;
const BETA_O3: f64 = 0.0005116328;
const BETA_PM10: f64 = 0.0002821751;
const BETA_PM25: f64 = 0.0002180567;

// ppb to µg/m³
const NO2_PPB_UGM3: f64 = 1.88;
const SO2_PPB_UGM3: f64 = 2.62;
const O3_PPB_UGM3: f64 = 2.0;

// the formula's SO2 term is calibrated against a nonzero station baseline
const SO2_BASELINE_PPM: f64 = 0.020;

/// Raw pollutant readings for the Hong Kong AQHI. All five are required;
/// any missing reading makes the index unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (3h), ppm
    pub o3_3h: Option<f64>,
    /// NO2 average (3h), ppm
    pub no2_3h: Option<f64>,
    /// SO2 average (3h), ppm
    pub so2_3h: Option<f64>,
    /// PM2.5 average (3h), µg/m³
    pub pm25_3h: Option<f64>,
    /// PM10 average (3h), µg/m³
    pub pm10_3h: Option<f64>,
}

/// Hong Kong AQHI
pub fn aqhi(readings: &Readings) -> AqhiSummary {
    let (Some(o3), Some(no2), Some(so2), Some(pm25), Some(pm10)) = (
        readings.o3_3h,
        readings.no2_3h,
        readings.so2_3h,
        readings.pm25_3h,
        readings.pm10_3h,
    ) else {
        return AqhiSummary::not_available();
    };
    if ![o3, no2, so2, pm25, pm10].iter().all(|c| c.is_finite()) {
        log::warn!("Hong Kong AQHI readings contain a non-finite concentration");
        return AqhiSummary::not_available();
    }
    let so2 = if so2 == 0.0 { SO2_BASELINE_PPM } else { so2 };
    let gases = added_risk(BETA_NO2, no2 * 1000.0 * NO2_PPB_UGM3)
        + added_risk(BETA_SO2, so2 * 1000.0 * SO2_PPB_UGM3)
        + added_risk(BETA_O3, o3 * 1000.0 * O3_PPB_UGM3);
    let particulates = added_risk(BETA_PM10, pm10).max(added_risk(BETA_PM25, pm25));
    let value = BANDING.index_for(gases + particulates);
    let slot = (value - 1) as usize;
    AqhiSummary {
        value: Some(value),
        level: LEVEL_SCALE.level_for(value),
        general: GENERAL.get(slot).copied().unwrap_or(""),
        sensitive: RISK.get(slot).copied().unwrap_or(""),
    }
}

/// Level label for a Hong Kong AQHI value
pub fn level(index: u32) -> Option<&'static str> {
    LEVEL_SCALE.level_for(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reading_makes_index_unavailable() {
        let summary = aqhi(&Readings::default());
        assert_eq!(summary.value, None);
    }

    #[test]
    fn zero_readings_floor_at_one() {
        let summary = aqhi(&Readings {
            o3_3h: Some(0.0),
            no2_3h: Some(0.0),
            so2_3h: Some(0.0),
            pm25_3h: Some(0.0),
            pm10_3h: Some(0.0),
        });
        assert_eq!(summary.value, Some(1));
        assert_eq!(summary.level, Some("low"));
    }

    #[test]
    fn texts_align_with_the_eleven_ranks() {
        assert_eq!(GENERAL.len(), 11);
        assert_eq!(RISK.len(), 11);
        match &*BANDING {
            RiskBanding::Containment { bands } => assert_eq!(bands.len(), 11),
            other => panic!("unexpected banding {other:?}"),
        }
    }
}
