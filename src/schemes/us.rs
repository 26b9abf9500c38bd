//! US AQI
//!
//! Source: <https://www.airnow.gov/sites/default/files/2018-05/aqi-technical-assistance-document-may2016.pdf>

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
    (201.0, 300.0),
    (301.0, 500.0),
];

const LEVELS: [&str; 6] = [
    "good",
    "moderate",
    "unhealthy for sensitive groups",
    "unhealthy",
    "very unhealthy",
    "hazardous",
];

static OZONE_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    // 1-hour ozone does not define AQI values below 101
    scale(&[
        (0.125, 0.164, 101.0, 150.0),
        (0.165, 0.204, 151.0, 200.0),
        (0.205, 0.404, 201.0, 300.0),
        (0.405, 0.604, 301.0, 500.0),
    ])
});

static OZONE_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    // 8-hour ozone does not define AQI values above 300
    scale(&[
        (0.0, 0.054, 0.0, 50.0),
        (0.055, 0.070, 51.0, 100.0),
        (0.071, 0.085, 101.0, 150.0),
        (0.086, 0.105, 151.0, 200.0),
        (0.106, 0.200, 201.0, 300.0),
    ])
    .with_cap(300)
});

static CO_8H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 4.4, 0.0, 50.0),
        (4.5, 9.4, 51.0, 100.0),
        (9.5, 12.4, 101.0, 150.0),
        (12.5, 15.4, 151.0, 200.0),
        (15.5, 30.4, 201.0, 300.0),
        (30.5, 50.4, 301.0, 500.0),
    ])
});

static PM25_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 12.0, 0.0, 50.0),
        (12.1, 35.4, 51.0, 100.0),
        (35.5, 55.4, 101.0, 150.0),
        (55.5, 150.4, 151.0, 200.0),
        (150.5, 250.4, 201.0, 300.0),
        (250.5, 500.4, 301.0, 500.0),
    ])
});

static PM10_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 54.0, 0.0, 50.0),
        (55.0, 154.0, 51.0, 100.0),
        (155.0, 254.0, 101.0, 150.0),
        (255.0, 354.0, 151.0, 200.0),
        (355.0, 424.0, 201.0, 300.0),
        (425.0, 604.0, 301.0, 500.0),
    ])
});

static SO2_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    // 1-hour SO2 does not define AQI values above 200
    scale(&[
        (0.0, 35.0, 0.0, 50.0),
        (36.0, 75.0, 51.0, 100.0),
        (76.0, 185.0, 101.0, 150.0),
        (186.0, 304.0, 151.0, 200.0),
    ])
    .with_cap(200)
});

static SO2_24H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 35.0, 0.0, 50.0),
        (36.0, 75.0, 51.0, 100.0),
        (76.0, 185.0, 101.0, 150.0),
        (186.0, 304.0, 151.0, 200.0),
        (305.0, 604.0, 201.0, 300.0),
        (605.0, 1004.0, 301.0, 500.0),
    ])
});

static NO2_1H: Lazy<BreakpointScale> = Lazy::new(|| {
    scale(&[
        (0.0, 53.0, 0.0, 50.0),
        (54.0, 100.0, 51.0, 100.0),
        (101.0, 360.0, 101.0, 150.0),
        (361.0, 649.0, 151.0, 200.0),
        (650.0, 1249.0, 201.0, 300.0),
        (1250.0, 2049.0, 301.0, 500.0),
    ])
});

const OZONE_EFFECTS: [&str; 6] = [
    "",
    "Unusually sensitive individuals may experience respiratory symptoms.",
    "Increasing likelihood of respiratory symptoms and breathing discomfort in people with lung disease (such as asthma), children, older adults, people who are active outdoors (including outdoor workers), people with certain genetic variants, and people with diets limited in certain nutrients.",
    "Greater likelihood of respiratory symptoms and breathing in people with lung disease (such as asthma), children, older adults, people who are active outdoors (including outdoor workers), people with certain genetic variants, and people with diets limited in certain nutrients; possible respiratory effects in general population.",
    "Increasingly severe symptoms and impaired breathing likely in people with lung disease (such as asthma), children, older adults, people who are active outdoors (including outdoor workers), people with certain genetic variants, and people with diets limited in certain nutrients; increasing likelihood of respiratory effects in general population.",
    "Severe respiratory effects and impaired breathing likely in people with lung disease (such as asthma), children, older adults, people who are active outdoors (including outdoor workers), people with certain genetic variants, and people with diets limited in certain nutrients; increasingly severe respiratory effects likely in general population.",
];

const OZONE_CAUTIONS: [&str; 6] = [
    "",
    "Unusually sensitive people should consider reducing prolonged or heavy outdoor exertion.",
    "People with lung disease (such as asthma), children, older adults, people who are active outdoors (including outdoor workers), people with certain genetic variants, and people with diets limited in certain nutrients should reduce prolonged or heavy outdoor exertion.",
    "People with lung disease (such as asthma), children, older adults, people who are active outdoors (including outdoor workers), people with certain genetic variants, and people with diets limited in certain nutrients should avoid prolonged or heavy outdoor exertion; everyone else should reduce prolonged or heavy outdoor exertion",
    "People with lung disease (such as asthma), children, older adults, people who are active outdoors (including outdoor workers), people with certain genetic variants, and people with diets limited in certain nutrients should avoid all outdoor exertion; everyone else should reduce outdoor exertion.",
    "Everyone should avoid all outdoor exertion.",
];

const PM_EFFECTS: [&str; 6] = [
    "",
    "Respiratory symptoms possible in unusually sensitive individuals; possible aggravation of heart or lung disease in people with cardiopulmonary disease and older adults.",
    "Increasing likelihood of respiratory symptoms in sensitive groups including older adults, children, and people of lower socioeconomic status; aggravation of heart or lung disease and premature mortality in people with heart or lung disease.",
    "Increased aggravation of respiratory symptoms in sensitive groups including older adults, children, and people of lower socioeconomic status; increased aggravation of heart or lung disease and premature mortality in people with heart or lung disease; increased respiratory effects in general population.",
    "Significant aggravation of respiratory symptoms in sensitive groups including older adults, children, and people of lower socioeconomic status; significant aggravation of heart or lung disease and premature mortality in people with heart or lung disease; significant increase in respiratory effects in general population.",
    "Serious aggravation of respiratory symptoms in sensitive groups including older adults, children, and people of lower socioeconomic status; serious aggravation of heart or lung disease and premature mortality in people with heart or lung disease; serious risk of respiratory effects in general population.",
];

const PM_CAUTIONS: [&str; 6] = [
    "",
    "Unusually sensitive people should consider reducing prolonged or heavy exertion.",
    "People with heart or lung disease, older adults, children, and people of lower socioeconomic status should reduce prolonged or heavy exertion",
    "People with heart or lung disease, older adults, children, and people of lower socioeconomic status should avoid prolonged or heavy exertion; everyone else should reduce prolonged or heavy exertion.",
    "People with heart or lung disease, older adults, children, and people of lower socioeconomic status should avoid all physical activity outdoors. Everyone else should avoid prolonged or heavy exertion.",
    "Everyone should avoid all physical activity outdoors; people with heart or lung disease, older adults, children, and people of lower socioeconomic status should remain indoors and keep activity levels low.",
];

const CO_EFFECTS: [&str; 6] = [
    "",
    "",
    "Increasing likelihood of reduced exercise tolerance due to increased cardiovascular symptoms, such as chest pain, in people with heart disease.",
    "Reduced exercise tolerance due to increased cardiovascular symptoms, such as chest pain, in people with heart disease.",
    "Significant aggravation of cardiovascular symptoms, such as chest pain, in people with heart disease.",
    "Serious aggravation of cardiovascular symptoms, such as chest pain, in people with heart disease; impairment of strenuous activities in general population.",
];

const CO_CAUTIONS: [&str; 6] = [
    "",
    "",
    "People with heart disease, such as angina, should limit heavy exertion and avoid sources of CO, such as heavy traffic.",
    "People with heart disease, such as angina, should limit moderate exertion and avoid sources of CO, such as heavy traffic.",
    "People with heart disease, such as angina, should avoid exertion and sources of CO, such as heavy traffic.",
    "People with heart disease, such as angina, should avoid exertion and sources of CO, such as heavy traffic; everyone else should limit heavy exertion.",
];

const SO2_EFFECTS: [&str; 6] = [
    "",
    "",
    "Increasing likelihood of respiratory symptoms, such as chest tightness and breathing discomfort, in people with asthma.",
    "Increased respiratory symptoms, such as chest tightness and wheezing in people with asthma; possible aggravation of other lung diseases.",
    "Significant increase in respiratory symptoms, such as wheezing and shortness of breath, in people with asthma; aggravation of other lung diseases.",
    "Severe respiratory symptoms, such as wheezing and shortness of breath, in people with asthma; increased aggravation of other lung diseases; possible respiratory effects in general population.",
];

const SO2_CAUTIONS: [&str; 6] = [
    "",
    "",
    "People with asthma should consider limiting outdoor exertion.",
    "Children, people with asthma, or other lung diseases, should limit outdoor exertion.",
    "Children, people with asthma, or other lung diseases should avoid outdoor exertion; everyone else should reduce outdoor exertion.",
    "Children, people with asthma, or other lung diseases, should remain indoors; everyone else should avoid outdoor exertion.",
];

const NO2_EFFECTS: [&str; 6] = [
    "",
    "",
    "Increasing likelihood of respiratory symptoms, such as chest tightness and breathing discomfort, in people with asthma.",
    "Increased respiratory symptoms, such as chest tightness and wheezing in people with asthma; possible aggravation of other lung diseases.",
    "Significant increase in respiratory symptoms, such as wheezing and shortness of breath, in people with asthma; aggravation of other lung diseases.",
    "Severe respiratory symptoms, such as wheezing and shortness of breath, in people with asthma; increased aggravation of other lung diseases; possible respiratory effects in general population.",
];

const NO2_CAUTIONS: [&str; 6] = [
    "",
    "Unusually sensitive individuals should consider limiting prolonged exertion especially near busy roads.",
    "People with asthma, children and older adults should limit prolonged exertion especially near busy roads.",
    "People with asthma, children and older adults should avoid prolonged exertion near roadways; everyone else should limit prolonged exertion especially near busy roads.",
    "People with asthma, children and older adults should avoid all outdoor exertion; everyone else should avoid prolonged exertion especially near busy roads.",
    "People with asthma, children and older adults should remain indoors; everyone else should avoid all outdoor exertion.",
];

static OZONE_ADVISORY: Lazy<AdvisoryScale> =
    Lazy::new(|| advisory(&INDEX, &OZONE_EFFECTS, &OZONE_CAUTIONS, &LEVELS));
static PM_ADVISORY: Lazy<AdvisoryScale> =
    Lazy::new(|| advisory(&INDEX, &PM_EFFECTS, &PM_CAUTIONS, &LEVELS));
static CO_ADVISORY: Lazy<AdvisoryScale> =
    Lazy::new(|| advisory(&INDEX, &CO_EFFECTS, &CO_CAUTIONS, &LEVELS));
static SO2_ADVISORY: Lazy<AdvisoryScale> =
    Lazy::new(|| advisory(&INDEX, &SO2_EFFECTS, &SO2_CAUTIONS, &LEVELS));
static NO2_ADVISORY: Lazy<AdvisoryScale> =
    Lazy::new(|| advisory(&INDEX, &NO2_EFFECTS, &NO2_CAUTIONS, &LEVELS));

/// O3 (1h) US AQI, concentration in ppm
pub fn o3_1h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 3), &OZONE_1H, &OZONE_ADVISORY)
}

/// O3 (8h) US AQI, concentration in ppm
pub fn o3_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 3), &OZONE_8H, &OZONE_ADVISORY)
}

/// CO (8h) US AQI, concentration in ppm
pub fn co_8h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 1), &CO_8H, &CO_ADVISORY)
}

/// PM2.5 (24h) US AQI, concentration in µg/m³
pub fn pm25_24h(concentration: f64) -> Result<SubIndex> {
    scored(truncate(concentration, 1), &PM25_24H, &PM_ADVISORY)
}

/// PM10 (24h) US AQI, concentration in µg/m³
pub fn pm10_24h(concentration: f64) -> Result<SubIndex> {
    scored(concentration.round(), &PM10_24H, &PM_ADVISORY)
}

/// SO2 (1h) US AQI, concentration in ppm
pub fn so2_1h(concentration: f64) -> Result<SubIndex> {
    scored((concentration * 1000.0).round(), &SO2_1H, &SO2_ADVISORY)
}

/// SO2 (24h) US AQI, concentration in ppm
pub fn so2_24h(concentration: f64) -> Result<SubIndex> {
    scored((concentration * 1000.0).round(), &SO2_24H, &SO2_ADVISORY)
}

/// NO2 (1h) US AQI, concentration in ppm
pub fn no2_1h(concentration: f64) -> Result<SubIndex> {
    scored((concentration * 1000.0).round(), &NO2_1H, &NO2_ADVISORY)
}

/// Level label for a US AQI value
pub fn level(index: u32) -> Option<&'static str> {
    OZONE_ADVISORY.level_for(index)
}

/// Raw pollutant readings for the US aggregate. `None` means no measurement
/// was taken; a reading of zero is still a reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// CO average (8h), ppm
    pub co_8h: Option<f64>,
    /// O3 average (1h), ppm
    pub o3_1h: Option<f64>,
    /// O3 average (8h), ppm
    pub o3_8h: Option<f64>,
    /// NO2 average (1h), ppm
    pub no2_1h: Option<f64>,
    /// PM2.5 average (24h), µg/m³
    pub pm25_24h: Option<f64>,
    /// PM10 average (24h), µg/m³
    pub pm10_24h: Option<f64>,
    /// SO2 average (1h), ppm
    pub so2_1h: Option<f64>,
    /// SO2 average (24h), ppm
    pub so2_24h: Option<f64>,
}

/// US AQI: maximum of the scored sub-indices
pub fn aqi(readings: &Readings) -> AqiSummary {
    let mut pollutants = BTreeMap::new();
    if let Some(c) = readings.co_8h {
        record(&mut pollutants, "co_8h", co_8h(c));
    }
    if let Some(c) = readings.o3_1h {
        record(&mut pollutants, "o3_1h", o3_1h(c));
    }
    if let Some(c) = readings.o3_8h {
        record(&mut pollutants, "o3_8h", o3_8h(c));
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
    if let Some(c) = readings.so2_1h {
        record(&mut pollutants, "so2_1h", so2_1h(c));
    }
    if let Some(c) = readings.so2_24h {
        record(&mut pollutants, "so2_24h", so2_24h(c));
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
            &OZONE_1H, &OZONE_8H, &CO_8H, &PM25_24H, &PM10_24H, &SO2_1H, &SO2_24H, &NO2_1H,
        ] {
            assert_band_continuity(scale);
        }
        for advisory in [
            &OZONE_ADVISORY,
            &PM_ADVISORY,
            &CO_ADVISORY,
            &SO2_ADVISORY,
            &NO2_ADVISORY,
        ] {
            assert_eq!(advisory.texts_for(0).0, "");
        }
    }

    #[test]
    fn levels_cover_the_scale() {
        assert_eq!(level(0), Some("good"));
        assert_eq!(level(126), Some("unhealthy for sensitive groups"));
        assert_eq!(level(500), Some("hazardous"));
        assert_eq!(level(501), None);
    }
}
