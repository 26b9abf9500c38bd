//! Canada AQHI
//!
//! Source: <https://www.tandfonline.com/doi/pdf/10.3155/1047-3289.58.3.435>
//!
//! The AQHI is an added-risk scheme: O3, NO2 and one particulate each
//! contribute an exponential risk percentage, and the rounded sum is the
//! index. Both particulate variants are computed and the larger wins.

use once_cell::sync::Lazy;

use crate::core::AdvisoryScale;
use crate::risk::{added_risk, RiskBanding};
use crate::schemes::{advisory, AqhiSummary};

const INDEX: [(f64, f64); 4] = [(1.0, 3.0), (4.0, 6.0), (7.0, 10.0), (11.0, 11.0)];

const LEVELS: [&str; 4] = ["low", "moderate", "high", "very high"];

const GENERAL: [&str; 4] = [
    "Ideal air quality for outdoor activities.",
    "No need to modify your usual outdoor activities unless you experience symptoms such as coughing and throat irritation.",
    "Consider reducing or rescheduling strenuous activities outdoors if you experience symptoms such as coughing and throat irritation.",
    "Reduce or reschedule strenuous activities outdoors, especially if you experience symptoms such as coughing and throat irritation.",
];

// People with heart or breathing problems are at greater risk. Follow your
// doctor's usual advice about exercising and managing your condition.
const RISK: [&str; 4] = [
    "Enjoy your usual outdoor activities.",
    "Consider reducing or rescheduling strenuous activities outdoors if you are experiencing symptoms.",
    "Reduce or reschedule strenuous activities outdoors. Children and the elderly should also take it easy.",
    "Avoid strenuous activities outdoors. Children and the elderly should also avoid outdoor physical exertion.",
];

static ADVISORY: Lazy<AdvisoryScale> = Lazy::new(|| advisory(&INDEX, &GENERAL, &RISK, &LEVELS));

const BANDING: RiskBanding = RiskBanding::RoundClamp { max: 11 };

const BETA_O3: f64 = 0.000537;
const BETA_NO2: f64 = 0.000871;
const BETA_PM25: f64 = 0.000487;
const BETA_PM10: f64 = 0.000297;

/// Raw pollutant readings for the Canada AQHI. All four are required; any
/// missing reading makes the index unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// O3 average (3h), ppm
    pub o3_3h: Option<f64>,
    /// NO2 average (3h), ppm
    pub no2_3h: Option<f64>,
    /// PM2.5 average (3h), µg/m³
    pub pm25_3h: Option<f64>,
    /// PM10 average (3h), µg/m³
    pub pm10_3h: Option<f64>,
}

/// Canada AQHI
pub fn aqhi(readings: &Readings) -> AqhiSummary {
    let (Some(o3), Some(no2), Some(pm25), Some(pm10)) = (
        readings.o3_3h,
        readings.no2_3h,
        readings.pm25_3h,
        readings.pm10_3h,
    ) else {
        return AqhiSummary::not_available();
    };
    if ![o3, no2, pm25, pm10].iter().all(|c| c.is_finite()) {
        log::warn!("Canada AQHI readings contain a non-finite concentration");
        return AqhiSummary::not_available();
    }
    let gases = added_risk(BETA_O3, o3 * 1000.0) + added_risk(BETA_NO2, no2 * 1000.0);
    let with_pm25 = BANDING.index_for(gases + added_risk(BETA_PM25, pm25));
    let with_pm10 = BANDING.index_for(gases + added_risk(BETA_PM10, pm10));
    let value = with_pm25.max(with_pm10);
    let (general, sensitive) = ADVISORY.texts_for(value);
    AqhiSummary {
        value: Some(value),
        level: ADVISORY.level_for(value),
        general,
        sensitive,
    }
}

/// Level label for a Canada AQHI value
pub fn level(index: u32) -> Option<&'static str> {
    ADVISORY.level_for(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reading_makes_index_unavailable() {
        let summary = aqhi(&Readings {
            o3_3h: Some(0.015),
            ..Default::default()
        });
        assert_eq!(summary.value, None);
        assert_eq!(summary.general, "");
    }

    #[test]
    fn non_finite_reading_makes_index_unavailable() {
        let summary = aqhi(&Readings {
            o3_3h: Some(f64::NAN),
            no2_3h: Some(0.0),
            pm25_3h: Some(10.0),
            pm10_3h: Some(10.0),
        });
        assert_eq!(summary.value, None);
    }

    #[test]
    fn zero_readings_floor_at_one() {
        let summary = aqhi(&Readings {
            o3_3h: Some(0.0),
            no2_3h: Some(0.0),
            pm25_3h: Some(0.0),
            pm10_3h: Some(0.0),
        });
        assert_eq!(summary.value, Some(1));
        assert_eq!(summary.level, Some("low"));
    }
}
