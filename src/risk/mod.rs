//! Added-risk accumulation for the health-index schemes.
//!
//! Canada's and Hong Kong's AQHI do not interpolate: each pollutant
//! contributes an exponential "added risk" percentage, contributions are
//! summed (with a max over the particulate pair), and the aggregate maps
//! onto a small discrete index by one of two historical strategies.

use serde::Serialize;

use crate::core::Band;

/// Exponential added-risk contribution of a single pollutant:
/// `(e^(beta * concentration) - 1) * 100`
pub fn added_risk(beta: f64, concentration: f64) -> f64 {
    ((beta * concentration).exp() - 1.0) * 100.0
}

/// 1-based rank of the first band whose high bound covers the value;
/// above every band saturates to the last rank. A value in a crack
/// between bands ranks with the band above it.
pub fn band_rank(value: f64, bands: &[Band]) -> u32 {
    for (i, band) in bands.iter().enumerate() {
        if value <= band.high {
            return (i + 1) as u32;
        }
    }
    bands.len() as u32
}

/// Strategy mapping an aggregate added risk onto a discrete index.
///
/// Both variants exist among historical renditions of the health-index
/// formula; schemes pick one as configuration rather than code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RiskBanding {
    /// Round the aggregate to the nearest integer and clamp into `[1, max]`
    /// (Canada).
    RoundClamp { max: u32 },
    /// Rank of the band containing the aggregate (Hong Kong's eleven
    /// added-risk bands).
    Containment { bands: Vec<Band> },
}

impl RiskBanding {
    pub fn index_for(&self, aggregate: f64) -> u32 {
        match self {
            RiskBanding::RoundClamp { max } => (aggregate.round() as u32).clamp(1, *max),
            RiskBanding::Containment { bands } => band_rank(aggregate, bands),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_risk_is_zero_at_zero_concentration() {
        assert_eq!(added_risk(0.000537, 0.0), 0.0);
    }

    #[test]
    fn added_risk_grows_with_concentration() {
        let low = added_risk(0.000487, 10.0);
        let high = added_risk(0.000487, 100.0);
        assert!(low > 0.0);
        assert!(high > low);
        assert!((added_risk(0.000487, 100.0) - 4.990_533).abs() < 1e-4);
    }

    #[test]
    fn round_clamp_floors_at_one_and_saturates_at_max() {
        let banding = RiskBanding::RoundClamp { max: 11 };
        assert_eq!(banding.index_for(0.0), 1);
        assert_eq!(banding.index_for(0.4), 1);
        assert_eq!(banding.index_for(5.8), 6);
        assert_eq!(banding.index_for(40.0), 11);
    }

    #[test]
    fn containment_ranks_bands_and_saturates() {
        let banding = RiskBanding::Containment {
            bands: vec![
                Band::new(0.0, 1.87),
                Band::new(1.88, 3.76),
                Band::new(3.76, 5.63),
            ],
        };
        assert_eq!(banding.index_for(0.0), 1);
        assert_eq!(banding.index_for(2.0), 2);
        assert_eq!(banding.index_for(5.0), 3);
        assert_eq!(banding.index_for(99.0), 3);
    }
}
