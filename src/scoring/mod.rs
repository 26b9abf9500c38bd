//! Breakpoint interpolation engine.
//!
//! One algorithm serves every table-driven scheme: locate the breakpoint
//! band enclosing a concentration and linearly map it onto the aligned
//! index band. Scheme differences live entirely in the tables.

use crate::core::{BreakpointScale, Error, Result};

/// Linearly maps a concentration onto a scheme's index scale.
///
/// - Below the first band: floor, index 0.
/// - Above the last band: the scale's saturation index (its cap when set,
///   otherwise the last row's index high bound).
/// - Inside a band: `(ihigh - ilow) / (high - low) * (c - low) + ilow`,
///   rounded half away from zero (`f64::round`), then clamped to the cap
///   when one is set.
/// - A value in a gap between bands scores against the band above it.
/// - A final zero-width sentinel row resolves to its index low bound
///   without dividing.
///
/// Scale validation guarantees no interior zero-width band, so the only
/// error left at call time is a non-finite concentration.
pub fn interpolate(concentration: f64, scale: &BreakpointScale) -> Result<u32> {
    if !concentration.is_finite() {
        return Err(Error::InvalidConcentration(concentration));
    }
    let rows = scale.rows();
    if concentration < rows[0].concentration.low {
        return Ok(0);
    }
    let Some(row) = rows
        .iter()
        .find(|row| concentration <= row.concentration.high)
    else {
        return Ok(scale.saturation_index());
    };
    let band = row.concentration;
    if band.width() == 0.0 {
        // final open-ended sentinel, the one zero-width row validation permits
        return Ok(row.index.low.round() as u32);
    }
    let raw = row.index.width() / band.width() * (concentration - band.low) + row.index.low;
    let mut value = raw.round() as u32;
    if let Some(cap) = scale.cap() {
        value = value.min(cap);
    }
    Ok(value)
}

/// Truncates a measurement to a scheme's reporting precision.
///
/// Truncation, not rounding: US ozone at 0.07853 ppm reports as 0.078.
pub fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Breakpoint;

    fn scale() -> BreakpointScale {
        BreakpointScale::new(vec![
            Breakpoint::new(0.0, 50.0, 0.0, 50.0),
            Breakpoint::new(51.0, 100.0, 51.0, 100.0),
            Breakpoint::new(101.0, 200.0, 101.0, 300.0),
        ])
        .unwrap()
    }

    #[test]
    fn interpolates_within_band() {
        assert_eq!(interpolate(150.0, &scale()).unwrap(), 199);
        assert_eq!(interpolate(25.0, &scale()).unwrap(), 25);
    }

    #[test]
    fn floors_below_first_band() {
        assert_eq!(interpolate(-3.0, &scale()).unwrap(), 0);
    }

    #[test]
    fn saturates_above_last_band() {
        assert_eq!(interpolate(10_000.0, &scale()).unwrap(), 300);
    }

    #[test]
    fn cap_clamps_saturation_and_interpolation() {
        let capped = BreakpointScale::new(scale().rows().to_vec())
            .unwrap()
            .with_cap(250);
        assert_eq!(interpolate(10_000.0, &capped).unwrap(), 250);
        assert_eq!(interpolate(200.0, &capped).unwrap(), 250);
        assert_eq!(interpolate(150.0, &capped).unwrap(), 199);
    }

    #[test]
    fn band_edges_map_exactly() {
        for row in scale().rows() {
            assert_eq!(
                interpolate(row.concentration.low, &scale()).unwrap(),
                row.index.low as u32
            );
            assert_eq!(
                interpolate(row.concentration.high, &scale()).unwrap(),
                row.index.high as u32
            );
        }
    }

    #[test]
    fn gap_value_scores_against_band_above() {
        assert_eq!(interpolate(50.5, &scale()).unwrap(), 51);
    }

    #[test]
    fn final_sentinel_row_resolves_without_dividing() {
        let sentinel = BreakpointScale::new(vec![
            Breakpoint::new(0.0, 249.0, 0.0, 400.0),
            Breakpoint::new(250.0, 250.0, 401.0, 500.0),
        ])
        .unwrap();
        assert_eq!(interpolate(250.0, &sentinel).unwrap(), 401);
        assert_eq!(interpolate(251.0, &sentinel).unwrap(), 500);
    }

    #[test]
    fn rejects_non_finite_concentration() {
        assert!(matches!(
            interpolate(f64::NAN, &scale()),
            Err(Error::InvalidConcentration(_))
        ));
        assert!(matches!(
            interpolate(f64::INFINITY, &scale()),
            Err(Error::InvalidConcentration(_))
        ));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // documents the crate-wide rounding convention
        let half = BreakpointScale::new(vec![Breakpoint::new(0.0, 10.0, 0.0, 5.0)]).unwrap();
        assert_eq!(interpolate(1.0, &half).unwrap(), 1); // 0.5 -> 1
        assert_eq!(interpolate(3.0, &half).unwrap(), 2); // 1.5 -> 2
        assert_eq!(interpolate(5.0, &half).unwrap(), 3); // 2.5 -> 3
    }

    #[test]
    fn truncates_to_reporting_precision() {
        assert_eq!(truncate(0.07853333, 3), 0.078);
        assert_eq!(truncate(78.53333, 0), 78.0);
        assert_eq!(truncate(5.0, 1), 5.0);
        assert_eq!(truncate(9.49, 1), 9.4);
    }
}
