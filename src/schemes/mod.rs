//! National air-quality index schemes.
//!
//! Each submodule vendors one authority's breakpoint tables, advisory
//! texts, and level labels, and exposes per-pollutant scoring functions
//! plus the scheme aggregate. The tables are data; the math lives in
//! [`crate::scoring`] and [`crate::risk`].

pub mod australia;
pub mod canada;
pub mod china;
pub mod europe;
pub mod hong_kong;
pub mod india;
pub mod singapore;
pub mod south_korea;
pub mod uk;
pub mod us;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{AdvisoryScale, Band, Breakpoint, BreakpointScale, Result, SubIndex};
use crate::scoring::interpolate;

/// Aggregate result for a max-of-sub-indices scheme.
///
/// `value` is `None` when no supplied reading could be scored, the
/// "index not available" case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AqiSummary {
    /// Overall index: maximum of the scored sub-indices
    pub value: Option<u32>,
    /// Scheme level label for the overall index
    pub level: Option<&'static str>,
    /// Scored sub-indices keyed by pollutant and averaging window
    pub pollutants: BTreeMap<&'static str, SubIndex>,
}

/// Aggregate result for the Canada / Hong Kong health-index schemes,
/// which report one index and one advisory pair rather than a
/// per-pollutant breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AqhiSummary {
    /// Health index, `None` when a required reading is missing
    pub value: Option<u32>,
    /// Scheme level label for the index
    pub level: Option<&'static str>,
    /// General-population advisory
    pub general: &'static str,
    /// Advisory for people at elevated risk
    pub sensitive: &'static str,
}

impl AqhiSummary {
    pub(crate) fn not_available() -> Self {
        Self {
            value: None,
            level: None,
            general: "",
            sensitive: "",
        }
    }
}

/// Builds a vendored breakpoint scale from
/// `(conc_low, conc_high, index_low, index_high)` rows.
pub(crate) fn scale(rows: &[(f64, f64, f64, f64)]) -> BreakpointScale {
    let rows = rows
        .iter()
        .map(|&(c_low, c_high, i_low, i_high)| Breakpoint::new(c_low, c_high, i_low, i_high))
        .collect();
    BreakpointScale::new(rows).expect("vendored breakpoint table is well-formed")
}

pub(crate) fn bands(rows: &[(f64, f64)]) -> Vec<Band> {
    rows.iter().map(|&(low, high)| Band::new(low, high)).collect()
}

/// Builds a vendored advisory scale; empty text/level slices are allowed.
pub(crate) fn advisory(
    index_bands: &[(f64, f64)],
    general: &[&'static str],
    sensitive: &[&'static str],
    levels: &[&'static str],
) -> AdvisoryScale {
    AdvisoryScale::new(
        bands(index_bands),
        general.to_vec(),
        sensitive.to_vec(),
        levels.to_vec(),
    )
    .expect("vendored advisory table is well-formed")
}

/// Scores one prepared concentration: interpolate, then resolve texts.
pub(crate) fn scored(
    concentration: f64,
    scale: &BreakpointScale,
    advisory: &AdvisoryScale,
) -> Result<SubIndex> {
    let value = interpolate(concentration, scale)?;
    let (general, sensitive) = advisory.texts_for(value);
    Ok(SubIndex {
        value,
        general,
        sensitive,
    })
}

/// Records a scored sub-index, or logs and skips a reading that could not
/// be scored so it cannot block the rest of the aggregate.
pub(crate) fn record(
    pollutants: &mut BTreeMap<&'static str, SubIndex>,
    key: &'static str,
    scored: Result<SubIndex>,
) {
    match scored {
        Ok(sub) => {
            pollutants.insert(key, sub);
        }
        Err(e) => log::warn!("{key} reading skipped: {e}"),
    }
}

/// Overall index and level from the collected sub-indices.
pub(crate) fn summarize(
    pollutants: BTreeMap<&'static str, SubIndex>,
    level_for: impl Fn(u32) -> Option<&'static str>,
) -> AqiSummary {
    let value = pollutants.values().map(|sub| sub.value).max();
    AqiSummary {
        value,
        level: value.and_then(level_for),
        pollutants,
    }
}

/// Test support: every breakpoint row must hit its index bounds exactly at
/// its concentration bounds (band continuity).
#[cfg(test)]
pub(crate) fn assert_band_continuity(scale: &BreakpointScale) {
    for row in scale.rows() {
        if row.concentration.width() == 0.0 {
            continue;
        }
        let low = interpolate(row.concentration.low, scale).unwrap();
        let high = interpolate(row.concentration.high, scale).unwrap();
        assert_eq!(low, row.index.low.round() as u32);
        let expected_high = match scale.cap() {
            Some(cap) => cap.min(row.index.high.round() as u32),
            None => row.index.high.round() as u32,
        };
        assert_eq!(high, expected_high);
    }
}
