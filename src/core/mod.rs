pub mod errors;

pub use errors::{Error, Result};

use serde::Serialize;

/// Inclusive numeric interval over a concentration or index domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    fn validate(&self) -> Result<()> {
        if self.low > self.high {
            return Err(Error::InvertedBand {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// One breakpoint row: a concentration band and the index band it maps onto.
///
/// Rows pair the two domains directly instead of relying on positional
/// alignment between separate tables, so a scale never needs zero-width
/// placeholder rows to keep short pollutant tables in step with the full
/// scheme index table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    pub concentration: Band,
    pub index: Band,
}

impl Breakpoint {
    pub const fn new(c_low: f64, c_high: f64, i_low: f64, i_high: f64) -> Self {
        Self {
            concentration: Band::new(c_low, c_high),
            index: Band::new(i_low, i_high),
        }
    }
}

/// Ordered, validated breakpoint rows for one pollutant on one scheme.
///
/// Construction enforces the table invariants, so a scale that reaches the
/// interpolator cannot divide by zero or scan out of order:
/// - at least one row;
/// - no inverted bands;
/// - concentration bands strictly ascending and disjoint;
/// - index bands ascending;
/// - a zero-width concentration band only as the final, open-ended sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakpointScale {
    rows: Vec<Breakpoint>,
    cap: Option<u32>,
}

impl BreakpointScale {
    pub fn new(rows: Vec<Breakpoint>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyScale);
        }
        let last = rows.len() - 1;
        for (i, row) in rows.iter().enumerate() {
            row.concentration.validate()?;
            row.index.validate()?;
            if row.concentration.width() == 0.0 && i != last {
                return Err(Error::DegenerateInterval {
                    low: row.concentration.low,
                    row: i,
                });
            }
            if i > 0 {
                let previous = &rows[i - 1];
                if row.concentration.low <= previous.concentration.high {
                    return Err(Error::UnorderedBands {
                        row: i,
                        low: row.concentration.low,
                        high: row.concentration.high,
                        previous_high: previous.concentration.high,
                    });
                }
                if row.index.low <= previous.index.high {
                    return Err(Error::UnorderedBands {
                        row: i,
                        low: row.index.low,
                        high: row.index.high,
                        previous_high: previous.index.high,
                    });
                }
            }
        }
        Ok(Self { rows, cap: None })
    }

    /// Cap the reported index. Some schemes stop defining index values for a
    /// pollutant/window below the scheme ceiling (US 8-hour ozone tops out at
    /// 300, US 1-hour SO2 at 200) while others saturate above their last row
    /// (China's scheme maximum of 300 sits past its last 8-hour ozone band).
    pub fn with_cap(mut self, cap: u32) -> Self {
        self.cap = Some(cap);
        self
    }

    pub fn rows(&self) -> &[Breakpoint] {
        &self.rows
    }

    pub fn cap(&self) -> Option<u32> {
        self.cap
    }

    /// Index reported for concentrations above the last band
    pub fn saturation_index(&self) -> u32 {
        let top = self.rows[self.rows.len() - 1].index.high.round() as u32;
        self.cap.unwrap_or(top)
    }
}

/// Index bands with positionally aligned advisory texts and level labels.
///
/// Text and level arrays may be empty (Europe's CAQI publishes no advisory
/// wording); when present they must align 1:1 with the bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryScale {
    bands: Vec<Band>,
    general: Vec<&'static str>,
    sensitive: Vec<&'static str>,
    levels: Vec<&'static str>,
}

impl AdvisoryScale {
    pub fn new(
        bands: Vec<Band>,
        general: Vec<&'static str>,
        sensitive: Vec<&'static str>,
        levels: Vec<&'static str>,
    ) -> Result<Self> {
        for (i, band) in bands.iter().enumerate() {
            band.validate()?;
            if i > 0 && band.low <= bands[i - 1].high {
                return Err(Error::UnorderedBands {
                    row: i,
                    low: band.low,
                    high: band.high,
                    previous_high: bands[i - 1].high,
                });
            }
        }
        for (what, entries) in [
            ("general", general.len()),
            ("sensitive", sensitive.len()),
            ("level", levels.len()),
        ] {
            if entries != 0 && entries != bands.len() {
                return Err(Error::MisalignedTexts {
                    what,
                    bands: bands.len(),
                    entries,
                });
            }
        }
        Ok(Self {
            bands,
            general,
            sensitive,
            levels,
        })
    }

    /// Advisory text pair for the band containing the index value; empty
    /// texts when the value sits outside every band or the scheme has none.
    pub fn texts_for(&self, index: u32) -> (&'static str, &'static str) {
        match self.band_position(index) {
            Some(i) if !self.general.is_empty() => (self.general[i], self.sensitive[i]),
            _ => ("", ""),
        }
    }

    /// Level label for the band containing the index value
    pub fn level_for(&self, index: u32) -> Option<&'static str> {
        self.band_position(index)
            .and_then(|i| self.levels.get(i).copied())
    }

    fn band_position(&self, index: u32) -> Option<usize> {
        let value = index as f64;
        self.bands.iter().position(|band| band.contains(value))
    }
}

/// Scored sub-index for a single pollutant reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubIndex {
    /// Index value on the scheme's scale
    pub value: u32,
    /// General-population advisory for the band the value landed in
    pub general: &'static str,
    /// Sensitive-group advisory for that band
    pub sensitive: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Breakpoint> {
        vec![
            Breakpoint::new(0.0, 50.0, 0.0, 50.0),
            Breakpoint::new(51.0, 100.0, 51.0, 100.0),
        ]
    }

    #[test]
    fn scale_rejects_empty_rows() {
        assert_eq!(BreakpointScale::new(vec![]), Err(Error::EmptyScale));
    }

    #[test]
    fn scale_rejects_inverted_band() {
        let result = BreakpointScale::new(vec![Breakpoint::new(10.0, 0.0, 0.0, 50.0)]);
        assert_eq!(
            result,
            Err(Error::InvertedBand {
                low: 10.0,
                high: 0.0
            })
        );
    }

    #[test]
    fn scale_rejects_interior_degenerate_interval() {
        let result = BreakpointScale::new(vec![
            Breakpoint::new(0.0, 0.0, 0.0, 50.0),
            Breakpoint::new(1.0, 10.0, 51.0, 100.0),
        ]);
        assert_eq!(result, Err(Error::DegenerateInterval { low: 0.0, row: 0 }));
    }

    #[test]
    fn scale_allows_final_sentinel_row() {
        let scale = BreakpointScale::new(vec![
            Breakpoint::new(0.0, 49.0, 0.0, 50.0),
            Breakpoint::new(50.0, 50.0, 51.0, 100.0),
        ]);
        assert!(scale.is_ok());
    }

    #[test]
    fn scale_rejects_overlapping_bands() {
        let result = BreakpointScale::new(vec![
            Breakpoint::new(0.0, 50.0, 0.0, 50.0),
            Breakpoint::new(50.0, 100.0, 51.0, 100.0),
        ]);
        assert!(matches!(result, Err(Error::UnorderedBands { row: 1, .. })));
    }

    #[test]
    fn saturation_prefers_cap_over_last_row() {
        let scale = BreakpointScale::new(rows()).unwrap();
        assert_eq!(scale.saturation_index(), 100);
        let capped = BreakpointScale::new(rows()).unwrap().with_cap(80);
        assert_eq!(capped.saturation_index(), 80);
    }

    #[test]
    fn advisory_rejects_misaligned_texts() {
        let result = AdvisoryScale::new(
            vec![Band::new(0.0, 50.0), Band::new(51.0, 100.0)],
            vec!["only one"],
            vec![],
            vec![],
        );
        assert_eq!(
            result,
            Err(Error::MisalignedTexts {
                what: "general",
                bands: 2,
                entries: 1
            })
        );
    }

    #[test]
    fn advisory_resolves_by_containment() {
        let advisory = AdvisoryScale::new(
            vec![Band::new(0.0, 50.0), Band::new(51.0, 100.0)],
            vec!["fine", "breezy"],
            vec!["fine", "stay in"],
            vec!["good", "moderate"],
        )
        .unwrap();
        assert_eq!(advisory.texts_for(70), ("breezy", "stay in"));
        assert_eq!(advisory.level_for(70), Some("moderate"));
        assert_eq!(advisory.texts_for(900), ("", ""));
        assert_eq!(advisory.level_for(900), None);
    }
}
