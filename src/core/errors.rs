//! Shared error types for the crate

use thiserror::Error;

/// Main error type for aqimap operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Breakpoint scale constructed with no rows
    #[error("breakpoint scale has no rows")]
    EmptyScale,

    /// A band whose low bound exceeds its high bound
    #[error("inverted band [{low}, {high}]")]
    InvertedBand { low: f64, high: f64 },

    /// A zero-width concentration band anywhere but the final row.
    /// Interpolating inside such a band would divide by zero.
    #[error("degenerate interval [{low}, {low}] at row {row}")]
    DegenerateInterval { low: f64, row: usize },

    /// Bands that overlap or regress instead of ascending
    #[error("band [{low}, {high}] at row {row} overlaps previous high bound {previous_high}")]
    UnorderedBands {
        row: usize,
        low: f64,
        high: f64,
        previous_high: f64,
    },

    /// Advisory text or level arrays not aligned 1:1 with their index bands
    #[error("advisory table misaligned: {bands} bands but {entries} {what} entries")]
    MisalignedTexts {
        what: &'static str,
        bands: usize,
        entries: usize,
    },

    /// Concentration that is NaN or infinite
    #[error("concentration {0} is not a finite number")]
    InvalidConcentration(f64),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
