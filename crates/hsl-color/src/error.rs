//! Error types for color construction and parsing

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for building or parsing color values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The representation tag names neither RGB nor HSL
    #[error("unsupported color representation: {0}")]
    UnsupportedRepresentation(String),

    /// An RGB channel is not an integer in 0..=255
    #[error("RGB channel {channel} of row {row} is not an integer in 0..=255: {value}")]
    ChannelOutOfRange {
        /// Row index within the batch
        row: usize,
        /// Channel index within the row (0 = red)
        channel: usize,
        /// Offending value
        value: f64,
    },

    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}
