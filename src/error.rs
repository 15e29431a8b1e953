//! Error type shared by every fallible sort.
//!
//! All checks run before the first write, so an `Err` always means the
//! sequence and the output buffer are exactly as the caller left them.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Counting sort needs at least one admissible key value.
    InvalidRange,

    /// Digit decomposition needs a base of at least 2.
    InvalidRadix(usize),

    /// Digit places are 1-indexed from the least significant digit.
    InvalidPlace,

    /// The key extractor produced a value outside `[0, range)`.
    KeyOutOfRange {
        /// Position of the offending element in the input.
        index: usize,
        /// The key, rendered for diagnostics.
        key: String,
        /// The exclusive upper bound that was requested.
        range: usize,
    },

    /// Radix sort only accepts non-negative keys.
    NegativeKey {
        /// Position of the offending element in the input.
        index: usize,
        /// The key, rendered for diagnostics.
        key: String,
    },

    /// The output buffer cannot hold the whole input.
    BufferTooSmall {
        /// Number of elements in the input.
        needed: usize,
        /// Length of the buffer that was supplied.
        got: usize,
    },

    /// The counting tables for this range could not be allocated.
    TableTooLarge {
        /// The requested range (or radix).
        range: usize,
    },

    /// `radix^(place - 1)` does not fit the widest supported integer.
    DigitOverflow {
        /// The requested place.
        place: u32,
        /// The requested radix.
        radix: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidRange => write!(f, "Invalid range: 0 (must be at least 1)"),
            Self::InvalidRadix(radix) => write!(f, "Invalid radix: {radix} (must be at least 2)"),
            Self::InvalidPlace => write!(f, "Invalid digit place: 0 (places start at 1)"),
            Self::KeyOutOfRange { index, key, range } => {
                write!(f, "Key {key} at index {index} is outside [0, {range})")
            }
            Self::NegativeKey { index, key } => {
                write!(f, "Key {key} at index {index} is negative")
            }
            Self::BufferTooSmall { needed, got } => {
                write!(f, "Output buffer too small: got {got} slots, need {needed}")
            }
            Self::TableTooLarge { range } => {
                write!(f, "Counting tables for range {range} cannot be allocated")
            }
            Self::DigitOverflow { place, radix } => {
                write!(f, "Digit place {place} overflows in radix {radix}")
            }
        }
    }
}

impl Error for SortError {}

/// Fails unless a buffer of `got` slots can receive `needed` elements.
pub(crate) fn check_target(needed: usize, got: usize) -> std::result::Result<(), SortError> {
    if got < needed {
        return Err(SortError::BufferTooSmall { needed, got });
    }
    Ok(())
}
