//! Error types for hash index layouts.
//!
//! Invalid layouts are programming errors, and the regular constructors
//! panic on them. The fallible `try_*` constructors report the same
//! conditions as a [`LayoutError`] instead, for callers that build layouts
//! from diagnostic input they do not control.

use std::error::Error;
use std::fmt;
use std::ops::Range;

/// Errors describing why a scale, bias or element count does not form a
/// valid hash index layout.
///
/// # Examples
///
/// ```rust
/// use orderly::LayoutError;
///
/// let error = LayoutError::BiasOutOfRange { bias: 40, range: 0..32 };
/// assert_eq!(format!("{error}"), "bias 40 is outside the valid range 0..32");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The scale is neither zero nor within the hashed scale range.
    InvalidScale {
        /// The rejected scale.
        scale: u32,
    },

    /// The bias does not address a bucket of the table.
    BiasOutOfRange {
        /// The rejected bias.
        bias: usize,
        /// The biases accepted by the scale.
        range: Range<usize>,
    },

    /// The element count does not fit in the scale without growing.
    CountExceedsScale {
        /// The number of elements.
        count: usize,
        /// The scale that was requested.
        scale: u32,
        /// The largest count the scale can hold.
        maximum: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(formatter, "scale {scale} is not a valid hash table scale")
            }
            Self::BiasOutOfRange { bias, range } => {
                write!(
                    formatter,
                    "bias {bias} is outside the valid range {}..{}",
                    range.start, range.end
                )
            }
            Self::CountExceedsScale {
                count,
                scale,
                maximum,
            } => {
                write!(
                    formatter,
                    "{count} elements exceed the maximum of {maximum} for scale {scale}"
                )
            }
        }
    }
}

impl Error for LayoutError {}
