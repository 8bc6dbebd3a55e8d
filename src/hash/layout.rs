//! Hash index layouts.
//!
//! A layout is fully described by two numbers:
//!
//! - the [`Scale`], a capacity class selecting the number of buckets
//! - the *bias*, the bucket at which a hash value of zero starts probing
//!
//! Neither depends on the elements stored, so every structurally distinct
//! table shape a collection can take is reachable by picking a scale and a
//! bias explicitly. The sampling helpers at the end of this module enumerate
//! the interesting ones.
//!
//! # Bands
//!
//! Every scale accepts a contiguous band of element counts. Scale zero keeps
//! no table at all and holds up to [`MAXIMUM_UNHASHED_COUNT`] elements,
//! which are found by linear search. Hashed scales keep `2^scale` buckets and
//! are filled to at most half of them.
//!
//! | Scale | Buckets | Counts      |
//! |-------|---------|-------------|
//! | 0     | 0       | `0..=8`     |
//! | 5     | 32      | `9..=16`    |
//! | 6     | 64      | `17..=32`   |
//! | 7     | 128     | `33..=64`   |
//! | *s*   | 2^*s*   | `2^(s-2)+1 ..= 2^(s-1)` |
//!
//! # Examples
//!
//! ```rust
//! use orderly::hash::{HashLayout, Scale};
//!
//! let scale = Scale::smallest_for(17);
//! assert_eq!(scale.get(), 6);
//! assert_eq!(scale.capacity(), 64);
//! assert_eq!(scale.minimum_capacity()..=scale.maximum_capacity(), 17..=32);
//!
//! let layout = HashLayout::new(scale, 60);
//! assert_eq!(layout.start_bucket(10), 6);
//! assert_eq!(layout.next_bucket(63), 0);
//! ```

use std::fmt;
use std::ops::Range;

use crate::error::LayoutError;

/// The largest number of elements a collection keeps without a hash table.
pub const MAXIMUM_UNHASHED_COUNT: usize = 8;

// =============================================================================
// Scale
// =============================================================================

/// A capacity class of a hash index.
///
/// Valid scales are zero (no table) and `Scale::MINIMUM..=Scale::MAXIMUM`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Scale(u32);

impl Scale {
    /// The scale of a collection without a hash table.
    pub const UNHASHED: Self = Self(0);

    /// The smallest scale that keeps a hash table.
    pub const MINIMUM: Self = Self(5);

    /// The largest supported scale.
    pub const MAXIMUM: Self = Self(usize::BITS - 2);

    /// Creates a scale.
    ///
    /// # Panics
    ///
    /// Panics if `value` is neither zero nor within
    /// `Scale::MINIMUM..=Scale::MAXIMUM`.
    #[must_use]
    pub fn new(value: u32) -> Self {
        match Self::try_new(value) {
            Ok(scale) => scale,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a scale, reporting invalid values as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidScale`] if `value` is neither zero nor
    /// within `Scale::MINIMUM..=Scale::MAXIMUM`.
    pub const fn try_new(value: u32) -> Result<Self, LayoutError> {
        if value == 0 || (Self::MINIMUM.0 <= value && value <= Self::MAXIMUM.0) {
            Ok(Self(value))
        } else {
            Err(LayoutError::InvalidScale { scale: value })
        }
    }

    /// Returns the numeric value of the scale.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` if collections at this scale keep a hash table.
    #[inline]
    #[must_use]
    pub const fn is_hashed(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of buckets: zero for the unhashed scale and
    /// `2^scale` otherwise.
    #[inline]
    #[must_use]
    pub const fn capacity(self) -> usize {
        if self.is_hashed() { 1 << self.0 } else { 0 }
    }

    /// Returns the smallest element count this scale is meant for.
    ///
    /// Bands of successive scales are contiguous, so this is one more than
    /// the maximum of the previous scale.
    #[must_use]
    pub const fn minimum_capacity(self) -> usize {
        match self.previous() {
            Some(previous) => previous.maximum_capacity() + 1,
            None => 0,
        }
    }

    /// Returns the largest element count this scale can hold before the
    /// table has to grow.
    #[must_use]
    pub const fn maximum_capacity(self) -> usize {
        if self.is_hashed() {
            self.capacity() / 2
        } else {
            MAXIMUM_UNHASHED_COUNT
        }
    }

    /// Returns the biases a table of this scale accepts.
    ///
    /// The unhashed scale only accepts a bias of zero.
    #[must_use]
    pub const fn bias_range(self) -> Range<usize> {
        if self.is_hashed() {
            0..self.capacity()
        } else {
            0..1
        }
    }

    /// Returns the scale before this one.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.0 {
            0 => None,
            value if value == Self::MINIMUM.0 => Some(Self::UNHASHED),
            value => Some(Self(value - 1)),
        }
    }

    /// Returns the scale after this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0 {
            0 => Some(Self::MINIMUM),
            value if value == Self::MAXIMUM.0 => None,
            value => Some(Self(value + 1)),
        }
    }

    /// Returns the smallest scale whose band contains `count`.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the maximum capacity of `Scale::MAXIMUM`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::hash::Scale;
    ///
    /// assert_eq!(Scale::smallest_for(0), Scale::UNHASHED);
    /// assert_eq!(Scale::smallest_for(8), Scale::UNHASHED);
    /// assert_eq!(Scale::smallest_for(9), Scale::MINIMUM);
    /// assert_eq!(Scale::smallest_for(16), Scale::MINIMUM);
    /// assert_eq!(Scale::smallest_for(17).get(), 6);
    /// ```
    #[must_use]
    pub fn smallest_for(count: usize) -> Self {
        match Self::try_smallest_for(count) {
            Ok(scale) => scale,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the smallest scale whose band contains `count`, reporting
    /// counts beyond every band as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CountExceedsScale`] if `count` exceeds the
    /// maximum capacity of `Scale::MAXIMUM`.
    pub const fn try_smallest_for(count: usize) -> Result<Self, LayoutError> {
        if count <= MAXIMUM_UNHASHED_COUNT {
            return Ok(Self::UNHASHED);
        }
        let maximum = Self::MAXIMUM.maximum_capacity();
        if count > maximum {
            return Err(LayoutError::CountExceedsScale {
                count,
                scale: Self::MAXIMUM.0,
                maximum,
            });
        }
        let scale = (count * 2).next_power_of_two().trailing_zeros();
        if scale < Self::MINIMUM.0 {
            Ok(Self::MINIMUM)
        } else {
            Ok(Self(scale))
        }
    }

    /// Returns the element count below which a table at this scale is
    /// rebuilt at a smaller scale.
    ///
    /// Half the band minimum, so that alternating inserts and removals at a
    /// band edge do not rebuild the table every time.
    #[must_use]
    pub(crate) const fn shrink_threshold(self) -> usize {
        self.minimum_capacity() / 2
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// HashLayout
// =============================================================================

/// A validated scale and bias pair.
///
/// The probe sequence for a hash value `h` starts at bucket
/// `(h + bias) mod capacity` and visits the following buckets one by one,
/// wrapping around at the end of the table.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct HashLayout {
    scale: Scale,
    bias: usize,
}

impl HashLayout {
    /// The layout of a collection without a hash table.
    pub const UNHASHED: Self = Self {
        scale: Scale::UNHASHED,
        bias: 0,
    };

    /// Creates a layout.
    ///
    /// # Panics
    ///
    /// Panics if `bias` is outside `scale.bias_range()`.
    #[must_use]
    pub fn new(scale: Scale, bias: usize) -> Self {
        match Self::try_new(scale, bias) {
            Ok(layout) => layout,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a layout, reporting an invalid bias as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::BiasOutOfRange`] if `bias` is outside
    /// `scale.bias_range()`.
    pub fn try_new(scale: Scale, bias: usize) -> Result<Self, LayoutError> {
        let range = scale.bias_range();
        if range.contains(&bias) {
            Ok(Self { scale, bias })
        } else {
            Err(LayoutError::BiasOutOfRange { bias, range })
        }
    }

    /// Returns the unbiased layout of the smallest scale that holds `count`
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the maximum capacity of `Scale::MAXIMUM`.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        Self {
            scale: Scale::smallest_for(count),
            bias: 0,
        }
    }

    /// Returns the scale.
    #[inline]
    #[must_use]
    pub const fn scale(self) -> Scale {
        self.scale
    }

    /// Returns the bias.
    #[inline]
    #[must_use]
    pub const fn bias(self) -> usize {
        self.bias
    }

    /// Returns the number of buckets.
    #[inline]
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.scale.capacity()
    }

    /// Checks that `count` elements fit in this layout without growing.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CountExceedsScale`] if `count` is larger than
    /// the maximum capacity of the scale.
    pub const fn check_count(self, count: usize) -> Result<(), LayoutError> {
        let maximum = self.scale.maximum_capacity();
        if count > maximum {
            Err(LayoutError::CountExceedsScale {
                count,
                scale: self.scale.0,
                maximum,
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    const fn bucket_mask(self) -> usize {
        debug_assert!(self.scale.is_hashed(), "unhashed layouts have no buckets");
        self.capacity() - 1
    }

    /// Returns the first bucket probed for `hash`.
    ///
    /// # Panics
    ///
    /// Debug builds panic if the layout is unhashed.
    // Only the low `scale` bits of the hash are used, so truncating it on
    // narrow targets selects the same bucket.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    #[must_use]
    pub const fn start_bucket(self, hash: u64) -> usize {
        (hash as usize).wrapping_add(self.bias) & self.bucket_mask()
    }

    /// Returns the bucket probed after `bucket`.
    #[inline]
    #[must_use]
    pub const fn next_bucket(self, bucket: usize) -> usize {
        (bucket + 1) & self.bucket_mask()
    }

    /// Returns how many probe steps lead from `from` to `to`.
    #[inline]
    #[must_use]
    pub const fn probe_distance(self, from: usize, to: usize) -> usize {
        to.wrapping_sub(from) & self.bucket_mask()
    }
}

impl Default for HashLayout {
    fn default() -> Self {
        Self::UNHASHED
    }
}

// =============================================================================
// Layout Sampling
// =============================================================================

/// One structurally distinct configuration: a layout plus an element count
/// within the band of its scale.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct LayoutSample {
    /// The capacity class.
    pub scale: Scale,
    /// The probe origin offset.
    pub bias: usize,
    /// The number of elements.
    pub count: usize,
}

impl LayoutSample {
    /// Returns the layout of this sample.
    ///
    /// # Panics
    ///
    /// Panics if the bias is outside the bias range of the scale.
    #[must_use]
    pub fn layout(&self) -> HashLayout {
        HashLayout::new(self.scale, self.bias)
    }
}

impl fmt::Display for LayoutSample {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "layout(scale: {}, bias: {}, count: {})",
            self.scale, self.bias, self.count
        )
    }
}

/// Returns the smallest, middle and largest count in the band of `scale`.
///
/// # Examples
///
/// ```rust
/// use orderly::hash::{Scale, interesting_counts};
///
/// assert_eq!(interesting_counts(Scale::UNHASHED), [0, 4, 8]);
/// assert_eq!(interesting_counts(Scale::MINIMUM), [9, 12, 16]);
/// ```
#[must_use]
pub const fn interesting_counts(scale: Scale) -> [usize; 3] {
    let minimum = scale.minimum_capacity();
    let maximum = scale.maximum_capacity();
    [minimum, minimum + (maximum - minimum) / 2, maximum]
}

/// Returns a representative selection of biases for `scale`.
///
/// The unhashed scale only has bias zero and the minimum hashed scale is
/// small enough to try every bias. Larger scales contribute three biases
/// each from the start, the middle and the end of their range.
///
/// # Examples
///
/// ```rust
/// use orderly::hash::{Scale, interesting_biases};
///
/// assert_eq!(interesting_biases(Scale::UNHASHED), vec![0]);
/// assert_eq!(interesting_biases(Scale::MINIMUM), (0..32).collect::<Vec<_>>());
/// assert_eq!(
///     interesting_biases(Scale::new(6)),
///     vec![0, 1, 2, 30, 31, 32, 61, 62, 63]
/// );
/// ```
#[must_use]
pub fn interesting_biases(scale: Scale) -> Vec<usize> {
    let range = scale.bias_range();
    if !scale.is_hashed() || scale == Scale::MINIMUM {
        return range.collect();
    }
    let middle = range.end / 2;
    range
        .clone()
        .take(3)
        .chain(middle - 2..=middle)
        .chain(range.end - 3..range.end)
        .collect()
}

/// Enumerates every combination of interesting count and interesting bias
/// for each of `scales`.
///
/// # Examples
///
/// ```rust
/// use orderly::hash::{Scale, sample_layouts};
///
/// let samples: Vec<_> = sample_layouts([Scale::UNHASHED, Scale::new(7)]).collect();
/// assert_eq!(samples.len(), 3 + 3 * 9);
/// assert!(samples.iter().all(|sample| sample.count <= sample.scale.maximum_capacity()));
/// ```
pub fn sample_layouts<I>(scales: I) -> impl Iterator<Item = LayoutSample>
where
    I: IntoIterator<Item = Scale>,
{
    scales.into_iter().flat_map(|scale| {
        let biases = interesting_biases(scale);
        interesting_counts(scale).into_iter().flat_map(move |count| {
            biases
                .clone()
                .into_iter()
                .map(move |bias| LayoutSample { scale, bias, count })
        })
    })
}

// =============================================================================
// Tests
// =============================================================================
