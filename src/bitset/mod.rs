//! Dense bit sets of non-negative integers.
//!
//! This module provides [`BitSet`], a set of `usize` values stored as a
//! packed array of 64-bit words.
//!
//! # Overview
//!
//! Membership of the integer `n` is bit `n % 64` of word `n / 64`, so the
//! memory used by a bit set is proportional to its largest member rather
//! than to its number of members. Binary set operations run word by word:
//!
//! - union and symmetric difference keep the tail of the longer operand
//! - intersection stops at the end of the shorter operand
//! - subtraction only ever looks at the words of the first operand
//!
//! # Copy-on-Write
//!
//! Cloning a `BitSet` is O(1): the words are shared behind a reference
//! counter and only copied when one of the clones is mutated.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity                      |
//! |---------------------------|---------------------------------|
//! | `contains`                | O(1)                            |
//! | `insert`                  | O(1) amortized, O(max) if shared|
//! | `remove`                  | O(1) amortized, O(max) if shared|
//! | `len`                     | O(max / 64)                     |
//! | `union`                   | O(max(a, b) / 64)               |
//! | `intersection`            | O(min(a, b) / 64)               |
//! | `intersection_range`      | O(max / 64)                     |
//! | `intersection_values`     | O(max / 64) + O(k)              |
//!
//! where *max* is the largest member involved.
//!
//! # Examples
//!
//! ```rust
//! use orderly::bitset::BitSet;
//!
//! let a: BitSet = [1, 2, 3, 4].into();
//! let b: BitSet = [6, 4, 2, 0].into();
//!
//! assert_eq!(a.intersection(&b), BitSet::from([2, 4]));
//! assert_eq!(a.intersection_range(-10..3), BitSet::from([1, 2]));
//! assert_eq!(a.intersection_values([4, -1, 3, 9]), BitSet::from([3, 4]));
//! ```

mod words;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Range, Sub};

use crate::ReferenceCounter;
use crate::set_algebra::SetAlgebra;

use self::words::{Ones, WordStorage};

/// A set of non-negative integers stored as a dense bitmap.
///
/// # Examples
///
/// ```rust
/// use orderly::bitset::BitSet;
///
/// let mut set = BitSet::new();
/// assert!(set.insert(3));
/// assert!(set.insert(130));
/// assert!(!set.insert(3));
///
/// assert!(set.contains(130));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 130]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    storage: ReferenceCounter<WordStorage>,
}

impl BitSet {
    /// Creates an empty bit set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let set = BitSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn from_storage(storage: WordStorage) -> Self {
        Self {
            storage: ReferenceCounter::new(storage),
        }
    }

    fn storage_mut(&mut self) -> &mut WordStorage {
        ReferenceCounter::make_mut(&mut self.storage)
    }

    /// Creates a bit set from raw storage words.
    ///
    /// Bit `b` of `words[w]` represents the member `w * 64 + b`. Trailing
    /// zero words are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let set = BitSet::from_words(vec![0b101, 1, 0]);
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 64]);
    /// assert_eq!(set.as_words(), &[0b101, 1]);
    /// ```
    #[must_use]
    pub fn from_words(words: Vec<u64>) -> Self {
        Self::from_storage(WordStorage::from_words(words))
    }

    /// Creates a bit set from the non-negative members of `values`.
    ///
    /// Negative values cannot be members of a bit set and are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let set = BitSet::from_valid_members([3, -2, 0, 3]);
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3]);
    /// ```
    #[must_use]
    pub fn from_valid_members<I>(values: I) -> Self
    where
        I: IntoIterator<Item = isize>,
    {
        values
            .into_iter()
            .filter_map(|value| usize::try_from(value).ok())
            .collect()
    }

    /// Returns the storage words, least significant member first.
    #[inline]
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        self.storage.as_slice()
    }

    /// Returns the number of members.
    ///
    /// # Complexity
    ///
    /// O(max / 64): population count over every storage word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.count()
    }

    /// Returns `true` if the set has no members.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` if `value` is a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let set = BitSet::from([1, 64]);
    /// assert!(set.contains(64));
    /// assert!(!set.contains(2));
    /// assert!(!set.contains(10_000));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        self.storage.contains(value)
    }

    /// Adds `value`, returning `true` if it was not already a member.
    pub fn insert(&mut self, value: usize) -> bool {
        if self.contains(value) {
            return false;
        }
        self.storage_mut().insert(value)
    }

    /// Removes `value`, returning `true` if it was a member.
    pub fn remove(&mut self, value: usize) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.storage_mut().remove(value)
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.storage_mut().clear();
        }
    }

    /// Returns the smallest member.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.storage.first()
    }

    /// Returns the largest member.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.storage.last()
    }

    /// Returns an iterator over the members in ascending order.
    #[must_use]
    pub fn iter(&self) -> BitSetIterator<'_> {
        BitSetIterator {
            ones: self.storage.ones(),
        }
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Returns the members of either set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let a = BitSet::from([1, 2]);
    /// let b = BitSet::from([2, 200]);
    /// assert_eq!(a.union(&b), BitSet::from([1, 2, 200]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_storage(WordStorage::combine(
            &self.storage,
            &other.storage,
            true,
            |left, right| left | right,
        ))
    }

    /// Returns the members common to both sets.
    ///
    /// # Complexity
    ///
    /// O(min(a, b) / 64): words past the end of the shorter operand cannot
    /// hold common members and are never visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let a = BitSet::from([1, 2, 3, 4]);
    /// let b = BitSet::from([6, 4, 2, 0]);
    /// assert_eq!(a.intersection(&b), BitSet::from([2, 4]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_storage(WordStorage::combine(
            &self.storage,
            &other.storage,
            false,
            |left, right| left & right,
        ))
    }

    /// Returns the members of exactly one of the sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self::from_storage(WordStorage::combine(
            &self.storage,
            &other.storage,
            true,
            |left, right| left ^ right,
        ))
    }

    /// Returns the members of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let a = BitSet::from([1, 2, 300]);
    /// let b = BitSet::from([2, 3]);
    /// assert_eq!(a.difference(&b), BitSet::from([1, 300]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.subtract(other);
        result
    }

    /// Replaces `self` with its union with `other`.
    pub fn form_union(&mut self, other: &Self) {
        if !other.is_subset(self) {
            *self = self.union(other);
        }
    }

    /// Replaces `self` with its intersection with `other`.
    pub fn form_intersection(&mut self, other: &Self) {
        if !self.is_subset(other) {
            *self = self.intersection(other);
        }
    }

    /// Replaces `self` with its symmetric difference with `other`.
    pub fn form_symmetric_difference(&mut self, other: &Self) {
        if !other.is_empty() {
            *self = self.symmetric_difference(other);
        }
    }

    /// Removes every member of `other` from `self`.
    pub fn subtract(&mut self, other: &Self) {
        if !self.is_disjoint(other) {
            self.storage_mut().subtract(&other.storage);
        }
    }

    /// Returns the members of `self` that lie within `range`.
    ///
    /// Negative bounds are clamped to zero. The result is computed from the
    /// range bounds directly; the range is never expanded into members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let set = BitSet::from([1, 2, 3, 4]);
    /// assert_eq!(set.intersection_range(-10..3), BitSet::from([1, 2]));
    /// assert_eq!(set.intersection_range(2..2), BitSet::new());
    /// assert_eq!(set.intersection_range(-5..-1), BitSet::new());
    /// ```
    #[must_use]
    pub fn intersection_range(&self, range: Range<isize>) -> Self {
        let mut result = self.clone();
        result.form_intersection_range(range);
        result
    }

    /// Keeps only the members of `self` that lie within `range`.
    pub fn form_intersection_range(&mut self, range: Range<isize>) {
        let start = usize::try_from(range.start).unwrap_or(0);
        let end = usize::try_from(range.end).unwrap_or(0);
        let covers_all = start == 0 && self.last().is_none_or(|last| last < end);
        if !covers_all {
            self.storage_mut().retain_range(start..end);
        }
    }

    /// Returns the members of `self` that also appear in `values`.
    ///
    /// Negative values are skipped.
    ///
    /// # Complexity
    ///
    /// O(max / 64) + O(k), where *k* is the length of `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let set = BitSet::from([1, 2, 3, 4]);
    /// assert_eq!(set.intersection_values([6, 4, 2, 0, -4]), BitSet::from([2, 4]));
    /// ```
    #[must_use]
    pub fn intersection_values<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = isize>,
    {
        Self::from_valid_members(values.into_iter().filter(|value| {
            usize::try_from(*value).is_ok_and(|member| self.contains(member))
        }))
    }

    /// Returns the integers in `range` that are not members of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::bitset::BitSet;
    ///
    /// let set = BitSet::from([1, 3, 70]);
    /// assert_eq!(set.complement(0..5), BitSet::from([0, 2, 4]));
    /// ```
    #[must_use]
    pub fn complement(&self, within: Range<usize>) -> Self {
        let mut result = WordStorage::from_range(within);
        result.subtract(&self.storage);
        Self::from_storage(result)
    }

    /// Returns `true` if every member of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.storage.is_subset(&other.storage)
    }

    /// Returns `true` if every member of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets have no member in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.storage.is_disjoint(&other.storage)
    }
}

impl SetAlgebra for BitSet {
    type Element = usize;

    fn contains(&self, element: &usize) -> bool {
        Self::contains(self, *element)
    }

    fn insert(&mut self, element: usize) -> bool {
        Self::insert(self, element)
    }

    fn remove(&mut self, element: &usize) -> bool {
        Self::remove(self, *element)
    }

    fn union(&self, other: &Self) -> Self {
        Self::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        Self::intersection(self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        Self::symmetric_difference(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        Self::difference(self, other)
    }

    fn is_subset(&self, other: &Self) -> bool {
        Self::is_subset(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        Self::is_disjoint(self, other)
    }

    fn form_union(&mut self, other: &Self) {
        Self::form_union(self, other);
    }

    fn form_intersection(&mut self, other: &Self) {
        Self::form_intersection(self, other);
    }

    fn form_symmetric_difference(&mut self, other: &Self) {
        Self::form_symmetric_difference(self, other);
    }

    fn subtract(&mut self, other: &Self) {
        Self::subtract(self, other);
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Ascending iterator over the members of a [`BitSet`].
#[derive(Clone)]
pub struct BitSetIterator<'a> {
    ones: Ones<'a>,
}

impl Iterator for BitSetIterator<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.ones.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ones.size_hint()
    }
}

impl ExactSizeIterator for BitSetIterator<'_> {}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = BitSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut storage = WordStorage::new();
        for value in iter {
            storage.insert(value);
        }
        Self::from_storage(storage)
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        let storage = self.storage_mut();
        for value in iter {
            storage.insert(value);
        }
    }
}

impl<const N: usize> From<[usize; N]> for BitSet {
    fn from(values: [usize; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<Range<usize>> for BitSet {
    fn from(range: Range<usize>) -> Self {
        Self::from_storage(WordStorage::from_range(range))
    }
}

// =============================================================================
// Operators
// =============================================================================

impl BitOr for &BitSet {
    type Output = BitSet;

    fn bitor(self, other: Self) -> BitSet {
        self.union(other)
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    fn bitand(self, other: Self) -> BitSet {
        self.intersection(other)
    }
}

impl BitXor for &BitSet {
    type Output = BitSet;

    fn bitxor(self, other: Self) -> BitSet {
        self.symmetric_difference(other)
    }
}

impl Sub for &BitSet {
    type Output = BitSet;

    fn sub(self, other: Self) -> BitSet {
        self.difference(other)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Debug for BitSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{member}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BitSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct BitSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for BitSetVisitor {
    type Value = BitSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of non-negative integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut storage = WordStorage::new();
        while let Some(member) = seq.next_element::<usize>()? {
            storage.insert(member);
        }
        Ok(BitSet::from_storage(storage))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BitSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BitSetVisitor)
    }
}

// Rc-backed sets stay on one thread; the `arc` feature lifts that.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(BitSet: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(BitSet: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
