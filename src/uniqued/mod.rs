//! Order-preserving collections of unique elements.
//!
//! This module provides [`Uniqued`], which pairs an ordered [`Sequence`] of
//! unique elements with a hash index of their positions, and
//! [`OrderedSet`], its `Vec`-backed alias.
//!
//! # Overview
//!
//! Elements keep the order in which they were inserted, exactly like the
//! backing sequence, while membership tests and lookups by value run in
//! expected constant time:
//!
//! - Collections of at most
//!   [`MAXIMUM_UNHASHED_COUNT`](crate::hash::MAXIMUM_UNHASHED_COUNT) elements
//!   keep no hash table and search the sequence directly
//! - Larger collections keep an open-addressing table sized by a [`Scale`]
//!   and probed from a bias, rebuilt whenever the element count leaves the
//!   band of its scale
//! - Removal shifts the table's probe runs backwards instead of leaving
//!   tombstones
//!
//! # Time Complexity
//!
//! | Operation        | Complexity        |
//! |------------------|-------------------|
//! | `contains`       | O(1) expected     |
//! | `index_of`       | O(1) expected     |
//! | `insert`         | O(1) amortized    |
//! | `insert_at`      | O(n)              |
//! | `remove`         | O(n)              |
//! | `pop`            | O(1) expected     |
//! | `get`            | O(1)              |
//! | `clone`          | O(1)              |
//! | `iter`           | O(1) + O(n)       |
//!
//! Clones share their storage; the first mutation of a shared collection
//! copies it.
//!
//! # Examples
//!
//! ```rust
//! use orderly::uniqued::OrderedSet;
//!
//! let mut set: OrderedSet<&str> = ["b", "a", "b", "c"].into();
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
//!
//! assert!(!set.insert("a"));
//! assert!(set.insert("d"));
//! assert_eq!(set.index_of("d"), Some(3));
//!
//! assert_eq!(set.remove("a"), Some("a"));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "c", "d"]);
//! ```
//!
//! Explicit layouts:
//!
//! ```rust
//! use orderly::hash::Scale;
//! use orderly::uniqued::OrderedSet;
//!
//! let set: OrderedSet<i32> = OrderedSet::with_layout(Scale::new(6), 17, (0..20).collect());
//! assert_eq!(set.scale(), Scale::new(6));
//! assert_eq!(set.bias(), 17);
//! assert!(set.contains(&19));
//! ```

mod sequence;

pub use sequence::Sequence;

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::ops::Index;

use crate::ReferenceCounter;
use crate::error::LayoutError;
use crate::hash::{DefaultBuildHasher, HashIndex, HashLayout, Probe, Scale};
use crate::set_algebra::SetAlgebra;

/// A `Vec`-backed [`Uniqued`] collection.
pub type OrderedSet<T, S = DefaultBuildHasher> = Uniqued<Vec<T>, S>;

// =============================================================================
// Uniqued Definition
// =============================================================================

/// An ordered sequence of unique elements with a hash index of positions.
///
/// `B` is the backing [`Sequence`] and `S` builds the hasher used for the
/// index. Iteration order, indexing and equality follow the sequence.
///
/// # Examples
///
/// ```rust
/// use orderly::uniqued::Uniqued;
/// use std::collections::VecDeque;
///
/// let mut queue: Uniqued<VecDeque<u32>> = Uniqued::new();
/// queue.insert(3);
/// queue.insert(1);
/// queue.insert(3);
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.first(), Some(&3));
/// ```
pub struct Uniqued<B, S = DefaultBuildHasher> {
    storage: ReferenceCounter<Storage<B>>,
    hasher: S,
}

#[derive(Clone)]
struct Storage<B> {
    base: B,
    index: HashIndex,
    /// The scale below which the index never shrinks.
    reserved: Scale,
}

/// Where a lookup by value ended.
enum Lookup {
    Found {
        bucket: Option<usize>,
        position: usize,
    },
    Missing {
        bucket: Option<usize>,
    },
}

impl<B: Sequence> Storage<B>
where
    B::Element: Hash,
{
    fn rehash<S: BuildHasher>(&mut self, hasher: &S, layout: HashLayout) {
        let hashes = self.base.iter().map(|element| hasher.hash_one(element));
        self.index.rehash(layout, hashes);
    }

    /// Rebuilds the index at a larger scale once the count leaves the band
    /// of the current one. Returns `true` if it did.
    fn grow_if_needed<S: BuildHasher>(&mut self, hasher: &S) -> bool {
        let count = self.base.len();
        if count <= self.index.layout().scale().maximum_capacity() {
            return false;
        }
        self.rehash(hasher, HashLayout::for_count(count));
        true
    }

    fn shrink_if_needed<S: BuildHasher>(&mut self, hasher: &S) {
        let count = self.base.len();
        let scale = self.index.layout().scale();
        if scale > self.reserved && count < scale.shrink_threshold() {
            let target = Scale::smallest_for(count).max(self.reserved);
            self.rehash(hasher, HashLayout::new(target, 0));
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<B, S> Uniqued<B, S>
where
    B: Sequence + Default,
    S: BuildHasher + Default,
{
    /// Creates an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::uniqued::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<B, S> Uniqued<B, S>
where
    B: Sequence + Default,
    S: BuildHasher,
{
    /// Creates an empty collection that hashes with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            storage: ReferenceCounter::new(Storage {
                base: B::default(),
                index: HashIndex::unhashed(),
                reserved: Scale::UNHASHED,
            }),
            hasher,
        }
    }
}

impl<B, S> Uniqued<B, S>
where
    B: Sequence + Default + Clone,
    B::Element: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty collection whose index can hold `capacity` elements
    /// without being rebuilt.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the largest supported scale.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut collection = Self::new();
        collection.reserve(capacity);
        collection
    }
}

impl<B, S> Uniqued<B, S>
where
    B: Sequence,
    B::Element: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Wraps a sequence whose elements are already known to be unique.
    ///
    /// The index is built once at the smallest adequate scale; no element is
    /// checked against the others. Debug builds verify uniqueness and panic
    /// on a duplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::uniqued::OrderedSet;
    ///
    /// let set: OrderedSet<usize> = OrderedSet::from_unique_unchecked((0..100).collect());
    /// assert_eq!(set.len(), 100);
    /// assert_eq!(set.index_of(&42), Some(42));
    /// ```
    #[must_use]
    pub fn from_unique_unchecked(base: B) -> Self {
        Self::from_unique_unchecked_with_hasher(base, S::default())
    }

    /// Wraps a sequence of unique elements using an explicit layout.
    ///
    /// The chosen scale also becomes the reserved scale, so removals never
    /// shrink the index below it. Insertions past the band of the scale
    /// still grow it.
    ///
    /// # Panics
    ///
    /// Panics if `bias` is outside the bias range of `scale` or if `base`
    /// holds more elements than `scale` allows.
    #[must_use]
    pub fn with_layout(scale: Scale, bias: usize, base: B) -> Self {
        match Self::try_with_layout(scale, bias, base) {
            Ok(collection) => collection,
            Err(error) => panic!("{error}"),
        }
    }

    /// Wraps a sequence of unique elements using an explicit layout,
    /// reporting an invalid layout as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::BiasOutOfRange`] if `bias` is outside the bias
    /// range of `scale`, or [`LayoutError::CountExceedsScale`] if `base`
    /// holds more elements than `scale` allows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::LayoutError;
    /// use orderly::hash::Scale;
    /// use orderly::uniqued::OrderedSet;
    ///
    /// let result: Result<OrderedSet<i32>, _> =
    ///     OrderedSet::try_with_layout(Scale::MINIMUM, 0, (0..17).collect());
    /// assert!(matches!(result, Err(LayoutError::CountExceedsScale { count: 17, .. })));
    /// ```
    pub fn try_with_layout(scale: Scale, bias: usize, base: B) -> Result<Self, LayoutError> {
        let layout = HashLayout::try_new(scale, bias)?;
        layout.check_count(base.len())?;
        let hasher = S::default();
        let index = HashIndex::build(layout, base.iter().map(|element| hasher.hash_one(element)));
        let collection = Self {
            storage: ReferenceCounter::new(Storage {
                base,
                index,
                reserved: scale,
            }),
            hasher,
        };
        debug_assert!(collection.has_unique_elements(), "elements are not unique");
        Ok(collection)
    }
}

impl<B, S> Uniqued<B, S>
where
    B: Sequence,
    B::Element: Hash + Eq,
    S: BuildHasher,
{
    /// Wraps a sequence of unique elements and hashes with `hasher`.
    ///
    /// See [`from_unique_unchecked`](Self::from_unique_unchecked).
    pub fn from_unique_unchecked_with_hasher(base: B, hasher: S) -> Self {
        let layout = HashLayout::for_count(base.len());
        let index = HashIndex::build(layout, base.iter().map(|element| hasher.hash_one(element)));
        let collection = Self {
            storage: ReferenceCounter::new(Storage {
                base,
                index,
                reserved: Scale::UNHASHED,
            }),
            hasher,
        };
        debug_assert!(collection.has_unique_elements(), "elements are not unique");
        collection
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    fn lookup<Q>(&self, value: &Q) -> Lookup
    where
        B::Element: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let storage = &*self.storage;
        if storage.index.is_hashed() {
            let hash = self.hasher.hash_one(value);
            match storage
                .index
                .find(hash, |position| Borrow::<Q>::borrow(storage.base.at(position)) == value)
            {
                Probe::Occupied { bucket, position } => Lookup::Found {
                    bucket: Some(bucket),
                    position,
                },
                Probe::Vacant { bucket } => Lookup::Missing {
                    bucket: Some(bucket),
                },
            }
        } else {
            storage
                .base
                .iter()
                .position(|element| Borrow::<Q>::borrow(element) == value)
                .map_or(Lookup::Missing { bucket: None }, |position| {
                    Lookup::Found {
                        bucket: None,
                        position,
                    }
                })
        }
    }

    /// Returns `true` if the collection contains `value`.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        B::Element: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        matches!(self.lookup(value), Lookup::Found { .. })
    }

    /// Returns the position of `value` in the sequence.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        B::Element: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.lookup(value) {
            Lookup::Found { position, .. } => Some(position),
            Lookup::Missing { .. } => None,
        }
    }

    fn has_unique_elements(&self) -> bool {
        self.iter()
            .enumerate()
            .all(|(position, element)| self.index_of(element) == Some(position))
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<B, S> Uniqued<B, S>
where
    B: Sequence + Clone,
    B::Element: Hash + Eq,
    S: BuildHasher,
{
    /// Appends `element` unless an equal element is present.
    ///
    /// Returns `true` if the element was inserted.
    ///
    /// # Complexity
    ///
    /// O(1) amortized; inserting the first element past the band of the
    /// current scale rebuilds the index in O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::uniqued::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, element: B::Element) -> bool {
        self.insert_full(element).1
    }

    /// Appends `element` unless an equal element is present.
    ///
    /// Returns the position of the element and whether it was inserted.
    pub fn insert_full(&mut self, element: B::Element) -> (usize, bool) {
        let bucket = match self.lookup(&element) {
            Lookup::Found { position, .. } => return (position, false),
            Lookup::Missing { bucket } => bucket,
        };
        let hasher = &self.hasher;
        let storage = ReferenceCounter::make_mut(&mut self.storage);
        let position = storage.base.len();
        storage.base.push(element);
        if !storage.grow_if_needed(hasher)
            && let Some(bucket) = bucket
        {
            storage.index.occupy(bucket, position);
        }
        (position, true)
    }

    /// Inserts `element` at `index` unless an equal element is present
    /// anywhere in the collection.
    ///
    /// Returns `true` if the element was inserted.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::uniqued::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'c'].into();
    /// assert!(set.insert_at(1, 'b'));
    /// assert!(!set.insert_at(0, 'c'));
    /// assert_eq!(set.iter().collect::<String>(), "abc");
    /// ```
    pub fn insert_at(&mut self, index: usize, element: B::Element) -> bool {
        let length = self.len();
        assert!(index <= length, "insertion index {index} out of bounds for length {length}");
        let Lookup::Missing { bucket } = self.lookup(&element) else {
            return false;
        };
        let hasher = &self.hasher;
        let storage = ReferenceCounter::make_mut(&mut self.storage);
        storage.base.insert(index, element);
        if !storage.grow_if_needed(hasher)
            && let Some(bucket) = bucket
        {
            storage.index.shift_up_from(index);
            storage.index.occupy(bucket, index);
        }
        true
    }

    /// Removes `value` and returns the removed element.
    ///
    /// Later elements move one position forward. The index shrinks once the
    /// count falls well below the band of its scale, but never below the
    /// reserved scale.
    ///
    /// # Complexity
    ///
    /// O(n) for the position update; O(1) expected when removing the last
    /// element.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<B::Element>
    where
        B::Element: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.lookup(value) {
            Lookup::Found { bucket, position } => Some(self.remove_found(bucket, position)),
            Lookup::Missing { .. } => None,
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> B::Element {
        let storage = &*self.storage;
        let element = storage.base.at(index);
        let bucket = if storage.index.is_hashed() {
            match storage
                .index
                .find(self.hasher.hash_one(element), |position| position == index)
            {
                Probe::Occupied { bucket, .. } => Some(bucket),
                Probe::Vacant { .. } => unreachable!("element at {index} missing from the index"),
            }
        } else {
            None
        };
        self.remove_found(bucket, index)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<B::Element> {
        let last = self.len().checked_sub(1)?;
        Some(self.remove_at(last))
    }

    fn remove_found(&mut self, bucket: Option<usize>, position: usize) -> B::Element {
        let hasher = &self.hasher;
        let storage = ReferenceCounter::make_mut(&mut self.storage);
        if let Some(bucket) = bucket {
            let base = &storage.base;
            storage
                .index
                .remove(bucket, |stored| hasher.hash_one(base.at(stored)));
        }
        let element = storage.base.remove(position);
        if position < storage.base.len() {
            storage.index.shift_down_after(position);
        }
        storage.shrink_if_needed(hasher);
        element
    }

    /// Removes every element. The index drops back to the reserved scale.
    pub fn clear(&mut self) {
        let hasher = &self.hasher;
        let storage = ReferenceCounter::make_mut(&mut self.storage);
        storage.base.clear();
        let layout = HashLayout::new(storage.reserved, 0);
        storage.rehash(hasher, layout);
    }

    /// Ensures that the collection can hold `additional` more elements
    /// without rebuilding its index, and keeps the index at least that
    /// large from now on.
    ///
    /// # Panics
    ///
    /// Panics if the required scale exceeds `Scale::MAXIMUM`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::hash::Scale;
    /// use orderly::uniqued::OrderedSet;
    ///
    /// let mut set: OrderedSet<u8> = OrderedSet::new();
    /// set.reserve(100);
    /// assert_eq!(set.scale(), Scale::new(8));
    /// set.insert(1);
    /// set.remove(&1);
    /// assert_eq!(set.scale(), Scale::new(8));
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let required = Scale::smallest_for(self.len().saturating_add(additional));
        if required <= self.storage.reserved {
            return;
        }
        let hasher = &self.hasher;
        let storage = ReferenceCounter::make_mut(&mut self.storage);
        storage.reserved = storage.reserved.max(required);
        if required > storage.index.layout().scale() {
            storage.rehash(hasher, HashLayout::new(required, 0));
        }
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<B: Sequence, S> Uniqued<B, S> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.base.len()
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.base.is_empty()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&B::Element> {
        self.storage.base.get(index)
    }

    /// Returns the first element.
    pub fn first(&self) -> Option<&B::Element> {
        self.get(0)
    }

    /// Returns the last element.
    pub fn last(&self) -> Option<&B::Element> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns an iterator over the elements in sequence order.
    ///
    /// # Complexity
    ///
    /// O(1) to create, O(n) to consume
    #[inline]
    pub fn iter(&self) -> B::Iter<'_> {
        self.storage.base.iter()
    }

    /// Returns the backing sequence.
    #[inline]
    pub fn as_base(&self) -> &B {
        &self.storage.base
    }

    /// Returns the backing sequence, copying it if the storage is shared.
    pub fn into_base(self) -> B
    where
        B: Clone,
    {
        ReferenceCounter::unwrap_or_clone(self.storage).base
    }

    /// Returns the scale of the hash index.
    #[inline]
    pub fn scale(&self) -> Scale {
        self.storage.index.layout().scale()
    }

    /// Returns the bias of the hash index.
    #[inline]
    pub fn bias(&self) -> usize {
        self.storage.index.layout().bias()
    }

    /// Returns the hasher builder.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hasher
    }
}

// =============================================================================
// Set Operations
// =============================================================================

impl<B, S> Uniqued<B, S>
where
    B: Sequence + Default + Clone,
    B::Element: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    fn collect_unique<'a, I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = &'a B::Element>,
        B::Element: 'a,
    {
        let mut base = B::default();
        for element in elements {
            base.push(element.clone());
        }
        Self::from_unique_unchecked_with_hasher(base, self.hasher.clone())
    }

    /// Returns the elements of `self` followed by the elements of `other`
    /// that `self` lacks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::uniqued::OrderedSet;
    ///
    /// let first: OrderedSet<i32> = [3, 1].into();
    /// let second: OrderedSet<i32> = [2, 1, 4].into();
    /// assert_eq!(first.union(&second).iter().copied().collect::<Vec<_>>(), vec![3, 1, 2, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            if !result.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the elements of `self` that `other` contains, in the order of
    /// `self`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.collect_unique(self.iter().filter(|element| other.contains(*element)))
    }

    /// Returns the elements of `self` that `other` lacks followed by the
    /// elements of `other` that `self` lacks.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.collect_unique(
            self.iter()
                .filter(|element| !other.contains(*element))
                .chain(other.iter().filter(|element| !self.contains(*element))),
        )
    }

    /// Returns the elements of `self` that `other` lacks, in the order of
    /// `self`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.collect_unique(self.iter().filter(|element| !other.contains(*element)))
    }
}

impl<B, S> Uniqued<B, S>
where
    B: Sequence,
    B::Element: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if no element is in both collections.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller.iter().all(|element| !larger.contains(element))
    }
}

impl<B, S> SetAlgebra for Uniqued<B, S>
where
    B: Sequence + Default + Clone,
    B::Element: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Element = B::Element;

    fn contains(&self, element: &B::Element) -> bool {
        Self::contains(self, element)
    }

    fn insert(&mut self, element: B::Element) -> bool {
        Self::insert(self, element)
    }

    fn remove(&mut self, element: &B::Element) -> bool {
        Self::remove(self, element).is_some()
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
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<B, S: Clone> Clone for Uniqued<B, S> {
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
            hasher: self.hasher.clone(),
        }
    }
}

impl<B, S> Default for Uniqued<B, S>
where
    B: Sequence + Default,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, S> PartialEq for Uniqued<B, S>
where
    B: Sequence,
    B::Element: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.storage, &other.storage)
            || (self.len() == other.len() && self.iter().eq(other.iter()))
    }
}

impl<B, S> Eq for Uniqued<B, S>
where
    B: Sequence,
    B::Element: Eq,
{
}

impl<B, S> Hash for Uniqued<B, S>
where
    B: Sequence,
    B::Element: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<B, S> fmt::Debug for Uniqued<B, S>
where
    B: Sequence,
    B::Element: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<B, S> fmt::Display for Uniqued<B, S>
where
    B: Sequence,
    B::Element: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<B, S> Index<usize> for Uniqued<B, S>
where
    B: Sequence,
{
    type Output = B::Element;

    fn index(&self, index: usize) -> &B::Element {
        self.storage.base.at(index)
    }
}

impl<B, S> FromIterator<B::Element> for Uniqued<B, S>
where
    B: Sequence + Default + Clone,
    B::Element: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = B::Element>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<B, S> Extend<B::Element> for Uniqued<B, S>
where
    B: Sequence + Clone,
    B::Element: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = B::Element>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, S, const N: usize> From<[T; N]> for Uniqued<Vec<T>, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, B, S> IntoIterator for &'a Uniqued<B, S>
where
    B: Sequence,
{
    type Item = &'a B::Element;
    type IntoIter = B::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B, S> IntoIterator for Uniqued<B, S>
where
    B: Sequence + Clone + IntoIterator<Item = <B as Sequence>::Element>,
{
    type Item = <B as Sequence>::Element;
    type IntoIter = B::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_base().into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<B, S> serde::Serialize for Uniqued<B, S>
where
    B: Sequence,
    B::Element: serde::Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct UniquedVisitor<B, S> {
    marker: std::marker::PhantomData<(B, S)>,
}

#[cfg(feature = "serde")]
impl<B, S> UniquedVisitor<B, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, B, S> serde::de::Visitor<'de> for UniquedVisitor<B, S>
where
    B: Sequence + Default + Clone,
    B::Element: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = Uniqued<B, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut collection = Uniqued::new();
        while let Some(element) = seq.next_element()? {
            collection.insert(element);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de, B, S> serde::Deserialize<'de> for Uniqued<B, S>
where
    B: Sequence + Default + Clone,
    B::Element: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UniquedVisitor::new())
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(OrderedSet<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
