//! The open-addressing table that maps hash values to positions in a
//! backing sequence.
//!
//! Buckets hold either nothing or the position of an element in the
//! sequence; the elements themselves live in the sequence. The index never
//! hashes or compares elements on its own: callers pass hash values in and
//! answer "is the element at this position the one I am looking for?"
//! through closures.
//!
//! Collisions are resolved by linear probing. Removal uses backward-shift
//! deletion, so the table never contains tombstones and a probe can always
//! stop at the first empty bucket.

use std::num::NonZeroUsize;

use super::layout::HashLayout;

/// One slot of the table.
///
/// Positions are stored off by one so that the empty bucket fits in the
/// niche of `NonZeroUsize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Bucket(Option<NonZeroUsize>);

impl Bucket {
    const EMPTY: Self = Self(None);

    #[inline]
    const fn occupied(position: usize) -> Self {
        Self(NonZeroUsize::new(position + 1))
    }

    #[inline]
    fn position(self) -> Option<usize> {
        self.0.map(|stored| stored.get() - 1)
    }
}

/// The outcome of probing for a hash value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Probe {
    /// A bucket whose element matched.
    Occupied { bucket: usize, position: usize },
    /// The first empty bucket on the probe sequence; the element is absent
    /// and would be stored here.
    Vacant { bucket: usize },
}

#[derive(Clone, Debug, Default)]
pub(crate) struct HashIndex {
    layout: HashLayout,
    buckets: Box<[Bucket]>,
    occupied: usize,
}

impl HashIndex {
    /// An index without buckets.
    pub(crate) fn unhashed() -> Self {
        Self::default()
    }

    /// Builds a table for `layout` in which the element at position `i` has
    /// the `i`th hash of `hashes`.
    ///
    /// Elements must be unique; duplicates are not detected.
    pub(crate) fn build(layout: HashLayout, hashes: impl IntoIterator<Item = u64>) -> Self {
        let mut index = Self {
            layout,
            buckets: vec![Bucket::EMPTY; layout.capacity()].into_boxed_slice(),
            occupied: 0,
        };
        if layout.scale().is_hashed() {
            for (position, hash) in hashes.into_iter().enumerate() {
                index.insert(hash, position);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            scale = layout.scale().get(),
            bias = layout.bias(),
            count = index.occupied,
            "built hash index"
        );

        index
    }

    /// Discards every bucket and rebuilds the table for `layout`.
    pub(crate) fn rehash(&mut self, layout: HashLayout, hashes: impl IntoIterator<Item = u64>) {
        *self = Self::build(layout, hashes);
    }

    #[inline]
    pub(crate) const fn layout(&self) -> HashLayout {
        self.layout
    }

    #[inline]
    pub(crate) const fn is_hashed(&self) -> bool {
        self.layout.scale().is_hashed()
    }

    /// Probes for `hash` until `is_match` accepts an occupied bucket's
    /// position or an empty bucket is reached.
    pub(crate) fn find(&self, hash: u64, mut is_match: impl FnMut(usize) -> bool) -> Probe {
        debug_assert!(self.is_hashed(), "probing an unhashed index");
        let mut bucket = self.layout.start_bucket(hash);
        loop {
            match self.buckets[bucket].position() {
                None => return Probe::Vacant { bucket },
                Some(position) if is_match(position) => {
                    return Probe::Occupied { bucket, position };
                }
                Some(_) => bucket = self.layout.next_bucket(bucket),
            }
        }
    }

    /// Stores `position` in a bucket previously reported as vacant.
    pub(crate) fn occupy(&mut self, bucket: usize, position: usize) {
        debug_assert_eq!(self.buckets[bucket], Bucket::EMPTY, "bucket {bucket} is occupied");
        self.buckets[bucket] = Bucket::occupied(position);
        self.occupied += 1;
        debug_assert!(
            self.occupied <= self.layout.scale().maximum_capacity(),
            "hash index over capacity"
        );
    }

    /// Stores `position` in the first empty bucket of the probe sequence of
    /// `hash`. The caller guarantees that no equal element is present.
    pub(crate) fn insert(&mut self, hash: u64, position: usize) {
        if let Probe::Vacant { bucket } = self.find(hash, |_| false) {
            self.occupy(bucket, position);
        }
    }

    /// Empties `bucket` and shifts later members of its probe run backwards
    /// so that every remaining element stays reachable.
    ///
    /// `hash_of` returns the hash of the element at a position; it is only
    /// called for positions still stored in the table.
    pub(crate) fn remove(&mut self, bucket: usize, hash_of: impl Fn(usize) -> u64) {
        let layout = self.layout;
        debug_assert!(self.buckets[bucket].position().is_some(), "bucket {bucket} is empty");
        self.buckets[bucket] = Bucket::EMPTY;
        self.occupied -= 1;

        let mut hole = bucket;
        let mut current = layout.next_bucket(hole);
        while let Some(position) = self.buckets[current].position() {
            let ideal = layout.start_bucket(hash_of(position));
            // The element may fill the hole if the hole lies between its
            // ideal bucket and its current one.
            if layout.probe_distance(ideal, current) >= layout.probe_distance(hole, current) {
                self.buckets[hole] = self.buckets[current];
                self.buckets[current] = Bucket::EMPTY;
                hole = current;
            }
            current = layout.next_bucket(current);
        }
    }

    /// Decrements every stored position greater than `removed`, after the
    /// element at `removed` left the sequence.
    pub(crate) fn shift_down_after(&mut self, removed: usize) {
        for bucket in &mut *self.buckets {
            if let Some(position) = bucket.position().filter(|position| *position > removed) {
                *bucket = Bucket::occupied(position - 1);
            }
        }
    }

    /// Increments every stored position at or after `inserted`, after an
    /// element entered the sequence at `inserted`.
    pub(crate) fn shift_up_from(&mut self, inserted: usize) {
        for bucket in &mut *self.buckets {
            if let Some(position) = bucket.position().filter(|position| *position >= inserted) {
                *bucket = Bucket::occupied(position + 1);
            }
        }
    }

    /// Returns the positions stored in the table, in bucket order.
    #[cfg(test)]
    pub(crate) fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().filter_map(|bucket| bucket.position())
    }

    /// Returns the number of buckets visited before reaching `position`.
    #[cfg(test)]
    pub(crate) fn probe_length(&self, hash: u64, position: usize) -> Option<usize> {
        match self.find(hash, |candidate| candidate == position) {
            Probe::Occupied { bucket, .. } => {
                Some(self.layout.probe_distance(self.layout.start_bucket(hash), bucket) + 1)
            }
            Probe::Vacant { .. } => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
