//! Word-packed storage for [`BitSet`](super::BitSet).
//!
//! Bit `b` of word `w` stands for the integer `w * WORD_BITS + b`. Storage is
//! kept trimmed: the last word, if any, is never zero, so two storages hold
//! the same members exactly when their words are equal.

use std::ops::Range;

/// Number of bits in one storage word.
pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// Splits `value` into its word index and the bit mask inside that word.
#[inline]
pub(crate) const fn location(value: usize) -> (usize, u64) {
    (value / WORD_BITS, 1 << (value % WORD_BITS))
}

/// Mask of the bits at or above `bit` within a word.
#[inline]
const fn mask_from(bit: usize) -> u64 {
    u64::MAX << bit
}

/// Mask of the bits strictly below `bit` within a word.
#[inline]
const fn mask_below(bit: usize) -> u64 {
    if bit == 0 { 0 } else { u64::MAX >> (WORD_BITS - bit) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct WordStorage {
    words: Vec<u64>,
}

impl WordStorage {
    pub(crate) const fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub(crate) fn from_words(words: Vec<u64>) -> Self {
        let mut storage = Self { words };
        storage.trim();
        storage
    }

    /// Words covering exactly the integers in `range`, built from runs of
    /// full words plus at most two partial boundary words.
    pub(crate) fn from_range(range: Range<usize>) -> Self {
        if range.is_empty() {
            return Self::new();
        }
        let (first_word, _) = location(range.start);
        let (last_word, _) = location(range.end - 1);
        let mut words = vec![u64::MAX; last_word + 1];
        words[..first_word].fill(0);
        words[first_word] &= mask_from(range.start % WORD_BITS);
        if range.end % WORD_BITS != 0 {
            words[last_word] &= mask_below(range.end % WORD_BITS);
        }
        Self::from_words(words)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of members (population count over every word).
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub(crate) fn contains(&self, value: usize) -> bool {
        let (word, mask) = location(value);
        self.words.get(word).is_some_and(|bits| bits & mask != 0)
    }

    pub(crate) fn insert(&mut self, value: usize) -> bool {
        let (word, mask) = location(value);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let bits = &mut self.words[word];
        let inserted = *bits & mask == 0;
        *bits |= mask;
        inserted
    }

    pub(crate) fn remove(&mut self, value: usize) -> bool {
        let (word, mask) = location(value);
        let Some(bits) = self.words.get_mut(word) else {
            return false;
        };
        let removed = *bits & mask != 0;
        *bits &= !mask;
        if removed {
            self.trim();
        }
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.words.clear();
    }

    pub(crate) fn first(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, word)| **word != 0)
            .map(|(index, word)| index * WORD_BITS + word.trailing_zeros() as usize)
    }

    pub(crate) fn last(&self) -> Option<usize> {
        let word = *self.words.last()?;
        let index = self.words.len() - 1;
        Some(index * WORD_BITS + (WORD_BITS - 1 - word.leading_zeros() as usize))
    }

    /// Applies `operation` to matched word pairs of `first` and `second`.
    ///
    /// With `including_tail` the longer operand's remaining words are copied
    /// unchanged (union, symmetric difference); otherwise they are dropped
    /// (intersection).
    pub(crate) fn combine(
        first: &Self,
        second: &Self,
        including_tail: bool,
        operation: impl Fn(u64, u64) -> u64,
    ) -> Self {
        let common = first.len().min(second.len());
        let mut words: Vec<u64> = first.words[..common]
            .iter()
            .zip(&second.words[..common])
            .map(|(left, right)| operation(*left, *right))
            .collect();
        if including_tail {
            let longer = if first.len() > common { first } else { second };
            words.extend_from_slice(&longer.words[common..]);
        }
        Self::from_words(words)
    }

    /// In-place `self & !other`; only the common prefix can change.
    pub(crate) fn subtract(&mut self, other: &Self) {
        for (word, removed) in self.words.iter_mut().zip(&other.words) {
            *word &= !removed;
        }
        self.trim();
    }

    /// Clears every bit outside `range`, touching at most two partial words.
    pub(crate) fn retain_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.words.len() * WORD_BITS);
        if range.start >= end {
            self.words.clear();
            return;
        }
        let (first_word, _) = location(range.start);
        let (last_word, _) = location(end - 1);
        self.words.truncate(last_word + 1);
        self.words[..first_word].fill(0);
        self.words[first_word] &= mask_from(range.start % WORD_BITS);
        if end % WORD_BITS != 0 {
            self.words[last_word] &= mask_below(end % WORD_BITS);
        }
        self.trim();
    }

    pub(crate) fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len()
            && self
                .words
                .iter()
                .zip(&other.words)
                .all(|(word, superset)| word & !superset == 0)
    }

    pub(crate) fn is_disjoint(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(left, right)| left & right == 0)
    }

    fn trim(&mut self) {
        let used = self
            .words
            .iter()
            .rposition(|word| *word != 0)
            .map_or(0, |index| index + 1);
        self.words.truncate(used);
    }

    pub(crate) fn ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Ascending iterator over the set bits of a [`WordStorage`].
#[derive(Clone)]
pub(crate) struct Ones<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.count_ones() as usize
            + self
                .words
                .get(self.index + 1..)
                .map_or(0, |rest| rest.iter().map(|word| word.count_ones() as usize).sum());
        (remaining, Some(remaining))
    }
}
