//! The common set interface.
//!
//! [`SetAlgebra`] lets generic code treat every set-like collection of this
//! crate the same way: membership, single-element updates and the four
//! binary set operations, in both value-returning and in-place forms.
//!
//! # Laws
//!
//! Implementations must satisfy, for all sets `a` and `b`:
//!
//! - `a.intersection(&b) == b.intersection(&a)` as sets
//! - `a.intersection(&a) == a`
//! - `a.union(&Self::default())` contains exactly the members of `a`
//! - `a.difference(&a)` is empty
//!
//! Order-preserving implementations keep the order of `self` first and
//! append members of `other` afterwards, so "as sets" comparisons ignore
//! order for them.
//!
//! # Examples
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! fn shared<S: SetAlgebra>(first: &S, second: &S) -> S {
//!     first.intersection(second)
//! }
//!
//! let first: BitSet = [1, 2, 3].into();
//! let second: BitSet = [2, 3, 4].into();
//! assert_eq!(shared(&first, &second), BitSet::from([2, 3]));
//!
//! let first: OrderedSet<&str> = ["a", "b", "c"].into();
//! let second: OrderedSet<&str> = ["c", "b"].into();
//! let common = shared(&first, &second);
//! assert_eq!(common.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
//! ```

/// A collection with set semantics.
pub trait SetAlgebra: Sized {
    /// The member type.
    type Element;

    /// Returns `true` if `element` is a member.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Adds `element`, returning `true` if it was not already a member.
    fn insert(&mut self, element: Self::Element) -> bool;

    /// Removes `element`, returning `true` if it was a member.
    fn remove(&mut self, element: &Self::Element) -> bool;

    /// Returns the members of either set.
    #[must_use]
    fn union(&self, other: &Self) -> Self;

    /// Returns the members common to both sets.
    #[must_use]
    fn intersection(&self, other: &Self) -> Self;

    /// Returns the members of exactly one of the sets.
    #[must_use]
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// Returns the members of `self` that are not in `other`.
    #[must_use]
    fn difference(&self, other: &Self) -> Self;

    /// Returns `true` if every member of `self` is in `other`.
    fn is_subset(&self, other: &Self) -> bool;

    /// Returns `true` if the sets have no member in common.
    fn is_disjoint(&self, other: &Self) -> bool;

    /// Returns `true` if every member of `other` is in `self`.
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Replaces `self` with its union with `other`.
    fn form_union(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Replaces `self` with its intersection with `other`.
    fn form_intersection(&mut self, other: &Self) {
        *self = self.intersection(other);
    }

    /// Replaces `self` with its symmetric difference with `other`.
    fn form_symmetric_difference(&mut self, other: &Self) {
        *self = self.symmetric_difference(other);
    }

    /// Removes every member of `other` from `self`.
    fn subtract(&mut self, other: &Self) {
        *self = self.difference(other);
    }
}
