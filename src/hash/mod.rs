//! Hash table layouts shared by the uniqued collections.
//!
//! This module exposes the geometry of the index a [`Uniqued`] collection
//! keeps next to its elements: the capacity classes ([`Scale`]), the probe
//! origin ([`HashLayout`]) and helpers that enumerate the structurally
//! distinct layouts for exhaustive testing. The table itself is private.
//!
//! [`Uniqued`]: crate::uniqued::Uniqued

mod index;
mod layout;

pub(crate) use index::{HashIndex, Probe};
pub use layout::{
    HashLayout, LayoutSample, MAXIMUM_UNHASHED_COUNT, Scale, interesting_biases,
    interesting_counts, sample_layouts,
};

/// The hasher builder used when none is specified.
///
/// The `fxhash` feature selects `rustc_hash::FxBuildHasher` and the `ahash`
/// feature `ahash::RandomState`; otherwise the standard library's randomly
/// seeded SipHash is used.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The hasher builder used when none is specified.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// The hasher builder used when none is specified.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;
