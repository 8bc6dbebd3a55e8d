//! # orderly
//!
//! Dense bit sets and order-preserving unique collections for Rust.
//!
//! ## Overview
//!
//! This library provides two in-memory building blocks for set-like
//! collections:
//!
//! - **Bit sets**: [`BitSet`](bitset::BitSet), a word-packed set of
//!   non-negative integers with full set algebra
//! - **Unique ordered collections**: [`Uniqued`](uniqued::Uniqued), an ordered
//!   sequence of unique elements with O(1) expected membership tests, backed
//!   by a stable open-addressing hash index
//!
//! The hash index layout is described by a *scale* (capacity class) and a
//! *bias* (probe origin offset). Both are exposed through the [`hash`]
//! module, which also enumerates the structurally distinct layouts a given
//! element count can produce.
//!
//! ## Feature Flags
//!
//! - `bitset`: [`BitSet`](bitset::BitSet) (default)
//! - `uniqued`: [`Uniqued`](uniqued::Uniqued) and [`OrderedSet`](uniqued::OrderedSet) (default)
//! - `arc`: use `Arc` instead of `Rc` for copy-on-write storage (`Send + Sync`)
//! - `serde`: `Serialize`/`Deserialize` as sequences
//! - `smallvec`: `SmallVec` as a backing sequence
//! - `fxhash` / `ahash`: faster default hashers
//! - `tracing`: trace events whenever a hash index is rebuilt
//! - `full`: enable `bitset`, `uniqued`, `serde`, `smallvec` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let mut set: OrderedSet<i32> = [5, 5, 3, 1, 3].into();
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
//!
//! set.insert(4);
//! set.remove(&3);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5, 1, 4]);
//!
//! let bits: BitSet = [1, 2, 3, 4].into();
//! let evens: BitSet = [6, 4, 2, 0].into();
//! assert_eq!(bits.intersection(&evens), BitSet::from([2, 4]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use orderly::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set_algebra::SetAlgebra;

    #[cfg(feature = "bitset")]
    pub use crate::bitset::BitSet;

    #[cfg(feature = "uniqued")]
    pub use crate::uniqued::{OrderedSet, Sequence, Uniqued};
}

pub mod error;
pub mod set_algebra;

#[cfg(feature = "bitset")]
pub mod bitset;

#[cfg(feature = "uniqued")]
pub mod hash;

#[cfg(feature = "uniqued")]
pub mod uniqued;

pub use error::LayoutError;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type backing copy-on-write storage.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Tests
// =============================================================================
