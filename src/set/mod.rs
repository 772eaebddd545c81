//! Hash-backed mathematical sets.
//!
//! This module provides [`Set`], an unordered collection of unique elements
//! with the usual set algebra:
//!
//! - [`Set::union`]: elements in either operand
//! - [`Set::intersection`]: elements in both operands
//! - [`Set::difference`]: elements in the receiver only
//! - [`Set::symmetric_difference`]: elements in exactly one operand
//!
//! plus subset, superset and disjointness predicates, equality, filtering and
//! iteration. Every algebraic operation returns a new set and leaves both
//! operands untouched.
//!
//! # Ordering
//!
//! Iteration order is unspecified and may differ between two sets holding the
//! same elements. Code that needs a stable order should sort the output of
//! [`Set::to_vec`].
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let set_a = Set::of([1, 2, 3]);
//! let set_b = Set::of([3, 4, 5]);
//!
//! assert_eq!(set_a.union(&set_b).len(), 5);
//! assert_eq!(set_a.intersection(&set_b), Set::of([3]));
//! assert_eq!(set_a.difference(&set_b), Set::of([1, 2]));
//! assert_eq!(set_a.symmetric_difference(&set_b), Set::of([1, 2, 4, 5]));
//! ```
//!
//! ## `SharedSet`
//!
//! With the `shared` feature, [`SharedSet`] wraps a set in a reader-writer
//! lock so that several threads can work on the same membership.
//!
//! ```rust
//! # #[cfg(feature = "shared")]
//! # {
//! use setwise::set::SharedSet;
//!
//! let shared = SharedSet::new();
//! let handle = shared.clone();
//!
//! std::thread::spawn(move || {
//!     handle.insert(42);
//! })
//! .join()
//! .unwrap();
//!
//! assert!(shared.contains(&42));
//! # }
//! ```

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hash builder used by the membership mapping of every [`Set`].
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// which is fast but not resistant to hash flooding.
///
/// When only the `ahash` feature is enabled, this is `ahash::RandomState`.
///
/// Otherwise (default), this is `std::collections::hash_map::RandomState`.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by the membership mapping of every [`Set`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by the membership mapping of every [`Set`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// Tracing
// =============================================================================

// Must stay above the submodule declarations: they see it by textual scope.

/// Emits a `TRACE` event for a set operation when the `tracing` feature is
/// enabled. Expands to nothing otherwise, so the field expressions are never
/// evaluated.
#[cfg(feature = "tracing")]
macro_rules! trace_operation {
    ($operation:literal $(, $field:ident = $value:expr)* $(,)?) => {
        tracing::trace!(operation = $operation $(, $field = $value)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_operation {
    ($($tokens:tt)*) => {};
}

mod hashset;
mod macros;
#[cfg(feature = "shared")]
mod shared;

pub use hashset::Set;
pub use hashset::SetIntoIterator;
pub use hashset::SetIterator;
#[cfg(feature = "shared")]
pub use shared::SharedSet;

#[cfg(feature = "rayon")]
pub use hashset::SetParallelIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod default_hash_builder_tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_same_builder_hashes_equal_values_equally() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("element"), builder.hash_one("element"));
        assert_eq!(builder.hash_one(42_i32), builder.hash_one(42_i32));
    }

    #[rstest]
    fn test_cloned_builder_hashes_like_original() {
        let builder = DefaultHashBuilder::default();
        let cloned = builder.clone();
        assert_eq!(builder.hash_one(7_u64), cloned.hash_one(7_u64));
    }
}
