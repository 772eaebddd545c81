//! # setwise
//!
//! A generic, hash-backed mathematical set for Rust.
//!
//! ## Overview
//!
//! [`Set`] is an unordered collection of unique elements with the standard
//! set algebra:
//!
//! - **Construction**: `Set::new`, `Set::of`, the `set!` macro, `collect()`
//! - **Mutation**: `insert`, `remove`, `clear`, `retain`, `extend`
//! - **Queries**: `contains`, `len`, `is_empty`, `to_vec`, `iter`
//! - **Algebra**: `union`, `intersection`, `difference`, `symmetric_difference`
//!   (also as `|`, `&`, `-` and `^` on references)
//! - **Relations**: `is_subset`, `is_superset`, `is_disjoint`, `==`
//! - **Traversal**: `for_each`, `filter`
//!
//! Iteration order is unspecified.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`] as a sequence
//! - `rayon`: parallel iteration, parallel filter and parallel collect
//! - `shared`: [`SharedSet`](set::SharedSet), a lock-guarded handle for
//!   sharing a set between threads
//! - `tracing`: `TRACE` events for set operations
//! - `fxhash`: hash with `rustc-hash` instead of the standard `RandomState`
//! - `ahash`: hash with `ahash` instead of the standard `RandomState`
//! - `full`: enable `serde`, `rayon`, `shared` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let primes = set![2, 3, 5, 7];
//! let odds = Set::of([1, 3, 5, 7, 9]);
//!
//! assert_eq!(primes.intersection(&odds), set![3, 5, 7]);
//! assert!(set![3, 5].is_subset(&primes));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set types and the `set!` macro.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set;
    pub use crate::set::*;
}

pub mod set;

pub use set::Set;
