//! Lock-guarded handle for sharing a [`Set`] between threads.
//!
//! [`Set`] itself performs no synchronization. [`SharedSet`] layers an
//! `Arc<parking_lot::RwLock<Set<T>>>` on top of it: clones of a handle
//! share one set, lookups take the read lock and mutations take the write
//! lock.
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::{Set, SharedSet};
//!
//! let shared = SharedSet::from(Set::of([1, 2, 3]));
//!
//! std::thread::scope(|scope| {
//!     for element in 4..8 {
//!         let handle = shared.clone();
//!         scope.spawn(move || handle.insert(element));
//!     }
//! });
//!
//! assert_eq!(shared.len(), 7);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use super::Set;

/// A cloneable, thread-safe handle to a [`Set`].
///
/// Every clone refers to the same underlying set.
pub struct SharedSet<T> {
    inner: Arc<RwLock<Set<T>>>,
}

static_assertions::assert_impl_all!(SharedSet<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(SharedSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> SharedSet<T> {
    /// Creates a handle to a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::from_set(Set::new())
    }

    /// Wraps an existing set.
    #[must_use]
    pub fn from_set(set: Set<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(set)),
        }
    }

    /// Returns the number of elements in the shared set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the shared set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every element from the shared set.
    pub fn clear(&self) {
        let mut guard = self.inner.write();
        trace_operation!("shared_clear", size = guard.len());
        guard.clear();
    }

    /// Runs `function` with shared access to the set.
    ///
    /// The read lock is held for the duration of the call, so `function`
    /// observes a stable snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{Set, SharedSet};
    ///
    /// let shared = SharedSet::from(Set::of([1, 2, 3]));
    /// let sum: i32 = shared.read(|set| set.iter().sum());
    /// assert_eq!(sum, 6);
    /// ```
    pub fn read<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&Set<T>) -> R,
    {
        function(&*self.inner.read())
    }

    /// Runs `function` with exclusive access to the set.
    ///
    /// Use this to apply several mutations atomically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{Set, SharedSet};
    ///
    /// let shared = SharedSet::from(Set::of([1, 2, 3]));
    /// shared.write(|set| set.retain(|element| *element != 2));
    /// assert!(!shared.contains(&2));
    /// ```
    pub fn write<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&mut Set<T>) -> R,
    {
        let mut guard = self.inner.write();
        trace_operation!("shared_write", size = guard.len());
        function(&mut *guard)
    }

    /// Returns the inner set when this is the last handle to it.
    ///
    /// # Errors
    ///
    /// Returns the handle back when other clones are still alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{Set, SharedSet};
    ///
    /// let shared = SharedSet::from(Set::of([1]));
    /// let other = shared.clone();
    ///
    /// let shared = shared.try_into_inner().unwrap_err();
    /// drop(other);
    /// assert_eq!(shared.try_into_inner().ok(), Some(Set::of([1])));
    /// ```
    pub fn try_into_inner(self) -> Result<Set<T>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T: Hash + Eq> SharedSet<T> {
    /// Inserts an element, returning `true` if it was not already present.
    pub fn insert(&self, element: T) -> bool {
        let mut guard = self.inner.write();
        trace_operation!("shared_insert", size = guard.len());
        guard.insert(element)
    }

    /// Removes an element, returning `true` if it was present.
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut guard = self.inner.write();
        trace_operation!("shared_remove", size = guard.len());
        guard.remove(element)
    }

    /// Returns `true` if the shared set contains the element.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains(element)
    }
}

impl<T: Clone> SharedSet<T> {
    /// Returns an independent copy of the current membership.
    ///
    /// Later mutations through any handle do not affect the copy.
    #[must_use]
    pub fn snapshot(&self) -> Set<T> {
        self.inner.read().clone()
    }
}

impl<T> Clone for SharedSet<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Set<T>> for SharedSet<T> {
    fn from(set: Set<T>) -> Self {
        Self::from_set(set)
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("SharedSet")
            .field(&*self.inner.read())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let shared: SharedSet<i32> = SharedSet::new();
        assert!(shared.is_empty());
        assert_eq!(shared.len(), 0);
    }

    #[rstest]
    fn test_clones_share_membership() {
        let shared = SharedSet::new();
        let handle = shared.clone();

        assert!(handle.insert("element"));
        assert!(shared.contains("element"));
        assert!(shared.remove("element"));
        assert!(!handle.contains("element"));
    }

    #[rstest]
    fn test_snapshot_is_independent() {
        let shared = SharedSet::from(Set::of([1, 2]));
        let snapshot = shared.snapshot();
        shared.insert(3);

        assert_eq!(snapshot, Set::of([1, 2]));
        assert_eq!(shared.len(), 3);
    }

    #[rstest]
    fn test_clear() {
        let shared = SharedSet::from(Set::of([1, 2, 3]));
        shared.clear();
        assert!(shared.is_empty());
    }

    #[rstest]
    fn test_write_applies_batch() {
        let shared = SharedSet::from(Set::of(1..=10));
        let removed = shared.write(|set| {
            let before = set.len();
            set.retain(|element| element % 2 == 0);
            before - set.len()
        });

        assert_eq!(removed, 5);
        assert_eq!(shared.snapshot(), Set::of([2, 4, 6, 8, 10]));
    }

    #[rstest]
    fn test_try_into_inner_requires_last_handle() {
        let shared = SharedSet::from(Set::of([1]));
        let other = shared.clone();

        let shared = match shared.try_into_inner() {
            Ok(_) => panic!("expected other handle to keep the set shared"),
            Err(shared) => shared,
        };
        drop(other);

        let set = shared.try_into_inner().ok();
        assert_eq!(set, Some(Set::of([1])));
    }

    #[rstest]
    fn test_debug_format() {
        let shared = SharedSet::from(Set::of([5]));
        assert_eq!(format!("{shared:?}"), "SharedSet({5})");
    }

    #[rstest]
    fn test_concurrent_inserts() {
        let shared = SharedSet::new();

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let handle = shared.clone();
                scope.spawn(move || {
                    for offset in 0..250 {
                        handle.insert(worker * 250 + offset);
                    }
                });
            }
        });

        assert_eq!(shared.len(), 1000);
        assert_eq!(shared.snapshot(), Set::of(0..1000));
    }
}
