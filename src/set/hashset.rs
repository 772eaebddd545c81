//! Hash-backed set.
//!
//! This module provides [`Set`], a mutable set that stores its membership in
//! a `HashMap<T, ()>`.
//!
//! # Overview
//!
//! - O(1) expected `contains`, `insert` and `remove`
//! - O(1) `len` and `is_empty`
//! - O(min(n, m)) `intersection` and `is_disjoint`
//! - O(n + m) `union`, `difference` and `symmetric_difference`
//!
//! Algebraic operations borrow both operands and allocate a fresh result,
//! so neither operand is ever modified.
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let mut set = Set::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(2);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&1));
//! assert!(!set.contains(&3));
//! ```
//!
//! # Operators
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let set_a = Set::of([1, 2, 3]);
//! let set_b = Set::of([2, 3, 4]);
//!
//! assert_eq!(&set_a | &set_b, Set::of([1, 2, 3, 4]));
//! assert_eq!(&set_a & &set_b, Set::of([2, 3]));
//! assert_eq!(&set_a - &set_b, Set::of([1]));
//! assert_eq!(&set_a ^ &set_b, Set::of([1, 4]));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

#[cfg(feature = "rayon")]
use rayon::iter::plumbing::UnindexedConsumer;
#[cfg(feature = "rayon")]
use rayon::iter::{
    FromParallelIterator, IntoParallelIterator, IntoParallelRefIterator, ParallelIterator,
};

use super::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// Membership is recorded in a `HashMap<T, ()>`, so the element type must be
/// `Hash + Eq`. Operations that need hashing are bounded accordingly and are
/// rejected at compile time for other element types.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `contains`             | O(1) expected     |
/// | `insert`               | O(1) expected     |
/// | `remove`               | O(1) expected     |
/// | `len`                  | O(1)              |
/// | `is_empty`             | O(1)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
/// | `is_subset`            | O(n)              |
///
/// # Examples
///
/// ```rust
/// use setwise::set::Set;
///
/// let set = Set::of(["apple", "banana", "cherry", "apple"]);
/// assert_eq!(set.len(), 3);
/// assert!(set.contains("banana"));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: HashMap<T, (), DefaultHashBuilder>,
}

// Element-type contract: hashing operations only exist for `Hash + Eq` types.
static_assertions::assert_impl_all!(Set<i32>: Clone, Default, PartialEq, Eq, FromIterator<i32>);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Extend<String>);
static_assertions::assert_not_impl_any!(Set<f64>: FromIterator<f64>, Extend<f64>, PartialEq);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::of([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element from the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::of([1, 2, 3, 4, 5]);
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        trace_operation!("clear", removed = self.len());
        self.inner.clear();
    }

    /// Returns an iterator over the elements of the set, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::of([1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.keys(),
        }
    }

    /// Calls `visit` once for every element, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::of([1, 2, 3]);
    /// let mut sum = 0;
    /// set.for_each(|element| sum += element);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.inner.keys().for_each(visit);
    }

    /// Returns every element in a freshly allocated `Vec`, in unspecified
    /// order.
    ///
    /// The vector does not share storage with the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::of([3, 1, 2, 1]);
    /// let mut elements = set.to_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set holding the distinct values among `elements`.
    ///
    /// Duplicates collapse to a single membership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::of([1, 2, 3, 2, 1]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::of(["a".to_string(), "b".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("a"));
    /// assert!(!set.contains("z"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was not already present. Inserting an
    /// element that is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert("hello"));
    /// assert!(!set.insert("hello"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent element
    /// is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&99));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// This is the in-place counterpart of [`Set::filter`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::of(1..=6);
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set, Set::of([2, 4, 6]));
    /// ```
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(|element, _| predicate(element));
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// Returns `false` without scanning when `self` has more elements than
    /// `other`.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let subset = Set::of([1, 2]);
    /// let superset = Set::of([1, 2, 3, 4]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let superset = Set::of([1, 2, 3, 4]);
    /// let subset = Set::of([1, 2]);
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set_a = Set::of([1, 2]);
    /// let set_b = Set::of([3, 4]);
    /// let set_c = Set::of([2, 3]);
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = Self::by_size(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }

    /// Orders two operands so that the first one has no more elements than
    /// the second.
    fn by_size<'a>(left: &'a Self, right: &'a Self) -> (&'a Self, &'a Self) {
        if right.len() < left.len() {
            (right, left)
        } else {
            (left, right)
        }
    }
}

impl<T: Clone + Hash + Eq> Set<T> {
    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let union = Set::of([1, 2, 3]).union(&Set::of([3, 4, 5]));
    ///
    /// assert_eq!(union.len(), 5);
    /// assert!((1..=5).all(|element| union.contains(&element)));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        trace_operation!(
            "union",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let intersection = Set::of([1, 2, 3, 4]).intersection(&Set::of([3, 4, 5, 6]));
    ///
    /// assert_eq!(intersection, Set::of([3, 4]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Scan the smaller operand and probe the larger one
        let (smaller, larger) = Self::by_size(self, other);

        let mut result = Self::with_capacity(smaller.len());
        for element in smaller {
            if larger.contains(element) {
                result.insert(element.clone());
            }
        }
        trace_operation!(
            "intersection",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains elements that are in `self` but not in `other`.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let difference = Set::of([1, 2, 3, 4]).difference(&Set::of([3, 4, 5, 6]));
    ///
    /// assert_eq!(difference, Set::of([1, 2]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        trace_operation!(
            "difference",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns the symmetric difference of two sets.
    ///
    /// The symmetric difference contains elements that are in either set
    /// but not in both.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let symmetric_difference = Set::of([1, 2, 3]).symmetric_difference(&Set::of([3, 4, 5]));
    ///
    /// assert_eq!(symmetric_difference, Set::of([1, 2, 4, 5]));
    /// assert!(!symmetric_difference.contains(&3));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        for element in other {
            if !self.contains(element) {
                result.insert(element.clone());
            }
        }
        trace_operation!(
            "symmetric_difference",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns a new set holding exactly the elements for which `predicate`
    /// returns `true`.
    ///
    /// The order in which elements are tested is unspecified, so the
    /// predicate should depend only on its argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let evens = Set::of(1..=6).filter(|element| element % 2 == 0);
    /// assert_eq!(evens, Set::of([2, 4, 6]));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut result = Self::new();
        for element in self {
            if predicate(element) {
                result.insert(element.clone());
            }
        }
        trace_operation!("filter", source = self.len(), result = result.len());
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> Clone for SetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::of(elements)
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T: Copy + Hash + Eq + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            fmt::Display::fmt(element, formatter)?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<T: Clone + Hash + Eq> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the union of `self` and `other` as a new set.
    fn bitor(self, other: &Set<T>) -> Self::Output {
        self.union(other)
    }
}

impl<T: Clone + Hash + Eq> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the intersection of `self` and `other` as a new set.
    fn bitand(self, other: &Set<T>) -> Self::Output {
        self.intersection(other)
    }
}

impl<T: Clone + Hash + Eq> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the difference of `self` and `other` as a new set.
    fn sub(self, other: &Set<T>) -> Self::Output {
        self.difference(other)
    }
}

impl<T: Clone + Hash + Eq> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns the symmetric difference of `self` and `other` as a new set.
    fn bitxor(self, other: &Set<T>) -> Self::Output {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
type SetParallelIteratorInner<T> =
    rayon::iter::Map<rayon::collections::hash_map::IntoIter<T, ()>, fn((T, ())) -> T>;

/// An owning parallel iterator over the elements of a [`Set`].
#[cfg(feature = "rayon")]
pub struct SetParallelIterator<T: Hash + Eq + Send> {
    inner: SetParallelIteratorInner<T>,
}

#[cfg(feature = "rayon")]
impl<T: Hash + Eq + Send> ParallelIterator for SetParallelIterator<T> {
    type Item = T;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        self.inner.drive_unindexed(consumer)
    }

    fn opt_len(&self) -> Option<usize> {
        self.inner.opt_len()
    }
}

#[cfg(feature = "rayon")]
impl<T: Hash + Eq + Send> IntoParallelIterator for Set<T> {
    type Iter = SetParallelIterator<T>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        fn extract_key<T>((key, ()): (T, ())) -> T {
            key
        }
        SetParallelIterator {
            inner: self
                .inner
                .into_par_iter()
                .map(extract_key as fn((T, ())) -> T),
        }
    }
}

#[cfg(feature = "rayon")]
impl<T: Hash + Eq + Send> FromParallelIterator<T> for Set<T> {
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        Self {
            inner: par_iter
                .into_par_iter()
                .map(|element| (element, ()))
                .collect(),
        }
    }
}

#[cfg(feature = "rayon")]
impl<T: Hash + Eq + Sync> Set<T> {
    /// Returns a parallel iterator over the elements of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rayon::prelude::*;
    /// use setwise::set::Set;
    ///
    /// let set = Set::of(1..=100);
    /// let sum: i32 = set.par_iter().sum();
    /// assert_eq!(sum, 5050);
    /// ```
    pub fn par_iter(&self) -> impl ParallelIterator<Item = &T> + '_ {
        self.inner.par_iter().map(|(element, _)| element)
    }
}

#[cfg(feature = "rayon")]
impl<T: Clone + Hash + Eq + Send + Sync> Set<T> {
    /// Parallel counterpart of [`Set::filter`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let evens = Set::of(1..=6).par_filter(|element| element % 2 == 0);
    /// assert_eq!(evens, Set::of([2, 4, 6]));
    /// ```
    #[must_use]
    pub fn par_filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Sync + Send,
    {
        let result: Self = self
            .par_iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect();
        trace_operation!("par_filter", source = self.len(), result = result.len());
        result
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self)
    }
}

/// Upper bound on the capacity reserved from an untrusted length hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

#[cfg(feature = "serde")]
struct SetVisitor<T>(std::marker::PhantomData<T>);

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ELEMENTS);
        let mut set = Set::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor(std::marker::PhantomData))
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Rayon Tests
// =============================================================================


// =============================================================================
// Serde Tests
// =============================================================================
