//! The `set!` construction macro.

/// Creates a [`Set`](crate::set::Set) from a list of elements.
///
/// `set![]` creates an empty set; `set![a, b, c]` creates a set holding the
/// distinct values among `a`, `b` and `c`. A trailing comma is accepted.
///
/// # Examples
///
/// ```rust
/// use setwise::set;
/// use setwise::set::Set;
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let numbers = set![1, 2, 3, 2, 1,];
/// assert_eq!(numbers.len(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::set::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::set::Set::of([$($element),+])
    };
}
