//! Immutable container for zero or one element.
//!
//! This module provides [`Opt`], a tagged union with exactly two variants:
//! [`Present`](Opt::Present), holding one value, and [`Absent`](Opt::Absent),
//! holding none. It mirrors the combinator vocabulary of
//! [`Seq`](crate::seq::Seq), specialized to cardinality ≤ 1, and converts
//! losslessly to a sequence of zero or one element.
//!
//! `Opt` has no state transitions: it is immutable, and every combinator is
//! a pure function producing a new `Opt` (or `Seq`) instance.
//!
//! # Examples
//!
//! ```rust
//! use imseq::Opt;
//!
//! let doubled = Opt::of(Some(5)).map(|x| x * 2);
//! assert_eq!(doubled.get(), Ok(&10));
//!
//! let absent: Opt<i32> = Opt::of(None);
//! assert_eq!(absent.clone().map(|x| x * 2), Opt::none());
//! assert_eq!(absent.get_or_else_value(0), 0);
//! ```
//!
//! # Relationship to `std::option::Option`
//!
//! `Opt` converts to and from the standard `Option` in both directions, so
//! it interoperates with any `Option`-based API:
//!
//! ```rust
//! use imseq::Opt;
//!
//! let present: Opt<i32> = Some(1).into();
//! let standard: Option<i32> = present.into();
//! assert_eq!(standard, Some(1));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::error::CollectionError;
use crate::seq::Seq;

/// An immutable container holding zero or one value.
///
/// The two variants are public and pattern-matchable; the combinator
/// methods below are the preferred interface. The canonical absent value,
/// [`Opt::none`], is a constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Opt<T> {
    /// Exactly one value is held.
    Present(T),
    /// No value is held.
    Absent,
}

impl<T> Opt<T> {
    /// Returns the canonical absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::Opt;
    ///
    /// let absent: Opt<i32> = Opt::none();
    /// assert!(absent.is_absent());
    /// ```
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Wraps a value. Always yields [`Opt::Present`].
    #[inline]
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an `Opt` from a standard `Option`: `None` (the absence
    /// sentinel) yields [`Opt::Absent`], `Some` yields [`Opt::Present`].
    #[inline]
    #[must_use]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Looks up `key` in a map: `Present` with a copy of the value if the
    /// key is present, `Absent` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use imseq::Opt;
    ///
    /// let mut ages = HashMap::new();
    /// ages.insert("alice", 30);
    /// assert_eq!(Opt::from_map(&ages, "alice"), Opt::some(30));
    /// assert_eq!(Opt::from_map(&ages, "bob"), Opt::none());
    /// ```
    #[must_use]
    pub fn from_map<K, Q>(map: &HashMap<K, T>, key: &Q) -> Self
    where
        T: Clone,
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
    {
        map.get(key).cloned().into()
    }

    /// Looks up `index` in a slice: `Present` with a copy of the element if
    /// the index is in bounds, `Absent` otherwise.
    #[must_use]
    pub fn from_slice(slice: &[T], index: usize) -> Self
    where
        T: Clone,
    {
        slice.get(index).cloned().into()
    }

    /// Returns the number of held values: 0 or 1.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Present(_) => 1,
            Self::Absent => 0,
        }
    }

    /// Returns `true` if no value is held.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is held.
    #[inline]
    #[must_use]
    pub const fn non_empty(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if a value is held. Alias for [`Opt::non_empty`].
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.non_empty()
    }

    /// Returns `true` if no value is held. Alias for [`Opt::is_empty`].
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.is_empty()
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::{CollectionError, Opt};
    ///
    /// assert_eq!(Opt::some(5).get(), Ok(&5));
    /// assert_eq!(
    ///     Opt::<i32>::none().get(),
    ///     Err(CollectionError::EmptyCollection { operation: "get" })
    /// );
    /// ```
    pub fn get(&self) -> Result<&T, CollectionError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(CollectionError::EmptyCollection { operation: "get" }),
        }
    }

    /// Consumes the `Opt` and returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if absent.
    pub fn into_value(self) -> Result<T, CollectionError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(CollectionError::EmptyCollection { operation: "get" }),
        }
    }

    /// Returns the held value, or the result of `default` if absent.
    #[must_use]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Returns the held value, or `default` if absent.
    #[must_use]
    pub fn get_or_else_value(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns self if present, otherwise the result of `alternative`.
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    /// Returns self if present, otherwise `alternative`.
    #[must_use]
    pub fn or_else_value(self, alternative: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative,
        }
    }

    /// Applies `function` to the held value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::Opt;
    ///
    /// assert_eq!(Opt::some(5).map(|x| x * 2), Opt::some(10));
    /// assert_eq!(Opt::<i32>::none().map(|x| x * 2), Opt::none());
    /// ```
    #[must_use]
    pub fn map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Opt::Present(function(value)),
            Self::Absent => Opt::Absent,
        }
    }

    /// Applies `function`, which returns an `Opt`, to the held value.
    /// [`Opt::Absent`] short-circuits without invoking `function`.
    #[must_use]
    pub fn flat_map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Keeps the held value only if it satisfies `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Keeps the held value only if it does not satisfy `predicate`.
    #[must_use]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Tests whether the held value, if any, satisfies `predicate`.
    #[must_use]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Tests whether the held value satisfies `predicate`. Vacuously true
    /// when absent.
    #[must_use]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => true,
        }
    }

    /// Counts the held values satisfying `predicate`: 0 or 1.
    #[must_use]
    pub fn count_by<P>(&self, predicate: P) -> usize
    where
        P: FnOnce(&T) -> bool,
    {
        usize::from(self.exists(predicate))
    }

    /// Returns the held value if it satisfies `predicate`.
    #[must_use]
    pub fn find<P>(&self, predicate: P) -> Opt<&T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(value) {
                    Opt::Present(value)
                } else {
                    Opt::Absent
                }
            }
            Self::Absent => Opt::Absent,
        }
    }

    /// Tests whether the held value equals `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Present(value) => value == element,
            Self::Absent => false,
        }
    }

    /// Folds the held value into `zero`: `op(zero, value)` when present,
    /// `zero` unchanged when absent.
    pub fn fold<B, F>(&self, zero: B, operation: F) -> B
    where
        F: FnOnce(B, &T) -> B,
    {
        match self {
            Self::Present(value) => operation(zero, value),
            Self::Absent => zero,
        }
    }

    /// Applies `function` to the held value, if any, for its side effects.
    pub fn each<F>(&self, function: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            function(value);
        }
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if absent.
    pub fn head(&self) -> Result<&T, CollectionError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(CollectionError::EmptyCollection { operation: "head" }),
        }
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if absent.
    pub fn last(&self) -> Result<&T, CollectionError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(CollectionError::EmptyCollection { operation: "last" }),
        }
    }

    /// Returns the held value by reference, or [`Opt::Absent`]. Never fails.
    #[must_use]
    pub fn head_option(&self) -> Opt<&T> {
        self.as_ref()
    }

    /// Returns the held value by reference, or [`Opt::Absent`]. Never fails.
    #[must_use]
    pub fn last_option(&self) -> Opt<&T> {
        self.as_ref()
    }

    /// Converts to a sequence of zero or one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::{seq, Opt, Seq};
    ///
    /// assert_eq!(Opt::some(5).to_seq(), seq![5]);
    /// assert_eq!(Opt::<i32>::none().to_seq(), Seq::empty());
    /// ```
    #[must_use]
    pub fn to_seq(self) -> Seq<T> {
        match self {
            Self::Present(value) => Seq::singleton(value),
            Self::Absent => Seq::empty(),
        }
    }

    /// Selects the first `n` elements of the one-or-zero-element sequence:
    /// the single element when present and `n > 0`, else empty.
    #[must_use]
    pub fn take(self, n: usize) -> Seq<T> {
        if n == 0 { Seq::empty() } else { self.to_seq() }
    }

    /// Selects the last `n` elements. Identical to [`Opt::take`] at this
    /// cardinality.
    #[must_use]
    pub fn take_right(self, n: usize) -> Seq<T> {
        self.take(n)
    }

    /// Drops the first `n` elements: the single element survives only when
    /// `n == 0`.
    #[must_use]
    pub fn drop(self, n: usize) -> Seq<T> {
        if n == 0 { self.to_seq() } else { Seq::empty() }
    }

    /// Drops the last `n` elements. Identical to [`Opt::drop`] at this
    /// cardinality.
    #[must_use]
    pub fn drop_right(self, n: usize) -> Seq<T> {
        self.drop(n)
    }

    /// Removes the first element: always the empty sequence, since a
    /// container of at most one element has nothing after its head.
    #[must_use]
    pub fn tail(self) -> Seq<T> {
        Seq::empty()
    }

    /// Removes the last element: always the empty sequence.
    #[must_use]
    pub fn init(self) -> Seq<T> {
        Seq::empty()
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Present(value) => Opt::Present(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Converts to a standard `Option` by reference.
    #[inline]
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Consumes the `Opt` and converts to a standard `Option`.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns a snapshot copy of the held values as a `Vec` of zero or one
    /// element.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Self::Present(value) => vec![value.clone()],
            Self::Absent => Vec::new(),
        }
    }

    /// Returns an iterator over the held value, yielding zero or one item.
    ///
    /// Iteration is restartable: each call yields a fresh iterator.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            value: self.as_option(),
        }
    }
}

impl<T> Opt<Opt<T>> {
    /// Removes one level of nesting: the held inner `Opt` when present,
    /// [`Opt::Absent`] otherwise.
    ///
    /// Flattening is only defined when the held value is itself an `Opt`,
    /// which the receiver type enforces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::Opt;
    ///
    /// assert_eq!(Opt::some(Opt::some(5)).flatten(), Opt::some(5));
    /// assert_eq!(Opt::some(Opt::<i32>::none()).flatten(), Opt::none());
    /// assert_eq!(Opt::<Opt<i32>>::none().flatten(), Opt::none());
    /// ```
    #[must_use]
    pub fn flatten(self) -> Opt<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Opt::Absent,
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A borrowed iterator over the held value of an [`Opt`].
pub struct Iter<'a, T> {
    value: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.value.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the held value of an [`Opt`].
pub struct IntoIter<T> {
    value: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.value.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            value: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Opt<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;
    use rstest::rstest;

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_none_is_absent() {
        let absent: Opt<i32> = Opt::none();
        assert!(absent.is_absent());
        assert!(absent.is_empty());
        assert_eq!(absent.len(), 0);
    }

    #[rstest]
    fn test_some_is_present() {
        let present = Opt::some(5);
        assert!(present.is_present());
        assert!(present.non_empty());
        assert_eq!(present.len(), 1);
    }

    #[rstest]
    fn test_of_maps_absence_sentinel() {
        assert_eq!(Opt::of(Some(5)), Opt::some(5));
        assert_eq!(Opt::<i32>::of(None), Opt::none());
    }

    #[rstest]
    fn test_from_map() {
        let mut ages = HashMap::new();
        ages.insert("alice".to_string(), 30);
        assert_eq!(Opt::from_map(&ages, "alice"), Opt::some(30));
        assert_eq!(Opt::from_map(&ages, "bob"), Opt::none());
    }

    #[rstest]
    fn test_from_slice() {
        let values = [10, 20, 30];
        assert_eq!(Opt::from_slice(&values, 1), Opt::some(20));
        assert_eq!(Opt::from_slice(&values, 3), Opt::none());
    }

    // =========================================================================
    // Access
    // =========================================================================

    #[rstest]
    fn test_get() {
        assert_eq!(Opt::some(5).get(), Ok(&5));
        assert_eq!(
            Opt::<i32>::none().get(),
            Err(CollectionError::EmptyCollection { operation: "get" })
        );
    }

    #[rstest]
    fn test_into_value() {
        assert_eq!(Opt::some(5).into_value(), Ok(5));
        assert!(Opt::<i32>::none().into_value().is_err());
    }

    #[rstest]
    fn test_get_or_else() {
        assert_eq!(Opt::some(5).get_or_else(|| 0), 5);
        assert_eq!(Opt::none().get_or_else(|| 0), 0);
        assert_eq!(Opt::some(5).get_or_else_value(0), 5);
        assert_eq!(Opt::none().get_or_else_value(0), 0);
    }

    #[rstest]
    fn test_or_else() {
        assert_eq!(Opt::some(5).or_else(|| Opt::some(9)), Opt::some(5));
        assert_eq!(Opt::none().or_else(|| Opt::some(9)), Opt::some(9));
        assert_eq!(Opt::some(5).or_else_value(Opt::some(9)), Opt::some(5));
        assert_eq!(Opt::none().or_else_value(Opt::some(9)), Opt::some(9));
    }

    #[rstest]
    fn test_head_and_last() {
        let present = Opt::some(5);
        assert_eq!(present.head(), Ok(&5));
        assert_eq!(present.last(), Ok(&5));

        let absent: Opt<i32> = Opt::none();
        assert_eq!(
            absent.head(),
            Err(CollectionError::EmptyCollection { operation: "head" })
        );
        assert_eq!(
            absent.last(),
            Err(CollectionError::EmptyCollection { operation: "last" })
        );
    }

    #[rstest]
    fn test_head_option_and_last_option() {
        assert_eq!(Opt::some(5).head_option(), Opt::some(&5));
        assert_eq!(Opt::<i32>::none().head_option(), Opt::none());
        assert_eq!(Opt::some(5).last_option(), Opt::some(&5));
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    #[rstest]
    fn test_map() {
        assert_eq!(Opt::some(5).map(|x| x * 2), Opt::some(10));
        assert_eq!(Opt::<i32>::none().map(|x| x * 2), Opt::none());
    }

    #[rstest]
    fn test_of_none_then_map_stays_absent() {
        // Option.of(null).map(x => x * 2) → none
        assert_eq!(Opt::<i32>::of(None).map(|x| x * 2), Opt::none());
        assert_eq!(Opt::of(Some(5)).map(|x| x * 2).get(), Ok(&10));
    }

    #[rstest]
    fn test_flat_map() {
        assert_eq!(Opt::some(5).flat_map(|x| Opt::some(x + 1)), Opt::some(6));
        assert_eq!(Opt::some(5).flat_map(|_| Opt::<i32>::none()), Opt::none());
    }

    #[rstest]
    fn test_flat_map_short_circuits_on_absent() {
        let mut invoked = false;
        let result = Opt::<i32>::none().flat_map(|x| {
            invoked = true;
            Opt::some(x)
        });
        assert_eq!(result, Opt::none());
        assert!(!invoked);
    }

    #[rstest]
    fn test_flatten() {
        assert_eq!(Opt::some(Opt::some(5)).flatten(), Opt::some(5));
        assert_eq!(Opt::some(Opt::<i32>::none()).flatten(), Opt::none());
        assert_eq!(Opt::<Opt<i32>>::none().flatten(), Opt::none());
    }

    #[rstest]
    fn test_filter_and_filter_not() {
        assert_eq!(Opt::some(4).filter(|x| x % 2 == 0), Opt::some(4));
        assert_eq!(Opt::some(5).filter(|x| x % 2 == 0), Opt::none());
        assert_eq!(Opt::some(5).filter_not(|x| x % 2 == 0), Opt::some(5));
        assert_eq!(Opt::some(4).filter_not(|x| x % 2 == 0), Opt::none());
        assert_eq!(Opt::<i32>::none().filter(|_| true), Opt::none());
        assert_eq!(Opt::<i32>::none().filter_not(|_| true), Opt::none());
    }

    // =========================================================================
    // Quantifiers and Folds
    // =========================================================================

    #[rstest]
    fn test_quantifiers() {
        let present = Opt::some(4);
        assert!(present.exists(|x| x % 2 == 0));
        assert!(present.for_all(|x| x % 2 == 0));
        assert_eq!(present.count_by(|x| *x > 1), 1);
        assert_eq!(present.count_by(|x| *x > 9), 0);

        let absent: Opt<i32> = Opt::none();
        assert!(!absent.exists(|_| true));
        assert!(absent.for_all(|_| false)); // vacuously true
        assert_eq!(absent.count_by(|_| true), 0);
    }

    #[rstest]
    fn test_find() {
        assert_eq!(Opt::some(4).find(|x| x % 2 == 0), Opt::some(&4));
        assert_eq!(Opt::some(5).find(|x| x % 2 == 0), Opt::none());
        assert_eq!(Opt::<i32>::none().find(|_| true), Opt::none());
    }

    #[rstest]
    fn test_contains() {
        assert!(Opt::some(5).contains(&5));
        assert!(!Opt::some(5).contains(&6));
        assert!(!Opt::<i32>::none().contains(&5));
    }

    #[rstest]
    fn test_fold() {
        assert_eq!(Opt::some(5).fold(10, |acc, x| acc + x), 15);
        assert_eq!(Opt::<i32>::none().fold(10, |acc, x| acc + x), 10);
    }

    #[rstest]
    fn test_each() {
        let mut seen = Vec::new();
        Opt::some(5).each(|value| seen.push(*value));
        Opt::<i32>::none().each(|value| seen.push(*value));
        assert_eq!(seen, vec![5]);
    }

    // =========================================================================
    // Sequence-shaped Operations
    // =========================================================================

    #[rstest]
    fn test_to_seq_cardinality() {
        assert_eq!(Opt::some(5).to_seq(), seq![5]);
        assert_eq!(Opt::<i32>::none().to_seq(), Seq::empty());

        let present = Opt::some(5);
        assert_eq!(present.len(), present.clone().to_seq().len());
        let absent: Opt<i32> = Opt::none();
        assert_eq!(absent.len(), absent.clone().to_seq().len());
    }

    #[rstest]
    fn test_take_and_drop() {
        assert_eq!(Opt::some(5).take(1), seq![5]);
        assert_eq!(Opt::some(5).take(0), Seq::empty());
        assert_eq!(Opt::some(5).take_right(3), seq![5]);
        assert_eq!(Opt::some(5).drop(0), seq![5]);
        assert_eq!(Opt::some(5).drop(1), Seq::empty());
        assert_eq!(Opt::some(5).drop_right(1), Seq::empty());
        assert_eq!(Opt::<i32>::none().take(5), Seq::empty());
        assert_eq!(Opt::<i32>::none().drop(0), Seq::empty());
    }

    #[rstest]
    fn test_tail_and_init_are_always_empty() {
        assert_eq!(Opt::some(5).tail(), Seq::<i32>::empty());
        assert_eq!(Opt::some(5).init(), Seq::<i32>::empty());
        assert_eq!(Opt::<i32>::none().tail(), Seq::empty());
        assert_eq!(Opt::<i32>::none().init(), Seq::empty());
    }

    #[rstest]
    fn test_to_vec() {
        assert_eq!(Opt::some(5).to_vec(), vec![5]);
        assert_eq!(Opt::<i32>::none().to_vec(), Vec::<i32>::new());
    }

    // =========================================================================
    // Conversions and Iteration
    // =========================================================================

    #[rstest]
    fn test_option_round_trip() {
        let present: Opt<i32> = Some(1).into();
        assert_eq!(present, Opt::some(1));
        let standard: Option<i32> = present.into();
        assert_eq!(standard, Some(1));

        let absent: Opt<i32> = None.into();
        assert_eq!(absent.into_option(), None);
    }

    #[rstest]
    fn test_as_ref_and_as_option() {
        let present = Opt::some(5);
        assert_eq!(present.as_ref(), Opt::some(&5));
        assert_eq!(present.as_option(), Some(&5));
        let absent: Opt<i32> = Opt::none();
        assert_eq!(absent.as_ref(), Opt::none());
        assert_eq!(absent.as_option(), None);
    }

    #[rstest]
    fn test_iter() {
        let present = Opt::some(5);
        let collected: Vec<&i32> = present.iter().collect();
        assert_eq!(collected, vec![&5]);

        let absent: Opt<i32> = Opt::none();
        assert_eq!(absent.iter().count(), 0);
    }

    #[rstest]
    fn test_into_iter() {
        let collected: Vec<i32> = Opt::some(5).into_iter().collect();
        assert_eq!(collected, vec![5]);
        let empty: Vec<i32> = Opt::none().into_iter().collect();
        assert!(empty.is_empty());
    }

    #[rstest]
    fn test_iter_is_fused() {
        let mut iter = Opt::some(5).into_iter();
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    // =========================================================================
    // Standard Traits
    // =========================================================================

    #[rstest]
    fn test_default_is_absent() {
        assert_eq!(Opt::<i32>::default(), Opt::none());
    }

    #[rstest]
    fn test_eq_is_structural() {
        assert_eq!(Opt::some(5), Opt::some(5));
        assert_ne!(Opt::some(5), Opt::some(6));
        assert_ne!(Opt::some(5), Opt::none());
        assert_eq!(Opt::<i32>::none(), Opt::none());
    }

    #[rstest]
    fn test_pattern_matching() {
        let present = Opt::some(5);
        match present {
            Opt::Present(value) => assert_eq!(value, 5),
            Opt::Absent => panic!("expected a present value"),
        }
    }

    #[rstest]
    fn test_auto_traits() {
        static_assertions::assert_impl_all!(Opt<i32>: Send, Sync, Clone, Default);
    }
}
