//! Immutable, ordered sequence.
//!
//! This module provides [`Seq`], a finite, zero-indexed, immutable sequence
//! of elements that exposes the full combinator vocabulary: `map`, `filter`,
//! `fold`, `find`, `flatten`, slicing, searching, and aggregation.
//!
//! # Overview
//!
//! Every combinator returns a brand-new sequence (or, when no change is
//! needed, a sequence sharing the receiver's storage); no operation ever
//! mutates an existing one. Elements are stored in a shared immutable
//! buffer, so slicing operations are O(1):
//!
//! - O(1) `take` / `drop` / `take_right` / `drop_right`
//! - O(1) `tail` / `init`
//! - O(1) indexed access and `len`
//! - O(n) element-wise combinators (`map`, `filter`, `fold`, ...)
//!
//! # Examples
//!
//! ```rust
//! use imseq::{seq, Seq};
//!
//! let primes = seq![2, 3, 5, 7, 11];
//! assert_eq!(primes.drop(2), seq![5, 7, 11]);
//! assert_eq!(primes.map(|x, _| x * 10), seq![20, 30, 50, 70, 110]);
//!
//! // The empty sequence is canonical: it allocates nothing.
//! let empty: Seq<i32> = Seq::empty();
//! assert!(empty.is_empty());
//! assert!(empty.head().is_err());
//! ```
//!
//! # Structural Sharing
//!
//! Slicing never copies: the result is a narrower window into the same
//! shared buffer. When a combinator has nothing to change — `drop(0)`,
//! `take(n)` with `n >= len` — it returns a sequence that shares both the
//! buffer and the window, observable through [`Seq::ptr_eq`]:
//!
//! ```rust
//! use imseq::seq;
//!
//! let values = seq![1, 2, 3];
//! assert!(values.drop(0).ptr_eq(&values));
//! assert!(values.take(10).ptr_eq(&values));
//! assert!(values.drop(1).as_slice() == [2, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FusedIterator, Sum};
use std::ops::Index;
use std::sync::Arc;

use crate::error::CollectionError;
use crate::option::Opt;

/// A non-empty window into a shared immutable buffer.
///
/// Invariant: `start < end <= backing.len()`.
struct View<T> {
    backing: Arc<[T]>,
    start: usize,
    end: usize,
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            backing: Arc::clone(&self.backing),
            start: self.start,
            end: self.end,
        }
    }
}

/// An immutable, finite, ordered sequence of elements.
///
/// The empty sequence is a canonical zero-allocation representation, and
/// every operation that answers "the empty sequence" returns it. Because
/// the backing buffer is an `Arc`, a `Seq<T>` is `Send + Sync` whenever `T`
/// is, and cloning a sequence never copies elements.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `len` / `get`        | O(1)       |
/// | `take` / `drop`      | O(1)       |
/// | `tail` / `init`      | O(1)       |
/// | `map` / `filter`     | O(n)       |
/// | `distinct`           | O(n²)      |
/// | `sorted`             | O(n log n) |
///
/// # Examples
///
/// ```rust
/// use imseq::{seq, Seq};
///
/// let languages = seq!["Go", "Rust", "Scala"];
/// assert_eq!(languages.len(), 3);
/// assert_eq!(languages.head(), Ok(&"Go"));
/// assert_eq!(languages.find(|name, _| name.len() > 2), imseq::Opt::some(&"Rust"));
/// ```
pub struct Seq<T> {
    view: Option<View<T>>,
}

/// Returns a predicate computing the logical negation of `predicate`.
///
/// Used to derive `drop_while`, `take_while`, `filter_not` and `for_all`
/// from their positive counterparts without duplicating traversal logic.
fn invert<T, P>(mut predicate: P) -> impl FnMut(&T, usize) -> bool
where
    P: FnMut(&T, usize) -> bool,
{
    move |value, index| !predicate(value, index)
}

impl<T> Seq<T> {
    /// Returns the canonical empty sequence.
    ///
    /// This allocates nothing: all empty sequences are the same
    /// representation, so `Seq::empty().ptr_eq(&Seq::empty())` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::Seq;
    ///
    /// let empty: Seq<i32> = Seq::empty();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { view: None }
    }

    /// Creates a new empty sequence. Alias for [`Seq::empty`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::empty()
    }

    /// Creates a sequence containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::Seq;
    ///
    /// let one = Seq::singleton(42);
    /// assert_eq!(one.len(), 1);
    /// assert_eq!(one.head(), Ok(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_vec(vec![element])
    }

    /// Builds a sequence from a `Vec`, moving the elements into the shared
    /// buffer. An empty `Vec` yields the canonical empty sequence.
    fn from_vec(elements: Vec<T>) -> Self {
        if elements.is_empty() {
            return Self::empty();
        }
        let backing: Arc<[T]> = elements.into();
        let end = backing.len();
        Self {
            view: Some(View {
                backing,
                start: 0,
                end,
            }),
        }
    }

    /// Returns a sequence viewing `[start, end)` of this sequence's
    /// elements, sharing the backing buffer. An empty range yields the
    /// canonical empty sequence.
    fn window(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len());
        match &self.view {
            Some(view) if start < end => Self {
                view: Some(View {
                    backing: Arc::clone(&view.backing),
                    start: view.start + start,
                    end: view.start + end,
                }),
            },
            _ => Self::empty(),
        }
    }

    /// Returns the elements as a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.view
            .as_ref()
            .map_or(&[], |view| &view.backing[view.start..view.end])
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.view.as_ref().map_or(0, |view| view.end - view.start)
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_none()
    }

    /// Returns `true` if the sequence contains at least one element.
    #[inline]
    #[must_use]
    pub fn non_empty(&self) -> bool {
        self.view.is_some()
    }

    /// Returns `true` if both sequences share the same backing buffer and
    /// window, i.e. the receiver was returned unchanged by a combinator.
    /// All empty sequences are mutually `ptr_eq`.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.view, &other.view) {
            (None, None) => true,
            (Some(left), Some(right)) => {
                Arc::ptr_eq(&left.backing, &right.backing)
                    && left.start == right.start
                    && left.end == right.end
            }
            _ => false,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::{seq, CollectionError};
    ///
    /// let values = seq![10, 20, 30];
    /// assert_eq!(values.get(1), Ok(&20));
    /// assert_eq!(
    ///     values.get(3),
    ///     Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.as_slice()
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn head(&self) -> Result<&T, CollectionError> {
        self.as_slice()
            .first()
            .ok_or(CollectionError::EmptyCollection { operation: "head" })
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn last(&self) -> Result<&T, CollectionError> {
        self.as_slice()
            .last()
            .ok_or(CollectionError::EmptyCollection { operation: "last" })
    }

    /// Returns the first element, or [`Opt::Absent`] if the sequence is
    /// empty. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::{seq, Opt, Seq};
    ///
    /// assert_eq!(seq![1, 2].head_option(), Opt::some(&1));
    /// assert_eq!(Seq::<i32>::empty().head_option(), Opt::none());
    /// ```
    #[must_use]
    pub fn head_option(&self) -> Opt<&T> {
        self.as_slice().first().into()
    }

    /// Returns the last element, or [`Opt::Absent`] if the sequence is
    /// empty. Never fails.
    #[must_use]
    pub fn last_option(&self) -> Opt<&T> {
        let mut iter = self.reverse_iter();
        iter.next().into()
    }

    /// Returns the sequence without its first element, sharing storage with
    /// the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn tail(&self) -> Result<Self, CollectionError> {
        if self.is_empty() {
            Err(CollectionError::EmptyCollection { operation: "tail" })
        } else {
            Ok(self.window(1, self.len()))
        }
    }

    /// Returns the sequence without its last element, sharing storage with
    /// the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn init(&self) -> Result<Self, CollectionError> {
        if self.is_empty() {
            Err(CollectionError::EmptyCollection { operation: "init" })
        } else {
            Ok(self.window(0, self.len() - 1))
        }
    }

    /// Selects the first `n` elements.
    ///
    /// `n == 0` yields the canonical empty sequence; `n >= len` returns the
    /// receiver unchanged (shared storage); otherwise an O(1) window.
    #[must_use]
    pub fn take(&self, n: usize) -> Self {
        if n == 0 {
            Self::empty()
        } else if n >= self.len() {
            self.clone()
        } else {
            self.window(0, n)
        }
    }

    /// Selects the last `n` elements.
    #[must_use]
    pub fn take_right(&self, n: usize) -> Self {
        if n == 0 {
            Self::empty()
        } else if n >= self.len() {
            self.clone()
        } else {
            self.window(self.len() - n, self.len())
        }
    }

    /// Selects all elements except the first `n`.
    ///
    /// `n == 0` returns the receiver unchanged (shared storage); `n >= len`
    /// yields the canonical empty sequence; otherwise an O(1) window.
    #[must_use]
    pub fn drop(&self, n: usize) -> Self {
        if n == 0 {
            self.clone()
        } else if n >= self.len() {
            Self::empty()
        } else {
            self.window(n, self.len())
        }
    }

    /// Selects all elements except the last `n`.
    #[must_use]
    pub fn drop_right(&self, n: usize) -> Self {
        if n == 0 {
            self.clone()
        } else if n >= self.len() {
            Self::empty()
        } else {
            self.window(0, self.len() - n)
        }
    }

    /// Selects the longest prefix whose elements all satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// let values = seq![1, 2, 3, 4, 1];
    /// assert_eq!(values.take_while(|x, _| *x < 3), seq![1, 2]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        match self.index_where(invert(predicate)) {
            None => self.clone(),
            Some(length) => self.take(length),
        }
    }

    /// Drops the longest prefix whose elements all satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// let values = seq![1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// assert_eq!(
    ///     values.drop_while(|x, _| x % 3 != 0),
    ///     seq![3, 4, 5, 6, 7, 8, 9]
    /// );
    /// ```
    #[must_use]
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        match self.index_where(invert(predicate)) {
            None => Self::empty(),
            Some(offset) => self.drop(offset),
        }
    }

    /// Tests whether the sequence contains an element equal to `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(element)
    }

    /// Finds the index of the first element equal to `element`.
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_from(element, 0)
    }

    /// Finds the index `>= from` of the first element equal to `element`.
    /// A `from` beyond the end of the sequence is clamped and yields `None`.
    #[must_use]
    pub fn index_of_from(&self, element: &T, from: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let slice = self.as_slice();
        let from = from.min(slice.len());
        slice[from..]
            .iter()
            .position(|candidate| candidate == element)
            .map(|offset| offset + from)
    }

    /// Finds the index of the last element equal to `element`.
    #[must_use]
    pub fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.last_index_of_until(element, usize::MAX)
    }

    /// Finds the index `<= end` of the last element equal to `element`.
    /// An `end` beyond the last index is clamped to `len - 1`.
    #[must_use]
    pub fn last_index_of_until(&self, element: &T, end: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let slice = self.as_slice();
        if slice.is_empty() {
            return None;
        }
        let limit = end.min(slice.len() - 1);
        slice[..=limit]
            .iter()
            .rposition(|candidate| candidate == element)
    }

    /// Finds the index of the first element satisfying `predicate`.
    ///
    /// The predicate receives each element together with its index.
    #[must_use]
    pub fn index_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.index_where_from(predicate, 0)
    }

    /// Finds the index `>= from` of the first element satisfying
    /// `predicate`. A `from` beyond the end of the sequence is clamped and
    /// yields `None`.
    #[must_use]
    pub fn index_where_from<P>(&self, mut predicate: P, from: usize) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool,
    {
        let slice = self.as_slice();
        let from = from.min(slice.len());
        slice[from..]
            .iter()
            .enumerate()
            .find_map(|(offset, value)| predicate(value, from + offset).then_some(from + offset))
    }

    /// Finds the index of the last element satisfying `predicate`.
    #[must_use]
    pub fn last_index_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.last_index_where_until(predicate, usize::MAX)
    }

    /// Finds the index `<= end` of the last element satisfying `predicate`.
    /// An `end` beyond the last index is clamped to `len - 1`.
    #[must_use]
    pub fn last_index_where_until<P>(&self, mut predicate: P, end: usize) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool,
    {
        let slice = self.as_slice();
        if slice.is_empty() {
            return None;
        }
        let limit = end.min(slice.len() - 1);
        let mut iter = ReverseIter::new(&slice[..=limit]);
        while let Some(value) = iter.next() {
            let index = iter.len();
            if predicate(value, index) {
                return Some(index);
            }
        }
        None
    }

    /// Builds a new sequence by applying `function` to every element and
    /// its index, preserving order and size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].map(|x, _| x * 2), seq![2, 4, 6]);
    /// assert_eq!(seq!["a", "b"].map(|_, index| index), seq![0, 1]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> Seq<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(index, value)| function(value, index))
            .collect()
    }

    /// Builds a new sequence by applying `function` to every element and
    /// concatenating the resulting iterables in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// let doubled = seq![1, 2, 3].flat_map(|x, _| vec![*x, *x]);
    /// assert_eq!(doubled, seq![1, 1, 2, 2, 3, 3]);
    /// ```
    #[must_use]
    pub fn flat_map<U, I, F>(&self, mut function: F) -> Seq<U>
    where
        F: FnMut(&T, usize) -> I,
        I: IntoIterator<Item = U>,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .flat_map(|(index, value)| function(value, index))
            .collect()
    }

    /// Counts the elements satisfying `predicate`.
    #[must_use]
    pub fn count_by<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .filter(|(index, value)| predicate(value, *index))
            .count()
    }

    /// Tests whether `predicate` holds for at least one element.
    #[must_use]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.index_where(predicate).is_some()
    }

    /// Tests whether `predicate` holds for all elements. Vacuously true on
    /// the empty sequence.
    #[must_use]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.index_where(invert(predicate)).is_none()
    }

    /// Finds the first element satisfying `predicate`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::{seq, Opt};
    ///
    /// let values = seq![1, 2, 3, 4];
    /// assert_eq!(values.find(|x, _| x % 2 == 0), Opt::some(&2));
    /// assert_eq!(values.find(|x, _| *x > 10), Opt::none());
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Opt<&T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .find_map(|(index, value)| predicate(value, index).then_some(value))
            .into()
    }

    /// Folds the elements left-to-right. Alias for [`Seq::fold_left`].
    pub fn fold<B, F>(&self, zero: B, operation: F) -> B
    where
        F: FnMut(B, &T, usize) -> B,
    {
        self.fold_left(zero, operation)
    }

    /// Folds the elements left-to-right:
    /// `op(op(op(zero, e0), e1), e2) ...`. The empty sequence returns
    /// `zero` unchanged.
    pub fn fold_left<B, F>(&self, zero: B, mut operation: F) -> B
    where
        F: FnMut(B, &T, usize) -> B,
    {
        let mut accumulator = zero;
        for (index, value) in self.as_slice().iter().enumerate() {
            accumulator = operation(accumulator, value, index);
        }
        accumulator
    }

    /// Folds the elements right-to-left:
    /// `op(e0, op(e1, op(e2, zero)))`.
    ///
    /// Traverses through the reverse-order view rather than materializing a
    /// reversed copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// let difference = seq![1, 2, 3].fold_right(0, |x, acc, _| x - acc);
    /// assert_eq!(difference, 2); // 1 - (2 - (3 - 0))
    /// ```
    pub fn fold_right<B, F>(&self, zero: B, mut operation: F) -> B
    where
        F: FnMut(&T, B, usize) -> B,
    {
        let mut accumulator = zero;
        let mut iter = self.reverse_iter();
        while let Some(value) = iter.next() {
            let index = iter.len();
            accumulator = operation(value, accumulator, index);
        }
        accumulator
    }

    /// Returns the smallest element under the natural ordering. Ties are
    /// resolved in favor of the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn min(&self) -> Result<&T, CollectionError>
    where
        T: Ord,
    {
        let mut iter = self.as_slice().iter();
        let first = iter
            .next()
            .ok_or(CollectionError::EmptyCollection { operation: "min" })?;
        Ok(iter.fold(first, |best, candidate| {
            if candidate < best { candidate } else { best }
        }))
    }

    /// Returns the largest element under the natural ordering. Ties are
    /// resolved in favor of the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn max(&self) -> Result<&T, CollectionError>
    where
        T: Ord,
    {
        let mut iter = self.as_slice().iter();
        let first = iter
            .next()
            .ok_or(CollectionError::EmptyCollection { operation: "max" })?;
        Ok(iter.fold(first, |best, candidate| {
            if candidate > best { candidate } else { best }
        }))
    }

    /// Returns the element with the smallest measure `f(value, index)`.
    /// Ties are resolved in favor of the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn min_by<K, F>(&self, mut measure: F) -> Result<&T, CollectionError>
    where
        K: PartialOrd,
        F: FnMut(&T, usize) -> K,
    {
        let mut iter = self.as_slice().iter().enumerate();
        let (index, value) = iter
            .next()
            .ok_or(CollectionError::EmptyCollection { operation: "min_by" })?;
        let mut best = value;
        let mut best_key = measure(value, index);
        for (index, value) in iter {
            let key = measure(value, index);
            if key < best_key {
                best = value;
                best_key = key;
            }
        }
        Ok(best)
    }

    /// Returns the element with the largest measure `f(value, index)`.
    /// Ties are resolved in favor of the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn max_by<K, F>(&self, mut measure: F) -> Result<&T, CollectionError>
    where
        K: PartialOrd,
        F: FnMut(&T, usize) -> K,
    {
        let mut iter = self.as_slice().iter().enumerate();
        let (index, value) = iter
            .next()
            .ok_or(CollectionError::EmptyCollection { operation: "max_by" })?;
        let mut best = value;
        let mut best_key = measure(value, index);
        for (index, value) in iter {
            let key = measure(value, index);
            if key > best_key {
                best = value;
                best_key = key;
            }
        }
        Ok(best)
    }

    /// Sums the measures `f(value, index)` of every element. The empty
    /// sequence yields the additive identity.
    #[must_use]
    pub fn sum_of<U, F>(&self, mut function: F) -> U
    where
        U: Sum,
        F: FnMut(&T, usize) -> U,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(index, value)| function(value, index))
            .sum()
    }

    /// Concatenates the elements into a string, interposing `separator`.
    /// The empty sequence yields the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::{seq, Seq};
    ///
    /// assert_eq!(seq![1, 2, 3].mk_string(", "), "1, 2, 3");
    /// assert_eq!(Seq::<i32>::empty().mk_string(", "), "");
    /// ```
    #[must_use]
    pub fn mk_string(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut result = String::new();
        for (index, value) in self.as_slice().iter().enumerate() {
            if index > 0 {
                result.push_str(separator);
            }
            result.push_str(&value.to_string());
        }
        result
    }

    /// Applies `function` to every element and its index, in order, for its
    /// side effects.
    pub fn each<F>(&self, mut function: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, value) in self.as_slice().iter().enumerate() {
            function(value, index);
        }
    }

    /// Returns a forward iterator over references to the elements.
    ///
    /// Iteration is restartable: each call yields a fresh iterator starting
    /// at the beginning.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns an iterator over references to the elements in reverse
    /// order. O(1) setup, no copy.
    #[inline]
    #[must_use]
    pub fn reverse_iter(&self) -> ReverseIter<'_, T> {
        ReverseIter::new(self.as_slice())
    }
}

impl<T: Clone> Seq<T> {
    /// Selects all elements satisfying `predicate`, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// let evens = seq![1, 2, 3, 4].filter(|x, _| x % 2 == 0);
    /// assert_eq!(evens, seq![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        let retained: Vec<T> = self
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(index, value)| predicate(value, *index))
            .map(|(_, value)| value.clone())
            .collect();
        Self::from_vec(retained)
    }

    /// Selects all elements not satisfying `predicate`, preserving order.
    #[must_use]
    pub fn filter_not<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.filter(invert(predicate))
    }

    /// Concatenates the element collections of this sequence in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::{seq, Opt};
    ///
    /// let nested = seq![vec![2, 3], vec![5, 7]];
    /// assert_eq!(nested.flatten(), seq![2, 3, 5, 7]);
    ///
    /// let options = seq![Opt::some(11), Opt::none(), Opt::some(13)];
    /// assert_eq!(options.flatten(), seq![11, 13]);
    /// ```
    #[must_use]
    pub fn flatten<U>(&self) -> Seq<U>
    where
        T: IntoIterator<Item = U>,
    {
        self.as_slice().iter().cloned().flatten().collect()
    }

    /// Selects all elements, ignoring duplicates: the first occurrence of
    /// each value is retained, in original order.
    ///
    /// Uses a linear "seen" scan under value equality; element types are
    /// not required to be hashable.
    #[must_use]
    pub fn distinct(&self) -> Self
    where
        T: PartialEq,
    {
        let mut seen: Vec<T> = Vec::new();
        for value in self.as_slice() {
            if !seen.contains(value) {
                seen.push(value.clone());
            }
        }
        Self::from_vec(seen)
    }

    /// Selects all elements, ignoring duplicates as determined by the key
    /// `f(value, index)`: the first element seen per key is retained, in
    /// original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// let words = seq!["PHP", "Go", "Java", "Kotlin", "Python"];
    /// let by_length = words.distinct_by(|word, _| word.len());
    /// assert_eq!(by_length, seq!["PHP", "Go", "Java", "Kotlin"]);
    /// ```
    #[must_use]
    pub fn distinct_by<K, F>(&self, mut function: F) -> Self
    where
        K: PartialEq,
        F: FnMut(&T, usize) -> K,
    {
        let mut keys: Vec<K> = Vec::new();
        let mut retained: Vec<T> = Vec::new();
        for (index, value) in self.as_slice().iter().enumerate() {
            let key = function(value, index);
            if !keys.contains(&key) {
                keys.push(key);
                retained.push(value.clone());
            }
        }
        Self::from_vec(retained)
    }

    /// Returns a new sequence with the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut elements = self.to_vec();
        elements.reverse();
        Self::from_vec(elements)
    }

    /// Returns a new sequence sorted in ascending natural order. The
    /// receiver is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imseq::seq;
    ///
    /// let values = seq![3, 1, 2];
    /// assert_eq!(values.sorted(), seq![1, 2, 3]);
    /// assert_eq!(values, seq![3, 1, 2]); // receiver unchanged
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        let mut elements = self.to_vec();
        elements.sort();
        Self::from_vec(elements)
    }

    /// Sums the elements. The empty sequence yields the additive identity.
    #[must_use]
    pub fn sum(&self) -> T
    where
        T: Sum,
    {
        self.as_slice().iter().cloned().sum()
    }

    /// Returns a new sequence with all elements of this sequence followed
    /// by all elements of `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut elements = self.to_vec();
        elements.extend_from_slice(other.as_slice());
        Self::from_vec(elements)
    }

    /// Returns a snapshot copy of the elements as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

/// Creates a [`Seq`] containing the given elements.
///
/// `seq!` with no arguments yields the canonical empty sequence.
///
/// # Examples
///
/// ```rust
/// use imseq::{seq, Seq};
///
/// let primes = seq![2, 3, 5, 7, 11];
/// assert_eq!(primes.len(), 5);
///
/// let empty: Seq<i32> = seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Seq::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Seq::from(vec![$($element),+])
    };
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A forward iterator over references to the elements of a [`Seq`].
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A cursor iterating a slice back-to-front without materializing a
/// reversed copy.
///
/// Holds a position index initialized to the slice length and decremented
/// per step; after a call to `next`, [`ReverseIter::len`] is the index of
/// the element just yielded.
pub struct ReverseIter<'a, T> {
    slice: &'a [T],
    position: usize,
}

impl<'a, T> ReverseIter<'a, T> {
    fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            position: slice.len(),
        }
    }
}

impl<'a, T> Iterator for ReverseIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == 0 {
            None
        } else {
            self.position -= 1;
            Some(&self.slice[self.position])
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.position, Some(self.position))
    }
}

impl<T> ExactSizeIterator for ReverseIter<'_, T> {
    fn len(&self) -> usize {
        self.position
    }
}

impl<T> FusedIterator for ReverseIter<'_, T> {}

/// An owning iterator over the elements of a [`Seq`].
///
/// Elements are cloned out of the shared buffer as the iterator advances.
pub struct IntoIter<T> {
    seq: Seq<T>,
    position: usize,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.seq.as_slice().get(self.position).cloned();
        if value.is_some() {
            self.position += 1;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}
impl<T: Clone> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
        }
    }
}

impl<T> Default for Seq<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone> From<&[T]> for Seq<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(elements.into())
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            seq: self,
            position: 0,
        }
    }
}

impl<T> Index<usize> for Seq<T> {
    type Output = T;

    /// Read-only indexed access. There is no `IndexMut` counterpart: the
    /// sequence is immutable by contract, so write-through indexing is
    /// rejected at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`Seq::get`] for a fallible read.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish sequences of different lengths
        self.len().hash(state);
        for element in self.as_slice() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.as_slice() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Seq<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
