//! Error types for contract violations.
//!
//! Every fallible operation in this crate fails synchronously at the call
//! site that violates its contract and returns a [`CollectionError`]. There
//! is no retry or partial-result semantics: these are programming errors,
//! not transient faults. Callers that want to avoid them can check
//! cardinality first ([`Seq::is_empty`](crate::seq::Seq::is_empty)) or use
//! the `Opt`-returning variants ([`Seq::head_option`](crate::seq::Seq::head_option),
//! [`Seq::find`](crate::seq::Seq::find), etc.), which never fail.

use thiserror::Error;

/// An error raised when a collection contract is violated.
///
/// # Examples
///
/// ```rust
/// use imseq::{CollectionError, Seq};
///
/// let empty: Seq<i32> = Seq::empty();
/// assert_eq!(
///     empty.head(),
///     Err(CollectionError::EmptyCollection { operation: "head" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An element-selecting operation was called on a collection with no
    /// elements (`head`, `last`, `min`, `max`, `tail`, `init` on an empty
    /// sequence, or `get`, `head`, `last` on an absent option).
    #[error("{operation} of empty collection")]
    EmptyCollection {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// An indexed read was attempted outside `[0, len)`.
    #[error("index out of range: {index} (len: {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the collection at the time of the read.
        len: usize,
    },
}
