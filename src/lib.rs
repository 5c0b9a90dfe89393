//! # imseq
//!
//! Immutable sequence and option collections with a uniform functional
//! combinator vocabulary.
//!
//! ## Overview
//!
//! This library provides two collection types sharing one combinator
//! surface (`map`, `filter`, `fold`, `find`, `flatten`, slicing,
//! searching, aggregation):
//!
//! - [`Seq`]: an immutable, finite, ordered, zero-indexed sequence.
//! - [`Opt`]: an immutable container holding zero or one value, with
//!   variants [`Opt::Present`] and [`Opt::Absent`].
//!
//! Every combinator produces a new instance; nothing is ever mutated.
//! Sequences share their backing storage structurally, so slicing is O(1)
//! and an unchanged result is returned as-is (observable via
//! [`Seq::ptr_eq`]). Contract violations (`head` of an empty sequence,
//! out-of-range reads) fail synchronously with a [`CollectionError`];
//! the `Opt`-returning variants (`head_option`, `find`, ...) never fail.
//!
//! ## Example
//!
//! ```rust
//! use imseq::prelude::*;
//!
//! let languages = seq!["PHP", "Go", "Java", "JavaScript", "Kotlin"];
//! let short = languages.filter(|name, _| name.len() <= 4);
//! assert_eq!(short, seq!["PHP", "Go", "Java"]);
//!
//! let first_long = languages.find(|name, _| name.len() > 5);
//! assert_eq!(first_long, Opt::some(&"JavaScript"));
//!
//! let absent: Opt<i32> = Opt::none();
//! assert_eq!(absent.get_or_else_value(0), 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for both types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod option;
pub mod seq;

pub use error::CollectionError;
pub use option::Opt;
pub use seq::Seq;

/// Prelude module for convenient imports.
///
/// Re-exports the collection types, their variants, the error type, and
/// the [`seq!`] macro.
///
/// # Usage
///
/// ```rust
/// use imseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Opt::{self, Absent, Present};
    pub use crate::{seq, CollectionError, Seq};
}
