//! # conveyor
//!
//! Ordered generic collections and eager, reusable stream pipelines.
//!
//! ## Overview
//!
//! - **Collections**: [`collection::List`], an order-preserving mutable
//!   container with predicate-based membership, deduplication and
//!   conversion helpers, behind the [`collection::Collection`] trait.
//! - **Streams**: [`stream::Stream`], a chainable pipeline of
//!   filter/map/sort/limit/skip/peek stages finished by a terminal operation.
//!   Every stage is evaluated eagerly and owns its own snapshot, so a stream
//!   can feed any number of terminal calls.
//! - **Helpers**: [`equality`] predicates and [`render`] conversions shared by
//!   both.
//!
//! ## Feature Flags
//!
//! - `stream`: the [`stream::Stream`] pipeline (default)
//! - `collection`: [`collection::List`] and the `Collection` trait (default)
//! - `sync`: `SharedList`, a mutex-guarded list for cross-thread sharing
//! - `serde`: `Serialize`/`Deserialize` for lists and streams
//! - `fxhash` / `ahash`: faster hashers for keyed maps and deduplication
//! - `full`: every feature except the hasher choices
//!
//! ## Example
//!
//! ```rust
//! use conveyor::prelude::*;
//!
//! let numbers = list![3, 1, 2, 1];
//!
//! assert_eq!(numbers.set().size(), 3);
//! assert_eq!(numbers.stream().sorted().to_vec(), vec![1, 1, 2, 3]);
//! assert_eq!(numbers.stream().filter(|x| *x > 1).to_vec(), vec![3, 2]);
//! assert_eq!(numbers.try_to_string().unwrap(), "3, 1, 2, 1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use conveyor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::equality;
    pub use crate::error::ConversionError;
    pub use crate::render::KeyedMap;

    #[cfg(feature = "stream")]
    pub use crate::stream::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::list;
}

pub mod equality;
pub mod error;
pub mod hashing;
pub mod render;

#[cfg(feature = "stream")]
pub mod stream;

#[cfg(feature = "collection")]
pub mod collection;

pub use error::ConversionError;
