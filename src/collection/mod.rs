//! Ordered, mutable collections.
//!
//! - [`Collection`]: the container interface
//! - [`List`]: an insertion-ordered implementation backed by a `Vec`
//! - `Vec<T>` itself, for callers that already hold one
//! - `SharedList` (feature `sync`): a mutex-guarded `List` for sharing
//!   across threads
//!
//! Membership checks take the equality notion as an argument, so the same
//! list can be searched by value, by key, or case-insensitively:
//!
//! ```rust
//! use conveyor::prelude::*;
//!
//! let mut names = list!["Ada".to_string(), "Grace".to_string()];
//!
//! assert!(names.contains(&"grace".to_string(), equality::ignore_ascii_case));
//! assert!(!names.contains(&"grace".to_string(), equality::by_value));
//!
//! names.remove(&"ADA".to_string(), equality::ignore_ascii_case);
//! assert_eq!(names.try_to_string().unwrap(), "Grace");
//! ```

mod list;
#[cfg(feature = "sync")]
mod shared;
mod vector;

use std::fmt::Display;
use std::hash::Hash;

use crate::equality;
use crate::error::ConversionError;
use crate::render::{self, KeyedMap};
use crate::stream::Stream;

pub use list::List;
#[cfg(feature = "sync")]
pub use shared::SharedList;

/// An ordered, mutable container of elements.
///
/// Implementors keep insertion order, except where an operation says
/// otherwise. Equality is always supplied by the caller, as a predicate for
/// [`contains`](Collection::contains)/[`remove`](Collection::remove) or as
/// `Eq + Hash` for [`set`](Collection::set).
///
/// # Required Methods
///
/// - `add`, `remove`, `clear`: mutation
/// - `as_slice`: view of the current contents
/// - `set`, `set_by`: deduplicated copies
///
/// # Provided Methods
///
/// `contains`, `size`, `is_empty`, `to_vec`, `to_map`, `try_to_string` and
/// `stream` are derived from `as_slice`.
pub trait Collection<T> {
    /// Appends `item` to the end.
    fn add(&mut self, item: T);

    /// Removes the first element `existing` for which `equals(existing, item)`
    /// holds, returning it. Does nothing if there is no match.
    fn remove<F>(&mut self, item: &T, equals: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> bool;

    /// Removes every element.
    fn clear(&mut self);

    /// Borrows the contents in current order.
    ///
    /// This is a live view: it reflects the collection until the next
    /// mutation, which the borrow checker forbids while the view is held.
    fn as_slice(&self) -> &[T];

    /// Returns a new collection with one element per equivalence class.
    ///
    /// Grouping is hash based, so the order of the result is unspecified.
    /// The receiver is left unchanged. O(n) expected.
    #[must_use]
    fn set(&self) -> Self
    where
        Self: Sized,
        T: Eq + Hash + Clone;

    /// Returns a new collection keeping the first element of every
    /// equivalence class under `equals`, in insertion order.
    ///
    /// Only a predicate is required, at the price of O(n²) comparisons.
    #[must_use]
    fn set_by<F>(&self, equals: F) -> Self
    where
        Self: Sized,
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    /// Returns `true` if some element matches `item` under `equals`.
    fn contains<F>(&self, item: &T, equals: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        equality::position_of(self.as_slice(), item, equals).is_some()
    }

    /// Returns the number of elements.
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns an owned snapshot of the contents.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Builds a map keyed by each element's rendering, last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Render`] if an element fails to render.
    fn to_map(&self) -> Result<KeyedMap<T>, ConversionError>
    where
        T: Display + Clone,
    {
        render::to_keyed_map(self.as_slice())
    }

    /// Joins the element renderings with `", "`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Render`] if an element fails to render.
    fn try_to_string(&self) -> Result<String, ConversionError>
    where
        T: Display,
    {
        render::join(self.as_slice())
    }

    /// Starts a [`Stream`] over a copy of the current contents.
    fn stream(&self) -> Stream<T>
    where
        T: Clone,
    {
        Stream::from(self.to_vec())
    }
}

/// Creates a [`List`] from a list of elements, like `vec!`.
///
/// ```rust
/// use conveyor::prelude::*;
///
/// let numbers = list![1, 2, 3];
/// assert_eq!(numbers.size(), 3);
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::collection::List::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::collection::List::from(vec![$($element),+])
    };
}
