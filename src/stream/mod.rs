//! Eager, reusable stream pipelines.
//!
//! A [`Stream`] owns a snapshot of a finite sequence. Intermediate stages
//! ([`filter`](Stream::filter), [`map`](Stream::map), [`sort`](Stream::sort),
//! [`limit`](Stream::limit), [`skip`](Stream::skip), [`peek`](Stream::peek),
//! [`distinct`](Stream::distinct)) compute their whole output before
//! returning a new `Stream`, and never touch the stream they were called on.
//! Terminal operations borrow the stream, so one stream can be consumed any
//! number of times:
//!
//! ```rust
//! use conveyor::stream::Stream;
//!
//! let evens = Stream::of(1..=10).filter(|value| value % 2 == 0);
//!
//! assert!(evens.any(|value| *value > 8));
//! assert!(evens.all(|value| value % 2 == 0));
//! assert_eq!(evens.reduce(0, |total, value| total + value), 30);
//! ```
//!
//! # Aborted streams
//!
//! [`Stream::peek`] runs a fallible inspection over every element. When the
//! inspection fails, the stage returns an *aborted* stream: it is empty,
//! [`Stream::is_aborted`] reports `true`, and every later stage stays aborted.
//!
//! ```rust
//! use conveyor::stream::Stream;
//!
//! let checked = Stream::of([1, 2, 3]).peek(|value| if *value < 3 { Ok(()) } else { Err(()) });
//! assert!(checked.is_aborted());
//! assert!(checked.map(|value| value * 2).to_vec().is_empty());
//! ```
//!
//! # Thread Safety
//!
//! `Stream<T>` is `Send` and `Sync` whenever `T` is. Read-only terminal
//! operations can run concurrently on a shared stream as long as the supplied
//! closures do not share mutable state.

mod sort;
mod stage;
mod terminal;

use std::fmt;

use static_assertions::assert_impl_all;

/// A chainable, eagerly evaluated pipeline over an owned element sequence.
///
/// # Examples
///
/// ```rust
/// use conveyor::stream::Stream;
///
/// let words = Stream::of(["pear", "fig", "apple", "kiwi"]);
/// let shortest: Vec<&str> = words
///     .sort(|left, right| left.len().cmp(&right.len()))
///     .limit(2)
///     .to_vec();
/// assert_eq!(shortest, vec!["fig", "pear"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stream<T> {
    elements: Vec<T>,
    aborted: bool,
}

assert_impl_all!(Stream<i32>: Send, Sync, Clone);
assert_impl_all!(Stream<String>: Send, Sync, Clone);
assert_impl_all!(Stream<Vec<std::sync::Arc<str>>>: Send, Sync);

impl<T> Stream<T> {
    /// Creates an empty stream.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            aborted: false,
        }
    }

    /// Creates a stream from anything iterable, keeping iteration order.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    /// Creates the aborted stream produced by a failed [`Stream::peek`].
    pub(crate) const fn aborted() -> Self {
        Self {
            elements: Vec::new(),
            aborted: true,
        }
    }

    /// Wraps the output of a stage, carrying the aborted flag forward.
    pub(crate) fn next_stage(&self, stage: &'static str, elements: Vec<T>) -> Self {
        tracing::trace!(
            stage,
            input = self.elements.len(),
            output = elements.len(),
            "stream stage evaluated"
        );
        Self {
            elements,
            aborted: self.aborted,
        }
    }

    /// Returns `true` if an earlier [`Stream::peek`] stage failed.
    pub const fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Borrows the current snapshot.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the stream, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements,
            aborted: false,
        }
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from(iterator.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = crate::render::join(&self.elements).map_err(|_| fmt::Error)?;
        formatter.write_str(&rendered)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stream<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Stream<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}
