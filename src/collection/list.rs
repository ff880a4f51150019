//! Insertion-ordered list.

use std::fmt;
use std::hash::Hash;

use super::Collection;
use crate::equality;
use crate::render;
use crate::stream::Stream;

/// A growable, insertion-ordered [`Collection`] backed by a `Vec`.
///
/// No uniqueness is enforced on [`add`](Collection::add); use
/// [`set`](Collection::set) or [`set_by`](Collection::set_by) to obtain a
/// deduplicated copy.
///
/// # Examples
///
/// ```rust
/// use conveyor::prelude::*;
///
/// let mut numbers = List::new();
/// numbers.add(3);
/// numbers.add(1);
/// numbers.add(3);
///
/// assert_eq!(numbers.size(), 3);
/// assert_eq!(numbers.set_by(equality::by_value).to_vec(), vec![3, 1]);
/// assert_eq!(numbers.remove(&3, equality::by_value), Some(3));
/// assert_eq!(numbers.to_vec(), vec![1, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<T> {
    elements: Vec<T>,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates a list from anything iterable, keeping iteration order.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the list, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Collection<T> for List<T> {
    fn add(&mut self, item: T) {
        self.elements.push(item);
        tracing::trace!(operation = "add", size = self.elements.len(), "list mutated");
    }

    fn remove<F>(&mut self, item: &T, equals: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let index = equality::position_of(&self.elements, item, equals)?;
        let removed = self.elements.remove(index);
        tracing::trace!(
            operation = "remove",
            index,
            size = self.elements.len(),
            "list mutated"
        );
        Some(removed)
    }

    fn clear(&mut self) {
        self.elements.clear();
        tracing::trace!(operation = "clear", "list mutated");
    }

    fn as_slice(&self) -> &[T] {
        &self.elements
    }

    fn set(&self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        Self::from(equality::distinct(&self.elements))
    }

    fn set_by<F>(&self, equals: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        Self::from(equality::distinct_by(&self.elements, equals))
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.elements
    }
}

impl<T> From<List<T>> for Stream<T> {
    fn from(list: List<T>) -> Self {
        Self::from(list.elements)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from(iterator.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        let before = self.elements.len();
        self.elements.extend(iterator);
        tracing::trace!(
            operation = "extend",
            added = self.elements.len() - before,
            size = self.elements.len(),
            "list mutated"
        );
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = render::join(&self.elements).map_err(|_| fmt::Error)?;
        formatter.write_str(&rendered)
    }
}
