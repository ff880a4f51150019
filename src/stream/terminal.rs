//! Terminal operations.
//!
//! Terminals borrow the stream, so the same stream can be finished more than
//! once and each call observes the full sequence.

use std::fmt::Display;

use super::Stream;
use crate::error::ConversionError;
use crate::render::{self, KeyedMap};

impl<T> Stream<T> {
    /// Calls `action` on every element in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(action);
    }

    /// Folds the elements from the left into an accumulator of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conveyor::stream::Stream;
    ///
    /// let sum = Stream::of([1, 2, 3, 4]).reduce(0, |total, value| total + value);
    /// assert_eq!(sum, 10);
    /// ```
    pub fn reduce<F>(&self, initial: T, reducer: F) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        self.elements.iter().fold(initial, reducer)
    }

    /// Folds the elements from the left into an accumulator of any type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conveyor::stream::Stream;
    ///
    /// let total_length = Stream::of(["ab", "cde"]).fold(0, |total, word| total + word.len());
    /// assert_eq!(total_length, 5);
    /// ```
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.elements.iter().fold(initial, function)
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().find(|element| predicate(element))
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops at the first match. An empty stream yields `false`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first mismatch. An empty stream yields `true`.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// Passes the first element satisfying `predicate` to `consumer`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conveyor::stream::Stream;
    ///
    /// let mut found = None;
    /// Stream::of([1, 4, 9]).if_present(|value| *value > 3, |value| found = Some(*value));
    /// assert_eq!(found, Some(4));
    /// ```
    pub fn if_present<P, C>(&self, predicate: P, consumer: C)
    where
        P: FnMut(&T) -> bool,
        C: FnOnce(&T),
    {
        if let Some(element) = self.find(predicate) {
            consumer(element);
        }
    }

    /// Returns the number of elements.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the stream holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an owned copy of the elements.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Builds a map keyed by each element's rendering, last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Render`] if an element fails to render.
    pub fn to_map(&self) -> Result<KeyedMap<T>, ConversionError>
    where
        T: Display + Clone,
    {
        render::to_keyed_map(&self.elements)
    }

    /// Joins the element renderings with `", "`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Render`] if an element fails to render.
    pub fn try_to_string(&self) -> Result<String, ConversionError>
    where
        T: Display,
    {
        render::join(&self.elements)
    }

    /// Converts the stream back into a [`List`](crate::collection::List).
    #[cfg(feature = "collection")]
    pub fn into_list(self) -> crate::collection::List<T> {
        crate::collection::List::from(self.elements)
    }
}
