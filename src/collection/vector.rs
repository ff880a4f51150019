//! [`Collection`] for plain `Vec`s.
//!
//! `Vec` has inherent `contains`, `remove` and `clear` methods, which win
//! method resolution. Call the trait versions through `Collection::`:
//!
//! ```rust
//! use conveyor::prelude::*;
//!
//! let mut numbers = vec![3, 1, 2, 1];
//! assert!(Collection::contains(&numbers, &2, equality::by_value));
//! assert_eq!(Collection::remove(&mut numbers, &1, equality::by_value), Some(1));
//! assert_eq!(numbers, vec![3, 2, 1]);
//! assert_eq!(numbers.set_by(equality::by_value), vec![3, 2, 1]);
//! ```

use std::hash::Hash;

use super::Collection;
use crate::equality;

impl<T> Collection<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
        tracing::trace!(operation = "add", size = self.len(), "vec mutated");
    }

    fn remove<F>(&mut self, item: &T, equals: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let index = equality::position_of(&self[..], item, equals)?;
        let removed = Vec::remove(self, index);
        tracing::trace!(operation = "remove", index, size = self.len(), "vec mutated");
        Some(removed)
    }

    fn clear(&mut self) {
        Vec::clear(self);
        tracing::trace!(operation = "clear", "vec mutated");
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn set(&self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        equality::distinct(self)
    }

    fn set_by<F>(&self, equals: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        equality::distinct_by(self, equals)
    }
}
