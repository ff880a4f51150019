//! Mutex-guarded list for cross-thread sharing.

use parking_lot::Mutex;

use super::{Collection, List};
use crate::stream::Stream;

/// A [`List`] behind a [`parking_lot::Mutex`].
///
/// Every method takes `&self` and holds the lock for the duration of the
/// call, so a `SharedList` wrapped in an `Arc` can be mutated from several
/// threads. Operations are individually atomic; sequences of operations are
/// not. Use [`SharedList::with`] to run several steps under one lock.
///
/// # Examples
///
/// ```rust
/// use conveyor::collection::SharedList;
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new(SharedList::new());
/// let handles: Vec<_> = (0..4)
///     .map(|index| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || shared.add(index))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(shared.size(), 4);
/// ```
#[derive(Debug)]
pub struct SharedList<T> {
    inner: Mutex<List<T>>,
}

impl<T> SharedList<T> {
    /// Creates an empty shared list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(List::new()),
        }
    }

    /// Appends `item` to the end.
    pub fn add(&self, item: T) {
        self.inner.lock().add(item);
    }

    /// Removes and returns the first element matching `item` under `equals`.
    pub fn remove<F>(&self, item: &T, equals: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.inner.lock().remove(item, equals)
    }

    /// Returns `true` if some element matches `item` under `equals`.
    pub fn contains<F>(&self, item: &T, equals: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.inner.lock().contains(item, equals)
    }

    /// Returns the number of elements.
    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs `action` with exclusive access to the underlying list.
    pub fn with<R, F>(&self, action: F) -> R
    where
        F: FnOnce(&mut List<T>) -> R,
    {
        action(&mut self.inner.lock())
    }

    /// Consumes the wrapper, returning the list.
    pub fn into_inner(self) -> List<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SharedList<T> {
    /// Returns a copy of the current list.
    pub fn snapshot(&self) -> List<T> {
        self.inner.lock().clone()
    }

    /// Starts a [`Stream`] over a copy of the current contents.
    pub fn stream(&self) -> Stream<T> {
        self.inner.lock().stream()
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<List<T>> for SharedList<T> {
    fn from(list: List<T>) -> Self {
        Self {
            inner: Mutex::new(list),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality;
    use rstest::rstest;

    #[rstest]
    fn test_with_runs_under_one_lock() {
        let shared = SharedList::from(List::of([1, 2, 3]));
        let removed = shared.with(|list| {
            let first = list.remove(&1, equality::by_value);
            list.add(4);
            first
        });
        assert_eq!(removed, Some(1));
        assert_eq!(shared.snapshot().to_vec(), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_into_inner_returns_list() {
        let shared = SharedList::new();
        shared.add("a");
        assert_eq!(shared.into_inner().to_vec(), vec!["a"]);
    }
}
