//! Intermediate stages.
//!
//! Every stage borrows its input stream and returns a freshly built one.

use std::cmp::Ordering;
use std::hash::Hash;

use super::Stream;
use super::sort::partition_sort;
use crate::equality;

impl<T: Clone> Stream<T> {
    /// Keeps the elements that satisfy `predicate`, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conveyor::stream::Stream;
    ///
    /// let large = Stream::of([3, 1, 2, 1]).filter(|value| *value > 1);
    /// assert_eq!(large.to_vec(), vec![3, 2]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let kept = self
            .elements
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect();
        self.next_stage("filter", kept)
    }

    /// Replaces every element with `mapper(element)`.
    ///
    /// The element type is preserved, as are length and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conveyor::stream::Stream;
    ///
    /// let doubled = Stream::of([1, 2, 3]).map(|value| value * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, mapper: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let mapped = self.elements.iter().map(mapper).collect();
        self.next_stage("map", mapped)
    }

    /// Orders the elements with a three-way `comparator`.
    ///
    /// The sort is stable: elements the comparator reports as equal keep
    /// their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conveyor::stream::Stream;
    ///
    /// let descending = Stream::of([3, 1, 2, 1]).sort(|left, right| right.cmp(left));
    /// assert_eq!(descending.to_vec(), vec![3, 2, 1, 1]);
    /// ```
    #[must_use]
    pub fn sort<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let sorted = partition_sort(self.elements.clone(), &mut comparator);
        self.next_stage("sort", sorted)
    }

    /// Orders the elements by their natural [`Ord`] ordering.
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        self.sort(|left, right| left.cmp(right))
    }

    /// Keeps at most the first `count` elements.
    #[must_use]
    pub fn limit(&self, count: usize) -> Self {
        let end = count.min(self.elements.len());
        self.next_stage("limit", self.elements[..end].to_vec())
    }

    /// Drops the first `count` elements.
    ///
    /// A `count` past the end yields an empty stream.
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        let start = count.min(self.elements.len());
        self.next_stage("skip", self.elements[start..].to_vec())
    }

    /// Runs a fallible inspection on every element without changing them.
    ///
    /// Elements are visited in order. The first `Err` stops the visit and
    /// the stage returns an aborted, empty stream; the error value itself is
    /// discarded, so callers that need it should capture it inside `peeker`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conveyor::stream::Stream;
    ///
    /// let mut seen = Vec::new();
    /// let same = Stream::of([1, 2]).peek(|value| {
    ///     seen.push(*value);
    ///     Ok::<(), String>(())
    /// });
    /// assert_eq!(seen, vec![1, 2]);
    /// assert_eq!(same.to_vec(), vec![1, 2]);
    ///
    /// let mut failure = None;
    /// let aborted = Stream::of([1, 2, 3]).peek(|value| {
    ///     if *value == 2 {
    ///         failure = Some(format!("rejected {value}"));
    ///         return Err(());
    ///     }
    ///     Ok(())
    /// });
    /// assert!(aborted.is_aborted());
    /// assert_eq!(failure.as_deref(), Some("rejected 2"));
    /// ```
    #[must_use]
    pub fn peek<F, E>(&self, mut peeker: F) -> Self
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        for (index, element) in self.elements.iter().enumerate() {
            if peeker(element).is_err() {
                tracing::debug!(
                    stage = "peek",
                    index,
                    input = self.elements.len(),
                    "peek failed, aborting stream"
                );
                return Self::aborted();
            }
        }
        self.next_stage("peek", self.elements.clone())
    }

    /// Keeps the first occurrence of every distinct element.
    #[must_use]
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        self.next_stage("distinct", equality::distinct_stable(&self.elements))
    }
}
