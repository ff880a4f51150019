//! Equality predicates and deduplication helpers.
//!
//! Membership tests in this crate take an explicit equality predicate of the
//! shape `Fn(&T, &T) -> bool`, so element types without [`PartialEq`], or
//! with more than one useful notion of equality, can still be searched. This
//! module provides ready-made predicates and the deduplication routines used
//! by [`List::set`](crate::collection::List) and
//! [`Stream::distinct`](crate::stream::Stream::distinct).
//!
//! # Complexity
//!
//! | Routine           | Requires      | Order of result        | Cost   |
//! |-------------------|---------------|------------------------|--------|
//! | [`distinct`]      | `Eq + Hash`   | unspecified            | O(n)   |
//! | [`distinct_stable`] | `Eq + Hash` | first occurrences      | O(n)   |
//! | [`distinct_by`]   | a predicate   | first occurrences      | O(n²)  |
//!
//! # Examples
//!
//! ```rust
//! use conveyor::equality::{by_key, ignore_ascii_case};
//!
//! assert!(ignore_ascii_case("Rust", "rUST"));
//!
//! let same_length = by_key(|word: &&str| word.len());
//! assert!(same_length(&"abc", &"xyz"));
//! ```

use std::hash::Hash;

use crate::hashing;

/// Compares two values with [`PartialEq`].
pub fn by_value<T: PartialEq + ?Sized>(left: &T, right: &T) -> bool {
    left == right
}

/// Compares two strings ignoring ASCII case.
pub fn ignore_ascii_case<S: AsRef<str> + ?Sized>(left: &S, right: &S) -> bool {
    left.as_ref().eq_ignore_ascii_case(right.as_ref())
}

/// Returns a predicate that compares the keys extracted by `key`.
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    move |left, right| key(left) == key(right)
}

/// Returns the index of the first element equal to `item` under `equals`.
///
/// `equals` receives the stored element first and `item` second.
pub fn position_of<T, F>(elements: &[T], item: &T, mut equals: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    elements.iter().position(|existing| equals(existing, item))
}

/// Keeps one representative per equivalence class, grouping by hash.
///
/// The order of the result is unspecified.
pub fn distinct<T: Eq + Hash + Clone>(elements: &[T]) -> Vec<T> {
    let mut seen = hashing::hash_set_with_capacity(elements.len());
    seen.extend(elements.iter().cloned());
    seen.into_iter().collect()
}

/// Keeps the first occurrence of every equivalence class, in input order.
pub fn distinct_stable<T: Eq + Hash + Clone>(elements: &[T]) -> Vec<T> {
    let mut seen = hashing::hash_set_with_capacity(elements.len());
    elements
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Keeps the first occurrence of every equivalence class under `equals`.
///
/// Pairwise comparison, O(n²). Use [`distinct`] or [`distinct_stable`] when
/// the element type is hashable.
pub fn distinct_by<T, F>(elements: &[T], mut equals: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut unique: Vec<T> = Vec::with_capacity(elements.len());
    for element in elements {
        if !unique.iter().any(|kept| equals(kept, element)) {
            unique.push(element.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello", "hello", true)]
    #[case("Hello", "HELLO", true)]
    #[case("Hello", "world", false)]
    fn test_ignore_ascii_case(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        assert_eq!(ignore_ascii_case(left, right), expected);
    }

    #[rstest]
    fn test_by_value() {
        assert!(by_value(&1, &1));
        assert!(!by_value(&1, &2));
        assert!(by_value("a", "a"));
    }

    #[rstest]
    fn test_by_key_compares_projection() {
        let same_parity = by_key(|value: &i32| value % 2);
        assert!(same_parity(&2, &4));
        assert!(!same_parity(&2, &3));
    }

    #[rstest]
    fn test_position_of_finds_first_match() {
        let elements = [1, 2, 3, 2];
        assert_eq!(position_of(&elements, &2, |a, b| a == b), Some(1));
        assert_eq!(position_of(&elements, &9, |a, b| a == b), None);
    }

    #[rstest]
    fn test_distinct_keeps_one_per_class() {
        let mut unique = distinct(&[3, 1, 2, 1, 3]);
        unique.sort_unstable();
        assert_eq!(unique, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_distinct_stable_preserves_first_occurrence_order() {
        assert_eq!(distinct_stable(&[3, 1, 2, 1, 3]), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_distinct_by_uses_predicate() {
        let words = ["Apple", "apple", "Banana", "APPLE", "banana"];
        let unique = distinct_by(&words, |left, right| ignore_ascii_case(*left, *right));
        assert_eq!(unique, vec!["Apple", "Banana"]);
    }

    #[rstest]
    fn test_distinct_of_empty_is_empty() {
        let empty: [i32; 0] = [];
        assert!(distinct(&empty).is_empty());
        assert!(distinct_stable(&empty).is_empty());
        assert!(distinct_by(&empty, |a, b| a == b).is_empty());
    }
}
