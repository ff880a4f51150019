//! Unit tests for List and the Collection interface.

#![cfg(feature = "collection")]

use conveyor::prelude::*;
use rstest::rstest;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name)
    }
}

#[derive(Clone, Debug)]
struct Broken(u8);

impl fmt::Display for Broken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            write!(formatter, "ok")
        } else {
            Err(fmt::Error)
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_list_is_empty() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert_eq!(list, List::default());
}

#[rstest]
fn test_list_macro_matches_from_vec() {
    assert_eq!(list![1, 2, 3], List::from(vec![1, 2, 3]));
    assert_eq!(list![1, 2, 3,], List::of([1, 2, 3]));
}

#[rstest]
fn test_with_capacity_starts_empty() {
    let list: List<String> = List::with_capacity(16);
    assert!(list.is_empty());
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn test_add_preserves_insertion_order() {
    let mut list = List::new();
    for value in [5, 3, 9, 3] {
        list.add(value);
    }
    assert_eq!(list.as_slice(), &[5, 3, 9, 3]);
}

#[rstest]
fn test_remove_with_custom_equivalence() {
    let mut people = list![Person::new("Ada", 36), Person::new("Grace", 85)];

    let removed = people.remove(
        &Person::new("grace", 0),
        |existing: &Person, probe: &Person| existing.name.eq_ignore_ascii_case(&probe.name),
    );

    assert_eq!(removed, Some(Person::new("Grace", 85)));
    assert_eq!(people.size(), 1);
}

#[rstest]
fn test_remove_by_key_predicate() {
    let mut people = list![Person::new("Ada", 36), Person::new("Alan", 41)];
    let same_age = equality::by_key(|person: &Person| person.age);

    assert!(people.contains(&Person::new("anyone", 41), &same_age));
    assert!(people.remove(&Person::new("anyone", 41), &same_age).is_some());
    assert!(!people.contains(&Person::new("anyone", 41), &same_age));
}

#[rstest]
#[case(1, true)]
#[case(2, true)]
#[case(7, false)]
fn test_contains_by_value(#[case] probe: i32, #[case] expected: bool) {
    let list = list![3, 1, 2, 1];
    assert_eq!(list.contains(&probe, equality::by_value), expected);
}

#[rstest]
fn test_clear_then_reuse() {
    let mut list = list![1, 2, 3];
    list.clear();
    assert!(list.is_empty());
    list.add(4);
    assert_eq!(list.to_vec(), vec![4]);
}

// =============================================================================
// Deduplication
// =============================================================================

#[rstest]
fn test_set_keeps_one_per_equivalence_class() {
    let list = list![3, 1, 2, 1];
    let mut unique = list.set().to_vec();
    unique.sort_unstable();
    assert_eq!(unique, vec![1, 2, 3]);
}

#[rstest]
fn test_set_uses_structural_equality() {
    let list = list![
        Person::new("Ada", 36),
        Person::new("Ada", 36),
        Person::new("Ada", 37),
    ];
    assert_eq!(list.set().size(), 2);
}

#[rstest]
fn test_set_by_keeps_first_occurrence_in_order() {
    let list = list!["b", "A", "a", "B", "c"];
    let unique = list.set_by(|left: &&str, right: &&str| left.eq_ignore_ascii_case(right));
    assert_eq!(unique.to_vec(), vec!["b", "A", "c"]);
}

#[rstest]
fn test_set_of_empty_is_empty() {
    let list: List<i32> = list![];
    assert!(list.set().is_empty());
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
#[case(vec![], "")]
#[case(vec![7], "7")]
#[case(vec![3, 1, 2, 1], "3, 1, 2, 1")]
fn test_try_to_string(#[case] elements: Vec<i32>, #[case] expected: &str) {
    assert_eq!(List::from(elements).try_to_string().unwrap(), expected);
}

#[rstest]
fn test_to_map_keys_by_rendering_last_write_wins() {
    let list = list![Person::new("Ada", 36), Person::new("Alan", 41), Person::new("Ada", 99)];
    let map = list.to_map().unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("Ada").map(|person| person.age), Some(99));
    assert_eq!(map.get("Alan").map(|person| person.age), Some(41));
}

#[rstest]
fn test_conversion_failure_returns_no_partial_output() {
    let list = list![Broken(0), Broken(1), Broken(0)];

    let error = list.try_to_string().unwrap_err();
    assert_eq!(error, ConversionError::Render { index: 1, source: fmt::Error });
}

#[rstest]
fn test_to_map_failure_reports_index_and_no_map() {
    let list = list![Broken(0), Broken(0), Broken(1)];

    assert_eq!(list.to_map().unwrap_err().index(), 2);
    assert_eq!(list.stream().to_map().unwrap_err().index(), 2);
    assert_eq!(list.stream().skip(1).to_map().unwrap_err().index(), 1);
}

#[rstest]
fn test_to_vec_is_a_snapshot() {
    let list = list![1, 2, 3];
    let mut snapshot = list.to_vec();
    snapshot.clear();
    assert_eq!(list.size(), 3);
}

// =============================================================================
// Stream hand-off
// =============================================================================

#[rstest]
fn test_reference_example() {
    let list = list![3, 1, 2, 1];

    assert_eq!(list.set().size(), 3);
    assert_eq!(list.stream().sorted().to_vec(), vec![1, 1, 2, 3]);
    assert_eq!(list.stream().filter(|value| *value > 1).to_vec(), vec![3, 2]);
    assert_eq!(list.try_to_string().unwrap(), "3, 1, 2, 1");
}

#[rstest]
fn test_stream_round_trips_into_list() {
    let list = list![5, 4, 3];
    let sorted = list.stream().sorted().into_list();
    assert_eq!(sorted, list![3, 4, 5]);
    assert_eq!(list, list![5, 4, 3]);
}

#[rstest]
fn test_stream_from_list_conversion() {
    let stream: Stream<i32> = list![1, 2].into();
    assert_eq!(stream.count(), 2);
}

// =============================================================================
// Vec as a Collection
// =============================================================================

#[rstest]
fn test_vec_implements_collection() {
    let mut elements = vec![Person::new("Ada", 36), Person::new("Alan", 41)];
    let same_age = equality::by_key(|person: &Person| person.age);

    elements.add(Person::new("Grace", 36));
    assert_eq!(elements.size(), 3);
    assert!(Collection::contains(&elements, &Person::new("Someone", 41), &same_age));
    assert_eq!(elements.set_by(&same_age).size(), 2);
    assert_eq!(elements.try_to_string().unwrap(), "Ada, Alan, Grace");

    let removed = Collection::remove(&mut elements, &Person::new("Anyone", 36), &same_age);
    assert_eq!(removed.map(|person| person.name), Some("Ada".to_string()));
    assert_eq!(elements.stream().count(), 2);
}

#[rstest]
fn test_vec_set_matches_list_set() {
    let elements = vec![3, 1, 2, 1];
    let mut from_vec = elements.set();
    let mut from_list = List::from(elements).set().into_vec();
    from_vec.sort_unstable();
    from_list.sort_unstable();
    assert_eq!(from_vec, from_list);
}
