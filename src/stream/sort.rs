//! Middle-pivot partition sort.
//!
//! Each pass picks the middle element as pivot and splits the run into
//! three groups: strictly less, equal, strictly greater. Groups are built by
//! scanning in order, so equal elements keep their input order and the sort
//! is stable. Pending runs live on an explicit work stack instead of the call
//! stack.
//!
//! The pivot always lands in the equal group, even under a comparator that
//! does not report it equal to itself, so every pass removes at least one
//! element from the runs still to be sorted and the loop terminates for any
//! comparator.
//!
//! Average cost O(n log n), worst case O(n²) comparisons.

use std::cmp::Ordering;

enum Work<T> {
    Sort(Vec<T>),
    Emit(Vec<T>),
}

pub(super) fn partition_sort<T, F>(elements: Vec<T>, comparator: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = Vec::with_capacity(elements.len());
    let mut pending = vec![Work::Sort(elements)];

    while let Some(work) = pending.pop() {
        match work {
            Work::Emit(run) => sorted.extend(run),
            Work::Sort(run) if run.len() <= 1 => sorted.extend(run),
            Work::Sort(run) => {
                let (less, equal, greater) = partition(run, comparator);
                pending.push(Work::Sort(greater));
                pending.push(Work::Emit(equal));
                pending.push(Work::Sort(less));
            }
        }
    }

    sorted
}

fn partition<T, F>(run: Vec<T>, comparator: &mut F) -> (Vec<T>, Vec<T>, Vec<T>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let middle = run.len() / 2;
    let orderings: Vec<Ordering> = run
        .iter()
        .enumerate()
        .map(|(index, element)| {
            if index == middle {
                Ordering::Equal
            } else {
                comparator(element, &run[middle])
            }
        })
        .collect();

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for (element, ordering) in run.into_iter().zip(orderings) {
        match ordering {
            Ordering::Less => less.push(element),
            Ordering::Equal => equal.push(element),
            Ordering::Greater => greater.push(element),
        }
    }
    (less, equal, greater)
}
