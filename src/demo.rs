//! Heap sort runs over sample inputs, and the insert/extract walkthrough.

use std::fmt::{self, Display};

use tracing::{debug, info};

use crate::display::{braced, SortTable};
use crate::error::Result;
use crate::heap::{heap_sort, BinaryHeap, Order};

/// One sorted input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortCase<T> {
    pub unsorted: Vec<T>,
    pub sorted: Vec<T>,
}

/// Sorts every case with its own heap. The inputs are left untouched.
pub fn sort_cases<T: Ord + Clone>(cases: &[Vec<T>], order: Order) -> Vec<SortCase<T>> {
    cases
        .iter()
        .map(|unsorted| {
            let sorted = heap_sort(unsorted, order);
            debug!(len = sorted.len(), %order, "sorted case");
            SortCase {
                unsorted: unsorted.clone(),
                sorted,
            }
        })
        .collect()
}

pub fn sort_table<T: Display>(cases: &[SortCase<T>]) -> SortTable {
    let mut table = SortTable::new();
    for case in cases {
        table.push(&case.unsorted, &case.sorted);
    }
    table
}

/// Snapshots taken while exercising a heap: build, extract, insert, drain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walkthrough<T> {
    pub order: Order,
    pub built: Vec<T>,
    pub extracted: T,
    pub after_extract: Vec<T>,
    pub inserted: T,
    pub after_insert: Vec<T>,
    pub drained: Vec<T>,
}

/// Builds a heap from `initial`, extracts its root, inserts `inserted` and
/// drains the rest. Fails with `HeapError::Empty` when `initial` is empty.
pub fn walkthrough<T: Ord + Clone>(
    initial: &[T],
    order: Order,
    inserted: T,
) -> Result<Walkthrough<T>> {
    let mut heap = BinaryHeap::build(initial.iter().cloned(), order);
    let built = heap.as_slice().to_vec();
    let extracted = heap.extract_extremal()?;
    let after_extract = heap.as_slice().to_vec();
    heap.insert(inserted.clone());
    let after_insert = heap.as_slice().to_vec();
    let drained = heap.drain_sorted();
    info!(%order, len = initial.len(), "walkthrough finished");
    Ok(Walkthrough {
        order,
        built,
        extracted,
        after_extract,
        inserted,
        after_insert,
        drained,
    })
}

impl<T: Display> Display for Walkthrough<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heap ({}): {}", self.order, braced(&self.built))?;
        writeln!(f, "Deleted: {}", self.extracted)?;
        writeln!(f, "Heap: {}", braced(&self.after_extract))?;
        writeln!(f, "Inserted: {}", self.inserted)?;
        writeln!(f, "Heap: {}", braced(&self.after_insert))?;
        writeln!(f, "Sorted: {}", braced(&self.drained))
    }
}
