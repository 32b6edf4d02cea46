use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};

use super::*;

#[test]
fn zero_sized_heap() {
    let mut heap = BinaryHeap::new(Order::Max);
    heap.insert(());
    heap.insert(());
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.extract_extremal(), Ok(()));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.extract_extremal(), Ok(()));
    assert_eq!(heap.extract_extremal(), Err(HeapError::Empty));
}

/// A priority that counts live instances in its own counter and refuses to be
/// compared against `poison`.
#[derive(Debug)]
struct Job {
    priority: i32,
    live: &'static AtomicUsize,
}

const POISON: i32 = 13;

impl Job {
    fn new(priority: i32, live: &'static AtomicUsize) -> Self {
        live.fetch_add(1, SeqCst);
        Job { priority, live }
    }
}

impl Drop for Job {
    fn drop(&mut self) {
        self.live.fetch_sub(1, SeqCst);
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Job {}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Job {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.priority == POISON || other.priority == POISON {
            panic!("cannot rank job {}", POISON);
        }
        self.priority.cmp(&other.priority)
    }
}

#[test]
fn drop_releases_jobs() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);
    let mut heap = BinaryHeap::new(Order::Min);
    heap.insert(Job::new(2, &LIVE));
    heap.insert(Job::new(1, &LIVE));
    assert_eq!(LIVE.load(SeqCst), 2);
    let first = heap.extract_extremal().unwrap();
    assert_eq!(first.priority, 1);
    drop(first);
    assert_eq!(LIVE.load(SeqCst), 1);
    drop(heap);
    assert_eq!(LIVE.load(SeqCst), 0);
}

#[test]
fn panicking_insert_keeps_every_job() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);
    let mut heap = BinaryHeap::new(Order::Max);
    for p in [5, 8, 1, 4] {
        heap.insert(Job::new(p, &LIVE));
    }
    let result = catch_unwind(AssertUnwindSafe(|| heap.insert(Job::new(POISON, &LIVE))));
    assert!(result.is_err());
    assert_eq!(heap.len(), 5);
    assert_eq!(LIVE.load(SeqCst), 5);
    let mut priorities: Vec<i32> = heap.iter().map(|job| job.priority).collect();
    priorities.sort();
    assert_eq!(priorities, vec![1, 4, 5, 8, POISON]);
    drop(heap);
    assert_eq!(LIVE.load(SeqCst), 0);
}

#[test]
fn panicking_extract_keeps_remaining_jobs() {
    static LIVE: AtomicUsize = AtomicUsize::new(0);
    let mut heap = BinaryHeap::new(Order::Min);
    for p in [1, 2, 3] {
        heap.insert(Job::new(p, &LIVE));
    }
    // the last slot moves to the root on extract and is compared there
    heap.elements.push(Job::new(POISON, &LIVE));
    let result = catch_unwind(AssertUnwindSafe(|| heap.extract_extremal()));
    assert!(result.is_err());
    assert_eq!(heap.len(), 3);
    assert_eq!(LIVE.load(SeqCst), 3);
    drop(heap);
    assert_eq!(LIVE.load(SeqCst), 0);
}

#[test]
fn into_vec_is_storage_order() {
    let heap = BinaryHeap::build(vec![2, 9, 7, 6, 5, 8], Order::Max);
    let storage: Vec<i32> = heap.clone().into();
    assert_eq!(storage, heap.into_vec());
}

#[test]
fn clone_is_independent() {
    let mut heap = BinaryHeap::build(vec![10, 5], Order::Min);
    let copy = heap.clone();
    heap.extract_extremal().unwrap();
    assert_eq!(heap.len(), 1);
    assert_eq!(copy.len(), 2);
    assert_eq!(copy.peek(), Ok(&5));
}
