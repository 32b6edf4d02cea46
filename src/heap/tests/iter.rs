use super::*;

#[test]
fn iter_starts_at_root() {
    let heap = BinaryHeap::build(vec![1, 2, 3], Order::Max);
    let mut iter = heap.iter();
    assert_eq!(iter.next(), Some(&3));
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_matches_storage_snapshot() {
    let mut heap = BinaryHeap::new(Order::Min);
    for v in [7, 3, 9, 1, 4] {
        heap.insert(v);
    }
    let seen: Vec<i32> = (&heap).into_iter().copied().collect();
    assert_eq!(seen, heap.as_slice());
    let mut multiset = seen.clone();
    multiset.sort();
    assert_eq!(multiset, vec![1, 3, 4, 7, 9]);
}

#[test]
fn iter_reports_exact_len() {
    let heap = BinaryHeap::build(0..100, Order::Min);
    let iter = heap.iter();
    assert_eq!(iter.len(), 100);
    assert_eq!(iter.count(), 100);
}

#[test]
fn extend_inserts_owned_and_borrowed() {
    let mut heap = BinaryHeap::build(vec![4, 2], Order::Max);
    heap.extend(vec![9, 1]);
    heap.extend(&[7, 3]);
    assert_eq!(heap.len(), 6);
    assert!(heap.is_heap_ordered());
    assert_eq!(heap.into_sorted_vec(), vec![9, 7, 4, 3, 2, 1]);
}
