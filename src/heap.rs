pub use self::iter::RefIter;
pub use self::order::Order;

/// An array backed binary heap with a polarity chosen at construction.
///
/// The elements form a complete binary tree stored level by level: the root
/// is at index 0 and the children of `i` are at `2 * i + 1` and `2 * i + 2`.
/// Every parent dominates its children under `order`, so the root is always
/// the extremal element (the maximum for `Order::Max`, the minimum for
/// `Order::Min`).
///
/// # Examples
/// ```
/// use heaplib::{BinaryHeap, Order};
/// let mut heap = BinaryHeap::build(vec![2, 9, 7, 6, 5, 8], Order::Max);
/// assert_eq!(heap.peek().unwrap(), &9);
/// heap.insert(10);
/// assert_eq!(heap.extract_extremal().unwrap(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct BinaryHeap<T: Ord> {
    pub(crate) elements: Vec<T>,
    pub(crate) order: Order,
}

mod bubble;
mod construct;
mod extend;
mod into;
mod iter;
mod order;
mod peek;
mod pop;
mod property;
mod push;

#[cfg(test)]
mod tests;

/// Sorts a copy of `values` with a fresh heap, leaving the input untouched.
///
/// The result is ascending for `Order::Min` and descending for `Order::Max`.
pub fn heap_sort<T: Ord + Clone>(values: &[T], order: Order) -> Vec<T> {
    BinaryHeap::build(values.iter().cloned(), order).drain_sorted()
}
