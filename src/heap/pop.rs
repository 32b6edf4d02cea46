use crate::error::{HeapError, Result};

use super::*;

impl<T: Ord> BinaryHeap<T> {
    /// Removes and returns the extremal element.
    ///
    /// The last element takes the root's place and sinks back into heap order.
    /// On an empty heap nothing is touched and `HeapError::Empty` is returned.
    ///
    /// # Examples
    /// ```
    /// use heaplib::{BinaryHeap, Order};
    /// let mut heap = BinaryHeap::build(vec![2, 9, 7, 6, 5, 8], Order::Max);
    /// assert_eq!(heap.extract_extremal().unwrap(), 9);
    /// assert_eq!(heap.extract_extremal().unwrap(), 8);
    /// ```
    pub fn extract_extremal(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(HeapError::Empty);
        }
        let extremal = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(extremal)
    }
    /// Extracts every element, most extremal first, leaving the heap empty.
    ///
    /// The result is ascending for `Order::Min` and descending for `Order::Max`.
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.extract_extremal() {
            sorted.push(value);
        }
        sorted
    }
}

#[test]
fn extract_single() {
    let mut heap = BinaryHeap::build(vec![42], Order::Max);
    assert_eq!(heap.extract_extremal(), Ok(42));
    assert!(heap.is_empty());
    assert_eq!(heap.extract_extremal(), Err(HeapError::Empty));
}

#[test]
fn extract_keeps_order() {
    let mut heap = BinaryHeap::build(vec![2, 9, 7, 6, 5, 8], Order::Max);
    assert_eq!(heap.extract_extremal(), Ok(9));
    assert_eq!(heap.as_slice(), &[8, 6, 7, 2, 5]);
    assert!(heap.is_heap_ordered());
}

#[test]
fn drain_leaves_empty() {
    let mut heap = BinaryHeap::build(vec![5, 1, 3], Order::Min);
    assert_eq!(heap.drain_sorted(), vec![1, 3, 5]);
    assert_eq!(heap.len(), 0);
    assert!(heap.drain_sorted().is_empty());
}
