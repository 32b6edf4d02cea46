use super::BinaryHeap;
use super::Order;

impl<T: Ord> BinaryHeap<T> {
    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    /// ```
    /// use heaplib::{BinaryHeap, Order};
    /// let mut heap = BinaryHeap::new(Order::Max);
    /// assert_eq!(heap.len(), 0);
    /// heap.insert(1);
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn order(&self) -> Order {
        self.order
    }
    /// Read-only view of the storage, level by level from the root.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
    /// Removes all elements, keeping the polarity.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
    /// Checks that every parent dominates each of its children.
    pub fn is_heap_ordered(&self) -> bool {
        let vec = &self.elements;
        (1..vec.len()).all(|child| self.order.dominates(&vec[(child - 1) / 2], &vec[child]))
    }
}

#[test]
fn clear_keeps_order() {
    let mut heap = BinaryHeap::build(vec![1, 2, 3], Order::Max);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.order(), Order::Max);
    heap.insert(4);
    heap.insert(7);
    assert_eq!(heap.peek(), Ok(&7));
}

#[test]
fn detects_broken_order() {
    let heap = BinaryHeap {
        elements: vec![1, 5, 3],
        order: Order::Max,
    };
    assert!(!heap.is_heap_ordered());
    let heap = BinaryHeap {
        elements: vec![1, 5, 3],
        order: Order::Min,
    };
    assert!(heap.is_heap_ordered());
}
