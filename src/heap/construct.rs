use super::*;

impl<T: Ord> BinaryHeap<T> {
    /// Create an empty heap of the given polarity.
    ///
    /// # Examples
    /// ```
    /// use heaplib::{BinaryHeap, Order};
    /// let mut heap = BinaryHeap::<i32>::new(Order::Min);
    /// heap.insert(4);
    /// ```
    pub fn new(order: Order) -> Self {
        BinaryHeap {
            elements: Vec::new(),
            order,
        }
    }
    /// Create an empty heap able to hold at least `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize, order: Order) -> Self {
        BinaryHeap {
            elements: Vec::with_capacity(capacity),
            order,
        }
    }
    /// Build a heap from any finite sequence with bottom-up heapify, O(n).
    ///
    /// The sequence is collected into storage owned by the heap, so the
    /// caller's collection is never aliased. Empty input gives an empty heap.
    ///
    /// # Examples
    /// ```
    /// use heaplib::{BinaryHeap, Order};
    /// let values = [2, 9, 7, 6, 5, 8];
    /// let heap = BinaryHeap::build(values.iter().copied(), Order::Max);
    /// assert_eq!(heap.len(), 6);
    /// assert_eq!(heap.peek().unwrap(), &9);
    /// ```
    pub fn build<I: IntoIterator<Item = T>>(initial: I, order: Order) -> Self {
        Self::from_vec(initial.into_iter().collect(), order)
    }
    /// Build a heap in place over an owned vector.
    pub fn from_vec(elements: Vec<T>, order: Order) -> Self {
        let mut heap = BinaryHeap { elements, order };
        heap.heapify();
        heap
    }
    /// Shorthand for `build(initial, Order::Max)`.
    pub fn max_heap<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self::build(initial, Order::Max)
    }
    /// Shorthand for `build(initial, Order::Min)`.
    pub fn min_heap<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self::build(initial, Order::Min)
    }

    fn heapify(&mut self) {
        let len = self.elements.len();
        if len < 2 {
            return;
        }
        for index in (0..=(len - 1) / 2).rev() {
            self.sift_down(index);
        }
        debug_assert!(self.is_heap_ordered());
    }
}

#[test]
fn test_new_private() {
    let heap: BinaryHeap<i32> = BinaryHeap::new(Order::Max);
    assert_eq!(heap.elements.len(), 0);
    assert_eq!(heap.order, Order::Max);
}

#[test]
fn test_with_capacity() {
    let heap: BinaryHeap<String> = BinaryHeap::with_capacity(20, Order::Min);
    assert!(heap.is_empty());
    assert!(heap.elements.capacity() >= 20);
}

#[test]
fn test_build_does_not_alias() {
    let source = vec![3, 1, 2];
    let heap = BinaryHeap::build(source.iter().copied(), Order::Max);
    assert_eq!(source, vec![3, 1, 2]);
    assert_eq!(heap.as_slice()[0], 3);
}

#[test]
fn test_build_layout() {
    let heap = BinaryHeap::build(vec![2, 9, 7, 6, 5, 8], Order::Max);
    assert_eq!(heap.as_slice(), &[9, 6, 8, 2, 5, 7]);
}

#[test]
fn test_polarity_shorthands() {
    let max = BinaryHeap::max_heap(vec![4, 8, 1]);
    assert_eq!(max.order(), Order::Max);
    assert_eq!(max.peek(), Ok(&8));
    let min = BinaryHeap::min_heap(vec![4, 8, 1]);
    assert_eq!(min.order(), Order::Min);
    assert_eq!(min.into_sorted_vec(), vec![1, 4, 8]);
}
