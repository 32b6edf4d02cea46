use super::*;

impl<T: Ord> BinaryHeap<T> {
    /// Inserts a value, restoring heap order along its path to the root.
    ///
    /// # Examples
    /// ```
    /// use heaplib::{BinaryHeap, Order};
    /// let mut heap = BinaryHeap::build(vec![2, 9, 7, 6, 5, 8], Order::Max);
    /// heap.insert(10);
    /// assert_eq!(heap.peek().unwrap(), &10);
    /// ```
    pub fn insert(&mut self, value: T) {
        let len = self.elements.len();
        self.elements.push(value);
        self.sift_up(len);
    }
}

#[test]
fn insert_into_empty() {
    let mut heap = BinaryHeap::new(Order::Min);
    heap.insert(3);
    assert_eq!(heap.as_slice(), &[3]);
}

#[test]
fn insert_new_root() {
    let mut heap = BinaryHeap::build(vec![2, 9, 7, 6, 5, 8], Order::Max);
    heap.insert(10);
    assert_eq!(heap.len(), 7);
    assert_eq!(heap.as_slice(), &[10, 6, 9, 2, 5, 7, 8]);
}
