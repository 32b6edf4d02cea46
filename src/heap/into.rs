use super::*;

impl<T: Ord> BinaryHeap<T> {
    /// Consumes the heap and returns its storage in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
    /// Consumes the heap and returns its elements most extremal first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted()
    }
}

impl<T: Ord> From<BinaryHeap<T>> for Vec<T> {
    fn from(heap: BinaryHeap<T>) -> Self {
        heap.into_vec()
    }
}
