use crate::error::{HeapError, Result};

use super::*;

impl<T: Ord> BinaryHeap<T> {
    /// Returns a reference to the extremal element without removing it.
    ///
    /// # Examples
    /// ```
    /// use heaplib::{BinaryHeap, HeapError, Order};
    /// let heap = BinaryHeap::build(vec![1, 2, 3], Order::Min);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// let empty = BinaryHeap::<i32>::new(Order::Min);
    /// assert_eq!(empty.peek(), Err(HeapError::Empty));
    /// ```
    pub fn peek(&self) -> Result<&T> {
        self.elements.first().ok_or(HeapError::Empty)
    }
}
