use super::*;

/// Iterator over the elements of a heap in storage order.
pub struct RefIter<'a, T: Ord> {
    pub(crate) inner: std::slice::Iter<'a, T>,
}

impl<'a, T: Ord> Iterator for RefIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Ord> ExactSizeIterator for RefIter<'a, T> {}

impl<'a, T: Ord> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;

    type IntoIter = RefIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        RefIter {
            inner: self.elements.iter(),
        }
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Iterates in storage order, which is heap order and not sorted order.
    pub fn iter(&self) -> RefIter<'_, T> {
        self.into_iter()
    }
}
