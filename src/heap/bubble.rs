use std::mem::ManuallyDrop;
use std::ptr;

use super::*;

/// A slot of the slice whose value has been lifted out.
///
/// The lifted value is written back into the current slot on drop, so a
/// panicking comparison still leaves every element in the slice exactly once.
struct Hole<'a, T> {
    data: &'a mut [T],
    element: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    fn new(data: &'a mut [T], pos: usize) -> Self {
        assert!(pos < data.len());
        // the slot at `pos` is refilled by `move_to` or `drop`
        let element = unsafe { ptr::read(data.as_ptr().add(pos)) };
        Hole {
            data,
            element: ManuallyDrop::new(element),
            pos,
        }
    }

    fn element(&self) -> &T {
        &self.element
    }

    /// Reads any slot other than the hole.
    fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        &self.data[index]
    }

    /// Moves the value at `index` into the hole; the hole moves to `index`.
    fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        assert!(index < self.data.len());
        unsafe {
            let base = self.data.as_mut_ptr();
            ptr::copy_nonoverlapping(base.add(index), base.add(self.pos), 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    fn drop(&mut self) {
        unsafe {
            let slot = self.data.as_mut_ptr().add(self.pos);
            ptr::copy_nonoverlapping(&*self.element as *const T, slot, 1);
        }
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Moves the value at `index` down until it dominates its children.
    ///
    /// The value is held aside while the more extremal child moves up into
    /// each vacated slot, and written once at its final position.
    pub(crate) fn sift_down(&mut self, index: usize) {
        let order = self.order;
        let len = self.elements.len();
        if index >= len {
            return;
        }
        let mut hole = Hole::new(self.elements.as_mut_slice(), index);
        loop {
            let left = hole.pos * 2 + 1;
            if left >= len {
                break;
            }
            let mut select = left;
            // ties stay on the left child
            if left + 1 < len && order.prefers(hole.get(left + 1), hole.get(left)) {
                select = left + 1;
            }
            if order.dominates(hole.element(), hole.get(select)) {
                break;
            }
            hole.move_to(select);
        }
    }

    /// Moves the value at `index` up until its parent dominates it.
    pub(crate) fn sift_up(&mut self, index: usize) {
        let order = self.order;
        debug_assert!(index < self.elements.len());
        let mut hole = Hole::new(self.elements.as_mut_slice(), index);
        while hole.pos > 0 {
            let parent = (hole.pos - 1) / 2;
            if order.dominates(hole.get(parent), hole.element()) {
                break;
            }
            hole.move_to(parent);
        }
    }
}

#[test]
fn sift_down_single_child() {
    let mut heap = BinaryHeap {
        elements: vec![1, 5],
        order: Order::Max,
    };
    heap.sift_down(0);
    assert_eq!(heap.elements, vec![5, 1]);
}

#[test]
fn sift_down_picks_more_extremal_child() {
    let mut heap = BinaryHeap {
        elements: vec![0, 3, 7],
        order: Order::Max,
    };
    heap.sift_down(0);
    assert_eq!(heap.elements, vec![7, 3, 0]);

    let mut heap = BinaryHeap {
        elements: vec![9, 3, 7],
        order: Order::Min,
    };
    heap.sift_down(0);
    assert_eq!(heap.elements, vec![3, 9, 7]);
}

#[test]
fn sift_down_equal_children_keeps_left() {
    let mut heap = BinaryHeap {
        elements: vec![(0, 'r'), (4, 'a'), (4, 'a')],
        order: Order::Max,
    };
    heap.sift_down(0);
    assert_eq!(heap.elements[1], (0, 'r'));
}

#[test]
fn sift_up_stops_when_parent_dominates() {
    let mut heap = BinaryHeap {
        elements: vec![9, 6, 8, 2, 5, 7, 3],
        order: Order::Max,
    };
    heap.sift_up(6);
    assert_eq!(heap.elements, vec![9, 6, 8, 2, 5, 7, 3]);
}

#[test]
fn sift_up_to_root() {
    let mut heap = BinaryHeap {
        elements: vec![9, 6, 8, 2, 5, 7, 10],
        order: Order::Max,
    };
    heap.sift_up(6);
    assert_eq!(heap.elements, vec![10, 6, 9, 2, 5, 7, 8]);
}

#[test]
fn hole_restores_slot_when_not_moved() {
    let mut values = vec![String::from("a"), String::from("b")];
    {
        let hole = Hole::new(&mut values, 1);
        assert_eq!(hole.element(), "b");
        assert_eq!(hole.get(0), "a");
    }
    assert_eq!(values, vec!["a", "b"]);
}

#[test]
fn hole_shifts_path() {
    let mut values = vec![1, 2, 3, 4];
    {
        let mut hole = Hole::new(&mut values, 0);
        hole.move_to(1);
        hole.move_to(3);
    }
    assert_eq!(values, vec![2, 4, 3, 1]);
}

#[test]
fn sift_down_owned_values() {
    let mut heap = BinaryHeap {
        elements: ["a", "f", "c", "e", "d", "b"].map(String::from).to_vec(),
        order: Order::Max,
    };
    heap.sift_down(0);
    assert_eq!(heap.elements, vec!["f", "e", "c", "a", "d", "b"]);
}
