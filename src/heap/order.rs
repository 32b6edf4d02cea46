use std::cmp::Ordering;
use std::fmt::Display;

/// Polarity of a heap, fixed for the lifetime of the heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Every parent is `>=` its children; the root is the maximum.
    Max,
    /// Every parent is `<=` its children; the root is the minimum.
    Min,
}

impl Order {
    /// Whether `a` may sit above `b` in a heap of this polarity.
    pub fn dominates<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Max => a >= b,
            Order::Min => a <= b,
        }
    }

    /// Whether `a` must be moved above `b`, i.e. `a` is strictly more extremal.
    pub(crate) fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        !self.dominates(b, a)
    }

    /// The ordering in which `drain_sorted` yields elements.
    pub fn sorted_ordering<T: Ord>(self, a: &T, b: &T) -> Ordering {
        match self {
            Order::Max => b.cmp(a),
            Order::Min => a.cmp(b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Order::Max => "max",
            Order::Min => "min",
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[test]
fn max_dominates() {
    assert!(Order::Max.dominates(&3, &2));
    assert!(Order::Max.dominates(&2, &2));
    assert!(!Order::Max.dominates(&1, &2));
}

#[test]
fn min_dominates() {
    assert!(Order::Min.dominates(&1, &2));
    assert!(Order::Min.dominates(&2, &2));
    assert!(!Order::Min.dominates(&3, &2));
}

#[test]
fn prefers_is_strict() {
    assert!(Order::Max.prefers(&3, &2));
    assert!(!Order::Max.prefers(&2, &2));
    assert!(Order::Min.prefers(&1, &2));
    assert!(!Order::Min.prefers(&2, &2));
}

#[test]
fn sorted_ordering_direction() {
    let mut v = vec![3, 1, 2];
    v.sort_by(|a, b| Order::Max.sorted_ordering(a, b));
    assert_eq!(v, vec![3, 2, 1]);
    v.sort_by(|a, b| Order::Min.sorted_ordering(a, b));
    assert_eq!(v, vec![1, 2, 3]);
}
