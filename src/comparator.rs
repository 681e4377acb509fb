//! Three-way orderings that decide which element sits closer to a heap's root.

use core::cmp::Ordering;

/// Orders heap elements. `Ordering::Less` means `a` belongs nearer the
/// root than `b`.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending `Ord` order; yields a min-heap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending `Ord` order; yields a max-heap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: ?Sized + Ord> Comparator<T> for Reversed {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
