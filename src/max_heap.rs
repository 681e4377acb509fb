//! MaxHeap: the binary heap under `Reversed` order.

use crate::binary_heap::BinaryHeap;
use crate::comparator::Reversed;
use crate::error::AllocError;

/// Pops the largest element first.
pub type MaxHeap<T> = BinaryHeap<T, Reversed>;

impl<T: Ord> BinaryHeap<T, Reversed> {
    /// Largest element, if any.
    pub fn max(&self) -> Option<&T> {
        self.peek()
    }

    /// Replaces the largest element and returns it.
    pub fn replace_max(&mut self, element: T) -> Result<Option<T>, AllocError> {
        self.replace(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_heap_scenario() {
        let mut h: MaxHeap<i32> = MaxHeap::with_capacity(10);
        for x in [50, 20, 80, 10, 90, 30] {
            h.push(x).unwrap();
        }
        assert_eq!(h.max(), Some(&90));
        assert_eq!(h.replace_max(40).unwrap(), Some(90));
        assert_eq!(h.max(), Some(&80));
        assert_eq!(h.into_sorted_vec(), vec![80, 50, 40, 30, 20, 10]);
    }

    /// Borrowed elements: the heap orders references and leaves the owners alone.
    #[test]
    fn heap_of_references() {
        let scores = vec![3u32, 11, 7];
        let mut h: MaxHeap<&u32> = MaxHeap::from(scores.iter().collect::<Vec<_>>());
        assert_eq!(h.pop(), Some(&11));
        assert_eq!(h.pop(), Some(&7));
        assert_eq!(scores, vec![3, 11, 7]);
    }
}
