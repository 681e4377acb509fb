//! MinHeap: the binary heap under `Natural` order.

use crate::binary_heap::BinaryHeap;
use crate::comparator::Natural;
use crate::error::AllocError;

/// Pops the smallest element first.
pub type MinHeap<T> = BinaryHeap<T, Natural>;

impl<T: Ord> BinaryHeap<T, Natural> {
    /// Smallest element, if any.
    pub fn min(&self) -> Option<&T> {
        self.peek()
    }

    /// Replaces the smallest element and returns it.
    pub fn replace_min(&mut self, element: T) -> Result<Option<T>, AllocError> {
        self.replace(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the root is the minimum after every interleaved operation.
    #[test]
    fn root_tracks_minimum() {
        let mut h: MinHeap<i32> = MinHeap::with_capacity(10);
        let mut model: Vec<i32> = Vec::new();
        for (i, x) in [50, 20, 80, 10, 90, 30, 10, 70].into_iter().enumerate() {
            if i % 3 == 2 {
                let old = h.replace_min(x).unwrap();
                let min = *model.iter().min().unwrap();
                assert_eq!(old, Some(min));
                let pos = model.iter().position(|&m| m == min).unwrap();
                model[pos] = x;
            } else {
                h.push(x).unwrap();
                model.push(x);
            }
            assert!(h.is_valid());
            assert_eq!(h.min(), model.iter().min());
        }
    }

    #[test]
    fn strings_drain_lexicographically() {
        let mut h: MinHeap<String> = MinHeap::new();
        for w in ["pear", "apple", "fig"] {
            h.push(w.to_string()).unwrap();
        }
        assert_eq!(h.into_sorted_vec(), vec!["apple", "fig", "pear"]);
    }
}
