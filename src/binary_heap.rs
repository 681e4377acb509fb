//! BinaryHeap: a complete binary tree stored in a `Vec`, ordered by a `Comparator`.
//!
//! Node `i` has its parent at `(i - 1) / 2` and its children at `2i + 1`
//! and `2i + 2`. Every parent compares `<=` its children under the
//! heap's comparator, so the root is the element the comparator ranks
//! first. One engine serves both orderings: `Natural` gives a min-heap
//! and `Reversed` a max-heap.
//!
//! The heap moves elements in and out but never clones or inspects them
//! beyond the comparator. Store references or shared handles to keep
//! ownership with the caller.

use crate::comparator::{Comparator, Natural};
use crate::error::AllocError;
use core::cmp::Ordering;
use core::fmt;

/// Capacity used when a heap is created with a zero capacity hint.
pub const DEFAULT_HEAP_CAPACITY: usize = 16;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

#[derive(Clone)]
pub struct BinaryHeap<T, C = Natural> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C> BinaryHeap<T, C>
where
    C: Comparator<T> + Default,
{
    pub fn new() -> Self {
        Self::with_capacity_and_comparator(DEFAULT_HEAP_CAPACITY, C::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }
}

impl<T, C> Default for BinaryHeap<T, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Comparator<T>,
{
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_HEAP_CAPACITY, cmp)
    }

    /// A zero `capacity` hint means `DEFAULT_HEAP_CAPACITY`.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_HEAP_CAPACITY
        } else {
            capacity
        };
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Heapifies `data` in place in `O(n)`.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.heapify();
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Backing array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.data.try_reserve(additional)?;
        Ok(())
    }

    /// Drops every element; capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if !self.precedes(i, p) {
                break;
            }
            self.data.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let mut target = i;
            let (l, r) = (left(i), right(i));
            if l < len && self.precedes(l, target) {
                target = l;
            }
            if r < len && self.precedes(r, target) {
                target = r;
            }
            if target == i {
                break;
            }
            self.data.swap(i, target);
            i = target;
        }
    }

    /// Sifts down every internal node, last one first.
    fn heapify(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        for i in (0..=parent(len - 1)).rev() {
            self.sift_down(i);
        }
    }

    /// Appends `element` and sifts it up. `O(log n)`.
    pub fn push(&mut self, element: T) -> Result<(), AllocError> {
        self.data.try_reserve(1)?;
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Removes and returns the root. `O(log n)`.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let root = core::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(root)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Swaps `element` in as the root and returns the old root, with a
    /// single sift-down. On an empty heap this is `push` and returns `None`.
    pub fn replace(&mut self, element: T) -> Result<Option<T>, AllocError> {
        if self.data.is_empty() {
            self.push(element)?;
            return Ok(None);
        }
        let old = core::mem::replace(&mut self.data[0], element);
        self.sift_down(0);
        Ok(Some(old))
    }

    /// Replaces the contents with `elements` and heapifies bottom-up in `O(n)`.
    ///
    /// The elements are collected into fresh storage first; on failure the
    /// heap keeps its previous contents.
    pub fn build_from<I>(&mut self, elements: I) -> Result<(), AllocError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        let mut data = Vec::new();
        data.try_reserve(elements.size_hint().0)?;
        for e in elements {
            data.try_reserve(1)?;
            data.push(e);
        }
        self.data = data;
        self.heapify();
        Ok(())
    }

    /// Moves every element of `other` into `self` by repeated pop and push,
    /// `O(m log(n + m))`. Room for all of `other` is reserved first, so an
    /// allocation failure leaves both heaps untouched.
    pub fn merge<C2>(&mut self, other: &mut BinaryHeap<T, C2>) -> Result<(), AllocError>
    where
        C2: Comparator<T>,
    {
        self.reserve(other.len())?;
        while let Some(e) = other.pop() {
            self.data.push(e);
            self.sift_up(self.data.len() - 1);
        }
        Ok(())
    }

    /// Whether every parent precedes or ties with both of its children.
    pub fn is_valid(&self) -> bool {
        let len = self.data.len();
        (0..len / 2).all(|i| {
            [left(i), right(i)]
                .into_iter()
                .filter(|&c| c < len)
                .all(|c| self.cmp.compare(&self.data[i], &self.data[c]) != Ordering::Greater)
        })
    }

    /// Drains the heap in comparator order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(e) = self.pop() {
            out.push(e);
        }
        out
    }
}

impl<T, C> From<Vec<T>> for BinaryHeap<T, C>
where
    C: Comparator<T> + Default,
{
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Array form followed by one line per tree level.
impl<T: fmt::Display, C> fmt::Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "binary heap, size {}", self.data.len())?;
        if self.data.is_empty() {
            return write!(f, "  (empty)");
        }
        write!(f, "  array: [")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")?;

        let (mut start, mut width, mut level) = (0, 1, 0);
        while start < self.data.len() {
            write!(f, "\n  level {level}:")?;
            let end = (start + width).min(self.data.len());
            for e in &self.data[start..end] {
                write!(f, " {e}")?;
            }
            start = end;
            width *= 2;
            level += 1;
        }
        Ok(())
    }
}
