//! HashSet: a `HashTable` whose values are the unit sentinel.
//!
//! Set algebra iterates the smaller operand wherever the result allows
//! it, so intersection and subset tests cost `O(min(|A|, |B|))` probes.

use crate::error::AllocError;
use crate::hash_table::{self, HashTable, TableStats, DEFAULT_CAPACITY};
use crate::policy::{HasherPolicy, KeyPolicy};
use core::fmt;

/// Unique keys under a `KeyPolicy`.
pub struct HashSet<K, P = HasherPolicy>
where
    K: ?Sized + ToOwned,
{
    table: HashTable<K, (), P>,
}

impl<K, P> HashSet<K, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K> + Default,
{
    pub fn new() -> Self {
        Self::with_capacity_and_policy(DEFAULT_CAPACITY, P::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, P::default())
    }
}

impl<K, P> Default for HashSet<K, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> HashSet<K, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K>,
{
    pub fn with_policy(policy: P) -> Self {
        Self::with_capacity_and_policy(DEFAULT_CAPACITY, policy)
    }

    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> Self {
        Self {
            table: HashTable::with_capacity_and_policy(capacity, policy),
        }
    }

    /// Inserts `key`; returns whether it was newly added.
    pub fn add(&mut self, key: &K) -> Result<bool, AllocError> {
        let existed = self.table.contains(key);
        self.table.put(key, ())?;
        Ok(!existed)
    }

    /// Returns whether `key` was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.table.remove(key).is_some()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.table.contains(key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn policy(&self) -> &P {
        self.table.policy()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            it: self.table.iter(),
        }
    }

    /// `self ⊆ other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|k| other.contains(k))
    }

    /// Same members, regardless of capacity or insertion order.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<K, P> HashSet<K, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K> + Clone,
{
    fn empty_like(&self, capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, self.policy().clone())
    }

    fn smaller_first<'a>(&'a self, other: &'a Self) -> (&'a Self, &'a Self) {
        if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        }
    }

    /// `self ∪ other`: every member of the larger set, then the smaller one.
    pub fn union(&self, other: &Self) -> Result<Self, AllocError> {
        let (small, large) = self.smaller_first(other);
        let mut out = self.empty_like(large.capacity());
        for k in large.iter().chain(small.iter()) {
            out.add(k)?;
        }
        Ok(out)
    }

    /// `self ∩ other`, probing the larger set with members of the smaller.
    pub fn intersection(&self, other: &Self) -> Result<Self, AllocError> {
        let (small, large) = self.smaller_first(other);
        let mut out = self.empty_like(small.capacity());
        for k in small.iter().filter(|k| large.contains(k)) {
            out.add(k)?;
        }
        Ok(out)
    }

    /// `self \ other`.
    pub fn difference(&self, other: &Self) -> Result<Self, AllocError> {
        let mut out = self.empty_like(self.capacity());
        if other.len() < self.len() {
            for k in self.iter() {
                out.add(k)?;
            }
            for k in other.iter() {
                out.remove(k);
            }
        } else {
            for k in self.iter().filter(|k| !other.contains(k)) {
                out.add(k)?;
            }
        }
        Ok(out)
    }
}

impl<K, P> Clone for HashSet<K, P>
where
    K: ?Sized + ToOwned,
    K::Owned: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, P> PartialEq for HashSet<K, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<K, P> Eq for HashSet<K, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K>,
{
}

impl<K, P> fmt::Debug for HashSet<K, P>
where
    K: ?Sized + ToOwned + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.table.iter().map(|(k, _)| k))
            .finish()
    }
}

/// Iterator over set members in unspecified order.
pub struct Iter<'a, K>
where
    K: ?Sized + ToOwned + 'a,
{
    it: hash_table::Iter<'a, K, ()>,
}

impl<'a, K> Iterator for Iter<'a, K>
where
    K: ?Sized + ToOwned + 'a,
{
    type Item = &'a K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}
