//! HashTable: separate chaining over a bucket array, bound to a `KeyPolicy`.
//!
//! Entries live in a generational slot arena; each bucket holds the slot
//! key of its chain head and each entry links to the next entry in its
//! chain. A rehash relinks entries into a fresh bucket array without
//! moving them. New entries go to the head of their chain, so a chain
//! reads most-recent-first.

use crate::error::AllocError;
use crate::policy::{HasherPolicy, KeyPolicy};
use crate::reentrancy::DebugReentrancy;
use core::borrow::Borrow;
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Bucket count used by `new`.
pub const DEFAULT_CAPACITY: usize = 16;
/// Smallest bucket count a table ever has.
pub const MIN_CAPACITY: usize = 8;
/// Bucket array multiplier on growth.
pub const GROWTH_FACTOR: usize = 2;
/// Maximum `len / capacity` after any insertion, as `(numerator, denominator)`.
pub const LOAD_FACTOR: (usize, usize) = (3, 4);

type Link = Option<DefaultKey>;

#[derive(Clone, Debug)]
struct Entry<O, V> {
    key: O,
    value: V,
    next: Link,
}

/// Key/value map with separate chaining and a pluggable key policy.
///
/// The table owns a private copy of every key (made by the policy at
/// insertion) and takes values by move. To store borrowed values, use a
/// reference or shared-handle type as `V`; the table never clones or
/// inspects values.
pub struct HashTable<K, V, P = HasherPolicy>
where
    K: ?Sized + ToOwned,
{
    policy: P,
    buckets: Vec<Link>,
    slots: SlotMap<DefaultKey, Entry<K::Owned, V>>,
    reentrancy: DebugReentrancy,
}

/// Snapshot of chain statistics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableStats {
    pub len: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub load_factor_threshold: f64,
    pub empty_buckets: usize,
    pub max_chain_len: usize,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}, capacity: {}", self.len, self.capacity)?;
        writeln!(
            f,
            "load factor: {:.3} (threshold: {:.3})",
            self.load_factor, self.load_factor_threshold
        )?;
        let pct = if self.capacity == 0 {
            0.0
        } else {
            100.0 * self.empty_buckets as f64 / self.capacity as f64
        };
        writeln!(f, "empty buckets: {} ({:.1}%)", self.empty_buckets, pct)?;
        write!(f, "max chain length: {}", self.max_chain_len)
    }
}

impl<K, V, P> HashTable<K, V, P>
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

impl<K, V, P> Default for HashTable<K, V, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P> HashTable<K, V, P>
where
    K: ?Sized + ToOwned,
    P: KeyPolicy<K>,
{
    pub fn with_policy(policy: P) -> Self {
        Self::with_capacity_and_policy(DEFAULT_CAPACITY, policy)
    }

    /// Creates an empty table with at least `MIN_CAPACITY` buckets.
    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> Self {
        Self {
            policy,
            buckets: vec![None; capacity.max(MIN_CAPACITY)],
            slots: SlotMap::with_key(),
            reentrancy: DebugReentrancy::new(),
        }
    }

    #[inline]
    fn bucket_index(policy: &P, key: &K, capacity: usize) -> usize {
        let idx = policy.bucket(key, capacity);
        debug_assert!(idx < capacity, "policy returned bucket {idx} for capacity {capacity}");
        idx
    }

    /// Bucket of `key`, the slot key of its matching entry, and that
    /// entry's chain predecessor.
    fn locate(&self, key: &K) -> (usize, Link, Link) {
        let idx = Self::bucket_index(&self.policy, key, self.buckets.len());
        let mut prev: Link = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            let e = &self.slots[k];
            if self.policy.key_eq(Borrow::<K>::borrow(&e.key), key) {
                return (idx, prev, cur);
            }
            prev = cur;
            cur = e.next;
        }
        (idx, prev, None)
    }

    /// Inserts or updates `key`.
    ///
    /// Updating an existing key replaces its value in place and returns
    /// the previous one; size and capacity are untouched. A new key first
    /// grows the table if the insertion would push the load factor past
    /// 3/4, then gets an owned copy prepended to its chain.
    pub fn put(&mut self, key: &K, value: V) -> Result<Option<V>, AllocError> {
        let _g = self.reentrancy.enter();
        if let (_, _, Some(k)) = self.locate(key) {
            return Ok(Some(core::mem::replace(&mut self.slots[k].value, value)));
        }
        if let Some(capacity) = Self::grown_capacity(self.slots.len() + 1, self.buckets.len())? {
            Self::rehash(&self.policy, &mut self.buckets, &mut self.slots, capacity)?;
        }
        let idx = Self::bucket_index(&self.policy, key, self.buckets.len());
        let entry = Entry {
            key: self.policy.copy_key(key),
            value,
            next: self.buckets[idx],
        };
        let k = self.slots.insert(entry);
        self.buckets[idx] = Some(k);
        Ok(None)
    }

    fn over_threshold(len: usize, capacity: usize) -> bool {
        let (num, den) = LOAD_FACTOR;
        // len / capacity > num / den, without floating point.
        (len as u128) * (den as u128) > (capacity as u128) * (num as u128)
    }

    /// Bucket count needed to hold `len` entries under the threshold, or
    /// `None` if `capacity` already suffices.
    fn grown_capacity(len: usize, capacity: usize) -> Result<Option<usize>, AllocError> {
        if !Self::over_threshold(len, capacity) {
            return Ok(None);
        }
        let mut grown = capacity;
        while Self::over_threshold(len, grown) {
            grown = grown
                .checked_mul(GROWTH_FACTOR)
                .ok_or(AllocError::CapacityOverflow)?;
        }
        Ok(Some(grown))
    }

    /// Relinks every entry into a fresh array of `capacity` buckets. On
    /// allocation failure the old array is left in place.
    fn rehash(
        policy: &P,
        buckets: &mut Vec<Link>,
        slots: &mut SlotMap<DefaultKey, Entry<K::Owned, V>>,
        capacity: usize,
    ) -> Result<(), AllocError> {
        let mut fresh: Vec<Link> = Vec::new();
        fresh.try_reserve_exact(capacity)?;
        fresh.resize(capacity, None);

        let old = core::mem::replace(buckets, fresh);
        for head in old {
            let mut cur = head;
            while let Some(k) = cur {
                let e = &mut slots[k];
                let idx = Self::bucket_index(policy, Borrow::<K>::borrow(&e.key), capacity);
                cur = e.next;
                e.next = buckets[idx];
                buckets[idx] = Some(k);
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let _g = self.reentrancy.enter();
        let (_, _, found) = self.locate(key);
        found.map(|k| &self.slots[k].value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let _g = self.reentrancy.enter();
        let (_, _, found) = self.locate(key);
        found.map(|k| &mut self.slots[k].value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks the entry for `key`, drops its owned key and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let _g = self.reentrancy.enter();
        let (idx, prev, found) = self.locate(key);
        let k = found?;
        let next = self.slots[k].next;
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.buckets[idx] = next,
        }
        self.slots.remove(k).map(|e| e.value)
    }

    /// Drops every entry; the bucket array keeps its size.
    pub fn clear(&mut self) {
        let _g = self.reentrancy.enter();
        self.slots.clear();
        self.buckets.iter_mut().for_each(|b| *b = None);
    }

    /// Checks that the chains reach exactly `len` entries, each filed
    /// under the bucket its key hashes to, with no key repeated.
    #[cfg(test)]
    pub(crate) fn assert_chain_integrity(&self) {
        let cap = self.capacity();
        let mut reached = 0;
        for idx in 0..cap {
            let keys: Vec<&K> = self.chain_keys(idx).collect();
            for (i, key) in keys.iter().enumerate() {
                assert_eq!(self.policy.bucket(*key, cap), idx, "entry filed in the wrong bucket");
                for other in &keys[i + 1..] {
                    assert!(!self.policy.key_eq(*key, *other), "duplicate key in chain");
                }
            }
            reached += keys.len();
        }
        assert_eq!(reached, self.len(), "chains do not reach every live entry");
    }
}

impl<K, V, P> HashTable<K, V, P>
where
    K: ?Sized + ToOwned,
{
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Current `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_none()).count()
    }

    pub fn max_chain_len(&self) -> usize {
        (0..self.buckets.len())
            .map(|i| self.chain(i).count())
            .max()
            .unwrap_or(0)
    }

    pub fn stats(&self) -> TableStats {
        let (num, den) = LOAD_FACTOR;
        TableStats {
            len: self.len(),
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            load_factor_threshold: num as f64 / den as f64,
            empty_buckets: self.empty_buckets(),
            max_chain_len: self.max_chain_len(),
        }
    }

    /// Slot keys of bucket `idx`'s chain, head first.
    fn chain(&self, idx: usize) -> impl Iterator<Item = DefaultKey> + '_ {
        let mut cur = self.buckets[idx];
        core::iter::from_fn(move || {
            let k = cur?;
            cur = self.slots[k].next;
            Some(k)
        })
    }

    /// Keys of bucket `idx`'s chain, head first.
    #[cfg(test)]
    pub(crate) fn chain_keys(&self, idx: usize) -> impl Iterator<Item = &K> + '_ {
        self.chain(idx)
            .map(move |k| Borrow::<K>::borrow(&self.slots[k].key))
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.slots.values(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            it: self.slots.values_mut(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.iter_mut().map(|(_, v)| v)
    }
}

impl<K, V, P> Clone for HashTable<K, V, P>
where
    K: ?Sized + ToOwned,
    K::Owned: Clone,
    V: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            policy: self.policy.clone(),
            buckets: self.buckets.clone(),
            slots: self.slots.clone(),
            reentrancy: DebugReentrancy::new(),
        }
    }
}

impl<K, V, P> fmt::Debug for HashTable<K, V, P>
where
    K: ?Sized + ToOwned + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over `(key, value)` pairs in unspecified order.
pub struct Iter<'a, K, V>
where
    K: ?Sized + ToOwned + 'a,
{
    it: slotmap::basic::Values<'a, DefaultKey, Entry<K::Owned, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: ?Sized + ToOwned + 'a,
{
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .next()
            .map(|e| (Borrow::<K>::borrow(&e.key), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// Iterator over `(key, &mut value)` pairs in unspecified order.
pub struct IterMut<'a, K, V>
where
    K: ?Sized + ToOwned + 'a,
{
    it: slotmap::basic::ValuesMut<'a, DefaultKey, Entry<K::Owned, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V>
where
    K: ?Sized + ToOwned + 'a,
{
    type Item = (&'a K, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .next()
            .map(|e| (Borrow::<K>::borrow(&e.key), &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}
