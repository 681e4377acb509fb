//! Key policies: the hash/equality/copy bundle a `HashTable` is bound to.
//!
//! A policy maps a borrowed key `&K` to a bucket index for a given
//! capacity, decides key equality, and produces the owned copy the table
//! stores. Releasing an owned copy is its `Drop`.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

/// Hashing and ownership rules for keys of type `K`.
///
/// Implementations must be pure: `bucket` depends only on the key's
/// content and the capacity, and returns a value in `[0, capacity)` for
/// any `capacity >= 1`. `key_eq` must be an equivalence relation, and
/// keys that compare equal must map to the same bucket.
pub trait KeyPolicy<K: ?Sized + ToOwned> {
    /// Bucket index for `key` in a table of `capacity` buckets.
    fn bucket(&self, key: &K, capacity: usize) -> usize;

    /// Whether `a` and `b` are the same logical key.
    fn key_eq(&self, a: &K, b: &K) -> bool;

    /// Independent owned copy of `key`, stored by the table.
    fn copy_key(&self, key: &K) -> K::Owned {
        key.to_owned()
    }
}

/// Text keys: djb2 over the key's bytes, exact byte-wise equality.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TextPolicy;

impl TextPolicy {
    const SEED: usize = 5381;

    /// Unreduced djb2 hash: `h = h * 33 + byte`, seeded at 5381.
    ///
    /// Bytes are added as signed `char` values, so bytes above `0x7f`
    /// (any non-ASCII UTF-8) subtract from the running hash.
    pub fn djb2(bytes: &[u8]) -> usize {
        bytes.iter().fold(Self::SEED, |h, &b| {
            (h << 5).wrapping_add(h).wrapping_add(b as i8 as isize as usize)
        })
    }
}

impl KeyPolicy<str> for TextPolicy {
    #[inline]
    fn bucket(&self, key: &str, capacity: usize) -> usize {
        Self::djb2(key.as_bytes()) % capacity
    }

    #[inline]
    fn key_eq(&self, a: &str, b: &str) -> bool {
        a.as_bytes() == b.as_bytes()
    }
}

/// Integer keys: multiplicative hashing, numeric equality.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IntPolicy;

impl IntPolicy {
    /// Odd multiplier, 2^32 divided by the golden ratio.
    pub const MULTIPLIER: usize = 2_654_435_761;
}

impl KeyPolicy<i32> for IntPolicy {
    #[inline]
    fn bucket(&self, key: &i32, capacity: usize) -> usize {
        // Negative keys sign-extend before the multiply.
        (*key as isize as usize).wrapping_mul(Self::MULTIPLIER) % capacity
    }

    #[inline]
    fn key_eq(&self, a: &i32, b: &i32) -> bool {
        a == b
    }
}

/// Any `K: Hash + Eq` through a `BuildHasher`.
#[derive(Clone, Debug, Default)]
pub struct HasherPolicy<S = DefaultHashBuilder> {
    hasher: S,
}

impl<S> HasherPolicy<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }
}

impl<K, S> KeyPolicy<K> for HasherPolicy<S>
where
    K: ?Sized + ToOwned + Hash + Eq,
    K::Owned: Borrow<K>,
    S: BuildHasher,
{
    #[inline]
    fn bucket(&self, key: &K, capacity: usize) -> usize {
        (self.hasher.hash_one(key) % capacity as u64) as usize
    }

    #[inline]
    fn key_eq(&self, a: &K, b: &K) -> bool {
        a == b
    }
}
