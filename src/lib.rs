//! chain-heap: a separate-chaining hash table with pluggable key
//! policies, a hash set derived from it, and a binary heap serving both
//! min and max orderings from one engine.
//!
//! Internal Design:
//!
//! Summary
//! - Layers:
//!   - `KeyPolicy<K>`: the hash/equality/copy bundle a table is bound
//!     to. Built-ins cover text (djb2), `i32` (multiplicative hashing)
//!     and any `Hash + Eq` key through a `BuildHasher`.
//!   - `HashTable<K, V, P>`: bucket array of chain heads over a slot
//!     arena of entries. Owns a copy of each key; takes values by move.
//!   - `HashSet<K, P>`: `HashTable<K, (), P>` plus set algebra.
//!   - `BinaryHeap<T, C>`: `Vec`-backed complete binary tree ordered by
//!     a `Comparator`; `MinHeap`/`MaxHeap` fix the comparator.
//!
//! Constraints
//! - Single-threaded and synchronous. No internal locking; share an
//!   instance across threads only behind an external lock.
//! - Load factor stays at or below 3/4 after every insertion; capacity
//!   never drops below 8 and only grows, by doubling.
//! - Keys are unique under the policy's equality. Re-inserting a key
//!   updates its value in place.
//! - Every heap parent precedes or ties with its children under the
//!   comparator.
//!
//! Ownership
//! - Tables own their key copies and drop them on remove, clear and
//!   drop. Values and heap elements are moved in and handed back on
//!   removal; containers never clone them. To keep ownership with the
//!   caller, store `&T` or a shared handle such as `Rc<T>`.
//!
//! Failure semantics
//! - Growth paths (bucket doubling, heap backing growth) return
//!   `Err(AllocError)` instead of aborting, and leave the container as
//!   it was. Per-entry storage in the slot arena follows the global
//!   allocator's abort-on-failure behavior.
//! - Absent keys and empty heaps are `None`, never errors.
//!
//! Reentrancy
//! - Table methods that call policy code hold a debug-only reentrancy
//!   guard; a policy reaching back into the same table panics in debug
//!   builds.
//!
//! Notes and non-goals
//! - `merge` is repeated pop and push, `O(m log(n + m))`. An
//!   asymptotically better merge needs a mergeable heap family.
//! - No persistence, no cross-process sharing.

mod binary_heap;
mod comparator;
mod error;
pub mod hash_set;
pub mod hash_table;
mod hash_table_proptest;
mod max_heap;
mod min_heap;
pub mod policy;
mod reentrancy;

// Public surface
pub use binary_heap::{BinaryHeap, DEFAULT_HEAP_CAPACITY};
pub use comparator::{Comparator, Natural, Reversed};
pub use error::AllocError;
pub use hash_set::HashSet;
pub use hash_table::{HashTable, TableStats};
pub use max_heap::MaxHeap;
pub use min_heap::MinHeap;
pub use policy::{HasherPolicy, IntPolicy, KeyPolicy, TextPolicy};
