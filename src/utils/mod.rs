/*!
# Utilities

Provides the support structures the algorithms are built on:
- [`DisjointSets`]: union-find over vertex indices (the backbone of Kruskal),
- an abstraction over [`Set`] for flexibility in the traversal machinery,
- [`FromCapacity`] to construct such sets from a known size.

Apart from `DisjointSets` and `Set`, you probably do not need to interact
with this module directly.
*/

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use stream_bitset::{bitset::BitSetImpl, PrimIndex};

pub mod disjoint;
pub mod set;

pub use disjoint::DisjointSets;
pub use set::Set;

/// Helper trait for datastructures that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
///
/// Note that this should mainly be used in conjunction with [`Set`]
/// datastructures.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// While seeming complex, this method often defaults to using [`FromCapacity::from_capacity`]
    /// with either `total` or `used`. If you only have one value as an upper bound, provide it as
    /// both arguments if possible.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `BitSetImpl<I>` as a Set requires intializing to the maximum element
        Self::new(I::from_usize(total).unwrap())
    }
}

impl<T, S> FromCapacity for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `HashSet<T>` as a Set only requires intializing to the number of elements
        Self::with_capacity_and_hasher(used, S::default())
    }
}
