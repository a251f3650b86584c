//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{AddAssign, SubAssign},
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{CMResult, CorpusmillError};

/// A type that can be used as a vocabulary index.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max index in a vocabulary is less than `T::max()`.
pub trait IndexType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IndexType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A type that can be used as a type-frequency count.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
    + SubAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
        + SubAssign
{
}

/// Validates a vocab size against the capacity of the index type.
///
/// ## Arguments
/// * `vocab_size` - The number of entries the vocab would hold.
///
/// ## Returns
/// The validated size, or [`CorpusmillError::IndexOverflow`].
pub fn try_vocab_size<T: IndexType>(vocab_size: usize) -> CMResult<usize> {
    if vocab_size > 0 && T::from_usize(vocab_size - 1).is_none() {
        Err(CorpusmillError::IndexOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CMHashMap<K, V> {
            CMHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CMHashMap<K, V> {
            CMHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type CMHashSet<V> = ahash::AHashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type CMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CMHashMap<K, V> {
            CMHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CMHashMap<K, V> {
            CMHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type CMHashSet<V> = std::collections::HashSet<V>;
    }
}

/// `{ String -> C }` corpus-wide type-frequency map.
///
/// ## Style Hints
/// Instance names should prefer `type_freq_map`, or `freq_map`.
pub type TypeFreqMap<C> = CMHashMap<String, C>;

/// `{ String -> T }` token-to-index map.
///
/// ## Style Hints
/// Instance names should prefer `token_index_map`, or `index_map`.
pub type TokenIndexMap<T> = CMHashMap<String, T>;

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_index_types() {
        struct IsIndex<T: IndexType>(PhantomData<T>);

        let _: IsIndex<u16>;
        let _: IsIndex<u32>;
        let _: IsIndex<u64>;
        let _: IsIndex<usize>;
    }

    #[test]
    fn test_common_count_types() {
        struct IsCount<C: CountType>(PhantomData<C>);

        let _: IsCount<u16>;
        let _: IsCount<u32>;
        let _: IsCount<u64>;
        let _: IsCount<usize>;
    }

    #[test]
    fn test_try_vocab_size() {
        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert!(try_vocab_size::<u8>(257).is_err());

        assert_eq!(try_vocab_size::<u16>(0).unwrap(), 0);
        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(try_vocab_size::<u16>(u16::MAX as usize + 2).is_err());
    }
}
