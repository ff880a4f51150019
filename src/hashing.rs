//! Hasher selection for keyed maps and hash-based deduplication.
//!
//! The hasher is chosen at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxBuildHasher`]
//! - `ahash` feature (without `fxhash`): [`ahash::RandomState`]
//! - otherwise: the standard library's SipHash-based `RandomState`
//!
//! Both fast hashers trade HashDoS resistance for speed.

#[cfg(feature = "fxhash")]
/// Build hasher used by every hash-based structure in this crate.
pub type HashState = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Build hasher used by every hash-based structure in this crate.
pub type HashState = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Build hasher used by every hash-based structure in this crate.
pub type HashState = std::collections::hash_map::RandomState;

/// A `HashSet` using the crate's [`HashState`].
pub type HashSet<T> = std::collections::HashSet<T, HashState>;

/// A `HashMap` using the crate's [`HashState`].
pub type HashMap<K, V> = std::collections::HashMap<K, V, HashState>;

/// Creates an empty [`HashSet`] with room for `capacity` elements.
pub fn hash_set_with_capacity<T>(capacity: usize) -> HashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, HashState::default())
}

/// Creates an empty [`HashMap`] with room for `capacity` entries.
pub fn hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, HashState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_hash_set_deduplicates_with_selected_hasher() {
        let mut set = hash_set_with_capacity(4);
        assert!(set.insert("alpha"));
        assert!(set.insert("beta"));
        assert!(!set.insert("alpha"));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_hash_map_is_deterministic_within_one_instance() {
        let mut map = hash_map_with_capacity(2);
        map.insert("key".to_string(), 1);
        map.insert("key".to_string(), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key"), Some(&2));
    }
}
