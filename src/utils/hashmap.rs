//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Deterministic hashmap using [`indexmap::IndexMap`].
///
/// Iteration follows the insertion order.
#[cfg(feature = "enhanced-determinism")]
pub type HashMap<K, V> = indexmap::IndexMap<K, V, hashbrown::DefaultHashBuilder>;

/// Hashmap using [`hashbrown::HashMap`].
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

/// Removes `key` from `map`.
///
/// With `enhanced-determinism`, this preserves the insertion order of the remaining entries.
#[inline]
pub fn remove<K, V>(map: &mut HashMap<K, V>, key: &K) -> Option<V>
where
    K: core::hash::Hash + Eq,
{
    #[cfg(feature = "enhanced-determinism")]
    return map.shift_remove(key);
    #[cfg(not(feature = "enhanced-determinism"))]
    return map.remove(key);
}
