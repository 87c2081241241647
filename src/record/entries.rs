use std::collections::HashMap;

use itertools::Itertools;

/// Returns the keys of `map`, in no particular order.
#[inline]
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Returns the values of `map`, in no particular order.
#[inline]
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Returns the keys of `map` in ascending order.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use seqkit::record::sorted_keys;
///
/// let map = HashMap::from([("b", 1), ("c", 0), ("a", 2)]);
/// assert_eq!(sorted_keys(&map), ["a", "b", "c"]);
/// ```
pub fn sorted_keys<K: Ord + Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    // Keys are unique, so an unstable sort is still deterministic.
    map.keys().cloned().sorted_unstable().collect()
}

/// Returns the values of `map` in ascending order.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use seqkit::record::sorted_values;
///
/// let map = HashMap::from([("b", 1), ("c", 0), ("a", 1)]);
/// assert_eq!(sorted_values(&map), [0, 1, 1]);
/// ```
pub fn sorted_values<K, V: Ord + Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().sorted().collect()
}

/// Returns a shallow copy of `map`: keys and values are cloned, nothing deeper.
#[inline]
pub fn clone<K, V, S>(map: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    map.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 2)])
    }

    #[test]
    fn unordered_accessors() {
        let mut keys = keys(&sample());
        keys.sort_unstable();
        assert_eq!(keys, ["a", "b"]);

        let mut values = values(&sample());
        values.sort_unstable();
        assert_eq!(values, [1, 2]);
    }

    #[test]
    fn sorted_accessors_are_deterministic() {
        let map: HashMap<_, _> = (0..50).map(|num| (num * 7 % 50, 50 - num)).collect();

        let keys = sorted_keys(&map);
        assert!(keys.is_sorted());
        assert_eq!(keys, sorted_keys(&map));

        let values = sorted_values(&map);
        assert!(values.is_sorted());
        assert_eq!(values.len(), 50);
    }

    #[test]
    fn clone_is_independent() {
        let original = sample();
        let mut copy = clone(&original);
        assert_eq!(copy, original);

        copy.insert("c", 3);
        assert!(!original.contains_key("c"));
    }

    #[test]
    fn empty_map() {
        let map = HashMap::<String, i32>::new();
        assert!(keys(&map).is_empty());
        assert!(sorted_values(&map).is_empty());
    }
}
