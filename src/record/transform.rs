use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

/// Combines `maps` into a new map. A key present in several maps takes its
/// value from the last of them.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use seqkit::record::merge;
///
/// let defaults = HashMap::from([("a", 1), ("b", 2)]);
/// let overrides = HashMap::from([("b", 3), ("c", 4)]);
///
/// let merged = merge([&defaults, &overrides]);
/// assert_eq!(merged, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
/// ```
pub fn merge<'m, K, V, S, I>(maps: I) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + 'm,
    V: Clone + 'm,
    S: 'm,
    I: IntoIterator<Item = &'m HashMap<K, V, S>>,
{
    let maps: Vec<_> = maps.into_iter().collect();
    let capacity = maps.iter().map(|map| map.len()).sum();
    let mut merged = HashMap::with_capacity(capacity);

    for map in maps {
        merged.extend(map.iter().map(|(key, value)| (key.clone(), value.clone())));
    }

    merged
}

/// Keeps the entries for which `predicate` returns `true`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use seqkit::record::filter;
///
/// let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// let odd = filter(&map, |_, &value| value % 2 != 0);
/// assert_eq!(odd, HashMap::from([("a", 1), ("c", 3)]));
/// ```
pub fn filter<K, V, S, P>(map: &HashMap<K, V, S>, mut predicate: P) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    P: FnMut(&K, &V) -> bool,
{
    map.iter()
        .filter(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Transforms every value with `mapper`, keeping the keys.
pub fn map_values<K, V, W, S, F>(map: &HashMap<K, V, S>, mut mapper: F) -> HashMap<K, W, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&V) -> W,
{
    let mut mapped = HashMap::with_capacity_and_hasher(map.len(), map.hasher().clone());
    mapped.extend(map.iter().map(|(key, value)| (key.clone(), mapper(value))));
    mapped
}
