use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// Collects the distinct elements of `input` into a set.
///
/// # Examples
///
/// ```
/// use seqkit::record::to_set;
///
/// let set = to_set(&["a", "b", "a"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a") && set.contains("b"));
/// ```
#[inline]
pub fn to_set<K: Eq + Hash + Clone>(input: &[K]) -> HashSet<K> {
    input.iter().cloned().collect()
}

/// Builds a map from `input`, turning each element into a key-value pair.
///
/// Pairs are inserted in input order, so a repeated key keeps the value of its
/// last occurrence.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use seqkit::record::associate;
///
/// let lengths = associate(&["ant", "bee", "cat", "beetle"], |word| (word.as_bytes()[0], word.len()));
/// assert_eq!(lengths, HashMap::from([(b'a', 3), (b'b', 6), (b'c', 3)]));
/// ```
pub fn associate<T, K, V, F>(input: &[T], transform: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&T) -> (K, V),
{
    input.iter().map(transform).collect()
}
