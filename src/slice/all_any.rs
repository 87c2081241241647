/// Returns `true` if every element satisfies `predicate`.
///
/// Stops at the first element that does not. An empty input gives `true`.
///
/// # Examples
///
/// ```
/// use seqkit::slice::every;
///
/// assert!(every(&[2, 4, 6], |num| num % 2 == 0));
/// assert!(!every(&[2, 3, 6], |num| num % 2 == 0));
/// assert!(every(&[] as &[i32], |_| false));
/// ```
#[inline]
pub fn every<T, P>(input: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    input.iter().all(predicate)
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Stops at the first element that does. An empty input gives `false`.
///
/// # Examples
///
/// ```
/// use seqkit::slice::some;
///
/// assert!(some(&[1, 3, 6], |num| num % 2 == 0));
/// assert!(!some(&[1, 3, 5], |num| num % 2 == 0));
/// assert!(!some(&[] as &[i32], |_| true));
/// ```
#[inline]
pub fn some<T, P>(input: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    input.iter().any(predicate)
}
