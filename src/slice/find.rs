/// Returns the first element satisfying `predicate`, or `None`.
///
/// # Examples
///
/// ```
/// use seqkit::slice::find;
///
/// assert_eq!(find(&[1, 2, 3, 4], |num| num % 2 == 0), Some(&2));
/// assert_eq!(find(&[1, 2, 3, 4], |&num| num > 10), None);
/// ```
#[inline]
pub fn find<T, P>(input: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    input.iter().find(|item| predicate(item))
}

/// Returns `true` if `input` holds an element equal to `target`.
///
/// # Examples
///
/// ```
/// use seqkit::slice::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
#[inline]
pub fn contains<T: PartialEq>(input: &[T], target: &T) -> bool {
    input.iter().any(|item| item == target)
}
