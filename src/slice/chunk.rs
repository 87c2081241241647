/// Splits `input` into contiguous sub-slices of `size` elements.
///
/// The last chunk holds whatever is left and may be shorter. A `size` of 0 is
/// treated as 1. Concatenating the chunks gives back `input`.
///
/// The chunks borrow from `input`; nothing is copied.
///
/// # Examples
///
/// ```
/// use seqkit::slice::chunk;
///
/// let nums = [1, 2, 3, 4, 5];
/// assert_eq!(chunk(&nums, 2), [&[1, 2][..], &[3, 4], &[5]]);
/// assert_eq!(chunk(&nums, 0).len(), 5);
/// assert!(chunk(&[] as &[i32], 3).is_empty());
/// ```
///
/// Wrap the input in an [`Option`] if an absent input has to stay absent:
///
/// ```
/// use seqkit::slice::chunk;
///
/// let absent: Option<&[i32]> = None;
/// assert_eq!(absent.map(|nums| chunk(nums, 2)), None);
/// ```
pub fn chunk<T>(input: &[T], size: usize) -> Vec<&[T]> {
    input.chunks(size.max(1)).collect()
}

/// Concatenates a sequence of sequences into one `Vec`.
///
/// The output is allocated once, with exactly the total length.
///
/// # Examples
///
/// ```
/// use seqkit::slice::flatten;
///
/// let matrix = [vec![1], vec![2, 3], vec![], vec![4]];
/// assert_eq!(flatten(&matrix), [1, 2, 3, 4]);
/// ```
pub fn flatten<T, S>(input: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let len = input.iter().map(|part| part.as_ref().len()).sum();
    let mut flattened = Vec::with_capacity(len);

    for part in input {
        flattened.extend_from_slice(part.as_ref());
    }

    flattened
}
