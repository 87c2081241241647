/// Folds `input` from the left, starting with `initial`.
///
/// An empty input returns `initial` untouched.
///
/// # Examples
///
/// ```
/// use seqkit::slice::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4, 5], |accum, &num| accum + num, 0), 15);
/// assert_eq!(reduce(&[] as &[i32], |accum, &num| accum + num, 7), 7);
/// ```
#[inline]
pub fn reduce<In, Out, F>(input: &[In], reducer: F, initial: Out) -> Out
where
    F: FnMut(Out, &In) -> Out,
{
    input.iter().fold(initial, reducer)
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn folds_left_to_right(
            words in propvec("[a-z]{0,3}", ..=8),
        ) {
            let joined = reduce(&words, |mut accum: String, word| {
                accum.push_str(word);
                accum
            }, String::new());

            prop_assert_eq!(joined, words.concat());
        }
    }
}
