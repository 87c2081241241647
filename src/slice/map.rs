/// Transforms every element with `mapper`, keeping length and order.
///
/// # Examples
///
/// ```
/// use seqkit::slice::map;
///
/// assert_eq!(map(&[1, 2, 3], |num| num.to_string()), ["1", "2", "3"]);
/// ```
pub fn map<In, Out, F>(input: &[In], mapper: F) -> Vec<Out>
where
    F: FnMut(&In) -> Out,
{
    input.iter().map(mapper).collect()
}
