use std::{borrow::Cow, convert::Infallible, ops::ControlFlow};

use super::{Context, collect};

/// Keeps the elements for which `predicate` returns `true`, in their original order.
///
/// An empty input is handed back as-is, without copying.
///
/// # Examples
///
/// ```
/// use seqkit::slice::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5], |&num| num % 2 == 0);
/// assert_eq!(*evens, [2, 4]);
/// ```
pub fn filter<T, P>(input: &[T], mut predicate: P) -> Cow<'_, [T]>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    if input.is_empty() {
        return Cow::Borrowed(input);
    }

    let collected = collect(input, |ctx: &mut Context<'_, T, T, Infallible>| {
        let item = ctx.element();
        if !predicate(item) {
            ctx.skip()?;
        }
        ctx.set_value(item.clone());
        ControlFlow::Continue(())
    });

    Cow::Owned(collected.values)
}
