use std::{borrow::Cow, ops::ControlFlow};

use super::{Collected, Context, Signal};

/// Extends slices with method forms of the functions in [`slice`](crate::slice).
///
/// This trait is automatically implemented for every `[T]`, and so is
/// usable on arrays and [`Vec`]s too.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use seqkit::prelude::*;
///
/// let nums = vec![3, 8, 1, 6];
///
/// let doubled_evens = nums.collect_with(|ctx: &mut Context<'_, i32, i32>| {
///     let &num = ctx.element();
///     if num % 2 != 0 {
///         ctx.skip()?;
///     }
///     ctx.set_value(num * 2);
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(doubled_evens.values, [16, 12]);
/// assert_eq!(*nums.filter_by(|&num| num > 2), [3, 8, 6]);
/// assert_eq!(nums.chunked(3), [&[3, 8, 1][..], &[6]]);
/// ```
pub trait SliceExt<T> {
    /// See [`collect()`](crate::slice::collect).
    fn collect_with<'a, Out, E, F>(&'a self, step: F) -> Collected<T, Out, E>
    where
        F: FnMut(&mut Context<'a, T, Out, E>) -> ControlFlow<Signal<T, E>>;

    /// See [`filter()`](crate::slice::filter).
    fn filter_by<P>(&self, predicate: P) -> Cow<'_, [T]>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`chunk()`](crate::slice::chunk).
    fn chunked(&self, size: usize) -> Vec<&[T]>;

    /// See [`for_each_chunk()`](crate::slice::for_each_chunk).
    fn for_each_chunk<E, F>(&self, chunk_size: usize, concurrency: usize, handler: F) -> Result<(), E>
    where
        T: Sync,
        E: Send,
        F: Fn(&[T]) -> Result<(), E> + Sync;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn collect_with<'a, Out, E, F>(&'a self, step: F) -> Collected<T, Out, E>
    where
        F: FnMut(&mut Context<'a, T, Out, E>) -> ControlFlow<Signal<T, E>>,
    {
        super::collect(self, step)
    }

    #[inline]
    fn filter_by<P>(&self, predicate: P) -> Cow<'_, [T]>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        super::filter(self, predicate)
    }

    #[inline]
    fn chunked(&self, size: usize) -> Vec<&[T]> {
        super::chunk(self, size)
    }

    #[inline]
    fn for_each_chunk<E, F>(&self, chunk_size: usize, concurrency: usize, handler: F) -> Result<(), E>
    where
        T: Sync,
        E: Send,
        F: Fn(&[T]) -> Result<(), E> + Sync,
    {
        super::for_each_chunk(self, chunk_size, concurrency, handler)
    }
}
