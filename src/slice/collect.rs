use std::{cell::OnceCell, convert::Infallible, fmt::Debug, marker::PhantomData, ops::ControlFlow};

use tracing::trace;

use super::{AggregateError, BoxError, ElemError};

/// The state a step function sees while [`collect()`] processes one element.
///
/// A step function receives `&mut Context` once per element and tells the engine
/// what to do with that element through its return value:
///
/// - `ControlFlow::Continue(())` keeps the element. If [`set_value()`](Context::set_value)
///   was called, that value is appended to the output. Otherwise nothing is appended.
/// - [`skip()`](Context::skip) / [`skip_with()`](Context::skip_with) excludes the element
///   (dropping any value set for it) and moves on to the next one.
/// - [`stop()`](Context::stop) / [`stop_with()`](Context::stop_with) ends the whole run.
///   Elements after it are never visited.
///
/// Since the signals are `ControlFlow::Break` values, `ctx.skip()?` leaves the step
/// function right away.
pub struct Context<'a, In, Out, E = BoxError> {
    input: &'a [In],
    snapshot: OnceCell<Vec<In>>,
    index: usize,
    value: Option<Out>,
    results: Vec<Out>,
    _error: PhantomData<fn() -> E>,
}

/// A skip or stop decision produced by [`Context`].
///
/// It can only be created through the context, and carries the errors
/// recorded for the element that produced it.
#[derive(Debug)]
pub struct Signal<In, E = BoxError> {
    kind: SignalKind,
    errors: Vec<ElemError<In, E>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignalKind {
    Skip,
    Stop,
}

/// The output of [`collect()`]: the kept values and the errors recorded along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<In, Out, E = BoxError> {
    /// Values set by the step function for every kept element, in input order.
    pub values: Vec<Out>,
    /// Errors recorded by skips and stops.
    pub errors: AggregateError<In, E>,
}

impl<'a, In, Out, E> Context<'a, In, Out, E> {
    fn new(input: &'a [In]) -> Self {
        Self {
            input,
            snapshot: OnceCell::new(),
            index: 0,
            value: None,
            results: Vec::new(),
            _error: PhantomData,
        }
    }

    /// Returns the position of the element being processed.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the element being processed.
    #[inline]
    pub fn element(&self) -> &'a In {
        &self.input[self.index]
    }

    /// Returns the position and the element being processed.
    #[inline]
    pub fn current(&self) -> (usize, &'a In) {
        (self.index, self.element())
    }

    /// Returns the length of the whole input.
    #[inline]
    pub const fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Sets the value contributed by the current element, replacing any value set before.
    #[inline]
    pub fn set_value(&mut self, value: Out) {
        self.value = Some(value);
    }

    /// Returns `true` if a value has been set for the current element.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the number of values accumulated so far.
    #[inline]
    pub fn results_len(&self) -> usize {
        self.results.len()
    }

    /// Excludes the current element and moves on to the next one.
    #[inline]
    pub fn skip(&self) -> ControlFlow<Signal<In, E>> {
        ControlFlow::Break(Signal::new(SignalKind::Skip, Vec::new()))
    }

    /// Ends the run at the current element.
    #[inline]
    pub fn stop(&self) -> ControlFlow<Signal<In, E>> {
        ControlFlow::Break(Signal::new(SignalKind::Stop, Vec::new()))
    }

    fn begin(&mut self, index: usize) {
        self.index = index;
        self.value = None;
    }

    fn commit(&mut self) {
        if let Some(value) = self.value.take() {
            self.results.push(value);
        }
    }

    fn into_results(self) -> Vec<Out> {
        self.results
    }
}

impl<In: Clone, Out, E> Context<'_, In, Out, E> {
    /// Returns a copy of the whole input.
    ///
    /// The copy is made on the first call and reused for the rest of the run.
    pub fn slice(&self) -> &[In] {
        self.snapshot.get_or_init(|| self.input.to_vec())
    }

    /// Excludes the current element, records `errors` against it and moves on.
    ///
    /// `None` entries are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::{num::ParseIntError, ops::ControlFlow};
    /// use seqkit::slice::{collect, Context};
    ///
    /// let collected = collect(&["1", "x", "3"], |ctx: &mut Context<'_, &str, i32, ParseIntError>| {
    ///     match ctx.element().parse::<i32>() {
    ///         Ok(num) => ctx.set_value(num),
    ///         Err(e) => ctx.skip_with([e])?,
    ///     }
    ///     ControlFlow::Continue(())
    /// });
    ///
    /// assert_eq!(collected.values, [1, 3]);
    /// assert_eq!(collected.errors.len(), 1);
    /// assert_eq!(collected.errors.at(0).map(|e| e.value), Some("x"));
    /// ```
    pub fn skip_with<I>(&self, errors: I) -> ControlFlow<Signal<In, E>>
    where
        I: IntoIterator,
        I::Item: Into<Option<E>>,
    {
        ControlFlow::Break(Signal::new(SignalKind::Skip, self.bind(errors)))
    }

    /// Ends the run at the current element, recording `errors` against it.
    ///
    /// `None` entries are ignored.
    pub fn stop_with<I>(&self, errors: I) -> ControlFlow<Signal<In, E>>
    where
        I: IntoIterator,
        I::Item: Into<Option<E>>,
    {
        ControlFlow::Break(Signal::new(SignalKind::Stop, self.bind(errors)))
    }

    fn bind<I>(&self, errors: I) -> Vec<ElemError<In, E>>
    where
        I: IntoIterator,
        I::Item: Into<Option<E>>,
    {
        errors
            .into_iter()
            .filter_map(Into::into)
            .map(|error| ElemError {
                index: self.index,
                value: self.element().clone(),
                error,
            })
            .collect()
    }
}

impl<In, Out: Clone, E> Context<'_, In, Out, E> {
    /// Returns a copy of the values accumulated so far.
    ///
    /// A fresh copy is made on every call.
    pub fn results(&self) -> Vec<Out> {
        self.results.clone()
    }
}

impl<In: Debug, Out: Debug, E> Debug for Context<'_, In, Out, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("index", &self.index)
            .field("input_len", &self.input.len())
            .field("value", &self.value)
            .field("results", &self.results)
            .finish()
    }
}

impl<In, E> Signal<In, E> {
    #[inline]
    const fn new(kind: SignalKind, errors: Vec<ElemError<In, E>>) -> Self {
        Self { kind, errors }
    }

    /// Returns `true` if this signal skips the current element.
    #[inline]
    pub fn is_skip(&self) -> bool {
        self.kind == SignalKind::Skip
    }

    /// Returns `true` if this signal ends the run.
    #[inline]
    pub fn is_stop(&self) -> bool {
        self.kind == SignalKind::Stop
    }

    /// Returns the errors recorded with this signal.
    #[inline]
    pub fn errors(&self) -> &[ElemError<In, E>] {
        &self.errors
    }
}

impl<In, Out, E> Collected<In, Out, E> {
    /// Returns the aggregate, or `None` if nothing was recorded.
    #[inline]
    pub fn error(&self) -> Option<&AggregateError<In, E>> {
        (!self.errors.is_empty()).then_some(&self.errors)
    }

    /// Returns the values if nothing was recorded, or the aggregate otherwise.
    pub fn into_result(self) -> Result<Vec<Out>, AggregateError<In, E>> {
        if self.errors.is_empty() {
            Ok(self.values)
        } else {
            Err(self.errors)
        }
    }

    /// Splits into the values and the aggregate, which is `None` if nothing was recorded.
    pub fn into_parts(self) -> (Vec<Out>, Option<AggregateError<In, E>>) {
        let errors = (!self.errors.is_empty()).then_some(self.errors);
        (self.values, errors)
    }
}

/// Runs `step` over every element of `input` and gathers the values it keeps.
///
/// See [`Context`] for how the step function keeps, skips or stops.
/// An empty input never invokes `step`.
///
/// Errors recorded by [`skip_with()`](Context::skip_with) and
/// [`stop_with()`](Context::stop_with) end up in [`Collected::errors`].
/// A panic inside `step` is not caught.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use seqkit::slice::{collect, Context};
///
/// let collected = collect(&[1, 2, 3, 4, 5], |ctx: &mut Context<'_, i32, i32>| {
///     let &num = ctx.element();
///     if num % 2 != 0 {
///         ctx.skip()?;
///     }
///     ctx.set_value(num * 10);
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(collected.values, [20, 40]);
/// assert!(collected.error().is_none());
/// ```
pub fn collect<'a, In, Out, E, F>(input: &'a [In], mut step: F) -> Collected<In, Out, E>
where
    F: FnMut(&mut Context<'a, In, Out, E>) -> ControlFlow<Signal<In, E>>,
{
    match try_collect(input, |ctx| Ok::<_, Infallible>(step(ctx))) {
        Ok(collected) => collected,
        Err(never) => match never {},
    }
}

/// Like [`collect()`], but `step` may fail with an error of its own.
///
/// The first `Err` returned by `step` ends the run and is handed back unchanged.
/// Values and element errors gathered before it are dropped.
///
/// # Examples
///
/// ```
/// use std::{num::ParseIntError, ops::ControlFlow};
/// use seqkit::slice::{try_collect, Context};
///
/// let result = try_collect(&["1", "2", "x"], |ctx: &mut Context<'_, &str, i32>| {
///     ctx.set_value(ctx.element().parse()?);
///     Ok::<_, ParseIntError>(ControlFlow::Continue(()))
/// });
///
/// assert!(result.is_err());
/// ```
pub fn try_collect<'a, In, Out, E, X, F>(
    input: &'a [In],
    mut step: F,
) -> Result<Collected<In, Out, E>, X>
where
    F: FnMut(&mut Context<'a, In, Out, E>) -> Result<ControlFlow<Signal<In, E>>, X>,
{
    let mut errors = AggregateError::new();
    if input.is_empty() {
        return Ok(Collected {
            values: Vec::new(),
            errors,
        });
    }

    let mut ctx = Context::new(input);
    for index in 0..input.len() {
        ctx.begin(index);

        match step(&mut ctx)? {
            ControlFlow::Continue(()) => ctx.commit(),
            ControlFlow::Break(Signal {
                kind: SignalKind::Skip,
                errors: recorded,
            }) => errors.extend(recorded),
            ControlFlow::Break(Signal {
                kind: SignalKind::Stop,
                errors: recorded,
            }) => {
                trace!(index, recorded = recorded.len(), "collect stopped early");
                errors.extend(recorded);
                break;
            }
        }
    }

    Ok(Collected {
        values: ctx.into_results(),
        errors,
    })
}
