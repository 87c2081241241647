use std::{
    error,
    fmt::{self, Debug, Display},
    slice, vec,
};

use thiserror::Error;

/// The error type used when a step function does not name one.
///
/// A boxed, thread-safe error of any type. Unlike a bare
/// `Box<dyn Error + Send + Sync>`, it implements [`Error`](error::Error)
/// itself, with the boxed error as its [`source()`](error::Error::source),
/// so the error a step function supplied stays reachable through the
/// error chain of [`ElemError`] and [`AggregateError`].
///
/// # Examples
///
/// ```
/// use std::{error::Error, fmt};
/// use seqkit::slice::BoxError;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl Error for Timeout {}
///
/// let error = BoxError::new(Timeout);
/// assert_eq!(error.to_string(), "timed out");
/// assert!(error.is::<Timeout>());
/// assert!(error.source().is_some_and(|source| source.is::<Timeout>()));
///
/// let error = BoxError::from("plain message");
/// assert!(error.downcast_ref::<Timeout>().is_none());
/// ```
#[derive(Debug)]
pub struct BoxError(Box<dyn error::Error + Send + Sync>);

impl BoxError {
    /// Boxes `error`.
    #[inline]
    pub fn new<X>(error: X) -> Self
    where
        X: error::Error + Send + Sync + 'static,
    {
        Self(Box::new(error))
    }

    /// Returns `true` if the boxed error is of type `X`.
    #[inline]
    pub fn is<X: error::Error + 'static>(&self) -> bool {
        self.0.is::<X>()
    }

    /// Returns the boxed error if it is of type `X`.
    #[inline]
    pub fn downcast_ref<X: error::Error + 'static>(&self) -> Option<&X> {
        self.0.downcast_ref::<X>()
    }

    /// Unwraps the boxed error.
    #[inline]
    pub fn into_inner(self) -> Box<dyn error::Error + Send + Sync> {
        self.0
    }
}

impl From<Box<dyn error::Error + Send + Sync>> for BoxError {
    #[inline]
    fn from(error: Box<dyn error::Error + Send + Sync>) -> Self {
        Self(error)
    }
}

impl From<String> for BoxError {
    #[inline]
    fn from(message: String) -> Self {
        Self(message.into())
    }
}

impl From<&str> for BoxError {
    #[inline]
    fn from(message: &str) -> Self {
        Self(message.into())
    }
}

impl Display for BoxError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl error::Error for BoxError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&*self.0)
    }
}

/// An error recorded for a single element of the input.
///
/// It is produced by [`Context::skip_with()`] and [`Context::stop_with()`],
/// which bind the supplied error to the position and value of the element
/// being processed. The underlying error is kept as-is: its message is
/// also the message of this error, and it is the [`source()`](error::Error::source)
/// of this error whenever it implements [`Error`](error::Error) itself.
///
/// [`Context::skip_with()`]: crate::slice::Context::skip_with
/// [`Context::stop_with()`]: crate::slice::Context::stop_with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ElemError<In, E> {
    /// Position of the element in the input.
    pub index: usize,
    /// Copy of the element.
    pub value: In,
    /// The error supplied by the step function.
    #[source]
    pub error: E,
}

impl<In, E> ElemError<In, E> {
    /// Returns the error supplied by the step function.
    #[inline]
    pub const fn origin(&self) -> &E {
        &self.error
    }

    /// Consumes the element error, returning the error supplied by the step function.
    #[inline]
    pub fn into_origin(self) -> E {
        self.error
    }
}

/// Every [`ElemError`] recorded by one [`collect()`] run, in the order they were recorded.
///
/// An empty aggregate means that nothing went wrong:
/// [`Collected::error()`] returns `None` for it and its message is empty.
/// Otherwise the message is every element error's message, each one
/// followed by a newline, the last one included.
///
/// Its [`source()`](error::Error::source) is the underlying error of the
/// first element error. Use [`origins()`](Self::origins) to reach the others.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use seqkit::slice::{collect, Context};
///
/// let collected = collect(&[1, 2, 3], |ctx: &mut Context<'_, i32, i32, String>| {
///     let &num = ctx.element();
///     if num == 2 {
///         return ctx.stop_with([format!("bad number {num}")]);
///     }
///     ctx.set_value(num);
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(collected.values, [1]);
///
/// let errors = collected.errors;
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.at(0).map(|e| e.index), Some(1));
/// assert_eq!(errors.origin_at(0).map(String::as_str), Some("bad number 2"));
/// ```
///
/// [`collect()`]: crate::slice::collect
/// [`Collected::error()`]: crate::slice::Collected::error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError<In, E = BoxError> {
    errors: Vec<ElemError<In, E>>,
}

impl<In, E> AggregateError<In, E> {
    /// Creates an empty aggregate.
    #[inline]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Returns the number of recorded element errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no error has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the element error at `index`, or `None` if out of range.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&ElemError<In, E>> {
        self.errors.get(index)
    }

    /// Returns the underlying error at `index`, or `None` if out of range.
    #[inline]
    pub fn origin_at(&self, index: usize) -> Option<&E> {
        self.at(index).map(ElemError::origin)
    }

    /// Iterates over the recorded element errors.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, ElemError<In, E>> {
        self.errors.iter()
    }

    /// Iterates over the underlying errors, in recording order.
    ///
    /// This is the way to check whether a particular error was recorded.
    pub fn origins(&self) -> impl Iterator<Item = &E> {
        self.errors.iter().map(ElemError::origin)
    }

    #[inline]
    pub(crate) fn extend(&mut self, errors: impl IntoIterator<Item = ElemError<In, E>>) {
        self.errors.extend(errors);
    }
}

impl<In, E> Default for AggregateError<In, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<In, E: Display> Display for AggregateError<In, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }

        Ok(())
    }
}

impl<In, E> error::Error for AggregateError<In, E>
where
    In: Debug,
    E: error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.errors
            .first()
            .map(|first| &first.error as &(dyn error::Error + 'static))
    }
}

impl<In, E> IntoIterator for AggregateError<In, E> {
    type Item = ElemError<In, E>;
    type IntoIter = vec::IntoIter<ElemError<In, E>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, In, E> IntoIterator for &'a AggregateError<In, E> {
    type Item = &'a ElemError<In, E>;
    type IntoIter = slice::Iter<'a, ElemError<In, E>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
