use std::{
    sync::{Mutex, PoisonError},
    thread,
};

use tracing::{debug, trace};

use super::{chunk, gate::Gate};

/// Runs a handler over the chunks of a slice, optionally on several threads.
///
/// Both settings treat 0 as 1. With a concurrency of 1 the chunks are handled
/// in order on the calling thread. Above that, each chunk gets its own scoped
/// thread, and at most `concurrency` of them exist at any time.
///
/// Every chunk is handled, even after a handler has failed: nothing is
/// cancelled. [`run()`](ChunkRunner::run) returns once all handlers have
/// finished, with one of the errors they returned, if any.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use seqkit::slice::ChunkRunner;
///
/// let nums: Vec<i32> = (1..=10).collect();
/// let sum = AtomicI32::new(0);
///
/// let result = ChunkRunner::new(3)
///     .concurrency(2)
///     .run(&nums, |chunk| {
///         sum.fetch_add(chunk.iter().sum(), Ordering::Relaxed);
///         Ok::<_, String>(())
///     });
///
/// assert!(result.is_ok());
/// assert_eq!(sum.into_inner(), 55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRunner {
    chunk_size: usize,
    concurrency: usize,
}

impl ChunkRunner {
    /// Creates a sequential runner with the given chunk size.
    #[inline]
    pub const fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: if chunk_size == 0 { 1 } else { chunk_size },
            concurrency: 1,
        }
    }

    /// Sets how many handlers may run at once.
    #[inline]
    pub const fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = if concurrency == 0 { 1 } else { concurrency };
        self
    }

    /// Returns the chunk size.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns how many handlers may run at once.
    #[inline]
    pub const fn concurrency_limit(&self) -> usize {
        self.concurrency
    }

    /// Hands every chunk of `input` to `handler`.
    ///
    /// Returns `Ok(())` if every handler did, or one of the errors otherwise.
    /// If a handler panics, this panics too. With a concurrency above 1 that
    /// happens once every other handler has finished.
    pub fn run<T, E, F>(&self, input: &[T], handler: F) -> Result<(), E>
    where
        T: Sync,
        E: Send,
        F: Fn(&[T]) -> Result<(), E> + Sync,
    {
        if input.is_empty() {
            return Ok(());
        }

        let chunks = chunk(input, self.chunk_size);
        debug!(
            chunks = chunks.len(),
            chunk_size = self.chunk_size,
            concurrency = self.concurrency,
            "running chunk handlers"
        );

        if self.concurrency <= 1 {
            run_sequential(chunks, handler)
        } else {
            run_concurrent(chunks, self.concurrency, handler)
        }
    }
}

impl Default for ChunkRunner {
    #[inline]
    fn default() -> Self {
        Self::new(1)
    }
}

fn run_sequential<T, E, F>(chunks: Vec<&[T]>, handler: F) -> Result<(), E>
where
    F: Fn(&[T]) -> Result<(), E>,
{
    let mut first_error = None;

    for (index, part) in chunks.into_iter().enumerate() {
        trace!(index, len = part.len(), "handling chunk");
        if let Err(error) = handler(part) {
            debug!(index, "chunk handler failed");
            first_error.get_or_insert(error);
        }
    }

    first_error.map_or(Ok(()), Err)
}

fn run_concurrent<T, E, F>(chunks: Vec<&[T]>, concurrency: usize, handler: F) -> Result<(), E>
where
    T: Sync,
    E: Send,
    F: Fn(&[T]) -> Result<(), E> + Sync,
{
    let gate = Gate::new(concurrency);
    let first_error = Mutex::new(None);
    let handler = &handler;
    let first_error_slot = &first_error;

    thread::scope(|scope| {
        for (index, part) in chunks.into_iter().enumerate() {
            let permit = gate.acquire();
            trace!(index, len = part.len(), "dispatching chunk");

            scope.spawn(move || {
                let _permit = permit;
                if let Err(error) = handler(part) {
                    debug!(index, "chunk handler failed");
                    first_error_slot
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .get_or_insert(error);
                }
            });
        }
    });

    match first_error.into_inner().unwrap_or_else(PoisonError::into_inner) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Splits `input` into chunks of `chunk_size` and hands each one to `handler`,
/// running at most `concurrency` handlers at once.
///
/// Shorthand for [`ChunkRunner`]; see there for the details.
///
/// # Examples
///
/// ```
/// use seqkit::slice::for_each_chunk;
///
/// let nums = [1, 2, 3, 4, 5, 6];
/// let result = for_each_chunk(&nums, 2, 3, |chunk| {
///     if chunk.contains(&5) { Err("found 5") } else { Ok(()) }
/// });
///
/// assert_eq!(result, Err("found 5"));
/// ```
#[inline]
pub fn for_each_chunk<T, E, F>(
    input: &[T],
    chunk_size: usize,
    concurrency: usize,
    handler: F,
) -> Result<(), E>
where
    T: Sync,
    E: Send,
    F: Fn(&[T]) -> Result<(), E> + Sync,
{
    ChunkRunner::new(chunk_size)
        .concurrency(concurrency)
        .run(input, handler)
}

#[cfg(test)]
mod tests {
    use std::{
        panic::{self, AssertUnwindSafe},
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use super::*;

    fn input() -> Vec<i32> {
        (1..=10).collect()
    }

    #[test]
    fn sequential_keeps_order() {
        let processed = Mutex::new(Vec::new());
        let result = for_each_chunk(&input(), 3, 1, |part| {
            processed.lock().unwrap().extend_from_slice(part);
            Ok::<_, ()>(())
        });

        assert_eq!(result, Ok(()));
        assert_eq!(processed.into_inner().unwrap(), input());
    }

    #[test]
    fn sequential_visits_every_chunk_after_an_error() {
        let visited = AtomicUsize::new(0);
        let result = for_each_chunk(&input(), 2, 1, |part| {
            visited.fetch_add(1, Ordering::SeqCst);
            match part[0] {
                3 => Err("first"),
                7 => Err("second"),
                _ => Ok(()),
            }
        });

        assert_eq!(result, Err("first"));
        assert_eq!(visited.into_inner(), 5);
    }

    #[test]
    fn concurrent_handles_everything() {
        let processed = Mutex::new(Vec::new());
        let result = for_each_chunk(&input(), 2, 3, |part| {
            thread::sleep(Duration::from_millis(5));
            processed.lock().unwrap().extend_from_slice(part);
            Ok::<_, ()>(())
        });

        let mut processed = processed.into_inner().unwrap();
        processed.sort_unstable();
        assert_eq!(result, Ok(()));
        assert_eq!(processed, input());
    }

    #[test]
    fn concurrent_error_is_returned_after_every_handler_finished() {
        let finished = AtomicUsize::new(0);
        let result = for_each_chunk(&input(), 2, 2, |part| {
            if part[0] == 5 {
                finished.fetch_add(1, Ordering::SeqCst);
                return Err("oops");
            }
            thread::sleep(Duration::from_millis(10));
            finished.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert_eq!(result, Err("oops"));
        assert_eq!(finished.into_inner(), 5);
    }

    #[test]
    fn concurrency_never_exceeds_the_limit() {
        for limit in [1, 2, 4] {
            let active = AtomicUsize::new(0);
            let peak = AtomicUsize::new(0);
            let visited = AtomicUsize::new(0);

            let result = for_each_chunk(&[0_u8; 20], 1, limit, |_| {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(2));
                active.fetch_sub(1, Ordering::SeqCst);
                visited.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ()>(())
            });

            assert_eq!(result, Ok(()));
            assert!(peak.into_inner() <= limit, "limit {limit} exceeded");
            assert_eq!(visited.into_inner(), 20);
        }
    }

    #[test]
    fn every_failure_is_reported_as_one_of_them() {
        let result = for_each_chunk(&input(), 1, 4, |part| Err(part[0]));
        assert!(matches!(result, Err(1..=10)));
    }

    #[test]
    fn empty_input_never_calls_the_handler() {
        let result = for_each_chunk(&[] as &[i32], 2, 4, |_| -> Result<(), ()> {
            unreachable!()
        });
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn panics_are_raised_after_the_scope_joins() {
        let finished = AtomicUsize::new(0);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            for_each_chunk(&input(), 1, 3, |part| -> Result<(), ()> {
                if part[0] == 4 {
                    panic!("handler panicked");
                }
                thread::sleep(Duration::from_millis(2));
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(finished.into_inner(), 9);
    }

    #[test]
    fn runner_normalizes_zero() {
        let runner = ChunkRunner::new(0).concurrency(0);
        assert_eq!(runner.chunk_size(), 1);
        assert_eq!(runner.concurrency_limit(), 1);
        assert_eq!(runner, ChunkRunner::default());
    }
}
