//! Functional-style helpers for slices and hash maps.
//!
//! The crate has two independent halves:
//!
//! - [`slice`] works on ordered sequences. Besides the usual [`filter`](slice::filter),
//!   [`map`](slice::map), [`reduce`](slice::reduce) and friends, it offers
//!   [`collect()`](slice::collect), a driver in which a step function decides for
//!   every element whether to keep a value, skip the element or stop, and may record
//!   errors against the element as it does so. [`for_each_chunk()`](slice::for_each_chunk)
//!   hands contiguous chunks to a handler, optionally on several threads.
//! - [`record`] works on [`HashMap`]s: sorted and unsorted keys/values, merging,
//!   filtering, and building maps and sets out of slices.
//!
//! # Collecting with a step function
//!
//! Suppose we parse a batch of user-supplied numbers. Blank lines should be ignored,
//! unparsable lines reported, and a negative number ends the batch.
//!
//! ```
//! use std::{num::ParseIntError, ops::ControlFlow};
//! use seqkit::slice::{collect, Context};
//!
//! let lines = ["12", "", "x7", "30", "-1", "99"];
//!
//! let collected = collect(&lines, |ctx: &mut Context<'_, &str, u32, ParseIntError>| {
//!     let line = ctx.element().trim();
//!     if line.is_empty() {
//!         ctx.skip()?;
//!     }
//!     if line.starts_with('-') {
//!         ctx.stop()?;
//!     }
//!     match line.parse() {
//!         Ok(num) => ctx.set_value(num),
//!         Err(e) => ctx.skip_with([e])?,
//!     }
//!     ControlFlow::Continue(())
//! });
//!
//! assert_eq!(collected.values, [12, 30]);
//!
//! let errors = collected.error().expect("\"x7\" does not parse");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.at(0).map(|e| (e.index, e.value)), Some((2, "x7")));
//! ```
//!
//! Skipping and stopping are ordinary return values ([`ControlFlow::Break`]),
//! so `?` leaves the step function on the spot. A panic inside the step function
//! is never caught; use [`try_collect()`](slice::try_collect) for steps that can fail
//! with an error of their own.
//!
//! # Chunks
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use seqkit::slice::for_each_chunk;
//!
//! let ids: Vec<u32> = (0..100).collect();
//! let batches = AtomicUsize::new(0);
//!
//! // Batches of 16, at most 4 in flight.
//! let result = for_each_chunk(&ids, 16, 4, |batch| {
//!     assert!(batch.len() <= 16);
//!     batches.fetch_add(1, Ordering::Relaxed);
//!     Ok::<_, String>(())
//! });
//!
//! assert!(result.is_ok());
//! assert_eq!(batches.into_inner(), 7);
//! ```
//!
//! Events are emitted through [`tracing`]; install a subscriber to see them.
//!
//! [`HashMap`]: std::collections::HashMap
//! [`ControlFlow::Break`]: std::ops::ControlFlow::Break

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;
pub mod record;
pub mod slice;
