//! Functional helpers for slices.
//!
//! The centerpiece is [`collect()`], which drives a step function over every
//! element and lets it keep a transformed value, skip the element, or stop the
//! whole run, recording errors against individual elements along the way.
//! [`for_each_chunk()`] hands contiguous chunks of a slice to a handler, with a
//! bounded number of handlers running at once.
//!
//! The remaining functions are thin single-pass helpers.

mod all_any;
mod chunk;
mod collect;
mod error;
mod ext;
mod filter;
mod find;
mod for_each_chunk;
mod gate;
mod map;
mod reduce;

pub use all_any::*;
pub use chunk::*;
pub use collect::*;
pub use error::*;
pub use ext::*;
pub use filter::*;
pub use find::*;
pub use for_each_chunk::*;
pub use map::*;
pub use reduce::*;
