//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the step-function types and the slice extension trait.
//!
//! # Example
//!
//! ```
//! use seqkit::prelude::*;
//! ```

pub use crate::slice::{AggregateError, BoxError, Collected, Context, ElemError, Signal, SliceExt};
