//! Helpers for [`HashMap`](std::collections::HashMap)s.
//!
//! Every function makes a single pass and returns a new collection;
//! none of them modifies its input.

mod build;
mod entries;
mod transform;

pub use build::*;
pub use entries::*;
pub use transform::*;
