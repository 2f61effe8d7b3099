//! Mutable 2D point (`Point2`).
//!
//! Purpose
//! - One point/vector type with in-place mutators that return the receiver
//!   for chaining, plus pure geometric queries and angle-based construction.
//! - Numerically explicit: invalid operations resolve to `NaN`/`Infinity`
//!   per IEEE-754 instead of raising; equality and `is_norm` are exact.
//!
//! Code cross-refs: `types::Point2`, `ops` (operator surface), `convert`
//! (tuple/array/`Vector2` interop), `rand::{Bounds2, ReplayToken}`

mod convert;
mod ops;
pub mod rand;
mod types;

pub use types::Point2;
