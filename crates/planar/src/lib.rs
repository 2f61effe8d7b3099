//! Mutable 2D point/vector math.
//!
//! Purpose
//! - Provide one canonical mutable point type (`Point2`) with in-place
//!   arithmetic, angle-based construction/rotation, and distance/orientation
//!   queries. Keep the API minimal (KISS, YAGNI): no 3D/N-D generalization,
//!   no SIMD batch ops, no serialization.
//! - Keep numerics explicit: IEEE-754 semantics throughout (`NaN`/`Infinity`
//!   propagate, nothing raises), exact float equality where the contract says
//!   exact, named epsilons in tests only.
//!
//! Angle convention
//! - Radians. Angle 0 points along +x; positive angles turn counter-clockwise.
//!   Uniform across `from_angle`, `rotate`, `angle`, `angle_to`, `add_angled`.

pub mod point;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use point::rand::{draw_dir, draw_point, Bounds2, ReplayToken};
pub use point::Point2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::rand::{draw_dir, draw_point, Bounds2, ReplayToken};
    pub use crate::point::Point2;
    pub use crate::parallelogram_area;
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point2, b: Point2) -> f32 {
    a.x * b.y - a.y * b.x
}
