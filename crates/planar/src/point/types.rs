//! The mutable 2D point type and its core operations.
//!
//! - `Point2`: two public `f32` coordinates, mutated in place by most
//!   operations; mutators return the receiver so calls chain.
//! - Angle convention: radians, angle 0 along +x, counter-clockwise positive.
//!
//! Code cross-refs: `super::ops`, `super::convert`, `crate::parallelogram_area`

use std::fmt;
use std::hash::{Hash, Hasher};

/// Mutable 2D point/vector.
///
/// Coordinates are plain public fields; `NaN` and `Infinity` pass through
/// every operation unchecked (IEEE-754 semantics, nothing raises).
///
/// Equality is ordinary float equality per coordinate, and hashing combines
/// the raw coordinate bit patterns; both are exact, not epsilon-based. The
/// one wrinkle: `0.0 == -0.0` but their bit patterns differ, so normalize
/// signed zeros before using points as hash keys.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    /// The origin `(0, 0)`.
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle`: `(cos angle, sin angle)`.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: c, y: s }
    }

    // Predicates

    /// True iff both coordinates are exactly `0.0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// True iff the squared length is exactly `1.0`.
    ///
    /// Exact comparison on purpose; values produced by trig or division
    /// usually miss it by an ulp. Callers wanting a tolerance should compare
    /// `len_sq()` against `1.0` themselves.
    #[inline]
    pub fn is_norm(&self) -> bool {
        self.len_sq() == 1.0
    }

    // In-place mutators. Each returns the receiver for chaining; none
    // allocate a new instance.

    #[inline]
    pub fn set(&mut self, p: Point2) -> &mut Self {
        self.x = p.x;
        self.y = p.y;
        self
    }

    #[inline]
    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn add(&mut self, p: Point2) -> &mut Self {
        self.x += p.x;
        self.y += p.y;
        self
    }

    #[inline]
    pub fn add_xy(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    #[inline]
    pub fn sub(&mut self, p: Point2) -> &mut Self {
        self.x -= p.x;
        self.y -= p.y;
        self
    }

    #[inline]
    pub fn sub_xy(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.x -= dx;
        self.y -= dy;
        self
    }

    /// Uniform scale.
    #[inline]
    pub fn mul(&mut self, s: f32) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    /// Uniform scale by `1/s`. Division by zero yields `±Infinity`/`NaN`
    /// per IEEE-754, not an error.
    #[inline]
    pub fn div(&mut self, s: f32) -> &mut Self {
        self.x /= s;
        self.y /= s;
        self
    }

    /// Exchange coordinates with `other`; both points are mutated.
    #[inline]
    pub fn swap(&mut self, other: &mut Point2) -> &mut Self {
        std::mem::swap(self, other);
        self
    }

    /// Add a displacement of length `len` in direction `angle`.
    #[inline]
    pub fn add_angled(&mut self, angle: f32, len: f32) -> &mut Self {
        let (s, c) = angle.sin_cos();
        self.add_xy(len * c, len * s)
    }

    /// Rescale to unit length. Exact no-op on the zero vector, which keeps
    /// the division well-defined.
    #[inline]
    pub fn norm(&mut self) -> &mut Self {
        let len = self.len();
        if len != 0.0 {
            self.div(len);
        }
        self
    }

    /// Rotate about the origin by `angle` (standard 2D rotation matrix).
    #[inline]
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (ox, oy) = (self.x, self.y);
        self.x = c * ox - s * oy;
        self.y = s * ox + c * oy;
        self
    }

    /// Rotate about `pivot`: translate so `pivot` sits at the origin,
    /// rotate, translate back. `pivot` itself is unaffected.
    #[inline]
    pub fn rotate_about(&mut self, angle: f32, pivot: Point2) -> &mut Self {
        self.sub(pivot);
        self.rotate(angle);
        self.add(pivot)
    }

    /// Round each coordinate to the nearest integral value (half-way cases
    /// away from zero), kept as `f32`.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }

    #[inline]
    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self
    }

    #[inline]
    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    // Queries

    /// Euclidean length.
    #[inline]
    pub fn len(&self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn len_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to `p`.
    #[inline]
    pub fn dis(&self, p: Point2) -> f32 {
        self.dis_sq(p).sqrt()
    }

    /// Squared distance to `p`.
    #[inline]
    pub fn dis_sq(&self, p: Point2) -> f32 {
        let dx = self.x - p.x;
        let dy = self.y - p.y;
        dx * dx + dy * dy
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, p: Point2) -> f32 {
        self.x * p.x + self.y * p.y
    }

    /// Angle of the vector from the origin, `atan2(y, x)` in `[-π, π]`.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Direction of the displacement from `self` to `p`.
    #[inline]
    pub fn angle_to(&self, p: Point2) -> f32 {
        (p.y - self.y).atan2(p.x - self.x)
    }

    /// Two-valued orientation test: `+1` if `y * p.x > x * p.y`, else `-1`
    /// (`+1` when `p` lies on the clockwise side of `self`). Never returns
    /// `0`; collinear and zero inputs fall to `-1`.
    #[inline]
    pub fn dsign(&self, p: Point2) -> i32 {
        if self.y * p.x > self.x * p.y {
            1
        } else {
            -1
        }
    }
}

impl Hash for Point2 {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.x.to_bits() ^ self.y.to_bits());
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
