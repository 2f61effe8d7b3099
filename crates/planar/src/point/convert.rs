//! Conversions between `Point2` and neighboring representations.
//!
//! Tuples and arrays cover plain data; `nalgebra::Vector2<f32>` covers the
//! linear-algebra stack, both directions.

use nalgebra::Vector2;

use super::types::Point2;

impl From<(f32, f32)> for Point2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point2::new(x, y)
    }
}

impl From<Point2> for (f32, f32) {
    #[inline]
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl From<[f32; 2]> for Point2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Point2::new(x, y)
    }
}

impl From<Point2> for [f32; 2] {
    #[inline]
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl From<Vector2<f32>> for Point2 {
    #[inline]
    fn from(v: Vector2<f32>) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl From<Point2> for Vector2<f32> {
    #[inline]
    fn from(p: Point2) -> Self {
        Vector2::new(p.x, p.y)
    }
}
