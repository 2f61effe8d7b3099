//! Operator surface for `Point2`.
//!
//! By-value operators for expression contexts; the `*Assign` forms delegate
//! to the in-place mutators so both spellings share one implementation.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::types::Point2;

impl Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Point2;
    #[inline]
    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, s: f32) -> Point2 {
        Point2::new(self.x * s, self.y * s)
    }
}

impl Mul<Point2> for f32 {
    type Output = Point2;
    #[inline]
    fn mul(self, p: Point2) -> Point2 {
        Point2::new(p.x * self, p.y * self)
    }
}

impl Div<f32> for Point2 {
    type Output = Point2;
    #[inline]
    fn div(self, s: f32) -> Point2 {
        Point2::new(self.x / s, self.y / s)
    }
}

impl AddAssign for Point2 {
    #[inline]
    fn add_assign(&mut self, rhs: Point2) {
        self.add(rhs);
    }
}

impl SubAssign for Point2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Point2) {
        self.sub(rhs);
    }
}

impl MulAssign<f32> for Point2 {
    #[inline]
    fn mul_assign(&mut self, s: f32) {
        self.mul(s);
    }
}

impl DivAssign<f32> for Point2 {
    #[inline]
    fn div_assign(&mut self, s: f32) {
        self.div(s);
    }
}
