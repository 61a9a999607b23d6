use crate::real::{Real, EPSILON};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: Real,
    pub y: Real,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(s: Real) -> Self {
        Self { x: s, y: s }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Real {
        self.x * rhs.x + self.y * rhs.y
    }

    // z component of the 3d cross product
    #[inline]
    pub fn cross(self, rhs: Self) -> Real {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn length_squared(self) -> Real {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> Real {
        self.length_squared().sqrt()
    }

    // ZERO when the length is below EPSILON, never divides by near-zero
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len < EPSILON {
            Self::ZERO
        } else {
            self / len
        }
    }

    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    // 90 degree counter-clockwise rotation
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    // positive angles rotate counter-clockwise
    pub fn rotate(self, radians: Real) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    // projection of self onto rhs; ZERO when rhs is near zero length
    pub fn project(self, rhs: Self) -> Self {
        let len_sq = rhs.length_squared();
        if len_sq < EPSILON {
            Self::ZERO
        } else {
            rhs * (self.dot(rhs) / len_sq)
        }
    }

    // the normal does not need to be unit length
    pub fn reflect(self, normal: Self) -> Self {
        let n = normal.normalize();
        self - n * (2.0 * self.dot(n))
    }

    #[inline]
    pub fn lerp(self, rhs: Self, t: Real) -> Self {
        self + (rhs - self) * t
    }

    // exact comparison, unlike is_unit
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_unit(self) -> bool {
        (self.length_squared() - 1.0).abs() < EPSILON
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Real> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Real) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for Real {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<Real> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Real) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<Real> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<Real> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: Real) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

// debugging aid: components right-justified, column width tracks the
// longest rendered component plus three
impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.x.to_string();
        let y = self.y.to_string();
        let w = x.len().max(y.len()) + 3;
        write!(f, "[{:>w$},{:>w$}]", x, y, w = w)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::real::PI;
    use crate::tools::to_radians;

    #[test]
    fn test_factories() {
        assert_eq!(Vec2::default(), Vec2::ZERO);
        assert_eq!(Vec2::ONE, Vec2::new(1.0, 1.0));
        assert_eq!(Vec2::UP, Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::DOWN, Vec2::new(0.0, -1.0));
        assert_eq!(Vec2::LEFT, Vec2::new(-1.0, 0.0));
        assert_eq!(Vec2::RIGHT, Vec2::new(1.0, 0.0));
        assert_eq!(Vec2::splat(2.0), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(a - b, Vec2::new(-2.0, -2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(a / 2.0, Vec2::new(0.5, 1.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));

        let mut d = Vec2::new(1.0, 1.0);
        d += a;
        assert_eq!(d, Vec2::new(2.0, 3.0));
        d -= a;
        assert_eq!(d, Vec2::new(1.0, 1.0));
        d *= 2.0;
        assert_eq!(d, Vec2::new(2.0, 2.0));
        d /= 2.0;
        assert_eq!(d, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let v = Vec2::new(2.0, 3.0);
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(2.0 * v, Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < EPSILON);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.normalize().length() - 1.0).abs() < EPSILON);

        let mut m = Vec2::new(3.0, 4.0);
        m.normalize_mut();
        assert!((m.length() - 1.0).abs() < EPSILON);

        // degenerate input collapses to zero instead of dividing
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        let mut z = Vec2::ZERO;
        z.normalize_mut();
        assert_eq!(z, Vec2::ZERO);
    }

    #[test]
    fn test_dot_cross() {
        let a = Vec2::new(2.0, 1.0);
        let b = Vec2::new(1.0, 3.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert!((a.cross(b) - 5.0).abs() < EPSILON);
        assert_eq!(a.cross(b), -b.cross(a));

        assert!(Vec2::RIGHT.dot(Vec2::UP).abs() < EPSILON);
        assert!((Vec2::RIGHT.dot(Vec2::RIGHT) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_perpendicular_rotate() {
        assert_eq!(Vec2::RIGHT.perpendicular(), Vec2::UP);

        let r = Vec2::RIGHT.rotate(to_radians(90.0));
        assert!(r.x.abs() < EPSILON);
        assert!((r.y - 1.0).abs() < EPSILON);

        let half = Vec2::new(1.0, 2.0).rotate(PI);
        assert!((half.x + 1.0).abs() < EPSILON * 4.0);
        assert!((half.y + 2.0).abs() < EPSILON * 4.0);
    }

    #[test]
    fn test_project() {
        let p = Vec2::new(1.0, 1.0).project(Vec2::RIGHT);
        assert!((p.x - 1.0).abs() < EPSILON);
        assert_eq!(p.y, 0.0);

        // projecting onto a longer vector scales correctly
        let q = Vec2::new(1.0, 1.0).project(Vec2::new(2.0, 0.0));
        assert!((q.x - 1.0).abs() < EPSILON);

        // near-zero target collapses to zero
        assert_eq!(Vec2::new(1.0, 1.0).project(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_reflect() {
        let r = Vec2::new(1.0, 1.0).reflect(Vec2::RIGHT);
        assert!((r.x + 1.0).abs() < EPSILON);
        assert!((r.y - 1.0).abs() < EPSILON);

        // non-unit normals are normalized internally
        let r2 = Vec2::new(1.0, 1.0).reflect(Vec2::new(10.0, 0.0));
        assert!((r2.x + 1.0).abs() < EPSILON);
        assert!((r2.y - 1.0).abs() < EPSILON);

        // reflecting twice across the same normal restores the input
        let v = Vec2::new(3.0, -2.0);
        let n = Vec2::new(1.0, 2.0);
        let back = v.reflect(n).reflect(n);
        assert!((back.x - v.x).abs() < EPSILON * 8.0);
        assert!((back.y - v.y).abs() < EPSILON * 8.0);
    }

    #[test]
    fn test_lerp() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, -10.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, -5.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        // unclamped by design
        assert_eq!(a.lerp(b, 2.0), Vec2::new(20.0, -20.0));
    }

    #[test]
    fn test_predicates() {
        assert!(Vec2::ZERO.is_zero());
        assert!(!Vec2::new(EPSILON, 0.0).is_zero());
        assert!(Vec2::RIGHT.is_unit());
        assert!(Vec2::new(3.0, 4.0).normalize().is_unit());
        assert!(!Vec2::new(3.0, 4.0).is_unit());

        let mut v = Vec2::new(1.0, 2.0);
        v.clear();
        assert!(v.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1.0, -2.5).to_string(), "[      1,   -2.5]");
        assert_eq!(Vec2::ZERO.to_string(), "[   0,   0]");
    }
}
