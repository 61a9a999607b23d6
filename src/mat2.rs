use crate::real::Real;
use crate::vec2::Vec2;
use core::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// row-major 2x2
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat2 {
    pub rows: [Vec2; 2],
}

impl Mat2 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(m00: Real, m01: Real, m10: Real, m11: Real) -> Self {
        Self {
            rows: [Vec2::new(m00, m01), Vec2::new(m10, m11)],
        }
    }

    #[inline]
    pub const fn from_rows(r0: Vec2, r1: Vec2) -> Self {
        Self { rows: [r0, r1] }
    }

    // same sign convention as Vec2::rotate: positive angles are
    // counter-clockwise
    pub fn from_angle(radians: Real) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    pub fn transpose(self) -> Self {
        Self::new(
            self.rows[0].x,
            self.rows[1].x,
            self.rows[0].y,
            self.rows[1].y,
        )
    }
}

impl Default for Mat2 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.rows[0].dot(rhs), self.rows[1].dot(rhs))
    }
}

impl Mul<Mat2> for Mat2 {
    type Output = Mat2;
    fn mul(self, rhs: Mat2) -> Mat2 {
        let t = rhs.transpose();
        Self::new(
            self.rows[0].dot(t.rows[0]),
            self.rows[0].dot(t.rows[1]),
            self.rows[1].dot(t.rows[0]),
            self.rows[1].dot(t.rows[1]),
        )
    }
}

#[test]
fn test_mat2_identity() {
    assert_eq!(Mat2::default(), Mat2::IDENTITY);
    let v = Vec2::new(3.0, -4.0);
    assert_eq!(Mat2::IDENTITY * v, v);
    assert_eq!(Mat2::ZERO * v, Vec2::ZERO);
}

#[test]
fn test_mat2_mul_vec() {
    let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(m * Vec2::new(1.0, 1.0), Vec2::new(3.0, 7.0));
    assert_eq!(m * Vec2::RIGHT, Vec2::new(1.0, 3.0));
}

#[test]
fn test_mat2_mul_mat() {
    let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let b = Mat2::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a * b, Mat2::new(19.0, 22.0, 43.0, 50.0));
    assert_eq!(b * a, Mat2::new(23.0, 34.0, 31.0, 46.0));
    assert_eq!(a * Mat2::IDENTITY, a);
    assert_eq!(a.transpose(), Mat2::new(1.0, 3.0, 2.0, 4.0));
}

#[test]
fn test_mat2_rotation_matches_rotate() {
    use crate::real::{EPSILON, HALF_PI, PI};
    for &angle in &[0.0, 0.3, HALF_PI, PI, -1.7, 5.0] {
        let v = Vec2::new(1.5, -2.0);
        let by_matrix = Mat2::from_angle(angle) * v;
        let by_rotate = v.rotate(angle);
        assert!((by_matrix.x - by_rotate.x).abs() < EPSILON);
        assert!((by_matrix.y - by_rotate.y).abs() < EPSILON);
    }
}
