use crate::real::{Real, EPSILON};
use crate::tools::clamp;
use crate::vec2::Vec2;

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> Real {
    (b - a).length()
}

#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> Real {
    (b - a).length_squared()
}

// Projects p onto the line through a and b, clamping the parameter into
// [0,1] so the result stays on the segment. A near-zero-length segment
// collapses to its first endpoint instead of dividing.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < EPSILON {
        return a;
    }
    let t = clamp((p - a).dot(ab) / len_sq, 0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert!((distance(a, b) - 5.0).abs() < EPSILON);
        assert_eq!(distance_squared(a, b), 25.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_closest_point_interior() {
        let a = Vec2::ZERO;
        let b = Vec2::new(2.0, 0.0);
        let c = closest_point_on_segment(a, b, Vec2::new(1.0, 0.5));
        assert_eq!(c, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_closest_point_clamps_to_ends() {
        let a = Vec2::ZERO;
        let b = Vec2::new(2.0, 0.0);
        // beyond b
        assert_eq!(
            closest_point_on_segment(a, b, Vec2::new(3.0, 0.5)),
            Vec2::new(2.0, 0.0)
        );
        // before a
        assert_eq!(
            closest_point_on_segment(a, b, Vec2::new(-1.0, -0.5)),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_closest_point_degenerate_segment() {
        let a = Vec2::new(1.0, 1.0);
        assert_eq!(closest_point_on_segment(a, a, Vec2::new(5.0, 5.0)), a);
    }
}
