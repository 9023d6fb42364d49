//! Segment proximity helpers used by the hand/letter contact tests.

use super::Vec2;

/// Closest point to `p` on the segment `a..b`.
///
/// Degenerate segments (a == b) collapse to `a`.
#[inline]
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let ap = p - a;

    let c1 = ab.dot(ap);
    if c1 <= 0.0 {
        return a;
    }

    let c2 = ab.length_squared();
    if c2 <= c1 {
        return b;
    }

    a + ab * (c1 / c2)
}

/// Euclidean distance from `p` to the segment `a..b`.
#[inline]
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance(closest_point_on_segment(p, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_inside_segment() {
        let d = distance_to_segment(Vec2::new(5.0, 3.0), Vec2::zero(), Vec2::new(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn clamps_to_endpoints() {
        let a = Vec2::zero();
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Vec2::new(-4.0, 3.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(14.0, 3.0), a, b), b);
        assert!((distance_to_segment(Vec2::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_segment_is_point_distance() {
        let a = Vec2::new(2.0, 2.0);
        assert!((distance_to_segment(Vec2::new(5.0, 6.0), a, a) - 5.0).abs() < 1e-6);
    }
}
