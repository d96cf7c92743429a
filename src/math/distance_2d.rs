use super::{Point2, TOLERANCE};

/// Returns the minimum distance from `point` to the line segment
/// from `start` to `end`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, start: &Point2, end: &Point2) -> f64 {
    let d = end - start;
    let len_sq = d.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return nalgebra::distance(point, start);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((point - start).dot(&d) / len_sq).clamp(0.0, 1.0);
    nalgebra::distance(point, &(start + d * t))
}

/// Returns `true` if `point` lies within `tolerance` of the segment
/// `[start, end]`.
///
/// A tolerance below [`TOLERANCE`] is raised to it, so points computed on
/// the segment (midpoints, projections) always match despite rounding.
#[must_use]
pub fn is_point_on_segment(point: &Point2, start: &Point2, end: &Point2, tolerance: f64) -> bool {
    point_to_segment_dist(point, start, end) <= tolerance.max(TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        let d = point_to_segment_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = point_to_segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn midpoint_is_on_segment_with_zero_tolerance() {
        let segments = [
            (p(0.0, 0.0), p(400.0, 0.0)),
            (p(13.7, -2.9), p(481.3, 377.1)),
            (p(-120.25, 33.3), p(0.1, -999.9)),
            (p(5.0, 5.0), p(5.0, 5.0)),
        ];
        for (a, b) in &segments {
            let mid = nalgebra::center(a, b);
            assert!(is_point_on_segment(&mid, a, b, 0.0), "{a} -> {b}");
        }
    }

    #[test]
    fn tolerance_absorbs_drawing_drift() {
        let a = p(0.0, 0.0);
        let b = p(300.0, 0.0);
        assert!(is_point_on_segment(&p(150.0, 0.8), &a, &b, 1.0));
        assert!(!is_point_on_segment(&p(150.0, 1.2), &a, &b, 1.0));
        // Past the end of the segment.
        assert!(!is_point_on_segment(&p(303.0, 0.0), &a, &b, 1.0));
    }

    #[test]
    fn degenerate_segment_compares_point_distance() {
        let a = p(10.0, 10.0);
        assert!(is_point_on_segment(&p(10.5, 10.0), &a, &a, 1.0));
        assert!(!is_point_on_segment(&p(12.0, 10.0), &a, &a, 1.0));
    }
}
