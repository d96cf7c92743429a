use super::distance_2d::is_point_on_segment;
use super::{Point2, CM2_PER_M2};

/// Iterates over the edges of a closed polygon, including the wrap-around
/// edge from the last vertex back to the first.
pub fn polygon_edges(points: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> {
    let n = points.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| (&points[i], &points[(i + 1) % n]))
}

/// Computes the signed area of a polygon (shoelace formula), in the squared
/// unit of the input coordinates.
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let sum: f64 = polygon_edges(points)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    sum * 0.5
}

/// Unsigned polygon area in cm², independent of winding order.
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    signed_area(points).abs()
}

/// Unsigned polygon area converted from cm² to m².
#[must_use]
pub fn polygon_area_m2(points: &[Point2]) -> f64 {
    polygon_area(points) / CM2_PER_M2
}

/// Sum of edge lengths of a closed polygon, in cm.
#[must_use]
pub fn polygon_perimeter(points: &[Point2]) -> f64 {
    polygon_edges(points)
        .map(|(a, b)| nalgebra::distance(a, b))
        .sum()
}

/// Ray-casting (even-odd) point-in-polygon test.
///
/// Points exactly on the boundary may be classified either way.
#[must_use]
pub fn is_point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Returns `true` if `point` lies within `tolerance` of any polygon edge.
#[must_use]
pub fn is_point_on_boundary(point: &Point2, polygon: &[Point2], tolerance: f64) -> bool {
    polygon_edges(polygon).any(|(a, b)| is_point_on_segment(point, a, b, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    fn l_shape() -> Vec<Point2> {
        vec![
            p(0.0, 0.0),
            p(600.0, 0.0),
            p(600.0, 250.0),
            p(350.0, 250.0),
            p(350.0, 480.0),
            p(0.0, 480.0),
        ]
    }

    #[test]
    fn signed_area_follows_winding() {
        let ccw = square();
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert_abs_diff_eq!(signed_area(&ccw), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_area(&cw), -100.0, epsilon = 1e-12);
    }

    #[test]
    fn area_is_winding_invariant() {
        for poly in [square(), l_shape()] {
            let reversed: Vec<Point2> = poly.iter().rev().copied().collect();
            assert_abs_diff_eq!(polygon_area(&poly), polygon_area(&reversed), epsilon = 1e-9);
        }
    }

    #[test]
    fn area_in_square_meters() {
        let room = vec![p(0.0, 0.0), p(400.0, 0.0), p(400.0, 300.0), p(0.0, 300.0)];
        assert_abs_diff_eq!(polygon_area_m2(&room), 12.0, epsilon = 1e-12);
        // 600x480 minus the 250x230 notch.
        assert_abs_diff_eq!(polygon_area_m2(&l_shape()), 28.8 - 5.75, epsilon = 1e-9);
    }

    #[test]
    fn area_degenerate() {
        assert_abs_diff_eq!(polygon_area(&[p(0.0, 0.0), p(5.0, 5.0)]), 0.0);
        assert_abs_diff_eq!(polygon_area(&[]), 0.0);
    }

    #[test]
    fn perimeter_wraps_last_to_first() {
        assert_abs_diff_eq!(polygon_perimeter(&square()), 40.0, epsilon = 1e-12);
        assert_abs_diff_eq!(polygon_perimeter(&l_shape()), 2160.0, epsilon = 1e-9);
        assert_abs_diff_eq!(polygon_perimeter(&[p(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn perimeter_bounded_by_longest_edge() {
        for poly in [square(), l_shape()] {
            let longest = polygon_edges(&poly)
                .map(|(a, b)| nalgebra::distance(a, b))
                .fold(0.0, f64::max);
            assert!(polygon_perimeter(&poly) >= 2.0 * longest);
        }
    }

    #[test]
    fn point_in_square() {
        let sq = square();
        assert!(is_point_in_polygon(&p(5.0, 5.0), &sq));
        assert!(!is_point_in_polygon(&p(15.0, 5.0), &sq));
        // Boundary classification is unspecified; it only must not panic.
        let _ = is_point_in_polygon(&p(5.0, 0.0), &sq);
    }

    #[test]
    fn point_in_concave_polygon() {
        let poly = l_shape();
        assert!(is_point_in_polygon(&p(100.0, 400.0), &poly));
        assert!(is_point_in_polygon(&p(500.0, 100.0), &poly));
        // Inside the notch.
        assert!(!is_point_in_polygon(&p(500.0, 400.0), &poly));
    }

    #[test]
    fn point_in_degenerate_polygon() {
        assert!(!is_point_in_polygon(&p(0.0, 0.0), &[p(0.0, 0.0), p(1.0, 1.0)]));
    }

    #[test]
    fn boundary_detection() {
        let sq = square();
        assert!(is_point_on_boundary(&p(5.0, 0.2), &sq, 0.5));
        assert!(is_point_on_boundary(&p(0.0, 10.0), &sq, 0.0));
        assert!(!is_point_on_boundary(&p(5.0, 5.0), &sq, 0.5));
    }
}
