use std::collections::BTreeSet;

use tracing::trace;

use super::{EdgeSampling, StatsParams};
use crate::math::distance_2d::is_point_on_segment;
use crate::math::polygon_2d::{
    is_point_in_polygon, is_point_on_boundary, polygon_edges, polygon_perimeter,
};
use crate::math::{Point2, TOLERANCE};
use crate::plan::{Shunt, Wall};

/// Centerline of a visible wall together with its snapping reach.
struct WallSpan {
    index: usize,
    start: Point2,
    end: Point2,
    reach: f64,
}

impl WallSpan {
    fn contains(&self, point: &Point2) -> bool {
        is_point_on_segment(point, &self.start, &self.end, self.reach)
    }

    /// `true` when the wall lies on the supporting line of `a → b` and
    /// overlaps the edge by more than its reach. Walls that only touch the
    /// edge at a corner do not run along it.
    fn runs_along(&self, a: &Point2, b: &Point2) -> bool {
        let d = b - a;
        let len_sq = d.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return false;
        }
        let len = len_sq.sqrt();
        let off_line = |p: &Point2| (d.x * (p.y - a.y) - d.y * (p.x - a.x)).abs() / len;
        if off_line(&self.start) > self.reach || off_line(&self.end) > self.reach {
            return false;
        }
        let t0 = (self.start - a).dot(&d) / len_sq;
        let t1 = (self.end - a).dot(&d) / len_sq;
        let overlap = t0.max(t1).min(1.0) - t0.min(t1).max(0.0);
        overlap * len > self.reach
    }
}

/// A room perimeter split by what backs it, in centimeters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerimeterBreakdown {
    /// Plain polygon perimeter.
    pub raw_perimeter: f64,
    /// Length of the edges that lie along a visible wall.
    pub wall_perimeter: f64,
    /// Exposed sides of shunts standing inside the room.
    pub column_perimeter: f64,
    /// Number of non-degenerate edges.
    pub edge_count: usize,
    /// Number of edges backed by a wall.
    pub matched_edges: usize,
    /// Indices into the wall slice of every visible wall running along at
    /// least one edge, in ascending order. An edge drawn across several
    /// collinear walls borders all of them.
    pub bordering_walls: Vec<usize>,
    /// `false` when the plan has no visible wall at all.
    pub has_walls: bool,
}

impl PerimeterBreakdown {
    /// Perimeter used for finishing materials.
    ///
    /// Without any visible wall in the plan the raw polygon perimeter stands
    /// in for the wall perimeter.
    #[must_use]
    pub fn total(&self) -> f64 {
        let base = if self.has_walls {
            self.wall_perimeter
        } else {
            self.raw_perimeter
        };
        base + self.column_perimeter
    }
}

/// Classifies the perimeter of a room polygon into wall and column parts.
///
/// Each polygon edge is sampled (see [`EdgeSampling`]) against every visible
/// wall; matched edges add their length to the wall perimeter, unmatched
/// edges (split lines with no real wall behind them) add nothing. Shunts
/// whose center lies inside the polygon add the length of the sides that
/// face into the room.
#[derive(Debug)]
pub struct PerimeterReducer<'a> {
    polygon: &'a [Point2],
    params: StatsParams,
}

impl<'a> PerimeterReducer<'a> {
    /// Creates a reducer for a room polygon in centimeters.
    #[must_use]
    pub fn new(polygon: &'a [Point2]) -> Self {
        Self {
            polygon,
            params: StatsParams::default(),
        }
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: StatsParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the reduction against the plan's walls and shunts.
    #[must_use]
    pub fn execute(&self, walls: &[Wall], shunts: &[Shunt]) -> PerimeterBreakdown {
        let spans: Vec<WallSpan> = walls
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_visible())
            .map(|(index, w)| {
                let (start, end) = w.segment();
                WallSpan {
                    index,
                    start,
                    end,
                    reach: self.params.tolerance + w.half_thickness(),
                }
            })
            .collect();

        let mut breakdown = PerimeterBreakdown {
            raw_perimeter: polygon_perimeter(self.polygon),
            has_walls: !spans.is_empty(),
            ..PerimeterBreakdown::default()
        };
        if self.polygon.len() < 3 {
            return breakdown;
        }

        let mut bordering = BTreeSet::new();
        for (a, b) in polygon_edges(self.polygon) {
            let length = nalgebra::distance(a, b);
            if length < TOLERANCE {
                continue;
            }
            breakdown.edge_count += 1;
            if self.is_backed(a, b, &spans) {
                breakdown.wall_perimeter += length;
                breakdown.matched_edges += 1;
            }
            bordering.extend(
                spans
                    .iter()
                    .filter(|s| s.runs_along(a, b))
                    .map(|s| s.index),
            );
        }
        breakdown.bordering_walls = bordering.into_iter().collect();

        breakdown.column_perimeter = shunts
            .iter()
            .map(|shunt| self.exposed_perimeter(shunt, &spans))
            .sum();

        breakdown
    }

    /// Returns `true` if the edge `a → b` lies along a wall.
    fn is_backed(&self, a: &Point2, b: &Point2, spans: &[WallSpan]) -> bool {
        let on_any = |p: &Point2| spans.iter().any(|s| s.contains(p));
        match self.params.sampling {
            EdgeSampling::Midpoint => on_any(&nalgebra::center(a, b)),
            EdgeSampling::MidpointAndEndpoints => {
                on_any(&nalgebra::center(a, b)) && on_any(a) && on_any(b)
            }
        }
    }

    /// Length of the shunt sides facing into the room.
    fn exposed_perimeter(&self, shunt: &Shunt, spans: &[WallSpan]) -> f64 {
        let polygon = self.polygon;
        let tolerance = self.params.tolerance;

        if !is_point_in_polygon(&shunt.center(), polygon) {
            return 0.0;
        }
        let anchored = shunt.corners().iter().any(|c| {
            is_point_in_polygon(c, polygon) || is_point_on_boundary(c, polygon, tolerance)
        });
        if !anchored {
            // The shunt encloses the room instead of standing inside it.
            trace!(shunt = %shunt.id, "shunt center inside room but no corner is");
            return 0.0;
        }

        let exposed: f64 = shunt
            .sides()
            .iter()
            .filter(|(a, b)| {
                let mid = nalgebra::center(a, b);
                is_point_in_polygon(&mid, polygon)
                    && !is_point_on_boundary(&mid, polygon, tolerance)
                    && !spans.iter().any(|s| s.contains(&mid))
            })
            .map(|(a, b)| nalgebra::distance(a, b))
            .sum();
        trace!(shunt = %shunt.id, exposed, "shunt inside room");
        exposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Point;
    use approx::assert_abs_diff_eq;

    /// 400 x 300 cm room with its minimum corner at the origin.
    fn room() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(400.0, 0.0),
            Point2::new(400.0, 300.0),
            Point2::new(0.0, 300.0),
        ]
    }

    fn wall(id: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Wall {
        Wall::new(id, Point::new(x0, y0), Point::new(x1, y1))
    }

    fn enclosing_walls() -> Vec<Wall> {
        vec![
            wall("south", 0.0, 0.0, 400.0, 0.0),
            wall("east", 400.0, 0.0, 400.0, 300.0),
            wall("north", 400.0, 300.0, 0.0, 300.0),
            wall("west", 0.0, 300.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn fully_backed_room() {
        let polygon = room();
        let walls = enclosing_walls();
        let b = PerimeterReducer::new(&polygon).execute(&walls, &[]);
        assert_abs_diff_eq!(b.wall_perimeter, 1400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.wall_perimeter, b.raw_perimeter, epsilon = 1e-9);
        assert_abs_diff_eq!(b.column_perimeter, 0.0);
        assert_eq!(b.matched_edges, 4);
        assert_eq!(b.bordering_walls, vec![0, 1, 2, 3]);
    }

    #[test]
    fn wall_drift_within_tolerance_still_matches() {
        let polygon = room();
        let walls = vec![
            wall("south", -5.0, 0.9, 405.0, 0.9),
            wall("east", 400.6, 0.0, 400.6, 300.0),
            wall("north", 400.0, 299.2, 0.0, 299.2),
            wall("west", -1.0, 300.0, -1.0, 0.0),
        ];
        let b = PerimeterReducer::new(&polygon).execute(&walls, &[]);
        assert_eq!(b.matched_edges, 4);
    }

    #[test]
    fn invisible_split_line_is_not_wall_perimeter() {
        let polygon = room();
        let mut walls = enclosing_walls();
        walls[0] = walls[0].clone().invisible();
        let b = PerimeterReducer::new(&polygon).execute(&walls, &[]);
        assert_abs_diff_eq!(b.wall_perimeter, 1000.0, epsilon = 1e-9);
        assert_eq!(b.bordering_walls, vec![1, 2, 3]);
        assert_abs_diff_eq!(b.total(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn unmatched_room_reports_zero_wall_perimeter() {
        let polygon = room();
        let walls = vec![wall("far", 1000.0, 1000.0, 1500.0, 1000.0)];
        let b = PerimeterReducer::new(&polygon).execute(&walls, &[]);
        assert!(b.has_walls);
        assert_eq!(b.matched_edges, 0);
        assert_abs_diff_eq!(b.wall_perimeter, 0.0);
        assert_abs_diff_eq!(b.total(), 0.0);
    }

    #[test]
    fn no_walls_falls_back_to_raw_perimeter() {
        let polygon = room();
        let b = PerimeterReducer::new(&polygon).execute(&[], &[]);
        assert!(!b.has_walls);
        assert_abs_diff_eq!(b.wall_perimeter, 0.0);
        assert_abs_diff_eq!(b.total(), 1400.0, epsilon = 1e-9);
    }

    #[test]
    fn freestanding_column_adds_full_perimeter() {
        let polygon = room();
        let shunts = [Shunt::new("c1", 185.0, 135.0, 30.0, 30.0)];
        let b = PerimeterReducer::new(&polygon).execute(&enclosing_walls(), &shunts);
        assert_abs_diff_eq!(b.column_perimeter, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.total(), 1520.0, epsilon = 1e-9);
    }

    #[test]
    fn wall_adjacent_shunt_adds_exposed_sides_only() {
        let polygon = room();
        // Flush against the west edge: the west side is hidden.
        let shunts = [Shunt::new("duct", 0.0, 100.0, 30.0, 40.0)];
        let b = PerimeterReducer::new(&polygon).execute(&enclosing_walls(), &shunts);
        assert_abs_diff_eq!(b.column_perimeter, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn shunt_against_thick_wall_face() {
        let polygon = room();
        let mut walls = enclosing_walls();
        walls[3] = walls[3].clone().with_thickness(20.0);
        // Touches the inner face of the 20 cm west wall at x = 10.
        let shunts = [Shunt::new("c1", 10.0, 100.0, 30.0, 30.0)];
        let b = PerimeterReducer::new(&polygon).execute(&walls, &shunts);
        assert_abs_diff_eq!(b.column_perimeter, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn shunt_outside_room_is_ignored() {
        let polygon = room();
        let shunts = [Shunt::new("c1", 500.0, 100.0, 30.0, 30.0)];
        let b = PerimeterReducer::new(&polygon).execute(&enclosing_walls(), &shunts);
        assert_abs_diff_eq!(b.column_perimeter, 0.0);
    }

    #[test]
    fn shunt_enclosing_room_is_ignored() {
        let polygon = room();
        let shunts = [Shunt::new("slab", -100.0, -100.0, 600.0, 500.0)];
        let b = PerimeterReducer::new(&polygon).execute(&enclosing_walls(), &shunts);
        assert_abs_diff_eq!(b.column_perimeter, 0.0);
    }

    #[test]
    fn strict_sampling_requires_endpoints_on_walls() {
        let polygon = room();
        // Covers the midpoint of the south edge but stops 100 cm short.
        let walls = vec![wall("partial", 0.0, 0.0, 300.0, 0.0)];

        let loose = PerimeterReducer::new(&polygon).execute(&walls, &[]);
        assert_abs_diff_eq!(loose.wall_perimeter, 400.0, epsilon = 1e-9);

        let params = StatsParams::default().with_sampling(EdgeSampling::MidpointAndEndpoints);
        let strict = PerimeterReducer::new(&polygon)
            .with_params(params)
            .execute(&walls, &[]);
        assert_abs_diff_eq!(strict.wall_perimeter, 0.0);
    }

    #[test]
    fn edge_split_across_collinear_walls_borders_all_of_them() {
        let polygon = vec![
            Point2::new(0.0, 0.0),
            Point2::new(900.0, 0.0),
            Point2::new(900.0, 300.0),
            Point2::new(0.0, 300.0),
        ];
        let walls = vec![
            wall("s1", 0.0, 0.0, 300.0, 0.0),
            wall("s2", 300.0, 0.0, 600.0, 0.0),
            wall("s3", 600.0, 0.0, 900.0, 0.0),
            wall("e", 900.0, 0.0, 900.0, 300.0),
            // Runs past both ends of the north edge.
            wall("n", 1000.0, 300.0, -100.0, 300.0),
            wall("w", 0.0, 300.0, 0.0, 0.0),
            // Collinear with the north edge but only touches its corner.
            wall("next", 900.0, 300.0, 1200.0, 300.0),
        ];
        let b = PerimeterReducer::new(&polygon).execute(&walls, &[]);
        assert_eq!(b.matched_edges, 4);
        assert_abs_diff_eq!(b.wall_perimeter, 2400.0, epsilon = 1e-9);
        assert_eq!(b.bordering_walls, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn perpendicular_wall_at_corner_does_not_border() {
        let polygon = room();
        let mut walls = enclosing_walls();
        // Continues the east wall southwards, away from the room.
        walls.push(wall("spur", 400.0, 0.0, 400.0, -250.0));
        let b = PerimeterReducer::new(&polygon).execute(&walls, &[]);
        assert_eq!(b.bordering_walls, vec![0, 1, 2, 3]);
    }

    #[test]
    fn duplicate_vertices_are_skipped() {
        let mut polygon = room();
        polygon.insert(1, Point2::new(0.0, 0.0));
        let b = PerimeterReducer::new(&polygon).execute(&enclosing_walls(), &[]);
        assert_eq!(b.edge_count, 4);
        assert_abs_diff_eq!(b.wall_perimeter, 1400.0, epsilon = 1e-9);
    }
}
