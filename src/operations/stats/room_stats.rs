use serde::Serialize;
use tracing::{debug, warn};

use super::{PerimeterBreakdown, PerimeterReducer, StatsParams};
use crate::math::polygon_2d::polygon_area_m2;
use crate::math::CM_PER_M;
use crate::plan::{Room, Shunt, Wall};

/// Derived statistics of one room. Areas are in m², lengths in m.
///
/// Never stored: recompute from the current geometry on every read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub area: f64,
    pub wall_perimeter: f64,
    pub column_perimeter: f64,
    pub total_perimeter: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_ceramic_floor: Option<bool>,
    /// Length of tiled wall, present when the room has ceramic walls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceramic_wall_length: Option<f64>,
    /// The plan has visible walls but none backs an edge of this room.
    pub low_confidence: bool,
}

impl RoomStats {
    /// `true` when the plan has visible walls but no edge of the room
    /// matched one. Plans without walls and malformed polygons are not
    /// flagged.
    #[must_use]
    pub fn is_low_confidence(&self) -> bool {
        self.low_confidence
    }

    /// Wall surface to finish for the given ceiling height (m²).
    #[must_use]
    pub fn wall_surface(&self, ceiling_height: f64) -> f64 {
        self.total_perimeter * ceiling_height
    }
}

/// Computes [`RoomStats`] for a room against the plan's walls and shunts.
#[derive(Debug)]
pub struct RoomStatsQuery<'a> {
    room: &'a Room,
    params: StatsParams,
}

impl<'a> RoomStatsQuery<'a> {
    /// Creates a new query with default parameters.
    #[must_use]
    pub fn new(room: &'a Room) -> Self {
        Self {
            room,
            params: StatsParams::default(),
        }
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: StatsParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// A polygon with fewer than three vertices yields zeroed stats.
    #[must_use]
    pub fn execute(&self, walls: &[Wall], shunts: &[Shunt]) -> RoomStats {
        self.evaluate(walls, shunts).0
    }

    /// Executes the query and also returns the perimeter breakdown, or
    /// `None` in its place for a malformed polygon.
    pub(crate) fn evaluate(
        &self,
        walls: &[Wall],
        shunts: &[Shunt],
    ) -> (RoomStats, Option<PerimeterBreakdown>) {
        let room = self.room;
        if !room.has_valid_polygon() {
            warn!(
                room = %room.id,
                vertices = room.polygon.len(),
                "room polygon needs at least 3 vertices, reporting zeroed stats"
            );
            return (RoomStats::default(), None);
        }

        let polygon = room.polygon_points();
        let breakdown = PerimeterReducer::new(&polygon)
            .with_params(self.params)
            .execute(walls, shunts);

        let total_perimeter = breakdown.total() / CM_PER_M;
        let stats = RoomStats {
            area: polygon_area_m2(&polygon),
            wall_perimeter: breakdown.wall_perimeter / CM_PER_M,
            column_perimeter: breakdown.column_perimeter / CM_PER_M,
            total_perimeter,
            has_ceramic_floor: room.has_ceramic_floor,
            ceramic_wall_length: room
                .has_ceramic_walls
                .and_then(|ceramic| ceramic.then_some(total_perimeter)),
            low_confidence: breakdown.has_walls && breakdown.matched_edges == 0,
        };
        debug!(
            room = %room.id,
            area = stats.area,
            wall = stats.wall_perimeter,
            column = stats.column_perimeter,
            matched = breakdown.matched_edges,
            edges = breakdown.edge_count,
            "room stats"
        );
        (stats, Some(breakdown))
    }
}
