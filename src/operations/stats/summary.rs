use serde::Serialize;
use tracing::{debug, warn};

use super::{RoomStats, RoomStatsQuery, StatsParams};
use crate::error::Result;
use crate::math::CM_PER_M;
use crate::plan::{FloorPlanData, Opening};

/// Statistics of one reported room.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomReport {
    pub id: String,
    pub name: String,
    pub stats: RoomStats,
}

/// Whole-plan totals, as shown in summary tables and PDF exports.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummaryReport {
    pub rooms: Vec<RoomReport>,
    /// Ids of rooms below the materiality threshold.
    pub skipped_rooms: Vec<String>,
    /// Ids of reported rooms with no edge backed by a wall.
    pub low_confidence_rooms: Vec<String>,
    pub total_area: f64,
    pub total_wall_perimeter: f64,
    pub total_column_perimeter: f64,
    pub total_perimeter: f64,
    /// Length of visible walls (m).
    pub wall_length: f64,
    /// Wall surface of the reported rooms up to the ceiling (m²).
    pub wall_surface: f64,
    pub door_count: usize,
    pub window_count: usize,
}

/// Summarizes every room of a plan.
#[derive(Debug)]
pub struct PlanSummary<'a> {
    data: &'a FloorPlanData,
    params: StatsParams,
}

impl<'a> PlanSummary<'a> {
    /// Creates a new summary with default parameters.
    #[must_use]
    pub fn new(data: &'a FloorPlanData) -> Self {
        Self {
            data,
            params: StatsParams::default(),
        }
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: StatsParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the summary.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the parameters or the
    /// plan's ceiling height are out of range.
    pub fn execute(&self) -> Result<PlanSummaryReport> {
        self.params.validate()?;
        self.data.validate()?;

        let data = self.data;
        let mut report = PlanSummaryReport {
            wall_length: data.visible_wall_length() / CM_PER_M,
            door_count: self.attached(&data.doors, "door"),
            window_count: self.attached(&data.windows, "window"),
            ..PlanSummaryReport::default()
        };

        for room in &data.rooms {
            let stats = RoomStatsQuery::new(room)
                .with_params(self.params)
                .execute(&data.walls, &data.shunts);

            if stats.area < self.params.min_room_area {
                debug!(
                    room = %room.id,
                    area = stats.area,
                    "skipping room below materiality threshold"
                );
                report.skipped_rooms.push(room.id.clone());
                continue;
            }
            if stats.is_low_confidence() {
                report.low_confidence_rooms.push(room.id.clone());
            }

            report.total_area += stats.area;
            report.total_wall_perimeter += stats.wall_perimeter;
            report.total_column_perimeter += stats.column_perimeter;
            report.total_perimeter += stats.total_perimeter;
            report.wall_surface += stats.wall_surface(data.ceiling_height);

            let name = if room.name.is_empty() {
                room.room_type.clone()
            } else {
                room.name.clone()
            };
            report.rooms.push(RoomReport {
                id: room.id.clone(),
                name,
                stats,
            });
        }

        Ok(report)
    }

    /// Counts openings attached to an existing wall.
    fn attached(&self, openings: &[Opening], kind: &str) -> usize {
        openings
            .iter()
            .filter(|o| {
                let found = self.data.wall(&o.wall_id).is_some();
                if !found {
                    warn!(
                        opening = %o.id,
                        wall = %o.wall_id,
                        kind,
                        "opening references an unknown wall"
                    );
                }
                found
            })
            .count()
    }
}
