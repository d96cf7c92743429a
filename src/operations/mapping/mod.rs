//! Editor plan → cost-calculator rooms.

mod materials;
mod naming;
mod openings;
mod room_type;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use materials::{
    default_materials, resolve_materials, FloorMaterial, RoomMaterials, WallMaterial,
};
pub use naming::RoomNamer;
pub use openings::{count_openings, OpeningCounts};
pub use room_type::{normalize_room_type, NormalizedType, RoomType};

use super::stats::{RoomStatsQuery, StatsParams};
use crate::error::Result;
use crate::plan::{FloorPlanData, FloorPlanDocument, Opening, PlanType};

/// What to do with a room where no door was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorFallback {
    /// Assume one door for every room except terraces and balconies.
    #[default]
    MinimumOne,
    /// Report the detected count as is.
    Disabled,
}

/// Parameters for [`MapEditorRooms`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MappingParams {
    pub stats: StatsParams,
    pub door_fallback: DoorFallback,
}

/// A room in the shape the cost calculator consumes.
///
/// Areas are in m², lengths in m.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRoom {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    pub area: f64,
    pub perimeter: f64,
    pub wall_perimeter: f64,
    pub column_perimeter: f64,
    /// `perimeter × ceiling height`.
    pub wall_area: f64,
    pub materials: RoomMaterials,
    /// Doors including an inferred one, see `inferred_door`.
    pub doors: u32,
    /// Detected doors per variant.
    pub door_types: OpeningCounts,
    pub windows: u32,
    /// The door count was raised to one by [`DoorFallback::MinimumOne`].
    pub inferred_door: bool,
    /// No polygon edge matched a wall although the plan has walls.
    pub low_confidence: bool,
}

/// Translates editor rooms into calculator rooms for one plan state.
#[derive(Debug)]
pub struct MapEditorRooms<'a> {
    data: &'a FloorPlanData,
    plan_type: PlanType,
    params: MappingParams,
}

impl<'a> MapEditorRooms<'a> {
    /// Creates a mapping for the before (`true`) or after (`false`) state.
    #[must_use]
    pub fn new(data: &'a FloorPlanData, is_before: bool) -> Self {
        Self {
            data,
            plan_type: PlanType::from_is_before(is_before),
            params: MappingParams::default(),
        }
    }

    /// Creates a mapping for a stored document.
    #[must_use]
    pub fn for_document(document: &'a FloorPlanDocument, plan_type: PlanType) -> Self {
        Self::new(&document.data, plan_type.is_before())
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: MappingParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the mapping. Rooms below the materiality threshold are
    /// dropped before naming.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the parameters or the
    /// plan's ceiling height are out of range.
    pub fn execute(&self) -> Result<Vec<CalculatorRoom>> {
        self.params.stats.validate()?;
        self.data.validate()?;

        let data = self.data;
        let known_walls: BTreeSet<&str> = data.walls.iter().map(|w| w.id.as_str()).collect();
        warn_orphans(&data.doors, &known_walls, "door");
        warn_orphans(&data.windows, &known_walls, "window");

        let mut namer = RoomNamer::new();
        let mut mapped = Vec::with_capacity(data.rooms.len());

        for room in &data.rooms {
            let (stats, breakdown) = RoomStatsQuery::new(room)
                .with_params(self.params.stats)
                .evaluate(&data.walls, &data.shunts);

            // Editor values only stand in when the polygon is unusable.
            let (area, perimeter) = match &breakdown {
                Some(_) => (stats.area, stats.total_perimeter),
                None => (room.area, room.perimeter.unwrap_or(0.0)),
            };
            if area < self.params.stats.min_room_area {
                debug!(room = %room.id, area, "skipping room below materiality threshold");
                continue;
            }

            let type_text = if room.room_type.trim().is_empty() {
                room.name.as_str()
            } else {
                room.room_type.as_str()
            };
            let normalized = normalize_room_type(type_text);
            let name = namer.name(room, &normalized);

            let room_walls: Vec<&str> = if !room.wall_ids.is_empty() {
                room.wall_ids.iter().map(String::as_str).collect()
            } else {
                breakdown
                    .as_ref()
                    .map(|b| {
                        b.bordering_walls
                            .iter()
                            .map(|&i| data.walls[i].id.as_str())
                            .collect()
                    })
                    .unwrap_or_default()
            };
            let door_types = count_openings(&data.doors, &room_walls, &known_walls);
            let windows = count_openings(&data.windows, &room_walls, &known_walls).total();

            let mut doors = door_types.total();
            let inferred_door = self.params.door_fallback == DoorFallback::MinimumOne
                && doors == 0
                && normalized.room_type != RoomType::Terraza;
            if inferred_door {
                debug!(room = %room.id, "no door found, assuming one");
                doors = 1;
            }

            mapped.push(CalculatorRoom {
                id: room.id.clone(),
                name,
                room_type: normalized.room_type,
                custom_type: normalized.custom_label,
                area,
                perimeter,
                wall_perimeter: stats.wall_perimeter,
                column_perimeter: stats.column_perimeter,
                wall_area: perimeter * data.ceiling_height,
                materials: resolve_materials(
                    normalized.room_type,
                    self.plan_type,
                    room.has_ceramic_floor,
                    room.has_ceramic_walls,
                ),
                doors,
                door_types,
                windows,
                inferred_door,
                low_confidence: stats.is_low_confidence(),
            });
        }

        Ok(mapped)
    }
}

fn warn_orphans(openings: &[Opening], known_walls: &BTreeSet<&str>, kind: &str) {
    for opening in openings
        .iter()
        .filter(|o| !known_walls.contains(o.wall_id.as_str()))
    {
        warn!(
            opening = %opening.id,
            wall = %opening.wall_id,
            kind,
            "opening references an unknown wall"
        );
    }
}
