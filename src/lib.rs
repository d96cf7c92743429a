pub mod error;
pub mod format;
pub mod math;
pub mod operations;
pub mod plan;

pub use error::{PlanoError, Result};
pub use operations::mapping::{CalculatorRoom, MapEditorRooms};
pub use operations::stats::{RoomStats, RoomStatsQuery};

use plan::{FloorPlanData, Room, Shunt, Wall};

/// Computes [`RoomStats`] for one room with default parameters.
#[must_use]
pub fn calculate_room_stats(room: &Room, walls: &[Wall], shunts: &[Shunt]) -> RoomStats {
    RoomStatsQuery::new(room).execute(walls, shunts)
}

/// Maps editor rooms to calculator rooms with default parameters.
///
/// # Errors
///
/// Returns an error if the plan's ceiling height is out of range.
pub fn map_editor_rooms_to_calculator(
    data: &FloorPlanData,
    is_before: bool,
) -> Result<Vec<CalculatorRoom>> {
    MapEditorRooms::new(data, is_before).execute()
}
