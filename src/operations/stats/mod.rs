mod params;
mod perimeter;
mod room_stats;
mod summary;

pub use params::{EdgeSampling, StatsParams, DEFAULT_MIN_ROOM_AREA};
pub use perimeter::{PerimeterBreakdown, PerimeterReducer};
pub use room_stats::{RoomStats, RoomStatsQuery};
pub use summary::{PlanSummary, PlanSummaryReport, RoomReport};
