//! Editor-format floor plan data.
//!
//! These types mirror the payload the floor-plan editor persists: walls,
//! openings attached to walls, shunts and room polygons. Coordinates and
//! lengths are in centimeters; the ceiling height is in meters.

mod document;
mod element;
mod room;

pub use document::{FloorPlanData, FloorPlanDocument, PlanType, DEFAULT_CEILING_HEIGHT};
pub use element::{OpenType, Opening, Point, Shunt, Wall};
pub use room::Room;
