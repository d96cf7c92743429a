use serde::{Deserialize, Serialize};

use super::{Opening, Room, Shunt, Wall};
use crate::error::{GeometryError, Result};

/// Ceiling height assumed when the editor did not store one (m).
pub const DEFAULT_CEILING_HEIGHT: f64 = 2.5;

fn default_ceiling_height() -> f64 {
    DEFAULT_CEILING_HEIGHT
}

/// Which state of the renovation a plan describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Existing layout, used for demolition.
    Before,
    /// Proposed layout after the renovation.
    After,
}

impl PlanType {
    #[must_use]
    pub fn from_is_before(is_before: bool) -> Self {
        if is_before {
            Self::Before
        } else {
            Self::After
        }
    }

    #[must_use]
    pub fn is_before(self) -> bool {
        self == Self::Before
    }
}

/// The geometric payload of a floor plan.
///
/// `rooms` and `walls` are required; the remaining collections default to
/// empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanData {
    pub rooms: Vec<Room>,
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub doors: Vec<Opening>,
    #[serde(default)]
    pub windows: Vec<Opening>,
    #[serde(default)]
    pub shunts: Vec<Shunt>,
    /// Ceiling height in meters.
    #[serde(default = "default_ceiling_height")]
    pub ceiling_height: f64,
}

impl Default for FloorPlanData {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            shunts: Vec::new(),
            ceiling_height: DEFAULT_CEILING_HEIGHT,
        }
    }
}

impl FloorPlanData {
    /// Parses an editor payload.
    ///
    /// # Errors
    ///
    /// Returns `PlanoError::InvalidArgument` if the payload is not valid JSON,
    /// if `rooms` or `walls` is missing or `null`, or if the ceiling height is
    /// not a positive finite number.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks the plan-wide scalar fields.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` for a non-positive or
    /// non-finite ceiling height.
    pub fn validate(&self) -> Result<()> {
        if !self.ceiling_height.is_finite() || self.ceiling_height <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "ceiling_height",
                value: self.ceiling_height,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            }
            .into());
        }
        Ok(())
    }

    /// Looks up a wall by id.
    #[must_use]
    pub fn wall(&self, id: &str) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    /// Total length of visible walls in centimeters. Invisible helper lines
    /// are excluded.
    #[must_use]
    pub fn visible_wall_length(&self) -> f64 {
        self.walls
            .iter()
            .filter(|w| w.is_visible())
            .map(Wall::length)
            .sum()
    }
}

/// A stored floor plan as fetched from persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlanDocument {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub data: FloorPlanData,
}
