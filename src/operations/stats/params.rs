use serde::Deserialize;

use crate::error::{GeometryError, Result};
use crate::math::DEFAULT_SNAP_TOLERANCE;

/// Rooms below this area (m²) are treated as drawing artifacts.
pub const DEFAULT_MIN_ROOM_AREA: f64 = 1.0;

/// Which points of a room edge must lie on a wall for the edge to count as
/// wall perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSampling {
    /// Only the edge midpoint is tested.
    #[default]
    Midpoint,
    /// The midpoint and both endpoints must each lie on a wall.
    MidpointAndEndpoints,
}

/// Parameters for room statistics.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsParams {
    /// Snapping distance between room edges and walls, in centimeters.
    pub tolerance: f64,
    /// Edge sampling policy.
    pub sampling: EdgeSampling,
    /// Materiality threshold in m²; smaller rooms are not reported.
    pub min_room_area: f64,
}

impl Default for StatsParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SNAP_TOLERANCE,
            sampling: EdgeSampling::Midpoint,
            min_room_area: DEFAULT_MIN_ROOM_AREA,
        }
    }
}

impl StatsParams {
    /// Sets the snapping tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the edge sampling policy.
    #[must_use]
    pub fn with_sampling(mut self, sampling: EdgeSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Checks that tolerance and threshold are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` for the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("tolerance", self.tolerance),
            ("min_room_area", self.min_room_area),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: f64::MAX,
                }
                .into());
            }
        }
        Ok(())
    }
}
