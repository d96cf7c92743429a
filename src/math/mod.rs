pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type. Plan coordinates are expressed in centimeters.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for degeneracy checks (cm).
pub const TOLERANCE: f64 = 1e-9;

/// Default snapping distance used when matching room edges against walls (cm).
pub const DEFAULT_SNAP_TOLERANCE: f64 = 1.5;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Square centimeters per square meter.
pub const CM2_PER_M2: f64 = 10_000.0;
