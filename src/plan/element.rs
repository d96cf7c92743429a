use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A serialized plan point, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<&Point> for Point2 {
    fn from(p: &Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// A structural or partition wall drawn as a centerline segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: String,
    pub start: Point,
    pub end: Point,
    /// Wall thickness in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Helper lines (e.g. room splits) that are not real construction.
    #[serde(default)]
    pub is_invisible: bool,
}

impl Wall {
    /// Creates a visible wall without explicit thickness.
    #[must_use]
    pub fn new(id: impl Into<String>, start: Point, end: Point) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            thickness: None,
            is_invisible: false,
        }
    }

    /// Sets the wall thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Marks the wall as an invisible helper line.
    #[must_use]
    pub fn invisible(mut self) -> Self {
        self.is_invisible = true;
        self
    }

    /// Returns `true` for walls that represent real construction.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.is_invisible
    }

    /// Returns the centerline as a pair of points.
    #[must_use]
    pub fn segment(&self) -> (Point2, Point2) {
        (self.start.into(), self.end.into())
    }

    /// Centerline length in centimeters.
    #[must_use]
    pub fn length(&self) -> f64 {
        let (a, b) = self.segment();
        nalgebra::distance(&a, &b)
    }

    /// Half of the wall thickness, or zero when unknown or invalid.
    #[must_use]
    pub fn half_thickness(&self) -> f64 {
        self.thickness
            .filter(|t| t.is_finite() && *t > 0.0)
            .map_or(0.0, |t| t * 0.5)
    }
}

/// Opening variant of a door or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenType {
    #[default]
    Single,
    Double,
    Sliding,
}

/// A door or window placed on a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    pub id: String,
    pub wall_id: String,
    /// Opening width in centimeters.
    pub width: f64,
    #[serde(default)]
    pub open_type: OpenType,
}

impl Opening {
    #[must_use]
    pub fn new(id: impl Into<String>, wall_id: impl Into<String>, width: f64) -> Self {
        Self {
            id: id.into(),
            wall_id: wall_id.into(),
            width,
            open_type: OpenType::Single,
        }
    }

    #[must_use]
    pub fn with_open_type(mut self, open_type: OpenType) -> Self {
        self.open_type = open_type;
        self
    }
}

/// An axis-aligned column or service duct.
///
/// `(x, y)` is the minimum corner; `width` extends along x and `height`
/// along y, all in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shunt {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Shunt {
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Corners in counter-clockwise order starting at the minimum corner.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        [
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ]
    }

    /// The four sides as `(start, end)` pairs.
    #[must_use]
    pub fn sides(&self) -> [(Point2, Point2); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// Full rectangle perimeter in centimeters.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width.abs() + self.height.abs())
    }
}
