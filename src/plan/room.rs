use serde::{Deserialize, Serialize};

use super::Point;
use crate::math::Point2;

/// A room as drawn in the editor.
///
/// The polygon is implicitly closed. `area` and `perimeter` are values the
/// editor may have precomputed; derived statistics are always recomputed
/// from the polygon when it is well formed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-text room type as typed or picked in the editor.
    #[serde(rename = "type", default)]
    pub room_type: String,
    #[serde(default)]
    pub polygon: Vec<Point>,
    /// Editor-side area in m².
    #[serde(default)]
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Ids of the walls bounding this room.
    #[serde(default)]
    pub wall_ids: Vec<String>,
    /// Editor-side perimeter in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perimeter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_ceramic_floor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_ceramic_walls: Option<bool>,
}

impl Room {
    /// Creates a room from a name, a type string and polygon vertices.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        room_type: impl Into<String>,
        polygon: Vec<Point>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_type: room_type.into(),
            polygon,
            ..Self::default()
        }
    }

    /// Creates an axis-aligned rectangular room with its minimum corner at
    /// `(x, y)`.
    #[must_use]
    pub fn rectangle(
        id: impl Into<String>,
        room_type: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        depth: f64,
    ) -> Self {
        Self::new(
            id,
            "",
            room_type,
            vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + depth),
                Point::new(x, y + depth),
            ],
        )
    }

    /// Polygon vertices as computation points.
    #[must_use]
    pub fn polygon_points(&self) -> Vec<Point2> {
        self.polygon.iter().map(Point2::from).collect()
    }

    /// A polygon needs at least three vertices.
    #[must_use]
    pub fn has_valid_polygon(&self) -> bool {
        self.polygon.len() >= 3
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_editor_room() {
        let room: Room = serde_json::from_value(serde_json::json!({
            "id": "r1",
            "name": "Baño principal",
            "type": "bano",
            "polygon": [{"x": 0, "y": 0}, {"x": 200, "y": 0}, {"x": 200, "y": 150}],
            "area": 1.5,
            "color": "#aaccee",
            "wallIds": ["w1", "w2"],
            "hasCeramicWalls": false
        }))
        .unwrap();
        assert_eq!(room.room_type, "bano");
        assert_eq!(room.wall_ids, vec!["w1", "w2"]);
        assert_eq!(room.has_ceramic_floor, None);
        assert_eq!(room.has_ceramic_walls, Some(false));
        assert!(room.has_valid_polygon());
    }

    #[test]
    fn rectangle_has_four_vertices() {
        let room = Room::rectangle("r1", "salon", 0.0, 0.0, 400.0, 300.0);
        assert_eq!(room.polygon_points().len(), 4);
        assert!(!Room::new("r2", "", "", vec![Point::new(0.0, 0.0)]).has_valid_polygon());
    }
}
