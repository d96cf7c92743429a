use serde::Serialize;

use super::RoomType;
use crate::plan::PlanType;

/// Floor finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorMaterial {
    Ceramica,
    Madera,
    Parquet,
}

/// Wall finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WallMaterial {
    Ceramica,
    Pintura,
    /// Re-plastered and painted.
    AlisadoPintura,
    /// No finish (open-air walls).
    Ninguno,
}

/// Finish materials of a room and whether existing finishes are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMaterials {
    pub floor: FloorMaterial,
    pub walls: WallMaterial,
    pub remove_floor: bool,
    pub remove_walls: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Wet,
    Dry,
    Outdoor,
}

const CATEGORIES: &[(RoomType, Category)] = &[
    (RoomType::Bano, Category::Wet),
    (RoomType::Cocina, Category::Wet),
    (RoomType::Terraza, Category::Outdoor),
];

const fn materials(
    floor: FloorMaterial,
    walls: WallMaterial,
    remove_floor: bool,
    remove_walls: bool,
) -> RoomMaterials {
    RoomMaterials {
        floor,
        walls,
        remove_floor,
        remove_walls,
    }
}

const DEFAULTS: &[(Category, PlanType, RoomMaterials)] = &[
    (
        Category::Wet,
        PlanType::Before,
        materials(FloorMaterial::Ceramica, WallMaterial::Ceramica, true, true),
    ),
    (
        Category::Wet,
        PlanType::After,
        materials(FloorMaterial::Ceramica, WallMaterial::Ceramica, false, false),
    ),
    (
        Category::Dry,
        PlanType::Before,
        materials(FloorMaterial::Madera, WallMaterial::Pintura, false, false),
    ),
    (
        Category::Dry,
        PlanType::After,
        materials(FloorMaterial::Parquet, WallMaterial::AlisadoPintura, false, false),
    ),
    (
        Category::Outdoor,
        PlanType::Before,
        materials(FloorMaterial::Ceramica, WallMaterial::Ninguno, true, false),
    ),
    (
        Category::Outdoor,
        PlanType::After,
        materials(FloorMaterial::Ceramica, WallMaterial::Ninguno, false, false),
    ),
];

fn category(room_type: RoomType) -> Category {
    CATEGORIES
        .iter()
        .find(|(t, _)| *t == room_type)
        .map_or(Category::Dry, |&(_, c)| c)
}

fn lookup(category: Category, plan_type: PlanType) -> RoomMaterials {
    DEFAULTS
        .iter()
        .find(|(c, p, _)| *c == category && *p == plan_type)
        .map_or(
            materials(FloorMaterial::Madera, WallMaterial::Pintura, false, false),
            |&(_, _, m)| m,
        )
}

/// Type-based default finishes for a room in the given plan state.
#[must_use]
pub fn default_materials(room_type: RoomType, plan_type: PlanType) -> RoomMaterials {
    lookup(category(room_type), plan_type)
}

/// Default finishes with the editor's explicit ceramic flags applied.
///
/// `Some(true)` forces ceramic (removed in the before state), `Some(false)`
/// forces the dry-room finish, `None` keeps the type default.
#[must_use]
pub fn resolve_materials(
    room_type: RoomType,
    plan_type: PlanType,
    has_ceramic_floor: Option<bool>,
    has_ceramic_walls: Option<bool>,
) -> RoomMaterials {
    let mut resolved = default_materials(room_type, plan_type);
    let dry = lookup(Category::Dry, plan_type);
    let remove_ceramic = plan_type.is_before();

    match has_ceramic_floor {
        Some(true) => {
            resolved.floor = FloorMaterial::Ceramica;
            resolved.remove_floor = remove_ceramic;
        }
        Some(false) if resolved.floor == FloorMaterial::Ceramica => {
            resolved.floor = dry.floor;
            resolved.remove_floor = dry.remove_floor;
        }
        _ => {}
    }
    match has_ceramic_walls {
        Some(true) => {
            resolved.walls = WallMaterial::Ceramica;
            resolved.remove_walls = remove_ceramic;
        }
        Some(false) if resolved.walls == WallMaterial::Ceramica => {
            resolved.walls = dry.walls;
            resolved.remove_walls = dry.remove_walls;
        }
        _ => {}
    }
    resolved
}
