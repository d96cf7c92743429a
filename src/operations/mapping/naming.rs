use std::collections::BTreeMap;

use super::room_type::{accent_corrected, capitalize, fold, humanize, NormalizedType, RoomType};
use crate::plan::Room;

/// Room types that occur once per plan and are never numbered.
const SINGULAR: &[RoomType] = &[
    RoomType::Cocina,
    RoomType::Salon,
    RoomType::Pasillo,
    RoomType::Terraza,
];

/// Assigns display names to rooms in order of appearance.
///
/// Names containing a digit are kept as typed. Singular types use their
/// type text; every other type is numbered per label: `Dormitorio 1`,
/// `Dormitorio 2`, ...
#[derive(Debug, Default)]
pub struct RoomNamer {
    counters: BTreeMap<String, u32>,
}

impl RoomNamer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the next room.
    pub fn name(&mut self, room: &Room, normalized: &NormalizedType) -> String {
        let typed = room.name.trim();
        if typed.chars().any(|c| c.is_ascii_digit()) {
            return capitalize(typed);
        }

        let room_type = normalized.room_type;
        if SINGULAR.contains(&room_type) {
            return singular_label(&room.room_type, room_type);
        }

        let base = match &normalized.custom_label {
            Some(label) => humanize(label),
            None if room_type == RoomType::Otro && !typed.is_empty() => humanize(typed),
            None => room_type.label().to_owned(),
        };
        let counter = self.counters.entry(base.clone()).or_insert(0);
        *counter += 1;
        format!("{base} {counter}")
    }
}

/// Keeps qualified type text such as `cocina_americana` and falls back to
/// the canonical label for synonyms like `kitchen`.
fn singular_label(type_text: &str, room_type: RoomType) -> String {
    if fold(type_text).contains(&fold(room_type.label())) {
        accent_corrected(type_text)
    } else {
        room_type.label().to_owned()
    }
}
