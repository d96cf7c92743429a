use std::collections::BTreeSet;

use serde::Serialize;

use crate::plan::{OpenType, Opening};

/// Number of openings per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OpeningCounts {
    pub single: u32,
    pub double: u32,
    pub sliding: u32,
}

impl OpeningCounts {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.single + self.double + self.sliding
    }

    fn add(&mut self, open_type: OpenType) {
        match open_type {
            OpenType::Single => self.single += 1,
            OpenType::Double => self.double += 1,
            OpenType::Sliding => self.sliding += 1,
        }
    }
}

/// Counts the openings sitting on one of `room_walls`.
///
/// Openings whose wall is not in `known_walls` are ignored, as are
/// openings on walls that do not bound the room.
#[must_use]
pub fn count_openings(
    openings: &[Opening],
    room_walls: &[&str],
    known_walls: &BTreeSet<&str>,
) -> OpeningCounts {
    let mut counts = OpeningCounts::default();
    for opening in openings.iter().filter(|o| {
        let wall = o.wall_id.as_str();
        known_walls.contains(wall) && room_walls.contains(&wall)
    }) {
        counts.add(opening.open_type);
    }
    counts
}
