use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical room types understood by the cost calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Baño")]
    Bano,
    Cocina,
    #[serde(rename = "Salón")]
    Salon,
    Dormitorio,
    Pasillo,
    Hall,
    Terraza,
    Trastero,
    Vestidor,
    Otro,
}

impl RoomType {
    /// Display label with correct accents.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bano => "Baño",
            Self::Cocina => "Cocina",
            Self::Salon => "Salón",
            Self::Dormitorio => "Dormitorio",
            Self::Pasillo => "Pasillo",
            Self::Hall => "Hall",
            Self::Terraza => "Terraza",
            Self::Trastero => "Trastero",
            Self::Vestidor => "Vestidor",
            Self::Otro => "Otro",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Synonyms matched as substrings of the folded type text, first match wins.
///
/// Keys are lowercase and accent-free. Bathroom terms come first so that
/// "cuarto de baño" is not taken for another type, and "hall" is last
/// because it is the shortest and most generic key.
const SYNONYMS: &[(&str, RoomType)] = &[
    ("bano", RoomType::Bano),
    ("aseo", RoomType::Bano),
    ("ducha", RoomType::Bano),
    ("shower", RoomType::Bano),
    ("bath", RoomType::Bano),
    ("wc", RoomType::Bano),
    ("cocina", RoomType::Cocina),
    ("kitchen", RoomType::Cocina),
    ("office", RoomType::Cocina),
    ("terraza", RoomType::Terraza),
    ("balcon", RoomType::Terraza),
    ("terrace", RoomType::Terraza),
    ("balcony", RoomType::Terraza),
    ("salon", RoomType::Salon),
    ("comedor", RoomType::Salon),
    ("estar", RoomType::Salon),
    ("living", RoomType::Salon),
    ("dormitorio", RoomType::Dormitorio),
    ("habitacion", RoomType::Dormitorio),
    ("bedroom", RoomType::Dormitorio),
    ("pasillo", RoomType::Pasillo),
    ("distribuidor", RoomType::Pasillo),
    ("corridor", RoomType::Pasillo),
    ("recibidor", RoomType::Hall),
    ("entrada", RoomType::Hall),
    ("trastero", RoomType::Trastero),
    ("almacen", RoomType::Trastero),
    ("storage", RoomType::Trastero),
    ("vestidor", RoomType::Vestidor),
    ("closet", RoomType::Vestidor),
    ("hall", RoomType::Hall),
];

/// A room type string resolved against [`SYNONYMS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedType {
    pub room_type: RoomType,
    /// Original text, trimmed, kept when it did not match any synonym.
    pub custom_label: Option<String>,
}

/// Maps a free-text room type to a canonical [`RoomType`].
///
/// Matching is case-insensitive and accent-insensitive. Unmatched text maps
/// to [`RoomType::Otro`] with the original text kept as a custom label.
#[must_use]
pub fn normalize_room_type(text: &str) -> NormalizedType {
    let folded = fold(text);
    let matched = SYNONYMS
        .iter()
        .find(|(key, _)| folded.contains(key))
        .map(|&(_, room_type)| room_type);

    match matched {
        Some(room_type) => NormalizedType {
            room_type,
            custom_label: None,
        },
        None => NormalizedType {
            room_type: RoomType::Otro,
            custom_label: Some(text.trim())
                .filter(|label| !label.is_empty())
                .map(str::to_owned),
        },
    }
}

/// Lowercases, strips Spanish accents and turns separators into spaces.
#[must_use]
pub fn fold(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            '_' | '-' => ' ',
            other => other,
        })
        .collect()
}

/// Turns editor identifiers like `cocina_americana` into `Cocina Americana`.
#[must_use]
pub fn humanize(text: &str) -> String {
    text.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character and keeps the rest verbatim.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Humanizes `text` and restores accents of canonical words that were typed
/// without them, so `bano` reads `Baño` and `salon_comedor` reads
/// `Salón Comedor`.
#[must_use]
pub fn accent_corrected(text: &str) -> String {
    const CANONICAL: &[RoomType] = &[RoomType::Bano, RoomType::Salon];
    humanize(text)
        .split(' ')
        .map(|word| {
            CANONICAL
                .iter()
                .find(|t| fold(t.label()) == fold(word))
                .map_or_else(|| word.to_owned(), |t| t.label().to_owned())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
