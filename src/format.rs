//! Spanish-locale number formatting for summaries and exports.

/// Formats `value` with two decimals and a comma separator: `12,35`.
#[must_use]
pub fn format_es(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// Formats `value` like [`format_es`] followed by a unit: `12,35 m²`.
#[must_use]
pub fn format_es_unit(value: f64, unit: &str) -> String {
    format!("{} {unit}", format_es(value))
}
