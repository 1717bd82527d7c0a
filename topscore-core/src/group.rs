//! Competition-class labels.
//!
//! Headings in standings documents and division names in results sheets are
//! spelled inconsistently ("EERSTE KLASSE C", "Eerste klasse zondag", ...).
//! Both are mapped onto a small set of canonical labels so that a player's
//! group lines up across the two inputs.

/// Combined label for the third and fourth national divisions.
pub const COMBINED_DIVISION: &str = "Derde en vierde divisie";

/// Group used for entries that carry no group of their own.
pub const FALLBACK_GROUP: &str = "Overig";

/// Display order of the canonical groups. Other groups follow alphabetically.
pub const PREFERRED_ORDER: [&str; 6] = [
    COMBINED_DIVISION,
    "Eerste klasse",
    "Tweede klasse",
    "Derde klasse",
    "Vierde klasse",
    "Vijfde klasse",
];

/// Lowercase heading prefix and the canonical label it maps to.
const CLASS_PREFIXES: &[(&str, &str)] = &[
    ("eerste klasse", "Eerste klasse"),
    ("tweede klasse", "Tweede klasse"),
    ("derde klasse", "Derde klasse"),
    ("vierde klasse", "Vierde klasse"),
    ("vijfde klasse", "Vijfde klasse"),
];

/// Map a heading onto its canonical group label.
///
/// Unrecognized headings pass through trimmed but otherwise unchanged.
pub fn canonical_group(header: &str) -> String {
    let trimmed = header.trim();
    let lower = trimmed.to_lowercase();

    if lower.contains("derde en vierde divisie") {
        return COMBINED_DIVISION.to_string();
    }
    for (prefix, label) in CLASS_PREFIXES {
        if lower.starts_with(prefix) {
            return label.to_string();
        }
    }
    trimmed.to_string()
}

/// Collapse any division label naming the third or fourth division into the
/// combined label. Other labels are returned unchanged.
pub fn normalize_division_name(division: &str) -> String {
    let upper = division.to_uppercase();
    if upper.contains("DERDE DIVISIE") || upper.contains("VIERDE DIVISIE") {
        COMBINED_DIVISION.to_string()
    } else {
        division.to_string()
    }
}

/// Position of `group` in the display order; unknown groups sort after all
/// canonical ones.
pub fn display_rank(group: &str) -> usize {
    PREFERRED_ORDER
        .iter()
        .position(|g| *g == group)
        .unwrap_or(PREFERRED_ORDER.len())
}
