//! Player identity matching.
//!
//! Names and clubs are compared after folding case and collapsing whitespace
//! runs. The normalized form is used only as a lookup key; stored spelling is
//! never rewritten.

use serde::Serialize;

/// Scorer name used in narration cells when the scorer is not known.
pub const UNKNOWN_SCORER: &str = "onbekend";

/// A player as written in a document: name plus optional club.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerKey {
    pub name: String,
    pub club: Option<String>,
}

impl PlayerKey {
    pub fn new(name: impl Into<String>, club: Option<String>) -> Self {
        Self {
            name: name.into(),
            club,
        }
    }

    /// Key with a club, the common case for round scorers.
    pub fn with_club(name: impl Into<String>, club: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            club: Some(club.into()),
        }
    }

    /// The normalized identity used for matching.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.name, self.club.as_deref())
    }

    pub fn is_unknown_scorer(&self) -> bool {
        is_unknown_scorer(&self.name)
    }
}

/// Case- and whitespace-normalized `(name, club)` pair.
///
/// A missing club and an empty club normalize to the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity {
    pub name: String,
    pub club: String,
}

impl Identity {
    pub fn of(name: &str, club: Option<&str>) -> Self {
        Self {
            name: normalize_name(name),
            club: normalize_name(club.unwrap_or("")),
        }
    }
}

/// Trim, collapse internal whitespace to single spaces and fold case.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True if `name` is the unknown-scorer sentinel, in any casing or spacing.
pub fn is_unknown_scorer(name: &str) -> bool {
    normalize_name(name) == UNKNOWN_SCORER
}
