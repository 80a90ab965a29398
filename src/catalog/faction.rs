//! Faction and card type entities.

use serde::{Deserialize, Serialize};

/// Faction entity - one of the game's factions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    /// Unique faction code.
    pub code: String,

    /// Faction name.
    pub name: String,

    /// OCTGN identifier used by deck files.
    #[serde(default)]
    pub octgn_id: Option<String>,
}

impl Faction {
    /// Create a new faction.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            octgn_id: None,
        }
    }

    /// Set the OCTGN identifier (builder pattern).
    #[must_use]
    pub fn with_octgn_id(mut self, octgn_id: impl Into<String>) -> Self {
        self.octgn_id = Some(octgn_id.into());
        self
    }
}

/// Card type entity (`character`, `event`, `location`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardType {
    /// Unique type code.
    pub code: String,

    /// Type name.
    pub name: String,
}

impl CardType {
    /// Create a new card type.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
