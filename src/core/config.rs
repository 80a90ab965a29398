//! Site configuration.
//!
//! The library never hardcodes the game being catalogued. Callers provide
//! a `SiteConfig` naming the game and its publisher, and the display layer
//! uses it when building meta descriptions.

use serde::{Deserialize, Serialize};

/// Names of the game and publisher behind the catalog.
///
/// ## Example
///
/// ```
/// use carddb::core::SiteConfig;
///
/// let config = SiteConfig::new("A Game of Crowns", "Fantasy Press");
/// assert_eq!(config.game_name, "A Game of Crowns");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the card game.
    pub game_name: String,

    /// Display name of the publisher.
    pub publisher_name: String,
}

impl SiteConfig {
    /// Create a new configuration.
    pub fn new(game_name: impl Into<String>, publisher_name: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            publisher_name: publisher_name.into(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("the card game", "the publisher")
    }
}
