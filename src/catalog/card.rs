//! Card entity - one printed card in the game.
//!
//! A `Card` is static catalog data, keyed by its `code` (pack number plus
//! position, e.g. `"01001"`). Numeric stats that do not exist for every
//! card type (a plot has no strength, an event has no icons) are `Option`.

use serde::{Deserialize, Serialize};

/// A single card in the catalog.
///
/// ## Example
///
/// ```
/// use carddb::catalog::Card;
///
/// let card = Card::new("01001", "Winter Wolf", "character", "stark", "core")
///     .with_cost(2)
///     .with_strength(3)
///     .with_traits("Beast. Direwolf.")
///     .military();
///
/// assert_eq!(card.traits_list(), vec!["Beast", "Direwolf"]);
/// assert!(card.is_military);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card code, e.g. `"01001"`.
    pub code: String,

    /// Card name.
    pub name: String,

    /// Code of the card's type (`character`, `event`, `plot`, ...).
    pub type_code: String,

    /// Code of the faction the card belongs to.
    pub faction_code: String,

    /// Code of the pack the card was printed in.
    pub pack_code: String,

    /// Position of the card within its pack.
    #[serde(default)]
    pub position: i64,

    /// Number of copies in one pack.
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Maximum copies allowed in a deck.
    #[serde(default = "default_quantity")]
    pub deck_limit: i64,

    /// Gold cost. `None` for cards without a cost (plots, agendas).
    #[serde(default)]
    pub cost: Option<i64>,

    /// Plot claim value.
    #[serde(default)]
    pub claim: Option<i64>,

    /// Plot income value.
    #[serde(default)]
    pub income: Option<i64>,

    /// Plot initiative value.
    #[serde(default)]
    pub initiative: Option<i64>,

    /// Plot reserve value.
    #[serde(default)]
    pub reserve: Option<i64>,

    /// Character strength.
    #[serde(default)]
    pub strength: Option<i64>,

    /// Rules text.
    #[serde(default)]
    pub text: String,

    /// Flavor text.
    #[serde(default)]
    pub flavor: String,

    /// Period-separated trait list, e.g. `"Beast. Direwolf."`.
    #[serde(default)]
    pub traits: String,

    /// Unique card (at most one copy in play).
    #[serde(default)]
    pub is_unique: bool,

    /// Loyal to its faction.
    #[serde(default)]
    pub is_loyal: bool,

    /// Has a military challenge icon.
    #[serde(default)]
    pub is_military: bool,

    /// Has an intrigue challenge icon.
    #[serde(default)]
    pub is_intrigue: bool,

    /// Has a power challenge icon.
    #[serde(default)]
    pub is_power: bool,

    /// Illustrator credit. Empty when unknown.
    #[serde(default)]
    pub illustrator: String,

    /// Designer credit (promo cards). Empty when unknown.
    #[serde(default)]
    pub designer: String,

    /// OCTGN identifier used by deck files. `None` when never exported.
    #[serde(default)]
    pub octgn_id: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

impl Card {
    /// Create a new card with the required fields; everything else defaults.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        type_code: impl Into<String>,
        faction_code: impl Into<String>,
        pack_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            type_code: type_code.into(),
            faction_code: faction_code.into(),
            pack_code: pack_code.into(),
            position: 0,
            quantity: 1,
            deck_limit: 1,
            cost: None,
            claim: None,
            income: None,
            initiative: None,
            reserve: None,
            strength: None,
            text: String::new(),
            flavor: String::new(),
            traits: String::new(),
            is_unique: false,
            is_loyal: false,
            is_military: false,
            is_intrigue: false,
            is_power: false,
            illustrator: String::new(),
            designer: String::new(),
            octgn_id: None,
        }
    }

    /// Set the position within the pack (builder pattern).
    #[must_use]
    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Set the gold cost.
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the strength.
    #[must_use]
    pub fn with_strength(mut self, strength: i64) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Set the plot stat line (income, initiative, claim, reserve).
    #[must_use]
    pub fn with_plot_stats(mut self, income: i64, initiative: i64, claim: i64, reserve: i64) -> Self {
        self.income = Some(income);
        self.initiative = Some(initiative);
        self.claim = Some(claim);
        self.reserve = Some(reserve);
        self
    }

    /// Set the rules text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the flavor text.
    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    /// Set the period-separated trait list.
    #[must_use]
    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = traits.into();
        self
    }

    /// Set the illustrator credit.
    #[must_use]
    pub fn with_illustrator(mut self, illustrator: impl Into<String>) -> Self {
        self.illustrator = illustrator.into();
        self
    }

    /// Set the designer credit.
    #[must_use]
    pub fn with_designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = designer.into();
        self
    }

    /// Set the OCTGN identifier.
    #[must_use]
    pub fn with_octgn_id(mut self, octgn_id: impl Into<String>) -> Self {
        self.octgn_id = Some(octgn_id.into());
        self
    }

    /// Set the per-pack quantity and deck limit.
    #[must_use]
    pub fn with_quantity(mut self, quantity: i64, deck_limit: i64) -> Self {
        self.quantity = quantity;
        self.deck_limit = deck_limit;
        self
    }

    /// Mark the card unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Mark the card loyal.
    #[must_use]
    pub fn loyal(mut self) -> Self {
        self.is_loyal = true;
        self
    }

    /// Add a military icon.
    #[must_use]
    pub fn military(mut self) -> Self {
        self.is_military = true;
        self
    }

    /// Add an intrigue icon.
    #[must_use]
    pub fn intrigue(mut self) -> Self {
        self.is_intrigue = true;
        self
    }

    /// Add a power icon.
    #[must_use]
    pub fn power(mut self) -> Self {
        self.is_power = true;
        self
    }

    /// The individual traits, split out of the period-separated string.
    #[must_use]
    pub fn traits_list(&self) -> Vec<&str> {
        self.traits
            .split('.')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}
