//! Card catalog for entity lookup.
//!
//! The `CardCatalog` owns every entity in the database and provides fast
//! lookup by code, by name, and by OCTGN id. It is built once (from JSON
//! data files or in-memory parts), validated for referential integrity,
//! and immutable afterwards.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::SampleRng;

use super::card::Card;
use super::faction::{CardType, Faction};
use super::loader::CatalogError;
use super::pack::{Cycle, Pack};

/// The card database: every cycle, pack, faction, type and card.
///
/// Lookups return `None` for unknown codes. Cross-entity accessors like
/// [`CardCatalog::pack_of`] never fail because references are validated
/// when the catalog is built.
///
/// ## Example
///
/// ```
/// use carddb::catalog::{Card, CardCatalog, CardType, Cycle, Faction, Pack};
///
/// let catalog = CardCatalog::from_parts(
///     vec![Cycle::new("core", "Core Set", 1)],
///     vec![Pack::new("core", "Core Set", "core", 1)],
///     vec![Faction::new("stark", "House Stark")],
///     vec![CardType::new("character", "Character")],
///     vec![Card::new("01001", "Eddard Stark", "character", "stark", "core")],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.card("01001").unwrap().name, "Eddard Stark");
/// assert!(catalog.card("99999").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    packs: Vec<Pack>,
    cycles: Vec<Cycle>,
    factions: Vec<Faction>,
    types: Vec<CardType>,

    card_by_code: FxHashMap<String, usize>,
    card_by_name: FxHashMap<String, Vec<usize>>,
    card_by_octgn: FxHashMap<String, usize>,
    pack_cards: FxHashMap<String, Vec<usize>>,
    pack_by_code: FxHashMap<String, usize>,
    pack_by_name: FxHashMap<String, usize>,
    cycle_by_code: FxHashMap<String, usize>,
    faction_by_code: FxHashMap<String, usize>,
    faction_by_name: FxHashMap<String, usize>,
    faction_by_octgn: FxHashMap<String, usize>,
    type_by_code: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Build a catalog from already-deserialized entities.
    ///
    /// Validates uniqueness of every code and referential integrity of
    /// every cross-entity reference, then builds the lookup indices.
    pub fn from_parts(
        mut cycles: Vec<Cycle>,
        mut packs: Vec<Pack>,
        factions: Vec<Faction>,
        types: Vec<CardType>,
        mut cards: Vec<Card>,
    ) -> Result<Self, CatalogError> {
        cycles.sort_by_key(|c| c.position);
        let mut cycle_by_code = FxHashMap::default();
        for (i, cycle) in cycles.iter().enumerate() {
            if cycle_by_code.insert(cycle.code.clone(), i).is_some() {
                return Err(CatalogError::duplicate("cycle", &cycle.code));
            }
        }

        // Global pack order: by cycle position, then pack position.
        packs.sort_by_key(|p| {
            let cycle_pos = cycle_by_code
                .get(&p.cycle_code)
                .map(|&i| cycles[i].position)
                .unwrap_or(i64::MAX);
            (cycle_pos, p.position)
        });
        let mut pack_by_code = FxHashMap::default();
        let mut pack_by_name = FxHashMap::default();
        for (i, pack) in packs.iter().enumerate() {
            if !cycle_by_code.contains_key(&pack.cycle_code) {
                return Err(CatalogError::unknown_reference(
                    &pack.code,
                    "cycle",
                    &pack.cycle_code,
                ));
            }
            if pack_by_code.insert(pack.code.clone(), i).is_some() {
                return Err(CatalogError::duplicate("pack", &pack.code));
            }
            pack_by_name.insert(pack.name.to_lowercase(), i);
        }

        let mut faction_by_code = FxHashMap::default();
        let mut faction_by_name = FxHashMap::default();
        let mut faction_by_octgn = FxHashMap::default();
        for (i, faction) in factions.iter().enumerate() {
            if faction_by_code.insert(faction.code.clone(), i).is_some() {
                return Err(CatalogError::duplicate("faction", &faction.code));
            }
            faction_by_name.insert(faction.name.to_lowercase(), i);
            if let Some(octgn_id) = &faction.octgn_id {
                faction_by_octgn.insert(octgn_id.clone(), i);
            }
        }

        let mut type_by_code = FxHashMap::default();
        for (i, card_type) in types.iter().enumerate() {
            if type_by_code.insert(card_type.code.clone(), i).is_some() {
                return Err(CatalogError::duplicate("type", &card_type.code));
            }
        }

        cards.sort_by(|a, b| a.code.cmp(&b.code));
        let mut card_by_code = FxHashMap::default();
        let mut card_by_name: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut card_by_octgn = FxHashMap::default();
        let mut pack_cards: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if !pack_by_code.contains_key(&card.pack_code) {
                return Err(CatalogError::unknown_reference(
                    &card.code,
                    "pack",
                    &card.pack_code,
                ));
            }
            if !faction_by_code.contains_key(&card.faction_code) {
                return Err(CatalogError::unknown_reference(
                    &card.code,
                    "faction",
                    &card.faction_code,
                ));
            }
            if !type_by_code.contains_key(&card.type_code) {
                return Err(CatalogError::unknown_reference(
                    &card.code,
                    "type",
                    &card.type_code,
                ));
            }
            if card_by_code.insert(card.code.clone(), i).is_some() {
                return Err(CatalogError::duplicate("card", &card.code));
            }
            card_by_name
                .entry(card.name.to_lowercase())
                .or_default()
                .push(i);
            if let Some(octgn_id) = &card.octgn_id {
                card_by_octgn.insert(octgn_id.clone(), i);
            }
            pack_cards
                .entry(card.pack_code.clone())
                .or_default()
                .push(i);
        }

        // Name collisions resolve to the earliest printing: order the
        // index entries by global pack order, then card position.
        for indices in card_by_name.values_mut() {
            indices.sort_by_key(|&i| {
                let pack_idx = pack_by_code[&cards[i].pack_code];
                (pack_idx, cards[i].position)
            });
        }
        for indices in pack_cards.values_mut() {
            indices.sort_by_key(|&i| cards[i].position);
        }

        Ok(Self {
            cards,
            packs,
            cycles,
            factions,
            types,
            card_by_code,
            card_by_name,
            card_by_octgn,
            pack_cards,
            pack_by_code,
            pack_by_name,
            cycle_by_code,
            faction_by_code,
            faction_by_name,
            faction_by_octgn,
            type_by_code,
        })
    }

    /// All cards, ordered by code.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All packs, in global release order.
    #[must_use]
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// All cycles, ordered by position.
    #[must_use]
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// All factions, in data order.
    #[must_use]
    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    /// All card types, in data order.
    #[must_use]
    pub fn card_types(&self) -> &[CardType] {
        &self.types
    }

    /// Number of cards in the catalog.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the catalog holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by code.
    #[must_use]
    pub fn card(&self, code: &str) -> Option<&Card> {
        self.card_by_code.get(code).map(|&i| &self.cards[i])
    }

    /// Get a card by name, case-insensitively.
    ///
    /// When several printings share the name, the earliest one (by pack
    /// order, then position) is returned.
    #[must_use]
    pub fn card_by_name(&self, name: &str) -> Option<&Card> {
        self.card_by_name
            .get(&name.to_lowercase())
            .and_then(|indices| indices.first())
            .map(|&i| &self.cards[i])
    }

    /// Get a card by name within a specific pack.
    #[must_use]
    pub fn card_by_name_in_pack(&self, name: &str, pack_code: &str) -> Option<&Card> {
        self.card_by_name
            .get(&name.to_lowercase())?
            .iter()
            .map(|&i| &self.cards[i])
            .find(|card| card.pack_code == pack_code)
    }

    /// Get a card by its OCTGN identifier.
    #[must_use]
    pub fn card_by_octgn_id(&self, octgn_id: &str) -> Option<&Card> {
        self.card_by_octgn.get(octgn_id).map(|&i| &self.cards[i])
    }

    /// Cards of one pack, ordered by position.
    pub fn cards_in_pack(&self, pack_code: &str) -> impl Iterator<Item = &Card> {
        self.pack_cards
            .get(pack_code)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.cards[i])
    }

    /// Get a pack by code.
    #[must_use]
    pub fn pack(&self, code: &str) -> Option<&Pack> {
        self.pack_by_code.get(code).map(|&i| &self.packs[i])
    }

    /// Get a pack by name, case-insensitively.
    #[must_use]
    pub fn pack_by_name(&self, name: &str) -> Option<&Pack> {
        self.pack_by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.packs[i])
    }

    /// Get a cycle by code.
    #[must_use]
    pub fn cycle(&self, code: &str) -> Option<&Cycle> {
        self.cycle_by_code.get(code).map(|&i| &self.cycles[i])
    }

    /// Get a cycle by its position.
    #[must_use]
    pub fn cycle_by_position(&self, position: i64) -> Option<&Cycle> {
        self.cycles.iter().find(|c| c.position == position)
    }

    /// Get a faction by code.
    #[must_use]
    pub fn faction(&self, code: &str) -> Option<&Faction> {
        self.faction_by_code.get(code).map(|&i| &self.factions[i])
    }

    /// Get a faction by name, case-insensitively.
    #[must_use]
    pub fn faction_by_name(&self, name: &str) -> Option<&Faction> {
        self.faction_by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.factions[i])
    }

    /// Get a faction by its OCTGN identifier.
    #[must_use]
    pub fn faction_by_octgn_id(&self, octgn_id: &str) -> Option<&Faction> {
        self.faction_by_octgn
            .get(octgn_id)
            .map(|&i| &self.factions[i])
    }

    /// Get a card type by code.
    #[must_use]
    pub fn card_type(&self, code: &str) -> Option<&CardType> {
        self.type_by_code.get(code).map(|&i| &self.types[i])
    }

    /// The pack a card was printed in.
    ///
    /// References are validated in `from_parts`, so this cannot miss.
    #[must_use]
    pub fn pack_of(&self, card: &Card) -> &Pack {
        self.pack(&card.pack_code)
            .expect("card pack validated at catalog build")
    }

    /// The faction a card belongs to.
    #[must_use]
    pub fn faction_of(&self, card: &Card) -> &Faction {
        self.faction(&card.faction_code)
            .expect("card faction validated at catalog build")
    }

    /// The type of a card.
    #[must_use]
    pub fn type_of(&self, card: &Card) -> &CardType {
        self.card_type(&card.type_code)
            .expect("card type validated at catalog build")
    }

    /// The cycle a pack belongs to.
    #[must_use]
    pub fn cycle_of(&self, pack: &Pack) -> &Cycle {
        self.cycle(&pack.cycle_code)
            .expect("pack cycle validated at catalog build")
    }

    /// The card before this one in its pack, by position.
    #[must_use]
    pub fn previous_card(&self, card: &Card) -> Option<&Card> {
        self.cards_in_pack(&card.pack_code)
            .filter(|c| c.position < card.position)
            .last()
    }

    /// The card after this one in its pack, by position.
    #[must_use]
    pub fn next_card(&self, card: &Card) -> Option<&Card> {
        self.cards_in_pack(&card.pack_code)
            .find(|c| c.position > card.position)
    }

    /// Every distinct trait across the catalog, sorted.
    #[must_use]
    pub fn traits(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        for card in &self.cards {
            for t in card.traits_list() {
                set.insert(t.to_string());
            }
        }
        set.into_iter().collect()
    }

    /// Every distinct non-empty illustrator credit, sorted.
    #[must_use]
    pub fn illustrators(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        for card in &self.cards {
            if !card.illustrator.is_empty() {
                set.insert(card.illustrator.clone());
            }
        }
        set.into_iter().collect()
    }

    /// Pick a random card.
    #[must_use]
    pub fn random_card(&self, rng: &mut SampleRng) -> Option<&Card> {
        let picked = rng.choose(&self.cards);
        debug!(card = picked.map(|c| c.code.as_str()), "random card pick");
        picked
    }
}
