//! Presentation data for result pages.
//!
//! Templates stay out of the library; this module builds the data they
//! would render. A `CardSummary` is one card with every joined name
//! resolved and its availability computed; the short view groups
//! summaries by the active sort; meta descriptions are the sentences
//! behind `<meta name="description">`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Card, CardCatalog, Cycle, Pack};
use crate::core::SiteConfig;
use crate::search::{resolve_single_set, Condition, SearchSort, SingleSetTarget};

/// A card with joined entity names resolved, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    /// Card code.
    pub code: String,
    /// Card name.
    pub name: String,
    /// Type code and display name.
    pub type_code: String,
    /// Type display name.
    pub type_name: String,
    /// Faction code.
    pub faction_code: String,
    /// Faction display name.
    pub faction_name: String,
    /// Pack code.
    pub pack_code: String,
    /// Pack display name.
    pub pack_name: String,
    /// Name of the pack's cycle.
    pub cycle_name: String,
    /// Position within the pack.
    pub position: i64,
    /// Gold cost.
    pub cost: Option<i64>,
    /// Character strength.
    pub strength: Option<i64>,
    /// Plot claim.
    pub claim: Option<i64>,
    /// Plot income.
    pub income: Option<i64>,
    /// Plot initiative.
    pub initiative: Option<i64>,
    /// Plot reserve.
    pub reserve: Option<i64>,
    /// Period-separated trait list.
    pub traits: String,
    /// Rules text.
    pub text: String,
    /// Flavor text.
    pub flavor: String,
    /// Unique flag.
    pub is_unique: bool,
    /// Loyal flag.
    pub is_loyal: bool,
    /// Military icon.
    pub is_military: bool,
    /// Intrigue icon.
    pub is_intrigue: bool,
    /// Power icon.
    pub is_power: bool,
    /// Illustrator credit.
    pub illustrator: String,
    /// The card's pack is out on the reference date.
    pub available: bool,
}

impl CardSummary {
    /// Resolve a card against the catalog as of `today`.
    #[must_use]
    pub fn build(catalog: &CardCatalog, card: &Card, today: NaiveDate) -> Self {
        let pack = catalog.pack_of(card);
        Self {
            code: card.code.clone(),
            name: card.name.clone(),
            type_code: card.type_code.clone(),
            type_name: catalog.type_of(card).name.clone(),
            faction_code: card.faction_code.clone(),
            faction_name: catalog.faction_of(card).name.clone(),
            pack_code: pack.code.clone(),
            pack_name: pack.name.clone(),
            cycle_name: catalog.cycle_of(pack).name.clone(),
            position: card.position,
            cost: card.cost,
            strength: card.strength,
            claim: card.claim,
            income: card.income,
            initiative: card.initiative,
            reserve: card.reserve,
            traits: card.traits.clone(),
            text: card.text.clone(),
            flavor: card.flavor.clone(),
            is_unique: card.is_unique,
            is_loyal: card.is_loyal,
            is_military: card.is_military,
            is_intrigue: card.is_intrigue,
            is_power: card.is_power,
            illustrator: card.illustrator.clone(),
            available: pack.is_available_on(today),
        }
    }

    /// The value the short view groups this card under for a sort.
    #[must_use]
    pub fn short_view_key(&self, sort: SearchSort) -> String {
        match sort {
            SearchSort::Name => self.name.chars().next().map(String::from).unwrap_or_default(),
            SearchSort::Set => self.pack_name.clone(),
            SearchSort::Faction => self.faction_name.clone(),
            SearchSort::Type => self.type_name.clone(),
            SearchSort::Cost => stat_key(self.cost),
            SearchSort::Strength => stat_key(self.strength),
        }
    }
}

fn stat_key(stat: Option<i64>) -> String {
    match stat {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

/// Group summaries for the short view, preserving sort order.
///
/// Buckets appear in the order their first member appears, so grouping
/// an already-sorted list keeps the sort.
#[must_use]
pub fn group_for_short_view<'a>(
    summaries: &'a [CardSummary],
    sort: SearchSort,
) -> Vec<(String, Vec<&'a CardSummary>)> {
    let mut groups: Vec<(String, Vec<&CardSummary>)> = Vec::new();
    for summary in summaries {
        let key = summary.short_view_key(sort);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(summary),
            None => groups.push((key, vec![summary])),
        }
    }
    groups
}

/// Meta description for a single-card page.
#[must_use]
pub fn card_meta(config: &SiteConfig, catalog: &CardCatalog, card: &Card) -> String {
    format!(
        "{}, a {} {} card for {} from the set {} published by {}.",
        card.name,
        catalog.faction_of(card).name,
        catalog.type_of(card).name,
        config.game_name,
        catalog.pack_of(card).name,
        config.publisher_name,
    )
}

/// Meta description for a pack page.
#[must_use]
pub fn pack_meta(config: &SiteConfig, pack: &Pack) -> String {
    let published = match pack.date_release {
        Some(date) => format!(" published on {}", date.format("%Y/%m/%d")),
        None => String::new(),
    };
    format!(
        "{}, a set of cards for {}{} by {}.",
        pack.name, config.game_name, published, config.publisher_name,
    )
}

/// Meta description for a cycle page.
#[must_use]
pub fn cycle_meta(config: &SiteConfig, cycle: &Cycle) -> String {
    format!(
        "{}, a cycle of datapack for {} published by {}.",
        cycle.name, config.game_name, config.publisher_name,
    )
}

/// Default page title for a result page: the pack or cycle name when
/// the query is a single set, otherwise the canonical query itself.
#[must_use]
pub fn page_title(catalog: &CardCatalog, conditions: &[Condition], canonical_query: &str) -> String {
    match resolve_single_set(catalog, conditions) {
        Some(SingleSetTarget::Pack(pack)) => pack.name.clone(),
        Some(SingleSetTarget::Cycle(cycle)) => cycle.name.clone(),
        None => canonical_query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardType, Faction};
    use crate::search::parse;

    fn catalog() -> CardCatalog {
        CardCatalog::from_parts(
            vec![Cycle::new("core", "Core Set", 1)],
            vec![
                Pack::new("core", "Core Set", "core", 1)
                    .released_on("2015-10-08".parse().unwrap()),
                Pack::new("future", "Future Pack", "core", 2),
            ],
            vec![Faction::new("stark", "House Stark")],
            vec![CardType::new("character", "Character")],
            vec![
                Card::new("01001", "Eddard Stark", "character", "stark", "core")
                    .with_position(1)
                    .with_cost(7)
                    .with_strength(8),
                Card::new("02001", "Future Card", "character", "stark", "future")
                    .with_position(1),
            ],
        )
        .unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_summary_resolves_names() {
        let catalog = catalog();
        let ned = catalog.card("01001").unwrap();
        let summary = CardSummary::build(&catalog, ned, date("2016-01-01"));

        assert_eq!(summary.faction_name, "House Stark");
        assert_eq!(summary.type_name, "Character");
        assert_eq!(summary.pack_name, "Core Set");
        assert_eq!(summary.cycle_name, "Core Set");
        assert!(summary.available);
    }

    #[test]
    fn test_summary_availability() {
        let catalog = catalog();
        let ned = catalog.card("01001").unwrap();
        assert!(!CardSummary::build(&catalog, ned, date("2015-01-01")).available);

        // A pack without a release date is never available.
        let future = catalog.card("02001").unwrap();
        assert!(!CardSummary::build(&catalog, future, date("2030-01-01")).available);
    }

    #[test]
    fn test_short_view_grouping() {
        let catalog = catalog();
        let today = date("2016-01-01");
        let summaries: Vec<CardSummary> = catalog
            .cards()
            .iter()
            .map(|c| CardSummary::build(&catalog, c, today))
            .collect();

        let by_name = group_for_short_view(&summaries, SearchSort::Name);
        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name[0].0, "E");
        assert_eq!(by_name[1].0, "F");

        let by_set = group_for_short_view(&summaries, SearchSort::Set);
        assert_eq!(by_set[0].0, "Core Set");
        assert_eq!(by_set[1].0, "Future Pack");

        let by_cost = group_for_short_view(&summaries, SearchSort::Cost);
        // The costless card groups under "-".
        assert!(by_cost.iter().any(|(k, _)| k == "-"));
        assert!(by_cost.iter().any(|(k, _)| k == "7"));
    }

    #[test]
    fn test_card_meta() {
        let catalog = catalog();
        let config = SiteConfig::new("A Game of Crowns", "Fantasy Press");
        let ned = catalog.card("01001").unwrap();
        assert_eq!(
            card_meta(&config, &catalog, ned),
            "Eddard Stark, a House Stark Character card for A Game of Crowns \
             from the set Core Set published by Fantasy Press."
        );
    }

    #[test]
    fn test_pack_meta_with_and_without_date() {
        let catalog = catalog();
        let config = SiteConfig::new("A Game of Crowns", "Fantasy Press");

        assert_eq!(
            pack_meta(&config, catalog.pack("core").unwrap()),
            "Core Set, a set of cards for A Game of Crowns published on \
             2015/10/08 by Fantasy Press."
        );
        assert_eq!(
            pack_meta(&config, catalog.pack("future").unwrap()),
            "Future Pack, a set of cards for A Game of Crowns by Fantasy Press."
        );
    }

    #[test]
    fn test_cycle_meta() {
        let catalog = catalog();
        let config = SiteConfig::default();
        assert_eq!(
            cycle_meta(&config, catalog.cycle("core").unwrap()),
            "Core Set, a cycle of datapack for the card game published by the publisher."
        );
    }

    #[test]
    fn test_page_title() {
        let catalog = catalog();
        assert_eq!(page_title(&catalog, &parse("e:core"), "e:core"), "Core Set");
        assert_eq!(page_title(&catalog, &parse("c:1"), "c:1"), "Core Set");
        assert_eq!(
            page_title(&catalog, &parse("winter o<3"), "winter o<3"),
            "winter o<3"
        );
    }
}
