//! Search execution: conditions against the catalog.
//!
//! The evaluator is pure - the same catalog, conditions and sort always
//! produce the same row list. Conditions are ANDed; within a condition,
//! values are ORed; `!` negates the whole value list. Cards lacking a
//! queried stat (a plot has no strength) never match, whatever the
//! operator - the database's NULL semantics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Card, CardCatalog};

use super::condition::{Condition, Operator};
use super::fields::SearchField;

/// Sort order of search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSort {
    /// By card name.
    #[default]
    Name,
    /// By pack order, then position in the pack.
    Set,
    /// By faction name.
    Faction,
    /// By type name.
    Type,
    /// By gold cost.
    Cost,
    /// By character strength.
    Strength,
}

impl SearchSort {
    /// Resolve a sort key from the query string; unknown keys sort by name.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "set" => SearchSort::Set,
            "faction" => SearchSort::Faction,
            "type" => SearchSort::Type,
            "cost" => SearchSort::Cost,
            "strength" => SearchSort::Strength,
            _ => SearchSort::Name,
        }
    }

    /// The query-string key of this sort.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SearchSort::Name => "name",
            SearchSort::Set => "set",
            SearchSort::Faction => "faction",
            SearchSort::Type => "type",
            SearchSort::Cost => "cost",
            SearchSort::Strength => "strength",
        }
    }
}

/// Run validated conditions over the catalog.
///
/// An empty condition list yields no rows: the search page shows nothing
/// rather than the whole database.
///
/// ## Example
///
/// ```
/// use carddb::search::{execute, parse, validate, SearchSort};
/// # let catalog = carddb::catalog::CardCatalog::default();
///
/// let conditions = validate(parse("t:character o<3"));
/// let rows = execute(&catalog, &conditions, SearchSort::Name);
/// assert!(rows.is_empty());
/// ```
#[must_use]
pub fn execute<'a>(
    catalog: &'a CardCatalog,
    conditions: &[Condition],
    sort: SearchSort,
) -> Vec<&'a Card> {
    if conditions.is_empty() {
        return Vec::new();
    }

    let mut rows: Vec<&Card> = catalog
        .cards()
        .iter()
        .filter(|card| conditions.iter().all(|c| condition_matches(catalog, card, c)))
        .collect();

    sort_rows(catalog, &mut rows, sort);
    debug!(
        conditions = conditions.len(),
        rows = rows.len(),
        sort = sort.key(),
        "search executed"
    );
    rows
}

fn condition_matches(catalog: &CardCatalog, card: &Card, condition: &Condition) -> bool {
    let values = condition.values.as_slice();

    // Range comparisons apply to integer stats only; everything else is
    // a positive hit optionally negated by `!`.
    match condition.field {
        SearchField::Name => with_equality(condition.operator, {
            let name = card.name.to_lowercase();
            values
                .iter()
                .any(|v| name.contains(&v.to_lowercase()) || card.code == *v)
        }),
        SearchField::Flavor => contains_any(condition.operator, &card.flavor, values),
        SearchField::Designer => contains_any(condition.operator, &card.designer, values),
        SearchField::Illustrator => contains_any(condition.operator, &card.illustrator, values),
        SearchField::Traits => contains_any(condition.operator, &card.traits, values),
        SearchField::Text => contains_any(condition.operator, &card.text, values),
        SearchField::DateRelease => {
            let Some(date) = catalog.pack_of(card).date_release else {
                return false;
            };
            let date = date.format("%Y-%m-%d").to_string();
            with_equality(
                condition.operator,
                values.iter().any(|v| date.starts_with(v.as_str())),
            )
        }
        SearchField::Pack => {
            let pack = catalog.pack_of(card);
            with_equality(
                condition.operator,
                values.iter().any(|v| {
                    pack.code.eq_ignore_ascii_case(v) || pack.name.to_lowercase() == v.to_lowercase()
                }),
            )
        }
        SearchField::Faction => {
            let faction = catalog.faction_of(card);
            with_equality(
                condition.operator,
                values.iter().any(|v| {
                    faction.code.eq_ignore_ascii_case(v)
                        || faction.name.to_lowercase() == v.to_lowercase()
                }),
            )
        }
        SearchField::Type => with_equality(
            condition.operator,
            values.iter().any(|v| card.type_code.eq_ignore_ascii_case(v)),
        ),
        SearchField::Cycle => {
            let cycle = catalog.cycle_of(catalog.pack_of(card));
            integer_matches(condition.operator, Some(cycle.position), values)
        }
        SearchField::Claim => integer_matches(condition.operator, card.claim, values),
        SearchField::Reserve => integer_matches(condition.operator, card.reserve, values),
        SearchField::Income => integer_matches(condition.operator, card.income, values),
        SearchField::Cost => integer_matches(condition.operator, card.cost, values),
        SearchField::Strength => integer_matches(condition.operator, card.strength, values),
        SearchField::Initiative => integer_matches(condition.operator, card.initiative, values),
        SearchField::Quantity => integer_matches(condition.operator, Some(card.quantity), values),
        SearchField::Intrigue => boolean_matches(condition.operator, card.is_intrigue, values),
        SearchField::Loyal => boolean_matches(condition.operator, card.is_loyal, values),
        SearchField::Military => boolean_matches(condition.operator, card.is_military, values),
        SearchField::Power => boolean_matches(condition.operator, card.is_power, values),
        SearchField::Unique => boolean_matches(condition.operator, card.is_unique, values),
    }
}

/// Apply `:` / `!` to a positive hit. Range operators never reach here;
/// validation restricts them to integer fields.
fn with_equality(operator: Operator, hit: bool) -> bool {
    match operator {
        Operator::Match => hit,
        Operator::Differ => !hit,
        Operator::AtMost | Operator::AtLeast => false,
    }
}

fn contains_any(operator: Operator, haystack: &str, values: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    with_equality(
        operator,
        values.iter().any(|v| haystack.contains(&v.to_lowercase())),
    )
}

fn integer_matches(operator: Operator, stat: Option<i64>, values: &[String]) -> bool {
    let Some(stat) = stat else {
        return false;
    };
    // Values are numeric after validation; anything else misses.
    let equals_any = values
        .iter()
        .filter_map(|v| v.parse::<i64>().ok())
        .any(|v| stat == v);
    let first = values.first().and_then(|v| v.parse::<i64>().ok());
    match operator {
        Operator::Match => equals_any,
        Operator::Differ => !equals_any,
        Operator::AtMost => first.is_some_and(|v| stat <= v),
        Operator::AtLeast => first.is_some_and(|v| stat >= v),
    }
}

fn boolean_matches(operator: Operator, flag: bool, values: &[String]) -> bool {
    with_equality(operator, values.iter().any(|v| (v == "1") == flag))
}

fn sort_rows(catalog: &CardCatalog, rows: &mut [&Card], sort: SearchSort) {
    // Pack order index for the set sort.
    let pack_order: FxHashMap<&str, usize> = catalog
        .packs()
        .iter()
        .enumerate()
        .map(|(i, p)| (p.code.as_str(), i))
        .collect();

    match sort {
        SearchSort::Name => rows.sort_by_key(|c| (c.name.to_lowercase(), c.code.clone())),
        SearchSort::Set => {
            rows.sort_by_key(|c| (pack_order[c.pack_code.as_str()], c.position, c.code.clone()));
        }
        SearchSort::Faction => rows.sort_by_key(|c| {
            (
                catalog.faction_of(c).name.to_lowercase(),
                c.name.to_lowercase(),
                c.code.clone(),
            )
        }),
        SearchSort::Type => rows.sort_by_key(|c| {
            (
                catalog.type_of(c).name.to_lowercase(),
                c.name.to_lowercase(),
                c.code.clone(),
            )
        }),
        SearchSort::Cost => rows.sort_by_key(|c| {
            (
                c.cost.unwrap_or(i64::MIN),
                c.name.to_lowercase(),
                c.code.clone(),
            )
        }),
        SearchSort::Strength => rows.sort_by_key(|c| {
            (
                c.strength.unwrap_or(i64::MIN),
                c.name.to_lowercase(),
                c.code.clone(),
            )
        }),
    }
}
