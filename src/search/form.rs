//! Search form support.
//!
//! Three concerns of the search page that are pure data work:
//! gathering the options the form offers (packs per cycle, factions,
//! traits, ...), flattening a submitted form into a canonical query
//! string, and spotting queries that are really a single pack or cycle
//! page in disguise.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardCatalog, CardType, Cycle, Faction, Pack};
use crate::pagination::View;

use super::condition::{needs_quotes, Condition, Operator};
use super::executor::SearchSort;
use super::fields::{SearchField, LETTER_FIELDS};

/// Everything the search form needs to render its selects.
#[derive(Clone, Debug)]
pub struct SearchFormOptions<'a> {
    /// Packs grouped per cycle, both in release order.
    pub packs_by_cycle: Vec<(&'a Cycle, Vec<&'a Pack>)>,

    /// All card types.
    pub types: &'a [CardType],

    /// All factions.
    pub factions: &'a [Faction],

    /// Every distinct trait.
    pub traits: Vec<String>,

    /// Every distinct illustrator.
    pub illustrators: Vec<String>,
}

impl<'a> SearchFormOptions<'a> {
    /// Gather the form options from a catalog.
    #[must_use]
    pub fn gather(catalog: &'a CardCatalog) -> Self {
        let packs_by_cycle = catalog
            .cycles()
            .iter()
            .map(|cycle| {
                let packs = catalog
                    .packs()
                    .iter()
                    .filter(|p| p.cycle_code == cycle.code)
                    .collect();
                (cycle, packs)
            })
            .collect();

        Self {
            packs_by_cycle,
            types: catalog.card_types(),
            factions: catalog.factions(),
            traits: catalog.traits(),
            illustrators: catalog.illustrators(),
        }
    }
}

/// One submitted field of the search form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldInput {
    /// The field this input addresses.
    pub field: SearchField,

    /// Chosen operator, if the form exposes one for this field.
    pub operator: Option<Operator>,

    /// Submitted values; multi-selects submit several.
    pub values: Vec<String>,
}

impl FieldInput {
    /// Single-valued input with an operator choice.
    #[must_use]
    pub fn single(field: SearchField, operator: Option<Operator>, value: impl Into<String>) -> Self {
        Self {
            field,
            operator,
            values: vec![value.into()],
        }
    }

    /// Multi-valued input (multi-select).
    #[must_use]
    pub fn multi<I, S>(field: SearchField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field,
            operator: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A submitted search form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchFormInput {
    /// Free-text query, passed through untouched.
    pub free_text: String,

    /// Per-field inputs.
    pub fields: Vec<FieldInput>,

    /// Requested view key (empty means default).
    pub view: String,

    /// Requested sort key (empty means default).
    pub sort: String,
}

/// The outcome of processing a search form: the canonical query plus
/// the view and sort to display it with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindRequest {
    /// Canonical query string.
    pub q: String,

    /// Result view.
    pub view: View,

    /// Result sort.
    pub sort: SearchSort,
}

impl FindRequest {
    /// Query-string pairs for the find page, omitting defaults.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.q.clone())];
        if self.sort != SearchSort::Name {
            params.push(("sort", self.sort.key().to_string()));
        }
        if self.view != View::List {
            params.push(("view", self.view.key().to_string()));
        }
        params
    }
}

/// Flatten a submitted form into a canonical query string.
///
/// Field inputs are emitted in field-letter order. Multi-valued inputs
/// are pipe-joined with `:`; a value containing a space is quoted. A
/// faction multi-select covering every faction filters nothing and is
/// dropped. Single values take the chosen operator, falling back to `:`
/// when none or an unknown one was submitted; release dates always use
/// `:`. Values with characters beyond letters/digits/`_-&` are quoted.
#[must_use]
pub fn build_query_from_form(catalog: &CardCatalog, input: &SearchFormInput) -> FindRequest {
    let mut params: Vec<String> = Vec::new();
    if !input.free_text.is_empty() {
        params.push(input.free_text.clone());
    }

    for field in LETTER_FIELDS {
        let Some(field_input) = input.fields.iter().find(|i| i.field == field) else {
            continue;
        };
        let values: Vec<&String> = field_input
            .values
            .iter()
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            continue;
        }
        let letter = field
            .letter()
            .expect("LETTER_FIELDS only contains lettered fields");

        if values.len() > 1 {
            // A multi-select of every faction filters nothing.
            if field == SearchField::Faction && values.len() == catalog.factions().len() {
                continue;
            }
            let joined: Vec<String> = values
                .iter()
                .map(|v| {
                    if v.contains(' ') {
                        format!("\"{v}\"")
                    } else {
                        (*v).clone()
                    }
                })
                .collect();
            params.push(format!("{letter}:{}", joined.join("|")));
        } else {
            let value = values[0];
            let operator = if field == SearchField::DateRelease {
                Operator::Match
            } else {
                field_input.operator.unwrap_or(Operator::Match)
            };
            let value = if needs_quotes(value) {
                format!("\"{value}\"")
            } else {
                value.clone()
            };
            params.push(format!("{letter}{}{value}", operator.symbol()));
        }
    }

    FindRequest {
        q: params.join(" "),
        view: View::from_key(&input.view),
        sort: SearchSort::from_key(&input.sort),
    }
}

/// A query that is really one set's card list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SingleSetTarget<'a> {
    /// The whole query is one pack.
    Pack(&'a Pack),
    /// The whole query is one cycle.
    Cycle(&'a Cycle),
}

/// Detect a single-set query so the caller can redirect to the pack or
/// cycle page instead of rendering generic results.
#[must_use]
pub fn resolve_single_set<'a>(
    catalog: &'a CardCatalog,
    conditions: &[Condition],
) -> Option<SingleSetTarget<'a>> {
    let [condition] = conditions else {
        return None;
    };
    if condition.operator != Operator::Match {
        return None;
    }
    let value = condition.single_value()?;

    match condition.field {
        SearchField::Pack => catalog.pack(value).map(SingleSetTarget::Pack),
        SearchField::Cycle => {
            let position = value.parse::<i64>().ok()?;
            catalog
                .cycle_by_position(position)
                .map(SingleSetTarget::Cycle)
        }
        _ => None,
    }
}
