//! Free-text deck list parsing.
//!
//! Deck lists come from many tools, so each line runs through a cascade
//! of patterns and the first match wins:
//!
//! 1. `2x Winterfell (Core Set)` - quantity, name, pack name or code
//! 2. `2x Winterfell` / `2 Winterfell` - quantity, name
//! 3. `#012 2x Winterfell` - numbered list with quantity and name
//! 4. `Winterfell x2` - name, trailing quantity
//! 5. `Winterfell` - bare name, quantity 1
//!
//! A line matching no pattern is skipped. Names resolve against the
//! catalog (within the hinted pack when one is given); a line naming a
//! faction instead of a card sets the deck's faction.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::catalog::CardCatalog;

use super::DeckImport;

static QTY_NAME_PACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d)x?([^(]+) \(([^)]+)").unwrap());
static QTY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(\d)x?([\p{L}\p{N}\-.'!:" ]+)"#).unwrap());
static NUMBERED_QTY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\d{3}\s(\d)x?([\p{L}\p{N}\-.'!: ]+)").unwrap());
static NAME_TRAILING_QTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^(]+).*x(\d)").unwrap());
static NAME_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^(]+)").unwrap());

struct ParsedLine {
    quantity: u32,
    name: String,
    pack_hint: Option<String>,
}

/// Parse a free-text deck list against the catalog.
///
/// ## Example
///
/// ```
/// use carddb::deck::import_text;
/// # use carddb::catalog::{Card, CardCatalog, CardType, Cycle, Faction, Pack};
/// # let catalog = CardCatalog::from_parts(
/// #     vec![Cycle::new("core", "Core Set", 1)],
/// #     vec![Pack::new("core", "Core Set", "core", 1)],
/// #     vec![Faction::new("stark", "House Stark")],
/// #     vec![CardType::new("location", "Location")],
/// #     vec![Card::new("01146", "Winterfell", "location", "stark", "core")],
/// # ).unwrap();
///
/// let import = import_text(&catalog, "House Stark\n2x Winterfell\n");
/// assert_eq!(import.content.get("01146"), Some(&2));
/// assert_eq!(import.faction_code.as_deref(), Some("stark"));
/// ```
#[must_use]
pub fn import_text(catalog: &CardCatalog, text: &str) -> DeckImport {
    let mut import = DeckImport::default();

    for line in text.lines() {
        let Some(parsed) = parse_line(line) else {
            continue;
        };

        let card = match &parsed.pack_hint {
            Some(hint) => catalog
                .pack_by_name(hint)
                .or_else(|| catalog.pack(hint))
                .and_then(|pack| catalog.card_by_name_in_pack(&parsed.name, &pack.code)),
            None => catalog.card_by_name(&parsed.name),
        };

        if let Some(card) = card {
            import.content.insert(card.code.clone(), parsed.quantity);
        } else if let Some(faction) = catalog.faction_by_name(&parsed.name) {
            import.faction_code = Some(faction.code.clone());
        } else {
            debug!(line, "deck line matched no card or faction");
        }
    }
    import
}

fn parse_line(line: &str) -> Option<ParsedLine> {
    if let Some(caps) = QTY_NAME_PACK.captures(line) {
        return Some(ParsedLine {
            quantity: caps[1].parse().unwrap_or(0),
            name: caps[2].trim().to_string(),
            pack_hint: Some(caps[3].trim().to_string()),
        });
    }
    if let Some(caps) = QTY_NAME.captures(line) {
        return Some(ParsedLine {
            quantity: caps[1].parse().unwrap_or(0),
            name: caps[2].trim().to_string(),
            pack_hint: None,
        });
    }
    if let Some(caps) = NUMBERED_QTY_NAME.captures(line) {
        return Some(ParsedLine {
            quantity: caps[1].parse().unwrap_or(0),
            name: caps[2].trim().to_string(),
            pack_hint: None,
        });
    }
    if let Some(caps) = NAME_TRAILING_QTY.captures(line) {
        return Some(ParsedLine {
            quantity: caps[2].parse().unwrap_or(0),
            name: caps[1].trim().to_string(),
            pack_hint: None,
        });
    }
    if let Some(caps) = NAME_ONLY.captures(line) {
        let name = caps[1].trim().to_string();
        if name.is_empty() {
            return None;
        }
        return Some(ParsedLine {
            quantity: 1,
            name,
            pack_hint: None,
        });
    }
    None
}
