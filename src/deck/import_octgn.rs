//! OCTGN deck file parsing.
//!
//! OCTGN decks are small XML documents:
//!
//! ```text
//! <deck game="...">
//!   <section name="Draw Deck">
//!     <card qty="3" id="26080734-...">Winterfell</card>
//!   </section>
//!   <notes><![CDATA[My deck notes]]></notes>
//! </deck>
//! ```
//!
//! Cards are identified by OCTGN id, not name. Ids that resolve to no
//! card are tried against factions; unknown ids contribute nothing.

use roxmltree::Document;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::catalog::CardCatalog;

use super::{DeckImport, ImportError};

/// Parse an OCTGN deck file against the catalog.
///
/// Malformed XML is an error; a well-formed document that is not a
/// deck yields an empty import.
pub fn import_octgn(catalog: &CardCatalog, xml: &str) -> Result<DeckImport, ImportError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let mut import = DeckImport::default();
    if !root.has_tag_name("deck") {
        debug!(root = root.tag_name().name(), "not an OCTGN deck document");
        return Ok(import);
    }

    // id -> qty, later sections overwriting earlier ones.
    let mut quantities: FxHashMap<&str, u32> = FxHashMap::default();
    for section in root.children().filter(|n| n.has_tag_name("section")) {
        for card in section.children().filter(|n| n.has_tag_name("card")) {
            let Some(id) = card.attribute("id") else {
                continue;
            };
            let qty = card
                .attribute("qty")
                .and_then(|q| q.parse().ok())
                .unwrap_or(0);
            quantities.insert(id, qty);
        }
    }

    let notes: Vec<&str> = root
        .children()
        .filter(|n| n.has_tag_name("notes"))
        .filter_map(|n| n.text())
        .collect();
    import.description = notes.join("\n");

    for (id, qty) in quantities {
        if let Some(card) = catalog.card_by_octgn_id(id) {
            import.content.insert(card.code.clone(), qty);
        } else if let Some(faction) = catalog.faction_by_octgn_id(id) {
            import.faction_code = Some(faction.code.clone());
        } else {
            debug!(id, "OCTGN id matched no card or faction");
        }
    }
    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Card, CardType, Cycle, Faction, Pack};

    fn catalog() -> CardCatalog {
        CardCatalog::from_parts(
            vec![Cycle::new("core", "Core Set", 1)],
            vec![Pack::new("core", "Core Set", "core", 1)],
            vec![Faction::new("stark", "House Stark").with_octgn_id("faction-stark-id")],
            vec![CardType::new("location", "Location")],
            vec![
                Card::new("01146", "Winterfell", "location", "stark", "core")
                    .with_octgn_id("card-winterfell-id"),
                Card::new("01147", "The Wolfswood", "location", "stark", "core")
                    .with_octgn_id("card-wolfswood-id"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_import_octgn() {
        let catalog = catalog();
        let xml = r#"<deck game="thegame">
            <section name="House">
              <card qty="1" id="faction-stark-id">House Stark</card>
            </section>
            <section name="Draw Deck">
              <card qty="3" id="card-winterfell-id">Winterfell</card>
              <card qty="2" id="card-wolfswood-id">The Wolfswood</card>
            </section>
            <notes>My notes</notes>
        </deck>"#;

        let import = import_octgn(&catalog, xml).unwrap();
        assert_eq!(import.content.get("01146"), Some(&3));
        assert_eq!(import.content.get("01147"), Some(&2));
        assert_eq!(import.faction_code.as_deref(), Some("stark"));
        assert_eq!(import.description, "My notes");
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let catalog = catalog();
        let xml = r#"<deck><section><card qty="3" id="nobody"/></section></deck>"#;
        let import = import_octgn(&catalog, xml).unwrap();
        assert!(import.content.is_empty());
        assert!(import.faction_code.is_none());
    }

    #[test]
    fn test_missing_qty_reads_as_zero() {
        let catalog = catalog();
        let xml = r#"<deck><section><card id="card-winterfell-id"/></section></deck>"#;
        let import = import_octgn(&catalog, xml).unwrap();
        assert_eq!(import.content.get("01146"), Some(&0));
    }

    #[test]
    fn test_malformed_xml_errors() {
        let catalog = catalog();
        assert!(import_octgn(&catalog, "<deck><section>").is_err());
    }

    #[test]
    fn test_non_deck_document_is_empty() {
        let catalog = catalog();
        let import = import_octgn(&catalog, "<inventory/>").unwrap();
        assert!(import.content.is_empty());
        assert!(import.description.is_empty());
    }

    #[test]
    fn test_multiple_notes_join_with_newlines() {
        let catalog = catalog();
        let xml = r#"<deck><notes>first</notes><notes>second</notes></deck>"#;
        let import = import_octgn(&catalog, xml).unwrap();
        assert_eq!(import.description, "first\nsecond");
    }
}
