//! Deck import: free text and OCTGN XML to card quantities.
//!
//! Both importers produce a `DeckImport`: a card code to quantity map,
//! the detected faction (deck lists usually name it on its own line)
//! and a description. Lines or ids that resolve to nothing contribute
//! nothing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod import_octgn;
pub mod import_text;

pub use import_octgn::import_octgn;
pub use import_text::import_text;

/// Result of a deck import.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckImport {
    /// Card code to quantity. Later mentions of a card overwrite
    /// earlier ones.
    pub content: FxHashMap<String, u32>,

    /// Code of the faction detected in the input, if any.
    pub faction_code: Option<String>,

    /// Deck description (OCTGN notes; empty for text imports).
    pub description: String,
}

/// Errors raised by deck importers.
///
/// Only the XML path can fail: a caller handing over an OCTGN file
/// expects malformed XML to be reported, while free text degrades
/// line by line.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The OCTGN input is not well-formed XML.
    #[error("invalid deck XML: {0}")]
    Xml(#[from] roxmltree::Error),
}
