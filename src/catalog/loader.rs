//! Catalog loading from JSON data files.
//!
//! The on-disk layout matches the card-data repositories the site imports
//! from: one file per entity collection at the top level, plus one card
//! file per pack.
//!
//! ```text
//! data/
//!   cycles.json
//!   packs.json
//!   factions.json
//!   types.json
//!   packs/
//!     core.json
//!     wotn.json
//! ```
//!
//! A pack without a card file is allowed (spoilers may not be out yet)
//! and logged as a warning.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::card::Card;
use super::catalog::CardCatalog;
use super::faction::{CardType, Faction};
use super::pack::{Cycle, Pack};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A data file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON for the expected shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Two entities of the same kind share a code.
    #[error("duplicate {entity} code `{code}`")]
    DuplicateCode {
        /// Entity kind (`card`, `pack`, ...).
        entity: &'static str,
        /// The colliding code.
        code: String,
    },

    /// An entity references a code that does not exist.
    #[error("`{from}` references unknown {entity} `{code}`")]
    UnknownReference {
        /// Code of the referencing entity.
        from: String,
        /// Referenced entity kind.
        entity: &'static str,
        /// The dangling code.
        code: String,
    },
}

impl CatalogError {
    pub(crate) fn duplicate(entity: &'static str, code: &str) -> Self {
        Self::DuplicateCode {
            entity,
            code: code.to_string(),
        }
    }

    pub(crate) fn unknown_reference(from: &str, entity: &'static str, code: &str) -> Self {
        Self::UnknownReference {
            from: from.to_string(),
            entity,
            code: code.to_string(),
        }
    }
}

/// Load a catalog from a data directory.
///
/// ## Example
///
/// ```no_run
/// use carddb::catalog::load_dir;
///
/// let catalog = load_dir("data")?;
/// println!("{} cards", catalog.card_count());
/// # Ok::<(), carddb::catalog::CatalogError>(())
/// ```
pub fn load_dir(dir: impl AsRef<Path>) -> Result<CardCatalog, CatalogError> {
    let dir = dir.as_ref();

    let cycles: Vec<Cycle> = read_json(&dir.join("cycles.json"))?;
    let packs: Vec<Pack> = read_json(&dir.join("packs.json"))?;
    let factions: Vec<Faction> = read_json(&dir.join("factions.json"))?;
    let types: Vec<CardType> = read_json(&dir.join("types.json"))?;

    let mut cards = Vec::new();
    for pack in &packs {
        let path = dir.join("packs").join(format!("{}.json", pack.code));
        if !path.exists() {
            warn!(pack = %pack.code, "no card file for pack");
            continue;
        }
        let pack_cards: Vec<Card> = read_json(&path)?;
        cards.extend(pack_cards);
    }

    let catalog = CardCatalog::from_parts(cycles, packs, factions, types, cards)?;
    info!(
        cards = catalog.card_count(),
        packs = catalog.packs().len(),
        cycles = catalog.cycles().len(),
        factions = catalog.factions().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}
