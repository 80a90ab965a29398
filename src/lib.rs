//! # carddb
//!
//! A card database and search library for LCG-style card games.
//!
//! The crate is the engine behind a card database site: everything
//! between the HTTP layer and the templates. It owns the entity model,
//! the search-query mini-language, result sorting and pagination, and
//! the deck importers. Routing, storage engines and rendering stay with
//! the host application.
//!
//! ## Design Principles
//!
//! 1. **Pure evaluation**: searching and paginating are functions of
//!    the catalog and the query - no hidden state, no clock reads.
//!
//! 2. **Permissive in, strict out**: query parsing never fails; typing
//!    rules are enforced by a separate validation pass, and only
//!    validated conditions execute.
//!
//! 3. **Catalog immutability**: the catalog is validated and indexed
//!    once at load; every later lookup is infallible or `Option`.
//!
//! ## Modules
//!
//! - `catalog`: entities (card, pack, cycle, faction, type), the
//!   indexed catalog and the JSON loader
//! - `search`: query parsing, validation, execution, form support
//! - `pagination`: views, page slicing, navigation strips
//! - `display`: card summaries, short-view grouping, meta descriptions
//! - `deck`: free-text and OCTGN deck importers
//! - `core`: site configuration and deterministic RNG

pub mod catalog;
pub mod core;
pub mod deck;
pub mod display;
pub mod pagination;
pub mod search;

// Re-export commonly used types
pub use crate::catalog::{load_dir, Card, CardCatalog, CardType, CatalogError, Cycle, Faction, Pack};

pub use crate::core::{SampleRng, SiteConfig};

pub use crate::search::{
    build_query, build_query_from_form, execute, parse, resolve_single_set, validate, Condition,
    FieldKind, FindRequest, Operator, SearchField, SearchFormInput, SearchFormOptions, SearchSort,
    SingleSetTarget,
};

pub use crate::pagination::{paginate, set_navigation, Page, Pagination, SetNavigation, View};

pub use crate::display::{
    card_meta, cycle_meta, group_for_short_view, pack_meta, page_title, CardSummary,
};

pub use crate::deck::{import_octgn, import_text, DeckImport, ImportError};
