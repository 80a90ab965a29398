//! Catalog: entities and the card database.
//!
//! ## Key Types
//!
//! - `Card`, `Pack`, `Cycle`, `Faction`, `CardType`: the entity model
//! - `CardCatalog`: validated, indexed lookup over all entities
//! - `load_dir`: build a catalog from JSON data files

pub mod card;
pub mod catalog;
pub mod faction;
pub mod loader;
pub mod pack;

pub use card::Card;
pub use catalog::CardCatalog;
pub use faction::{CardType, Faction};
pub use loader::{load_dir, CatalogError};
pub use pack::{Cycle, Pack};
