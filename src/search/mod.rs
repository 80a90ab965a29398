//! Search: the query mini-language and its evaluator.
//!
//! ## Key Types
//!
//! - `SearchField` / `FieldKind`: letter-addressed columns and typing
//! - `Condition` / `Operator`: one parsed clause
//! - `parse` / `validate` / `build_query`: query-string lifecycle
//! - `execute` / `SearchSort`: evaluation over the catalog
//! - `SearchFormOptions` / `build_query_from_form`: form support
//!
//! The usual pipeline is parse, validate, execute:
//!
//! ```
//! use carddb::search::{execute, parse, validate, SearchSort};
//! # let catalog = carddb::catalog::CardCatalog::default();
//!
//! let conditions = validate(parse("f:stark o<3"));
//! let rows = execute(&catalog, &conditions, SearchSort::Set);
//! ```

pub mod condition;
pub mod executor;
pub mod fields;
pub mod form;
pub mod syntax;
pub mod validate;

pub use condition::{needs_quotes, Condition, Operator, ValueList};
pub use executor::{execute, SearchSort};
pub use fields::{FieldKind, SearchField, LETTER_FIELDS};
pub use form::{
    build_query_from_form, resolve_single_set, FieldInput, FindRequest, SearchFormInput,
    SearchFormOptions, SingleSetTarget,
};
pub use syntax::{build_query, parse};
pub use validate::validate;
