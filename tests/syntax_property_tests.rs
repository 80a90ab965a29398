//! Property tests for the query language.
//!
//! The parser's contract is "never fail, degrade gracefully": any input
//! must parse without panicking, and the canonical rebuild of a
//! validated query must be a fixpoint - parsing it back yields the same
//! conditions.

use carddb::catalog::CardCatalog;
use carddb::deck::import_text;
use carddb::search::{build_query, parse, validate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_never_panics(query in ".*") {
        let _ = parse(&query);
    }

    #[test]
    fn parsed_values_never_contain_separators(query in ".*") {
        for condition in parse(&query) {
            for value in &condition.values {
                prop_assert!(!value.contains('"'));
                prop_assert!(!value.contains('|'));
            }
        }
    }

    #[test]
    fn canonical_form_is_a_fixpoint(query in ".*") {
        let validated = validate(parse(&query));
        let canonical = build_query(&validated);
        let reparsed = validate(parse(&canonical));
        prop_assert_eq!(&validated, &reparsed);
        // And the canonical form of the reparse is identical text.
        prop_assert_eq!(canonical, build_query(&reparsed));
    }

    #[test]
    fn well_formed_queries_survive_validation(
        letter in prop::sample::select(vec!['a', 'd', 'i', 'k', 'x']),
        value in "[a-zA-Z]{1,12}",
    ) {
        let query = format!("{letter}:{value}");
        let validated = validate(parse(&query));
        prop_assert_eq!(validated.len(), 1);
        prop_assert_eq!(build_query(&validated), query);
    }

    #[test]
    fn integer_conditions_keep_only_numbers(
        values in prop::collection::vec("[0-9]{1,3}|[a-z]{1,3}", 1..5),
    ) {
        let query = format!("o:{}", values.join("|"));
        for condition in validate(parse(&query)) {
            for value in &condition.values {
                prop_assert!(value.parse::<i64>().is_ok());
            }
        }
    }

    #[test]
    fn deck_text_import_never_panics(text in ".*") {
        let catalog = CardCatalog::default();
        let import = import_text(&catalog, &text);
        // An empty catalog can never resolve anything.
        prop_assert!(import.content.is_empty());
        prop_assert!(import.faction_code.is_none());
    }
}
