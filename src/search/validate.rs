//! Condition validation.
//!
//! Parsing is permissive; validation enforces the typing rules before a
//! query runs. A condition that survives validation is safe to execute:
//! its operator is allowed for the field kind and its values have the
//! right shape. Everything else is dropped, mirroring the "bad input
//! finds nothing" behavior of the search page.

use tracing::debug;

use super::condition::{Condition, Operator};
use super::fields::{FieldKind, SearchField};

/// Validate a condition list, dropping anything ill-typed.
///
/// - string and code fields accept only `:` and `!`;
/// - integer fields accept all operators, but every value must parse as
///   an integer, and range operators keep only the first value;
/// - boolean fields accept only `:` and `!` with values `0` or `1`;
/// - release-date conditions accept only `:` and `!` with ISO date
///   prefixes (`2016`, `2016-10`, `2016-10-05`);
/// - conditions left without values are dropped.
#[must_use]
pub fn validate(conditions: Vec<Condition>) -> Vec<Condition> {
    let before = conditions.len();
    let validated: Vec<Condition> = conditions
        .into_iter()
        .filter_map(validate_condition)
        .collect();
    if validated.len() != before {
        debug!(
            dropped = before - validated.len(),
            kept = validated.len(),
            "dropped ill-typed search conditions"
        );
    }
    validated
}

fn validate_condition(mut condition: Condition) -> Option<Condition> {
    let equality_only = matches!(condition.operator, Operator::Match | Operator::Differ);

    match condition.field.kind() {
        FieldKind::String | FieldKind::Code => {
            if !equality_only {
                return None;
            }
            if condition.field == SearchField::DateRelease {
                condition.values.retain(|v| is_iso_date_prefix(v));
            }
        }
        FieldKind::Integer => {
            condition.values.retain(|v| v.parse::<i64>().is_ok());
            if !equality_only {
                condition.values.truncate(1);
            }
        }
        FieldKind::Boolean => {
            if !equality_only {
                return None;
            }
            condition.values.retain(|v| v == "0" || v == "1");
        }
    }

    if condition.values.is_empty() {
        return None;
    }
    Some(condition)
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn is_iso_date_prefix(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let widths = [4, 2, 2];
    parts.len() <= 3
        && parts.iter().zip(widths).all(|(part, width)| {
            part.len() == width && part.chars().all(|c| c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::syntax::parse;

    #[test]
    fn test_string_field_rejects_range_operators() {
        assert!(validate(parse("x<winter")).is_empty());
        assert_eq!(validate(parse("x:winter")).len(), 1);
        assert_eq!(validate(parse("x!winter")).len(), 1);
    }

    #[test]
    fn test_integer_values_must_parse() {
        assert!(validate(parse("o:abc")).is_empty());
        assert_eq!(validate(parse("o:3")).len(), 1);

        // Mixed values keep the numeric ones.
        let kept = validate(parse("o:3|abc|5"));
        assert_eq!(kept[0].values.as_slice(), ["3", "5"]);
    }

    #[test]
    fn test_range_operator_keeps_first_value() {
        let kept = validate(parse("s<4|6"));
        assert_eq!(kept[0].values.as_slice(), ["4"]);
    }

    #[test]
    fn test_boolean_values() {
        assert_eq!(validate(parse("u:1")).len(), 1);
        assert_eq!(validate(parse("u!0")).len(), 1);
        assert!(validate(parse("u:yes")).is_empty());
        assert!(validate(parse("u<1")).is_empty());
    }

    #[test]
    fn test_date_prefixes() {
        assert_eq!(validate(parse("r:2016")).len(), 1);
        assert_eq!(validate(parse("r:2016-10")).len(), 1);
        assert_eq!(validate(parse("r:2016-10-05")).len(), 1);
        assert!(validate(parse("r:october")).is_empty());
        assert!(validate(parse("r:2016-1")).is_empty());
        assert!(validate(parse("r<2016")).is_empty());
    }

    #[test]
    fn test_empty_conditions_dropped() {
        assert!(validate(parse("o:")).is_empty());
    }

    #[test]
    fn test_name_search_passes_through() {
        let kept = validate(parse("winter"));
        assert_eq!(kept.len(), 1);
        assert!(kept[0].is_name_search());
    }
}
