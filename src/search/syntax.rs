//! Query-language parsing and canonical rebuilding.
//!
//! The search box accepts a small query language:
//!
//! ```text
//! stark o<3 t:character k:"Direwolf"|Beast u:1
//! ```
//!
//! Whitespace separates tokens; double quotes keep spaces inside a
//! value; `|` separates OR-ed values inside one condition. A token that
//! starts with a field letter immediately followed by an operator is a
//! typed condition; anything else searches the card name. Parsing never
//! fails - malformed input degrades to name searches or is dropped.

use tracing::debug;

use super::condition::{Condition, Operator, ValueList};
use super::fields::SearchField;

/// Parse a query string into conditions.
///
/// ## Example
///
/// ```
/// use carddb::search::{parse, Operator, SearchField};
///
/// let conditions = parse("winter o<3 f:stark|greyjoy");
/// assert_eq!(conditions.len(), 3);
/// assert_eq!(conditions[0].field, SearchField::Name);
/// assert_eq!(conditions[1].operator, Operator::AtMost);
/// assert_eq!(conditions[2].values.as_slice(), ["stark", "greyjoy"]);
/// ```
#[must_use]
pub fn parse(query: &str) -> Vec<Condition> {
    let tokens = split_tokens(query);
    let conditions: Vec<Condition> = tokens
        .iter()
        .filter_map(|token| parse_token(token))
        .collect();
    debug!(
        query,
        conditions = conditions.len(),
        "parsed search query"
    );
    conditions
}

/// Rebuild the canonical query string for a condition list.
///
/// Values are re-quoted when they contain anything beyond letters,
/// digits, `_`, `-` or `&`; conditions with no values are skipped.
#[must_use]
pub fn build_query(conditions: &[Condition]) -> String {
    let parts: Vec<String> = conditions
        .iter()
        .filter(|c| !c.values.is_empty())
        .map(Condition::to_string)
        .collect();
    parts.join(" ")
}

/// Split a query into whitespace-separated tokens, keeping quoted
/// spans intact. An unterminated quote runs to the end of the query.
fn split_tokens(query: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in query.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Parse one token. Returns `None` for tokens with nothing to search
/// (an empty quoted string, a lone operator).
fn parse_token(token: &str) -> Option<Condition> {
    let mut chars = token.chars();
    let first = chars.next()?;
    let second = chars.next();

    if let (Some(field), Some(operator)) = (
        SearchField::from_letter(first),
        second.and_then(Operator::from_symbol),
    ) {
        // Both prefix chars are ASCII, so the value part starts at 2.
        let mut condition = Condition::new(field, operator);
        condition.values = split_values(&token[2..]);
        return Some(condition);
    }

    let values = split_values(token);
    if values.is_empty() {
        return None;
    }
    let mut condition = Condition::new(SearchField::Name, Operator::Match);
    condition.values = values;
    Some(condition)
}

/// Split a value part on `|`, stripping quotes and dropping empties.
fn split_values(raw: &str) -> ValueList {
    let mut values = ValueList::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in raw.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == '|' && !in_quotes {
            if !current.is_empty() {
                values.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        values.push(current);
    }
    values
}
