//! Search conditions: one parsed clause of a query.
//!
//! A condition is a (field, operator, values) triple. Conditions in a
//! query are ANDed together; the values inside one condition are ORed
//! (`f:stark|lannister` matches either faction).

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::fields::SearchField;

/// Comparison operator of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `:` - equals / contains.
    Match,
    /// `!` - differs / does not contain.
    Differ,
    /// `<` - at most (integer fields only).
    AtMost,
    /// `>` - at least (integer fields only).
    AtLeast,
}

impl Operator {
    /// Resolve an operator symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Some(match symbol {
            ':' => Operator::Match,
            '!' => Operator::Differ,
            '<' => Operator::AtMost,
            '>' => Operator::AtLeast,
            _ => return None,
        })
    }

    /// The query-language symbol for this operator.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operator::Match => ':',
            Operator::Differ => '!',
            Operator::AtMost => '<',
            Operator::AtLeast => '>',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Values of a condition. Almost always one or two entries.
pub type ValueList = SmallVec<[String; 2]>;

/// One parsed clause of a search query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// The field being filtered.
    pub field: SearchField,

    /// The comparison operator.
    pub operator: Operator,

    /// OR-ed values.
    pub values: ValueList,
}

impl Condition {
    /// Create a condition with no values yet.
    #[must_use]
    pub fn new(field: SearchField, operator: Operator) -> Self {
        Self {
            field,
            operator,
            values: ValueList::new(),
        }
    }

    /// Create a bare name-search condition.
    #[must_use]
    pub fn name_search(value: impl Into<String>) -> Self {
        let mut condition = Condition::new(SearchField::Name, Operator::Match);
        condition.values.push(value.into());
        condition
    }

    /// Add values (builder pattern).
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Whether this is a bare name search.
    #[must_use]
    pub fn is_name_search(&self) -> bool {
        self.field == SearchField::Name && self.operator == Operator::Match
    }

    /// The single value of the condition, when there is exactly one.
    #[must_use]
    pub fn single_value(&self) -> Option<&str> {
        match self.values.as_slice() {
            [value] => Some(value),
            _ => None,
        }
    }
}

/// A value needs quoting unless it is entirely letters, digits, `_`,
/// `-` or `&` (and not empty).
#[must_use]
pub fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '&'))
}

fn quoted(value: &str) -> String {
    if needs_quotes(value) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

impl fmt::Display for Condition {
    /// Canonical query-language form of the condition.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(letter) = self.field.letter() {
            write!(f, "{}{}", letter, self.operator)?;
        }
        let mut first = true;
        for value in &self.values {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{}", quoted(value))?;
            first = false;
        }
        Ok(())
    }
}
