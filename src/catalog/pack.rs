//! Pack and cycle entities.
//!
//! Cards are released in packs; packs are grouped into cycles. A pack's
//! release date decides card availability.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pack entity - one released set of cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    /// Unique pack code.
    pub code: String,

    /// Pack name.
    pub name: String,

    /// Release order of the pack within its cycle.
    #[serde(default)]
    pub position: i64,

    /// Number of distinct cards in the pack.
    #[serde(default)]
    pub size: i64,

    /// Code of the cycle this pack belongs to.
    pub cycle_code: String,

    /// Release date. `None` while unreleased or unannounced.
    #[serde(default)]
    pub date_release: Option<NaiveDate>,
}

impl Pack {
    /// Create a new pack.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        cycle_code: impl Into<String>,
        position: i64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            position,
            size: 0,
            cycle_code: cycle_code.into(),
            date_release: None,
        }
    }

    /// Set the release date (builder pattern).
    #[must_use]
    pub fn released_on(mut self, date: NaiveDate) -> Self {
        self.date_release = Some(date);
        self
    }

    /// Whether the pack is out on the given date.
    #[must_use]
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        matches!(self.date_release, Some(release) if release <= date)
    }
}

/// Cycle entity - a group of packs released together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// Unique cycle code.
    pub code: String,

    /// Cycle name.
    pub name: String,

    /// Release order of the cycle.
    #[serde(default)]
    pub position: i64,

    /// Number of packs in the cycle.
    #[serde(default)]
    pub size: i64,
}

impl Cycle {
    /// Create a new cycle.
    pub fn new(code: impl Into<String>, name: impl Into<String>, position: i64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            position,
            size: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_pack_availability() {
        let pack = Pack::new("core", "Core Set", "core", 1).released_on(date("2015-10-08"));

        assert!(pack.is_available_on(date("2015-10-08")));
        assert!(pack.is_available_on(date("2020-01-01")));
        assert!(!pack.is_available_on(date("2015-10-07")));

        let unreleased = Pack::new("promo", "Promos", "promo", 1);
        assert!(!unreleased.is_available_on(date("2030-01-01")));
    }

    #[test]
    fn test_pack_date_from_json() {
        let json = r#"{
            "code": "core",
            "name": "Core Set",
            "position": 1,
            "size": 221,
            "cycle_code": "core",
            "date_release": "2015-10-08"
        }"#;
        let pack: Pack = serde_json::from_str(json).unwrap();
        assert_eq!(pack.date_release, Some(date("2015-10-08")));
        assert_eq!(pack.size, 221);
    }

    #[test]
    fn test_pack_null_date_from_json() {
        let json = r#"{"code": "p", "name": "P", "cycle_code": "c", "date_release": null}"#;
        let pack: Pack = serde_json::from_str(json).unwrap();
        assert_eq!(pack.date_release, None);
    }
}
