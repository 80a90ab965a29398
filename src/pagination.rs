//! Result views, page slicing and navigation strips.
//!
//! Each view mode shows a different number of cards per page. `paginate`
//! slices a row list; `Pagination` is the data behind the navigation
//! strip (first / previous / current / next / last, with ellipses when
//! pages are hidden); `SetNavigation` is the strip shown on single-card
//! pages.

use serde::{Deserialize, Serialize};

use crate::catalog::{Card, CardCatalog, Pack};

/// Result view mode. Unknown view keys fall back to `List`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Compact table, 240 per page.
    #[default]
    List,
    /// Full text spoiler, 240 per page.
    Spoiler,
    /// Card images, 20 per page.
    Card,
    /// Scans, 20 per page.
    Scan,
    /// One-line entries grouped by sort value, 1000 per page.
    Short,
}

impl View {
    /// Resolve a view key; unknown keys give `List`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "spoiler" => View::Spoiler,
            "card" => View::Card,
            "scan" => View::Scan,
            "short" => View::Short,
            _ => View::List,
        }
    }

    /// The query-string key of this view.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            View::List => "list",
            View::Spoiler => "spoiler",
            View::Card => "card",
            View::Scan => "scan",
            View::Short => "short",
        }
    }

    /// Cards shown per page in this view.
    #[must_use]
    pub fn page_size(self) -> usize {
        match self {
            View::List | View::Spoiler => 240,
            View::Card | View::Scan => 20,
            View::Short => 1000,
        }
    }
}

/// One page of results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows of this page.
    pub items: &'a [T],

    /// Resolved page number (a page past the end resets to 1).
    pub page: usize,

    /// 1-based row number of the first item.
    pub first: usize,

    /// 1-based row number of the last item. `first - 1` when empty.
    pub last: usize,

    /// Total rows across all pages.
    pub total: usize,
}

/// Slice one page out of a row list.
///
/// A requested page whose first row lies past the end resets to page 1.
///
/// ## Example
///
/// ```
/// use carddb::pagination::{paginate, View};
///
/// let rows: Vec<u32> = (0..50).collect();
/// let page = paginate(&rows, View::Card, 2);
/// assert_eq!(page.items.len(), 20);
/// assert_eq!((page.first, page.last), (21, 40));
/// ```
#[must_use]
pub fn paginate<T>(rows: &[T], view: View, page: usize) -> Page<'_, T> {
    let page_size = view.page_size();
    let mut page = page.max(1);
    let mut start = page_size * (page - 1);
    if start > rows.len() {
        page = 1;
        start = 0;
    }
    let end = (start + page_size).min(rows.len());
    let items = &rows[start..end];
    Page {
        items,
        page,
        first: start + 1,
        last: start + items.len(),
        total: rows.len(),
    }
}

/// One entry of the navigation strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationItem {
    /// 1-based page number.
    pub page: usize,

    /// 1-based row number where the page starts.
    pub start: usize,

    /// 1-based row number where the page ends.
    pub end: usize,
}

/// The navigation strip of a result page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Link to page 1; present only past page 2.
    pub first: Option<PaginationItem>,

    /// Link to the previous page.
    pub previous: Option<PaginationItem>,

    /// The current page (rendered without a link).
    pub current: PaginationItem,

    /// Link to the next page.
    pub next: Option<PaginationItem>,

    /// Link to the final page; present only before the second-to-last.
    pub last: Option<PaginationItem>,

    /// Total rows.
    pub total: usize,

    /// More than one page is hidden before the previous link.
    pub ellipsis_before: bool,

    /// More than one page is hidden after the next link.
    pub ellipsis_after: bool,
}

impl Pagination {
    /// Build the strip for a result set.
    ///
    /// `current_first` is the 1-based row number the current page starts
    /// at (`Page::first`). A total smaller than the page size shrinks
    /// the page size to the total.
    #[must_use]
    pub fn build(page_size: usize, total: usize, current_first: usize) -> Self {
        if total == 0 {
            return Self {
                first: None,
                previous: None,
                current: PaginationItem {
                    page: 1,
                    start: 0,
                    end: 0,
                },
                next: None,
                last: None,
                total: 0,
                ellipsis_before: false,
                ellipsis_after: false,
            };
        }

        let page_size = page_size.min(total);
        let page_count = total.div_ceil(page_size);
        let page_index = current_first.max(1).div_ceil(page_size);

        let item = |page: usize| PaginationItem {
            page,
            start: page_size * (page - 1) + 1,
            end: (page_size * page).min(total),
        };

        Self {
            first: (page_index > 2).then(|| item(1)),
            previous: (page_index > 1).then(|| item(page_index - 1)),
            current: item(page_index),
            next: (page_index < page_count).then(|| item(page_index + 1)),
            last: (page_index < page_count - 1).then(|| item(page_count)),
            total,
            ellipsis_before: page_index > 3,
            ellipsis_after: page_index < page_count.saturating_sub(2),
        }
    }
}

/// Previous/next links within a card's pack, for single-card pages.
#[derive(Clone, Copy, Debug)]
pub struct SetNavigation<'a> {
    /// The card before this one in the pack.
    pub previous: Option<&'a Card>,

    /// The card after this one in the pack.
    pub next: Option<&'a Card>,

    /// The pack itself.
    pub pack: &'a Pack,
}

/// Build the set-navigation strip for a card.
#[must_use]
pub fn set_navigation<'a>(catalog: &'a CardCatalog, card: &Card) -> SetNavigation<'a> {
    SetNavigation {
        previous: catalog.previous_card(card),
        next: catalog.next_card(card),
        pack: catalog.pack_of(card),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keys() {
        assert_eq!(View::from_key("spoiler"), View::Spoiler);
        assert_eq!(View::from_key("nonsense"), View::List);
        assert_eq!(View::from_key(""), View::List);
        assert_eq!(View::Card.page_size(), 20);
        assert_eq!(View::Short.page_size(), 1000);
    }

    #[test]
    fn test_paginate_first_page() {
        let rows: Vec<u32> = (0..500).collect();
        let page = paginate(&rows, View::List, 1);
        assert_eq!(page.items.len(), 240);
        assert_eq!((page.first, page.last, page.total), (1, 240, 500));
    }

    #[test]
    fn test_paginate_partial_last_page() {
        let rows: Vec<u32> = (0..500).collect();
        let page = paginate(&rows, View::List, 3);
        assert_eq!(page.items.len(), 20);
        assert_eq!((page.first, page.last), (481, 500));
    }

    #[test]
    fn test_paginate_resets_past_the_end() {
        let rows: Vec<u32> = (0..50).collect();
        let page = paginate(&rows, View::Card, 9);
        assert_eq!(page.page, 1);
        assert_eq!((page.first, page.last), (1, 20));
    }

    #[test]
    fn test_paginate_page_zero_behaves_like_one() {
        let rows: Vec<u32> = (0..5).collect();
        let page = paginate(&rows, View::Card, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn test_paginate_empty_rows() {
        let rows: Vec<u32> = Vec::new();
        let page = paginate(&rows, View::List, 1);
        assert!(page.items.is_empty());
        assert_eq!((page.first, page.last, page.total), (1, 0, 0));
    }

    #[test]
    fn test_pagination_middle_page() {
        // 1000 rows, 20 per page, standing on page 5 (rows 81..100).
        let strip = Pagination::build(20, 1000, 81);
        assert_eq!(strip.current.page, 5);
        assert_eq!((strip.current.start, strip.current.end), (81, 100));
        assert_eq!(strip.first.unwrap().page, 1);
        assert_eq!(strip.previous.unwrap().page, 4);
        assert_eq!(strip.next.unwrap().page, 6);
        assert_eq!(strip.last.unwrap().page, 50);
        assert!(strip.ellipsis_before);
        assert!(strip.ellipsis_after);
    }

    #[test]
    fn test_pagination_first_page_has_no_back_links() {
        let strip = Pagination::build(20, 100, 1);
        assert!(strip.first.is_none());
        assert!(strip.previous.is_none());
        assert_eq!(strip.next.unwrap().page, 2);
        assert_eq!(strip.last.unwrap().page, 5);
        assert!(!strip.ellipsis_before);
        assert!(strip.ellipsis_after);
    }

    #[test]
    fn test_pagination_last_page_has_no_forward_links() {
        let strip = Pagination::build(20, 100, 81);
        assert_eq!(strip.current.page, 5);
        assert!(strip.next.is_none());
        assert!(strip.last.is_none());
        assert_eq!(strip.previous.unwrap().page, 4);
        assert!(strip.first.is_some());
    }

    #[test]
    fn test_pagination_second_page_hides_first_link() {
        // On page 2 the previous link already reaches page 1.
        let strip = Pagination::build(20, 100, 21);
        assert!(strip.first.is_none());
        assert_eq!(strip.previous.unwrap().page, 1);
    }

    #[test]
    fn test_pagination_single_page() {
        let strip = Pagination::build(240, 37, 1);
        // Page size shrinks to the total; one page, no links.
        assert_eq!(strip.current.page, 1);
        assert_eq!((strip.current.start, strip.current.end), (1, 37));
        assert!(strip.first.is_none());
        assert!(strip.previous.is_none());
        assert!(strip.next.is_none());
        assert!(strip.last.is_none());
        assert!(!strip.ellipsis_before);
        assert!(!strip.ellipsis_after);
    }

    #[test]
    fn test_pagination_empty() {
        let strip = Pagination::build(240, 0, 1);
        assert_eq!(strip.total, 0);
        assert!(strip.next.is_none());
    }
}
