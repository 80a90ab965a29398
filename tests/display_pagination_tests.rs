//! Result page assembly tests.
//!
//! Search results flow into pages, summaries, navigation strips and
//! meta text. These tests run that flow the way a result page handler
//! would.

use carddb::catalog::{Card, CardCatalog, CardType, Cycle, Faction, Pack};
use carddb::core::SiteConfig;
use carddb::display::{card_meta, group_for_short_view, page_title, CardSummary};
use carddb::pagination::{paginate, set_navigation, Pagination, View};
use carddb::search::{execute, parse, validate, SearchSort};
use chrono::NaiveDate;

fn fixture() -> CardCatalog {
    let mut cards = Vec::new();
    // Fifty characters spread over two packs, positions 1..25 each.
    for i in 0..50u32 {
        let (pack_num, pack) = if i < 25 { (1, "core") } else { (2, "wotn") };
        let position = i64::from(i % 25) + 1;
        cards.push(
            Card::new(
                format!("{pack_num:02}{position:03}"),
                format!("Character {i:02}"),
                "character",
                if i % 2 == 0 { "stark" } else { "lannister" },
                pack,
            )
            .with_position(position)
            .with_cost(i64::from(i % 5))
            .with_strength(i64::from(i % 7)),
        );
    }

    CardCatalog::from_parts(
        vec![
            Cycle::new("core", "Core Set", 1),
            Cycle::new("westeros", "Westeros Cycle", 2),
        ],
        vec![
            Pack::new("core", "Core Set", "core", 1).released_on("2015-10-08".parse().unwrap()),
            Pack::new("wotn", "Wolves of the North", "westeros", 1),
        ],
        vec![
            Faction::new("stark", "House Stark"),
            Faction::new("lannister", "House Lannister"),
        ],
        vec![CardType::new("character", "Character")],
        cards,
    )
    .unwrap()
}

fn today() -> NaiveDate {
    "2016-01-01".parse().unwrap()
}

#[test]
fn test_result_page_flow() {
    let catalog = fixture();
    let conditions = validate(parse("t:character"));
    let rows = execute(&catalog, &conditions, SearchSort::Set);
    assert_eq!(rows.len(), 50);

    // Card view shows 20 per page; page 2 is rows 21..40.
    let page = paginate(&rows, View::Card, 2);
    assert_eq!(page.items.len(), 20);
    assert_eq!((page.first, page.last), (21, 40));

    let strip = Pagination::build(View::Card.page_size(), page.total, page.first);
    assert_eq!(strip.current.page, 2);
    assert_eq!(strip.previous.unwrap().page, 1);
    assert_eq!(strip.next.unwrap().page, 3);
    // Page 3 is the last page: no last link from page 2.
    assert!(strip.last.is_none());

    let summaries: Vec<CardSummary> = page
        .items
        .iter()
        .map(|card| CardSummary::build(&catalog, card, today()))
        .collect();
    assert_eq!(summaries.len(), 20);
    // Set order crossed into the unreleased second pack at row 26.
    assert!(summaries.first().unwrap().available);
    assert!(!summaries.last().unwrap().available);
}

#[test]
fn test_requested_page_past_the_end_resets() {
    let catalog = fixture();
    let conditions = validate(parse("t:character"));
    let rows = execute(&catalog, &conditions, SearchSort::Set);

    let page = paginate(&rows, View::Card, 40);
    assert_eq!(page.page, 1);
    assert_eq!(page.first, 1);
}

#[test]
fn test_single_result_gets_set_navigation() {
    let catalog = fixture();
    let conditions = validate(parse("01003"));
    let rows = execute(&catalog, &conditions, SearchSort::Name);
    assert_eq!(rows.len(), 1);

    let nav = set_navigation(&catalog, rows[0]);
    assert_eq!(nav.pack.code, "core");
    assert_eq!(nav.previous.unwrap().code, "01002");
    assert_eq!(nav.next.unwrap().code, "01004");
}

#[test]
fn test_short_view_groups_follow_sort() {
    let catalog = fixture();
    let conditions = validate(parse("t:character"));
    let rows = execute(&catalog, &conditions, SearchSort::Cost);
    let summaries: Vec<CardSummary> = rows
        .iter()
        .map(|card| CardSummary::build(&catalog, card, today()))
        .collect();

    let groups = group_for_short_view(&summaries, SearchSort::Cost);
    let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["0", "1", "2", "3", "4"]);
    assert_eq!(groups[0].1.len(), 10);
}

#[test]
fn test_page_titles_and_meta() {
    let catalog = fixture();
    let config = SiteConfig::new("A Game of Crowns", "Fantasy Press");

    assert_eq!(
        page_title(&catalog, &validate(parse("e:core")), "e:core"),
        "Core Set"
    );
    assert_eq!(
        page_title(&catalog, &validate(parse("o<2")), "o<2"),
        "o<2"
    );

    let card = catalog.card("01001").unwrap();
    assert_eq!(
        card_meta(&config, &catalog, card),
        "Character 00, a House Stark Character card for A Game of Crowns \
         from the set Core Set published by Fantasy Press."
    );
}
