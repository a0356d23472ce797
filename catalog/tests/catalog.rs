use hive_planner_catalog::{BeeRecord, Catalog, CatalogError};
use hive_planner_core::{BeeColor, BeeRarity, BeeSlug};

fn record(slug: &str, name: &str, rarity: BeeRarity, color: BeeColor) -> BeeRecord {
    BeeRecord {
        slug: BeeSlug::new(slug),
        name: name.to_owned(),
        rarity,
        color,
    }
}

#[test]
fn search_matches_name_rarity_and_color_case_insensitively() {
    let catalog = Catalog::builtin();

    let by_name: Vec<&str> = catalog
        .search("FROST")
        .into_iter()
        .map(|bee| bee.slug.as_str())
        .collect();
    assert_eq!(by_name, vec!["frosty-bee"]);

    let mythic = catalog.search("mythic");
    assert_eq!(mythic.len(), 6, "rarity names participate in search");

    let blue = catalog.search("blue");
    assert!(blue.iter().all(|bee| bee.color == BeeColor::Blue));
    assert!(!blue.is_empty());
}

#[test]
fn blank_search_returns_whole_catalog() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.search("   ").len(), catalog.len());
}

#[test]
fn filter_combines_rarity_and_color() {
    let catalog = Catalog::builtin();

    let red_legendaries: Vec<&str> = catalog
        .filter(Some(BeeRarity::Legendary), Some(BeeColor::Red))
        .into_iter()
        .map(|bee| bee.slug.as_str())
        .collect();
    assert_eq!(red_legendaries, vec!["demon-bee", "lion-bee"]);

    assert_eq!(catalog.filter(None, None).len(), catalog.len());
}

#[test]
fn json_catalog_ignores_unknown_fields() {
    let document = r#"[
        {"id": "1", "name": "Basic Bee", "slug": "basic-bee", "rarity": "common",
         "color": "colorless", "image_url": "/images/bees/basic-bee.png"},
        {"id": "2", "name": "Bomber Bee", "slug": "bomber-bee", "rarity": "rare",
         "color": "red", "abilities": ["Bomb"]}
    ]"#;

    let catalog = Catalog::from_json(document).expect("catalog parses");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.resolve("bomber-bee"),
        Some(&record("bomber-bee", "Bomber Bee", BeeRarity::Rare, BeeColor::Red))
    );
}

#[test]
fn duplicate_slugs_are_rejected() {
    let result = Catalog::from_records(vec![
        record("basic-bee", "Basic Bee", BeeRarity::Common, BeeColor::Colorless),
        record("basic-bee", "Other Bee", BeeRarity::Rare, BeeColor::Red),
    ]);

    assert!(matches!(result, Err(CatalogError::DuplicateSlug(slug)) if slug.as_str() == "basic-bee"));
}

#[test]
fn malformed_document_reports_parse_error() {
    let result = Catalog::from_json("{not json");
    assert!(matches!(result, Err(CatalogError::InvalidDocument(_))));
}

#[test]
fn color_breakdown_covers_every_bee() {
    let catalog = Catalog::builtin();
    let total: usize = catalog.count_by_color().values().sum();
    assert_eq!(total, catalog.len());
}
