// Integration tests for bozor
use bozor_core::{
    evaluate, interpret, Catalog, CompareRejection, ComparisonSet, ConstraintSet, Listing,
    ListingId, SearchQuery,
};
use serde_json::json;

fn sample_catalog() -> Catalog {
    let catalog = Catalog::new();
    catalog
        .upsert_all(vec![
            Listing::new(ListingId::Integer(1), "Квартиры", 45000.0)
                .with_name("2-комнатная квартира")
                .with_description("Светлая квартира рядом с метро")
                .with_attributes(json!({ "rooms": 2, "district": "Mirabad", "area": 54.0 })),
            Listing::new(ListingId::Integer(2), "Квартиры", 62000.0)
                .with_name("3-комнатная квартира")
                .with_attributes(json!({ "specs": { "rooms": 3, "area": 78.0 } })),
            Listing::new(ListingId::Integer(3), "Дома", 120000.0)
                .with_name("Дом в Мирабадском районе")
                .with_attributes(json!({ "rooms": 5 })),
            Listing::new(ListingId::Integer(4), "Cars", 18000.0)
                .with_name("Chevrolet Cobalt")
                .with_attributes(json!({ "year": 2019, "transmission": "automatic" })),
            Listing::new(ListingId::Integer(5), "Телефоны", 800.0)
                .with_name("Смартфон")
                .with_attributes(json!("{broken json")),
        ])
        .unwrap();
    catalog
}

#[test]
fn test_catalog_crud() {
    let catalog = sample_catalog();
    assert_eq!(catalog.count(), 5);
    assert!(catalog.get("4").is_some());
    assert!(catalog.delete("4"));
    assert_eq!(catalog.count(), 4);
}

#[test]
fn test_text_query_drives_search() {
    let catalog = sample_catalog();
    let outcome = catalog.search(&SearchQuery {
        text: Some("квартира 2 комнаты до 50k".to_string()),
        ..Default::default()
    });
    // only listing 1 is an apartment, within budget, with >= 2 rooms
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].listing.id, ListingId::Integer(1));
    // the derived constraints are echoed back for the UI
    assert_eq!(outcome.constraints.rooms, Some(2));
    assert_eq!(outcome.constraints.max_price, Some(50000.0));
}

#[test]
fn test_specs_nested_attributes_flow_through_search() {
    let catalog = sample_catalog();
    let outcome = catalog.search(&SearchQuery {
        text: Some("квартира 3 комнаты до 70000".to_string()),
        ..Default::default()
    });
    // listing 2 keeps its rooms under a nested specs object
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].listing.id, ListingId::Integer(2));
}

#[test]
fn test_location_boost_ranks_district_match_first() {
    let catalog = sample_catalog();
    let outcome = catalog.search(&SearchQuery {
        text: Some("квартиры в мирабад до 70000".to_string()),
        ..Default::default()
    });
    assert!(outcome.results.len() >= 2);
    // listing 1 carries district=Mirabad and gets the +5 boost
    assert_eq!(outcome.results[0].listing.id, ListingId::Integer(1));
    assert!(outcome.results[0].score > outcome.results[1].score);
}

#[test]
fn test_malformed_attributes_do_not_break_the_collection() {
    let catalog = sample_catalog();
    // the broken-payload phone is still returned by an open search
    let outcome = catalog.search(&SearchQuery::default());
    assert_eq!(outcome.results.len(), 5);
}

#[test]
fn test_interpreted_examples_from_the_catalog_ui() {
    let c = interpret("бюджет до 60000");
    assert_eq!(c.max_price, Some(60000.0));

    let c = interpret("дом в мирабад");
    assert!(c.category.unwrap().iter().any(|t| t == "Дома"));
    assert_eq!(c.location_keyword.as_deref(), Some("mirabad"));
}

#[test]
fn test_max_price_monotonicity_over_catalog() {
    let catalog = sample_catalog();
    let ids = |max: f64| {
        catalog
            .search(&SearchQuery {
                constraints: Some(ConstraintSet {
                    max_price: Some(max),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .results
            .into_iter()
            .map(|s| s.listing.id)
            .collect::<Vec<_>>()
    };
    let loose = ids(120000.0);
    let tight = ids(50000.0);
    for id in &tight {
        assert!(loose.contains(id));
    }
    assert!(tight.len() <= loose.len());
}

#[test]
fn test_comparison_lifecycle() {
    let catalog = sample_catalog();
    let mut set = ComparisonSet::new();

    let flat = catalog.get("1").unwrap();
    let bigger_flat = catalog.get("2").unwrap();
    let house = catalog.get("3").unwrap();
    let car = catalog.get("4").unwrap();

    set.add(flat.clone()).unwrap();
    // apartments and houses share the real estate group
    set.add(house).unwrap();
    // cross-domain candidate, checked while the set still has room
    assert_eq!(set.can_add(&car), Err(CompareRejection::CategoryMismatch));
    set.add(bigger_flat).unwrap();
    assert_eq!(set.len(), 3);

    // duplicate beats full in the check order
    assert_eq!(set.can_add(&flat), Err(CompareRejection::Duplicate));
    // a 4th distinct add hits the size cap - even a cross-domain
    // candidate reports full once the set is full
    let fourth = Listing::new(ListingId::Integer(9), "Квартиры", 1.0);
    assert_eq!(set.can_add(&fourth), Err(CompareRejection::Full));
    assert_eq!(set.can_add(&car), Err(CompareRejection::Full));

    set.remove(&ListingId::Integer(1));
    assert!(set.can_add(&fourth).is_ok());
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_search_is_deterministic() {
    let catalog = sample_catalog();
    let query = SearchQuery {
        text: Some("квартира до 70000".to_string()),
        ..Default::default()
    };
    let a: Vec<ListingId> = catalog
        .search(&query)
        .results
        .into_iter()
        .map(|s| s.listing.id)
        .collect();
    for _ in 0..5 {
        let b: Vec<ListingId> = catalog
            .search(&query)
            .results
            .into_iter()
            .map(|s| s.listing.id)
            .collect();
        assert_eq!(a, b);
    }
}

#[test]
fn test_evaluate_directly_without_catalog() {
    let listings = vec![
        Listing::new(ListingId::Integer(1), "Cars", 15000.0)
            .with_attributes(json!({ "year": 2016 })),
        Listing::new(ListingId::Integer(2), "Cars", 15000.0)
            .with_attributes(json!({ "year": 2021 })),
    ];
    let mut constraints = ConstraintSet::new();
    constraints.facets.insert(
        "year".to_string(),
        bozor_core::FacetConstraint::Range {
            min: Some(2018.0),
            max: None,
        },
    );
    let results = evaluate(&listings, &constraints);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].listing.id, ListingId::Integer(2));
}
