use super::common::*;
use crate::recommendation::filter::{filter_catalog, first_violation, passes_all, Constraint};

#[test]
fn reference_listing_passes_every_constraint() {
    assert!(passes_all(&property("12 Elm Street"), &preferences()));
}

#[test]
fn price_outside_budget_is_excluded() {
    let prefs = preferences();

    let mut cheap = property("1 Low Road");
    cheap.price = 199_999.0;
    assert_eq!(first_violation(&cheap, &prefs), Some(Constraint::Budget));

    let mut pricey = property("2 High Road");
    pricey.price = 500_001.0;
    assert_eq!(first_violation(&pricey, &prefs), Some(Constraint::Budget));

    let mut at_bounds = property("3 Edge Road");
    at_bounds.price = prefs.budget_max;
    assert!(passes_all(&at_bounds, &prefs));
    at_bounds.price = prefs.budget_min;
    assert!(passes_all(&at_bounds, &prefs));
}

#[test]
fn each_constraint_excludes_on_its_own() {
    let prefs = preferences();

    let mut listing = property("4 Oak Avenue");
    listing.bedrooms = 1;
    assert_eq!(first_violation(&listing, &prefs), Some(Constraint::Bedrooms));

    let mut listing = property("5 Oak Avenue");
    listing.commute_time_min = 61.0;
    assert_eq!(first_violation(&listing, &prefs), Some(Constraint::Commute));

    let mut listing = property("6 Oak Avenue");
    listing.school_rating = 4.9;
    assert_eq!(
        first_violation(&listing, &prefs),
        Some(Constraint::SchoolRating)
    );

    let mut listing = property("7 Oak Avenue");
    listing.has_pool = false;
    assert_eq!(first_violation(&listing, &prefs), Some(Constraint::Pool));

    let mut listing = property("8 Oak Avenue");
    listing.garage_spaces = 0;
    assert_eq!(first_violation(&listing, &prefs), Some(Constraint::Garage));
}

#[test]
fn city_match_is_exact_and_case_sensitive() {
    let mut prefs = preferences();
    let listing = property("9 Pine Court");

    prefs.city = "Austin".to_string();
    assert!(Constraint::City.is_satisfied(&listing, &prefs));

    prefs.city = "austin".to_string();
    assert!(!Constraint::City.is_satisfied(&listing, &prefs));

    prefs.city = "Denver".to_string();
    assert!(!Constraint::City.is_satisfied(&listing, &prefs));

    prefs.city = String::new();
    assert!(Constraint::City.is_satisfied(&listing, &prefs));
}

#[test]
fn pool_only_required_when_requested() {
    let mut listing = property("10 Birch Lane");
    listing.has_pool = false;

    assert!(!Constraint::Pool.is_satisfied(&listing, &preferences()));
    assert!(Constraint::Pool.is_satisfied(&listing, &plain_preferences()));
}

#[test]
fn pool_feature_tag_counts_as_a_pool_requirement() {
    let mut listing = property("10 Birch Lane");
    listing.has_pool = false;

    let mut prefs = plain_preferences();
    prefs.must_have_features = vec!["garage".to_string(), " Pool ".to_string()];
    assert!(!Constraint::Pool.is_satisfied(&listing, &prefs));

    prefs.must_have_features = vec!["garage".to_string()];
    assert!(Constraint::Pool.is_satisfied(&listing, &prefs));
}

#[test]
fn filter_keeps_catalog_order() {
    let prefs = preferences();
    let mut rejected = property("B Street");
    rejected.bedrooms = 0;
    let catalog = vec![
        property("C Street"),
        rejected,
        property("A Street"),
        property("D Street"),
    ];

    let kept: Vec<&str> = filter_catalog(&catalog, &prefs)
        .into_iter()
        .map(|listing| listing.address.as_str())
        .collect();

    assert_eq!(kept, vec!["C Street", "A Street", "D Street"]);
}

#[test]
fn empty_catalog_filters_to_empty() {
    assert!(filter_catalog(&[], &preferences()).is_empty());
}
