use super::common::*;
use crate::recommendation::explanation::{
    explain, format_currency, reasons, EXPLANATION_RULES, FALLBACK_EXPLANATION, MAX_REASONS,
};

#[test]
fn rule_table_keeps_documented_order() {
    let keys: Vec<&str> = EXPLANATION_RULES.iter().map(|rule| rule.key).collect();
    assert_eq!(
        keys,
        vec![
            "value",
            "bedroom_surplus",
            "short_commute",
            "school_quality",
            "pool_match",
            "modern_construction",
            "luxury",
            "outdoor_space",
            "smart_home",
        ]
    );
}

#[test]
fn explanation_joins_first_three_reasons() {
    let listing = property("12 Elm Street");
    let explanation = explain(&listing, 73, &preferences());

    assert_eq!(
        explanation,
        "Great value at $250,000, well within your budget. \
3 bedrooms gives you 1 more than you need. \
Short 20-minute commute"
    );
}

#[test]
fn all_satisfied_reasons_are_collected_in_order() {
    let mut listing = property("12 Elm Street");
    listing.description = Some("LUXURY kitchen, fenced Backyard and Smart Home wiring".to_string());

    let all = reasons(&listing, 73, &preferences());

    assert_eq!(all.len(), EXPLANATION_RULES.len());
    assert_eq!(all[3], "Highly rated schools (9/10)");
    assert_eq!(all[4], "Includes the pool you asked for");
    assert_eq!(all[5], "Modern construction (built 2015)");
    assert_eq!(all[6], "Luxury finishes throughout");
    assert_eq!(all[7], "Private garden or yard space");
    assert_eq!(all[8], "Smart home features built in");

    let explanation = explain(&listing, 73, &preferences());
    assert_eq!(explanation.split(". ").count(), MAX_REASONS);
}

#[test]
fn later_rules_surface_when_earlier_ones_fail() {
    let mut listing = plain_property("22 Quiet Lane");
    listing.school_rating = 8.5;
    listing.description = Some("Mature garden with fruit trees".to_string());

    let explanation = explain(&listing, 40, &plain_preferences());

    assert_eq!(
        explanation,
        "Highly rated schools (8.5/10). Private garden or yard space"
    );
}

#[test]
fn pool_reason_requires_the_buyer_to_ask_for_one() {
    let mut listing = plain_property("23 Splash Road");
    listing.has_pool = true;

    assert_eq!(explain(&listing, 40, &plain_preferences()), FALLBACK_EXPLANATION);

    let mut prefs = plain_preferences();
    prefs.must_have_pool = true;
    assert_eq!(
        explain(&listing, 40, &prefs),
        "Includes the pool you asked for"
    );
}

#[test]
fn no_satisfied_reason_falls_back() {
    let listing = plain_property("24 Basic Street");
    assert_eq!(
        explain(&listing, 38, &plain_preferences()),
        FALLBACK_EXPLANATION
    );
}

#[test]
fn missing_description_is_treated_as_empty() {
    let mut listing = plain_property("25 Blank Street");
    listing.description = None;
    assert_eq!(
        explain(&listing, 38, &plain_preferences()),
        FALLBACK_EXPLANATION
    );
}

#[test]
fn currency_uses_thousands_separators() {
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(999.0), "$999");
    assert_eq!(format_currency(250_000.0), "$250,000");
    assert_eq!(format_currency(1_250_000.4), "$1,250,000");
}
