use tracing::debug;

use super::domain::{Preferences, Property, RecommendationError, ScoredProperty};
use super::explanation::explain;
use super::filter::filter_catalog;
use super::scoring::score;

/// Default number of listings returned per request.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Filters, scores, explains and ranks the catalog, returning at most `max_results` listings.
///
/// Preferences and every catalog record are validated before filtering, so bad input fails the
/// whole request instead of quietly shrinking the result set. Listings with equal scores keep
/// their catalog order.
pub fn recommend(
    catalog: &[Property],
    prefs: &Preferences,
    max_results: usize,
) -> Result<Vec<ScoredProperty>, RecommendationError> {
    prefs.validate()?;
    for property in catalog {
        property.validate()?;
    }

    if max_results == 0 {
        return Ok(Vec::new());
    }

    let candidates = filter_catalog(catalog, prefs);
    let filtered = candidates.len();

    let mut ranked: Vec<ScoredProperty> = candidates
        .into_iter()
        .map(|property| score_property(property, prefs))
        .collect();

    // Stable sort: ties stay in catalog order.
    ranked.sort_by(|left, right| right.score.cmp(&left.score));
    ranked.truncate(max_results);

    debug!(
        catalog = catalog.len(),
        filtered,
        returned = ranked.len(),
        "ranked property recommendations"
    );

    Ok(ranked)
}

/// Scores and explains one listing from the same property/preferences pair.
pub fn score_property(property: &Property, prefs: &Preferences) -> ScoredProperty {
    let score = score(property, prefs);
    let explanation = explain(property, score, prefs);

    ScoredProperty {
        property: property.clone(),
        score,
        explanation,
    }
}
