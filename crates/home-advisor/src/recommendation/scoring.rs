use serde::{Deserialize, Serialize};

use super::domain::{Preferences, Property};

/// Reference floor area that earns half of the size sub-score.
pub const REFERENCE_SIZE_SQFT: f64 = 2000.0;

/// Construction year after which a listing earns the amenity bonus.
const MODERN_AMENITY_YEAR: i32 = 2000;

/// Criteria contributing to the weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Budget,
    Bedrooms,
    Commute,
    School,
    Size,
    Amenities,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Budget,
        Criterion::Bedrooms,
        Criterion::Commute,
        Criterion::School,
        Criterion::Size,
        Criterion::Amenities,
    ];

    /// Fixed weights; they sum to 1.0 and are never redistributed.
    pub const fn weight(self) -> f64 {
        match self {
            Criterion::Budget => 0.25,
            Criterion::Bedrooms => 0.15,
            Criterion::Commute => 0.20,
            Criterion::School => 0.15,
            Criterion::Size => 0.10,
            Criterion::Amenities => 0.15,
        }
    }

    /// Unweighted sub-score. A criterion whose precondition fails yields 0.
    pub fn sub_score(self, property: &Property, prefs: &Preferences) -> f64 {
        match self {
            Criterion::Budget => budget_score(property, prefs),
            Criterion::Bedrooms => bedroom_score(property, prefs),
            Criterion::Commute => commute_score(property, prefs),
            Criterion::School => school_score(property, prefs),
            Criterion::Size => size_score(property),
            Criterion::Amenities => amenity_score(property, prefs),
        }
    }
}

/// One criterion's contribution, kept for audits and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub sub_score: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<CriterionScore>,
}

impl ScoreBreakdown {
    pub fn weighted_sum(&self) -> f64 {
        self.components.iter().map(|component| component.weighted).sum()
    }

    /// Rounded and clamped to 0-100.
    pub fn total(&self) -> u8 {
        let rounded = self.weighted_sum().round();
        if rounded.is_finite() {
            rounded.clamp(0.0, 100.0) as u8
        } else {
            0
        }
    }
}

pub fn breakdown(property: &Property, prefs: &Preferences) -> ScoreBreakdown {
    let components = Criterion::ALL
        .into_iter()
        .map(|criterion| {
            let sub_score = criterion.sub_score(property, prefs);
            CriterionScore {
                criterion,
                sub_score,
                weighted: sub_score * criterion.weight(),
            }
        })
        .collect();

    ScoreBreakdown { components }
}

/// Suitability of a listing for the buyer, 0-100.
pub fn score(property: &Property, prefs: &Preferences) -> u8 {
    breakdown(property, prefs).total()
}

#[inline]
fn budget_score(property: &Property, prefs: &Preferences) -> f64 {
    let in_range = prefs.budget_min <= property.price && property.price <= prefs.budget_max;
    if !in_range || prefs.budget_max <= 0.0 {
        return 0.0;
    }

    (1.0 - (property.price / prefs.budget_max).min(1.0)) * 100.0
}

#[inline]
fn bedroom_score(property: &Property, prefs: &Preferences) -> f64 {
    if property.bedrooms < prefs.min_bedrooms {
        return 0.0;
    }

    // Up to 110 before weighting; only the total is clamped.
    let surplus = f64::from(property.bedrooms - prefs.min_bedrooms);
    80.0 + (surplus * 10.0).min(30.0)
}

#[inline]
fn commute_score(property: &Property, prefs: &Preferences) -> f64 {
    if property.commute_time_min > prefs.max_commute_time || prefs.max_commute_time <= 0.0 {
        return 0.0;
    }

    (100.0 - (property.commute_time_min / prefs.max_commute_time) * 100.0).max(0.0)
}

#[inline]
fn school_score(property: &Property, prefs: &Preferences) -> f64 {
    if property.school_rating < prefs.min_school_rating {
        return 0.0;
    }

    (property.school_rating / 10.0) * 100.0
}

#[inline]
fn size_score(property: &Property) -> f64 {
    ((property.size_sqft / REFERENCE_SIZE_SQFT) * 50.0).min(100.0)
}

#[inline]
fn amenity_score(property: &Property, prefs: &Preferences) -> f64 {
    let mut score: f64 = 50.0;
    if property.has_pool {
        score += 20.0;
    }
    if property.garage_spaces >= prefs.min_garage_spaces {
        score += 15.0;
    }
    if property.year_built > MODERN_AMENITY_YEAR {
        score += 15.0;
    }

    score.min(100.0)
}
