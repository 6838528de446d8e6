use super::domain::{Preferences, Property};

/// Hard constraints a listing must satisfy before it is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Budget,
    Bedrooms,
    Commute,
    SchoolRating,
    City,
    Pool,
    Garage,
}

impl Constraint {
    pub const ALL: [Constraint; 7] = [
        Constraint::Budget,
        Constraint::Bedrooms,
        Constraint::Commute,
        Constraint::SchoolRating,
        Constraint::City,
        Constraint::Pool,
        Constraint::Garage,
    ];

    pub fn is_satisfied(self, property: &Property, prefs: &Preferences) -> bool {
        match self {
            Constraint::Budget => {
                prefs.budget_min <= property.price && property.price <= prefs.budget_max
            }
            Constraint::Bedrooms => property.bedrooms >= prefs.min_bedrooms,
            Constraint::Commute => property.commute_time_min <= prefs.max_commute_time,
            Constraint::SchoolRating => property.school_rating >= prefs.min_school_rating,
            Constraint::City => prefs
                .city_constraint()
                .map_or(true, |city| property.city == city),
            Constraint::Pool => !prefs.requires_pool() || property.has_pool,
            Constraint::Garage => property.garage_spaces >= prefs.min_garage_spaces,
        }
    }
}

/// First constraint the listing fails, if any.
pub fn first_violation(property: &Property, prefs: &Preferences) -> Option<Constraint> {
    Constraint::ALL
        .into_iter()
        .find(|constraint| !constraint.is_satisfied(property, prefs))
}

#[inline]
pub fn passes_all(property: &Property, prefs: &Preferences) -> bool {
    first_violation(property, prefs).is_none()
}

/// Keeps the listings that pass every hard constraint, in catalog order.
pub fn filter_catalog<'a>(catalog: &'a [Property], prefs: &Preferences) -> Vec<&'a Property> {
    catalog
        .iter()
        .filter(|property| passes_all(property, prefs))
        .collect()
}
