use crate::recommendation::domain::{Preferences, Property, SizePreference};

pub(super) fn property(address: &str) -> Property {
    Property {
        property_id: None,
        address: address.to_string(),
        city: "Austin".to_string(),
        price: 250_000.0,
        bedrooms: 3,
        size_sqft: 2000.0,
        commute_time_min: 20.0,
        school_rating: 9.0,
        has_pool: true,
        garage_spaces: 2,
        year_built: 2015,
        description: None,
    }
}

pub(super) fn preferences() -> Preferences {
    Preferences {
        budget_min: 200_000.0,
        budget_max: 500_000.0,
        city: String::new(),
        min_bedrooms: 2,
        max_commute_time: 60.0,
        min_school_rating: 5.0,
        must_have_pool: true,
        must_have_features: Vec::new(),
        min_garage_spaces: 1,
        size_preference: SizePreference::Any,
        lifestyle_preferences: Vec::new(),
    }
}

/// Listing that trips none of the explanation rules against [`plain_preferences`].
pub(super) fn plain_property(address: &str) -> Property {
    Property {
        property_id: None,
        address: address.to_string(),
        city: "Austin".to_string(),
        price: 480_000.0,
        bedrooms: 2,
        size_sqft: 1400.0,
        commute_time_min: 55.0,
        school_rating: 7.0,
        has_pool: false,
        garage_spaces: 1,
        year_built: 1995,
        description: Some("Cozy starter home near the park".to_string()),
    }
}

pub(super) fn plain_preferences() -> Preferences {
    Preferences {
        must_have_pool: false,
        ..preferences()
    }
}
