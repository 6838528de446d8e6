use serde::{Deserialize, Deserializer, Serialize};

/// A single listing as supplied by the catalog. Identity is the address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub bedrooms: u32,
    pub size_sqft: f64,
    pub commute_time_min: f64,
    pub school_rating: f64,
    pub has_pool: bool,
    pub garage_spaces: u32,
    pub year_built: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Property {
    /// Listing text with a missing description read as empty.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Rejects records the engine cannot score meaningfully.
    pub fn validate(&self) -> Result<(), MalformedRecordError> {
        let malformed = |field: &'static str, reason: String| MalformedRecordError {
            record: self.address.clone(),
            field,
            reason,
        };

        if self.address.trim().is_empty() {
            return Err(malformed("address", "address must not be empty".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(malformed(
                "price",
                format!("{} is not a non-negative amount", self.price),
            ));
        }
        if !self.size_sqft.is_finite() || self.size_sqft <= 0.0 {
            return Err(malformed(
                "size_sqft",
                format!("{} is not a positive size", self.size_sqft),
            ));
        }
        if !self.commute_time_min.is_finite() || self.commute_time_min < 0.0 {
            return Err(malformed(
                "commute_time_min",
                format!("{} is not a non-negative duration", self.commute_time_min),
            ));
        }
        if !(0.0..=10.0).contains(&self.school_rating) {
            return Err(malformed(
                "school_rating",
                format!("{} is outside 0-10", self.school_rating),
            ));
        }

        Ok(())
    }
}

/// Requested home size. Carried through requests but not consulted by scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreference {
    #[default]
    Any,
    Small,
    Medium,
    Large,
}

/// Buyer constraints for one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub budget_min: f64,
    pub budget_max: f64,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    pub min_bedrooms: u32,
    #[serde(alias = "max_commute_time_minutes")]
    pub max_commute_time: f64,
    pub min_school_rating: f64,
    pub must_have_pool: bool,
    /// Feature tags that must be present. `"pool"` is equivalent to `must_have_pool`.
    #[serde(deserialize_with = "null_as_empty_list", skip_serializing_if = "Vec::is_empty")]
    pub must_have_features: Vec<String>,
    pub min_garage_spaces: u32,
    pub size_preference: SizePreference,
    /// Carried for clients that send it. Not consulted by filtering or scoring.
    #[serde(deserialize_with = "null_as_empty_list", skip_serializing_if = "Vec::is_empty")]
    pub lifestyle_preferences: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            budget_min: 200_000.0,
            budget_max: 1_000_000.0,
            city: String::new(),
            min_bedrooms: 1,
            max_commute_time: 60.0,
            min_school_rating: 1.0,
            must_have_pool: false,
            must_have_features: Vec::new(),
            min_garage_spaces: 0,
            size_preference: SizePreference::Any,
            lifestyle_preferences: Vec::new(),
        }
    }
}

impl Preferences {
    pub fn validate(&self) -> Result<(), InvalidPreferencesError> {
        for (field, value) in [
            ("budget_min", self.budget_min),
            ("budget_max", self.budget_max),
            ("max_commute_time", self.max_commute_time),
            ("min_school_rating", self.min_school_rating),
        ] {
            if !value.is_finite() {
                return Err(InvalidPreferencesError::NotFinite { field });
            }
        }

        if self.budget_min < 0.0 {
            return Err(InvalidPreferencesError::NegativeBudget {
                budget_min: self.budget_min,
            });
        }
        if self.budget_min > self.budget_max {
            return Err(InvalidPreferencesError::BudgetRange {
                budget_min: self.budget_min,
                budget_max: self.budget_max,
            });
        }
        if self.max_commute_time <= 0.0 {
            return Err(InvalidPreferencesError::CommuteTime {
                max_commute_time: self.max_commute_time,
            });
        }
        if !(0.0..=10.0).contains(&self.min_school_rating) {
            return Err(InvalidPreferencesError::SchoolRating {
                min_school_rating: self.min_school_rating,
            });
        }

        Ok(())
    }

    /// True when the buyer asked for a pool, either by flag or as a required feature tag.
    pub fn requires_pool(&self) -> bool {
        self.must_have_pool
            || self
                .must_have_features
                .iter()
                .any(|feature| feature.trim().eq_ignore_ascii_case("pool"))
    }

    /// Empty city means any city is acceptable.
    pub fn city_constraint(&self) -> Option<&str> {
        if self.city.is_empty() {
            None
        } else {
            Some(self.city.as_str())
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn null_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Listing paired with its suitability score and the reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProperty {
    #[serde(flatten)]
    pub property: Property,
    pub score: u8,
    pub explanation: String,
}

/// A record is missing data or carries values the engine cannot score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed property record '{record}': field `{field}` {reason}")]
pub struct MalformedRecordError {
    pub record: String,
    pub field: &'static str,
    pub reason: String,
}

/// Preferences rejected before any filtering takes place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidPreferencesError {
    #[error("`{field}` must be a finite number")]
    NotFinite { field: &'static str },
    #[error("budget_min {budget_min} must not be negative")]
    NegativeBudget { budget_min: f64 },
    #[error("budget_min {budget_min} exceeds budget_max {budget_max}")]
    BudgetRange { budget_min: f64, budget_max: f64 },
    #[error("max_commute_time {max_commute_time} must be positive")]
    CommuteTime { max_commute_time: f64 },
    #[error("min_school_rating {min_school_rating} must be within 0-10")]
    SchoolRating { min_school_rating: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendationError {
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] InvalidPreferencesError),
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
}
