//! Recommendation engine: hard-constraint filtering, weighted scoring, explanations and ranking.

pub mod domain;
mod engine;
pub mod explanation;
pub mod filter;
pub mod provider;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    InvalidPreferencesError, MalformedRecordError, Preferences, Property, RecommendationError,
    ScoredProperty, SizePreference,
};
pub use engine::{recommend, score_property, DEFAULT_MAX_RESULTS};
pub use explanation::{explain, FALLBACK_EXPLANATION};
pub use filter::{filter_catalog, Constraint};
pub use provider::{
    recommend_with_fallback, LocalProvider, ProviderError, RecommendationProvider,
    RecommendationRequest, RecommendationResponse, RemoteProvider,
};
pub use scoring::{score, Criterion, ScoreBreakdown};
