use crate::infra::{build_provider, parse_size_preference};
use clap::Args;
use home_advisor::config::{AppConfig, RecommenderMode};
use home_advisor::error::AppError;
use home_advisor::recommendation::explanation::format_currency;
use home_advisor::recommendation::{
    recommend_with_fallback, Preferences, RecommendationRequest, RecommendationResponse,
    SizePreference, DEFAULT_MAX_RESULTS,
};
use home_advisor::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// CSV catalog to score locally (overrides APP_CATALOG_PATH and APP_RECOMMENDER)
    #[arg(long, conflicts_with = "remote")]
    pub(crate) catalog: Option<PathBuf>,
    /// Remote recommendation endpoint to delegate to instead of a local catalog
    #[arg(long)]
    pub(crate) remote: Option<String>,
    /// Lowest acceptable price
    #[arg(long)]
    pub(crate) budget_min: Option<f64>,
    /// Highest acceptable price
    #[arg(long)]
    pub(crate) budget_max: Option<f64>,
    /// Restrict results to one city (exact, case-sensitive match)
    #[arg(long)]
    pub(crate) city: Option<String>,
    #[arg(long)]
    pub(crate) min_bedrooms: Option<u32>,
    /// Longest acceptable commute in minutes
    #[arg(long)]
    pub(crate) max_commute: Option<f64>,
    #[arg(long)]
    pub(crate) min_school_rating: Option<f64>,
    /// Only consider listings with a pool
    #[arg(long)]
    pub(crate) pool: bool,
    #[arg(long)]
    pub(crate) min_garage: Option<u32>,
    /// Preferred size bucket (any, small, medium, large)
    #[arg(long, value_parser = parse_size_preference)]
    pub(crate) size: Option<SizePreference>,
    /// Number of listings to return
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub(crate) max_results: usize,
    /// Print the response as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn preferences(&self) -> Preferences {
        let mut prefs = Preferences::default();
        if let Some(budget_min) = self.budget_min {
            prefs.budget_min = budget_min;
        }
        if let Some(budget_max) = self.budget_max {
            prefs.budget_max = budget_max;
        }
        if let Some(city) = &self.city {
            prefs.city = city.clone();
        }
        if let Some(min_bedrooms) = self.min_bedrooms {
            prefs.min_bedrooms = min_bedrooms;
        }
        if let Some(max_commute) = self.max_commute {
            prefs.max_commute_time = max_commute;
        }
        if let Some(min_school_rating) = self.min_school_rating {
            prefs.min_school_rating = min_school_rating;
        }
        prefs.must_have_pool = self.pool;
        if let Some(min_garage) = self.min_garage {
            prefs.min_garage_spaces = min_garage;
        }
        if let Some(size) = self.size {
            prefs.size_preference = size;
        }
        prefs
    }
}

pub(crate) async fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(catalog) = &args.catalog {
        config.recommendation.catalog_path = catalog.clone();
        config.recommendation.mode = RecommenderMode::Local;
    }
    if let Some(endpoint) = &args.remote {
        config.recommendation.mode = RecommenderMode::Remote {
            endpoint: endpoint.clone(),
        };
    }

    let provider = build_provider(&config.recommendation)?;
    let request = RecommendationRequest::new(args.preferences(), args.max_results);
    let response = recommend_with_fallback(provider.as_ref(), &request).await?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&response).map_err(std::io::Error::other)?;
        println!("{rendered}");
    } else {
        render_response(&request.user_preferences, &response);
    }

    Ok(())
}

fn render_response(prefs: &Preferences, response: &RecommendationResponse) {
    println!(
        "Recommendations for {} to {}{}",
        format_currency(prefs.budget_min),
        format_currency(prefs.budget_max),
        prefs
            .city_constraint()
            .map(|city| format!(" in {city}"))
            .unwrap_or_default()
    );

    if let Some(warning) = &response.warning {
        println!("  Warning: {warning}");
    }

    if response.recommendations.is_empty() {
        println!("  No listings match these preferences.");
        return;
    }

    for (rank, scored) in response.recommendations.iter().enumerate() {
        let property = &scored.property;
        println!(
            "{}. {}, {} | {} | {} bd | {:.0} sqft | score {}",
            rank + 1,
            property.address,
            property.city,
            format_currency(property.price),
            property.bedrooms,
            property.size_sqft,
            scored.score
        );
        println!("   {}", scored.explanation);
    }
}
