use home_advisor::catalog::PropertyCatalog;
use home_advisor::config::{RecommendationConfig, RecommenderMode};
use home_advisor::error::AppError;
use home_advisor::recommendation::{
    LocalProvider, RecommendationProvider, RemoteProvider, SizePreference,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    /// Absent when the catalog could not be loaded at startup.
    pub(crate) provider: Option<Arc<dyn RecommendationProvider>>,
}

/// Builds the provider selected by configuration.
pub(crate) fn build_provider(
    config: &RecommendationConfig,
) -> Result<Arc<dyn RecommendationProvider>, AppError> {
    match &config.mode {
        RecommenderMode::Local => {
            let provider = local_provider(&config.catalog_path)?
                .with_simulated_delay(config.simulated_delay);
            Ok(Arc::new(provider))
        }
        RecommenderMode::Remote { endpoint } => {
            info!(%endpoint, retries = config.remote_retries, "delegating recommendations to remote service");
            Ok(Arc::new(RemoteProvider::new(
                endpoint.clone(),
                config.remote_retries,
            )))
        }
    }
}

pub(crate) fn local_provider(catalog_path: &Path) -> Result<LocalProvider, AppError> {
    let catalog = PropertyCatalog::from_path(catalog_path)?;
    Ok(LocalProvider::new(Arc::new(catalog)))
}

pub(crate) fn parse_size_preference(raw: &str) -> Result<SizePreference, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "any" => Ok(SizePreference::Any),
        "small" => Ok(SizePreference::Small),
        "medium" => Ok(SizePreference::Medium),
        "large" => Ok(SizePreference::Large),
        other => Err(format!(
            "unknown size preference '{other}' (expected any, small, medium or large)"
        )),
    }
}
