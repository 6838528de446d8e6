use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use home_advisor::error::AppError;
use home_advisor::recommendation::{
    recommend_with_fallback, RecommendationRequest, RecommendationResponse,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/recommendations", post(recommendations_endpoint))
        .layer(Extension(state))
        .layer(cors_layer())
}

/// Browser front ends on any origin may call the API.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready =
        state.readiness.load(std::sync::atomic::Ordering::Relaxed) && state.provider.is_some();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn recommendations_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(request) = payload?;
    let provider = state.provider.ok_or(AppError::CatalogUnavailable)?;
    let response = recommend_with_fallback(provider.as_ref(), &request).await?;

    info!(
        provider = provider.name(),
        requested = request.max_results,
        returned = response.recommendations.len(),
        degraded = response.warning.is_some(),
        "served property recommendations"
    );

    Ok(Json(response))
}
