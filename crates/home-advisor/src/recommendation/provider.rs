//! Local and remote sources of recommendations behind one capability.
//!
//! Both providers accept the same [`RecommendationRequest`] and return listings ranked with the
//! same semantics, so callers only ever depend on [`RecommendationProvider`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{Preferences, RecommendationError, ScoredProperty};
use super::engine::{recommend, DEFAULT_MAX_RESULTS};
use crate::catalog::PropertyCatalog;

/// Wire payload for a recommendation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub user_preferences: Preferences,
    #[serde(default = "default_max_results")]
    pub max_results: i64,
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS as i64
}

impl RecommendationRequest {
    pub fn new(user_preferences: Preferences, max_results: usize) -> Self {
        Self {
            user_preferences,
            max_results: i64::try_from(max_results).unwrap_or(i64::MAX),
        }
    }

    /// Negative limits request nothing.
    pub fn result_limit(&self) -> usize {
        usize::try_from(self.max_results).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<ScoredProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error(transparent)]
    Rejected(#[from] RecommendationError),
    #[error("recommendation service unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("recommendation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("recommendation service sent an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ProviderError {
    fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Transport(_) => true,
            ProviderError::Status { status, .. } => *status >= 500,
            ProviderError::Rejected(_) | ProviderError::Decode(_) => false,
        }
    }
}

#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ScoredProperty>, ProviderError>;

    /// Provider name for logs.
    fn name(&self) -> &'static str;
}

/// Runs the engine in-process over a shared catalog.
#[derive(Debug, Clone)]
pub struct LocalProvider {
    catalog: Arc<PropertyCatalog>,
    delay: Option<Duration>,
}

impl LocalProvider {
    pub fn new(catalog: Arc<PropertyCatalog>) -> Self {
        Self {
            catalog,
            delay: None,
        }
    }

    /// Waits before answering to emulate analysis time in the UI.
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.delay = if delay.is_zero() { None } else { Some(delay) };
        self
    }
}

#[async_trait]
impl RecommendationProvider for LocalProvider {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ScoredProperty>, ProviderError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let ranked = recommend(
            self.catalog.properties(),
            &request.user_preferences,
            request.result_limit(),
        )?;
        Ok(ranked)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

/// Delegates to a recommendation service over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    http_client: HttpClient,
    endpoint: String,
    retries: u8,
}

impl RemoteProvider {
    pub fn new(endpoint: impl Into<String>, retries: u8) -> Self {
        Self::with_client(HttpClient::new(), endpoint, retries)
    }

    pub fn with_client(http_client: HttpClient, endpoint: impl Into<String>, retries: u8) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
            retries,
        }
    }

    async fn send_once(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ScoredProperty>, ProviderError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(endpoint = %self.endpoint, error = %err, "failed to read error response body");
                    String::new()
                }
            };
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: RecommendationResponse =
            response.json().await.map_err(ProviderError::Decode)?;
        Ok(payload.recommendations)
    }
}

#[async_trait]
impl RecommendationProvider for RemoteProvider {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ScoredProperty>, ProviderError> {
        request
            .user_preferences
            .validate()
            .map_err(RecommendationError::from)?;

        let attempts = u32::from(self.retries) + 1;
        let mut attempt = 1;
        loop {
            match self.send_once(request).await {
                Ok(recommendations) => {
                    debug!(
                        endpoint = %self.endpoint,
                        attempt,
                        returned = recommendations.len(),
                        "remote recommendations received"
                    );
                    return Ok(recommendations);
                }
                Err(err) if err.is_retryable() && attempt < attempts => {
                    warn!(endpoint = %self.endpoint, attempt, error = %err, "retrying remote recommendation call");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

/// Asks the provider for recommendations, degrading delivery failures to an empty result.
///
/// Invalid preferences and malformed records are returned as errors. Any other provider
/// failure is logged and reported through the response `warning` with no listings.
pub async fn recommend_with_fallback(
    provider: &dyn RecommendationProvider,
    request: &RecommendationRequest,
) -> Result<RecommendationResponse, RecommendationError> {
    request.user_preferences.validate()?;

    match provider.recommend(request).await {
        Ok(recommendations) => Ok(RecommendationResponse {
            recommendations,
            warning: None,
        }),
        Err(ProviderError::Rejected(err)) => Err(err),
        Err(err) => {
            warn!(provider = provider.name(), error = %err, "recommendation provider failed");
            Ok(RecommendationResponse {
                recommendations: Vec::new(),
                warning: Some(format!("recommendations are temporarily unavailable: {err}")),
            })
        }
    }
}
