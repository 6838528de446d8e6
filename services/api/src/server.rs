use crate::cli::ServeArgs;
use crate::infra::{build_provider, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use home_advisor::config::AppConfig;
use home_advisor::error::AppError;
use home_advisor::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // A catalog that fails to load leaves the service up but not ready.
    let provider = match build_provider(&config.recommendation) {
        Ok(provider) => Some(provider),
        Err(err) => {
            error!(error = %err, "recommendation provider unavailable");
            None
        }
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        provider,
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "property recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
