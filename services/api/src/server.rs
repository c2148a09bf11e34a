use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicationRepository, InMemoryCrmAlertPublisher};
use crate::routes::with_back_office_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use solar_ops::config::AppConfig;
use solar_ops::error::AppError;
use solar_ops::telemetry;
use solar_ops::workflows::onboarding::{OnboardingService, ScoringConfig};
use tracing::info;

fn build_app(readiness: Arc<AtomicBool>) -> Router {
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();

    let onboarding_service = Arc::new(OnboardingService::new(
        Arc::new(InMemoryApplicationRepository::default()),
        Arc::new(InMemoryCrmAlertPublisher::default()),
        ScoringConfig::default(),
    ));

    with_back_office_routes(onboarding_service)
        .layer(Extension(AppState {
            readiness,
            metrics: Arc::new(prometheus_handle),
        }))
        .layer(prometheus_layer)
}

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let readiness = Arc::new(AtomicBool::new(false));
    let app = build_app(readiness.clone());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);

    info!(?config.environment, %addr, "partner back-office listening");

    axum::serve(listener, app).await?;
    Ok(())
}
