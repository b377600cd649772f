use crate::cli::ServeArgs;
use crate::infra::{
    grace_policy_from, AppState, InMemoryListingRepository, InMemoryVerificationRepository,
};
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nyumba::config::AppConfig;
use nyumba::error::AppError;
use nyumba::telemetry;
use nyumba::workflows::listings::ListingService;
use nyumba::workflows::verification::VerificationService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let verification_repository = Arc::new(InMemoryVerificationRepository::default());
    let listing_repository = Arc::new(InMemoryListingRepository::default());
    let verification_service = Arc::new(VerificationService::new(
        verification_repository,
        grace_policy_from(&config.verification),
    ));
    let listing_service = Arc::new(ListingService::new(
        listing_repository,
        verification_service.clone(),
    ));

    let app = with_marketplace_routes(listing_service, verification_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "nyumba marketplace service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
