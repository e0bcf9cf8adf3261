use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredStore};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use key_points::assessment::AssessmentService;
use key_points::config::AppConfig;
use key_points::error::AppError;
use key_points::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    let store = ConfiguredStore::from_config(config.storage.as_ref())?;
    if config.storage.is_none() {
        warn!("SUPABASE_URL not set; submissions are kept in memory only");
    }
    let store_label = store.label();
    let assessment_service = Arc::new(AssessmentService::new(Arc::new(store)));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, store = store_label, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
