use crate::cli::ServeArgs;
use crate::infra::{resolve_source, AppState, PostingSession};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use intern_insights::config::AppConfig;
use intern_insights::error::AppError;
use intern_insights::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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

    let source = resolve_source(args.source, &config.data)?;
    let postings = Arc::new(PostingSession::new(source));
    let catalog = postings.catalog()?;
    info!(
        source = %postings.source(),
        records = catalog.len(),
        generation = postings.generation(),
        "posting catalog warmed"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        postings,
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "internship insights service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
