use anyhow::Result;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::{handlers, state::AppState};
use crate::config::Config;
use crate::db::TextStore;

/// Build the route table. Middleware is layered on in [`start_server`] so
/// tests can drive the bare router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/submit", post(handlers::submit_text))
        .route("/texts", get(handlers::list_texts))
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(store: Arc<dyn TextStore>, config: &Config) -> Result<()> {
    let state = Arc::new(AppState { store });

    let app = router(state)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind((config.bind_host.as_str(), config.bind_port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS for the configured origins: exact-match list, credentialed, GET and
/// POST with JSON bodies. tower-http panics if credentials are combined with
/// a wildcard origin, hence the explicit list.
pub(crate) fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable allowed origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
