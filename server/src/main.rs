use anyhow::Result;
use server::config::Config;
use server::db::{MySqlBackend, TextStore};
use server::http;
use std::sync::Arc;
use tracing::{Level, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.debug);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting textboard server");

    let backend = MySqlBackend::new(config.database.clone());

    // Startup policy: a failed schema init is logged, not fatal. Operations
    // that need the datastore fail individually until it becomes reachable.
    if let Err(err) = backend.init_schema().await {
        warn!(error = %err, "schema initialization failed; serving without a verified schema");
    }

    let store: Arc<dyn TextStore> = Arc::new(backend);

    http::start_server(store, &config).await
}

fn init_tracing(debug: bool) {
    let default_level = if debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();
}
