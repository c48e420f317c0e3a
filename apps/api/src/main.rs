mod assist;
mod config;
mod cvs;
mod dashboard;
mod envelope;
mod errors;
mod jobs;
mod latency;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::bridge::FormFillBus;
use crate::assist::client::FillClient;
use crate::config::{Config, StorageBackend};
use crate::cvs::store::CvStore;
use crate::jobs::store::JobStore;
use crate::latency::Latency;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileStore, MemoryStore, RedisStore, SnapshotStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hireline API v{}", env!("CARGO_PKG_VERSION"));

    // Select the snapshot backing for the job store
    let snapshots: Arc<dyn SnapshotStore> = match &config.storage {
        StorageBackend::File { data_dir } => {
            info!("Using file snapshot storage at {data_dir}");
            Arc::new(FileStore::new(data_dir.clone()))
        }
        StorageBackend::Redis { url } => {
            let client = redis::Client::open(url.clone())?;
            info!("Using redis snapshot storage");
            Arc::new(RedisStore::new(client))
        }
        StorageBackend::Memory => {
            info!("Using in-memory snapshot storage (state is lost on restart)");
            Arc::new(MemoryStore::new())
        }
    };

    let latency = match config.latency_ms {
        Some((lo, hi)) => {
            info!("Simulated latency enabled: {lo}-{hi}ms per operation");
            Latency::uniform(lo..hi)
        }
        None => Latency::none(),
    };

    // Build stores and the assist bridge
    let jobs = Arc::new(JobStore::new(snapshots, latency.clone()));
    let cvs = Arc::new(CvStore::new(latency.clone()));
    let fill = FillClient::new(&config.fill_service_url, config.fill_timeout);
    info!(
        "Fill client initialized (service: {}, timeout: {}s)",
        config.fill_service_url,
        config.fill_timeout.as_secs()
    );

    let state = AppState {
        jobs,
        cvs,
        fill,
        form_fill: FormFillBus::new(),
        latency,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
