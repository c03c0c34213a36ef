use clap::Parser;
use rolodex::{ClientService, MemoryStore};
use rolodex_server::server::config::{CliArgs, ServerConfig};
use rolodex_server::server::routes::router;
use rolodex_server::server::state::AppState;
use rolodex_server::server::telemetry::init_telemetry;
use tokio::net::TcpListener;
use tokio::signal;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    init_telemetry()?;

    let store = match &config.data_path {
        Some(path) => MemoryStore::open(path)?,
        None => MemoryStore::new(),
    };
    let service = ClientService::connect(store).await?;
    let app = router(AppState::new(service));

    let listener = TcpListener::bind(config.bind_addr).await?;
    log_startup_info(&config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("service shut down successfully");
    Ok(())
}

fn log_startup_info(config: &ServerConfig) {
    match &config.data_path {
        Some(path) => tracing::info!(
            "starting client service on {} with snapshot {}",
            config.bind_addr,
            path.display()
        ),
        None => tracing::info!(
            "starting client service on {} with an in-memory store",
            config.bind_addr
        ),
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received Ctrl+C signal");
        },
        () = terminate => {
            tracing::info!("received SIGTERM signal");
        },
    }

    tracing::info!("shutdown signal received, terminating gracefully...");
}
