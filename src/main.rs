use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use test_results_receiver::{maintenance, open_database, routes, AppState, Config, TabularStore};

#[derive(Parser)]
#[command(author, version, about = "Receives testing-form submissions into per-chapter tables")]
struct Cli {
    /// Path of the store file (overrides STORE_PATH)
    #[arg(long, global = true, env = "STORE_PATH")]
    store: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the webhook endpoint (default)
    Serve,
    /// Check the store is reachable and create missing chapter tables
    VerifyAccess,
    /// Reset every chapter table to its predefined header row (destructive)
    InitSchemas,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "test_results_receiver=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }

    let store: Arc<dyn TabularStore> = Arc::new(open_database(&config.store_path)?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(store, config).await,
        Command::VerifyAccess => run_maintenance("verify-access", || {
            maintenance::verify_access(store.as_ref()).map(|_| ())
        }),
        Command::InitSchemas => run_maintenance("init-schemas", || {
            maintenance::initialize_schemas(store.as_ref())
        }),
    }
}

/// Run an operator routine, logging its failure before exiting non-zero
fn run_maintenance(
    name: &str,
    routine: impl FnOnce() -> test_results_receiver::Result<()>,
) -> anyhow::Result<()> {
    routine().map_err(|e| {
        tracing::error!("{} failed: {}", name, e);
        anyhow::anyhow!(e)
    })
}

async fn serve(store: Arc<dyn TabularStore>, config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Test Results Receiver...");
    tracing::info!(
        "Environment: {}, Server: {}, Store: {}",
        config.environment,
        config.server_address(),
        config.store_path
    );

    let addr: SocketAddr = config.server_address().parse()?;
    let app = routes::router(AppState::new(store, config));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
