use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expat_blog_api::{app, database::DatabaseManager, AppConfig, AppState};

/// Blog article and user API server
#[derive(Debug, Parser)]
#[command(name = "expat-blog-api", version, about)]
struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long, short)]
    port: Option<u16>,

    /// Postgres connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = Some(url);
    }
    config.validate().context("invalid configuration")?;

    tracing::info!("Starting Expat Blog API in {:?} mode", config.environment);
    if let Some(url) = config.redacted_database_url() {
        tracing::info!("Database: {}", url);
    }

    let database = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    let bind_addr = config.bind_addr();
    let state = AppState::from_database(config, &database).context("failed to build application state")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Your app is listening on http://{}", bind_addr);

    let served = axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    tracing::info!("Closing server");
    database.close().await;

    served.context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
