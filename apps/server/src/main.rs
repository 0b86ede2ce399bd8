//! FinanceFlow server binary.

use std::net::SocketAddr;

use financeflow_server::{config::Config, create_app, create_state, init_tracing};
use ledger::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(data_dir = ?config.data_dir, "Starting FinanceFlow server");

    match config.data_dir.clone() {
        Some(dir) => {
            let kv = FileKeyValueStore::open(&dir).await?;
            serve(config, kv).await
        }
        None => {
            tracing::warn!("No data directory configured; records are kept in memory only");
            serve(config, MemoryKeyValueStore::new()).await
        }
    }
}

async fn serve<K: KeyValueStore + 'static>(config: Config, kv: K) -> anyhow::Result<()> {
    let addr: SocketAddr = config.server_addr().parse()?;

    let state = create_state(config, kv);
    if !state.advisor.is_configured() {
        tracing::warn!("No AI API key configured; advice requests will return a fallback message");
    }
    let app = create_app(state);

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
