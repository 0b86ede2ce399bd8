//! FinanceFlow server
//!
//! Serves the personal finance ledger over an HTTP JSON API: accounts and
//! sessions, transactions and recurring rules, budgets and savings goals,
//! analytics, report export and AI advice.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use axum::Router;
use ledger::KeyValueStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{AppState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<K: KeyValueStore + 'static>(state: Arc<AppState<K>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router(state.clone())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and backend.
pub fn create_state<K: KeyValueStore>(config: Config, kv: K) -> Arc<AppState<K>> {
    create_shared_state(config, kv)
}

/// Initializes tracing with the given log level.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
