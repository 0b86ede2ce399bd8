//! Application state.

use std::sync::Arc;

use advisor::AdvisorClient;
use chrono::{Local, NaiveDate};
use entities::Transaction;
use ledger::{KeyValueStore, LedgerStore};
use uuid::Uuid;

use crate::config::Config;
use crate::error::ServerResult;

/// Shared application state.
pub struct AppState<K: KeyValueStore> {
    /// Server configuration.
    pub config: Config,
    /// Ledger store.
    pub store: LedgerStore<K>,
    /// AI advisor client.
    pub advisor: AdvisorClient,
}

impl<K: KeyValueStore> AppState<K> {
    /// Creates new application state.
    pub fn new(config: Config, kv: K) -> Self {
        let advisor = AdvisorClient::new(config.advisor.clone());
        Self {
            config,
            store: LedgerStore::new(kv),
            advisor,
        }
    }

    /// The server's local calendar day.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Materializes due recurring transactions and returns the user's full
    /// transaction list.
    pub async fn current_transactions(&self, user_id: Uuid) -> ServerResult<Vec<Transaction>> {
        let processed = self.store.process_recurring(user_id, self.today()).await?;
        Ok(processed.transactions)
    }
}

/// Type alias for shared state.
pub type SharedState<K> = Arc<AppState<K>>;

/// Creates shared state from config and backend.
pub fn create_shared_state<K: KeyValueStore>(config: Config, kv: K) -> SharedState<K> {
    Arc::new(AppState::new(config, kv))
}
