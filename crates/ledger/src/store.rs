//! Typed ledger store on top of a key-value backend.

use chrono::NaiveDate;
use entities::{Budget, RecurringTransaction, SavingsGoal, Transaction, User};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::{
    materialize, user_key, KeyValueStore, RecordKind, StoreError, StoreResult, SESSION_KEY,
    USERS_KEY,
};

/// Result of [`LedgerStore::process_recurring`].
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// The user's full transaction list after materialization.
    pub transactions: Vec<Transaction>,
    /// How many of them were created by this call.
    pub generated: usize,
}

impl Processed {
    fn unchanged(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            generated: 0,
        }
    }
}

/// Typed access to every record list a user owns.
///
/// Reads never fail: a missing key, a backend error or unparsable JSON all
/// yield an empty collection, and the failure is logged. Writes propagate
/// backend errors.
///
/// Every read-modify-write operation holds the store's write lock, so there
/// is one logical writer at a time.
#[derive(Debug)]
pub struct LedgerStore<K: KeyValueStore> {
    kv: K,
    write_lock: Mutex<()>,
}

impl<K: KeyValueStore> LedgerStore<K> {
    /// Wraps a key-value backend.
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Acquires the write lock for a read-modify-write sequence built from
    /// the plain load/save methods.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read from store");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to parse stored value");
                None
            }
        }
    }

    async fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load(key).await.unwrap_or_default()
    }

    async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(key, raw).await
    }

    // =========================================================================
    // Users and session
    // =========================================================================

    /// Loads all registered users.
    pub async fn users(&self) -> Vec<User> {
        self.load_list(USERS_KEY).await
    }

    /// Replaces the user list.
    pub async fn save_users(&self, users: &[User]) -> StoreResult<()> {
        self.save(USERS_KEY, users).await
    }

    /// Loads the current session, if any.
    pub async fn session(&self) -> Option<User> {
        self.load(SESSION_KEY).await
    }

    /// Persists `user` as the current session.
    pub async fn save_session(&self, user: &User) -> StoreResult<()> {
        self.save(SESSION_KEY, user).await
    }

    /// Removes the current session.
    pub async fn clear_session(&self) -> StoreResult<()> {
        self.kv.remove(SESSION_KEY).await
    }

    // =========================================================================
    // Raw per-user lists
    // =========================================================================

    /// Loads a user's transactions in stored order.
    pub async fn transactions(&self, user_id: Uuid) -> Vec<Transaction> {
        self.load_list(&user_key(user_id, RecordKind::Transactions))
            .await
    }

    /// Replaces a user's transactions.
    pub async fn save_transactions(
        &self,
        user_id: Uuid,
        transactions: &[Transaction],
    ) -> StoreResult<()> {
        self.save(&user_key(user_id, RecordKind::Transactions), transactions)
            .await
    }

    /// Loads a user's budgets.
    pub async fn budgets(&self, user_id: Uuid) -> Vec<Budget> {
        self.load_list(&user_key(user_id, RecordKind::Budgets)).await
    }

    /// Replaces a user's budgets.
    pub async fn save_budgets(&self, user_id: Uuid, budgets: &[Budget]) -> StoreResult<()> {
        self.save(&user_key(user_id, RecordKind::Budgets), budgets)
            .await
    }

    /// Loads a user's savings goals.
    pub async fn goals(&self, user_id: Uuid) -> Vec<SavingsGoal> {
        self.load_list(&user_key(user_id, RecordKind::Goals)).await
    }

    /// Replaces a user's savings goals.
    pub async fn save_goals(&self, user_id: Uuid, goals: &[SavingsGoal]) -> StoreResult<()> {
        self.save(&user_key(user_id, RecordKind::Goals), goals).await
    }

    /// Loads a user's recurring rules.
    pub async fn recurring(&self, user_id: Uuid) -> Vec<RecurringTransaction> {
        self.load_list(&user_key(user_id, RecordKind::Recurring))
            .await
    }

    /// Replaces a user's recurring rules.
    pub async fn save_recurring(
        &self,
        user_id: Uuid,
        rules: &[RecurringTransaction],
    ) -> StoreResult<()> {
        self.save(&user_key(user_id, RecordKind::Recurring), rules)
            .await
    }

    // =========================================================================
    // Transaction operations
    // =========================================================================

    /// Records a transaction, placing it first in the stored list.
    pub async fn add_transaction(
        &self,
        user_id: Uuid,
        transaction: Transaction,
    ) -> StoreResult<Transaction> {
        let _guard = self.lock().await;
        let mut transactions = self.transactions(user_id).await;
        transactions.insert(0, transaction.clone());
        self.save_transactions(user_id, &transactions).await?;

        tracing::info!(user_id = %user_id, transaction_id = %transaction.id, "Transaction added");
        Ok(transaction)
    }

    /// Deletes a transaction.
    pub async fn delete_transaction(&self, user_id: Uuid, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock().await;
        let mut transactions = self.transactions(user_id).await;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Err(StoreError::not_found("Transaction", id.to_string()));
        }
        self.save_transactions(user_id, &transactions).await?;

        tracing::info!(user_id = %user_id, transaction_id = %id, "Transaction deleted");
        Ok(())
    }

    // =========================================================================
    // Recurring rule operations
    // =========================================================================

    /// Adds a recurring rule and records its first occurrence immediately.
    ///
    /// The first occurrence is dated `rule.start_date`; the stored rule's
    /// `next_due_date` is moved one period past it so the materializer does
    /// not emit it again.
    pub async fn add_recurring_rule(
        &self,
        user_id: Uuid,
        mut rule: RecurringTransaction,
    ) -> StoreResult<(RecurringTransaction, Transaction)> {
        let _guard = self.lock().await;

        let first = rule.occurrence(rule.start_date);
        rule.next_due_date = rule
            .next_after(rule.start_date)
            .ok_or_else(|| StoreError::Other("Start date is out of range".to_string()))?;

        let mut rules = self.recurring(user_id).await;
        rules.push(rule.clone());
        self.save_recurring(user_id, &rules).await?;

        let mut transactions = self.transactions(user_id).await;
        transactions.insert(0, first.clone());
        self.save_transactions(user_id, &transactions).await?;

        tracing::info!(
            user_id = %user_id,
            rule_id = %rule.id,
            frequency = ?rule.frequency,
            next_due_date = %rule.next_due_date,
            "Recurring rule added"
        );
        Ok((rule, first))
    }

    /// Deletes a recurring rule. Transactions it already produced are kept.
    pub async fn delete_recurring_rule(&self, user_id: Uuid, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock().await;
        let mut rules = self.recurring(user_id).await;
        let before = rules.len();
        rules.retain(|r| r.id != id);
        if rules.len() == before {
            return Err(StoreError::not_found("RecurringTransaction", id.to_string()));
        }
        self.save_recurring(user_id, &rules).await?;

        tracing::info!(user_id = %user_id, rule_id = %id, "Recurring rule deleted");
        Ok(())
    }

    /// Materializes every due occurrence up to `today` and returns the
    /// resulting transaction list.
    ///
    /// When nothing is due, neither list is rewritten.
    pub async fn process_recurring(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> StoreResult<Processed> {
        let _guard = self.lock().await;
        let rules = self.recurring(user_id).await;
        let mut transactions = self.transactions(user_id).await;
        if rules.is_empty() {
            return Ok(Processed::unchanged(transactions));
        }

        let outcome = materialize(&rules, today);
        for rule_id in &outcome.truncated {
            tracing::warn!(
                user_id = %user_id,
                rule_id = %rule_id,
                limit = crate::MAX_ITERATIONS,
                "Recurring rule hit the iteration limit; older occurrences were skipped"
            );
        }
        if outcome.is_empty() {
            return Ok(Processed::unchanged(transactions));
        }

        self.save_recurring(user_id, &outcome.rules).await?;
        let generated = outcome.transactions.len();
        transactions.extend(outcome.transactions);
        self.save_transactions(user_id, &transactions).await?;

        tracing::info!(user_id = %user_id, generated, "Materialized recurring transactions");
        Ok(Processed {
            transactions,
            generated,
        })
    }

    // =========================================================================
    // Budget operations
    // =========================================================================

    /// Sets the monthly limit for a category, creating the budget if the
    /// category has none yet.
    pub async fn save_budget(
        &self,
        user_id: Uuid,
        category: &str,
        amount: f64,
    ) -> StoreResult<Budget> {
        let _guard = self.lock().await;
        let mut budgets = self.budgets(user_id).await;

        let budget = match budgets.iter_mut().find(|b| b.category == category) {
            Some(existing) => {
                existing.amount = amount;
                existing.clone()
            }
            None => {
                let budget = Budget::new(category, amount);
                budgets.push(budget.clone());
                budget
            }
        };
        self.save_budgets(user_id, &budgets).await?;

        tracing::info!(user_id = %user_id, category, amount, "Budget saved");
        Ok(budget)
    }

    /// Deletes a budget.
    pub async fn delete_budget(&self, user_id: Uuid, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock().await;
        let mut budgets = self.budgets(user_id).await;
        let before = budgets.len();
        budgets.retain(|b| b.id != id);
        if budgets.len() == before {
            return Err(StoreError::not_found("Budget", id.to_string()));
        }
        self.save_budgets(user_id, &budgets).await
    }

    // =========================================================================
    // Savings goal operations
    // =========================================================================

    /// Adds a savings goal.
    pub async fn create_goal(&self, user_id: Uuid, goal: SavingsGoal) -> StoreResult<SavingsGoal> {
        let _guard = self.lock().await;
        let mut goals = self.goals(user_id).await;
        goals.push(goal.clone());
        self.save_goals(user_id, &goals).await?;

        tracing::info!(user_id = %user_id, goal_id = %goal.id, "Savings goal created");
        Ok(goal)
    }

    /// Sets the saved amount of a goal.
    pub async fn update_goal_progress(
        &self,
        user_id: Uuid,
        id: Uuid,
        current_amount: f64,
    ) -> StoreResult<SavingsGoal> {
        let _guard = self.lock().await;
        let mut goals = self.goals(user_id).await;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| StoreError::not_found("SavingsGoal", id.to_string()))?;
        goal.current_amount = current_amount;
        let updated = goal.clone();
        self.save_goals(user_id, &goals).await?;

        tracing::info!(user_id = %user_id, goal_id = %id, current_amount, "Savings goal updated");
        Ok(updated)
    }

    /// Deletes a savings goal.
    pub async fn delete_goal(&self, user_id: Uuid, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock().await;
        let mut goals = self.goals(user_id).await;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        if goals.len() == before {
            return Err(StoreError::not_found("SavingsGoal", id.to_string()));
        }
        self.save_goals(user_id, &goals).await
    }
}
