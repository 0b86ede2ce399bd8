//! Response types.

use analytics::{
    BalancePoint, BudgetUtilization, CategoryTotal, FinancialSummary, GoalProgress, MonthlyTotal,
};
use entities::{Budget, RecurringTransaction, SavingsGoal, Transaction, User};
use serde::{Deserialize, Serialize};

pub use analytics::Report as FilterReportResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

// ============================================================================
// Auth
// ============================================================================

/// Returned by register, login and me. The password is never included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: User,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuccessResponse {}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

// ============================================================================
// Recurring rules
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecurringResponse {
    pub rules: Vec<RecurringTransaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringResponse {
    pub rule: RecurringTransaction,
    /// Occurrence recorded at the start date.
    pub first_transaction: Transaction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRecurringResponse {
    /// Number of transactions materialized by this call.
    pub generated: usize,
}

// ============================================================================
// Budgets
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBudgetsResponse {
    pub budgets: Vec<BudgetUtilization>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub budget: Budget,
}

// ============================================================================
// Savings goals
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGoalsResponse {
    pub goals: Vec<GoalProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub goal: SavingsGoal,
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: FinancialSummary,
    pub category_breakdown: Vec<CategoryTotal>,
    pub recent_transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyResponse {
    pub months: Vec<MonthlyTotal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceHistoryResponse {
    pub points: Vec<BalancePoint>,
}

// ============================================================================
// Advisor
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// Markdown advice, or a fallback message when the service is unavailable.
    pub advice: String,
}
