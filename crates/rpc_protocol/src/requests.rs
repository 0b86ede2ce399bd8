//! Request types.

use chrono::NaiveDate;
use entities::{Frequency, TransactionType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use analytics::{ReportFilter, TransactionQuery, TypeFilter};

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

pub type RegisterRequest = CredentialsRequest;
pub type LoginRequest = CredentialsRequest;

// ============================================================================
// Transactions
// ============================================================================

pub type ListTransactionsRequest = TransactionQuery;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

/// Deletes the record with the given id. Shared by every delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: Uuid,
}

// ============================================================================
// Recurring rules
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringRequest {
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub frequency: Frequency,
}

// ============================================================================
// Budgets
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveBudgetRequest {
    pub category: String,
    pub amount: f64,
}

// ============================================================================
// Savings goals
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub target_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalProgressRequest {
    pub id: Uuid,
    pub current_amount: f64,
}

// ============================================================================
// Reports
// ============================================================================

pub type FilterReportRequest = ReportFilter;
pub type ExportReportRequest = ReportFilter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_transaction_request_from_json() {
        let request: CreateTransactionRequest = serde_json::from_str(
            r#"{"amount":12.5,"type":"expense","category":"Food","date":"2024-03-09"}"#,
        )
        .unwrap();

        assert_eq!(request.transaction_type, TransactionType::Expense);
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_create_recurring_request_from_json() {
        let request: CreateRecurringRequest = serde_json::from_str(
            r#"{"amount":900,"type":"expense","category":"Housing","description":"Rent",
                "startDate":"2024-01-31","frequency":"monthly"}"#,
        )
        .unwrap();

        assert_eq!(request.frequency, Frequency::Monthly);
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }
}
