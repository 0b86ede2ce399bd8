//! Transaction definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionType {
    /// Returns the lowercase label used on the wire and in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded income or expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: Uuid,
    /// Non-negative amount; the direction comes from `transaction_type`.
    pub amount: f64,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category label.
    pub category: String,
    /// Calendar day of the transaction.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
}

impl Transaction {
    /// Creates a new transaction.
    pub fn new(
        amount: f64,
        transaction_type: TransactionType,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            transaction_type,
            category: category.into(),
            date,
            description: description.into(),
        }
    }

    /// Returns true for income.
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Returns true for expenses.
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Amount with sign applied: income positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Returns true if `amount` can be stored on a record.
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new(100.0, TransactionType::Income, "Salary", day(2024, 1, 1), "Pay");
        let expense = Transaction::new(40.0, TransactionType::Expense, "Food", day(2024, 1, 2), "Lunch");

        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -40.0);
        assert!(income.is_income());
        assert!(expense.is_expense());
    }

    #[test]
    fn test_wire_format() {
        let t = Transaction::new(12.5, TransactionType::Expense, "Food", day(2024, 3, 9), "Coffee");
        let value = serde_json::to_value(&t).unwrap();

        assert_eq!(value["type"], "expense");
        assert_eq!(value["date"], "2024-03-09");
        assert_eq!(value["amount"], 12.5);
    }

    #[test]
    fn test_amount_validation() {
        assert!(is_valid_amount(0.0));
        assert!(is_valid_amount(19.99));
        assert!(!is_valid_amount(-1.0));
        assert!(!is_valid_amount(f64::NAN));
        assert!(!is_valid_amount(f64::INFINITY));
    }
}
