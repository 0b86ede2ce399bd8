//! Totals, category breakdown and recent activity.

use std::collections::HashMap;

use entities::{Transaction, TransactionType};
use serde::{Deserialize, Serialize};

use crate::sort_newest_first;

/// Income and expense totals over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub balance: f64,
}

/// Sums transactions by type.
pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
    let mut summary = transactions
        .iter()
        .fold(FinancialSummary::default(), |mut acc, t| {
            match t.transaction_type {
                TransactionType::Income => acc.total_income += t.amount,
                TransactionType::Expense => acc.total_expense += t.amount,
            }
            acc
        });
    summary.balance = summary.total_income - summary.total_expense;
    summary
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Sums expenses by category, largest first. Equal amounts are ordered by
/// category name.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(t.category.as_str()).or_default() += t.amount;
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}

/// Returns up to `limit` transactions, newest first.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn tx(amount: f64, kind: TransactionType, category: &str, d: u32) -> Transaction {
        Transaction::new(amount, kind, category, day(d), "")
    }

    #[test]
    fn test_summary_balance() {
        let transactions = vec![
            tx(1000.0, TransactionType::Income, "Salary", 1),
            tx(300.0, TransactionType::Expense, "Food", 2),
        ];

        let summary = summarize(&transactions);

        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expense, 300.0);
        assert_eq!(summary.balance, 700.0);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(summarize(&[]), FinancialSummary::default());
    }

    #[test]
    fn test_category_breakdown_ignores_income() {
        let transactions = vec![
            tx(50.0, TransactionType::Expense, "Food", 1),
            tx(25.0, TransactionType::Expense, "Transport", 2),
            tx(30.0, TransactionType::Expense, "Food", 3),
            tx(25.0, TransactionType::Expense, "Housing", 3),
            tx(999.0, TransactionType::Income, "Salary", 4),
        ];

        let breakdown = category_breakdown(&transactions);

        assert_eq!(
            breakdown,
            vec![
                CategoryTotal { category: "Food".into(), amount: 80.0 },
                CategoryTotal { category: "Housing".into(), amount: 25.0 },
                CategoryTotal { category: "Transport".into(), amount: 25.0 },
            ]
        );
    }

    #[test]
    fn test_recent_transactions() {
        let transactions: Vec<Transaction> = (1..=8)
            .map(|d| tx(d as f64, TransactionType::Expense, "Food", d))
            .collect();

        let recent = recent_transactions(&transactions, 5);

        let days: Vec<NaiveDate> = recent.iter().map(|t| t.date).collect();
        assert_eq!(days, vec![day(8), day(7), day(6), day(5), day(4)]);
    }
}
