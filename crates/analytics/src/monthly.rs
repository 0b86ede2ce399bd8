//! Per-month income and expense totals.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use entities::{Transaction, TransactionType};
use serde::{Deserialize, Serialize};

/// One row of the monthly chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    /// `YYYY-MM`
    pub month: String,
    /// Short label such as `Jan 24`.
    pub label: String,
    pub income: f64,
    pub expense: f64,
}

/// Groups transactions by calendar month, oldest month first.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for t in transactions {
        let entry = months.entry((t.date.year(), t.date.month())).or_default();
        match t.transaction_type {
            TransactionType::Income => entry.0 += t.amount,
            TransactionType::Expense => entry.1 += t.amount,
        }
    }

    months
        .into_iter()
        .map(|((year, month), (income, expense))| MonthlyTotal {
            month: format!("{year:04}-{month:02}"),
            label: month_label(year, month),
            income,
            expense,
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount: f64, kind: TransactionType, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            amount,
            kind,
            "Other",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            "",
        )
    }

    #[test]
    fn test_monthly_totals_sorted_by_month() {
        let transactions = vec![
            tx(100.0, TransactionType::Income, 2024, 2, 10),
            tx(40.0, TransactionType::Expense, 2023, 12, 31),
            tx(60.0, TransactionType::Expense, 2024, 2, 1),
            tx(10.0, TransactionType::Income, 2024, 1, 15),
        ];

        let rows = monthly_totals(&transactions);

        let keys: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-01", "2024-02"]);
        assert_eq!(rows[0].label, "Dec 23");
        assert_eq!(rows[2].label, "Feb 24");
        assert_eq!(rows[2].income, 100.0);
        assert_eq!(rows[2].expense, 60.0);
    }

    #[test]
    fn test_monthly_totals_empty() {
        assert!(monthly_totals(&[]).is_empty());
    }
}
