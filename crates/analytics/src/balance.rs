//! Running balance over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use entities::Transaction;
use serde::{Deserialize, Serialize};

/// Balance at the end of a day that had activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// Nets each day's signed amounts and accumulates them in date order.
pub fn balance_history(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for t in transactions {
        *daily.entry(t.date).or_default() += t.signed_amount();
    }

    let mut running = 0.0;
    daily
        .into_iter()
        .map(|(date, net)| {
            running += net;
            BalancePoint {
                date,
                balance: running,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use entities::TransactionType;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_balance_history_accumulates_per_day() {
        let transactions = vec![
            Transaction::new(50.0, TransactionType::Expense, "Food", day(3), ""),
            Transaction::new(1000.0, TransactionType::Income, "Salary", day(1), ""),
            Transaction::new(200.0, TransactionType::Expense, "Housing", day(1), ""),
            Transaction::new(25.0, TransactionType::Income, "Other", day(3), ""),
        ];

        let history = balance_history(&transactions);

        assert_eq!(
            history,
            vec![
                BalancePoint { date: day(1), balance: 800.0 },
                BalancePoint { date: day(3), balance: 775.0 },
            ]
        );
    }
}
