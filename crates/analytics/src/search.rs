//! Transaction list search.

use entities::Transaction;
use serde::{Deserialize, Serialize};

use crate::{sort_newest_first, TypeFilter};

/// Filters applied to the transaction list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Case-insensitive substring matched against description and category.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, rename = "type")]
    pub transaction_type: TypeFilter,
}

impl TransactionQuery {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.transaction_type.accepts(transaction.transaction_type) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                transaction.description.to_lowercase().contains(&needle)
                    || transaction.category.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Returns the matching transactions, newest first.
pub fn search_transactions(
    transactions: &[Transaction],
    query: &TransactionQuery,
) -> Vec<Transaction> {
    let mut found: Vec<Transaction> = transactions
        .iter()
        .filter(|t| query.matches(t))
        .cloned()
        .collect();
    sort_newest_first(&mut found);
    found
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entities::TransactionType;

    use super::*;

    fn sample() -> Vec<Transaction> {
        let day = |d| NaiveDate::from_ymd_opt(2024, 4, d).unwrap();
        vec![
            Transaction::new(12.5, TransactionType::Expense, "Food", day(1), "Lunch with Sam"),
            Transaction::new(3000.0, TransactionType::Income, "Salary", day(2), "April pay"),
            Transaction::new(40.0, TransactionType::Expense, "Transport", day(3), "Fuel"),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_newest_first() {
        let found = search_transactions(&sample(), &TransactionQuery::default());
        let descriptions: Vec<&str> = found.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Fuel", "April pay", "Lunch with Sam"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_description_and_category() {
        let query = TransactionQuery {
            search: Some("LUNCH".into()),
            ..Default::default()
        };
        assert_eq!(search_transactions(&sample(), &query).len(), 1);

        let query = TransactionQuery {
            search: Some("transp".into()),
            ..Default::default()
        };
        let found = search_transactions(&sample(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Transport");
    }

    #[test]
    fn test_type_filter() {
        let query = TransactionQuery {
            search: None,
            transaction_type: TypeFilter::Income,
        };
        let found = search_transactions(&sample(), &query);
        assert_eq!(found.len(), 1);
        assert!(found[0].is_income());
    }

    #[test]
    fn test_query_accepts_all_type() {
        let query: TransactionQuery =
            serde_json::from_str(r#"{"search":"","type":"all"}"#).unwrap();

        assert_eq!(query.transaction_type, TypeFilter::All);
        assert_eq!(search_transactions(&sample(), &query).len(), 3);

        let query: TransactionQuery = serde_json::from_str(r#"{"type":"expense"}"#).unwrap();
        assert_eq!(search_transactions(&sample(), &query).len(), 2);
    }
}
