//! Report filtering and CSV export.

use chrono::NaiveDate;
use entities::{Transaction, TransactionType};
use serde::{Deserialize, Serialize};

use crate::sort_newest_first;

pub const CSV_HEADER: &str = "ID,Date,Type,Category,Description,Amount";

/// Earliest date considered when a report has no start date.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Latest date considered when a report has no end date.
pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Type selector for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn accepts(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

/// Report criteria. Missing fields select everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, rename = "type")]
    pub transaction_type: TypeFilter,
    /// Exact category, or `all`.
    #[serde(default)]
    pub category: Option<String>,
}

impl ReportFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let start = self.start_date.unwrap_or_else(default_start_date);
        let end = self.end_date.unwrap_or_else(default_end_date);
        if transaction.date < start || transaction.date > end {
            return false;
        }

        if !self.transaction_type.accepts(transaction.transaction_type) {
            return false;
        }

        match self.category.as_deref() {
            None | Some("all") => true,
            Some(category) => transaction.category == category,
        }
    }
}

/// Filtered transactions plus their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub transactions: Vec<Transaction>,
    pub total_income: f64,
    pub total_expense: f64,
}

/// Applies `filter` and returns the matches newest first.
pub fn filter_transactions(transactions: &[Transaction], filter: &ReportFilter) -> Vec<Transaction> {
    let mut found: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    sort_newest_first(&mut found);
    found
}

pub fn build_report(transactions: &[Transaction], filter: &ReportFilter) -> Report {
    let transactions = filter_transactions(transactions, filter);
    let summary = crate::summarize(&transactions);
    Report {
        transactions,
        total_income: summary.total_income,
        total_expense: summary.total_expense,
    }
}

/// Renders transactions as CSV. Only the description is quoted.
pub fn to_csv(transactions: &[Transaction]) -> String {
    let mut lines = Vec::with_capacity(transactions.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for t in transactions {
        lines.push(format!(
            "{},{},{},{},\"{}\",{}",
            t.id,
            t.date.format("%Y-%m-%d"),
            t.transaction_type,
            t.category,
            t.description.replace('"', "\"\""),
            t.amount
        ));
    }
    lines.join("\n")
}

/// Attachment name for a report exported on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("finance_report_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(2500.0, TransactionType::Income, "Salary", day(1, 31), "January pay"),
            Transaction::new(45.2, TransactionType::Expense, "Food", day(2, 3), "Groceries"),
            Transaction::new(60.0, TransactionType::Expense, "Transport", day(2, 10), "Train pass"),
            Transaction::new(12.0, TransactionType::Expense, "Food", day(3, 1), "Snacks"),
        ]
    }

    #[test]
    fn test_default_filter_selects_everything() {
        let report = build_report(&sample(), &ReportFilter::default());

        assert_eq!(report.transactions.len(), 4);
        assert_eq!(report.transactions[0].date, day(3, 1));
        assert_eq!(report.total_income, 2500.0);
        assert!((report.total_expense - 117.2).abs() < 1e-9);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = ReportFilter {
            start_date: Some(day(2, 3)),
            end_date: Some(day(2, 10)),
            ..Default::default()
        };

        let found = filter_transactions(&sample(), &filter);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].description, "Train pass");
        assert_eq!(found[1].description, "Groceries");
    }

    #[test]
    fn test_type_and_category_filters() {
        let filter = ReportFilter {
            transaction_type: TypeFilter::Expense,
            category: Some("Food".into()),
            ..Default::default()
        };
        assert_eq!(filter_transactions(&sample(), &filter).len(), 2);

        let filter = ReportFilter {
            transaction_type: TypeFilter::Income,
            category: Some("all".into()),
            ..Default::default()
        };
        assert_eq!(filter_transactions(&sample(), &filter).len(), 1);
    }

    #[test]
    fn test_filter_deserializes_from_client_json() {
        let filter: ReportFilter = serde_json::from_str(
            r#"{"startDate":"2024-02-01","type":"expense","category":"all"}"#,
        )
        .unwrap();

        assert_eq!(filter.start_date, Some(day(2, 1)));
        assert_eq!(filter.end_date, None);
        assert_eq!(filter.transaction_type, TypeFilter::Expense);
    }

    #[test]
    fn test_csv_of_nothing_is_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_csv_quotes_description() {
        let t = Transaction::new(
            9.5,
            TransactionType::Expense,
            "Food",
            day(2, 3),
            "Pizza \"large\", extra cheese",
        );

        let csv = to_csv(std::slice::from_ref(&t));
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            format!(
                "{},2024-02-03,expense,Food,\"Pizza \"\"large\"\", extra cheese\",9.5",
                t.id
            )
        );
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(day(7, 4)), "finance_report_2024-07-04.csv");
    }
}
