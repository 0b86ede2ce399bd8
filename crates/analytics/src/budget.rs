//! Budget utilization for the current month.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use entities::{Budget, Transaction};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound (inclusive) of the healthy band.
pub const WARNING_THRESHOLD: f64 = 75.0;
/// Upper bound (inclusive) of the warning band.
pub const CRITICAL_THRESHOLD: f64 = 90.0;

/// How close a category is to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Healthy,
    Warning,
    Critical,
}

impl BudgetBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > CRITICAL_THRESHOLD {
            Self::Critical
        } else if percentage > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Healthy
        }
    }
}

/// A budget together with what has been spent against it this month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUtilization {
    pub budget_id: Uuid,
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    /// Capped at 100.
    pub percentage: f64,
    pub band: BudgetBand,
}

/// `spent / limit` as a percentage, capped at 100. A zero limit is fully
/// used as soon as anything is spent.
pub fn utilization_percentage(spent: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return if spent > 0.0 { 100.0 } else { 0.0 };
    }
    (spent / limit * 100.0).min(100.0)
}

/// Expenses per category within the calendar month containing `today`.
pub fn month_expenses_by_category(
    transactions: &[Transaction],
    today: NaiveDate,
) -> HashMap<String, f64> {
    let mut spent: HashMap<String, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| {
        t.is_expense() && t.date.year() == today.year() && t.date.month() == today.month()
    }) {
        *spent.entry(t.category.clone()).or_default() += t.amount;
    }
    spent
}

/// Computes utilization for every budget, preserving the budget order.
pub fn budget_utilization(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BudgetUtilization> {
    let spent_by_category = month_expenses_by_category(transactions, today);

    budgets
        .iter()
        .map(|budget| {
            let spent = spent_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(0.0);
            let percentage = utilization_percentage(spent, budget.amount);
            BudgetUtilization {
                budget_id: budget.id,
                category: budget.category.clone(),
                limit: budget.amount,
                spent,
                percentage,
                band: BudgetBand::from_percentage(percentage),
            }
        })
        .collect()
}
