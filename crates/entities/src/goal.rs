//! Savings goal definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings target with tracked progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Amount to reach.
    pub target_amount: f64,
    /// Amount saved so far.
    pub current_amount: f64,
    /// Day the goal should be reached by.
    pub target_date: NaiveDate,
}

impl SavingsGoal {
    /// Creates a new goal with no progress.
    pub fn new(name: impl Into<String>, target_amount: f64, target_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            target_date,
        }
    }

    /// Sets the amount already saved.
    pub fn with_current_amount(mut self, current_amount: f64) -> Self {
        self.current_amount = current_amount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_creation() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let goal = SavingsGoal::new("Holiday", 2000.0, date).with_current_amount(250.0);

        assert_eq!(goal.name, "Holiday");
        assert_eq!(goal.current_amount, 250.0);

        let value = serde_json::to_value(&goal).unwrap();
        assert_eq!(value["targetAmount"], 2000.0);
        assert_eq!(value["targetDate"], "2025-12-31");
    }
}
