//! Savings goal progress.

use entities::SavingsGoal;
use serde::{Deserialize, Serialize};

/// A savings goal and how far along it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    #[serde(flatten)]
    pub goal: SavingsGoal,
    pub percentage: f64,
}

/// `current / target` as a percentage, capped at 100. A zero target counts
/// as reached once anything has been saved.
pub fn goal_percentage(goal: &SavingsGoal) -> f64 {
    if goal.target_amount <= 0.0 {
        return if goal.current_amount > 0.0 { 100.0 } else { 0.0 };
    }
    (goal.current_amount / goal.target_amount * 100.0).min(100.0)
}

pub fn goal_progress(goals: &[SavingsGoal]) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|goal| GoalProgress {
            percentage: goal_percentage(goal),
            goal: goal.clone(),
        })
        .collect()
}
