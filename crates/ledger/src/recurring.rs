//! Recurring transaction materialization.

use chrono::NaiveDate;
use entities::{RecurringTransaction, Transaction};
use uuid::Uuid;

/// Maximum occurrences generated for one rule in a single pass.
///
/// Occurrences beyond this bound are dropped and the rule resumes from
/// wherever the cursor stopped.
pub const MAX_ITERATIONS: usize = 365 * 2;

/// Result of materializing a set of rules.
#[derive(Debug, Clone, Default)]
pub struct Materialization {
    /// Newly generated transactions, grouped by rule in rule order.
    pub transactions: Vec<Transaction>,
    /// The rules with `next_due_date` moved to where each cursor stopped.
    pub rules: Vec<RecurringTransaction>,
    /// Rules that hit [`MAX_ITERATIONS`] before catching up with today.
    pub truncated: Vec<Uuid>,
}

impl Materialization {
    /// Returns true if no rule produced a transaction.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Generates every occurrence due on or before `today`.
///
/// Each rule's cursor starts at its `next_due_date`; an occurrence is emitted
/// at the cursor, then the cursor moves to the rule's next occurrence, until
/// it passes `today` or [`MAX_ITERATIONS`] steps were taken.
pub fn materialize(rules: &[RecurringTransaction], today: NaiveDate) -> Materialization {
    let mut result = Materialization::default();

    for rule in rules {
        let mut cursor = rule.next_due_date;
        let mut iterations = 0;

        while cursor <= today && iterations < MAX_ITERATIONS {
            result.transactions.push(rule.occurrence(cursor));
            iterations += 1;

            match rule.next_after(cursor) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        if iterations == MAX_ITERATIONS && cursor <= today {
            result.truncated.push(rule.id);
        }

        result.rules.push(RecurringTransaction {
            next_due_date: cursor,
            ..rule.clone()
        });
    }

    result
}
