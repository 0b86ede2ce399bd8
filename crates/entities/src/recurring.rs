//! Recurring transaction rule definitions.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Transaction, TransactionType};

/// How often a recurring rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the date one period after `date`.
    ///
    /// Month and year steps clamp to the last day of the target month, so
    /// Jan 31 steps to Feb 28 (or 29). Returns `None` only past the end of
    /// the representable calendar.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => date.checked_add_days(Days::new(1)),
            Frequency::Weekly => date.checked_add_days(Days::new(7)),
            Frequency::Monthly => date.checked_add_months(Months::new(1)),
            Frequency::Yearly => date.checked_add_months(Months::new(12)),
        }
    }
}

/// A template that periodically spawns transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    /// Unique identifier.
    pub id: Uuid,
    /// Amount of every spawned transaction.
    pub amount: f64,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category label.
    pub category: String,
    /// Description copied onto spawned transactions.
    pub description: String,
    /// First occurrence.
    pub start_date: NaiveDate,
    /// Period between occurrences.
    pub frequency: Frequency,
    /// Next occurrence that has not been materialized yet.
    pub next_due_date: NaiveDate,
}

impl RecurringTransaction {
    /// Creates a new rule whose first occurrence is `start_date`.
    pub fn new(
        amount: f64,
        transaction_type: TransactionType,
        category: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            transaction_type,
            category: category.into(),
            description: description.into(),
            start_date,
            frequency,
            next_due_date: start_date,
        }
    }

    /// Returns the first occurrence strictly after `date`.
    ///
    /// Monthly and yearly rules count whole periods from `start_date`, so a
    /// rule starting on the 31st lands on the last day of shorter months and
    /// returns to the 31st afterwards. Returns `None` past the end of the
    /// representable calendar.
    pub fn next_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        let step = match self.frequency {
            Frequency::Monthly => 1,
            Frequency::Yearly => 12,
            Frequency::Daily | Frequency::Weekly => return self.frequency.advance(date),
        };

        let elapsed = (date.year() - self.start_date.year()) * 12 + date.month() as i32
            - self.start_date.month() as i32;
        let mut months = u32::try_from(elapsed.max(0)).ok()? / step * step;
        loop {
            let candidate = self.start_date.checked_add_months(Months::new(months))?;
            if candidate > date {
                return Some(candidate);
            }
            months = months.checked_add(step)?;
        }
    }

    /// Builds the transaction this rule spawns on `date`.
    pub fn occurrence(&self, date: NaiveDate) -> Transaction {
        Transaction::new(
            self.amount,
            self.transaction_type,
            self.category.clone(),
            date,
            self.description.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_advance_steps() {
        let start = day(2024, 1, 31);

        assert_eq!(Frequency::Daily.advance(start), Some(day(2024, 2, 1)));
        assert_eq!(Frequency::Weekly.advance(start), Some(day(2024, 2, 7)));
        assert_eq!(Frequency::Monthly.advance(start), Some(day(2024, 2, 29)));
        assert_eq!(Frequency::Yearly.advance(day(2024, 2, 29)), Some(day(2025, 2, 28)));
    }

    fn monthly_from(start: NaiveDate) -> RecurringTransaction {
        RecurringTransaction::new(
            40.0,
            TransactionType::Expense,
            "Utilities",
            "Phone",
            start,
            Frequency::Monthly,
        )
    }

    #[test]
    fn test_next_after_keeps_month_end_anchor() {
        let rule = monthly_from(day(2024, 1, 31));

        assert_eq!(rule.next_after(day(2024, 1, 31)), Some(day(2024, 2, 29)));
        assert_eq!(rule.next_after(day(2024, 2, 29)), Some(day(2024, 3, 31)));
        assert_eq!(rule.next_after(day(2024, 3, 31)), Some(day(2024, 4, 30)));
        assert_eq!(rule.next_after(day(2024, 4, 30)), Some(day(2024, 5, 31)));
    }

    #[test]
    fn test_next_after_yearly_leap_day() {
        let mut rule = monthly_from(day(2024, 2, 29));
        rule.frequency = Frequency::Yearly;

        assert_eq!(rule.next_after(day(2024, 2, 29)), Some(day(2025, 2, 28)));
        assert_eq!(rule.next_after(day(2027, 2, 28)), Some(day(2028, 2, 29)));
    }

    #[test]
    fn test_next_after_daily_and_weekly_step_from_date() {
        let mut rule = monthly_from(day(2024, 1, 1));
        rule.frequency = Frequency::Weekly;
        assert_eq!(rule.next_after(day(2024, 3, 5)), Some(day(2024, 3, 12)));

        rule.frequency = Frequency::Daily;
        assert_eq!(rule.next_after(day(2024, 3, 5)), Some(day(2024, 3, 6)));
    }

    #[test]
    fn test_next_after_end_of_calendar() {
        let mut rule = monthly_from(NaiveDate::MAX);
        assert_eq!(rule.next_after(NaiveDate::MAX), None);

        rule.frequency = Frequency::Daily;
        assert_eq!(rule.next_after(NaiveDate::MAX), None);
    }

    #[test]
    fn test_occurrence_copies_rule_fields() {
        let rule = RecurringTransaction::new(
            1200.0,
            TransactionType::Expense,
            "Housing",
            "Rent",
            day(2024, 1, 1),
            Frequency::Monthly,
        );
        let t = rule.occurrence(day(2024, 2, 1));

        assert_eq!(t.amount, 1200.0);
        assert_eq!(t.category, "Housing");
        assert_eq!(t.description, "Rent");
        assert_eq!(t.date, day(2024, 2, 1));
        assert_ne!(t.id, rule.id);
    }

    #[test]
    fn test_wire_format() {
        let rule = RecurringTransaction::new(
            5.0,
            TransactionType::Income,
            "Other",
            "Allowance",
            day(2024, 5, 1),
            Frequency::Weekly,
        );
        let value = serde_json::to_value(&rule).unwrap();

        assert_eq!(value["frequency"], "weekly");
        assert_eq!(value["nextDueDate"], "2024-05-01");
        assert_eq!(value["startDate"], "2024-05-01");
        assert_eq!(value["type"], "income");
    }
}
