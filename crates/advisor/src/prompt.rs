//! Prompt construction.

use entities::Transaction;

use crate::{AdvisorResult, MAX_PROMPT_TRANSACTIONS};

/// Picks the most recent transactions by date, newest first.
pub fn recent_for_prompt(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(MAX_PROMPT_TRANSACTIONS);
    recent
}

/// Builds the advisor prompt around a compact JSON dump of the transactions.
pub fn build_prompt(transactions: &[Transaction]) -> AdvisorResult<String> {
    let summary = serde_json::to_string(&recent_for_prompt(transactions))?;

    Ok(format!(
        "You are an expert financial advisor. Here is a JSON summary of my recent financial transactions:\n\
         {summary}\n\
         \n\
         Please provide a concise analysis of my spending habits.\n\
         1. Summarize my financial health briefly.\n\
         2. Identify the biggest spending category.\n\
         3. Give me 3 actionable tips to improve my savings or budget.\n\
         \n\
         Keep the tone professional yet encouraging. Format the response with Markdown.\n"
    ))
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use entities::TransactionType;

    use super::*;

    #[test]
    fn test_prompt_limits_to_most_recent() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transactions: Vec<Transaction> = (0..60u64)
            .map(|i| {
                Transaction::new(
                    1.0,
                    TransactionType::Expense,
                    "Food",
                    start.checked_add_days(Days::new(i)).unwrap(),
                    format!("item-{i}"),
                )
            })
            .collect();

        let recent = recent_for_prompt(&transactions);

        assert_eq!(recent.len(), MAX_PROMPT_TRANSACTIONS);
        assert_eq!(recent[0].description, "item-59");
        assert_eq!(recent[49].description, "item-10");
    }

    #[test]
    fn test_prompt_embeds_transactions() {
        let t = Transaction::new(
            42.0,
            TransactionType::Expense,
            "Entertainment",
            NaiveDate::from_ymd_opt(2024, 8, 9).unwrap(),
            "Concert",
        );

        let prompt = build_prompt(&[t]).unwrap();

        assert!(prompt.starts_with("You are an expert financial advisor."));
        assert!(prompt.contains(r#""category":"Entertainment""#));
        assert!(prompt.contains(r#""date":"2024-08-09""#));
        assert!(prompt.contains("3 actionable tips"));
        assert!(prompt.contains("Markdown"));
    }
}
