//! Aggregations, budget tracking and report export for FinanceFlow.
//!
//! Everything here is a pure function over slices of records; callers load
//! the records and decide what "today" is.

mod balance;
mod budget;
mod goals;
mod monthly;
mod report;
mod search;
mod summary;

pub use balance::*;
pub use budget::*;
pub use goals::*;
pub use monthly::*;
pub use report::*;
pub use search::*;
pub use summary::*;

use entities::Transaction;

/// Sorts transactions newest first. Transactions on the same day keep their
/// relative order.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}
