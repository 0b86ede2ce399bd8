//! Core record definitions for FinanceFlow.
//!
//! This crate defines the records persisted per user: transactions,
//! recurring rules, budgets and savings goals, plus the user account itself.

mod budget;
mod category;
mod goal;
mod recurring;
mod transaction;
mod user;

pub use budget::*;
pub use category::*;
pub use goal::*;
pub use recurring::*;
pub use transaction::*;
pub use user::*;
