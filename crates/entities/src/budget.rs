//! Budget definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly spending limit for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier.
    pub id: Uuid,
    /// Category the limit applies to. At most one budget per category.
    pub category: String,
    /// Monthly limit.
    pub amount: f64,
}

impl Budget {
    /// Creates a new budget.
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
        }
    }
}
