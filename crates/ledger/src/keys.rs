//! Storage key scheme.

use std::fmt;

use uuid::Uuid;

/// Key holding the list of all registered users.
pub const USERS_KEY: &str = "finance_flow_users_v1";

/// Key holding the current session.
pub const SESSION_KEY: &str = "finance_flow_session_v1";

/// Kinds of per-user record lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Transactions,
    Budgets,
    Goals,
    Recurring,
}

impl RecordKind {
    /// Returns the key suffix for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Transactions => "transactions",
            RecordKind::Budgets => "budgets",
            RecordKind::Goals => "goals",
            RecordKind::Recurring => "recurring",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the key for one user's record list.
pub fn user_key(user_id: Uuid, kind: RecordKind) -> String {
    format!("finance_flow_{}_{}", user_id, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_format() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();

        assert_eq!(
            user_key(id, RecordKind::Transactions),
            "finance_flow_67e55044-10b1-426f-9247-bb680e5fe0c8_transactions"
        );
        assert_eq!(
            user_key(id, RecordKind::Recurring),
            "finance_flow_67e55044-10b1-426f-9247-bb680e5fe0c8_recurring"
        );
    }
}
