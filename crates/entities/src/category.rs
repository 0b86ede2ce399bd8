//! Category definitions.

use serde::{Deserialize, Serialize};

/// Built-in spending and income categories.
///
/// Records store categories as free-form strings; this list is what clients
/// offer by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Salary,
    Freelance,
    Investment,
    Shopping,
    Personal,
    Education,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 13] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Shopping,
        Category::Personal,
        Category::Education,
        Category::Other,
    ];

    /// Returns the label stored on records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
            Category::Shopping => "Shopping",
            Category::Personal => "Personal",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_serde_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
