//! Transaction records and their income/expense classification.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Closed classification of a transaction.
pub enum Category {
    Expense,
    Income,
}

impl Category {
    /// Every category in picker order.
    pub const ALL: [Category; 2] = [Category::Expense, Category::Income];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Expense => "expense",
            Category::Income => "income",
        }
    }

    /// Parses the lowercase wire name, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Expense => "Expense",
            Category::Income => "Income",
        };
        f.write_str(label)
    }
}

/// A single income or expense entry.
///
/// The amount is always stored as a positive magnitude; the category decides
/// which total it contributes to. Records do not validate themselves, see
/// [`TransactionDraft`](crate::form::TransactionDraft) for the entry gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub category: Category,
    #[serde(rename = "name")]
    pub label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl TransactionRecord {
    pub fn new(category: Category, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category,
            label: label.into(),
            amount,
        }
    }

    pub fn income(label: impl Into<String>, amount: Decimal) -> Self {
        Self::new(Category::Income, label, amount)
    }

    pub fn expense(label: impl Into<String>, amount: Decimal) -> Self {
        Self::new(Category::Expense, label, amount)
    }

    pub fn is_expense(&self) -> bool {
        self.category == Category::Expense
    }
}
