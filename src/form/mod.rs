//! Entry form state for new transactions.

use rust_decimal::Decimal;

use crate::errors::FormError;
use crate::statement::{Category, TransactionRecord};

/// Amount added or removed by one stepper press.
pub const AMOUNT_STEP: Decimal = Decimal::ONE;

/// Largest amount a single transaction may carry (one trillion). Keeps the
/// statement totals far from `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// In-progress transaction entry. Only [`build`](Self::build) produces records,
/// so every record that reaches the store has a category, a label and a
/// positive amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    category: Option<Category>,
    label: String,
    amount: Decimal,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories() -> &'static [Category] {
        &Category::ALL
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Picks the category at `index` of [`categories`](Self::categories).
    pub fn select_category(&mut self, index: usize) -> Option<Category> {
        let selected = Self::categories().get(index).copied()?;
        self.category = Some(selected);
        Some(selected)
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn set_label(&mut self, text: impl Into<String>) {
        self.label = text.into();
    }

    pub fn increase_amount(&mut self) -> Decimal {
        self.amount += AMOUNT_STEP;
        self.amount
    }

    /// Steps down, never below zero.
    pub fn decrease_amount(&mut self) -> Decimal {
        self.amount = (self.amount - AMOUNT_STEP).max(Decimal::ZERO);
        self.amount
    }

    /// Reads the digits of `text` as minor units: `"12.34"` and `"-1234"` both
    /// become 12.34. Text without digits leaves the amount untouched.
    pub fn set_amount_from_digits(&mut self, text: &str) -> Decimal {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return self.amount;
        }
        match digits.parse::<i64>() {
            Ok(cents) => self.amount = Decimal::new(cents, 2),
            Err(err) => tracing::debug!(input = text, error = %err, "amount entry ignored"),
        }
        self.amount
    }

    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    pub fn build(&self) -> Result<TransactionRecord, FormError> {
        let category = self.category.ok_or(FormError::MissingCategory)?;
        if self.label.trim().is_empty() {
            return Err(FormError::EmptyLabel);
        }
        if self.amount <= Decimal::ZERO {
            return Err(FormError::NonPositiveAmount);
        }
        if self.amount > MAX_AMOUNT {
            return Err(FormError::AmountTooLarge { max: MAX_AMOUNT });
        }
        Ok(TransactionRecord::new(
            category,
            self.label.clone(),
            self.amount,
        ))
    }
}
