use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::group::StatementGroup;
use super::transaction::{Category, TransactionRecord};

/// Income and expense sums across every group of a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementTotals {
    pub income: Decimal,
    pub expenses: Decimal,
}

impl StatementTotals {
    /// Full re-scan over all transactions. `None` when a sum does not fit
    /// in a `Decimal`.
    pub fn checked_from_groups(groups: &[StatementGroup]) -> Option<Self> {
        groups
            .iter()
            .flat_map(|group| group.transactions.iter())
            .try_fold(Self::default(), |totals, record| totals.checked_with(record))
    }

    /// Like [`checked_from_groups`](Self::checked_from_groups), saturating
    /// at `Decimal::MAX` for stored data that was never range checked.
    pub fn from_groups(groups: &[StatementGroup]) -> Self {
        Self::checked_from_groups(groups).unwrap_or_else(|| {
            tracing::warn!("statement totals overflow, saturating");
            groups
                .iter()
                .flat_map(|group| group.transactions.iter())
                .fold(Self::default(), |mut totals, record| {
                    match record.category {
                        Category::Income => {
                            totals.income = totals.income.saturating_add(record.amount)
                        }
                        Category::Expense => {
                            totals.expenses = totals.expenses.saturating_add(record.amount)
                        }
                    }
                    totals
                })
        })
    }

    /// Totals after adding `record`, or `None` on overflow.
    pub fn checked_with(&self, record: &TransactionRecord) -> Option<Self> {
        let mut next = *self;
        match record.category {
            Category::Income => next.income = next.income.checked_add(record.amount)?,
            Category::Expense => next.expenses = next.expenses.checked_add(record.amount)?,
        }
        Some(next)
    }

    /// Both sums are non-negative, so the difference always fits.
    pub fn balance(&self) -> Decimal {
        self.income - self.expenses
    }

    /// Expenses over income. Zero when there is no income; not clamped, so
    /// overspending yields values above one. Ratios too large for a
    /// `Decimal` are computed in floating point.
    pub fn progress(&self) -> f64 {
        if self.income.is_zero() {
            return 0.0;
        }
        match self.expenses.checked_div(self.income) {
            Some(ratio) => ratio.to_f64().unwrap_or(0.0),
            None => {
                let expenses = self.expenses.to_f64().unwrap_or(f64::MAX);
                let income = self.income.to_f64().unwrap_or(f64::MIN_POSITIVE);
                expenses / income
            }
        }
    }
}

/// Snapshot of the aggregate figures shown on the statement card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatementSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub progress: f64,
}

impl From<StatementTotals> for StatementSummary {
    fn from(totals: StatementTotals) -> Self {
        Self {
            income: totals.income,
            expenses: totals.expenses,
            balance: totals.balance(),
            progress: totals.progress(),
        }
    }
}
