use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::currency::{LocaleFormatter, ValueFormatter};
use crate::errors::StatementError;
use crate::storage::StatementDatasource;

use super::clock::{Clock, SystemClock};
use super::group::{StatementGroup, TransactionPosition};
use super::totals::{StatementSummary, StatementTotals};
use super::transaction::TransactionRecord;

pub type Result<T> = std::result::Result<T, StatementError>;

/// Marker placed in front of expense amounts in row projections.
pub const EXPENSE_MARKER: &str = "- ";

/// Display-ready copy of one statement row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionProjection {
    pub label: String,
    pub amount: String,
}

/// Owns the dated transaction groups of a statement and keeps totals in sync.
///
/// Groups are ordered newest first. Every mutation recomputes the totals and
/// writes the whole list back through the datasource before returning.
pub struct StatementStore {
    groups: Vec<StatementGroup>,
    totals: StatementTotals,
    datasource: Box<dyn StatementDatasource>,
    clock: Box<dyn Clock>,
    formatter: Box<dyn ValueFormatter>,
}

impl StatementStore {
    /// Loads the statement from `datasource`.
    pub fn load(datasource: Box<dyn StatementDatasource>) -> Self {
        let groups = datasource.load();
        let totals = StatementTotals::from_groups(&groups);
        tracing::debug!(groups = groups.len(), "statement loaded");
        Self {
            groups,
            totals,
            datasource,
            clock: Box::new(SystemClock),
            formatter: Box::new(LocaleFormatter::default()),
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_formatter(mut self, formatter: Box<dyn ValueFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn formatter(&self) -> &dyn ValueFormatter {
        self.formatter.as_ref()
    }

    pub fn groups(&self) -> &[StatementGroup] {
        &self.groups
    }

    pub fn number_of_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn group_date(&self, group: usize) -> Result<DateTime<Utc>> {
        Ok(self.group(group)?.date)
    }

    pub fn transaction_count(&self, group: usize) -> Result<usize> {
        Ok(self.group(group)?.len())
    }

    /// Label and formatted amount for a row. Expense amounts carry the
    /// [`EXPENSE_MARKER`] prefix; the stored value itself is never negative.
    pub fn transaction_projection(
        &self,
        position: TransactionPosition,
    ) -> Result<TransactionProjection> {
        let record = self.record(position)?;
        let mut amount = self.formatter.format_currency(record.amount);
        if record.is_expense() {
            amount.insert_str(0, EXPENSE_MARKER);
        }
        Ok(TransactionProjection {
            label: record.label.clone(),
            amount,
        })
    }

    pub fn total_income(&self) -> Decimal {
        self.totals.income
    }

    pub fn total_expenses(&self) -> Decimal {
        self.totals.expenses
    }

    pub fn balance(&self) -> Decimal {
        self.totals.balance()
    }

    /// Expenses over income, zero without income. Callers clamp for display.
    pub fn balance_progress(&self) -> f64 {
        self.totals.progress()
    }

    pub fn summary(&self) -> StatementSummary {
        self.totals.into()
    }

    /// True when there is no group yet or the newest one is from another day.
    pub fn should_start_new_group(&self, candidate: DateTime<Utc>) -> bool {
        match self.groups.first() {
            Some(latest) => !latest.is_same_day(candidate),
            None => true,
        }
    }

    pub fn should_start_new_group_today(&self) -> bool {
        self.should_start_new_group(self.clock.now())
    }

    /// Inserts `record` at the front of the statement.
    ///
    /// With `start_new_group` a fresh group dated now is prepended. Otherwise
    /// the record joins the newest group; on an empty statement nothing happens.
    /// A record whose amount would overflow the totals is refused and the
    /// statement stays unchanged.
    pub fn add_transaction(
        &mut self,
        record: TransactionRecord,
        start_new_group: bool,
    ) -> Result<()> {
        if self.totals.checked_with(&record).is_none() {
            tracing::warn!(amount = %record.amount, "transaction refused, totals would overflow");
            return Err(StatementError::TotalsOverflow {
                amount: record.amount,
            });
        }
        if start_new_group {
            let group = StatementGroup::new(self.clock.now(), vec![record]);
            self.groups.insert(0, group);
        } else if let Some(latest) = self.groups.first_mut() {
            latest.transactions.insert(0, record);
        } else {
            tracing::debug!("no group to append to, transaction dropped");
            return Ok(());
        }
        self.commit();
        Ok(())
    }

    /// Adds `record`, opening a new group if the newest one is not from today.
    pub fn record_transaction(&mut self, record: TransactionRecord) -> Result<()> {
        let start_new_group = self.should_start_new_group_today();
        self.add_transaction(record, start_new_group)
    }

    /// Removes and returns the record at `position`. An emptied group stays in
    /// place until [`remove_group_if_empty`](Self::remove_group_if_empty) runs.
    pub fn remove_transaction(
        &mut self,
        position: TransactionPosition,
    ) -> Result<TransactionRecord> {
        self.record(position)?;
        let removed = self.groups[position.group]
            .transactions
            .remove(position.transaction);
        self.commit();
        Ok(removed)
    }

    pub fn remove_group_if_empty(&mut self, group: usize) -> Result<bool> {
        if !self.group(group)?.is_empty() {
            return Ok(false);
        }
        self.groups.remove(group);
        self.commit();
        Ok(true)
    }

    fn group(&self, index: usize) -> Result<&StatementGroup> {
        self.groups
            .get(index)
            .ok_or(StatementError::GroupOutOfRange {
                index,
                len: self.groups.len(),
            })
    }

    fn record(&self, position: TransactionPosition) -> Result<&TransactionRecord> {
        let group = self.group(position.group)?;
        group
            .transactions
            .get(position.transaction)
            .ok_or(StatementError::TransactionOutOfRange {
                group: position.group,
                index: position.transaction,
                len: group.len(),
            })
    }

    fn commit(&mut self) {
        self.totals = StatementTotals::from_groups(&self.groups);
        self.datasource.save(&self.groups);
        tracing::debug!(
            groups = self.groups.len(),
            income = %self.totals.income,
            expenses = %self.totals.expenses,
            "statement updated"
        );
    }
}
