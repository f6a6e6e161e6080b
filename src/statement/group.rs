use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::TransactionRecord;

/// All transactions recorded on one calendar day, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementGroup {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

impl StatementGroup {
    pub fn new(date: DateTime<Utc>, transactions: Vec<TransactionRecord>) -> Self {
        Self { date, transactions }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether `candidate` falls on the same local calendar day as this group.
    pub fn is_same_day(&self, candidate: DateTime<Utc>) -> bool {
        is_same_day_in(&Local, self.date, candidate)
    }
}

/// Compares calendar days as seen from `tz`, not a rolling 24 hour window.
pub fn is_same_day_in<Tz: TimeZone>(tz: &Tz, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.with_timezone(tz).date_naive() == b.with_timezone(tz).date_naive()
}

/// Group and transaction coordinate inside a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionPosition {
    pub group: usize,
    pub transaction: usize,
}

impl TransactionPosition {
    pub const fn new(group: usize, transaction: usize) -> Self {
        Self { group, transaction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    #[test]
    fn same_day_uses_calendar_boundaries() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap();
        let early_next = late + Duration::minutes(45);
        let morning = Utc.with_ymd_and_hms(2024, 3, 10, 0, 5, 0).unwrap();

        assert!(!is_same_day_in(&tz, late, early_next));
        assert!(is_same_day_in(&tz, morning, late));
    }

    #[test]
    fn same_day_respects_offset() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        let a = Utc.with_ymd_and_hms(2024, 3, 11, 1, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap();

        assert!(is_same_day_in(&brasilia, a, b));
        assert!(!is_same_day_in(&Utc, a, b));
    }
}
