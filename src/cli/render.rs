//! Text rendering of statement projections.

use colored::Colorize;

use crate::statement::{StatementStore, StatementSummary, TransactionPosition, EXPENSE_MARKER};

const PROGRESS_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 24;

/// Sections (newest first) with numbered rows. Numbers are one-based, as
/// accepted by the `remove` command.
pub fn statement(store: &StatementStore) -> String {
    if store.number_of_groups() == 0 {
        return "No transactions yet.".to_string();
    }
    let formatter = store.formatter();
    let mut lines = Vec::new();
    for (group_index, group) in store.groups().iter().enumerate() {
        lines.push(
            format!("{}. {}", group_index + 1, formatter.format_date(group.date))
                .bold()
                .to_string(),
        );
        for row in 0..group.len() {
            let position = TransactionPosition::new(group_index, row);
            let Ok(projection) = store.transaction_projection(position) else {
                continue;
            };
            let amount = if projection.amount.starts_with(EXPENSE_MARKER) {
                projection.amount.red()
            } else {
                projection.amount.green()
            };
            lines.push(format!(
                "   {:>2}) {:<width$} {}",
                row + 1,
                projection.label,
                amount,
                width = LABEL_WIDTH
            ));
        }
    }
    lines.join("\n")
}

/// Income, expenses and balance card followed by the progress bar.
pub fn summary(store: &StatementStore) -> String {
    let summary = store.summary();
    let formatter = store.formatter();
    let balance = formatter.format_currency(summary.balance);
    let balance = if summary.balance.is_sign_negative() && !summary.balance.is_zero() {
        balance.red()
    } else {
        balance.normal()
    };
    [
        format!("Income    {}", formatter.format_currency(summary.income)),
        format!("Expenses  {}", formatter.format_currency(summary.expenses)),
        format!("Balance   {balance}"),
        progress_bar(&summary),
    ]
    .join("\n")
}

/// The store reports an unbounded ratio; the bar saturates at full.
pub fn progress_bar(summary: &StatementSummary) -> String {
    let fill = summary.progress.clamp(0.0, 1.0);
    let filled = (fill * PROGRESS_WIDTH as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    );
    let bar = if summary.progress > 1.0 {
        bar.red()
    } else {
        bar.normal()
    };
    format!("[{bar}] {:.1}%", summary.progress * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{FixedClock, StatementGroup, TransactionRecord};
    use crate::storage::{KeyValueDatasource, MemoryByteStore, StatementDatasource};
    use chrono::{Local, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn store_with(groups: Vec<StatementGroup>) -> StatementStore {
        colored::control::set_override(false);
        let datasource = KeyValueDatasource::new(MemoryByteStore::new());
        datasource.save(&groups);
        StatementStore::load(Box::new(datasource)).with_clock(Box::new(FixedClock(Utc::now())))
    }

    fn summary_with(progress: f64) -> StatementSummary {
        StatementSummary {
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
            balance: Decimal::ZERO,
            progress,
        }
    }

    #[test]
    fn empty_statement_message() {
        let store = store_with(Vec::new());
        assert_eq!(statement(&store), "No transactions yet.");
    }

    #[test]
    fn statement_lists_dated_sections() {
        let date = Local
            .with_ymd_and_hms(2022, 7, 24, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let store = store_with(vec![StatementGroup::new(
            date,
            vec![
                TransactionRecord::income("Salary", Decimal::from(1000)),
                TransactionRecord::expense("Coffee", Decimal::from(7)),
            ],
        )]);

        let rendered = statement(&store);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "1. July 24, 2022");
        assert!(lines[1].contains("1) Salary"));
        assert!(lines[1].ends_with("$1,000.00"));
        assert!(lines[2].ends_with("- $7.00"));
    }

    #[test]
    fn summary_shows_totals() {
        let store = store_with(vec![StatementGroup::new(
            Utc::now(),
            vec![
                TransactionRecord::income("Salary", Decimal::from(1000)),
                TransactionRecord::expense("Coffee", Decimal::from(7)),
            ],
        )]);
        let rendered = summary(&store);
        assert!(rendered.contains("Income    $1,000.00"));
        assert!(rendered.contains("Expenses  $7.00"));
        assert!(rendered.contains("Balance   $993.00"));
        assert!(rendered.ends_with("0.7%"));
    }

    #[test]
    fn progress_bar_saturates() {
        colored::control::set_override(false);
        assert_eq!(
            progress_bar(&summary_with(0.5)),
            "[##########----------] 50.0%"
        );
        assert_eq!(
            progress_bar(&summary_with(2.0)),
            "[####################] 200.0%"
        );
        assert_eq!(
            progress_bar(&summary_with(0.0)),
            "[--------------------] 0.0%"
        );
    }
}
