//! Statement model: dated transaction groups, running totals, and the store
//! that owns them.

pub mod clock;
pub mod group;
pub mod store;
pub mod totals;
pub mod transaction;

pub use clock::{Clock, FixedClock, SystemClock};
pub use group::{is_same_day_in, StatementGroup, TransactionPosition};
pub use store::{StatementStore, TransactionProjection, EXPENSE_MARKER};
pub use totals::{StatementSummary, StatementTotals};
pub use transaction::{Category, TransactionRecord};
