use thiserror::Error;

/// Errors raised by [`StatementStore`](crate::statement::StatementStore) when a caller
/// addresses a group or transaction that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    #[error("group index {index} out of range ({len} groups)")]
    GroupOutOfRange { index: usize, len: usize },
    #[error("transaction index {index} out of range for group {group} ({len} transactions)")]
    TransactionOutOfRange {
        group: usize,
        index: usize,
        len: usize,
    },
    #[error("amount {amount} would overflow the statement totals")]
    TotalsOverflow { amount: rust_decimal::Decimal },
}

impl StatementError {
    /// Both variants describe an index outside current bounds.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            StatementError::GroupOutOfRange { .. } | StatementError::TransactionOutOfRange { .. }
        )
    }
}

/// Failures inside the persistence collaborator. These never reach the store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}

/// Reasons a transaction draft cannot become a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("select a category before saving")]
    MissingCategory,
    #[error("description must not be empty")]
    EmptyLabel,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("amount must not exceed {max}")]
    AmountTooLarge { max: rust_decimal::Decimal },
}
