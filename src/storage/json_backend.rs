use crate::statement::StatementGroup;

use super::{ByteStore, StatementDatasource};

/// Key under which the statement list is stored unless configured otherwise.
pub const DEFAULT_STATEMENT_KEY: &str = "statement-info";

/// JSON-encoded statement list kept under a single key of a [`ByteStore`].
#[derive(Debug, Clone)]
pub struct KeyValueDatasource<S> {
    store: S,
    key: String,
}

impl<S: ByteStore> KeyValueDatasource<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STATEMENT_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ByteStore> StatementDatasource for KeyValueDatasource<S> {
    fn load(&self) -> Vec<StatementGroup> {
        let bytes = match self.store.read(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read statement data");
                return Vec::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(groups) => groups,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding undecodable statement data");
                Vec::new()
            }
        }
    }

    fn save(&self, groups: &[StatementGroup]) {
        let bytes = match serde_json::to_vec(groups) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to encode statement data");
                return;
            }
        };
        if let Err(err) = self.store.write(&self.key, &bytes) {
            tracing::warn!(key = %self.key, error = %err, "failed to persist statement data");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::TransactionRecord;
    use crate::storage::MemoryByteStore;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sample_groups() -> Vec<StatementGroup> {
        vec![
            StatementGroup::new(
                Utc.with_ymd_and_hms(2022, 7, 31, 18, 45, 12).unwrap(),
                vec![
                    TransactionRecord::expense("Coffee", Decimal::new(750, 2)),
                    TransactionRecord::income("Salary", Decimal::from(1000)),
                ],
            ),
            StatementGroup::new(
                Utc.with_ymd_and_hms(2022, 7, 24, 9, 0, 0).unwrap(),
                vec![TransactionRecord::expense("Rent", Decimal::new(3304, 1))],
            ),
        ]
    }

    #[test]
    fn save_then_load_round_trips() {
        let datasource = KeyValueDatasource::new(MemoryByteStore::new());
        let groups = sample_groups();

        datasource.save(&groups);
        assert_eq!(datasource.load(), groups);
    }

    #[test]
    fn missing_key_loads_empty() {
        let datasource = KeyValueDatasource::new(MemoryByteStore::new());
        assert!(datasource.load().is_empty());
    }

    #[test]
    fn undecodable_bytes_load_empty() {
        let store = MemoryByteStore::new().with_entry(DEFAULT_STATEMENT_KEY, "{not json");
        let datasource = KeyValueDatasource::new(store);
        assert!(datasource.load().is_empty());
    }

    #[test]
    fn write_failure_is_swallowed() {
        let store = MemoryByteStore::new();
        store.set_read_only(true);
        let datasource = KeyValueDatasource::new(store);

        datasource.save(&sample_groups());
        assert!(datasource.load().is_empty());
    }

    #[test]
    fn wire_format_uses_names_and_string_amounts() {
        let datasource = KeyValueDatasource::with_key(MemoryByteStore::new(), "custom");
        datasource.save(&sample_groups()[1..]);

        let raw = datasource.store().get("custom").expect("entry written");
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(json[0]["date"], "2022-07-24T09:00:00Z");
        assert_eq!(json[0]["transactions"][0]["category"], "expense");
        assert_eq!(json[0]["transactions"][0]["name"], "Rent");
        assert_eq!(json[0]["transactions"][0]["amount"], "330.4");
    }
}
