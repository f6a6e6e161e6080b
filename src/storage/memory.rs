use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

use super::{ByteStore, Result};

/// In-process byte store. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryByteStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
    read_only: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryByteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with raw bytes, bypassing the read-only flag.
    pub fn with_entry(self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), bytes.into());
        self
    }

    /// When set, every write fails with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(key).cloned()
    }
}

impl ByteStore for MemoryByteStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        if self.read_only.get() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("store is read-only, cannot write `{key}`"),
            )
            .into());
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;

    #[test]
    fn read_only_rejects_writes() {
        let store = MemoryByteStore::new();
        store.write("k", b"one").unwrap();
        store.set_read_only(true);

        let err = store.write("k", b"two").expect_err("write must fail");
        assert!(matches!(err, StorageError::Io(ref source) if source.kind() == io::ErrorKind::PermissionDenied));
        assert_eq!(store.get("k").as_deref(), Some(&b"one"[..]));
        assert_eq!(store.write_count(), 1);
    }
}
