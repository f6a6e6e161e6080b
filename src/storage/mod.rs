//! Persistence collaborators for statement data.
//!
//! The store only sees [`StatementDatasource`], which never fails from its
//! point of view. Byte-level backends report errors through [`StorageError`]
//! and the datasource decides what to swallow.

pub mod file_store;
pub mod json_backend;
pub mod memory;

use std::rc::Rc;

use crate::errors::StorageError;
use crate::statement::StatementGroup;

pub type Result<T> = std::result::Result<T, StorageError>;

pub use file_store::FileByteStore;
pub use json_backend::{KeyValueDatasource, DEFAULT_STATEMENT_KEY};
pub use memory::MemoryByteStore;

/// Keyed byte storage, the shape of a platform preferences store.
pub trait ByteStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// Load/save contract used by [`StatementStore`](crate::statement::StatementStore).
///
/// `load` yields an empty list when nothing usable is stored and `save` is
/// best effort. Neither surfaces errors to the caller.
pub trait StatementDatasource {
    fn load(&self) -> Vec<StatementGroup>;
    fn save(&self, groups: &[StatementGroup]);
}

impl<S: ByteStore + ?Sized> ByteStore for Rc<S> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(key, bytes)
    }
}

impl<D: StatementDatasource + ?Sized> StatementDatasource for Rc<D> {
    fn load(&self) -> Vec<StatementGroup> {
        (**self).load()
    }

    fn save(&self, groups: &[StatementGroup]) {
        (**self).save(groups)
    }
}
