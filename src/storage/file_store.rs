use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::utils::persistence::write_atomic;

use super::{ByteStore, Result};

const ENTRY_EXTENSION: &str = "json";

/// Filesystem-backed byte store: one file per key under `root`.
#[derive(Debug, Clone)]
pub struct FileByteStore {
    root: PathBuf,
}

impl FileByteStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), ENTRY_EXTENSION))
    }
}

impl ByteStore for FileByteStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.entry_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.entry_path(key);
        write_atomic(&path, bytes)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "wrote store entry");
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "entry".into()
    } else {
        sanitized
    }
}
