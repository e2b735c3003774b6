//! Generic JSON-backed record store.
//!
//! A [`JsonStore`] holds an ordered sequence of records in memory and keeps
//! the backing file equal to that sequence: every mutating method writes the
//! whole collection back before returning. Records have no identity field;
//! callers address them by position, and an index is only valid until the
//! next mutation.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// An ordered collection of records persisted to a single JSON array file.
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    records: Vec<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open a store backed by the given file.
    ///
    /// A missing file yields an empty store. An existing file must contain a
    /// JSON array matching the record shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        Ok(Self { path, records })
    }

    /// Get the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only ordered view of the records.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the full collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn push(&mut self, record: T) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Remove the record at `index` and persist.
    ///
    /// An out-of-range index leaves the store untouched (nothing is written)
    /// and returns `None`, so callers can report the miss.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
        if index >= self.records.len() {
            return Ok(None);
        }
        let record = self.records.remove(index);
        self.save()?;
        Ok(Some(record))
    }

    /// Mutate the record at `index` in place and persist.
    ///
    /// Returns `false` without touching the file when `index` is out of
    /// range.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) -> Result<bool> {
        let Some(record) = self.records.get_mut(index) else {
            return Ok(false);
        };
        f(record);
        self.save()?;
        Ok(true)
    }

    /// Serialize the full collection to the backing file.
    ///
    /// The write goes to a temp file first and is renamed into place, so a
    /// crash mid-write cannot leave a truncated array behind.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.records)?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
