//! The storage contract implemented by document stores

use super::record::Record;
use crate::error::Result;

/// Synchronous CRUD access to named collections of identified records.
///
/// Lookups and deletions are lenient: a missing collection or id yields
/// `None` or does nothing. Saves are strict: a record without an id is an
/// error. Only [`Database::save_file`] touches persistent storage.
pub trait Database {
    /// Look up one record
    fn load(&self, collection: &str, id: &str) -> Option<&Record>;

    /// Look up several records, positionally aligned with `ids`.
    ///
    /// Returns an empty vector when the collection itself does not exist.
    fn load_bulk(&self, collection: &str, ids: &[&str]) -> Vec<Option<&Record>>;

    /// Remove one record if present
    fn delete(&mut self, collection: &str, id: &str);

    /// Remove every listed record that is present
    fn delete_bulk(&mut self, collection: &str, ids: &[&str]);

    /// Insert or replace a record under its own id
    fn save(&mut self, collection: &str, record: Record) -> Result<()>;

    /// Insert or replace records in order.
    ///
    /// Stops at the first record without an id; records before it stay saved.
    fn save_bulk(&mut self, collection: &str, records: Vec<Record>) -> Result<()>;

    /// Write the whole in-memory state to persistent storage
    fn save_file(&self) -> Result<()>;
}
