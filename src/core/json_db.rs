//! JSON file backed document store

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::config::{ensure_parent_dir, StoreConfig};
use super::database::Database;
use super::record::{record_id, Collection, Collections, Record};
use crate::error::{Error, Result};

/// Document store held entirely in memory and flushed to one JSON file.
///
/// The file is read once by [`JsonDatabase::open`] and only written again by
/// [`Database::save_file`]. There is no locking: two handles on the same file
/// overwrite each other, last flush wins.
#[derive(Debug)]
pub struct JsonDatabase {
    /// Backing file
    path: PathBuf,
    /// Collection name -> id -> record
    collections: Collections,
}

impl JsonDatabase {
    /// Open the store at the per-user default location
    pub fn open_default() -> Result<Self> {
        Self::open_config(&StoreConfig::default_location()?)
    }

    /// Open the store described by `config`
    pub fn open_config(config: &StoreConfig) -> Result<Self> {
        Self::open(config.db_path())
    }

    /// Open the store backed by `path`.
    ///
    /// Missing files are created holding an empty object. An existing file
    /// that is not an object of objects of records is a parse error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            let collections: Collections =
                serde_json::from_str(&content).map_err(|source| Error::Parse {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(
                "Loaded {} collections from {}",
                collections.len(),
                path.display()
            );
            return Ok(Self { path, collections });
        }

        let db = Self {
            path,
            collections: Collections::new(),
        };
        db.save_file()?;
        tracing::info!("Created empty store at: {}", db.path.display());
        Ok(db)
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every collection currently held in memory
    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    /// A single collection, if it exists
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Create `name` if it does not exist yet.
    ///
    /// Returns `true` when the collection was newly created.
    pub fn ensure_collection(&mut self, name: &str) -> bool {
        let created = !self.collections.contains_key(name);
        self.collection_mut(name);
        created
    }

    fn collection_mut(&mut self, name: &str) -> &mut Collection {
        self.collections.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!("Created collection: {}", name);
            Collection::new()
        })
    }

    fn require_id(collection: &str, record: &Record) -> Result<String> {
        record_id(record).ok_or_else(|| Error::MissingIdentifier {
            collection: collection.to_string(),
        })
    }
}

impl Database for JsonDatabase {
    fn load(&self, collection: &str, id: &str) -> Option<&Record> {
        self.collections.get(collection)?.get(id)
    }

    fn load_bulk(&self, collection: &str, ids: &[&str]) -> Vec<Option<&Record>> {
        match self.collections.get(collection) {
            Some(objects) => ids.iter().map(|id| objects.get(*id)).collect(),
            None => Vec::new(),
        }
    }

    fn delete(&mut self, collection: &str, id: &str) {
        if let Some(objects) = self.collections.get_mut(collection) {
            objects.remove(id);
        }
    }

    fn delete_bulk(&mut self, collection: &str, ids: &[&str]) {
        let Some(objects) = self.collections.get_mut(collection) else {
            return;
        };
        for id in ids {
            objects.remove(*id);
        }
    }

    fn save(&mut self, collection: &str, record: Record) -> Result<()> {
        // Validate before creating anything so a rejected record leaves no trace
        let id = Self::require_id(collection, &record)?;
        self.collection_mut(collection).insert(id, record);
        Ok(())
    }

    fn save_bulk(&mut self, collection: &str, records: Vec<Record>) -> Result<()> {
        let objects = self.collection_mut(collection);
        for record in records {
            let id = Self::require_id(collection, &record)?;
            objects.insert(id, record);
        }
        Ok(())
    }

    fn save_file(&self) -> Result<()> {
        let mut content = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut content, formatter);
        self.collections.serialize(&mut ser)?;

        std::fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))?;
        tracing::info!("Saved store to: {}", self.path.display());
        Ok(())
    }
}
