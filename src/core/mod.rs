//! Core functionality for the document store and its configuration

pub mod config;
pub mod database;
pub mod json_db;
pub mod record;

pub use config::StoreConfig;
pub use database::Database;
pub use json_db::JsonDatabase;
pub use record::{record_id, Collection, Collections, Record, ID_FIELD};
