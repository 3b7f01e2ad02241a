//! Mindstore - single-file JSON document store
//!
//! Collections of JSON records are loaded from one file into memory, edited
//! in place and written back with [`Database::save_file`]. A small blocking
//! command runner lives alongside it in [`process`].

pub mod core;
pub mod error;
pub mod process;

pub use crate::core::{Collection, Database, JsonDatabase, Record, StoreConfig};
pub use error::{Error, Result};
pub use process::{run_command, CommandRunner};
