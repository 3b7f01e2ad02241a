//! Error types shared by the document store and the command runner

use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors produced by this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing file exists but is not a valid store document
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record handed to `save`/`save_bulk` has no usable `id` field
    #[error("no id found in record for collection `{collection}`")]
    MissingIdentifier { collection: String },

    /// Filesystem failure while reading, creating directories or writing
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// In-memory state could not be rendered as JSON
    #[error("failed to serialize collections: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The platform exposes no per-user configuration directory
    #[error("could not determine config directory")]
    ConfigDirUnavailable,

    /// The external program could not be located or started
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// No program name was given
    #[error("empty command")]
    EmptyCommand,

    /// The program wrote something other than UTF-8 to stdout
    #[error("output of `{program}` is not valid UTF-8: {source}")]
    Decode {
        program: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
