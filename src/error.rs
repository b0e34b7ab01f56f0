// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigralintError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Migration validation failed: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, MigralintError>;

// Allow `?` on std::io::Error by converting to MigralintError::Io with unknown path.
impl From<std::io::Error> for MigralintError {
    fn from(source: std::io::Error) -> Self {
        MigralintError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl MigralintError {
    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: &std::path::Path) -> Self {
        MigralintError::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}
