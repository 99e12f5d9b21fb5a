//! Error types for post building

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a source file into a [`Post`](crate::content::Post)
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Cannot derive a file name from {path:?}")]
    InvalidFileName { path: PathBuf },

    #[error("No post factory registered for {path:?}")]
    UnsupportedExtension { path: PathBuf },

    #[error("Failed to load configuration {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PostError>;
