//! lintmerge utilities
//!
//! Shared helpers for the lintmerge crates: logging setup, configuration
//! loading, file access and the small string transforms needed when
//! rendering analyzer output into Markdown.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod file;
pub mod string;
pub mod config;
pub mod logging;

pub use file::{normalize_path, read_text_file, write_text_file, ensure_dir};
pub use string::{strip_ansi_codes, escape_table_cell, normalize_whitespace};
pub use config::{load_config, parse_config_str, ConfigFormat};

/// Result type used throughout the lintmerge utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not valid UTF-8
    #[error("{path} is not valid UTF-8 (first invalid byte at offset {offset})")]
    Encoding { path: String, offset: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path operation error
    #[error("Path operation error: {0}")]
    PathOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_message() {
        let err = UtilError::Encoding { path: "svf-out.txt".to_string(), offset: 12 };
        assert_eq!(
            err.to_string(),
            "svf-out.txt is not valid UTF-8 (first invalid byte at offset 12)"
        );
    }
}
