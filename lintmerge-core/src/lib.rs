//! lintmerge core - analyzer report model and decoders
//!
//! This crate provides:
//! - the normalized [`Finding`] row and the [`Report`] / [`FinalizedReport`] pair
//! - one parser per supported analyzer, behind the closed [`Parser`] enum
//! - configuration-driven finding filters
//! - the insertion-ordered [`AnalyzerRegistry`] handed to report generation

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
)]
#![allow(
    clippy::module_name_repetitions,  // Often necessary for clarity
)]

pub mod models;
pub mod parsers;
pub mod filters;
pub mod registry;
pub mod config;

pub use models::{
    finding::{ErrorType, Finding, Location},
    report::{AnalyzerInfo, FinalizedReport, Report, Statistics},
};
pub use parsers::{Parser, ReportParser, ToolKind};
pub use filters::FindingFilter;
pub use registry::AnalyzerRegistry;
pub use config::{AnalyzerConfig, AnalyzerSpec, Settings};

use std::path::PathBuf;

/// Result type used throughout lintmerge
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lintmerge operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An analyzer's output file is missing or unreadable
    #[error("{analyzer}: input {} is unavailable: {source}", .path.display())]
    InputUnavailable {
        analyzer: String,
        path: PathBuf,
        #[source]
        source: lintmerge_utils::UtilError,
    },

    /// An analyzer's output file does not follow that tool's format
    #[error("{analyzer}: malformed input{}: {reason}", .line.map_or_else(String::new, |l| format!(" at line {l}")))]
    MalformedInput {
        analyzer: String,
        line: Option<usize>,
        reason: String,
    },

    /// Template missing or malformed
    #[error("Rendering error: {0}")]
    Rendering(String),

    /// Output could not be persisted
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: lintmerge_utils::UtilError,
    },

    /// Wrong command-line usage
    #[error("Usage error: {0}")]
    Usage(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] lintmerge_utils::UtilError),
}

impl Error {
    pub(crate) fn malformed(analyzer: &AnalyzerInfo, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            analyzer: analyzer.name.clone(),
            line: Some(line),
            reason: reason.into(),
        }
    }

    /// Name of the analyzer the error belongs to, if any
    pub fn analyzer(&self) -> Option<&str> {
        match self {
            Self::InputUnavailable { analyzer, .. } | Self::MalformedInput { analyzer, .. } => {
                Some(analyzer)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_analyzer_and_line() {
        let info = AnalyzerInfo::new("cppcheck", Some("C/C++"));
        let err = Error::malformed(&info, 7, "unknown severity 'fatal'");

        assert_eq!(err.to_string(), "cppcheck: malformed input at line 7: unknown severity 'fatal'");
        assert_eq!(err.analyzer(), Some("cppcheck"));
    }

    #[test]
    fn test_malformed_without_line() {
        let err = Error::MalformedInput {
            analyzer: "SVF".to_string(),
            line: None,
            reason: "not valid UTF-8".to_string(),
        };
        assert_eq!(err.to_string(), "SVF: malformed input: not valid UTF-8");
    }
}
