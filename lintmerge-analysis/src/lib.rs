//! lintmerge analysis - pipeline and report generation
//!
//! Runs the configured analyzer parsers, applies their filters, finalizes
//! statistics into an [`AnalyzerRegistry`](lintmerge_core::AnalyzerRegistry)
//! and renders the combined Markdown report.

#![warn(clippy::all, clippy::pedantic)]

pub mod pipeline;
pub mod generator;
pub mod template;
pub mod markdown;

pub use pipeline::{run_report, AnalysisPipeline};
pub use generator::{RenderMode, ReportGenerator};
pub use template::Template;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, lintmerge_core::Error>;
