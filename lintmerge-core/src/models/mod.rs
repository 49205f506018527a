//! Data models for normalized analyzer output
//!
//! A [`finding::Finding`] is one diagnostic row; a [`report::Report`] is the
//! ordered set of rows one analyzer produced.

pub mod finding;
pub mod report;

pub use finding::{ErrorType, Finding, Location};
pub use report::{AnalyzerInfo, FinalizedReport, Report, Statistics};
