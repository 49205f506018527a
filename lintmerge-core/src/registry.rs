//! Analyzer registry
//!
//! Maps analyzer display names to their finalized reports. Built once after
//! all parsers finished and never modified afterwards; iteration follows the
//! order the reports were supplied in.

use crate::models::FinalizedReport;
use crate::{Error, Result};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerRegistry {
    reports: IndexMap<String, FinalizedReport>,
}

impl AnalyzerRegistry {
    /// Build the registry, rejecting duplicate analyzer names
    pub fn from_reports<I>(reports: I) -> Result<Self>
    where
        I: IntoIterator<Item = FinalizedReport>,
    {
        let mut map = IndexMap::new();
        for report in reports {
            let name = report.name().to_string();
            if map.contains_key(&name) {
                return Err(Error::Config(format!("duplicate analyzer name '{}'", name)));
            }
            map.insert(name, report);
        }
        Ok(Self { reports: map })
    }

    pub fn get(&self, name: &str) -> Option<&FinalizedReport> {
        self.reports.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.reports.contains_key(name)
    }

    /// `(name, report)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FinalizedReport)> {
        self.reports.iter().map(|(name, report)| (name.as_str(), report))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reports.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Findings across all analyzers
    pub fn total_findings(&self) -> usize {
        self.reports.values().map(|r| r.statistics().total()).sum()
    }
}
