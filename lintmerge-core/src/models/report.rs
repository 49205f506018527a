//! Per-analyzer reports
//!
//! A [`Report`] is what a parser returns and what filters transform. Calling
//! [`Report::update_statistic`] consumes it and yields a [`FinalizedReport`],
//! the only type that carries statistics. Since a finalized report cannot be
//! filtered, its statistics always describe the findings it holds.

use super::finding::Finding;
use std::collections::BTreeMap;

/// Identity of the analyzer that produced a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerInfo {
    /// Display name, also the registry key ("EO", "clang-tidy", ...)
    pub name: String,
    /// Language or ecosystem label ("Java", "C/C++", ...)
    pub language: Option<String>,
}

impl AnalyzerInfo {
    pub fn new(name: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            name: name.into(),
            language: language.map(str::to_string),
        }
    }
}

/// Ordered findings of one analyzer, without statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    analyzer: AnalyzerInfo,
    findings: Vec<Finding>,
}

impl Report {
    pub fn new(analyzer: AnalyzerInfo, findings: Vec<Finding>) -> Self {
        Self { analyzer, findings }
    }

    pub fn analyzer(&self) -> &AnalyzerInfo {
        &self.analyzer
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// New report with the findings matching `predicate`, in their original order
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Finding) -> bool,
    {
        Self {
            analyzer: self.analyzer.clone(),
            findings: self.findings.iter().filter(|&f| predicate(f)).cloned().collect(),
        }
    }

    /// Compute statistics and freeze the report
    pub fn update_statistic(self) -> FinalizedReport {
        let statistics = Statistics::from_findings(&self.findings);
        FinalizedReport {
            analyzer: self.analyzer,
            findings: self.findings,
            statistics,
        }
    }
}

/// Finding counts grouped by error type
///
/// Error types without findings have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    by_type: BTreeMap<String, usize>,
    total: usize,
}

impl Statistics {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut by_type = BTreeMap::new();
        for finding in findings {
            *by_type.entry(finding.error_type().as_str().to_string()).or_insert(0) += 1;
        }
        Self {
            by_type,
            total: findings.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for one error type, zero when absent
    pub fn count(&self, error_type: &str) -> usize {
        self.by_type.get(error_type).copied().unwrap_or(0)
    }

    pub fn contains(&self, error_type: &str) -> bool {
        self.by_type.contains_key(error_type)
    }

    /// `(error_type, count)` pairs sorted by error type
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.by_type.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn by_type(&self) -> &BTreeMap<String, usize> {
        &self.by_type
    }
}

/// Report with statistics computed over its final set of findings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedReport {
    analyzer: AnalyzerInfo,
    findings: Vec<Finding>,
    statistics: Statistics,
}

impl FinalizedReport {
    pub fn analyzer(&self) -> &AnalyzerInfo {
        &self.analyzer
    }

    pub fn name(&self) -> &str {
        &self.analyzer.name
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Recompute statistics from the held findings
    ///
    /// Yields a report equal to `self`; statistics never drift from findings.
    #[must_use]
    pub fn update_statistic(&self) -> Self {
        Self {
            analyzer: self.analyzer.clone(),
            findings: self.findings.clone(),
            statistics: Statistics::from_findings(&self.findings),
        }
    }

    /// Drop the statistics to filter again; finalize again afterwards
    pub fn into_report(self) -> Report {
        Report::new(self.analyzer, self.findings)
    }
}
