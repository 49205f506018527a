//! Finding filters
//!
//! Filters are declared per analyzer in configuration and applied through
//! [`Report::filter`] in declaration order, after parsing and before
//! statistics are computed.

use crate::models::{Finding, Report};
use crate::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

/// A predicate over findings; a finding survives when [`FindingFilter::keeps`] holds
#[derive(Debug, Clone)]
pub enum FindingFilter {
    /// Drop findings of this error type ("note")
    ExcludeType(String),
    /// Drop findings reported by this rule or check
    ExcludeRule(String),
    /// Drop findings located in files matching any of the globs
    ExcludePaths { patterns: Vec<String>, set: GlobSet },
}

impl FindingFilter {
    pub fn exclude_type(error_type: impl Into<String>) -> Self {
        Self::ExcludeType(error_type.into())
    }

    pub fn exclude_rule(rule: impl Into<String>) -> Self {
        Self::ExcludeRule(rule.into())
    }

    /// Compile path globs
    pub fn exclude_paths(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| Error::Config(format!("invalid path glob '{}': {}", pattern, e)))?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| Error::Config(format!("cannot compile path globs: {}", e)))?;
        Ok(Self::ExcludePaths {
            patterns: patterns.to_vec(),
            set,
        })
    }

    pub fn keeps(&self, finding: &Finding) -> bool {
        match self {
            Self::ExcludeType(error_type) => finding.error_type().as_str() != error_type,
            Self::ExcludeRule(rule) => finding.rule() != Some(rule.as_str()),
            Self::ExcludePaths { set, .. } => finding
                .location()
                .map_or(true, |location| !set.is_match(&location.file)),
        }
    }
}

impl std::fmt::Display for FindingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExcludeType(t) => write!(f, "exclude type '{}'", t),
            Self::ExcludeRule(r) => write!(f, "exclude rule '{}'", r),
            Self::ExcludePaths { patterns, .. } => write!(f, "exclude paths {:?}", patterns),
        }
    }
}

/// Apply filters in order, each producing a new report
pub fn apply_filters(report: Report, filters: &[FindingFilter]) -> Report {
    filters.iter().fold(report, |report, filter| {
        let filtered = report.filter(|finding| filter.keeps(finding));
        debug!(
            "{}: {} kept {} of {} findings",
            report.analyzer().name,
            filter,
            filtered.len(),
            report.len()
        );
        filtered
    })
}
