//! Run configuration and the analyzer table
//!
//! [`Settings`] is deserialized from an optional TOML/JSON/YAML file; every
//! field has a default, so an empty file (or no file) reproduces the
//! built-in five-analyzer setup.

use crate::filters::FindingFilter;
use crate::models::AnalyzerInfo;
use crate::parsers::{Parser, ToolKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One analyzer entry of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Display name and registry key
    pub name: String,
    pub tool: ToolKind,
    #[serde(default)]
    pub language: Option<String>,
    /// Tool output file, relative to `input_dir` unless absolute
    pub input: PathBuf,
    #[serde(default)]
    pub exclude_types: Vec<String>,
    #[serde(default)]
    pub exclude_rules: Vec<String>,
    #[serde(default)]
    pub exclude_paths: Vec<String>,
}

impl AnalyzerConfig {
    fn builtin(name: &str, tool: ToolKind, language: &str, input: &str, exclude_types: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            tool,
            language: Some(language.to_string()),
            input: PathBuf::from(input),
            exclude_types: exclude_types.iter().map(|t| (*t).to_string()).collect(),
            exclude_rules: Vec::new(),
            exclude_paths: Vec::new(),
        }
    }

    /// Filters in application order: types, then rules, then paths
    pub fn filters(&self) -> Result<Vec<FindingFilter>> {
        let mut filters: Vec<FindingFilter> = self
            .exclude_types
            .iter()
            .map(FindingFilter::exclude_type)
            .collect();
        filters.extend(self.exclude_rules.iter().map(FindingFilter::exclude_rule));
        if !self.exclude_paths.is_empty() {
            filters.push(FindingFilter::exclude_paths(&self.exclude_paths)?);
        }
        Ok(filters)
    }
}

/// Parser plus its ordered filters, one row of the analyzer table
#[derive(Debug, Clone)]
pub struct AnalyzerSpec {
    pub parser: Parser,
    pub filters: Vec<FindingFilter>,
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the analyzers' raw output
    pub input_dir: PathBuf,
    /// Output path without extension
    pub output_prefix: PathBuf,
    /// Layout used in template mode
    pub template_path: PathBuf,
    /// Run parsers on a thread pool
    pub parallel: bool,
    /// Also write an HTML rendering next to the Markdown report
    pub html: bool,
    pub analyzers: Vec<AnalyzerConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("results"),
            output_prefix: Path::new("results").join("report").join("report"),
            template_path: Path::new("templates").join("report_template.md"),
            parallel: false,
            html: false,
            analyzers: vec![
                AnalyzerConfig::builtin("EO", ToolKind::Polystat, "EO", "polystat-eo-out.txt", &[]),
                AnalyzerConfig::builtin("Java", ToolKind::Polystat, "Java", "polystat-j2eo-out.txt", &[]),
                AnalyzerConfig::builtin("clang-tidy", ToolKind::ClangTidy, "C/C++", "clang-tidy-out.txt", &["note"]),
                AnalyzerConfig::builtin("SVF", ToolKind::Svf, "C/C++", "svf-out.txt", &[]),
                AnalyzerConfig::builtin("cppcheck", ToolKind::Cppcheck, "C/C++", "cppcheck-out.txt", &["note"]),
            ],
        }
    }
}

impl Settings {
    /// Load settings from a TOML, JSON or YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = lintmerge_utils::load_config(path)?;
        Ok(settings)
    }

    /// Resolve an analyzer's input against `input_dir`
    pub fn input_path(&self, analyzer: &AnalyzerConfig) -> PathBuf {
        if analyzer.input.is_absolute() {
            analyzer.input.clone()
        } else {
            lintmerge_utils::normalize_path(&self.input_dir.join(&analyzer.input))
        }
    }

    /// Build the analyzer table in configuration order
    pub fn analyzer_specs(&self) -> Result<Vec<AnalyzerSpec>> {
        let mut seen = HashSet::new();
        self.analyzers
            .iter()
            .map(|analyzer| {
                if analyzer.name.trim().is_empty() {
                    return Err(Error::Config("analyzer name must not be empty".to_string()));
                }
                if !seen.insert(analyzer.name.as_str()) {
                    return Err(Error::Config(format!("duplicate analyzer name '{}'", analyzer.name)));
                }
                let info = AnalyzerInfo::new(analyzer.name.clone(), analyzer.language.as_deref());
                Ok(AnalyzerSpec {
                    parser: Parser::new(analyzer.tool, info, self.input_path(analyzer))?,
                    filters: analyzer.filters()?,
                })
            })
            .collect()
    }
}
