//! Analyzer output parsers
//!
//! Each supported tool has one decoder turning its native text output into
//! [`Finding`]s. The decoders share the [`ReportParser`] contract and are
//! dispatched through the closed [`Parser`] enum.
//!
//! Every decoder follows the same policy for bad input: lines that are not
//! diagnostics at all (source excerpts, progress and summary lines) are
//! skipped, while a line shaped like a diagnostic that cannot be decoded
//! aborts the parse with [`Error::MalformedInput`].

use crate::models::{AnalyzerInfo, Finding, Report};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod diagnostic;
pub mod polystat;
pub mod clang_tidy;
pub mod svf;
pub mod cppcheck;

pub use polystat::PolystatParser;
pub use clang_tidy::ClangTidyParser;
pub use svf::SvfParser;
pub use cppcheck::CppcheckParser;

/// Contract shared by all analyzer decoders
pub trait ReportParser {
    /// Analyzer identity stamped on the produced report
    fn analyzer(&self) -> &AnalyzerInfo;

    /// Location of the tool's raw output
    fn input_path(&self) -> &Path;

    /// Tool whose format this parser decodes
    fn tool_name(&self) -> &'static str;

    /// Decode raw tool output into findings, in output order
    fn decode(&self, content: &str) -> Result<Vec<Finding>>;

    /// Read the input artifact and decode it into a report
    fn parse(&self) -> Result<Report> {
        let content = read_input(self.analyzer(), self.input_path())?;
        let findings = self.decode(&content)?;
        info!(
            "{}: parsed {} findings from {} ({})",
            self.analyzer().name,
            findings.len(),
            self.input_path().display(),
            self.tool_name()
        );
        Ok(Report::new(self.analyzer().clone(), findings))
    }
}

/// Read an analyzer's output file, mapping failures to the error taxonomy
fn read_input(analyzer: &AnalyzerInfo, path: &Path) -> Result<String> {
    debug!("{}: reading {}", analyzer.name, path.display());
    match lintmerge_utils::read_text_file(path) {
        Ok(content) => Ok(content),
        Err(lintmerge_utils::UtilError::Encoding { offset, .. }) => Err(Error::MalformedInput {
            analyzer: analyzer.name.clone(),
            line: None,
            reason: format!("not valid UTF-8 (byte offset {})", offset),
        }),
        Err(source) => Err(Error::InputUnavailable {
            analyzer: analyzer.name.clone(),
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Supported analyzer tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    Polystat,
    ClangTidy,
    Svf,
    Cppcheck,
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolKind::Polystat => write!(f, "polystat"),
            ToolKind::ClangTidy => write!(f, "clang-tidy"),
            ToolKind::Svf => write!(f, "svf"),
            ToolKind::Cppcheck => write!(f, "cppcheck"),
        }
    }
}

impl std::str::FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polystat" => Ok(ToolKind::Polystat),
            "clang-tidy" | "clang_tidy" => Ok(ToolKind::ClangTidy),
            "svf" => Ok(ToolKind::Svf),
            "cppcheck" => Ok(ToolKind::Cppcheck),
            _ => Err(format!(
                "Invalid tool: '{s}'. Valid options: polystat, clang-tidy, svf, cppcheck"
            )),
        }
    }
}

/// One parser per analyzer tool
#[derive(Debug, Clone)]
pub enum Parser {
    Polystat(PolystatParser),
    ClangTidy(ClangTidyParser),
    Svf(SvfParser),
    Cppcheck(CppcheckParser),
}

impl Parser {
    /// Build the parser variant for `tool`
    pub fn new(tool: ToolKind, analyzer: AnalyzerInfo, input: PathBuf) -> Result<Self> {
        Ok(match tool {
            ToolKind::Polystat => {
                if analyzer.language.is_none() {
                    return Err(Error::Config(format!(
                        "analyzer '{}' uses polystat and needs a language label",
                        analyzer.name
                    )));
                }
                Self::Polystat(PolystatParser::new(analyzer, input))
            }
            ToolKind::ClangTidy => Self::ClangTidy(ClangTidyParser::new(analyzer, input)),
            ToolKind::Svf => Self::Svf(SvfParser::new(analyzer, input)),
            ToolKind::Cppcheck => Self::Cppcheck(CppcheckParser::new(analyzer, input)),
        })
    }

    pub fn tool(&self) -> ToolKind {
        match self {
            Self::Polystat(_) => ToolKind::Polystat,
            Self::ClangTidy(_) => ToolKind::ClangTidy,
            Self::Svf(_) => ToolKind::Svf,
            Self::Cppcheck(_) => ToolKind::Cppcheck,
        }
    }

    fn as_dyn(&self) -> &dyn ReportParser {
        match self {
            Self::Polystat(p) => p,
            Self::ClangTidy(p) => p,
            Self::Svf(p) => p,
            Self::Cppcheck(p) => p,
        }
    }

    pub fn analyzer(&self) -> &AnalyzerInfo {
        self.as_dyn().analyzer()
    }

    pub fn input_path(&self) -> &Path {
        self.as_dyn().input_path()
    }

    pub fn parse(&self) -> Result<Report> {
        self.as_dyn().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tool_kind_round_trip() {
        for tool in [ToolKind::Polystat, ToolKind::ClangTidy, ToolKind::Svf, ToolKind::Cppcheck] {
            assert_eq!(tool.to_string().parse::<ToolKind>().unwrap(), tool);
        }
        assert!("pylint".parse::<ToolKind>().is_err());
    }

    #[test]
    fn test_missing_input_is_unavailable() {
        let parser = Parser::new(
            ToolKind::Cppcheck,
            AnalyzerInfo::new("cppcheck", Some("C/C++")),
            PathBuf::from("/nonexistent/cppcheck-out.txt"),
        )
        .unwrap();

        match parser.parse() {
            Err(Error::InputUnavailable { analyzer, path, .. }) => {
                assert_eq!(analyzer, "cppcheck");
                assert_eq!(path, PathBuf::from("/nonexistent/cppcheck-out.txt"));
            }
            other => panic!("expected InputUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_non_utf8_input_is_malformed() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("svf-out.txt");
        std::fs::write(&path, [0xc3, 0x28]).unwrap();

        let parser = Parser::new(ToolKind::Svf, AnalyzerInfo::new("SVF", None), path).unwrap();
        assert!(matches!(parser.parse(), Err(Error::MalformedInput { line: None, .. })));
    }

    #[test]
    fn test_polystat_requires_language() {
        let result = Parser::new(
            ToolKind::Polystat,
            AnalyzerInfo::new("EO", None),
            PathBuf::from("polystat-eo-out.txt"),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_reads_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("clang-tidy-out.txt");
        std::fs::write(
            &path,
            "src/a.c:3:5: warning: unused variable 'x' [clang-diagnostic-unused-variable]\n",
        )
        .unwrap();

        let parser = Parser::new(ToolKind::ClangTidy, AnalyzerInfo::new("clang-tidy", Some("C/C++")), path).unwrap();
        let report = parser.parse().unwrap();

        assert_eq!(parser.tool(), ToolKind::ClangTidy);
        assert_eq!(report.analyzer().name, "clang-tidy");
        assert_eq!(report.len(), 1);
    }
}
