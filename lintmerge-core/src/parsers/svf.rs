//! SVF (saber) leak report decoder
//!
//! ```text
//!     NeverFree : memory allocation at : ({ ln: 13  cl: 15  fl: test.c })
//!     PartialLeak : memory allocation at : ({ ln: 7  cl: 11  fl: test.c })
//!         conditional free path:
//!          --> (8,9) |True|
//! ```
//!
//! Newer SVF releases print the location as `{ "ln": 13, "cl": 15, "fl": "test.c" }`;
//! both spellings are accepted. Output is usually coloured, so ANSI escapes are
//! stripped before matching.

use super::ReportParser;
use crate::models::{AnalyzerInfo, ErrorType, Finding, Location};
use crate::{Error, Result};
use lazy_static::lazy_static;
use lintmerge_utils::strip_ansi_codes;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Bug kinds reported by saber's leak and file checkers
const BUG_KINDS: &[&str] = &[
    "NeverFree",
    "PartialLeak",
    "DoubleFree",
    "FileNeverClose",
    "FilePartialClose",
];

lazy_static! {
    static ref KIND: Regex = Regex::new(r"^(?P<kind>[A-Z][A-Za-z]+)\s*:\s*(?P<rest>.*)$").unwrap();

    static ref SOURCE_LOC: Regex = Regex::new(
        r#"\(?\{\s*"?ln"?\s*:\s*(?P<line>\d+)\s*,?\s*"?cl"?\s*:\s*(?P<col>\d+)\s*,?\s*"?fl"?\s*:\s*"?(?P<file>[^"}]+?)"?\s*\}\)?"#
    ).unwrap();
}

/// SVF parser
#[derive(Debug, Clone)]
pub struct SvfParser {
    analyzer: AnalyzerInfo,
    input_path: PathBuf,
}

impl SvfParser {
    pub fn new(analyzer: AnalyzerInfo, input_path: PathBuf) -> Self {
        Self { analyzer, input_path }
    }
}

impl ReportParser for SvfParser {
    fn analyzer(&self) -> &AnalyzerInfo {
        &self.analyzer
    }

    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn tool_name(&self) -> &'static str {
        "svf"
    }

    fn decode(&self, content: &str) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = strip_ansi_codes(raw);
            let line = line.trim();

            let Some(header) = KIND.captures(line) else {
                continue;
            };
            let kind = &header["kind"];
            if !BUG_KINDS.contains(&kind) {
                continue;
            }

            let rest = &header["rest"];
            let loc = SOURCE_LOC.captures(rest).ok_or_else(|| {
                Error::malformed(&self.analyzer, line_no, format!("{} report without source location", kind))
            })?;

            let file_line = loc["line"]
                .parse::<u32>()
                .map_err(|e| Error::malformed(&self.analyzer, line_no, format!("bad line number: {}", e)))?;
            let column = loc["col"]
                .parse::<u32>()
                .map_err(|e| Error::malformed(&self.analyzer, line_no, format!("bad column number: {}", e)))?;

            let message = rest[..loc.get(0).map_or(rest.len(), |m| m.start())]
                .trim()
                .trim_end_matches(':')
                .trim_end();

            let error_type = ErrorType::new(kind)
                .ok_or_else(|| Error::malformed(&self.analyzer, line_no, "empty bug kind"))?;

            findings.push(
                Finding::new(error_type, message)
                    .with_location(Location::new(loc["file"].trim(), Some(file_line), Some(column))),
            );
        }

        Ok(findings)
    }
}
