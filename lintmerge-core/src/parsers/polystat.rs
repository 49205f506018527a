//! Polystat output decoder
//!
//! Polystat reports per source file, one result per analyzer rule:
//!
//! ```text
//! Polystat 0.4 analyzing 2 files
//! sandbox/test.eo:
//!   mutualrec: Defect: methods 'f' and 'g' are mutually recursive
//!   unlint: OK
//!   liskov: Error: analysis failed
//!     Caused by: timeout
//! ```
//!
//! The same format is produced for EO sources and for Java sources
//! translated to EO, so one decoder serves both analyzers and the language
//! label is what tells them apart.

use super::ReportParser;
use crate::models::{AnalyzerInfo, ErrorType, Finding, Location};
use crate::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

lazy_static! {
    static ref RESULT: Regex = Regex::new(
        r"^\s+(?P<rule>[^\s:][^:]*?):\s*(?P<status>[A-Za-z]+)\s*(?::\s*(?P<message>.*))?$"
    ).unwrap();
}

/// Polystat parser for one input language
#[derive(Debug, Clone)]
pub struct PolystatParser {
    analyzer: AnalyzerInfo,
    input_path: PathBuf,
}

impl PolystatParser {
    pub fn new(analyzer: AnalyzerInfo, input_path: PathBuf) -> Self {
        Self { analyzer, input_path }
    }

    /// Language label of the sources polystat analyzed ("EO", "Java")
    pub fn language(&self) -> &str {
        self.analyzer.language.as_deref().unwrap_or_default()
    }
}

/// Result being assembled; continuation lines extend its message
struct Pending {
    error_type: ErrorType,
    rule: String,
    file: String,
    message: String,
    /// Indentation of the result line
    indent: usize,
}

impl Pending {
    fn extend(&mut self, detail: &str) {
        self.message.push(' ');
        self.message.push_str(detail.trim());
    }

    fn finish(self) -> Finding {
        Finding::new(self.error_type, self.message)
            .with_rule(self.rule)
            .with_location(Location::new(self.file, None, None))
    }
}

impl ReportParser for PolystatParser {
    fn analyzer(&self) -> &AnalyzerInfo {
        &self.analyzer
    }

    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn tool_name(&self) -> &'static str {
        "polystat"
    }

    fn decode(&self, content: &str) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();
        let mut current_file: Option<String> = None;
        let mut pending: Option<Pending> = None;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end();

            if line.trim().is_empty() {
                continue;
            }

            if !line.starts_with(char::is_whitespace) {
                findings.extend(pending.take().map(Pending::finish));
                if let Some(file) = line.strip_suffix(':') {
                    current_file = Some(file.trim().to_string());
                } else {
                    debug!("{}: skipping line {}: {}", self.analyzer.name, line_no, line);
                }
                continue;
            }

            // Anything indented deeper than the open result belongs to it
            let indent = line.len() - line.trim_start().len();
            if let Some(p) = pending.as_mut().filter(|p| indent > p.indent) {
                p.extend(line);
                continue;
            }

            let Some(result) = RESULT.captures(line) else {
                match pending.as_mut() {
                    Some(p) => p.extend(line),
                    None => debug!("{}: skipping line {}: {}", self.analyzer.name, line_no, line),
                }
                continue;
            };

            let file = current_file.clone().ok_or_else(|| {
                Error::malformed(&self.analyzer, line_no, "result line before any file header")
            })?;

            let status = result["status"].to_lowercase();
            let error_type = match status.as_str() {
                "ok" => {
                    findings.extend(pending.take().map(Pending::finish));
                    continue;
                }
                "defect" | "error" => ErrorType::new(status)
                    .ok_or_else(|| Error::malformed(&self.analyzer, line_no, "empty status"))?,
                _ => {
                    return Err(Error::malformed(
                        &self.analyzer,
                        line_no,
                        format!("unknown polystat status '{}'", &result["status"]),
                    ));
                }
            };

            findings.extend(pending.take().map(Pending::finish));
            pending = Some(Pending {
                error_type,
                rule: result["rule"].trim().to_string(),
                file,
                message: result.name("message").map_or("", |m| m.as_str().trim()).to_string(),
                indent,
            });
        }

        findings.extend(pending.take().map(Pending::finish));
        Ok(findings)
    }
}
