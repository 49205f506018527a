//! cppcheck output decoder
//!
//! Expects cppcheck run with the gcc-style template
//! (`--template=gcc` or `{file}:{line}:{column}: {severity}:{inconclusive:inconclusive:} {message} [{id}]`).

use super::diagnostic::{self, Dialect};
use super::ReportParser;
use crate::models::{AnalyzerInfo, Finding};
use crate::Result;
use std::path::{Path, PathBuf};

const SEVERITIES: &[&str] = &[
    "error",
    "warning",
    "style",
    "performance",
    "portability",
    "information",
    "note",
    "debug",
];

fn is_noise(line: &str) -> bool {
    line.starts_with("Checking ")
        || line.contains("files checked")
        || line.starts_with("Active checkers:")
}

/// cppcheck parser
#[derive(Debug, Clone)]
pub struct CppcheckParser {
    analyzer: AnalyzerInfo,
    input_path: PathBuf,
}

impl CppcheckParser {
    pub fn new(analyzer: AnalyzerInfo, input_path: PathBuf) -> Self {
        Self { analyzer, input_path }
    }
}

impl ReportParser for CppcheckParser {
    fn analyzer(&self) -> &AnalyzerInfo {
        &self.analyzer
    }

    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn tool_name(&self) -> &'static str {
        "cppcheck"
    }

    fn decode(&self, content: &str) -> Result<Vec<Finding>> {
        let dialect = Dialect {
            severities: SEVERITIES,
            is_noise,
        };
        diagnostic::decode(content, &self.analyzer, &dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Statistics;

    const SAMPLE: &str = "\
Checking src/buffer.c ...
src/buffer.c:14:9: error: Array 'buf[10]' accessed at index 10, which is out of bounds. [arrayIndexOutOfBounds]
        buf[10] = 0;
        ^
src/buffer.c:10:0: note: Assignment 'n=10', assigned value is 10 [arrayIndexOutOfBounds]
src/buffer.c:22:5: style: The scope of the variable 'i' can be reduced. [variableScope]
src/buffer.c:30:12: performance: Function parameter 's' should be passed by const reference. [passedByValue]
src/buffer.c:41:3: warning:inconclusive: Possible null pointer dereference: p [nullPointer]
1/2 files checked 50% done
Checking src/main.c ...
nofile:0:0: information: Active checkers: 106/836 (use --checkers-report=<filename> to see details) [checkersReport]
";

    fn parser() -> CppcheckParser {
        CppcheckParser::new(AnalyzerInfo::new("cppcheck", Some("C/C++")), PathBuf::from("cppcheck-out.txt"))
    }

    #[test]
    fn test_decode_sample() {
        let findings = parser().decode(SAMPLE).unwrap();
        assert_eq!(findings.len(), 6);

        let stats = Statistics::from_findings(&findings);
        assert_eq!(stats.count("error"), 1);
        assert_eq!(stats.count("note"), 1);
        assert_eq!(stats.count("style"), 1);
        assert_eq!(stats.count("performance"), 1);
        assert_eq!(stats.count("warning"), 1);
        assert_eq!(stats.count("information"), 1);
    }

    #[test]
    fn test_inconclusive_marker_is_stripped() {
        let findings = parser().decode("a.c:41:3: warning:inconclusive: Possible null pointer dereference: p [nullPointer]").unwrap();
        assert_eq!(findings[0].error_type().as_str(), "warning");
        assert_eq!(findings[0].message(), "Possible null pointer dereference: p");
        assert_eq!(findings[0].rule(), Some("nullPointer"));
    }

    #[test]
    fn test_unknown_severity_is_malformed() {
        assert!(parser().decode("a.c:1:1: remark: clang-only severity").is_err());
    }
}
