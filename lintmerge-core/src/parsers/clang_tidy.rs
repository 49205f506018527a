//! clang-tidy output decoder
//!
//! Decodes the console output of `clang-tidy` (or `run-clang-tidy`):
//!
//! ```text
//! src/main.c:12:5: warning: Call to 'gets' is insecure [clang-analyzer-security.insecureAPI.gets]
//!     gets(buf);
//!     ^
//! 1 warning generated.
//! ```

use super::diagnostic::{self, Dialect};
use super::ReportParser;
use crate::models::{AnalyzerInfo, Finding};
use crate::Result;
use std::path::{Path, PathBuf};

const SEVERITIES: &[&str] = &["error", "warning", "note", "remark", "fatal error"];

fn is_noise(line: &str) -> bool {
    line.ends_with("generated.")
        || line.starts_with("In file included from ")
        || line.starts_with("Suppressed ")
        || line.starts_with("Use -header-filter")
        || line.starts_with("Error while processing")
        || line.starts_with("Running clang-tidy")
}

/// clang-tidy parser
#[derive(Debug, Clone)]
pub struct ClangTidyParser {
    analyzer: AnalyzerInfo,
    input_path: PathBuf,
}

impl ClangTidyParser {
    pub fn new(analyzer: AnalyzerInfo, input_path: PathBuf) -> Self {
        Self { analyzer, input_path }
    }
}

impl ReportParser for ClangTidyParser {
    fn analyzer(&self) -> &AnalyzerInfo {
        &self.analyzer
    }

    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn tool_name(&self) -> &'static str {
        "clang-tidy"
    }

    fn decode(&self, content: &str) -> Result<Vec<Finding>> {
        let dialect = Dialect {
            severities: SEVERITIES,
            is_noise,
        };
        diagnostic::decode(content, &self.analyzer, &dialect)
    }
}
