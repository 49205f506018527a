//! `file:line:col: severity: message [id]` decoding
//!
//! clang-tidy and cppcheck (with its gcc-style template) print the same
//! header shape and differ only in their severity vocabulary and in the
//! noise lines around the headers.

use crate::models::{AnalyzerInfo, ErrorType, Finding, Location};
use crate::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Anything starting at column 0 with `path:line[:col]:` is a header
    static ref HEADER: Regex = Regex::new(
        r"^(?P<file>\S.*?):(?P<line>\d+)(?::(?P<col>\d+))?:\s*(?P<rest>.*)$"
    ).unwrap();

    static ref BODY: Regex = Regex::new(
        r"^(?P<severity>[A-Za-z][A-Za-z ]*?):(?:inconclusive:)?\s*(?P<message>.*?)(?:\s*\[(?P<id>[^\[\]]+)\])?\s*$"
    ).unwrap();
}

/// Tool-specific knobs for the shared decoder
pub(crate) struct Dialect<'a> {
    /// Accepted severities, lowercase
    pub severities: &'a [&'a str],
    /// Unindented lines that are known noise for this tool
    pub is_noise: fn(&str) -> bool,
}

pub(crate) fn decode(content: &str, analyzer: &AnalyzerInfo, dialect: &Dialect<'_>) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end();

        if line.is_empty() || line.starts_with(char::is_whitespace) || (dialect.is_noise)(line) {
            continue;
        }

        let Some(header) = HEADER.captures(line) else {
            debug!("{}: skipping line {}: {}", analyzer.name, line_no, line);
            continue;
        };

        let rest = &header["rest"];
        if rest.is_empty() {
            debug!("{}: skipping location-only line {}: {}", analyzer.name, line_no, line);
            continue;
        }
        let body = BODY
            .captures(rest)
            .ok_or_else(|| Error::malformed(analyzer, line_no, format!("missing severity in '{}'", rest)))?;

        let severity = body["severity"].trim().to_lowercase();
        if !dialect.severities.contains(&severity.as_str()) {
            return Err(Error::malformed(
                analyzer,
                line_no,
                format!("unknown severity '{}'", severity),
            ));
        }

        let file_line = header["line"]
            .parse::<u32>()
            .map_err(|e| Error::malformed(analyzer, line_no, format!("bad line number: {}", e)))?;
        let column = header
            .name("col")
            .map(|c| c.as_str().parse::<u32>())
            .transpose()
            .map_err(|e| Error::malformed(analyzer, line_no, format!("bad column number: {}", e)))?;

        let error_type = ErrorType::new(severity)
            .ok_or_else(|| Error::malformed(analyzer, line_no, "empty severity"))?;

        let mut finding = Finding::new(error_type, body["message"].trim())
            .with_location(Location::new(&header["file"], Some(file_line), column));

        // clang-tidy appends aliases and ",-warnings-as-errors" after the check
        if let Some(id) = body.name("id").and_then(|m| m.as_str().split(',').next()) {
            finding = finding.with_rule(id.trim());
        }

        findings.push(finding);
    }

    Ok(findings)
}
