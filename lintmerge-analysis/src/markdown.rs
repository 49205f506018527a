//! Markdown building blocks of the combined report
//!
//! Nothing rendered here depends on time or on hash ordering, so the same
//! registry always yields the same bytes.

use lintmerge_core::{AnalyzerRegistry, FinalizedReport, Finding};
use lintmerge_utils::escape_table_cell;
use pulldown_cmark::{html, Options, Parser};

pub const REPORT_TITLE: &str = "Static Analysis Report";

/// Overview table with one row per analyzer
pub fn render_summary(registry: &AnalyzerRegistry) -> String {
    let mut markdown = String::new();

    markdown.push_str("| Analyzer | Language | Findings | Breakdown |\n");
    markdown.push_str("|----------|----------|----------|-----------|\n");

    for (name, report) in registry.iter() {
        let statistics = report.statistics();
        let breakdown = if statistics.total() == 0 {
            "-".to_string()
        } else {
            statistics
                .iter()
                .map(|(error_type, count)| format!("{}: {}", error_type, count))
                .collect::<Vec<_>>()
                .join(", ")
        };
        markdown.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            escape_table_cell(name),
            escape_table_cell(report.analyzer().language.as_deref().unwrap_or("-")),
            statistics.total(),
            escape_table_cell(&breakdown)
        ));
    }

    markdown.push_str(&format!("\n**Total findings:** {}\n", registry.total_findings()));
    markdown
}

/// Statistics and findings of one analyzer
pub fn render_analyzer_section(report: &FinalizedReport) -> String {
    let mut markdown = String::new();
    let statistics = report.statistics();

    markdown.push_str(&format!("## {}\n\n", report.name()));
    if let Some(language) = &report.analyzer().language {
        markdown.push_str(&format!("**Language:** {}\n\n", language));
    }

    markdown.push_str("| Error type | Count |\n");
    markdown.push_str("|------------|-------|\n");
    for (error_type, count) in statistics.iter() {
        markdown.push_str(&format!("| {} | {} |\n", escape_table_cell(error_type), count));
    }
    markdown.push_str(&format!("| **Total** | **{}** |\n\n", statistics.total()));

    markdown.push_str("### Findings\n\n");
    if report.findings().is_empty() {
        markdown.push_str("_No findings._\n");
        return markdown;
    }

    markdown.push_str("| # | Type | Location | Rule | Message |\n");
    markdown.push_str("|---|------|----------|------|---------|\n");
    for (index, finding) in report.findings().iter().enumerate() {
        markdown.push_str(&finding_row(index + 1, finding));
    }
    markdown
}

fn finding_row(number: usize, finding: &Finding) -> String {
    let location = finding
        .location()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    format!(
        "| {} | {} | {} | {} | {} |\n",
        number,
        escape_table_cell(finding.error_type().as_str()),
        escape_table_cell(&location),
        escape_table_cell(finding.rule().unwrap_or("-")),
        escape_table_cell(finding.message())
    )
}

/// All analyzer sections in registry order
pub fn render_all_sections(registry: &AnalyzerRegistry) -> String {
    registry
        .iter()
        .map(|(_, report)| render_analyzer_section(report))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Self-contained layout used when no template is requested
pub fn render_default(registry: &AnalyzerRegistry) -> String {
    let mut markdown = String::new();
    markdown.push_str(&format!("# {}\n\n", REPORT_TITLE));
    markdown.push_str("## Summary\n\n");
    markdown.push_str(&render_summary(registry));
    if !registry.is_empty() {
        markdown.push('\n');
        markdown.push_str(&render_all_sections(registry));
    }
    markdown
}

/// Render a Markdown document as a standalone HTML page
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let mut body = String::new();
    html::push_html(&mut body, Parser::new_ext(markdown, options));

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        REPORT_TITLE, body
    )
}
