//! Report templates
//!
//! A template is a Markdown document with `{{ ... }}` placeholders:
//!
//! - `{{ summary }}` - overview table of all analyzers
//! - `{{ analyzers }}` - every analyzer section in registry order
//! - `{{ analyzer:<Name> }}` - the section of a single analyzer
//!
//! Every analyzer of the registry must end up in the rendered document, either
//! through `{{ analyzers }}` or through its own placeholder.

use crate::markdown;
use crate::Result;
use lazy_static::lazy_static;
use lintmerge_core::{AnalyzerRegistry, Error};
use regex::Regex;
use std::path::Path;
use tracing::debug;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^\n]*?)\}\}").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Summary,
    Analyzers,
    Analyzer(String),
}

/// A parsed report template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Read and parse a template file
    pub fn load(path: &Path) -> Result<Self> {
        let source = lintmerge_utils::read_text_file(path).map_err(|e| {
            Error::Rendering(format!("cannot read template {}: {}", path.display(), e))
        })?;
        debug!("Loaded template {}", path.display());
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(source) {
            let Some(whole) = captures.get(0) else { continue };
            push_text(&mut segments, &source[last..whole.start()])?;
            segments.push(placeholder(captures[1].trim())?);
            last = whole.end();
        }
        push_text(&mut segments, &source[last..])?;

        Ok(Self { segments })
    }

    /// Analyzer names referenced by `{{ analyzer:<Name> }}`
    pub fn referenced_analyzers(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Analyzer(name) => Some(name.as_str()),
            _ => None,
        })
    }

    fn includes_all_analyzers(&self) -> bool {
        self.segments.contains(&Segment::Analyzers)
    }

    pub fn render(&self, registry: &AnalyzerRegistry) -> Result<String> {
        for name in self.referenced_analyzers() {
            if !registry.contains(name) {
                return Err(Error::Rendering(format!(
                    "template references unknown analyzer '{}'",
                    name
                )));
            }
        }

        if !self.includes_all_analyzers() {
            let referenced: Vec<&str> = self.referenced_analyzers().collect();
            if let Some(missing) = registry.names().find(|name| !referenced.contains(name)) {
                return Err(Error::Rendering(format!(
                    "template has no section for analyzer '{}'",
                    missing
                )));
            }
        }

        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Summary => output.push_str(&markdown::render_summary(registry)),
                Segment::Analyzers => output.push_str(&markdown::render_all_sections(registry)),
                Segment::Analyzer(name) => {
                    if let Some(report) = registry.get(name) {
                        output.push_str(&markdown::render_analyzer_section(report));
                    }
                }
            }
        }
        Ok(output)
    }
}

fn push_text(segments: &mut Vec<Segment>, text: &str) -> Result<()> {
    if text.contains("{{") {
        return Err(Error::Rendering("unterminated '{{' in template".to_string()));
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
    Ok(())
}

fn placeholder(body: &str) -> Result<Segment> {
    match body {
        "summary" => Ok(Segment::Summary),
        "analyzers" => Ok(Segment::Analyzers),
        _ => match body.strip_prefix("analyzer:") {
            Some(name) if !name.trim().is_empty() => Ok(Segment::Analyzer(name.trim().to_string())),
            _ => Err(Error::Rendering(format!("unknown placeholder '{{{{ {} }}}}'", body))),
        },
    }
}
