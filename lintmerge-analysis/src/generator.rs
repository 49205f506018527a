//! Report generator
//!
//! Turns the finalized [`AnalyzerRegistry`] into the combined Markdown report,
//! either through a template or through the built-in layout, and persists it.

use crate::markdown;
use crate::template::Template;
use crate::Result;
use lintmerge_core::{AnalyzerRegistry, Error};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// How the report document is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Fill the template at this path
    Template(PathBuf),
    /// Built-in layout, no template needed
    Default,
}

impl RenderMode {
    pub fn from_flag(based_on_template: bool, template_path: impl Into<PathBuf>) -> Self {
        if based_on_template {
            Self::Template(template_path.into())
        } else {
            Self::Default
        }
    }
}

#[derive(Debug)]
pub struct ReportGenerator {
    registry: AnalyzerRegistry,
    mode: RenderMode,
    html: bool,
}

impl ReportGenerator {
    pub fn new(registry: AnalyzerRegistry, mode: RenderMode) -> Self {
        Self {
            registry,
            mode,
            html: false,
        }
    }

    /// Also write `<prefix>.html`
    pub fn with_html(mut self, html: bool) -> Self {
        self.html = html;
        self
    }

    pub fn registry(&self) -> &AnalyzerRegistry {
        &self.registry
    }

    pub fn mode(&self) -> &RenderMode {
        &self.mode
    }

    /// Render the report without touching the file system (except the template)
    pub fn render(&self) -> Result<String> {
        match &self.mode {
            RenderMode::Template(path) => Template::load(path)?.render(&self.registry),
            RenderMode::Default => Ok(markdown::render_default(&self.registry)),
        }
    }

    /// Render and write `<prefix>.md`, returning its path
    ///
    /// The document is fully rendered before anything is written, so a
    /// rendering failure leaves no partial output behind.
    pub fn generate_report(&self, output_path_prefix: &Path) -> Result<PathBuf> {
        let document = self.render()?;

        let markdown_path = with_suffix(output_path_prefix, ".md");
        write(&markdown_path, &document)?;
        info!("Report written to {}", markdown_path.display());

        if self.html {
            let html_path = with_suffix(output_path_prefix, ".html");
            write(&html_path, &markdown::to_html(&document))?;
            info!("HTML report written to {}", html_path.display());
        }

        Ok(markdown_path)
    }
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

fn write(path: &Path, content: &str) -> Result<()> {
    lintmerge_utils::write_text_file(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
