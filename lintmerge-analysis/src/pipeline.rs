//! Analysis pipeline
//!
//! Coordinates the analyzer table: every parser runs, its filters are applied
//! in order, statistics are finalized and the reports are collected into an
//! [`AnalyzerRegistry`] in configuration order.

use crate::generator::{RenderMode, ReportGenerator};
use crate::Result;
use lintmerge_core::{
    filters::apply_filters, AnalyzerRegistry, AnalyzerSpec, FinalizedReport, Settings,
};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
pub struct AnalysisPipeline {
    specs: Vec<AnalyzerSpec>,
    parallel_execution: bool,
}

impl AnalysisPipeline {
    pub fn new(specs: Vec<AnalyzerSpec>) -> Self {
        Self {
            specs,
            parallel_execution: false,
        }
    }

    /// Build the analyzer table from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.analyzer_specs()?).with_parallel_execution(settings.parallel))
    }

    /// Enable or disable parallel execution
    pub fn with_parallel_execution(mut self, parallel: bool) -> Self {
        self.parallel_execution = parallel;
        self
    }

    pub fn specs(&self) -> &[AnalyzerSpec] {
        &self.specs
    }

    /// Run every analyzer and build the registry
    ///
    /// Fails on the first failing analyzer in table order, also in parallel
    /// mode.
    pub fn run(&self) -> Result<AnalyzerRegistry> {
        let start_time = Instant::now();
        info!(
            "Running {} analyzers ({})",
            self.specs.len(),
            if self.parallel_execution { "parallel" } else { "sequential" }
        );

        let reports = if self.parallel_execution {
            self.specs
                .par_iter()
                .map(Self::run_single_analyzer)
                .collect::<Vec<_>>()
                .into_iter()
                .collect::<Result<Vec<_>>>()?
        } else {
            self.specs
                .iter()
                .map(Self::run_single_analyzer)
                .collect::<Result<Vec<_>>>()?
        };

        let registry = AnalyzerRegistry::from_reports(reports)?;
        info!(
            "Collected {} findings from {} analyzers in {}ms",
            registry.total_findings(),
            registry.len(),
            start_time.elapsed().as_millis()
        );
        Ok(registry)
    }

    /// Parse, filter and finalize one analyzer
    pub fn run_single_analyzer(spec: &AnalyzerSpec) -> Result<FinalizedReport> {
        let name = &spec.parser.analyzer().name;
        debug!("{}: parsing {}", name, spec.parser.input_path().display());

        let report = spec.parser.parse()?;
        let parsed = report.len();
        let filtered = apply_filters(report, &spec.filters);
        if filtered.len() != parsed {
            debug!("{}: {} of {} findings left after filtering", name, filtered.len(), parsed);
        }

        Ok(filtered.update_statistic())
    }
}

/// Full run: parse everything, render and write the report
pub fn run_report(settings: &Settings, based_on_template: bool) -> Result<PathBuf> {
    let registry = AnalysisPipeline::from_settings(settings)?.run()?;
    let mode = RenderMode::from_flag(based_on_template, settings.template_path.clone());
    ReportGenerator::new(registry, mode)
        .with_html(settings.html)
        .generate_report(&settings.output_prefix)
}
