//! lintmerge CLI entry point
//!
//! `lintmerge <based_on_template>` reads the configured analyzers' output and
//! writes the combined report.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use lintmerge_analysis::run_report;
use lintmerge_core::{Error, Settings};
use lintmerge_utils::logging::{basic_config, LogLevel};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "lintmerge")]
#[command(about = "Merge static analyzer output into one Markdown report")]
#[command(version)]
struct Cli {
    /// `true` to lay the report out with the template, anything else for the built-in layout
    #[arg(value_name = "BASED_ON_TEMPLATE", num_args = 0..)]
    based_on_template: Vec<String>,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short = 'c', long, env = "LINTMERGE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// The single positional argument, case-insensitively `true` for template mode
    fn template_flag(&self) -> Result<bool, Error> {
        match self.based_on_template.as_slice() {
            [flag] => Ok(flag.to_lowercase() == "true"),
            _ => Err(Error::Usage("Wrong number of arguments".to_string())),
        }
    }
}

fn run(cli: &Cli, based_on_template: bool) -> anyhow::Result<PathBuf> {
    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Warning };
    basic_config(Some(level)).context("failed to initialize logging")?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Settings::default(),
    };
    debug!("Settings: {:?}", settings);

    let path = run_report(&settings, based_on_template)?;
    info!("Report generated at {}", path.display());
    Ok(path)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let based_on_template = match cli.template_flag() {
        Ok(flag) => flag,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::from(2);
        }
    };

    match run(&cli, based_on_template) {
        Ok(_) => {
            println!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
