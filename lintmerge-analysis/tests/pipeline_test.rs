//! End-to-end pipeline tests over realistic analyzer output

use lintmerge_analysis::{run_report, AnalysisPipeline, RenderMode, ReportGenerator};
use lintmerge_core::{AnalyzerConfig, Error, Settings, ToolKind};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const CLANG_TIDY_OUT: &str = "\
/src/a.c:10:3: error: use of undeclared identifier 'x' [clang-diagnostic-error]
    x = 1;
    ^
/src/a.c:11:3: error: use of undeclared identifier 'y' [clang-diagnostic-error]
/src/b.c:4:9: error: call to 'gets' is insecure [clang-analyzer-security.insecureAPI.gets]
/src/b.c:4:9: note: Call to function 'gets' here
/src/b.c:20:5: warning: Value stored to 'n' is never read [clang-analyzer-deadcode.DeadStores]
/src/c.c:2:1: warning: function 'f' has no prototype [readability-function-declaration]
6 warnings generated.
";

const CPPCHECK_OUT: &str = "\
Checking src/list.c ...
src/list.c:12:5: error: Memory leak: node [memleak]
src/list.c:30:9: warning: Possible null pointer dereference: p [nullPointer]
src/list.c:41:14: style: The scope of the variable 'i' can be reduced. [variableScope]
src/main.c:7:3: performance: Function parameter 'v' should be passed by const reference. [passedByValue]
";

fn analyzer(name: &str, tool: ToolKind, language: &str, input: &str) -> AnalyzerConfig {
    AnalyzerConfig {
        name: name.to_string(),
        tool,
        language: Some(language.to_string()),
        input: PathBuf::from(input),
        exclude_types: Vec::new(),
        exclude_rules: Vec::new(),
        exclude_paths: Vec::new(),
    }
}

fn settings_in(dir: &Path, analyzers: Vec<AnalyzerConfig>) -> Settings {
    Settings {
        input_dir: dir.join("results"),
        output_prefix: dir.join("results").join("report").join("report"),
        template_path: dir.join("templates").join("report_template.md"),
        parallel: false,
        html: false,
        analyzers,
    }
}

fn write_input(dir: &Path, name: &str, content: &str) {
    let results = dir.join("results");
    fs::create_dir_all(&results).unwrap();
    fs::write(results.join(name), content).unwrap();
}

fn workspace() -> (TempDir, Settings) {
    let temp_dir = tempdir().unwrap();
    write_input(temp_dir.path(), "polystat-eo-out.txt", "Polystat 0.4\nDone.\n");
    write_input(temp_dir.path(), "cppcheck-out.txt", CPPCHECK_OUT);

    let settings = settings_in(
        temp_dir.path(),
        vec![
            analyzer("EO", ToolKind::Polystat, "EO", "polystat-eo-out.txt"),
            analyzer("cppcheck", ToolKind::Cppcheck, "C/C++", "cppcheck-out.txt"),
        ],
    );
    (temp_dir, settings)
}

#[test]
fn test_note_exclusion_statistics() {
    let temp_dir = tempdir().unwrap();
    write_input(temp_dir.path(), "clang-tidy-out.txt", CLANG_TIDY_OUT);
    let mut clang_tidy = analyzer("clang-tidy", ToolKind::ClangTidy, "C/C++", "clang-tidy-out.txt");
    clang_tidy.exclude_types = vec!["note".to_string()];
    let settings = settings_in(temp_dir.path(), vec![clang_tidy]);

    let registry = AnalysisPipeline::from_settings(&settings).unwrap().run().unwrap();
    let report = registry.get("clang-tidy").unwrap();

    assert_eq!(report.findings().len(), 5);
    assert_eq!(report.statistics().count("error"), 3);
    assert_eq!(report.statistics().count("warning"), 2);
    assert!(!report.statistics().contains("note"));
    assert_eq!(report.statistics().total(), 5);
}

#[test]
fn test_combined_report_names_every_analyzer() {
    let (_temp_dir, settings) = workspace();

    let path = run_report(&settings, false).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(path, settings.output_prefix.with_extension("md"));
    assert!(content.contains("| EO | EO | 0 | - |"));
    assert!(content.contains("| cppcheck | C/C++ | 4 |"));
    assert!(content.contains("## EO"));
    assert!(content.contains("## cppcheck"));
}

#[test]
fn test_missing_template_is_rendering_error() {
    let (_temp_dir, settings) = workspace();

    let err = run_report(&settings, true).unwrap_err();
    assert!(matches!(err, Error::Rendering(_)));
    assert!(!settings.output_prefix.with_extension("md").exists());

    assert!(run_report(&settings, false).is_ok());
    assert!(settings.output_prefix.with_extension("md").exists());
}

#[test]
fn test_template_mode() {
    let (temp_dir, settings) = workspace();
    let templates = temp_dir.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("report_template.md"),
        "# Nightly lint\n\n{{ summary }}\n\n{{ analyzer:cppcheck }}\n\n{{ analyzer:EO }}\n",
    )
    .unwrap();

    let content = fs::read_to_string(run_report(&settings, true).unwrap()).unwrap();

    assert!(content.starts_with("# Nightly lint\n"));
    assert!(content.find("## cppcheck").unwrap() < content.find("## EO").unwrap());
}

#[test]
fn test_output_is_deterministic() {
    let (_temp_dir, mut settings) = workspace();

    let first = fs::read(run_report(&settings, false).unwrap()).unwrap();
    settings.parallel = true;
    let second = fs::read(run_report(&settings, false).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_fails_run() {
    let (_temp_dir, mut settings) = workspace();
    settings
        .analyzers
        .push(analyzer("SVF", ToolKind::Svf, "C/C++", "svf-out.txt"));

    let err = AnalysisPipeline::from_settings(&settings).unwrap().run().unwrap_err();

    assert!(matches!(err, Error::InputUnavailable { .. }));
    assert_eq!(err.analyzer(), Some("SVF"));
}

#[test]
fn test_parallel_reports_first_failure_in_order() {
    let (temp_dir, mut settings) = workspace();
    write_input(temp_dir.path(), "broken.txt", "a.c:1:1: catastrophe: what\n");
    settings.analyzers.insert(0, analyzer("broken", ToolKind::Cppcheck, "C", "broken.txt"));
    settings.analyzers.push(analyzer("absent", ToolKind::Cppcheck, "C", "absent.txt"));
    settings.parallel = true;

    let err = AnalysisPipeline::from_settings(&settings).unwrap().run().unwrap_err();

    assert!(matches!(err, Error::MalformedInput { .. }));
    assert_eq!(err.analyzer(), Some("broken"));
}

#[test]
fn test_generator_with_html() {
    let (temp_dir, settings) = workspace();
    let registry = AnalysisPipeline::from_settings(&settings).unwrap().run().unwrap();
    let prefix = temp_dir.path().join("out").join("lint");

    ReportGenerator::new(registry, RenderMode::Default)
        .with_html(true)
        .generate_report(&prefix)
        .unwrap();

    let html = fs::read_to_string(temp_dir.path().join("out").join("lint.html")).unwrap();
    assert!(html.contains("Memory leak: node"));
}
