//! Check command - scans snippets, files and directories for issues

use crate::commands::{is_stdin, read_source};
use crate::output::Format;
use crate::output::json::JsonFormatter;
use crate::output::pretty::PrettyFormatter;
use crate::output::text::TextFormatter;
use crate::report::{FileReport, Summary};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mirage_core::config::{Config, load_config_or_default_with_warnings};
use mirage_core::{Language, ScanEngine, Severity, detect_language};
use rayon::prelude::*;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use walkdir::WalkDir;

const STDIN_NAME: &str = "<stdin>";

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File or directory to scan, or `-` to read a snippet from stdin
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Scan everything as this language instead of detecting it
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<Language>,

    /// Output format (pretty, text, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Fail when the overall health score is below this value
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<u32>,

    /// Fail when an issue is at least this severe (critical, warning, info)
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// When a run counts as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Thresholds {
    min_score: Option<u32>,
    fail_on: Severity,
}

impl Thresholds {
    fn failures(&self, reports: &[FileReport]) -> Vec<String> {
        let mut failures = Vec::new();

        let failing = reports
            .iter()
            .flat_map(|r| &r.issues)
            .filter(|i| i.severity.weight() >= self.fail_on.weight())
            .count();
        if failing > 0 {
            failures.push(format!(
                "{} issue(s) at or above severity '{}'",
                failing, self.fail_on
            ));
        }

        if let Some(min_score) = self.min_score {
            let score = Summary::of(reports).score;
            if score < min_score {
                failures.push(format!(
                    "health score {} is below the minimum of {}",
                    score, min_score
                ));
            }
        }

        failures
    }
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let failures = self.execute()?;

        if !failures.is_empty() {
            for failure in &failures {
                eprintln!("{} {}", "error:".red().bold(), failure);
            }
            process::exit(1);
        }

        Ok(())
    }

    /// Scans and prints the report, returning the threshold failures.
    fn execute(&self) -> Result<Vec<String>> {
        self.configure_colors();

        let config_dir = if is_stdin(&self.path) {
            env::current_dir()?
        } else {
            self.path.clone()
        };
        let config_result = load_config_or_default_with_warnings(&config_dir);
        for warning in &config_result.warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }
        let config = config_result.config;

        let format = self.resolve_format(&config)?;
        let thresholds = self.resolve_thresholds(&config)?;
        let pinned = self.language.or(config.scan.language);
        let engine = ScanEngine::new();

        let reports = if is_stdin(&self.path) {
            let source = read_source(&self.path)?;
            let language = resolve_language(pinned, None, &source);
            vec![FileReport::scan(
                &engine,
                STDIN_NAME.to_string(),
                language,
                source,
            )]
        } else {
            let files = discover_files(&self.path, &config.exclude)?;
            if files.is_empty() {
                println!("No supported source files found.");
                return Ok(Vec::new());
            }
            scan_files(&engine, &files, pinned)
        };

        tracing::info!(
            files = reports.len(),
            issues = reports.iter().map(|r| r.issues.len()).sum::<usize>(),
            "Check complete"
        );

        let analyzed_path = self.path.to_string_lossy();
        match format {
            Format::Json => println!("{}", JsonFormatter.format(&reports, &analyzed_path)),
            Format::Text => print!("{}", TextFormatter.format(&reports)),
            Format::Pretty => print!("{}", PrettyFormatter::new().format(&reports)),
        }

        Ok(thresholds.failures(&reports))
    }

    fn resolve_format(&self, config: &Config) -> Result<Format> {
        match self.format.as_deref() {
            Some(value) => Format::parse(value),
            None => Ok(config.output.format.map(Format::from).unwrap_or(Format::Pretty)),
        }
    }

    fn resolve_thresholds(&self, config: &Config) -> Result<Thresholds> {
        let fail_on = match self.fail_on.as_deref() {
            Some(value) => parse_severity(value)?,
            None => config
                .check
                .fail_on
                .map(Severity::from)
                .unwrap_or(Severity::Critical),
        };

        Ok(Thresholds {
            min_score: self.min_score.or(config.check.min_score),
            fail_on,
        })
    }

    fn configure_colors(&self) {
        let no_color_env = env::var("NO_COLOR").is_ok();
        if self.no_color || no_color_env {
            colored::control::set_override(false);
        }
    }
}

fn parse_severity(value: &str) -> Result<Severity> {
    match value {
        "critical" => Ok(Severity::Critical),
        "warning" => Ok(Severity::Warning),
        "info" => Ok(Severity::Info),
        other => anyhow::bail!(
            "Invalid severity '{}'. Valid values: critical, warning, info",
            other
        ),
    }
}

/// Pinned language, then the file extension, then the text itself.
fn resolve_language(pinned: Option<Language>, path: Option<&Path>, source: &str) -> Language {
    pinned
        .or_else(|| path.and_then(language_of_path))
        .unwrap_or_else(|| detect_language(source))
}

fn language_of_path(path: &Path) -> Option<Language> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(Language::from_filename)
}

fn scan_files(engine: &ScanEngine, files: &[PathBuf], pinned: Option<Language>) -> Vec<FileReport> {
    files
        .par_iter()
        .filter_map(|file| {
            let source = match fs::read_to_string(file) {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!(path = %file.display(), error = %e, "Skipping unreadable file");
                    return None;
                }
            };
            let language = resolve_language(pinned, Some(file), &source);
            tracing::debug!(path = %file.display(), %language, "Scanning file");
            Some(FileReport::scan(
                engine,
                file.to_string_lossy().to_string(),
                language,
                source,
            ))
        })
        .collect()
}

/// An explicit file is always scanned; directories yield supported files only.
fn discover_files(path: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| !is_skipped(e, exclude))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();

    Ok(files)
}

fn is_supported_file(path: &Path) -> bool {
    language_of_path(path).is_some()
}

fn is_skipped(entry: &walkdir::DirEntry, exclude: &[String]) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| {
            name.starts_with('.')
                || name == "node_modules"
                || (entry.file_type().is_dir() && exclude.iter().any(|e| e == name))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_core::config::{CheckConfig, FormatValue, OutputConfig, SeverityValue};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn args(path: PathBuf) -> CheckArgs {
        CheckArgs {
            path,
            language: None,
            format: None,
            min_score: None,
            fail_on: None,
            no_color: true,
        }
    }

    fn report(source: &str) -> FileReport {
        FileReport::scan(
            &ScanEngine::new(),
            "a.js".to_string(),
            Language::JavaScript,
            source.to_string(),
        )
    }

    #[test]
    fn discover_files_accepts_explicit_file_of_any_extension() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("snippet.txt");
        File::create(&file_path).unwrap();

        let files = discover_files(&file_path, &[]).unwrap();

        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn discover_files_finds_every_supported_language() {
        let dir = tempdir().unwrap();
        for name in ["a.js", "b.ts", "c.py", "d.go", "e.rs", "F.java", "g.cpp"] {
            File::create(dir.path().join(name)).unwrap();
        }
        File::create(dir.path().join("readme.md")).unwrap();

        let files = discover_files(dir.path(), &[]).unwrap();

        assert_eq!(files.len(), 7);
    }

    #[test]
    fn discover_files_is_sorted_and_recursive() {
        let dir = tempdir().unwrap();
        let subdir = dir.path().join("src");
        fs::create_dir(&subdir).unwrap();
        File::create(dir.path().join("z.js")).unwrap();
        File::create(subdir.join("a.py")).unwrap();

        let files = discover_files(dir.path(), &[]).unwrap();

        assert_eq!(files, vec![subdir.join("a.py"), dir.path().join("z.js")]);
    }

    #[test]
    fn discover_files_skips_hidden_and_node_modules() {
        let dir = tempdir().unwrap();
        for skipped in [".git", "node_modules"] {
            let skipped_dir = dir.path().join(skipped);
            fs::create_dir(&skipped_dir).unwrap();
            File::create(skipped_dir.join("dep.js")).unwrap();
        }
        File::create(dir.path().join("src.js")).unwrap();

        let files = discover_files(dir.path(), &[]).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].to_string_lossy().contains("src.js"));
    }

    #[test]
    fn discover_files_skips_configured_directories() {
        let dir = tempdir().unwrap();
        let vendor = dir.path().join("vendor");
        fs::create_dir(&vendor).unwrap();
        File::create(vendor.join("lib.go")).unwrap();
        File::create(dir.path().join("main.go")).unwrap();

        let files = discover_files(dir.path(), &["vendor".to_string()]).unwrap();

        assert_eq!(files, vec![dir.path().join("main.go")]);
    }

    #[test]
    fn discover_files_rejects_missing_path() {
        let dir = tempdir().unwrap();
        assert!(discover_files(&dir.path().join("missing"), &[]).is_err());
    }

    #[test]
    fn language_prefers_pin_then_extension_then_detection() {
        let python = "def run():\n    pass\n";

        assert_eq!(
            resolve_language(Some(Language::Go), Some(Path::new("a.py")), python),
            Language::Go
        );
        assert_eq!(
            resolve_language(None, Some(Path::new("a.ts")), python),
            Language::TypeScript
        );
        assert_eq!(
            resolve_language(None, Some(Path::new("snippet.txt")), python),
            Language::Python
        );
        assert_eq!(resolve_language(None, None, ""), Language::JavaScript);
    }

    #[test]
    fn language_of_path_uses_the_file_name() {
        assert_eq!(
            language_of_path(Path::new("src/app.component.tsx")),
            Some(Language::TypeScript)
        );
        assert_eq!(language_of_path(Path::new("include/vec.hpp")), Some(Language::Cpp));
        assert_eq!(language_of_path(Path::new("Makefile")), None);
        assert!(is_supported_file(Path::new("lib/main.rs")));
        assert!(!is_supported_file(Path::new("notes.md")));
    }

    #[test]
    fn parse_severity_valid_and_invalid() {
        assert_eq!(parse_severity("warning").unwrap(), Severity::Warning);
        assert!(parse_severity("error").is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            check: CheckConfig {
                min_score: Some(90),
                fail_on: Some(SeverityValue::Info),
            },
            output: OutputConfig {
                format: Some(FormatValue::Json),
            },
            ..Config::default()
        };

        let mut args = args(PathBuf::from("."));
        assert_eq!(args.resolve_format(&config).unwrap(), Format::Json);
        assert_eq!(
            args.resolve_thresholds(&config).unwrap(),
            Thresholds {
                min_score: Some(90),
                fail_on: Severity::Info,
            }
        );

        args.format = Some("text".to_string());
        args.min_score = Some(50);
        args.fail_on = Some("critical".to_string());
        assert_eq!(args.resolve_format(&config).unwrap(), Format::Text);
        assert_eq!(
            args.resolve_thresholds(&config).unwrap(),
            Thresholds {
                min_score: Some(50),
                fail_on: Severity::Critical,
            }
        );
    }

    #[test]
    fn defaults_fail_on_critical_only() {
        let args = args(PathBuf::from("."));
        let config = Config::default();

        assert_eq!(args.resolve_format(&config).unwrap(), Format::Pretty);
        assert_eq!(
            args.resolve_thresholds(&config).unwrap(),
            Thresholds {
                min_score: None,
                fail_on: Severity::Critical,
            }
        );
    }

    #[test]
    fn thresholds_report_severity_and_score_failures() {
        let reports = vec![report("var total = 0;\nif (items.isEmpty()) {\n  eval(code);\n}")];

        let lenient = Thresholds {
            min_score: Some(70),
            fail_on: Severity::Critical,
        };
        let failures = lenient.failures(&reports);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("critical"));

        let strict = Thresholds {
            min_score: Some(80),
            fail_on: Severity::Critical,
        };
        assert_eq!(strict.failures(&reports).len(), 2);

        let clean = vec![report("const total = 0;")];
        assert!(strict.failures(&clean).is_empty());
    }

    #[test]
    fn check_scans_directory_with_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("mirage.toml"),
            "[check]\nfail_on = \"info\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let mut file = File::create(dir.path().join("app.js")).unwrap();
        writeln!(file, "var x = 1;").unwrap();

        let failures = args(dir.path().to_path_buf()).execute().unwrap();

        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("info"));
    }

    #[test]
    fn check_passes_clean_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("clean.py");
        fs::write(&file_path, "def add(a, b):\n    return a + b\n").unwrap();

        let failures = args(file_path).execute().unwrap();

        assert!(failures.is_empty());
    }

    #[test]
    fn check_rejects_invalid_format() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path().to_path_buf());
        args.format = Some("sarif".to_string());

        assert!(args.execute().is_err());
    }
}
