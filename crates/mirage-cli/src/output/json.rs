//! JSON output formatter for programmatic integration
//!
//! Issues are serialized with the core's own wire names (camelCase), with the
//! column and a `fixable` flag added for each one.

use mirage_core::{Issue, Language};
use serde::Serialize;

use crate::report::{FileReport, SeverityCounts, Summary};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonOutput<'a> {
    pub version: &'static str,
    pub metadata: JsonMetadata,
    pub summary: JsonSummary,
    pub files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMetadata {
    pub mirage_version: &'static str,
    pub analyzed_path: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSummary {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub total_issues: usize,
    pub by_severity: JsonSeverityCounts,
    pub score: u32,
}

#[derive(Serialize)]
pub struct JsonSeverityCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFile<'a> {
    pub path: &'a str,
    pub language: Language,
    pub score: u32,
    pub issues: Vec<JsonIssue<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonIssue<'a> {
    #[serde(flatten)]
    pub issue: &'a Issue,
    pub column: usize,
    pub fixable: bool,
}

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format(&self, reports: &[FileReport], analyzed_path: &str) -> String {
        let output = self.build_output(reports, analyzed_path);
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn build_output<'a>(&self, reports: &'a [FileReport], analyzed_path: &str) -> JsonOutput<'a> {
        JsonOutput {
            version: "1.0",
            metadata: JsonMetadata {
                mirage_version: env!("CARGO_PKG_VERSION"),
                analyzed_path: analyzed_path.to_string(),
            },
            summary: self.build_summary(&Summary::of(reports)),
            files: reports.iter().map(|r| self.convert_file(r)).collect(),
        }
    }

    fn build_summary(&self, summary: &Summary) -> JsonSummary {
        let SeverityCounts {
            critical,
            warning,
            info,
        } = summary.counts;
        JsonSummary {
            total_files: summary.total_files,
            files_with_issues: summary.files_with_issues,
            total_issues: summary.counts.total(),
            by_severity: JsonSeverityCounts {
                critical,
                warning,
                info,
            },
            score: summary.score,
        }
    }

    fn convert_file<'a>(&self, report: &'a FileReport) -> JsonFile<'a> {
        JsonFile {
            path: &report.path,
            language: report.language,
            score: report.score,
            issues: report
                .issues
                .iter()
                .map(|issue| JsonIssue {
                    issue,
                    column: report.column(issue),
                    fixable: issue.has_fix(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_core::ScanEngine;

    fn sample_reports() -> Vec<FileReport> {
        let engine = ScanEngine::new();
        vec![
            FileReport::scan(
                &engine,
                "a.js".to_string(),
                Language::JavaScript,
                "var total = 0;\nconst r = fetch(url);\neval(code);".to_string(),
            ),
            FileReport::scan(
                &engine,
                "b.py".to_string(),
                Language::Python,
                "total = sum(values)\n".to_string(),
            ),
        ]
    }

    fn parse(reports: &[FileReport]) -> serde_json::Value {
        serde_json::from_str(&JsonFormatter.format(reports, "src")).unwrap()
    }

    #[test]
    fn format_produces_valid_json_with_metadata() {
        let json = parse(&sample_reports());

        assert_eq!(json["version"], "1.0");
        assert_eq!(json["metadata"]["analyzedPath"], "src");
        assert_eq!(json["metadata"]["mirageVersion"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn format_includes_summary() {
        let json = parse(&sample_reports());
        let summary = &json["summary"];

        assert_eq!(summary["totalFiles"], 2);
        assert_eq!(summary["filesWithIssues"], 1);
        assert_eq!(summary["bySeverity"]["critical"], 1);
        assert_eq!(summary["bySeverity"]["warning"], 1);
        assert_eq!(summary["bySeverity"]["info"], 1);
        assert_eq!(summary["totalIssues"], 3);
    }

    #[test]
    fn format_includes_issue_details() {
        let json = parse(&sample_reports());
        let file = &json["files"][0];

        assert_eq!(file["path"], "a.js");
        assert_eq!(file["language"], "javascript");
        assert_eq!(file["score"], 79);

        let eval = &file["issues"][0];
        assert_eq!(eval["ruleId"], "eval-usage");
        assert_eq!(eval["severity"], "critical");
        assert_eq!(eval["line"], 3);
        assert_eq!(eval["column"], 1);
        assert_eq!(eval["replacement"], "JSON.parse(");
        assert_eq!(eval["fixable"], true);
    }

    #[test]
    fn structural_issues_are_not_fixable() {
        let json = parse(&sample_reports());
        let issues = json["files"][0]["issues"].as_array().unwrap();
        let await_issue = issues
            .iter()
            .find(|i| i["ruleId"] == "missing-await")
            .unwrap();

        assert_eq!(await_issue["kind"], "structural");
        assert_eq!(await_issue["fixable"], false);
        assert_eq!(await_issue["startIndex"], 0);
        assert_eq!(await_issue["endIndex"], 0);
    }

    #[test]
    fn empty_reports_produce_valid_output() {
        let json = parse(&[]);

        assert_eq!(json["summary"]["totalFiles"], 0);
        assert_eq!(json["summary"]["score"], 100);
        assert!(json["files"].as_array().unwrap().is_empty());
    }
}
