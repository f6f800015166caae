//! Per-file scan results shared by the output formatters

use mirage_core::{Issue, Language, ScanEngine, Severity};

use crate::score::{health_score, overall_score};

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub language: Language,
    pub source: String,
    pub issues: Vec<Issue>,
    pub score: u32,
}

impl FileReport {
    pub fn scan(engine: &ScanEngine, path: String, language: Language, source: String) -> Self {
        let issues = engine.scan(&source, language);
        let score = health_score(&issues);
        Self {
            path,
            language,
            source,
            issues,
            score,
        }
    }

    /// 1-based column of the issue's first character.
    pub fn column(&self, issue: &Issue) -> usize {
        let start = line_start(&self.source, issue.line);
        let offset = if issue.has_fix() {
            issue.start_index
        } else {
            start
        };
        self.source
            .get(start..offset)
            .map(|prefix| prefix.chars().count() + 1)
            .unwrap_or(1)
    }

    pub fn source_line(&self, line: usize) -> Option<&str> {
        self.source.lines().nth(line.checked_sub(1)?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub counts: SeverityCounts,
    pub score: u32,
}

impl Summary {
    pub fn of(reports: &[FileReport]) -> Self {
        let mut counts = SeverityCounts::default();
        for issue in reports.iter().flat_map(|r| &r.issues) {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        let scores: Vec<u32> = reports.iter().map(|r| r.score).collect();

        Self {
            total_files: reports.len(),
            files_with_issues: reports.iter().filter(|r| !r.issues.is_empty()).count(),
            counts,
            score: overall_score(&scores),
        }
    }
}

fn line_start(text: &str, line: usize) -> usize {
    if line <= 1 {
        return 0;
    }
    text.match_indices('\n')
        .nth(line - 2)
        .map(|(i, _)| i + 1)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(source: &str) -> FileReport {
        FileReport::scan(
            &ScanEngine::new(),
            "snippet.js".to_string(),
            Language::JavaScript,
            source.to_string(),
        )
    }

    #[test]
    fn line_start_finds_offsets() {
        let text = "ab\ncd\nef";
        assert_eq!(line_start(text, 1), 0);
        assert_eq!(line_start(text, 2), 3);
        assert_eq!(line_start(text, 3), 6);
        assert_eq!(line_start(text, 9), text.len());
    }

    #[test]
    fn column_is_one_based_within_the_line() {
        let report = report("const x = 1;\n  eval(code);");
        let issue = report
            .issues
            .iter()
            .find(|i| i.rule_id == "eval-usage")
            .unwrap();
        assert_eq!(report.column(issue), 3);
    }

    #[test]
    fn structural_issues_point_at_line_start() {
        let report = report("const a = 1;\nconst r = fetch(url);");
        let issue = report
            .issues
            .iter()
            .find(|i| i.rule_id == "missing-await")
            .unwrap();
        assert_eq!(issue.line, 2);
        assert_eq!(report.column(issue), 1);
        assert_eq!(report.source_line(2), Some("const r = fetch(url);"));
    }

    #[test]
    fn summary_counts_severities_and_averages_scores() {
        let reports = vec![
            report("var total = 0;\nif (items.isEmpty()) {\n  eval(code);\n}"),
            report("const clean = 1;"),
        ];
        let summary = Summary::of(&reports);

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.files_with_issues, 1);
        assert_eq!(
            summary.counts,
            SeverityCounts {
                critical: 1,
                warning: 1,
                info: 1,
            }
        );
        assert_eq!(summary.counts.total(), 3);
        assert_eq!(summary.score, (79 + 100 + 1) / 2);
    }
}
