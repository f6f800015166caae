//! Pretty formatter for human-readable terminal output
//!
//! Displays issues with colors, the offending source line with a caret under
//! the match, the suggested replacement, and per-file and overall scores.

use colored::{ColoredString, Colorize};
use mirage_core::{Issue, Severity};

use crate::report::{FileReport, Summary};

pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, reports: &[FileReport]) -> String {
        let mut output = String::new();

        for report in reports.iter().filter(|r| !r.issues.is_empty()) {
            for issue in &report.issues {
                output.push_str(&self.format_issue(report, issue));
                output.push('\n');
            }
            output.push_str(&format!(
                "{} {}: {}\n\n",
                "score".bold(),
                report.path,
                self.colorize_score(report.score)
            ));
        }

        output.push_str(&self.format_summary(&Summary::of(reports)));
        output
    }

    fn format_issue(&self, report: &FileReport, issue: &Issue) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}[{}]: {}",
            self.colorize_severity(&issue.severity),
            issue.rule_id.dimmed(),
            issue.description
        ));
        lines.push(format!(
            "  {} {}:{}:{}",
            "-->".blue(),
            report.path,
            issue.line,
            report.column(issue)
        ));

        let padding = " ".repeat(issue.line.to_string().len());

        if let Some(source_line) = report.source_line(issue.line) {
            lines.push(format!("{} {}", padding, "|".blue()));
            lines.push(format!(
                "{} {} {}",
                issue.line.to_string().blue(),
                "|".blue(),
                source_line
            ));

            if issue.has_fix() {
                let caret_padding = " ".repeat(report.column(issue) - 1);
                let carets = "^".repeat(caret_len(source_line, report.column(issue), issue));
                lines.push(format!(
                    "{} {} {}{}",
                    padding,
                    "|".blue(),
                    caret_padding,
                    carets.red()
                ));
            }

            lines.push(format!("{} {}", padding, "|".blue()));
        }

        lines.push(format!(
            "{} {} {} {}",
            padding,
            "=".blue(),
            "fix:".green(),
            issue.fix_description
        ));
        if issue.has_fix() {
            lines.push(format!(
                "{} {} {} {}",
                padding,
                "=".blue(),
                "suggestion:".green(),
                self.format_replacement(&issue.replacement)
            ));
        }

        lines.join("\n")
    }

    fn format_replacement(&self, replacement: &str) -> String {
        if replacement.is_empty() {
            "remove the match".italic().to_string()
        } else {
            format!("`{}`", replacement.replace('\n', "\\n"))
        }
    }

    fn colorize_severity(&self, severity: &Severity) -> ColoredString {
        match severity {
            Severity::Critical => "critical".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        }
    }

    fn colorize_score(&self, score: u32) -> ColoredString {
        let text = format!("{}/100", score);
        if score >= 80 {
            text.green().bold()
        } else if score >= 50 {
            text.yellow().bold()
        } else {
            text.red().bold()
        }
    }

    fn format_summary(&self, summary: &Summary) -> String {
        let total = summary.counts.total();
        if total == 0 {
            return format!(
                "{} in {} ({})\n",
                "No problems found".green().bold(),
                plural(summary.total_files, "file", "files"),
                self.colorize_score(summary.score)
            );
        }

        format!(
            "Found {} {} in {} ({}, {}, {})\nHealth score: {}\n",
            total.to_string().bold(),
            if total == 1 { "problem" } else { "problems" },
            plural(summary.files_with_issues, "file", "files"),
            plural(summary.counts.critical, "critical", "critical").red(),
            plural(summary.counts.warning, "warning", "warnings").yellow(),
            plural(summary.counts.info, "info", "info").blue(),
            self.colorize_score(summary.score)
        )
    }
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Width of the caret run, limited to the issue's first line.
fn caret_len(source_line: &str, column: usize, issue: &Issue) -> usize {
    let rest = source_line.chars().count().saturating_sub(column - 1);
    let span = issue.end_index.saturating_sub(issue.start_index);
    span.min(rest).max(1)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}
