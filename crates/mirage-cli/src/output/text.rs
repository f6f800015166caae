//! Plain one-line-per-issue output, suitable for grep and editors

use mirage_core::Issue;

use crate::report::{FileReport, Summary};

pub struct TextFormatter;

impl TextFormatter {
    pub fn format(&self, reports: &[FileReport]) -> String {
        let mut output = String::new();

        for report in reports {
            for issue in &report.issues {
                output.push_str(&self.format_issue(report, issue));
                output.push('\n');
            }
        }

        let summary = Summary::of(reports);
        if summary.counts.total() > 0 {
            output.push_str(&format!(
                "\nFound {} critical, {} warning(s), {} info; health score {}/100\n",
                summary.counts.critical, summary.counts.warning, summary.counts.info, summary.score
            ));
        }

        output
    }

    fn format_issue(&self, report: &FileReport, issue: &Issue) -> String {
        format!(
            "{}:{}:{}: {} [{}]: {}",
            report.path,
            issue.line,
            report.column(issue),
            issue.severity,
            issue.rule_id,
            issue.description
        )
    }
}
