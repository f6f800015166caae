//! Issues reported by a scan
//!
//! An [`Issue`] is one concrete finding: a rule matched at a specific place in
//! the scanned text. Issues are built fresh on every scan and handed to the
//! caller; the engine keeps no reference to them.

use std::fmt;

use serde::Serialize;

use crate::context::SourceContext;
use crate::rules::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Ordinal weight used for ranking.
    pub fn weight(&self) -> u8 {
        match self {
            Severity::Critical => 3,
            Severity::Warning => 2,
            Severity::Info => 1,
        }
    }

    /// Points deducted from a health score for one issue of this severity.
    pub fn penalty(&self) -> u32 {
        match self {
            Severity::Critical => 15,
            Severity::Warning => 5,
            Severity::Info => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SecurityRisk,
    RuntimeError,
    Hallucination,
    DeprecatedApi,
    MissingErrorHandling,
    LogicError,
    CodeQuality,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SecurityRisk => "security-risk",
            Category::RuntimeError => "runtime-error",
            Category::Hallucination => "hallucination",
            Category::DeprecatedApi => "deprecated-api",
            Category::MissingErrorHandling => "missing-error-handling",
            Category::LogicError => "logic-error",
            Category::CodeQuality => "code-quality",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How an issue was found.
///
/// `Structural` issues come from the brace/line walkers rather than from a
/// pattern match. They carry a zero-length `0..0` span and an empty
/// replacement, so there is nothing to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Pattern,
    Structural,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub rule_id: &'static str,
    pub line: usize,
    pub category: Category,
    pub severity: Severity,
    pub description: &'static str,
    pub fix_description: &'static str,
    pub rationale: &'static str,
    pub start_index: usize,
    pub end_index: usize,
    pub replacement: String,
    pub kind: IssueKind,
}

impl Issue {
    /// Build an issue for a pattern match spanning `start..end` of the source.
    pub fn from_match(rule: &Rule, source: &SourceContext<'_>, start: usize, end: usize) -> Self {
        let matched = source.text().get(start..end).unwrap_or_default();
        Self {
            id: issue_id(rule.id, start),
            rule_id: rule.id,
            line: source.line_of(start),
            category: rule.category,
            severity: rule.severity,
            description: rule.description,
            fix_description: rule.fix_description,
            rationale: rule.rationale,
            start_index: start,
            end_index: end,
            replacement: (rule.correction)(matched),
            kind: IssueKind::Pattern,
        }
    }

    /// Build a structural issue. `anchor` is the offset of the offending
    /// construct; it feeds the id and the line number but not the span.
    pub fn structural(rule: &Rule, source: &SourceContext<'_>, anchor: usize) -> Self {
        Self {
            id: issue_id(rule.id, anchor),
            rule_id: rule.id,
            line: source.line_of(anchor),
            category: rule.category,
            severity: rule.severity,
            description: rule.description,
            fix_description: rule.fix_description,
            rationale: rule.rationale,
            start_index: 0,
            end_index: 0,
            replacement: String::new(),
            kind: IssueKind::Structural,
        }
    }

    /// Whether `replacement` can be applied to `start_index..end_index`.
    pub fn has_fix(&self) -> bool {
        self.kind == IssueKind::Pattern
    }
}

pub(crate) fn issue_id(rule_id: &str, offset: usize) -> String {
    format!("{}-{}", rule_id, offset)
}
