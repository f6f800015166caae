//! Scan engine
//!
//! Runs the four rule groups for a language over the input, drops matches
//! the context filter suppresses, deduplicates by issue id, adds the
//! structural JavaScript findings, then ranks and caps the result.

use std::collections::HashSet;

use crate::context::SourceContext;
use crate::issue::Issue;
use crate::language::Language;
use crate::rank;
use crate::rules::library;
use crate::structural;

/// Most issues a single scan returns.
pub const MAX_ISSUES: usize = 20;

#[derive(Debug, Default)]
struct ScanStats {
    candidates: usize,
    suppressed: usize,
    duplicates: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScanEngine;

impl ScanEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(&self, text: &str, language: Language) -> Vec<Issue> {
        let mut stats = ScanStats::default();
        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        let source = SourceContext::new(text, language);

        for group in library().groups_for(language) {
            for compiled in group.compiled() {
                let Some(regex) = compiled.regex() else {
                    continue;
                };
                for found in regex.find_iter(text) {
                    stats.candidates += 1;
                    if source.is_suppressed(found.start()) {
                        stats.suppressed += 1;
                        continue;
                    }
                    let issue =
                        Issue::from_match(&compiled.rule, &source, found.start(), found.end());
                    if seen.insert(issue.id.clone()) {
                        issues.push(issue);
                    } else {
                        stats.duplicates += 1;
                    }
                }
            }
        }

        for issue in structural::check(&source) {
            stats.candidates += 1;
            if seen.insert(issue.id.clone()) {
                issues.push(issue);
            } else {
                stats.duplicates += 1;
            }
        }

        let found = issues.len();
        let issues = rank::rank_and_truncate(issues, MAX_ISSUES);

        tracing::debug!(
            language = %language,
            bytes = text.len(),
            candidates = stats.candidates,
            suppressed = stats.suppressed,
            duplicates = stats.duplicates,
            found,
            kept = issues.len(),
            "Scan complete"
        );

        issues
    }
}

/// Scan `text` as `language` with the built-in rule library.
pub fn scan(text: &str, language: Language) -> Vec<Issue> {
    ScanEngine::new().scan(text, language)
}
