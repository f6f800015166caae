//! Issue ordering

use std::cmp::Ordering;

use crate::issue::Issue;

/// Higher severity first, then earlier line.
pub fn compare(a: &Issue, b: &Issue) -> Ordering {
    b.severity
        .weight()
        .cmp(&a.severity.weight())
        .then_with(|| a.line.cmp(&b.line))
}

/// Stable sort by [`compare`]; issues that compare equal keep their input order.
pub fn rank(mut issues: Vec<Issue>) -> Vec<Issue> {
    issues.sort_by(compare);
    issues
}

/// Rank, then keep the first `max`.
pub fn rank_and_truncate(issues: Vec<Issue>, max: usize) -> Vec<Issue> {
    let mut ranked = rank(issues);
    ranked.truncate(max);
    ranked
}
