//! Health score derived from scan results
//!
//! `100 - sum(penalty)` clamped at zero, with penalties of 15, 5 and 1 for
//! critical, warning and info issues. The core engine never computes this.

use mirage_core::Issue;

pub const MAX_SCORE: u32 = 100;

pub fn health_score(issues: &[Issue]) -> u32 {
    let penalty: u32 = issues.iter().map(|i| i.severity.penalty()).sum();
    MAX_SCORE.saturating_sub(penalty)
}

/// Rounded mean of per-file scores. No files means nothing is wrong.
pub fn overall_score(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return MAX_SCORE;
    }
    let len = scores.len() as u32;
    let total: u32 = scores.iter().sum();
    (total + len / 2) / len
}
