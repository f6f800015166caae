//! Comment and string-literal suppression
//!
//! Decides from the text before a match, on the match's own line, whether the
//! match sits inside a line comment or a quoted literal.
//!
//! This is a line-local heuristic, not a tokenizer:
//! - block comments and multi-line strings are not tracked
//! - escaped quotes count like any other quote
//! - a lone apostrophe such as a Rust lifetime (`'a`) flips single-quote
//!   parity for the rest of the line
//!
//! Both false suppressions and missed suppressions are accepted.
//!
//! [`SourceContext`] indexes the text once per scan (line starts, the first
//! comment marker of each line, quote positions) so that line lookups and
//! suppression checks cost a binary search instead of a rescan of the line.

use crate::language::Language;

/// Per-scan index over the input text.
#[derive(Debug)]
pub struct SourceContext<'a> {
    text: &'a str,
    language: Language,
    /// Byte offset where each line starts. Always begins with 0.
    line_starts: Vec<usize>,
    /// Offset of the first comment marker on each line, if any.
    comments: Vec<Option<usize>>,
    double_quotes: Vec<usize>,
    single_quotes: Vec<usize>,
}

impl<'a> SourceContext<'a> {
    pub fn new(text: &'a str, language: Language) -> Self {
        let marker = language.line_comment();
        let mut line_starts = vec![0];
        let mut comments = Vec::new();
        let mut start = 0;
        for line in text.split_inclusive('\n') {
            comments.push(line.find(marker).map(|at| start + at));
            start += line.len();
            if line.ends_with('\n') {
                line_starts.push(start);
            }
        }
        // a trailing newline opens an empty last line
        comments.resize(line_starts.len(), None);

        let positions = |quote: u8| -> Vec<usize> {
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == quote)
                .map(|(i, _)| i)
                .collect()
        };

        Self {
            text,
            language,
            line_starts,
            comments,
            double_quotes: positions(b'"'),
            single_quotes: positions(b'\''),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// 1-based line number of byte `offset`. Offsets past the end count as
    /// the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Whether a match starting at byte `offset` should be discarded.
    pub fn is_suppressed(&self, offset: usize) -> bool {
        if !self.text.is_char_boundary(offset) {
            return false;
        }
        let line = self.line_of(offset);
        let start = self.line_starts[line - 1];
        let marker_len = self.language.line_comment().len();

        let commented = self.comments[line - 1].is_some_and(|at| at + marker_len <= offset);
        commented
            || count_between(&self.double_quotes, start, offset) % 2 == 1
            || count_between(&self.single_quotes, start, offset) % 2 == 1
    }
}

/// Number of sorted `positions` in `start..end`.
fn count_between(positions: &[usize], start: usize, end: usize) -> usize {
    positions.partition_point(|&p| p < end) - positions.partition_point(|&p| p < start)
}
