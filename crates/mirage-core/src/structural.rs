//! JavaScript/TypeScript checks that walk lines and braces
//!
//! These are not single-pattern matches: missing-await looks at the whole
//! line around a `fetch(` call, and missing-return follows brace depth to
//! find a function body. Findings are [`IssueKind::Structural`].
//!
//! missing-return recognises `function` declarations, `const`/`let`/`var`
//! bindings of arrows and function expressions, and method shorthand that
//! starts its own line (`getName() {`, optionally after access or `async`
//! modifiers). Methods written as `key: function () {` are not checked.
//!
//! [`IssueKind::Structural`]: crate::issue::IssueKind::Structural

use crate::context::SourceContext;
use crate::issue::Issue;
use crate::language::Language;
use crate::rules::{CompiledRule, library};

/// Receivers whose `.fetch(` is still the network fetch.
const GLOBAL_RECEIVERS: [&str; 3] = ["window", "globalThis", "self"];

const RETURN_TOKEN: &str = "return ";

pub fn applies_to(language: Language) -> bool {
    matches!(language, Language::JavaScript | Language::TypeScript)
}

/// Run every structural check for the source's language. Empty for non-JS
/// languages.
pub fn check(source: &SourceContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    if !applies_to(source.language()) {
        return issues;
    }

    let group = library().structural();
    if let Some(rule) = group.get("missing-await") {
        missing_await(rule, source, &mut issues);
    }
    if let Some(rule) = group.get("missing-return") {
        missing_return(rule, source, &mut issues);
    }
    issues
}

/// At most one finding per line: the first `fetch(` on a line with no
/// `await`, `.then(` or `return fetch`.
fn missing_await(check: &CompiledRule, source: &SourceContext<'_>, issues: &mut Vec<Issue>) {
    let Some(fetch) = check.regex() else {
        return;
    };
    let text = source.text();

    let mut line_start = 0;
    for line in text.split_inclusive('\n') {
        let handled =
            line.contains("await") || line.contains(".then(") || line.contains("return fetch");
        if !handled {
            let anchor = fetch
                .find_iter(line)
                .map(|call| line_start + call.start())
                .find(|&at| is_global_fetch(text, at) && !source.is_suppressed(at));
            if let Some(anchor) = anchor {
                issues.push(Issue::structural(&check.rule, source, anchor));
            }
        }
        line_start += line.len();
    }
}

/// A bare `fetch(` or one called on a global object. Any other receiver
/// (`cursor.fetch(`) is an unrelated method.
fn is_global_fetch(text: &str, at: usize) -> bool {
    let Some(before) = text[..at].strip_suffix('.') else {
        return true;
    };
    let receiver = before
        .rsplit(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .next()
        .unwrap_or_default();
    GLOBAL_RECEIVERS.contains(&receiver)
}

fn missing_return(check: &CompiledRule, source: &SourceContext<'_>, issues: &mut Vec<Issue>) {
    let Some(header) = check.regex() else {
        return;
    };
    let text = source.text();

    let mut blocks = None;
    for found in header.find_iter(text) {
        let matched = found.as_str();
        let anchor = found.start() + (matched.len() - matched.trim_start().len());
        if source.is_suppressed(anchor) {
            continue;
        }
        let blocks = blocks.get_or_insert_with(|| Blocks::new(text));
        // The header pattern always ends on the body's opening brace.
        if !blocks.body_has_return(found.end() - 1) {
            issues.push(Issue::structural(&check.rule, source, anchor));
        }
    }
}

/// Brace pairs and `return ` positions, computed in one pass over the text.
struct Blocks {
    /// Sorted by the opening brace. An unbalanced `{` closes at the end of
    /// the text.
    pairs: Vec<(usize, usize)>,
    returns: Vec<usize>,
}

impl Blocks {
    fn new(text: &str) -> Self {
        let mut pairs = Vec::new();
        let mut open = Vec::new();
        for (i, byte) in text.bytes().enumerate() {
            match byte {
                b'{' => {
                    open.push(pairs.len());
                    pairs.push((i, text.len()));
                }
                b'}' => {
                    if let Some(slot) = open.pop() {
                        pairs[slot].1 = i;
                    }
                }
                _ => {}
            }
        }

        Self {
            pairs,
            returns: text.match_indices(RETURN_TOKEN).map(|(i, _)| i).collect(),
        }
    }

    /// End of the block opened at `open`, exclusive of the closing brace.
    fn close_of(&self, open: usize) -> usize {
        let slot = self.pairs.partition_point(|&(start, _)| start < open);
        self.pairs.get(slot).map_or(open, |&(_, close)| close)
    }

    /// Whether a whole `return ` token sits between the brace at `open` and
    /// its match.
    fn body_has_return(&self, open: usize) -> bool {
        let close = self.close_of(open);
        let first = self.returns.partition_point(|&at| at <= open);
        self.returns
            .get(first)
            .is_some_and(|&at| at + RETURN_TOKEN.len() <= close)
    }
}
