//! Pattern library
//!
//! Rules are static records built once per process. They are organised into
//! rule groups that run in a fixed order: universal security, universal
//! runtime, the language-specific group, then universal quality.

mod cpp;
mod go;
mod java;
mod javascript;
mod python;
mod rust;
mod typescript;
mod universal;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::issue::{Category, Severity};
use crate::language::Language;

/// A single detection rule.
///
/// `correction` maps the matched text to a suggested replacement. It must be
/// pure: the same input always yields the same output.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub pattern: &'static str,
    pub description: &'static str,
    pub fix_description: &'static str,
    pub rationale: &'static str,
    pub correction: fn(&str) -> String,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("severity", &self.severity)
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl Rule {
    pub fn correct(&self, matched: &str) -> String {
        (self.correction)(matched)
    }
}

/// Declares a [`Rule`] record.
///
/// `correction = |m| expr` binds the matched text to `m`;
/// `replace_with = "text"` always suggests the same text.
#[macro_export]
macro_rules! rule {
    (
        id = $id:literal,
        category = $cat:ident,
        severity = $sev:ident,
        pattern = $pattern:expr,
        description = $desc:literal,
        fix = $fix:literal,
        rationale = $why:literal,
        correction = |$m:ident| $body:expr $(,)?
    ) => {{
        fn correct($m: &str) -> String {
            $body
        }
        $crate::rule!(@build $id, $cat, $sev, $pattern, $desc, $fix, $why, correct)
    }};
    (
        id = $id:literal,
        category = $cat:ident,
        severity = $sev:ident,
        pattern = $pattern:expr,
        description = $desc:literal,
        fix = $fix:literal,
        rationale = $why:literal,
        replace_with = $replacement:literal $(,)?
    ) => {{
        fn correct(_: &str) -> String {
            String::from($replacement)
        }
        $crate::rule!(@build $id, $cat, $sev, $pattern, $desc, $fix, $why, correct)
    }};
    (@build $id:literal, $cat:ident, $sev:ident, $pattern:expr, $desc:literal, $fix:literal, $why:literal, $correct:ident) => {
        $crate::rules::Rule {
            id: $id,
            category: $crate::issue::Category::$cat,
            severity: $crate::issue::Severity::$sev,
            pattern: $pattern,
            description: $desc,
            fix_description: $fix,
            rationale: $why,
            correction: $correct,
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Security,
    Runtime,
    Language,
    Quality,
    /// Non-table JavaScript/TypeScript checks, run after the four groups.
    Structural,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Security => "security",
            Phase::Runtime => "runtime",
            Phase::Language => "language",
            Phase::Quality => "quality",
            Phase::Structural => "structural",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Universal,
    Language(Language),
}

pub struct CompiledRule {
    pub rule: Rule,
    regex: Option<Regex>,
}

impl CompiledRule {
    fn new(rule: Rule) -> Self {
        let regex = match Regex::new(rule.pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!(rule = rule.id, error = %e, "skipping rule with malformed pattern");
                None
            }
        };
        Self { rule, regex }
    }

    /// The compiled pattern, or `None` if it failed to compile.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }
}

pub struct RuleGroup {
    pub phase: Phase,
    pub scope: Scope,
    rules: Vec<CompiledRule>,
}

impl RuleGroup {
    pub fn new(phase: Phase, scope: Scope, rules: Vec<Rule>) -> Self {
        Self {
            phase,
            scope,
            rules: rules.into_iter().map(CompiledRule::new).collect(),
        }
    }

    pub fn name(&self) -> String {
        match (self.phase, self.scope) {
            (Phase::Structural, _) => self.phase.as_str().to_string(),
            (_, Scope::Universal) => format!("universal-{}", self.phase.as_str()),
            (_, Scope::Language(language)) => language.to_string(),
        }
    }

    pub fn compiled(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|c| &c.rule)
    }

    pub fn get(&self, id: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|c| c.rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub struct PatternLibrary {
    security: RuleGroup,
    runtime: RuleGroup,
    quality: RuleGroup,
    languages: Vec<RuleGroup>,
    structural: RuleGroup,
}

impl PatternLibrary {
    fn build() -> Self {
        let languages = Language::ALL
            .iter()
            .map(|&language| {
                let rules = match language {
                    Language::JavaScript => javascript::rules(),
                    Language::TypeScript => typescript::rules(),
                    Language::Python => python::rules(),
                    Language::Go => go::rules(),
                    Language::Rust => rust::rules(),
                    Language::Java => java::rules(),
                    Language::Cpp => cpp::rules(),
                };
                RuleGroup::new(Phase::Language, Scope::Language(language), rules)
            })
            .collect();

        Self {
            security: RuleGroup::new(Phase::Security, Scope::Universal, universal::security()),
            runtime: RuleGroup::new(Phase::Runtime, Scope::Universal, universal::runtime()),
            quality: RuleGroup::new(Phase::Quality, Scope::Universal, universal::quality()),
            languages,
            structural: RuleGroup::new(
                Phase::Structural,
                Scope::Language(Language::JavaScript),
                javascript::structural(),
            ),
        }
    }

    /// The four groups applicable to `language`, in evaluation order.
    pub fn groups_for(&self, language: Language) -> [&RuleGroup; 4] {
        [
            &self.security,
            &self.runtime,
            self.language_group(language),
            &self.quality,
        ]
    }

    pub fn language_group(&self, language: Language) -> &RuleGroup {
        self.languages
            .iter()
            .find(|g| g.scope == Scope::Language(language))
            .unwrap_or(&self.languages[0])
    }

    /// Rules backing the non-table JavaScript/TypeScript checks.
    pub fn structural(&self) -> &RuleGroup {
        &self.structural
    }

    pub fn groups(&self) -> impl Iterator<Item = &RuleGroup> {
        [&self.security, &self.runtime]
            .into_iter()
            .chain(self.languages.iter())
            .chain([&self.quality, &self.structural])
    }

    pub fn rules_for(&self, language: Language) -> impl Iterator<Item = &Rule> {
        let structural = matches!(language, Language::JavaScript | Language::TypeScript);
        self.groups_for(language)
            .into_iter()
            .flat_map(|g| g.rules())
            .chain(self.structural.rules().filter(move |_| structural))
    }

    pub fn find_rule(&self, id: &str) -> Option<&Rule> {
        self.groups().flat_map(|g| g.rules()).find(|r| r.id == id)
    }
}

static LIBRARY: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::build);

pub fn library() -> &'static PatternLibrary {
    &LIBRARY
}

pub fn find_rule(id: &str) -> Option<&'static Rule> {
    library().find_rule(id)
}

/// Text after the last `sep` in `s`, or all of `s`.
pub(crate) fn after_last<'a>(s: &'a str, sep: char) -> &'a str {
    s.rsplit_once(sep).map_or(s, |(_, tail)| tail)
}

/// Text between the first `open` and the last `close`, trimmed.
pub(crate) fn inner<'a>(s: &'a str, open: char, close: char) -> &'a str {
    match (s.find(open), s.rfind(close)) {
        (Some(start), Some(end)) if start < end => s[start + open.len_utf8()..end].trim(),
        _ => "",
    }
}
