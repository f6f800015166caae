//! Language tags and the text-based language classifier
//!
//! The classifier is an ordered waterfall of syntactic fingerprints. The
//! first fingerprint that fires wins, so rarer, language-specific markers are
//! tested before the generic ones (TypeScript text also looks like
//! JavaScript, Python annotations look like TypeScript, and so on).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Go,
    Rust,
    Java,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Go,
        Language::Rust,
        Language::Java,
        Language::Cpp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    /// Marker that starts a line comment in this language.
    pub fn line_comment(&self) -> &'static str {
        match self {
            Language::Python => "#",
            _ => "//",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            "py" | "pyi" => Some(Language::Python),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "java" => Some(Language::Java),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" | "h" => Some(Language::Cpp),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Language> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language '{0}'. Valid values: javascript, typescript, python, go, rust, java, cpp")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "python" | "py" => Ok(Language::Python),
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            "java" => Ok(Language::Java),
            "cpp" | "c++" | "cxx" => Ok(Language::Cpp),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

struct Fingerprint {
    language: Language,
    any_of: Vec<Regex>,
    all_of: Vec<Vec<Regex>>,
}

impl Fingerprint {
    fn matches(&self, text: &str) -> bool {
        self.any_of.iter().any(|re| re.is_match(text))
            || self
                .all_of
                .iter()
                .any(|group| group.iter().all(|re| re.is_match(text)))
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("Skipping language fingerprint {:?}: {}", p, e);
                None
            }
        })
        .collect()
}

static FINGERPRINTS: LazyLock<Vec<Fingerprint>> = LazyLock::new(|| {
    vec![
        Fingerprint {
            language: Language::Python,
            any_of: compile(&[
                r"\bdef\s+\w+\s*\([^)]*\)\s*(?:->\s*[^:\n]+)?:",
                r"(?m)^(?:from\s+[\w.]+\s+import\s+[\w*(]|import\s+[\w.]+(?:\s+as\s+\w+)?(?:\s*,\s*[\w.]+(?:\s+as\s+\w+)?)*\s*(?:#.*)?$)",
                r"(?m)^class\s+\w+\s*(?:\([^)]*\))?\s*:",
            ]),
            all_of: Vec::new(),
        },
        Fingerprint {
            language: Language::Rust,
            any_of: compile(&[
                r"\bfn\s+\w+\s*[(<]",
                r"\)\s*->\s*(?:Result|Option|Self|&|[A-Za-z_])",
                r"\blet\s+mut\b",
                r"(?m)^\s*impl\b(?:\s*<[^>]*>)?\s+\w+",
                r"\buse\s+std::",
            ]),
            all_of: Vec::new(),
        },
        Fingerprint {
            language: Language::Go,
            any_of: compile(&[
                r"(?m)^package\s+\w+\s*$",
                r"\bfunc\s+(?:\([^)]*\)\s*)?\w+\s*\(",
            ]),
            all_of: vec![compile(&[r":=", r"\bfmt\."])],
        },
        Fingerprint {
            language: Language::Java,
            any_of: compile(&[
                r"\bpublic\s+class\b",
                r"\bprivate\s+(?:static\s+)?(?:final\s+)?[\w<>\[\],]+\s+\w+\s*\(",
                r"\bSystem\.out\.print",
            ]),
            all_of: Vec::new(),
        },
        Fingerprint {
            language: Language::Cpp,
            any_of: compile(&[r"#include\s*<", r"\bstd::\w"]),
            all_of: vec![compile(&[r"\bint\s+main\s*\(", r"#include\b"])],
        },
        Fingerprint {
            language: Language::TypeScript,
            any_of: compile(&[
                r":\s*(?:string|number|boolean|any)\b",
                r"\binterface\s+\w+",
                r"\btype\s+\w+\s*=",
            ]),
            all_of: Vec::new(),
        },
        Fingerprint {
            language: Language::JavaScript,
            any_of: compile(&[
                r"\b(?:const|let|var)\s+\w+\s*=",
                r"\bfunction\s+\w+\s*\(",
                r"=>\s*\{",
            ]),
            all_of: Vec::new(),
        },
    ]
});

/// Infer the language of `text`. Never fails; falls back to JavaScript.
pub fn detect_language(text: &str) -> Language {
    FINGERPRINTS
        .iter()
        .find(|fp| fp.matches(text))
        .map(|fp| fp.language)
        .unwrap_or_default()
}
