//! Mirage core - detection engine for generated source code
//!
//! Scans a snippet against a fixed, per-language library of textual patterns
//! and returns a ranked list of [`Issue`]s with explanations and suggested
//! replacements.
//!
//! ```
//! use mirage_core::{Language, detect_language, scan};
//!
//! let source = "const items = []; items.isEmpty();";
//! let language = detect_language(source);
//! assert_eq!(language, Language::JavaScript);
//!
//! let issues = scan(source, language);
//! assert!(issues.iter().any(|i| i.replacement == ".length === 0"));
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod issue;
pub mod language;
pub mod rank;
pub mod rules;
pub mod structural;

pub use engine::{MAX_ISSUES, ScanEngine, scan};
pub use issue::{Category, Issue, IssueKind, Severity};
pub use language::{Language, UnknownLanguage, detect_language};
