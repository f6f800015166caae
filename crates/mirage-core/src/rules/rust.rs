//! Rust rules

use super::{Rule, inner};
use crate::rule;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule!(
            id = "rust-try-block",
            category = Hallucination,
            severity = Critical,
            pattern = r"\btry\s*\{|\}\s*catch\s*(?:\([^)]*\))?\s*\{",
            description = "Rust has no try/catch",
            fix = "Return Result and propagate errors with ?",
            rationale = "Errors in Rust are values; try/catch does not parse.",
            correction = |m| if m.starts_with("try") { "{".to_string() } else { "} else {".to_string() },
        ),
        rule!(
            id = "rust-throw",
            category = Hallucination,
            severity = Critical,
            pattern = r"\bthrow\s+",
            description = "Rust has no throw statement",
            fix = "Return an Err value",
            rationale = "Failure is reported by returning Err from a Result-returning function.",
            replace_with = "return Err(",
        ),
        rule!(
            id = "rust-class",
            category = Hallucination,
            severity = Critical,
            pattern = r"\bclass\s+\w+",
            description = "Rust has no classes",
            fix = "Declare a struct and an impl block",
            rationale = "class is not a Rust keyword.",
            correction = |m| m.replacen("class", "struct", 1),
        ),
        rule!(
            id = "rust-null",
            category = Hallucination,
            severity = Critical,
            pattern = r"(?:[=(,!]\s*|\breturn\s+)(?:null|nil|undefined)\b",
            description = "Rust has no null value",
            fix = "Use Option and None",
            rationale = "Absence is modelled with Option; null is an undefined identifier.",
            correction = |m| {
                let head = m.trim_end_matches(char::is_alphabetic);
                format!("{}None", head)
            },
        ),
        rule!(
            id = "rust-length",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:length|size)\(\)",
            description = "Rust collections expose len(), not length() or size()",
            fix = "Call .len()",
            rationale = "length and size are not methods on Vec, String or slices.",
            replace_with = ".len()",
        ),
        rule!(
            id = "rust-push-back",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:push_back|pushBack)\(",
            description = "Vec appends with push()",
            fix = "Use .push()",
            rationale = "push_back is the C++ spelling; Vec has no such method.",
            replace_with = ".push(",
        ),
        rule!(
            id = "rust-equals",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.equals\(",
            description = "Rust compares values with ==",
            fix = "Use == or .eq()",
            rationale = "equals() is a Java method; Rust uses PartialEq.",
            replace_with = ".eq(",
        ),
        rule!(
            id = "unwrap-usage",
            category = MissingErrorHandling,
            severity = Warning,
            pattern = r"\.unwrap\(\)",
            description = "unwrap() panics on Err or None",
            fix = "Propagate with ? or handle the failure case",
            rationale = "A panic aborts the thread instead of reporting a recoverable error.",
            replace_with = "?",
        ),
        rule!(
            id = "try-macro",
            category = DeprecatedApi,
            severity = Warning,
            pattern = r"\btry!\(",
            description = "try! is deprecated and a reserved keyword since 2018",
            fix = "Use the ? operator",
            rationale = "try! no longer compiles on the 2018 edition and later.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "mem-transmute",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"\b(?:std::)?mem::transmute\b",
            description = "mem::transmute reinterprets bits without checks",
            fix = "Use from_ne_bytes, as casts or a safe conversion",
            rationale = "Wrong sizes or invalid bit patterns are undefined behaviour.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "unsafe-block",
            category = SecurityRisk,
            severity = Warning,
            pattern = r"\bunsafe\s*\{",
            description = "unsafe block",
            fix = "Use a safe API, or document the invariants the block relies on",
            rationale = "The compiler no longer checks memory safety inside the block.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "clone-clone",
            category = CodeQuality,
            severity = Info,
            pattern = r"\.clone\(\)\.clone\(\)",
            description = "Value cloned twice",
            fix = "Clone once",
            rationale = "The second clone copies a value nothing else owns.",
            replace_with = ".clone()",
        ),
        rule!(
            id = "string-from-empty",
            category = CodeQuality,
            severity = Info,
            pattern = r#"\bString::from\(\s*""\s*\)|""\.to_string\(\)"#,
            description = "Empty String built from a literal",
            fix = "Use String::new()",
            rationale = "String::new() states the intent and does not allocate.",
            replace_with = "String::new()",
        ),
        rule!(
            id = "ref-string-param",
            category = CodeQuality,
            severity = Info,
            pattern = r"\w+\s*:\s*&String\b",
            description = "Parameter takes &String",
            fix = "Take &str",
            rationale = "&str accepts both String and string slices through deref coercion.",
            correction = |m| m.replace("&String", "&str"),
        ),
        rule!(
            id = "ref-vec-param",
            category = CodeQuality,
            severity = Info,
            pattern = r"\w+\s*:\s*&Vec<[^>]+>",
            description = "Parameter takes &Vec<T>",
            fix = "Take a slice &[T]",
            rationale = "A slice works for arrays and Vec alike and hides the allocation detail.",
            correction = |m| match m.split_once("&Vec") {
                Some((head, _)) => format!("{}&[{}]", head, inner(m, '<', '>')),
                None => m.to_string(),
            },
        ),
        rule!(
            id = "iter-count-len",
            category = CodeQuality,
            severity = Info,
            pattern = r"\.iter\(\)\.count\(\)",
            description = "iter().count() walks the collection to get its length",
            fix = "Use .len()",
            rationale = "len() is O(1) on slices, Vec and maps.",
            replace_with = ".len()",
        ),
    ]
}
