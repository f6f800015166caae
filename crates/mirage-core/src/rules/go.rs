//! Go rules

use super::{Rule, inner};
use crate::rule;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule!(
            id = "try-catch-go",
            category = Hallucination,
            severity = Critical,
            pattern = r"\btry\s*\{|\}\s*catch\s*(?:\([^)]*\))?\s*\{",
            description = "Go has no try/catch",
            fix = "Return errors and check them with if err != nil",
            rationale = "try and catch are not Go keywords; the code does not compile.",
            correction = |m| {
                if m.starts_with("try") {
                    "{".to_string()
                } else {
                    "}\nif err != nil {".to_string()
                }
            },
        ),
        rule!(
            id = "go-throw",
            category = Hallucination,
            severity = Critical,
            pattern = r"\bthrow\s+",
            description = "Go has no throw statement",
            fix = "Return an error value",
            rationale = "Errors are ordinary return values in Go.",
            replace_with = "return ",
        ),
        rule!(
            id = "go-null",
            category = Hallucination,
            severity = Critical,
            pattern = r"\b(?:null|undefined|None)\b",
            description = "Go's zero value for pointers, maps and slices is nil",
            fix = "Use nil",
            rationale = "null, undefined and None are undefined identifiers in Go.",
            replace_with = "nil",
        ),
        rule!(
            id = "go-class",
            category = Hallucination,
            severity = Critical,
            pattern = r"\bclass\s+\w+",
            description = "Go has no classes",
            fix = "Declare a struct type and attach methods to it",
            rationale = "class is not a Go keyword.",
            correction = |m| {
                let name = m.trim_start_matches("class").trim();
                format!("type {} struct", name)
            },
        ),
        rule!(
            id = "go-while",
            category = Hallucination,
            severity = Critical,
            pattern = r"\bwhile\b",
            description = "Go has no while loop",
            fix = "Use for with a condition",
            rationale = "for is Go's only loop keyword.",
            replace_with = "for",
        ),
        rule!(
            id = "go-length",
            category = Hallucination,
            severity = Warning,
            pattern = r"\b[A-Za-z_][\w.]*\.(?:length|size|len)\b(?:\(\))?",
            description = "Go slices, maps and strings have no length method",
            fix = "Use the len() built-in",
            rationale = "Length is only available through len().",
            correction = |m| {
                let call = m.trim_end_matches("()");
                let target = call.rfind('.').map_or(call, |dot| &call[..dot]);
                format!("len({})", target)
            },
        ),
        rule!(
            id = "go-ternary",
            category = Hallucination,
            severity = Warning,
            pattern = r"[\w)]\s*\?\s*[\w.\x22]+\s*:\s*[\w.\x22]+",
            description = "Go has no ternary operator",
            fix = "Use an if/else statement",
            rationale = "cond ? a : b does not parse in Go.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "ignored-error",
            category = MissingErrorHandling,
            severity = Warning,
            pattern = r"\b\w+\s*,\s*_\s*:?=\s*[\w.]+\(",
            description = "Returned error discarded with the blank identifier",
            fix = "Assign the error and check it",
            rationale = "Failures are silently ignored and the zero value is used as if valid.",
            correction = |m| match m.split_once(',') {
                Some((head, tail)) => format!("{},{}", head, tail.replacen('_', "err", 1)),
                None => m.to_string(),
            },
        ),
        rule!(
            id = "panic-on-error",
            category = MissingErrorHandling,
            severity = Warning,
            pattern = r"\bpanic\(\s*err\s*\)",
            description = "panic used for an ordinary error",
            fix = "Return the error to the caller",
            rationale = "panic tears down the goroutine; errors should be handled or propagated.",
            replace_with = "return err",
        ),
        rule!(
            id = "ioutil-deprecated",
            category = DeprecatedApi,
            severity = Info,
            pattern = r"\bioutil\.(?:ReadFile|WriteFile|ReadAll|ReadDir|TempFile|TempDir)\(",
            description = "io/ioutil is deprecated",
            fix = "Use the equivalents in os and io",
            rationale = "ioutil has been a thin wrapper since Go 1.16.",
            correction = |m| {
                let name = inner(m, '.', '(');
                let replacement = match name {
                    "ReadAll" => "io.ReadAll",
                    "TempFile" => "os.CreateTemp",
                    "TempDir" => "os.MkdirTemp",
                    "ReadFile" => "os.ReadFile",
                    "WriteFile" => "os.WriteFile",
                    _ => "os.ReadDir",
                };
                format!("{}(", replacement)
            },
        ),
        rule!(
            id = "errors-new-sprintf",
            category = CodeQuality,
            severity = Info,
            pattern = r"\berrors\.New\(\s*fmt\.Sprintf\(",
            description = "errors.New(fmt.Sprintf(...))",
            fix = "Use fmt.Errorf",
            rationale = "fmt.Errorf formats and wraps in one call.",
            replace_with = "fmt.Errorf(",
        ),
    ]
}
