//! Java rules

use super::{Rule, inner};
use crate::rule;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule!(
            id = "string-reference-equality",
            category = LogicError,
            severity = Warning,
            pattern = r#"\b[A-Za-z_]\w*\s*[=!]=\s*"[^"\n]*""#,
            description = "String compared with == instead of equals()",
            fix = "Compare with \"literal\".equals(value)",
            rationale = "== compares references; equal strings from different sources are not the same object.",
            correction = |m| {
                let negated = m.contains("!=");
                let Some((name, literal)) = m.split_once(if negated { "!=" } else { "==" }) else {
                    return m.to_string();
                };
                format!(
                    "{}{}.equals({})",
                    if negated { "!" } else { "" },
                    literal.trim(),
                    name.trim()
                )
            },
        ),
        rule!(
            id = "java-console-log",
            category = Hallucination,
            severity = Critical,
            pattern = r"\bconsole\.log\(",
            description = "console.log does not exist in Java",
            fix = "Use System.out.println or a logger",
            rationale = "console is a JavaScript global.",
            replace_with = "System.out.println(",
        ),
        rule!(
            id = "java-print",
            category = Hallucination,
            severity = Critical,
            pattern = r"(?m)^[ \t]*print(?:ln)?\s*\(",
            description = "Bare print() is not a Java method",
            fix = "Use System.out.println",
            rationale = "Java has no global print function.",
            correction = |m| {
                let indent = &m[..m.len() - m.trim_start().len()];
                format!("{}System.out.println(", indent)
            },
        ),
        rule!(
            id = "java-len",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.len\(\)|\blen\(\s*\w+\s*\)",
            description = "Java has no len()",
            fix = "Use .length() on strings, .size() on collections or .length on arrays",
            rationale = "len is Python and Rust vocabulary.",
            correction = |m| {
                if m.starts_with('.') {
                    ".length()".to_string()
                } else {
                    format!("{}.length()", inner(m, '(', ')'))
                }
            },
        ),
        rule!(
            id = "java-push",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:push|push_back)\(",
            description = "Java collections add elements with add()",
            fix = "Use .add()",
            rationale = "List has no push method; push_back is C++.",
            replace_with = ".add(",
        ),
        rule!(
            id = "java-undefined",
            category = Hallucination,
            severity = Critical,
            pattern = r"\b(?:undefined|None|nil)\b",
            description = "Java's absent reference is null",
            fix = "Use null or Optional",
            rationale = "undefined, None and nil are not Java identifiers.",
            replace_with = "null",
        ),
        rule!(
            id = "runtime-exec",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"\bRuntime\.getRuntime\(\)\.exec\(",
            description = "Runtime.exec() with a command string",
            fix = "Use ProcessBuilder with an argument list",
            rationale = "A single command string is tokenised naively and invites injection.",
            replace_with = "new ProcessBuilder(",
        ),
        rule!(
            id = "catch-throwable",
            category = MissingErrorHandling,
            severity = Warning,
            pattern = r"\bcatch\s*\(\s*(?:Throwable|Error)\s+\w+\s*\)",
            description = "Catching Throwable or Error",
            fix = "Catch Exception or a narrower type",
            rationale = "Errors such as OutOfMemoryError signal conditions the program cannot recover from.",
            correction = |m| m.replacen("Throwable", "Exception", 1).replacen("(Error", "(Exception", 1),
        ),
        rule!(
            id = "print-stack-trace",
            category = MissingErrorHandling,
            severity = Info,
            pattern = r"\.printStackTrace\(\)",
            description = "Exception reported with printStackTrace()",
            fix = "Log the exception through the application logger",
            rationale = "Stack traces on stderr bypass log routing and are easy to miss.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "boxed-constructor",
            category = DeprecatedApi,
            severity = Info,
            pattern = r"\bnew\s+(?:Integer|Long|Double|Float|Short|Byte|Boolean|Character)\(",
            description = "Boxed primitive constructor is deprecated",
            fix = "Use valueOf() or autoboxing",
            rationale = "valueOf() reuses cached instances; the constructors are deprecated for removal.",
            correction = |m| {
                let ty = m.trim_start_matches("new").trim().trim_end_matches('(');
                format!("{}.valueOf(", ty)
            },
        ),
        rule!(
            id = "java-date",
            category = DeprecatedApi,
            severity = Info,
            pattern = r"\bnew\s+Date\(\s*\)",
            description = "java.util.Date used for timestamps",
            fix = "Use java.time.Instant",
            rationale = "Date is mutable and its API is largely deprecated.",
            replace_with = "Instant.now()",
        ),
    ]
}
