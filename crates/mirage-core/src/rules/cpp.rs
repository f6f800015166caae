//! C++ rules

use super::Rule;
use crate::rule;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule!(
            id = "gets-usage",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"\bgets\s*\(",
            description = "gets() cannot bound its input",
            fix = "Use fgets() or std::getline()",
            rationale = "gets was removed from C11 and C++14 because every call is a potential overflow.",
            replace_with = "fgets(",
        ),
        rule!(
            id = "unsafe-c-string",
            category = SecurityRisk,
            severity = Warning,
            pattern = r"\b(?:strcpy|strcat|sprintf)\s*\(",
            description = "Unbounded C string function",
            fix = "Use the length-limited variant or std::string",
            rationale = "These functions write past the destination when the source is too long.",
            correction = |m| {
                let name = m.trim_end_matches('(').trim_end();
                let bounded = match name {
                    "strcpy" => "strncpy",
                    "strcat" => "strncat",
                    _ => "snprintf",
                };
                format!("{}(", bounded)
            },
        ),
        rule!(
            id = "scanf-unbounded",
            category = SecurityRisk,
            severity = Warning,
            pattern = r#"\bscanf\s*\(\s*"[^"]*%s"#,
            description = "scanf %s without a field width",
            fix = "Give %s a maximum width or read into std::string",
            rationale = "An unbounded %s overflows the target buffer on long input.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "system-call",
            category = SecurityRisk,
            severity = Warning,
            pattern = r"\b(?:std::)?system\s*\(",
            description = "system() runs its argument through the shell",
            fix = "Use a process API that takes an argument vector",
            rationale = "Shell parsing of built command strings enables injection.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "cpp-null",
            category = Hallucination,
            severity = Critical,
            pattern = r"\b(?:null|nil|None|undefined)\b",
            description = "Not a C++ null value",
            fix = "Use nullptr",
            rationale = "null, nil, None and undefined are undeclared identifiers in C++.",
            replace_with = "nullptr",
        ),
        rule!(
            id = "cpp-len",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:len|length|count)\(\)",
            description = "Standard containers report their length with size()",
            fix = "Call .size()",
            rationale = "Only std::string has length(); vectors and maps have size().",
            replace_with = ".size()",
        ),
        rule!(
            id = "cpp-push",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:push|add|append|pushBack)\(",
            description = "Standard containers append with push_back()",
            fix = "Use .push_back() or .emplace_back()",
            rationale = "std::vector has no push, add or append methods.",
            replace_with = ".push_back(",
        ),
        rule!(
            id = "cpp-print",
            category = Hallucination,
            severity = Warning,
            pattern = r"\b(?:console\.log|System\.out\.println|print)\s*\(",
            description = "Not a C++ output function",
            fix = "Use std::cout or std::printf",
            rationale = "console.log, System.out.println and print do not exist in C++.",
            replace_with = "std::printf(",
        ),
        rule!(
            id = "auto-ptr",
            category = DeprecatedApi,
            severity = Warning,
            pattern = r"\b(?:std::)?auto_ptr\b",
            description = "std::auto_ptr was removed in C++17",
            fix = "Use std::unique_ptr",
            rationale = "auto_ptr's copy semantics silently transfer ownership.",
            replace_with = "std::unique_ptr",
        ),
        rule!(
            id = "null-macro",
            category = CodeQuality,
            severity = Info,
            pattern = r"\bNULL\b",
            description = "NULL macro instead of nullptr",
            fix = "Use nullptr",
            rationale = "NULL is an integer and takes part in overload resolution as one.",
            replace_with = "nullptr",
        ),
        rule!(
            id = "using-namespace-std",
            category = CodeQuality,
            severity = Info,
            pattern = r"\busing\s+namespace\s+std\s*;",
            description = "using namespace std",
            fix = "Qualify names with std:: or import individual names",
            rationale = "Pulling all of std into scope causes ambiguous-name collisions.",
            replace_with = "",
        ),
        rule!(
            id = "rand-usage",
            category = CodeQuality,
            severity = Info,
            pattern = r"\b(?:std::)?rand\(\)",
            description = "rand() has poor statistical quality",
            fix = "Use the <random> engines",
            rationale = "rand() typically has a small range and correlated low bits.",
            correction = |m| m.to_string(),
        ),
    ]
}
