//! Python rules

use super::{Rule, inner};
use crate::rule;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule!(
            id = "mutable-default",
            category = LogicError,
            severity = Warning,
            pattern = r"\bdef\s+\w+\s*\([^)]*=\s*(?:\[\]|\{\}|set\(\))",
            description = "Mutable default argument is shared across calls",
            fix = "Default to None and create the container inside the function",
            rationale = "Default values are evaluated once; mutations leak into later calls.",
            correction = |m| replace_default_with_none(m),
        ),
        rule!(
            id = "bare-except",
            category = MissingErrorHandling,
            severity = Warning,
            pattern = r"(?m)^[ \t]*except[ \t]*:",
            description = "Bare except also catches KeyboardInterrupt and SystemExit",
            fix = "Catch Exception or a narrower type",
            rationale = "A bare except makes the program impossible to interrupt cleanly.",
            correction = |m| m.replacen("except", "except Exception", 1).replace(" :", ":"),
        ),
        rule!(
            id = "py2-except-syntax",
            category = Hallucination,
            severity = Critical,
            pattern = r"\bexcept\s+(\w+)\s*,\s*(\w+)\s*:",
            description = "Python 2 except syntax",
            fix = "Use except ExceptionType as name:",
            rationale = "except X, e: is a syntax error in Python 3.",
            correction = |m| {
                let body = m.trim_start_matches("except").trim_end_matches(':');
                match body.split_once(',') {
                    Some((ty, name)) => format!("except {} as {}:", ty.trim(), name.trim()),
                    None => m.to_string(),
                }
            },
        ),
        rule!(
            id = "py-js-literals",
            category = Hallucination,
            severity = Critical,
            pattern = r"\b(?:null|undefined|true|false)\b",
            description = "JavaScript literal used in Python",
            fix = "Use None, True or False",
            rationale = "null, undefined, true and false are undefined names in Python.",
            correction = |m| match m {
                "true" => "True".to_string(),
                "false" => "False".to_string(),
                _ => "None".to_string(),
            },
        ),
        rule!(
            id = "py-js-operators",
            category = Hallucination,
            severity = Critical,
            pattern = r"===|!==|&&|\|\|",
            description = "JavaScript operator used in Python",
            fix = "Use ==, !=, and, or",
            rationale = "These operators are syntax errors in Python.",
            correction = |m| match m {
                "===" => "==",
                "!==" => "!=",
                "&&" => "and",
                _ => "or",
            }
            .to_string(),
        ),
        rule!(
            id = "py-js-methods",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:push|toUpperCase|toLowerCase|trim|startsWith|endsWith|indexOf|forEach)\(",
            description = "JavaScript method called on a Python value",
            fix = "Use the Python equivalent",
            rationale = "Python lists and strings have append, upper, lower, strip, startswith, endswith and index.",
            correction = |m| {
                let method = match m.trim_start_matches('.').trim_end_matches('(') {
                    "push" => ".append(",
                    "toUpperCase" => ".upper(",
                    "toLowerCase" => ".lower(",
                    "trim" => ".strip(",
                    "startsWith" => ".startswith(",
                    "endsWith" => ".endswith(",
                    "indexOf" => ".index(",
                    _ => m,
                };
                method.to_string()
            },
        ),
        rule!(
            id = "py-length-attr",
            category = Hallucination,
            severity = Warning,
            pattern = r"\b[A-Za-z_][\w.]*\.(?:length|size)\b(?:\(\))?",
            description = "Python sequences have no .length or .size",
            fix = "Use len()",
            rationale = "Length is exposed through the len() built-in.",
            correction = |m| {
                let target = match m.rfind(".length").or_else(|| m.rfind(".size")) {
                    Some(dot) => &m[..dot],
                    None => m,
                };
                format!("len({})", target)
            },
        ),
        rule!(
            id = "py-print-statement",
            category = Hallucination,
            severity = Critical,
            pattern = r#"(?m)^[ \t]*print[ \t]+["'\w]"#,
            description = "Python 2 print statement",
            fix = "Call print() as a function",
            rationale = "print is a function in Python 3; the statement form is a syntax error.",
            correction = |m| {
                let indent = &m[..m.len() - m.trim_start().len()];
                let first = m.chars().last().map(String::from).unwrap_or_default();
                format!("{}print({}", indent, first)
            },
        ),
        rule!(
            id = "py-has-key",
            category = DeprecatedApi,
            severity = Warning,
            pattern = r"\b[A-Za-z_]\w*\.has_key\(\s*[^()]+\)",
            description = "dict.has_key() was removed in Python 3",
            fix = "Use the in operator",
            rationale = "has_key raises AttributeError on Python 3 dicts.",
            correction = |m| match m.split_once(".has_key") {
                Some((dict, _)) => format!("{} in {}", inner(m, '(', ')'), dict),
                None => m.to_string(),
            },
        ),
        rule!(
            id = "py-dict-iteritems",
            category = DeprecatedApi,
            severity = Warning,
            pattern = r"\.iter(?:items|keys|values)\(\)",
            description = "iteritems/iterkeys/itervalues were removed in Python 3",
            fix = "Use items(), keys() or values()",
            rationale = "The Python 3 methods already return lazy views.",
            correction = |m| m.replacen(".iter", ".", 1),
        ),
        rule!(
            id = "py-is-literal",
            category = LogicError,
            severity = Warning,
            pattern = r#"\bis\s+(?:not\s+)?(?:-?\d+|"[^"\n]*"|'[^'\n]*')"#,
            description = "Identity comparison against a literal",
            fix = "Use == or != to compare values",
            rationale = "is compares object identity; small-int and string interning make it pass by accident.",
            correction = |m| {
                if let Some(rest) = m.strip_prefix("is not") {
                    format!("!={}", rest)
                } else {
                    format!("=={}", m.trim_start_matches("is"))
                }
            },
        ),
        rule!(
            id = "py-none-compare",
            category = CodeQuality,
            severity = Info,
            pattern = r"[=!]=\s*None\b",
            description = "Equality comparison with None",
            fix = "Use is None or is not None",
            rationale = "== can be overridden; None is a singleton and should be compared by identity.",
            correction = |m| if m.starts_with('!') { "is not None".to_string() } else { "is None".to_string() },
        ),
        rule!(
            id = "py-range-len",
            category = CodeQuality,
            severity = Info,
            pattern = r"\brange\(\s*len\(\s*[\w.]+\s*\)\s*\)",
            description = "Indexing loop over range(len(x))",
            fix = "Iterate with enumerate()",
            rationale = "enumerate yields index and value without a second lookup.",
            correction = |m| {
                let target = inner(m, '(', ')');
                format!("enumerate({})", inner(target, '(', ')'))
            },
        ),
        rule!(
            id = "py-wildcard-import",
            category = CodeQuality,
            severity = Info,
            pattern = r"(?m)^from\s+[\w.]+\s+import\s+\*",
            description = "Wildcard import pollutes the module namespace",
            fix = "Import the names you use explicitly",
            rationale = "Star imports hide where names come from and can shadow builtins.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "pickle-loads",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"\bpickle\.loads?\(",
            description = "Unpickling data can execute arbitrary code",
            fix = "Use json for data exchange, or only unpickle trusted bytes",
            rationale = "A crafted pickle runs code during deserialisation.",
            correction = |m| m.replacen("pickle", "json", 1),
        ),
        rule!(
            id = "yaml-load",
            category = SecurityRisk,
            severity = Warning,
            pattern = r"\byaml\.load\(",
            description = "yaml.load() can construct arbitrary objects",
            fix = "Use yaml.safe_load()",
            rationale = "The full loader instantiates Python objects named in the document.",
            replace_with = "yaml.safe_load(",
        ),
        rule!(
            id = "subprocess-shell",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"\bshell\s*=\s*True\b",
            description = "subprocess call routed through the shell",
            fix = "Pass an argument list with shell=False",
            rationale = "Interpolated values become shell syntax.",
            replace_with = "shell=False",
        ),
        rule!(
            id = "sql-fstring",
            category = SecurityRisk,
            severity = Critical,
            pattern = r#"\bf["'](?i:SELECT|INSERT\s+INTO|UPDATE|DELETE\s+FROM)\b[^"'\n]*\{"#,
            description = "SQL built with an f-string",
            fix = "Use placeholders and pass parameters to execute()",
            rationale = "f-string values are spliced into the query unescaped.",
            correction = |m| m.to_string(),
        ),
    ]
}

fn replace_default_with_none(matched: &str) -> String {
    let Some(eq) = matched.rfind('=') else {
        return matched.to_string();
    };
    let (head, value) = matched.split_at(eq + 1);
    let spacing = &value[..value.len() - value.trim_start().len()];
    format!("{}{}None", head, spacing)
}
