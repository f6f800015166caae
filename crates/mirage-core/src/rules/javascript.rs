//! JavaScript rules
//!
//! Most of these catch APIs borrowed from other languages (`.isEmpty()`,
//! `len(x)`, `push_back`) that do not exist on JavaScript values.

use super::{Rule, inner};
use crate::rule;

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule!(
            id = "js-isempty",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.isEmpty\(\)",
            description = ".isEmpty() is not a method on JavaScript arrays or strings",
            fix = "Compare .length with 0",
            rationale = "Calling a method that does not exist throws a TypeError at runtime.",
            replace_with = ".length === 0",
        ),
        rule!(
            id = "js-contains",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.contains\(",
            description = ".contains() does not exist on JavaScript arrays or strings",
            fix = "Use .includes()",
            rationale = "Array and String expose includes(); contains() is a Java/C# idiom.",
            replace_with = ".includes(",
        ),
        rule!(
            id = "js-size-method",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:size|len|length)\(\)",
            description = "Length is a property in JavaScript, not a method",
            fix = "Read .length without calling it",
            rationale = "arr.length() calls a number and throws a TypeError.",
            replace_with = ".length",
        ),
        rule!(
            id = "js-first-last",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:first|last)\(\)",
            description = "Arrays have no .first() or .last() methods",
            fix = "Index the array directly or use .at(-1)",
            rationale = "These helpers come from Ruby, Kotlin and Swift collections.",
            correction = |m| if m.starts_with(".last") { ".at(-1)".to_string() } else { "[0]".to_string() },
        ),
        rule!(
            id = "js-negative-index",
            category = LogicError,
            severity = Warning,
            pattern = r"\[\s*-1\s*\]",
            description = "Negative index reads a property named \"-1\", not the last element",
            fix = "Use .at(-1)",
            rationale = "JavaScript arrays do not support Python-style negative indexing; the result is undefined.",
            replace_with = ".at(-1)",
        ),
        rule!(
            id = "js-push-back",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:push_back|pushBack|append)\(",
            description = "JavaScript arrays append with .push()",
            fix = "Use .push()",
            rationale = "push_back and append belong to C++ and Python containers.",
            replace_with = ".push(",
        ),
        rule!(
            id = "js-len-builtin",
            category = Hallucination,
            severity = Warning,
            pattern = r"\blen\(\s*[\w.]+\s*\)",
            description = "len() is not a JavaScript built-in",
            fix = "Read the .length property",
            rationale = "len() is Python; in JavaScript it is an undefined global.",
            correction = |m| format!("{}.length", inner(m, '(', ')')),
        ),
        rule!(
            id = "js-print",
            category = Hallucination,
            severity = Warning,
            pattern = r"(?m)^[ \t]*print\s*\(",
            description = "print() is not defined in JavaScript",
            fix = "Use console.log()",
            rationale = "In browsers print() opens the print dialog; in Node it is undefined.",
            correction = |m| {
                let indent = &m[..m.len() - m.trim_start().len()];
                format!("{}console.log(", indent)
            },
        ),
        rule!(
            id = "js-python-string-methods",
            category = Hallucination,
            severity = Warning,
            pattern = r"\.(?:upper|lower|strip|startswith|endswith)\(",
            description = "Python string method called on a JavaScript string",
            fix = "Use the JavaScript equivalent",
            rationale = "JavaScript strings use toUpperCase, toLowerCase, trim, startsWith and endsWith.",
            correction = |m| {
                let method = match m.trim_start_matches('.').trim_end_matches('(') {
                    "upper" => ".toUpperCase(",
                    "lower" => ".toLowerCase(",
                    "strip" => ".trim(",
                    "startswith" => ".startsWith(",
                    "endswith" => ".endsWith(",
                    _ => m,
                };
                method.to_string()
            },
        ),
        rule!(
            id = "js-python-literals",
            category = Hallucination,
            severity = Warning,
            pattern = r"\b(?:None|True|False)\b",
            description = "Python literal used in JavaScript",
            fix = "Use null, true or false",
            rationale = "None, True and False are undefined identifiers in JavaScript.",
            correction = |m| match m {
                "None" => "null".to_string(),
                other => other.to_lowercase(),
            },
        ),
        rule!(
            id = "async-promise-executor",
            category = LogicError,
            severity = Warning,
            pattern = r"\bnew\s+Promise\(\s*async\b",
            description = "async function passed as a Promise executor",
            fix = "Use a plain executor or drop the Promise wrapper",
            rationale = "Errors thrown in an async executor are lost and never reject the promise.",
            replace_with = "new Promise(",
        ),
        rule!(
            id = "async-foreach",
            category = LogicError,
            severity = Warning,
            pattern = r"\.forEach\(\s*async\b",
            description = "forEach does not wait for async callbacks",
            fix = "Use for...of with await, or Promise.all over .map()",
            rationale = "The loop finishes before any callback does, so errors and ordering are lost.",
            replace_with = ".map(async",
        ),
        rule!(
            id = "nan-comparison",
            category = LogicError,
            severity = Warning,
            pattern = r"[=!]==?\s*NaN\b",
            description = "Comparison with NaN is always false",
            fix = "Use Number.isNaN()",
            rationale = "NaN is not equal to anything, including itself.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "sql-template-literal",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"`(?i:SELECT|INSERT\s+INTO|UPDATE|DELETE\s+FROM)\b[^`]*\$\{",
            description = "SQL built with template-literal interpolation",
            fix = "Use placeholders and pass values to the driver",
            rationale = "Interpolated values are spliced into the query text unescaped.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "inner-html",
            category = SecurityRisk,
            severity = Warning,
            pattern = r"\.innerHTML\s*=",
            description = "Assigning to innerHTML parses the value as markup",
            fix = "Assign textContent, or sanitise the markup first",
            rationale = "Untrusted strings written to innerHTML are an XSS vector.",
            replace_with = ".textContent =",
        ),
        rule!(
            id = "document-write",
            category = SecurityRisk,
            severity = Warning,
            pattern = r"\bdocument\.write(?:ln)?\(",
            description = "document.write() injects raw markup into the page",
            fix = "Build DOM nodes and append them",
            rationale = "document.write is an XSS sink and blocks parsing.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "buffer-constructor",
            category = DeprecatedApi,
            severity = Warning,
            pattern = r"\bnew\s+Buffer\(",
            description = "new Buffer() is deprecated",
            fix = "Use Buffer.from() or Buffer.alloc()",
            rationale = "The constructor can return uninitialised memory.",
            replace_with = "Buffer.from(",
        ),
        rule!(
            id = "substr",
            category = DeprecatedApi,
            severity = Info,
            pattern = r"\.substr\(",
            description = "String.prototype.substr is a legacy API",
            fix = "Use .slice() or .substring()",
            rationale = "substr is in Annex B and may be removed from engines.",
            replace_with = ".slice(",
        ),
        rule!(
            id = "parseint-radix",
            category = LogicError,
            severity = Info,
            pattern = r"\bparseInt\(\s*[^,()]+\)",
            description = "parseInt() called without a radix",
            fix = "Pass 10 as the second argument",
            rationale = "Without a radix, legacy engines parse leading zeros as octal.",
            correction = |m| match m.strip_suffix(')') {
                Some(head) => format!("{}, 10)", head.trim_end()),
                None => m.to_string(),
            },
        ),
        rule!(
            id = "loose-equality",
            category = CodeQuality,
            severity = Info,
            pattern = r"[^=!<>]\s*(?:==|!=)\s*[^=]",
            description = "Loose equality performs type coercion",
            fix = "Use === or !==",
            rationale = "== coerces operands, so '0' == 0 and null == undefined are both true.",
            correction = |m| {
                if m.contains("!=") {
                    m.replacen("!=", "!==", 1)
                } else {
                    m.replacen("==", "===", 1)
                }
            },
        ),
        rule!(
            id = "var-declaration",
            category = CodeQuality,
            severity = Info,
            pattern = r"\bvar\s+",
            description = "var declarations are function-scoped and hoisted",
            fix = "Use let or const",
            rationale = "Block-scoped bindings avoid accidental sharing across loop iterations.",
            replace_with = "let ",
        ),
        rule!(
            id = "console-log",
            category = CodeQuality,
            severity = Info,
            pattern = r"\bconsole\.log\(",
            description = "console.log left in code",
            fix = "Use the application logger or remove the call",
            rationale = "Stray logging leaks data and clutters output.",
            replace_with = "logger.debug(",
        ),
    ]
}

/// Rules reported by the brace and line walkers in `structural`.
///
/// `pattern` is the anchor each walker searches for.
pub(super) fn structural() -> Vec<Rule> {
    vec![
        rule!(
            id = "missing-await",
            category = RuntimeError,
            severity = Warning,
            pattern = r"\bfetch\s*\(",
            description = "fetch() result used without await or .then()",
            fix = "await the call or chain .then()",
            rationale = "fetch returns a Promise; reading it as a Response yields undefined fields.",
            replace_with = "",
        ),
        rule!(
            id = "missing-return",
            category = LogicError,
            severity = Warning,
            pattern = r"\bfunction\s+(?:get|calculate|compute|create|find|fetch)\w*\s*\([^)]*\)\s*(?::\s*[^{;]+)?\{|\b(?:const|let|var)\s+(?:get|calculate|compute|create|find|fetch)\w*\s*(?::[^=\n]+)?=\s*(?:async\s+)?(?:function\b\s*\w*\s*)?\([^)]*\)\s*(?::\s*[^{;=]+)?(?:=>\s*)?\{|(?m:^)[ \t]*(?:(?:public|private|protected|static|async)\s+)*(?:get|calculate|compute|create|find|fetch)\w*\s*\([^)]*\)\s*(?::\s*[^{;]+)?\{",
            description = "Function named like a getter never returns a value",
            fix = "Return the computed value",
            rationale = "Callers of get/compute/find helpers expect a result and receive undefined.",
            replace_with = "",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn rule(id: &str) -> Rule {
        *rules().iter().find(|r| r.id == id).expect("rule exists")
    }

    fn first_match<'a>(rule: &Rule, text: &'a str) -> Option<&'a str> {
        Regex::new(rule.pattern)
            .unwrap()
            .find(text)
            .map(|m| m.as_str())
    }

    #[test]
    fn isempty_becomes_length_check() {
        let r = rule("js-isempty");
        assert_eq!(first_match(&r, "a.isEmpty();"), Some(".isEmpty()"));
        assert_eq!(r.correct(".isEmpty()"), ".length === 0");
    }

    #[test]
    fn len_builtin_uses_argument() {
        let r = rule("js-len-builtin");
        let m = first_match(&r, "if (len(items) > 0)").unwrap();
        assert_eq!(r.correct(m), "items.length");
    }

    #[test]
    fn print_keeps_indentation() {
        let r = rule("js-print");
        let m = first_match(&r, "if (x) {\n    print(x)\n}").unwrap();
        assert_eq!(r.correct(m), "    console.log(");
    }

    #[test]
    fn python_string_methods_map_to_js() {
        let r = rule("js-python-string-methods");
        assert_eq!(r.correct(".strip("), ".trim(");
        assert_eq!(r.correct(".startswith("), ".startsWith(");
    }

    #[test]
    fn loose_equality_is_tightened() {
        let r = rule("loose-equality");
        let m = first_match(&r, "if (a == b) {}").unwrap();
        assert_eq!(r.correct(m), "a === b");
        assert!(first_match(&r, "if (a === b) {}").is_none());
        let m = first_match(&r, "x != null").unwrap();
        assert_eq!(r.correct(m), "x !== n");
    }

    #[test]
    fn parseint_gets_radix() {
        let r = rule("parseint-radix");
        let m = first_match(&r, "parseInt(value)").unwrap();
        assert_eq!(r.correct(m), "parseInt(value, 10)");
        assert!(first_match(&r, "parseInt(value, 16)").is_none());
    }

    #[test]
    fn missing_return_anchor_matches_declarations() {
        let anchor = structural()
            .into_iter()
            .find(|r| r.id == "missing-return")
            .unwrap();
        let re = Regex::new(anchor.pattern).unwrap();

        assert!(re.is_match("function getUser(id) {"));
        assert!(re.is_match("function computeTotal(a, b): number {"));
        assert!(re.is_match("const findItem = (xs) => {"));
        assert!(re.is_match("const createUser = async function (x) {"));
        assert!(re.is_match("const getName = (u): string => {"));
        assert!(!re.is_match("function render() {"));
        assert!(!re.is_match("const getName = (u) => u.name;"));
        assert!(re.is_match("  getName() {"));
        assert!(re.is_match("  private async fetchUser(id: string): Promise<User> {"));
        assert!(!re.is_match("  render() {"));
        assert!(!re.is_match("  getItems(list).forEach((x) => {"));
        assert!(!re.is_match("x = getName() {"));
    }
}
