//! Rules that apply regardless of the scanned language

use super::{Rule, after_last};
use crate::rule;

pub(super) fn security() -> Vec<Rule> {
    vec![
        rule!(
            id = "hardcoded-secrets",
            category = SecurityRisk,
            severity = Critical,
            pattern = r#"(?i)["']?\b[a-z_]*(?:api[_-]?key|secret|passw(?:or)?d|token|access[_-]?key|private[_-]?key)[a-z0-9_]*["']?\s*[:=]\s*["'][^"'\s]{6,}["']"#,
            description = "Credential assigned from a hardcoded string literal",
            fix = "Load the value from the environment or a secret store",
            rationale = "Secrets committed to source end up in version control, logs and bundles where anyone with read access can use them.",
            correction = |m| secret_from_env(m),
        ),
        rule!(
            id = "eval-usage",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"\beval\s*\(",
            description = "eval() executes arbitrary code built from its argument",
            fix = "Parse data explicitly (JSON.parse, ast.literal_eval) instead of evaluating it",
            rationale = "Any attacker-influenced input reaching eval() becomes code execution.",
            replace_with = "JSON.parse(",
        ),
        rule!(
            id = "sql-injection",
            category = SecurityRisk,
            severity = Critical,
            pattern = r#"(?i)["'`](?:SELECT|INSERT\s+INTO|UPDATE|DELETE\s+FROM)\b[^"'`\n]*["'`]\s*(?:\+|%|\.\s*format\s*\()"#,
            description = "SQL statement assembled by string concatenation or formatting",
            fix = "Use a parameterized query and pass values as bound parameters",
            rationale = "Values spliced into SQL text can change the meaning of the statement.",
            correction = |m| parameterize_query(m),
        ),
        rule!(
            id = "command-injection",
            category = SecurityRisk,
            severity = Critical,
            pattern = r#"\bos\.system\s*\(|\bchild_process\.exec(?:Sync)?\s*\(|\bexec\.Command\(\s*"(?:sh|bash)"\s*,\s*"-c""#,
            description = "Command string handed to a shell",
            fix = "Run the program directly with an argument list instead of a shell string",
            rationale = "Shell metacharacters in interpolated values let callers run extra commands.",
            correction = |m| {
                if m.starts_with("os.system") {
                    "subprocess.run(".to_string()
                } else if m.starts_with("child_process") {
                    "child_process.execFile(".to_string()
                } else {
                    m.to_string()
                }
            },
        ),
        rule!(
            id = "weak-hash",
            category = SecurityRisk,
            severity = Warning,
            pattern = r#"\bhashlib\.(?:md5|sha1)\s*\(|\bcreateHash\(\s*["'](?:md5|sha1)["']|\bMessageDigest\.getInstance\(\s*"(?:MD5|SHA-?1)"|\b(?:md5|sha1)\.(?:New|Sum)\("#,
            description = "MD5/SHA-1 used for hashing",
            fix = "Use SHA-256 or a dedicated password hash (argon2, bcrypt)",
            rationale = "MD5 and SHA-1 have practical collision attacks.",
            correction = |m| {
                m.replace("SHA-1", "SHA-256")
                    .replace("SHA1", "SHA-256")
                    .replace("MD5", "SHA-256")
                    .replace("md5", "sha256")
                    .replace("sha1", "sha256")
            },
        ),
        rule!(
            id = "tls-verification-disabled",
            category = SecurityRisk,
            severity = Critical,
            pattern = r"\bverify\s*=\s*False\b|\brejectUnauthorized\s*:\s*false\b|\bInsecureSkipVerify\s*:\s*true\b|\bdanger_accept_invalid_certs\s*\(\s*true\s*\)",
            description = "TLS certificate verification is turned off",
            fix = "Keep verification enabled and trust the required CA instead",
            rationale = "Without certificate checks any network peer can impersonate the server.",
            correction = |m| {
                if m.contains("False") {
                    m.replace("False", "True")
                } else if m.contains("false") {
                    m.replace("false", "true")
                } else {
                    m.replace("true", "false")
                }
            },
        ),
    ]
}

pub(super) fn runtime() -> Vec<Rule> {
    vec![
        rule!(
            id = "division-by-zero",
            category = RuntimeError,
            severity = Critical,
            pattern = r"(?m)[\w)\]]\s*[/%]\s*0+(?:\.0+)?\s*(?:[;,)\]}]|$)",
            description = "Division or modulo by a literal zero",
            fix = "Guard the divisor or use the intended non-zero value",
            rationale = "Integer division by zero panics or throws; float division silently yields Infinity/NaN.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "infinite-empty-loop",
            category = RuntimeError,
            severity = Warning,
            pattern = r"\bwhile\s*\(?\s*(?:true|True|1)\s*\)?\s*(?:\{\s*\}|:\s*pass\b)|\bloop\s*\{\s*\}|\bfor\s*\{\s*\}",
            description = "Unconditional loop with an empty body",
            fix = "Remove the busy loop or add a body with an exit condition",
            rationale = "An empty infinite loop pins a CPU core and never returns.",
            replace_with = "",
        ),
        rule!(
            id = "off-by-one-length",
            category = LogicError,
            severity = Warning,
            pattern = r"<=\s*[\w.]+\.(?:length\b|size\(\))|<=\s*len\(\s*[\w.]+\s*\)",
            description = "Loop bound compares with <= against a collection length",
            fix = "Use < so the last index visited is length - 1",
            rationale = "Index length is one past the end of the collection.",
            correction = |m| m.replacen("<=", "<", 1),
        ),
        rule!(
            id = "assignment-in-condition",
            category = LogicError,
            severity = Warning,
            pattern = r"\b(?:if|while)\s*\(\s*[A-Za-z_][\w.]*\s*=[^=>]",
            description = "Assignment used where a comparison was probably intended",
            fix = "Compare with == (or === in JavaScript)",
            rationale = "The condition tests the assigned value and overwrites the variable.",
            correction = |m| m.replacen('=', "==", 1),
        ),
        rule!(
            id = "null-dereference",
            category = RuntimeError,
            severity = Critical,
            pattern = r"\b(?:null|undefined|None|nil)\.[A-Za-z_]\w*",
            description = "Member access on a null literal",
            fix = "Access the member on an initialised value",
            rationale = "Reading a property of null always fails at runtime.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "unreachable-code",
            category = LogicError,
            severity = Warning,
            pattern = r"(?m)^[ \t]*return\b[^;\n]*;[ \t]*\n[ \t]*[A-Za-z_]\w*\s*[(=]",
            description = "Statement after return in the same block can never run",
            fix = "Move the statement before the return or delete it",
            rationale = "Unreachable statements usually signal a misplaced return.",
            correction = |m| match m.find(';') {
                Some(end) => m[..=end].to_string(),
                None => m.to_string(),
            },
        ),
    ]
}

pub(super) fn quality() -> Vec<Rule> {
    vec![
        rule!(
            id = "empty-catch",
            category = MissingErrorHandling,
            severity = Warning,
            pattern = r"\bcatch\s*(?:\([^)]*\))?\s*\{\s*\}|\bexcept\b[^:\n]*:\s*pass\b",
            description = "Exception handler swallows the error",
            fix = "Log, handle or rethrow the error",
            rationale = "Silently discarded errors hide failures until they surface far away.",
            correction = |m| {
                if let Some(head) = m.strip_suffix("pass") {
                    format!("{}raise", head)
                } else {
                    match m.rfind('{') {
                        Some(open) => format!("{}{{ /* handle or rethrow */ }}", &m[..open]),
                        None => m.to_string(),
                    }
                }
            },
        ),
        rule!(
            id = "unimplemented-stub",
            category = CodeQuality,
            severity = Warning,
            pattern = r#"\braise\s+NotImplementedError\b|\bthrow\s+new\s+Error\(\s*["'](?i:not\s+implemented)|\b(?:todo|unimplemented)!\s*\(|\bpanic\(\s*"(?i:todo|not\s+implemented)|\bthrow\s+new\s+UnsupportedOperationException\b"#,
            description = "Placeholder left where an implementation is expected",
            fix = "Implement the function body",
            rationale = "Stubs compile but fail the first time the path is exercised.",
            correction = |m| m.to_string(),
        ),
        rule!(
            id = "boolean-comparison",
            category = CodeQuality,
            severity = Info,
            pattern = r"[=!]==?\s*(?:true|false|True|False)\b",
            description = "Explicit comparison against a boolean literal",
            fix = "Use the boolean expression directly",
            rationale = "x == true is just x; the comparison adds noise and invites type-coercion bugs.",
            correction = |m| {
                let positive = m.starts_with('=');
                let truthy = m.ends_with("true") || m.ends_with("True");
                if positive == truthy {
                    String::new()
                } else {
                    m.to_string()
                }
            },
        ),
        rule!(
            id = "duplicate-semicolon",
            category = CodeQuality,
            severity = Info,
            pattern = r"(?m);[ \t]*;[ \t]*$",
            description = "Doubled semicolon",
            fix = "Remove the extra semicolon",
            rationale = "Empty statements are noise and sometimes hide an edit mistake.",
            replace_with = ";",
        ),
        rule!(
            id = "debug-leftover",
            category = CodeQuality,
            severity = Info,
            pattern = r"\bdebugger\s*;|\bbreakpoint\(\)|\bpdb\.set_trace\(\)|\bdbg!\(",
            description = "Debugging hook left in the code",
            fix = "Remove the debugging statement",
            rationale = "Debugger hooks halt or spam output in production.",
            correction = |m| if m.starts_with("dbg!") { "(".to_string() } else { String::new() },
        ),
        rule!(
            id = "long-line",
            category = CodeQuality,
            severity = Info,
            pattern = r"(?m)^[^\n]{161,}$",
            description = "Line longer than 160 characters",
            fix = "Break the expression across several lines",
            rationale = "Very long lines are hard to review and often pack several concerns together.",
            correction = |m| m.to_string(),
        ),
    ]
}

fn secret_from_env(matched: &str) -> String {
    let Some(quote) = matched.chars().last() else {
        return String::new();
    };
    let body = &matched[..matched.len() - quote.len_utf8()];
    let Some(open) = body.rfind(quote) else {
        return matched.to_string();
    };
    let head = &matched[..open];
    let name = head
        .trim_end()
        .trim_end_matches([':', '='])
        .trim_end()
        .trim_matches(['"', '\'']);
    let name = after_last(name, ' ');
    format!("{}env(\"{}\")", head, name.to_uppercase())
}

fn parameterize_query(matched: &str) -> String {
    let Some(quote) = matched.chars().next() else {
        return String::new();
    };
    match matched.rfind(quote) {
        Some(close) if close > 0 => format!("{}?{}", &matched[..close], quote),
        _ => matched.to_string(),
    }
}
