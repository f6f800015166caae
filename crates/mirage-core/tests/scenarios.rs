//! End-to-end behaviour of `scan` and `detect_language`

use std::collections::HashSet;
use std::time::{Duration, Instant};

use mirage_core::rank::rank;
use mirage_core::{Category, Issue, IssueKind, Language, MAX_ISSUES, Severity, detect_language, scan};

fn find<'a>(issues: &'a [Issue], rule_id: &str) -> Option<&'a Issue> {
    issues.iter().find(|i| i.rule_id == rule_id)
}

#[test]
fn isempty_is_reported_as_hallucination() {
    let issues = scan("const a = []; a.isEmpty();", Language::JavaScript);

    let issue = find(&issues, "js-isempty").expect("js-isempty reported");
    assert_eq!(issue.category, Category::Hallucination);
    assert!(issue.description.contains(".isEmpty()"));
    assert_eq!(issue.replacement, ".length === 0");
}

#[test]
fn python_mutable_default_on_first_line() {
    let issues = scan("def process(items=[]):\n    items.append(1)", Language::Python);

    let issue = find(&issues, "mutable-default").expect("mutable-default reported");
    assert_eq!(issue.line, 1);
}

#[test]
fn try_block_in_go_is_a_hallucination() {
    let issues = scan("try {\n  doSomething()\n}", Language::Go);

    let issue = find(&issues, "try-catch-go").expect("try-catch-go reported");
    assert_eq!(issue.category, Category::Hallucination);
}

#[test]
fn hardcoded_api_key_is_critical() {
    let issues = scan(r#"const API_KEY = "sk-12345abcdef""#, Language::JavaScript);

    let issue = find(&issues, "hardcoded-secrets").expect("hardcoded-secrets reported");
    assert_eq!(issue.severity, Severity::Critical);
}

#[test]
fn eval_in_comment_is_suppressed() {
    let issues = scan("// eval(x) is unsafe\neval(userInput);", Language::JavaScript);

    let evals: Vec<&Issue> = issues.iter().filter(|i| i.rule_id == "eval-usage").collect();
    assert_eq!(evals.len(), 1);
    assert_eq!(evals[0].line, 2);
    assert_eq!(evals[0].severity, Severity::Critical);
}

#[test]
fn match_inside_string_literal_is_suppressed() {
    let issues = scan(r#"const help = "never call eval(x)";"#, Language::JavaScript);
    assert!(find(&issues, "eval-usage").is_none());
}

#[test]
fn empty_text_detects_as_javascript() {
    assert_eq!(detect_language(""), Language::JavaScript);
}

const MIXED: &str = r#"var total = 0;
if (items.isEmpty()) {
  eval(code);
}
const last = items[-1];
fetch(url);
function getUser(id) {
  db.lookup(id);
}
const API_KEY = "sk-12345abcdef";
"#;

#[test]
fn scan_is_deterministic() {
    for language in Language::ALL {
        assert_eq!(scan(MIXED, language), scan(MIXED, language), "{}", language);
    }
}

#[test]
fn results_are_ranked_by_severity_then_line() {
    let issues = scan(MIXED, Language::JavaScript);
    assert!(issues.len() > 3);

    for pair in issues.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.severity.weight() > b.severity.weight()
                || (a.severity.weight() == b.severity.weight() && a.line <= b.line),
            "{} before {}",
            a.id,
            b.id
        );
    }
}

#[test]
fn no_duplicate_rule_and_offset() {
    for language in [Language::JavaScript, Language::TypeScript] {
        let issues = scan(MIXED, language);

        let ids: HashSet<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), issues.len());

        let pattern: Vec<&Issue> = issues.iter().filter(|i| i.kind == IssueKind::Pattern).collect();
        let keys: HashSet<(&str, usize)> = pattern.iter().map(|i| (i.rule_id, i.start_index)).collect();
        assert_eq!(keys.len(), pattern.len());
    }
}

#[test]
fn typescript_scan_reuses_javascript_rules_once() {
    let issues = scan("a.isEmpty();", Language::TypeScript);
    assert_eq!(issues.iter().filter(|i| i.rule_id == "js-isempty").count(), 1);
}

#[test]
fn cap_keeps_the_top_ranked_issues() {
    let mut text = "var a = 1;\n".repeat(30);
    text.push_str(&"eval(x);\n".repeat(10));

    let issues = scan(&text, Language::JavaScript);

    assert_eq!(issues.len(), MAX_ISSUES);
    let evals: Vec<usize> = issues
        .iter()
        .filter(|i| i.rule_id == "eval-usage")
        .map(|i| i.line)
        .collect();
    assert_eq!(evals, (31..=40).collect::<Vec<_>>());
    let vars: Vec<usize> = issues
        .iter()
        .filter(|i| i.rule_id == "var-declaration")
        .map(|i| i.line)
        .collect();
    assert_eq!(vars, (1..=10).collect::<Vec<_>>());
}

#[test]
fn scan_output_is_already_ranked() {
    let issues = scan(MIXED, Language::JavaScript);
    assert_eq!(rank(issues.clone()), issues);
}

#[test]
fn structural_findings_carry_no_fix() {
    let issues = scan(MIXED, Language::JavaScript);

    for rule_id in ["missing-await", "missing-return"] {
        let issue = find(&issues, rule_id).unwrap_or_else(|| panic!("{} reported", rule_id));
        assert_eq!(issue.kind, IssueKind::Structural);
        assert_eq!((issue.start_index, issue.end_index), (0, 0));
        assert!(issue.replacement.is_empty());
        assert!(!issue.has_fix());
    }

    let await_issue = find(&issues, "missing-await").unwrap();
    assert_eq!(await_issue.line, 6);
    let return_issue = find(&issues, "missing-return").unwrap();
    assert_eq!(return_issue.line, 7);
}

#[test]
fn pathological_input_completes() {
    let quotes = "\"".repeat(20_000);
    let braces = format!("function getX() {}", "{".repeat(20_000));
    let long_line = format!("const x = {};", "a".repeat(50_000));

    for text in [&quotes, &braces, &long_line] {
        assert!(scan(text, Language::JavaScript).len() <= MAX_ISSUES);
    }
}

// Thousands of candidates must not rescan the text per match. The bound is
// loose on purpose; the quadratic version took tens of seconds here.
const SCAN_BOUND: Duration = Duration::from_secs(10);

#[test]
fn many_matches_on_short_lines() {
    let text = "a.isEmpty();\n".repeat(80_000);

    let started = Instant::now();
    let issues = scan(&text, Language::JavaScript);
    assert!(started.elapsed() < SCAN_BOUND, "took {:?}", started.elapsed());

    assert_eq!(issues.len(), MAX_ISSUES);
    assert!(issues.iter().all(|i| i.line <= MAX_ISSUES));
    assert_eq!(find(&issues, "js-isempty").map(|i| (i.line, i.start_index)), Some((1, 1)));
}

#[test]
fn many_matches_on_one_long_line() {
    let text = "a.isEmpty();".repeat(40_000);

    let started = Instant::now();
    let issues = scan(&text, Language::JavaScript);
    assert!(started.elapsed() < SCAN_BOUND, "took {:?}", started.elapsed());

    assert_eq!(issues.len(), MAX_ISSUES);
    assert!(issues.iter().all(|i| i.line == 1));
    let starts: Vec<usize> = issues
        .iter()
        .filter(|i| i.rule_id == "js-isempty")
        .map(|i| i.start_index)
        .collect();
    assert_eq!(starts[..3], [1, 13, 25]);
}

#[test]
fn quote_parity_holds_across_a_long_line() {
    let text = "'a.isEmpty();' ".repeat(40_000);

    let started = Instant::now();
    let issues = scan(&text, Language::JavaScript);
    assert!(started.elapsed() < SCAN_BOUND, "took {:?}", started.elapsed());

    assert!(find(&issues, "js-isempty").is_none());
}

#[test]
fn rendered_summary() {
    let text = "var total = 0;\nif (items.isEmpty()) {\n  eval(code);\n}";
    let rendered: Vec<String> = scan(text, Language::JavaScript)
        .iter()
        .map(|i| {
            format!(
                "{} {}:{}..{} {} -> {:?}",
                i.severity, i.line, i.start_index, i.end_index, i.rule_id, i.replacement
            )
        })
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r#"
    critical 3:40..45 eval-usage -> "JSON.parse("
    warning 2:24..34 js-isempty -> ".length === 0"
    info 1:0..4 var-declaration -> "let "
    "#);
}
