use super::{Rule, javascript};
use crate::rule;

/// The JavaScript rules followed by TypeScript-only rules.
pub(super) fn rules() -> Vec<Rule> {
    let mut rules = javascript::rules();
    rules.extend([
        rule!(
            id = "ts-explicit-any",
            category = CodeQuality,
            severity = Warning,
            pattern = r":\s*any\b",
            description = "Explicit any disables type checking",
            fix = "Use a concrete type or unknown",
            rationale = "any silently spreads through every value it touches.",
            replace_with = ": unknown",
        ),
        rule!(
            id = "ts-as-any",
            category = CodeQuality,
            severity = Warning,
            pattern = r"\bas\s+any\b",
            description = "Cast to any bypasses the type checker",
            fix = "Cast to the real type or narrow with a type guard",
            rationale = "as any hides the mismatch the compiler was reporting.",
            replace_with = "as unknown",
        ),
        rule!(
            id = "ts-non-null-assertion",
            category = RuntimeError,
            severity = Info,
            pattern = r"[\w)\]]!\.",
            description = "Non-null assertion used for member access",
            fix = "Use optional chaining or check for null first",
            rationale = "The assertion is erased at runtime and the access still throws on null.",
            correction = |m| match m.strip_suffix("!.") {
                Some(head) => format!("{}?.", head),
                None => m.to_string(),
            },
        ),
        rule!(
            id = "ts-interface-implements",
            category = Hallucination,
            severity = Critical,
            pattern = r"\binterface\s+\w+(?:<[^>]*>)?\s+implements\b",
            description = "Interfaces cannot implement other interfaces",
            fix = "Use extends",
            rationale = "implements is only valid on classes; the declaration does not compile.",
            correction = |m| m.replace("implements", "extends"),
        ),
        rule!(
            id = "ts-function-type",
            category = CodeQuality,
            severity = Info,
            pattern = r":\s*Function\b",
            description = "The Function type accepts any callable",
            fix = "Declare the call signature, e.g. (x: number) => void",
            rationale = "Function erases parameter and return types.",
            replace_with = ": (...args: unknown[]) => unknown",
        ),
        rule!(
            id = "ts-object-type",
            category = CodeQuality,
            severity = Info,
            pattern = r":\s*Object\b",
            description = "The Object type matches almost any value",
            fix = "Use a specific interface or Record<string, unknown>",
            rationale = "Object gives no useful member information.",
            replace_with = ": Record<string, unknown>",
        ),
        rule!(
            id = "ts-promise-any",
            category = CodeQuality,
            severity = Info,
            pattern = r"\bPromise<\s*any\s*>",
            description = "Promise<any> loses the resolved type",
            fix = "Give the promise its resolved type",
            rationale = "Every await on it produces an unchecked any.",
            replace_with = "Promise<unknown>",
        ),
    ]);
    rules
}
