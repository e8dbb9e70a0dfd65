/// Probable-mistake patterns and the warning each one raises.
///
/// Every occurrence of every pattern is reported, in table order.
pub const DEFECT_PATTERNS: &[(&str, &str)] = &[
    (
        r#"print\s+["']"#,
        "print() needs parentheses in Python 3",
    ),
    (
        r"except\s*:",
        "Bare except catches all exceptions - specify exception type",
    ),
    (r"==\s*None", r#"Use "is None" instead of "== None""#),
    (r"!=\s*None", r#"Use "is not None" instead of "!= None""#),
    (
        r"type\([^)]+\)\s*==",
        "Use isinstance() instead of type() comparison",
    ),
    (
        r"\[\s*\]\s*=\s*\[\s*\]",
        "Mutable default argument - use None instead",
    ),
    (
        r"except\s+Exception\s*,",
        r#"Old except syntax - use "except Exception as e:""#,
    ),
    (
        r"range\(len\(",
        "Consider using enumerate() instead of range(len())",
    ),
];
