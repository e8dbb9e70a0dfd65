//! Line-by-line narration of a code span.

use crate::catalog::constructs::CONDITIONAL_KEYWORDS;
use crate::catalog::{ConstructKind, RuleCatalog};
use crate::core::{Diagnostic, Marker, Report, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

static DEFINITION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:def|class)\s+(\w+)").unwrap());
static FUNCTION_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdef\s+\w+").unwrap());
static CLASS_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bclass\s+\w+").unwrap());
static IMPORT_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(?:import|from)\s+").unwrap());

pub const BASIC_STATEMENTS: &str = "This code block contains basic Python statements.";

/// Definition and import totals for a span, counted over the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanSummary {
    pub functions: usize,
    pub classes: usize,
    pub imports: usize,
}

impl SpanSummary {
    pub fn of(text: &str) -> Self {
        Self {
            functions: FUNCTION_COUNT.find_iter(text).count(),
            classes: CLASS_COUNT.find_iter(text).count(),
            imports: IMPORT_COUNT.find_iter(text).count(),
        }
    }

    fn to_diagnostic(self) -> Diagnostic {
        Diagnostic::new(
            Severity::Info,
            format!(
                "Summary: {} functions, {} classes, {} imports",
                self.functions, self.classes, self.imports
            ),
        )
        .with_marker(Marker::Stats)
    }
}

/// Annotate each meaningful line of `text`, then append definition and
/// import totals.
pub fn explain(catalog: &RuleCatalog, text: &str) -> Report {
    let mut lines: Vec<Diagnostic> = text
        .split('\n')
        .enumerate()
        .filter_map(|(idx, line)| classify_line(catalog, line).map(|d| d.at_line(idx + 1)))
        .collect();

    if lines.is_empty() {
        lines.push(Diagnostic::new(Severity::Info, BASIC_STATEMENTS));
    }

    Report::new(lines).with_summary(SpanSummary::of(text).to_diagnostic())
}

/// Describe a single line, or `None` for blank lines, comments and
/// anything unrecognised.
pub fn classify_line(catalog: &RuleCatalog, line: &str) -> Option<Diagnostic> {
    let stripped = line.trim();
    if stripped.is_empty() || stripped.starts_with('#') {
        return None;
    }

    if let Some(rule) = catalog.constructs().iter().find(|rule| rule.matches(stripped)) {
        // a definition without a readable name is skipped, never narrated
        let text = match rule.kind {
            ConstructKind::Definition => {
                format!("{} '{}'", rule.description, definition_name(stripped)?)
            }
            ConstructKind::Statement => rule.description.to_string(),
        };
        return Some(Diagnostic::new(Severity::Info, text));
    }

    classify_assignment(stripped).map(|text| Diagnostic::new(Severity::Info, text))
}

fn definition_name(stripped: &str) -> Option<&str> {
    DEFINITION_NAME
        .captures(stripped)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn classify_assignment(stripped: &str) -> Option<String> {
    if !stripped.contains('=') || stripped.starts_with("==") || starts_with_conditional(stripped)
    {
        return None;
    }

    if stripped.contains(":=") {
        return Some("Walrus operator assignment".to_string());
    }
    if ["+=", "-=", "*="].iter().any(|op| stripped.contains(op)) {
        return Some("Augmented assignment".to_string());
    }
    if is_comparison(stripped) {
        return None;
    }

    let target = stripped.split('=').next().unwrap_or_default().trim();
    Some(format!("Variable assignment '{target}'"))
}

fn starts_with_conditional(stripped: &str) -> bool {
    CONDITIONAL_KEYWORDS.iter().any(|keyword| {
        stripped
            .strip_prefix(keyword)
            .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'))
    })
}

fn is_comparison(stripped: &str) -> bool {
    ["==", "!=", "<=", ">="].iter().any(|op| stripped.contains(op))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        explain(&RuleCatalog::builtin(), text).render(true)
    }

    #[test]
    fn test_named_definitions() {
        let out = render("def add(a, b):\n    return a + b\nclass Point:\n    pass");
        assert_eq!(
            out,
            indoc! {"
                Line 1: Function definition 'add'
                Line 2: Return statement
                Line 3: Class definition 'Point'
                📊 Summary: 1 functions, 1 classes, 0 imports"}
        );
    }

    #[test]
    fn test_assignment_kinds() {
        let out = render("if (n := 10) > 5:\ntotal += 1\ncount = 0\nx == y");
        assert!(out.contains("Line 1: Conditional statement"));
        assert!(out.contains("Line 2: Augmented assignment"));
        assert!(out.contains("Line 3: Variable assignment 'count'"));
        assert!(!out.contains("Line 4"));
    }

    #[test]
    fn test_walrus_outside_conditional() {
        assert!(render("print(y := 3)").contains("Line 1: Walrus operator assignment"));
    }

    #[test]
    fn test_identifier_starting_with_if_is_still_assignment() {
        assert!(render("iffy = 1").contains("Line 1: Variable assignment 'iffy'"));
    }

    #[test]
    fn test_comments_and_blanks_are_skipped_but_numbered() {
        let out = render("# header\n\nimport os");
        assert!(out.starts_with("Line 3: Module import"));
    }

    #[test]
    fn test_unnamed_definition_is_not_narrated() {
        assert_eq!(
            render("def (broken"),
            format!("{BASIC_STATEMENTS}\n📊 Summary: 0 functions, 0 classes, 0 imports")
        );
        // the assignment check does not run for a matched construct either
        assert!(!render("class = 3").contains("Variable assignment"));
    }

    #[test]
    fn test_fallback_for_plain_statements() {
        let out = render("print('hi')\npass");
        assert_eq!(
            out,
            format!("{BASIC_STATEMENTS}\n📊 Summary: 0 functions, 0 classes, 0 imports")
        );
    }

    #[test]
    fn test_summary_counts_nested_definitions() {
        let summary = SpanSummary::of("import os\nfrom x import y\n  import z\nclass A:\n    def f(self): pass\n    def g(self): pass");
        assert_eq!(
            summary,
            SpanSummary {
                functions: 2,
                classes: 1,
                imports: 2,
            }
        );
    }

    #[test]
    fn test_empty_input_is_fallback() {
        let report = explain(&RuleCatalog::builtin(), "");
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].text, BASIC_STATEMENTS);
    }
}
