//! Probable-defect detection.
//!
//! Two passes run over the text: every defect pattern against the whole
//! text, then structural checks line by line. Findings come out in table
//! order, then document order.

use crate::catalog::constructs::BLOCK_KEYWORDS;
use crate::catalog::RuleCatalog;
use crate::common::line_of_offset;
use crate::core::{Diagnostic, Marker, Report, Severity};

pub const NO_ISSUES: &str = "No obvious issues found! Code looks clean.";

/// How aggressively leading whitespace is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentationCheck {
    /// Every indented, non-comment line is flagged. Prone to false
    /// positives on ordinary nested blocks.
    AllIndented,
    /// Only indentation mixing tabs with spaces, or using other whitespace
    /// characters, is flagged.
    MixedOnly,
}

impl IndentationCheck {
    pub fn from_flag(flag_all_indented_lines: bool) -> Self {
        if flag_all_indented_lines {
            Self::AllIndented
        } else {
            Self::MixedOnly
        }
    }
}

/// Scan `text` for probable mistakes. Never returns an empty report.
pub fn find_issues(catalog: &RuleCatalog, text: &str, indentation: IndentationCheck) -> Report {
    let mut issues = pattern_pass(catalog, text);
    issues.extend(structural_pass(text, indentation));

    if issues.is_empty() {
        issues.push(Diagnostic::new(Severity::Info, NO_ISSUES).with_marker(Marker::Ok));
    }

    Report::new(issues)
}

fn pattern_pass(catalog: &RuleCatalog, text: &str) -> Vec<Diagnostic> {
    catalog
        .defects()
        .iter()
        .flat_map(|rule| {
            rule.pattern().find_iter(text).map(move |m| {
                Diagnostic::new(Severity::Warning, rule.message())
                    .at_line(line_of_offset(text, m.start()))
                    .with_marker(Marker::Warning)
            })
        })
        .collect()
}

fn structural_pass(text: &str, indentation: IndentationCheck) -> Vec<Diagnostic> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut issues = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if has_suspicious_indentation(line, indentation) {
            issues.push(
                Diagnostic::new(Severity::Warning, "Mixed indentation detected")
                    .at_line(idx + 1)
                    .with_marker(Marker::Warning),
            );
        }
    }

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let stripped = line.trim();

        if is_missing_colon(stripped) {
            issues.push(
                Diagnostic::new(Severity::Warning, "Possibly missing colon ':'")
                    .at_line(line_no)
                    .with_marker(Marker::Warning),
            );
        }

        if assigns_to_underscore(stripped) {
            issues.push(
                Diagnostic::new(Severity::Info, "Underscore variable (intentionally unused)")
                    .at_line(line_no)
                    .with_marker(Marker::Idea),
            );
        }

        let upper = stripped.to_uppercase();
        if upper.contains("TODO") {
            issues.push(
                Diagnostic::new(Severity::Todo, "TODO comment found")
                    .at_line(line_no)
                    .with_marker(Marker::Note),
            );
        }
        if upper.contains("FIXME") {
            issues.push(
                Diagnostic::new(Severity::Fixme, "FIXME comment found")
                    .at_line(line_no)
                    .with_marker(Marker::Fix),
            );
        }
    }

    issues
}

fn has_suspicious_indentation(line: &str, indentation: IndentationCheck) -> bool {
    let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    let rest = &line[indent.len()..];
    if indent.is_empty() || rest.is_empty() || rest.starts_with('#') {
        return false;
    }

    match indentation {
        IndentationCheck::AllIndented => true,
        IndentationCheck::MixedOnly => {
            let odd_whitespace = indent.chars().any(|c| c != ' ' && c != '\t');
            let mixes = indent.contains(' ') && indent.contains('\t');
            odd_whitespace || mixes
        }
    }
}

/// A block-opening keyword followed by more text that ends in neither `:`
/// nor `,`.
fn is_missing_colon(stripped: &str) -> bool {
    let Some((keyword, rest)) = stripped.split_once(char::is_whitespace) else {
        return false;
    };
    BLOCK_KEYWORDS.contains(&keyword)
        && !rest.trim_start().is_empty()
        && !stripped.ends_with(':')
        && !stripped.ends_with(',')
}

fn assigns_to_underscore(stripped: &str) -> bool {
    stripped
        .split_once('=')
        .is_some_and(|(target, _)| target.trim() == "_")
}
