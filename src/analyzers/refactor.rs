//! Structural smells: long functions, deep nesting, magic numbers,
//! duplicated lines and loop-append patterns.

use crate::common::indent_width;
use crate::config::ThresholdsConfig;
use crate::core::{Diagnostic, Marker, Report, Severity};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static FUNCTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:async\s+)?def\s+(\w+)").unwrap());
static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]{2,}\b").unwrap());
static FOR_IN_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"for\s+\w+\s+in.*:\s*$").unwrap());

pub const WELL_STRUCTURED: &str = "Code looks well-structured!";

/// Run every refactor check over `text`. Never returns an empty report.
pub fn suggest_refactors(text: &str, thresholds: &ThresholdsConfig) -> Report {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut suggestions = detect_long_functions(&lines, thresholds.max_function_lines);
    suggestions.extend(detect_deep_nesting(&lines, thresholds.max_indent_width));
    suggestions.extend(detect_magic_numbers(text, thresholds.magic_number_preview));
    suggestions.extend(detect_duplicate_lines(
        &lines,
        thresholds.duplicate_min_length,
    ));
    suggestions.extend(detect_append_loops(&lines));

    if suggestions.is_empty() {
        suggestions
            .push(Diagnostic::new(Severity::Info, WELL_STRUCTURED).with_marker(Marker::Sparkle));
    }

    Report::new(suggestions)
}

fn suggestion(marker: Marker, text: String) -> Diagnostic {
    Diagnostic::new(Severity::Suggestion, text).with_marker(marker)
}

/// A function is measured from its header to the next header, or to the
/// end of the text for the last one.
pub fn detect_long_functions(lines: &[&str], max_lines: usize) -> Vec<Diagnostic> {
    let mut smells = Vec::new();
    let mut open: Option<(usize, &str)> = None;

    let close = |start: usize, name: &str, end: usize, smells: &mut Vec<Diagnostic>| {
        let span = end - start;
        if span >= max_lines {
            smells.push(suggestion(
                Marker::Length,
                format!("Function '{name}' is {span} lines - consider splitting"),
            ));
        }
    };

    for (idx, line) in lines.iter().enumerate() {
        if let Some(caps) = FUNCTION_HEADER.captures(line) {
            if let Some((start, name)) = open {
                close(start, name, idx, &mut smells);
            }
            let name = caps.get(1).map_or("unknown", |m| m.as_str());
            open = Some((idx, name));
        }
    }

    if let Some((start, name)) = open {
        close(start, name, lines.len(), &mut smells);
    }

    smells
}

pub fn detect_deep_nesting(lines: &[&str], max_indent_width: usize) -> Option<Diagnostic> {
    let deepest = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_width(line))
        .max()
        .unwrap_or(0);

    (deepest > max_indent_width).then(|| {
        suggestion(
            Marker::Nesting,
            "Deep nesting detected - consider extracting helper functions".to_string(),
        )
    })
}

/// Numeric tokens of two or more digits that are not glued to a quote.
pub fn magic_numbers(text: &str) -> Vec<&str> {
    let is_quote = |c: char| c == '"' || c == '\'';
    NUMBER_TOKEN
        .find_iter(text)
        .filter(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(is_quote) && !after.is_some_and(is_quote)
        })
        .map(|m| m.as_str())
        .collect()
}

pub fn detect_magic_numbers(text: &str, preview: usize) -> Option<Diagnostic> {
    let mut seen = HashSet::new();
    let distinct: Vec<&str> = magic_numbers(text)
        .into_iter()
        .filter(|number| seen.insert(*number))
        .take(preview)
        .collect();

    (!distinct.is_empty()).then(|| {
        suggestion(
            Marker::Numbers,
            format!(
                "Magic numbers found ({}) - consider using constants",
                distinct.join(", ")
            ),
        )
    })
}

/// One suggestion no matter how many distinct lines repeat.
pub fn detect_duplicate_lines(lines: &[&str], min_length: usize) -> Option<Diagnostic> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for line in lines {
        let stripped = line.trim();
        if stripped.chars().count() > min_length && !stripped.starts_with('#') {
            *counts.entry(stripped).or_default() += 1;
        }
    }

    counts.values().any(|&count| count > 1).then(|| {
        suggestion(
            Marker::Duplicate,
            "Potential duplicate code found - consider extracting to function".to_string(),
        )
    })
}

/// `for x in y:` immediately followed by a line calling `.append(`.
pub fn detect_append_loops(lines: &[&str]) -> Vec<Diagnostic> {
    lines
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| FOR_IN_HEADER.is_match(pair[0].trim()) && pair[1].contains(".append("))
        .map(|(idx, _)| {
            suggestion(
                Marker::Idea,
                "Loop with append - could use list comprehension".to_string(),
            )
            .at_line(idx + 1)
        })
        .collect()
}
