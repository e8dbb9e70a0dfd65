//! Documentation skeletons for function and class headers.
//!
//! Only the block itself is produced; indentation and insertion point are
//! the caller's business.

use crate::catalog::templates::{
    DESCRIPTION_PLACEHOLDER, FALLBACK_DOCSTRING, RETURNS_NONE, RETURNS_VALUE,
    SECTION_ENTRY_INDENT,
};
use crate::common::{split_top_level, title_case};
use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:async\s+)?def\s+(\w+)\s*\(([^)]*)\)").unwrap());
static CLASS_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^class\s+(\w+)").unwrap());
static RETURN_STATEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\breturn\b").unwrap());

/// Implicit receiver parameters that are never documented.
const RECEIVERS: &[&str] = &["self", "cls"];

/// One documented parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub annotation: Option<String>,
}

impl Param {
    fn render(&self) -> String {
        match &self.annotation {
            Some(annotation) => format!(
                "{SECTION_ENTRY_INDENT}{} ({annotation}): {DESCRIPTION_PLACEHOLDER}",
                self.name
            ),
            None => format!("{SECTION_ENTRY_INDENT}{}: {DESCRIPTION_PLACEHOLDER}", self.name),
        }
    }
}

/// What the first line of a selection was recognised as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    Function {
        name: String,
        params: Vec<Param>,
        returns_value: bool,
    },
    Class {
        name: String,
    },
    Unknown,
}

/// Recognise the header at the start of `code`. `return` anywhere in `code`
/// marks a function as returning a value.
pub fn parse_header(code: &str) -> Header {
    let code_start = code.trim();

    if let Some(caps) = FUNCTION_HEADER.captures(code_start) {
        let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let params = caps.get(2).map_or("", |m| m.as_str());
        return Header::Function {
            name,
            params: parse_params(params),
            returns_value: RETURN_STATEMENT.is_match(code),
        };
    }

    if let Some(caps) = CLASS_HEADER.captures(code_start) {
        return Header::Class {
            name: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        };
    }

    Header::Unknown
}

/// Split a parameter list into documented parameters: receivers are
/// skipped, defaults dropped, annotations kept.
pub fn parse_params(params: &str) -> Vec<Param> {
    split_top_level(params, ',')
        .into_iter()
        .map(str::trim)
        .filter(|param| !param.is_empty() && !RECEIVERS.contains(param))
        .map(|param| match param.split_once(':') {
            Some((name, rest)) => {
                let annotation = rest.split('=').next().unwrap_or_default().trim();
                Param {
                    name: name.trim().to_string(),
                    annotation: Some(annotation.to_string()),
                }
            }
            None => Param {
                name: param.split('=').next().unwrap_or_default().trim().to_string(),
                annotation: None,
            },
        })
        .collect()
}

/// Documentation block for the header at the start of `code`.
pub fn synthesize_docstring(code: &str) -> String {
    match parse_header(code) {
        Header::Function {
            name,
            params,
            returns_value,
        } => function_docstring(&name, &params, returns_value),
        Header::Class { name } => class_docstring(&name),
        Header::Unknown => FALLBACK_DOCSTRING.to_string(),
    }
}

fn function_docstring(name: &str, params: &[Param], returns_value: bool) -> String {
    let args = if params.is_empty() {
        format!("{SECTION_ENTRY_INDENT}None")
    } else {
        params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join("\n")
    };
    let returns = if returns_value {
        RETURNS_VALUE
    } else {
        RETURNS_NONE
    };
    let title = title_case(&name.replace('_', " "));

    format!(
        "\"\"\"\n    {title}\n    \n    Args:\n{args}\n    \n    Returns:\n{SECTION_ENTRY_INDENT}{returns}\n    \"\"\""
    )
}

fn class_docstring(name: &str) -> String {
    format!(
        "\"\"\"\n    {name} class.\n    \n    Attributes:\n{SECTION_ENTRY_INDENT}attr: {DESCRIPTION_PLACEHOLDER}\n    \"\"\""
    )
}

/// Module-level block. `date` is supplied by the caller so the output stays
/// a pure function of the arguments.
pub fn synthesize_module_docstring(description: &str, author: &str, date: &str) -> String {
    format!("\"\"\"\n{description}\n\nAuthor: {author}\nDate: {date}\n\"\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_function_with_return() {
        let doc = synthesize_docstring("def add(a, b):\n    return a + b");
        assert_eq!(
            doc,
            "\"\"\"\n    Add\n    \n    Args:\n        a: Description\n        b: Description\n    \n    Returns:\n        Description of return value\n    \"\"\""
        );
    }

    #[test]
    fn test_method_skips_receiver_and_keeps_annotations() {
        let params = parse_params("self, path: str, mode: str = 'r', retries=3");
        assert_eq!(
            params,
            vec![
                Param {
                    name: "path".into(),
                    annotation: Some("str".into())
                },
                Param {
                    name: "mode".into(),
                    annotation: Some("str".into())
                },
                Param {
                    name: "retries".into(),
                    annotation: None
                },
            ]
        );
    }

    #[test]
    fn test_generic_annotation_is_not_split() {
        let params = parse_params("cls, mapping: Dict[str, int]");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].annotation.as_deref(), Some("Dict[str, int]"));
    }

    #[test]
    fn test_no_params_and_no_return() {
        let doc = synthesize_docstring("def reset_all_counters():");
        assert!(doc.contains("    Reset All Counters\n"));
        assert!(doc.contains("    Args:\n        None\n"));
        assert!(doc.contains("    Returns:\n        None\n"));
    }

    #[test]
    fn test_async_function_header() {
        assert!(matches!(
            parse_header("async def fetch(url):"),
            Header::Function { ref name, .. } if name == "fetch"
        ));
    }

    #[test]
    fn test_class_header() {
        assert_eq!(
            synthesize_docstring("class Inventory(Base):"),
            "\"\"\"\n    Inventory class.\n    \n    Attributes:\n        attr: Description\n    \"\"\""
        );
    }

    #[test]
    fn test_unrecognised_header_falls_back() {
        assert_eq!(synthesize_docstring("x = 1"), FALLBACK_DOCSTRING);
        assert_eq!(synthesize_docstring("def broken(a, b"), FALLBACK_DOCSTRING);
        assert_eq!(synthesize_docstring(""), FALLBACK_DOCSTRING);
    }

    #[test]
    fn test_module_docstring() {
        assert_eq!(
            synthesize_module_docstring("Inventory helpers.", "Ada", "2026-01-02"),
            "\"\"\"\nInventory helpers.\n\nAuthor: Ada\nDate: 2026-01-02\n\"\"\""
        );
    }
}
