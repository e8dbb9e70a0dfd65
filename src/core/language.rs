use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source language inferred from a file extension.
///
/// Only Python is understood by the rule tables; the rest exist so a host can
/// label a buffer and warn before running Python heuristics on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    C,
    CFamily,
    Cpp,
    Java,
    JavaScript,
    TypeScript,
    Html,
    Css,
    Json,
    Xml,
    Shell,
    Batch,
    Markdown,
    Yaml,
    Text,
}

const EXTENSIONS: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("pyw", Language::Python),
    ("c", Language::C),
    ("h", Language::CFamily),
    ("cpp", Language::Cpp),
    ("hpp", Language::Cpp),
    ("java", Language::Java),
    ("js", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("html", Language::Html),
    ("css", Language::Css),
    ("json", Language::Json),
    ("xml", Language::Xml),
    ("sh", Language::Shell),
    ("bat", Language::Batch),
    ("md", Language::Markdown),
    ("txt", Language::Text),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
];

impl Language {
    /// Look up a language by extension, case-insensitively. Unknown
    /// extensions and extensionless paths map to `Text`.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .and_then(|ext| {
                EXTENSIONS
                    .iter()
                    .find(|(candidate, _)| *candidate == ext)
                    .map(|(_, language)| *language)
            })
            .unwrap_or(Language::Text)
    }

    /// Get the display name for this language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::C => "C",
            Language::CFamily => "C/C++",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Shell => "Shell",
            Language::Batch => "Batch",
            Language::Markdown => "Markdown",
            Language::Yaml => "YAML",
            Language::Text => "Text",
        }
    }

    pub fn is_python(&self) -> bool {
        matches!(self, Language::Python)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_extensions() {
        assert_eq!(Language::from_path(Path::new("app.py")), Language::Python);
        assert_eq!(Language::from_path(Path::new("gui.PYW")), Language::Python);
    }

    #[test]
    fn test_header_is_shared_c_family() {
        assert_eq!(Language::from_path(Path::new("x.h")).display_name(), "C/C++");
    }

    #[test]
    fn test_unknown_extension_is_text() {
        assert_eq!(Language::from_path(Path::new("Makefile")), Language::Text);
        assert_eq!(Language::from_path(Path::new("a.rs")), Language::Text);
    }
}
