pub mod docstring;
pub mod explain;
pub mod issues;
pub mod refactor;

use crate::catalog::RuleCatalog;
use crate::config::ThresholdsConfig;
use crate::core::Report;
use std::sync::Arc;

pub use issues::IndentationCheck;

/// A whole-span analysis that produces a report.
///
/// Implementations are stateless between calls: the same text always yields
/// the same report.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Report;
    fn name(&self) -> &'static str;
}

/// Narrates a span line by line ("explain").
#[derive(Debug, Clone)]
pub struct LineClassifier {
    catalog: Arc<RuleCatalog>,
}

impl LineClassifier {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }
}

impl Analyzer for LineClassifier {
    fn analyze(&self, text: &str) -> Report {
        explain::explain(&self.catalog, text)
    }

    fn name(&self) -> &'static str {
        "explain"
    }
}

/// Flags probable defects ("debug").
#[derive(Debug, Clone)]
pub struct IssueDetector {
    catalog: Arc<RuleCatalog>,
    indentation: IndentationCheck,
}

impl IssueDetector {
    pub fn new(catalog: Arc<RuleCatalog>, indentation: IndentationCheck) -> Self {
        Self {
            catalog,
            indentation,
        }
    }
}

impl Analyzer for IssueDetector {
    fn analyze(&self, text: &str) -> Report {
        issues::find_issues(&self.catalog, text, self.indentation)
    }

    fn name(&self) -> &'static str {
        "debug"
    }
}

/// Suggests structural refactors.
#[derive(Debug, Clone)]
pub struct RefactorAdvisor {
    thresholds: ThresholdsConfig,
}

impl RefactorAdvisor {
    pub fn new(thresholds: ThresholdsConfig) -> Self {
        Self { thresholds }
    }
}

impl Analyzer for RefactorAdvisor {
    fn analyze(&self, text: &str) -> Report {
        refactor::suggest_refactors(text, &self.thresholds)
    }

    fn name(&self) -> &'static str {
        "refactor"
    }
}
