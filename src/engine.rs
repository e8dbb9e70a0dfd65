//! The service object hosts talk to.
//!
//! A [`CodeAssistant`] owns nothing mutable: it bundles the shared rule
//! catalog with the analyzers configured from it, and every call recomputes
//! its answer from the supplied text.

use crate::analyzers::docstring::{synthesize_docstring, synthesize_module_docstring};
use crate::analyzers::{Analyzer, IndentationCheck, IssueDetector, LineClassifier, RefactorAdvisor};
use crate::catalog::{RuleCatalog, SymbolRegistry};
use crate::chat;
use crate::completion::{prefix_at, CompletionIndex};
use crate::config::{CodecatConfig, ThresholdsConfig};
use crate::core::{CompletionEntry, Diagnostic, Marker, Report, Result, Severity};
use crate::formatting::FormattingConfig;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Host-triggered actions that operate on a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Explain,
    Debug,
    Refactor,
    Docstring,
}

impl Action {
    fn empty_selection_hint(&self) -> &'static str {
        match self {
            Action::Docstring => "Select a function or class first!",
            _ => "Select some code first!",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Explain => "explain",
            Action::Debug => "debug",
            Action::Refactor => "refactor",
            Action::Docstring => "docstring",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone)]
pub struct CodeAssistant {
    catalog: Arc<RuleCatalog>,
    explainer: LineClassifier,
    detector: IssueDetector,
    advisor: RefactorAdvisor,
    completions: CompletionIndex,
    formatting: FormattingConfig,
}

impl Default for CodeAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeAssistant {
    /// Built-in tables, default thresholds, Python registry.
    pub fn new() -> Self {
        Self::assemble(
            RuleCatalog::builtin(),
            SymbolRegistry::python(),
            ThresholdsConfig::default(),
            IndentationCheck::AllIndented,
        )
    }

    /// Build from a loaded configuration. Fails only when a custom defect
    /// pattern does not compile.
    pub fn from_config(config: &CodecatConfig) -> Result<Self> {
        let issues = config.issues();
        let catalog = if issues.extra_rules.is_empty() {
            RuleCatalog::builtin()
        } else {
            let extra = issues
                .extra_rules
                .iter()
                .map(|rule| (rule.pattern.as_str(), rule.message.as_str()));
            Arc::new(RuleCatalog::with_extra_defects(extra)?)
        };

        let output = config.output();
        let mut assistant = Self::assemble(
            catalog,
            SymbolRegistry::python(),
            config.thresholds(),
            IndentationCheck::from_flag(issues.flag_all_indented_lines),
        );
        assistant.completions = assistant
            .completions
            .with_limit(config.completion().effective_limit());
        assistant.formatting = FormattingConfig::new(output.color, output.emoji);

        tracing::debug!(
            defect_rules = assistant.catalog.defects().len(),
            flag_all_indented_lines = issues.flag_all_indented_lines,
            "code assistant configured"
        );
        Ok(assistant)
    }

    fn assemble(
        catalog: Arc<RuleCatalog>,
        registry: SymbolRegistry,
        thresholds: ThresholdsConfig,
        indentation: IndentationCheck,
    ) -> Self {
        Self {
            explainer: LineClassifier::new(Arc::clone(&catalog)),
            detector: IssueDetector::new(Arc::clone(&catalog), indentation),
            advisor: RefactorAdvisor::new(thresholds),
            completions: CompletionIndex::new(Arc::clone(&catalog), registry),
            formatting: FormattingConfig::default(),
            catalog,
        }
    }

    /// Swap the reserved-word and built-in sources used by completion.
    pub fn with_registry(mut self, registry: SymbolRegistry) -> Self {
        self.completions = CompletionIndex::new(Arc::clone(&self.catalog), registry);
        self
    }

    pub fn with_formatting(mut self, formatting: FormattingConfig) -> Self {
        self.formatting = formatting;
        self
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn formatting(&self) -> FormattingConfig {
        self.formatting
    }

    fn use_emoji(&self) -> bool {
        self.formatting.use_emoji()
    }

    fn run_analyzer(&self, analyzer: &dyn Analyzer, text: &str) -> Report {
        let start = Instant::now();
        let report = analyzer.analyze(text);
        tracing::debug!(
            analyzer = analyzer.name(),
            bytes = text.len(),
            findings = report.lines.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "analysis complete"
        );
        report
    }

    pub fn explain_report(&self, text: &str) -> Report {
        self.run_analyzer(&self.explainer, text)
    }

    pub fn find_issues_report(&self, text: &str) -> Report {
        self.run_analyzer(&self.detector, text)
    }

    pub fn suggest_refactors_report(&self, text: &str) -> Report {
        self.run_analyzer(&self.advisor, text)
    }

    /// Line-by-line narration followed by definition and import counts.
    pub fn explain(&self, text: &str) -> String {
        self.explain_report(text).render(self.use_emoji())
    }

    pub fn find_issues(&self, text: &str) -> String {
        self.find_issues_report(text).render(self.use_emoji())
    }

    pub fn suggest_refactors(&self, text: &str) -> String {
        self.suggest_refactors_report(text).render(self.use_emoji())
    }

    pub fn synthesize_docstring(&self, header_or_selection: &str) -> String {
        synthesize_docstring(header_or_selection)
    }

    pub fn module_docstring(&self, description: &str, author: &str, date: &str) -> String {
        synthesize_module_docstring(description, author, date)
    }

    pub fn complete(&self, prefix: &str) -> Vec<CompletionEntry> {
        self.completions.complete(prefix)
    }

    /// Complete the word ending at the cursor. No word, no candidates.
    pub fn complete_at(&self, line_before_cursor: &str) -> Vec<CompletionEntry> {
        prefix_at(line_before_cursor)
            .map(|prefix| self.complete(prefix))
            .unwrap_or_default()
    }

    pub fn chat(&self, message: &str) -> String {
        chat::chat(&self.catalog, message).render(self.use_emoji())
    }

    /// Dispatch one of the selection-based actions the way an editor's
    /// menu or toolbar would.
    pub fn run_action(&self, action: Action, selection: &str) -> String {
        if selection.trim().is_empty() {
            tracing::debug!(%action, "empty selection");
            return Diagnostic::new(Severity::Warning, action.empty_selection_hint())
                .with_marker(Marker::Warning)
                .render(self.use_emoji());
        }

        match action {
            Action::Explain => self.explain(selection),
            Action::Debug => self.find_issues(selection),
            Action::Refactor => self.suggest_refactors(selection),
            Action::Docstring => format!(
                "{} Docstring:\n{}",
                Marker::Docstring.render(self.use_emoji()),
                self.synthesize_docstring(selection)
            ),
        }
    }
}
