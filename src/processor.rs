//! Applies the full rule set to one document.

use crate::document::{Document, DocumentError};
use crate::edit::EditError;
use crate::rules::{RuleId, RuleOutcome, RuleSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Whether a processed document may be written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    /// Evaluate every rule, never touch storage
    DryRun,
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("{file}: {source}")]
    Rule { file: PathBuf, source: RuleError },
}

/// A rule resolved an offset the insertion primitive rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Rule {rule} produced an invalid edit: {source}")]
pub struct RuleError {
    pub rule: RuleId,
    pub source: EditError,
}

/// Result of one rule-set pass over an instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "ProcessOutcome carries the patched text"]
pub struct ProcessOutcome {
    pub text: String,
    /// True if at least one rule inserted its payload
    pub changed: bool,
    pub outcomes: Vec<(RuleId, RuleOutcome)>,
}

impl ProcessOutcome {
    pub fn applied(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.changed())
            .map(|(id, _)| *id)
    }
}

/// A document after processing, with its original instruction for diffing.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub document: Document,
    pub original: String,
    pub outcome: ProcessOutcome,
    /// Whether the document was persisted
    pub written: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FileProcessor {
    rules: RuleSet,
}

impl FileProcessor {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run every applicable rule, in order, against `document`'s instruction.
    ///
    /// Each rule sees the text as left by the rules before it.
    pub fn process(&self, document: &Document) -> Result<ProcessOutcome, RuleError> {
        self.process_text(document.name(), &document.label(), document.instruction())
    }

    pub fn process_text(
        &self,
        name: &str,
        label: &str,
        instruction: &str,
    ) -> Result<ProcessOutcome, RuleError> {
        let mut text = instruction.to_string();
        let mut changed = false;
        let mut outcomes = Vec::new();

        for rule in self.rules.rules_for(name, label) {
            let (next, outcome) = rule.apply(text).map_err(|source| RuleError {
                rule: rule.id,
                source,
            })?;
            debug!(document = name, rule = %rule.id, %outcome, "evaluated rule");
            text = next;
            changed |= outcome.changed();
            outcomes.push((rule.id, outcome));
        }

        Ok(ProcessOutcome {
            text,
            changed,
            outcomes,
        })
    }

    /// Load, process and (in [`WriteMode::Write`]) persist the document at `path`.
    ///
    /// Nothing is written unless some rule fired.
    pub fn process_path(
        &self,
        path: impl AsRef<Path>,
        mode: WriteMode,
    ) -> Result<ProcessedFile, ProcessError> {
        let path = path.as_ref();
        let mut document = Document::load(path)?;
        let original = document.instruction().to_string();

        let outcome = self
            .process(&document)
            .map_err(|source| ProcessError::Rule {
                file: path.to_path_buf(),
                source,
            })?;

        let written = outcome.changed && mode == WriteMode::Write;
        if outcome.changed {
            document.set_instruction(outcome.text.clone());
        }
        if written {
            document.save()?;
            info!(
                document = document.name(),
                rules = outcome.applied().count(),
                "updated document"
            );
        }

        Ok(ProcessedFile {
            document,
            original,
            outcome,
            written,
        })
    }
}
