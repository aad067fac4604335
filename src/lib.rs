//! Prompt Patcher: idempotent, rule-based insertion into prompt documents
//!
//! Each prompt document is a JSON object whose `instruction` field is a
//! natural-language template. A fixed, ordered set of rules inserts
//! structured blocks into that text, and re-running the set never changes an
//! already-patched document.
//!
//! # Architecture
//!
//! Every rule compiles down to one primitive, [`Insertion`]: a pure splice at
//! a byte offset. Intelligence lives in offset acquisition:
//!
//! - [`anchor`] locates literal headings (first occurrence, first candidate wins)
//! - [`guard`] skips a rule whose sentinel is already in the text
//! - [`rules`] binds sentinels, placements and payloads per document
//! - [`processor`] runs the rules in order over one document
//! - [`batch`] walks a directory and reports per-document status
//!
//! Payload text is configuration ([`config::Payloads`]), resolved once and
//! passed explicitly into the [`RuleSet`].
//!
//! # Example
//!
//! ```
//! use prompt_patcher::{FileProcessor, RuleSet};
//!
//! let processor = FileProcessor::new(RuleSet::default());
//! let text = "STEP 1 — QUESTIONS\n1. First question?\n";
//!
//! let first = processor.process_text("scope_statement.json", "Scope Statement", text).unwrap();
//! assert!(first.changed);
//!
//! let second = processor.process_text("scope_statement.json", "Scope Statement", &first.text).unwrap();
//! assert!(!second.changed);
//! assert_eq!(first.text, second.text);
//! ```

pub mod anchor;
pub mod batch;
pub mod config;
pub mod document;
pub mod edit;
pub mod guard;
pub mod logging;
pub mod processor;
pub mod rules;

// Re-exports
pub use anchor::Anchor;
pub use batch::{
    default_exclusions, Batch, BatchError, BatchSummary, FileReport, FileStatus,
    EXCLUDED_DOCUMENTS,
};
pub use config::{load_from_path, load_from_str, ConfigError, Payloads};
pub use document::{Document, DocumentError};
pub use edit::{insert, EditError, Insertion};
pub use guard::Sentinel;
pub use processor::{
    FileProcessor, ProcessError, ProcessOutcome, ProcessedFile, RuleError, WriteMode,
};
pub use rules::{Placement, Rule, RuleId, RuleOutcome, RulePlan, RuleSet};
