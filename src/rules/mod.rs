//! Idempotent insertion rules.
//!
//! A [`Rule`] combines one idempotency check, one anchor resolution and one
//! [`Insertion`]. Rules never fail on a missing anchor: they report
//! [`RuleOutcome::AnchorMissing`] and leave the text untouched.

pub mod registry;

pub use registry::{
    RuleSet, CRITICAL_PATH_DOCUMENT, ENGAGEMENT_CHARTER_DOCUMENT, FEE_STRUCTURE_DOCUMENT,
    PMO_PLAYBOOK_DOCUMENT, SCHEDULE_DOCUMENT,
};

use crate::anchor::{line_end, locate_after, Anchor};
use crate::edit::{EditError, Insertion};
use crate::guard::Sentinel;
use std::fmt;

/// Every rule the registry knows about, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    EngagementContext,
    ContextCheck,
    WorkbookRationalisation,
    FeeStructureQuestion,
    FeeStructureAdaptation,
    MethodologyQuestion,
    MethodologyAdaptation,
    ConsistencyAudit,
}

impl RuleId {
    pub const ALL: [RuleId; 8] = [
        RuleId::EngagementContext,
        RuleId::ContextCheck,
        RuleId::WorkbookRationalisation,
        RuleId::FeeStructureQuestion,
        RuleId::FeeStructureAdaptation,
        RuleId::MethodologyQuestion,
        RuleId::MethodologyAdaptation,
        RuleId::ConsistencyAudit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::EngagementContext => "engagement-context",
            RuleId::ContextCheck => "context-check",
            RuleId::WorkbookRationalisation => "workbook-rationalisation",
            RuleId::FeeStructureQuestion => "fee-structure-question",
            RuleId::FeeStructureAdaptation => "fee-structure-adaptation",
            RuleId::MethodologyQuestion => "methodology-question",
            RuleId::MethodologyAdaptation => "methodology-adaptation",
            RuleId::ConsistencyAudit => "consistency-audit",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a rule's payload lands relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Very start of the text
    Start,
    /// Immediately before the anchor
    Before(Anchor),
    /// After the line containing the anchor, separated by a blank line
    AfterLine(Anchor),
    /// At the start of the first line beginning with `line_prefix` after the anchor
    BeforeLine {
        anchor: Anchor,
        line_prefix: &'static str,
    },
}

impl Placement {
    /// Resolve this placement against `text`.
    ///
    /// Returns the insertion offset plus any separator that must precede the
    /// payload.
    pub fn resolve(&self, text: &str) -> Option<(usize, &'static str)> {
        match self {
            Placement::Start => Some((0, "")),
            Placement::Before(anchor) => anchor.locate(text).map(|offset| (offset, "")),
            Placement::AfterLine(anchor) => {
                let offset = anchor.locate(text)?;
                line_end(text, offset).map(|eol| (eol, "\n"))
            }
            Placement::BeforeLine {
                anchor,
                line_prefix,
            } => {
                let base = anchor.locate(text)?;
                let marker = format!("\n{line_prefix}");
                locate_after(text, base, &marker).map(|newline| (newline + 1, ""))
            }
        }
    }
}

/// Result of evaluating one rule against one document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Payload inserted at `offset`, growing the text by `bytes`
    Applied { offset: usize, bytes: usize },
    /// A sentinel was already present
    AlreadyApplied,
    /// No placement resolved; the rule does not apply to this text
    AnchorMissing,
}

impl RuleOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, RuleOutcome::Applied { .. })
    }
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOutcome::Applied { offset, bytes } => {
                write!(f, "inserted {bytes} bytes at offset {offset}")
            }
            RuleOutcome::AlreadyApplied => f.write_str("already applied"),
            RuleOutcome::AnchorMissing => f.write_str("anchor not found"),
        }
    }
}

/// What a rule would do to a given text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulePlan {
    Insert(Insertion),
    AlreadyApplied,
    AnchorMissing,
}

/// A concrete rule, materialised for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: RuleId,
    /// Any of these present means the rule has already run
    pub sentinels: Vec<Sentinel>,
    /// Tried in order; the first that resolves is used
    pub placements: Vec<Placement>,
    pub payload: String,
}

impl Rule {
    pub fn plan(&self, text: &str) -> RulePlan {
        if self.sentinels.iter().any(|s| s.already_applied(text)) {
            return RulePlan::AlreadyApplied;
        }

        let Some((offset, separator)) = self.placements.iter().find_map(|p| p.resolve(text))
        else {
            return RulePlan::AnchorMissing;
        };

        let mut payload = String::with_capacity(separator.len() + self.payload.len());
        payload.push_str(separator);
        payload.push_str(&self.payload);
        RulePlan::Insert(Insertion::new(offset, payload))
    }

    /// Apply this rule to `text`, handing the text back unchanged on a no-op.
    pub fn apply(&self, text: String) -> Result<(String, RuleOutcome), EditError> {
        match self.plan(&text) {
            RulePlan::Insert(insertion) => {
                let patched = insertion.apply(&text)?;
                let outcome = RuleOutcome::Applied {
                    offset: insertion.offset,
                    bytes: insertion.len(),
                };
                Ok((patched, outcome))
            }
            RulePlan::AlreadyApplied => Ok((text, RuleOutcome::AlreadyApplied)),
            RulePlan::AnchorMissing => Ok((text, RuleOutcome::AnchorMissing)),
        }
    }
}
