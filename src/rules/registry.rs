//! Document name → ordered rule list, resolved once from the payload table.

use crate::anchor::Anchor;
use crate::config::Payloads;
use crate::guard::Sentinel;
use crate::rules::{Placement, Rule, RuleId};
use std::collections::BTreeMap;

pub const ENGAGEMENT_CHARTER_DOCUMENT: &str = "engagement_charter.json";
pub const FEE_STRUCTURE_DOCUMENT: &str = "budget_cost_baseline.json";
pub const SCHEDULE_DOCUMENT: &str = "schedule_milestones.json";
pub const CRITICAL_PATH_DOCUMENT: &str = "critical_path.json";
pub const PMO_PLAYBOOK_DOCUMENT: &str = "pmo_playbook.json";

pub const ENGAGEMENT_CONTEXT_SENTINEL: Sentinel = Sentinel("ENGAGEMENT CONTEXT");
pub const CONTEXT_CHECK_SENTINEL: Sentinel = Sentinel("CONTEXT CHECK");
pub const WORKBOOK_SENTINEL: Sentinel = Sentinel("WORKBOOK RATIONALISATION");
/// Present when a document declares it has no workbook section at all
pub const NO_WORKBOOK_SENTINEL: Sentinel = Sentinel("NOTE: The Engagement Charter");
pub const FEE_QUESTION_SENTINEL: Sentinel = Sentinel("Fee Structure Confirmation");
pub const FEE_ADAPTATION_SENTINEL: Sentinel = Sentinel("FEE STRUCTURE ADAPTATION");
pub const METHODOLOGY_QUESTION_SENTINEL: Sentinel = Sentinel("Delivery Methodology Confirmation");
pub const SCHEDULE_ADAPTATION_SENTINEL: Sentinel = Sentinel("METHODOLOGY ADAPTATION — SCHEDULE");
pub const CRITICAL_PATH_ADAPTATION_SENTINEL: Sentinel =
    Sentinel("METHODOLOGY ADAPTATION — CRITICAL PATH");
pub const CONSISTENCY_AUDIT_SENTINEL: Sentinel = Sentinel("CROSS-DOCUMENT CONSISTENCY AUDIT");

const STEP_ONE: Anchor = Anchor::FirstOf(&["STEP 1 —", "STEP 1:"]);
const STEP_ONE_QUESTIONS: Anchor = Anchor::Literal("STEP 1 —");
const WORKBOOK_SECTION: Anchor =
    Anchor::FirstOf(&["EXCEL WORKBOOK STRUCTURE", "PWC FORMATTING STANDARDS FOR EXCEL"]);
const STEP_THREE: Anchor = Anchor::Literal("STEP 3");
const BUILD_STEP: Anchor = Anchor::FirstOf(&["STEP 3 — BUILD", "STEP 3 —"]);
const CONSOLIDATION_REVIEW: Anchor = Anchor::Literal("STEP 1 — CONSOLIDATION REVIEW");

/// Line start the question rules insert in front of.
pub const QUESTION_LINE_PREFIX: &str = "1. ";

const FIRST_QUESTION: Placement = Placement::BeforeLine {
    anchor: STEP_ONE_QUESTIONS,
    line_prefix: QUESTION_LINE_PREFIX,
};

/// Every literal a placement can resolve against. A payload carrying one
/// would give a rule that missed on one run a foothold on the next.
pub const ANCHOR_LITERALS: &[&str] = &[
    "STEP 1 —",
    "STEP 1:",
    "STEP 1 — CONSOLIDATION REVIEW",
    "STEP 3",
    "STEP 3 — BUILD",
    "STEP 3 —",
    "EXCEL WORKBOOK STRUCTURE",
    "PWC FORMATTING STANDARDS FOR EXCEL",
];

/// Rules every non-excluded document receives.
const COMMON: &[RuleId] = &[RuleId::EngagementContext, RuleId::ContextCheck];

/// The complete rule set, bound to one payload table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    payloads: Payloads,
    plans: BTreeMap<String, Vec<RuleId>>,
}

impl RuleSet {
    pub fn new(payloads: Payloads) -> Self {
        let mut plans: BTreeMap<String, Vec<RuleId>> = BTreeMap::new();

        let mut designate = |name: &str, ids: &[RuleId]| {
            plans
                .entry(name.to_string())
                .or_insert_with(|| COMMON.to_vec())
                .extend_from_slice(ids);
        };

        for name in payloads.workbook_rationalisation.keys() {
            designate(name, &[RuleId::WorkbookRationalisation]);
        }
        designate(
            FEE_STRUCTURE_DOCUMENT,
            &[RuleId::FeeStructureQuestion, RuleId::FeeStructureAdaptation],
        );
        for name in [SCHEDULE_DOCUMENT, CRITICAL_PATH_DOCUMENT] {
            designate(
                name,
                &[RuleId::MethodologyQuestion, RuleId::MethodologyAdaptation],
            );
        }
        designate(PMO_PLAYBOOK_DOCUMENT, &[RuleId::ConsistencyAudit]);

        for ids in plans.values_mut() {
            ids.sort();
        }

        Self { payloads, plans }
    }

    pub fn payloads(&self) -> &Payloads {
        &self.payloads
    }

    /// Rules applied to every document that is not designated.
    pub fn common(&self) -> &'static [RuleId] {
        COMMON
    }

    /// Rule identifiers applicable to `document`, in application order.
    pub fn applicable(&self, document: &str) -> &[RuleId] {
        self.plans
            .get(document)
            .map(Vec::as_slice)
            .unwrap_or(COMMON)
    }

    /// Documents with rules beyond the common ones.
    pub fn designated(&self) -> impl Iterator<Item = (&str, &[RuleId])> {
        self.plans
            .iter()
            .map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }

    /// Concrete rules for `document`, whose display label is `label`.
    pub fn rules_for(&self, document: &str, label: &str) -> Vec<Rule> {
        self.applicable(document)
            .iter()
            .filter_map(|id| self.rule(*id, document, label))
            .collect()
    }

    /// Materialise one rule. `None` when `document` has no payload for it.
    pub fn rule(&self, id: RuleId, document: &str, label: &str) -> Option<Rule> {
        let p = &self.payloads;
        let (sentinels, placements, payload) = match id {
            RuleId::EngagementContext => (
                vec![ENGAGEMENT_CONTEXT_SENTINEL],
                vec![Placement::Start],
                p.engagement_context.clone(),
            ),
            RuleId::ContextCheck => (
                vec![CONTEXT_CHECK_SENTINEL],
                vec![Placement::Before(STEP_ONE)],
                p.context_check_for(label),
            ),
            RuleId::WorkbookRationalisation => {
                let payload = p.workbook_rationalisation.get(document)?.clone();
                let mut placements = vec![Placement::Before(WORKBOOK_SECTION)];
                if document == ENGAGEMENT_CHARTER_DOCUMENT {
                    placements.push(Placement::Before(STEP_THREE));
                }
                (
                    vec![WORKBOOK_SENTINEL, NO_WORKBOOK_SENTINEL],
                    placements,
                    payload,
                )
            }
            RuleId::FeeStructureQuestion => (
                vec![FEE_QUESTION_SENTINEL],
                vec![FIRST_QUESTION],
                p.fee_structure.question.clone(),
            ),
            RuleId::FeeStructureAdaptation => (
                vec![FEE_ADAPTATION_SENTINEL],
                vec![Placement::AfterLine(BUILD_STEP)],
                p.fee_structure.adaptation.clone(),
            ),
            RuleId::MethodologyQuestion => {
                let branch = match document {
                    SCHEDULE_DOCUMENT => &p.schedule_methodology,
                    CRITICAL_PATH_DOCUMENT => &p.critical_path_methodology,
                    _ => return None,
                };
                (
                    vec![METHODOLOGY_QUESTION_SENTINEL],
                    vec![FIRST_QUESTION],
                    branch.question.clone(),
                )
            }
            RuleId::MethodologyAdaptation => {
                let (sentinel, branch) = match document {
                    SCHEDULE_DOCUMENT => (SCHEDULE_ADAPTATION_SENTINEL, &p.schedule_methodology),
                    CRITICAL_PATH_DOCUMENT => (
                        CRITICAL_PATH_ADAPTATION_SENTINEL,
                        &p.critical_path_methodology,
                    ),
                    _ => return None,
                };
                (
                    vec![sentinel],
                    vec![Placement::AfterLine(BUILD_STEP)],
                    branch.adaptation.clone(),
                )
            }
            RuleId::ConsistencyAudit => (
                vec![CONSISTENCY_AUDIT_SENTINEL],
                vec![Placement::AfterLine(CONSOLIDATION_REVIEW)],
                p.consistency_audit.clone(),
            ),
        };

        Some(Rule {
            id,
            sentinels,
            placements,
            payload,
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Payloads::default())
    }
}
