use crate::config::builtin;
use crate::guard::Sentinel;
use crate::rules::registry::{
    ANCHOR_LITERALS, CONSISTENCY_AUDIT_SENTINEL, CONTEXT_CHECK_SENTINEL, CRITICAL_PATH_ADAPTATION_SENTINEL,
    ENGAGEMENT_CONTEXT_SENTINEL, FEE_ADAPTATION_SENTINEL, FEE_QUESTION_SENTINEL,
    METHODOLOGY_QUESTION_SENTINEL, NO_WORKBOOK_SENTINEL, QUESTION_LINE_PREFIX,
    SCHEDULE_ADAPTATION_SENTINEL, WORKBOOK_SENTINEL,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder in the context-check payload replaced by the document label.
pub const ARTIFACT_PLACEHOLDER: &str = "{artifact}";

/// Every payload string the rule set inserts.
///
/// Missing fields in an override file keep their built-in values.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Payloads {
    pub engagement_context: String,
    /// Template; [`ARTIFACT_PLACEHOLDER`] is replaced per document
    pub context_check: String,
    /// Keyed by document file name; the keys define which documents get the rule
    pub workbook_rationalisation: BTreeMap<String, String>,
    pub fee_structure: BranchPayloads,
    pub schedule_methodology: BranchPayloads,
    pub critical_path_methodology: BranchPayloads,
    pub consistency_audit: String,
}

/// Question + build-step pair for a conditional branch.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BranchPayloads {
    pub question: String,
    pub adaptation: String,
}

impl Default for Payloads {
    fn default() -> Self {
        let workbook_rationalisation = [
            ("objectives_benefits.json", builtin::WORKBOOK_OBJECTIVES_BENEFITS),
            ("scope_statement.json", builtin::WORKBOOK_SCOPE_STATEMENT),
            ("stakeholder_analysis.json", builtin::WORKBOOK_STAKEHOLDER_ANALYSIS),
            ("engagement_charter.json", builtin::WORKBOOK_ENGAGEMENT_CHARTER),
            ("communications_plan.json", builtin::WORKBOOK_COMMUNICATIONS_PLAN),
            ("critical_path.json", builtin::WORKBOOK_CRITICAL_PATH),
            ("resource_plan.json", builtin::WORKBOOK_RESOURCE_PLAN),
            ("raci_matrix.json", builtin::WORKBOOK_RACI_MATRIX),
            ("budget_cost_baseline.json", builtin::WORKBOOK_BUDGET_COST_BASELINE),
            ("risk_register.json", builtin::WORKBOOK_RISK_REGISTER),
            ("issue_dependency_log.json", builtin::WORKBOOK_ISSUE_DEPENDENCY_LOG),
            ("quality_plan.json", builtin::WORKBOOK_QUALITY_PLAN),
            ("change_control_plan.json", builtin::WORKBOOK_CHANGE_CONTROL_PLAN),
            ("pmo_playbook.json", builtin::WORKBOOK_PMO_PLAYBOOK),
            (
                "status_reporting_template.json",
                builtin::WORKBOOK_STATUS_REPORTING_TEMPLATE,
            ),
        ]
        .into_iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect();

        Self {
            engagement_context: builtin::ENGAGEMENT_CONTEXT.to_string(),
            context_check: builtin::CONTEXT_CHECK.to_string(),
            workbook_rationalisation,
            fee_structure: BranchPayloads {
                question: builtin::FEE_STRUCTURE_QUESTION.to_string(),
                adaptation: builtin::FEE_STRUCTURE_ADAPTATION.to_string(),
            },
            schedule_methodology: BranchPayloads {
                question: builtin::SCHEDULE_METHODOLOGY_QUESTION.to_string(),
                adaptation: builtin::SCHEDULE_METHODOLOGY_ADAPTATION.to_string(),
            },
            critical_path_methodology: BranchPayloads {
                question: builtin::CRITICAL_PATH_METHODOLOGY_QUESTION.to_string(),
                adaptation: builtin::CRITICAL_PATH_METHODOLOGY_ADAPTATION.to_string(),
            },
            consistency_audit: builtin::CONSISTENCY_AUDIT.to_string(),
        }
    }
}

/// Sentinel families. A payload must contain one of its own family's
/// sentinels and none belonging to another family.
const FAMILIES: &[(&str, &[Sentinel])] = &[
    ("engagement-context", &[ENGAGEMENT_CONTEXT_SENTINEL]),
    ("context-check", &[CONTEXT_CHECK_SENTINEL]),
    (
        "workbook-rationalisation",
        &[WORKBOOK_SENTINEL, NO_WORKBOOK_SENTINEL],
    ),
    ("fee-structure-question", &[FEE_QUESTION_SENTINEL]),
    ("fee-structure-adaptation", &[FEE_ADAPTATION_SENTINEL]),
    ("methodology-question", &[METHODOLOGY_QUESTION_SENTINEL]),
    ("schedule-adaptation", &[SCHEDULE_ADAPTATION_SENTINEL]),
    ("critical-path-adaptation", &[CRITICAL_PATH_ADAPTATION_SENTINEL]),
    ("consistency-audit", &[CONSISTENCY_AUDIT_SENTINEL]),
];

/// Families whose rules run after the question rules.
const AFTER_QUESTIONS: &[&str] = &[
    "fee-structure-adaptation",
    "schedule-adaptation",
    "critical-path-adaptation",
    "consistency-audit",
];

impl Payloads {
    /// Every payload paired with its field path and sentinel family.
    fn entries(&self) -> Vec<(String, &'static str, &str)> {
        let mut entries = vec![
            (
                "engagement_context".to_string(),
                "engagement-context",
                self.engagement_context.as_str(),
            ),
            (
                "context_check".to_string(),
                "context-check",
                self.context_check.as_str(),
            ),
        ];
        for (name, text) in &self.workbook_rationalisation {
            entries.push((
                format!("workbook_rationalisation.\"{name}\""),
                "workbook-rationalisation",
                text.as_str(),
            ));
        }
        entries.extend([
            (
                "fee_structure.question".to_string(),
                "fee-structure-question",
                self.fee_structure.question.as_str(),
            ),
            (
                "fee_structure.adaptation".to_string(),
                "fee-structure-adaptation",
                self.fee_structure.adaptation.as_str(),
            ),
            (
                "schedule_methodology.question".to_string(),
                "methodology-question",
                self.schedule_methodology.question.as_str(),
            ),
            (
                "schedule_methodology.adaptation".to_string(),
                "schedule-adaptation",
                self.schedule_methodology.adaptation.as_str(),
            ),
            (
                "critical_path_methodology.question".to_string(),
                "methodology-question",
                self.critical_path_methodology.question.as_str(),
            ),
            (
                "critical_path_methodology.adaptation".to_string(),
                "critical-path-adaptation",
                self.critical_path_methodology.adaptation.as_str(),
            ),
            (
                "consistency_audit".to_string(),
                "consistency-audit",
                self.consistency_audit.as_str(),
            ),
        ]);
        entries
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        for (field, family, text) in self.entries() {
            for (name, sentinels) in FAMILIES {
                if *name == family {
                    if !sentinels.iter().any(|s| s.already_applied(text)) {
                        issues.push(ValidationIssue::MissingSentinel {
                            field: field.clone(),
                            sentinel: sentinels[0].as_str(),
                        });
                    }
                } else if let Some(foreign) = sentinels.iter().find(|s| s.already_applied(text))
                {
                    issues.push(ValidationIssue::ForeignSentinel {
                        field: field.clone(),
                        sentinel: foreign.as_str(),
                    });
                }
            }

            if let Some(anchor) = ANCHOR_LITERALS.iter().copied().find(|a| text.contains(*a)) {
                issues.push(ValidationIssue::ContainsAnchor {
                    field: field.clone(),
                    anchor,
                });
            } else if AFTER_QUESTIONS.contains(&family)
                && (text.starts_with(QUESTION_LINE_PREFIX)
                    || text.contains(&format!("\n{QUESTION_LINE_PREFIX}")))
            {
                issues.push(ValidationIssue::ContainsAnchor {
                    field: field.clone(),
                    anchor: QUESTION_LINE_PREFIX,
                });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    /// Context-check payload with the document label filled in.
    pub fn context_check_for(&self, label: &str) -> String {
        self.context_check.replace(ARTIFACT_PLACEHOLDER, label)
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Without its sentinel a payload would be inserted again on every run
    MissingSentinel {
        field: String,
        sentinel: &'static str,
    },
    /// Another rule would mistake this payload for its own
    ForeignSentinel {
        field: String,
        sentinel: &'static str,
    },
    /// A rule whose anchor was missing could find it in this payload next run
    ContainsAnchor {
        field: String,
        anchor: &'static str,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingSentinel { field, sentinel } => {
                write!(f, "payload '{field}' must contain the sentinel '{sentinel}'")
            }
            ValidationIssue::ForeignSentinel { field, sentinel } => write!(
                f,
                "payload '{field}' contains '{sentinel}', which belongs to another rule"
            ),
            ValidationIssue::ContainsAnchor { field, anchor } => write!(
                f,
                "payload '{field}' contains the anchor '{}', which would make reruns insert again",
                anchor.trim_end()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_payloads_validate() {
        Payloads::default().validate().unwrap();
    }

    #[test]
    fn test_builtin_workbook_subset() {
        let payloads = Payloads::default();
        assert_eq!(payloads.workbook_rationalisation.len(), 15);
        assert!(payloads
            .workbook_rationalisation
            .contains_key("engagement_charter.json"));
        assert!(!payloads
            .workbook_rationalisation
            .contains_key("schedule_milestones.json"));
    }

    #[test]
    fn test_missing_sentinel_reported() {
        let payloads = Payloads {
            consistency_audit: "just some text\n".to_string(),
            ..Payloads::default()
        };
        let err = payloads.validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![ValidationIssue::MissingSentinel {
                field: "consistency_audit".to_string(),
                sentinel: "CROSS-DOCUMENT CONSISTENCY AUDIT",
            }]
        );
    }

    #[test]
    fn test_foreign_sentinel_reported() {
        let payloads = Payloads {
            engagement_context: "ENGAGEMENT CONTEXT\nCONTEXT CHECK\n".to_string(),
            ..Payloads::default()
        };
        let err = payloads.validate().unwrap_err();
        assert!(err.issues.contains(&ValidationIssue::ForeignSentinel {
            field: "engagement_context".to_string(),
            sentinel: "CONTEXT CHECK",
        }));
    }

    #[test]
    fn test_builtin_payloads_carry_no_anchor() {
        for (field, _, text) in Payloads::default().entries() {
            assert!(
                !ANCHOR_LITERALS.iter().any(|a| text.contains(a)),
                "{field} carries an anchor"
            );
        }
    }

    #[test]
    fn test_anchor_in_payload_reported() {
        let payloads = Payloads {
            fee_structure: BranchPayloads {
                adaptation: "FEE STRUCTURE ADAPTATION\nSee STEP 1 — QUESTIONS above.\n"
                    .to_string(),
                ..Payloads::default().fee_structure
            },
            ..Payloads::default()
        };
        let err = payloads.validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![ValidationIssue::ContainsAnchor {
                field: "fee_structure.adaptation".to_string(),
                anchor: "STEP 1 —",
            }]
        );
    }

    #[test]
    fn test_question_line_in_late_payload_reported() {
        let payloads = Payloads {
            consistency_audit: "CROSS-DOCUMENT CONSISTENCY AUDIT\n1. Compare budgets.\n"
                .to_string(),
            ..Payloads::default()
        };
        let err = payloads.validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![ValidationIssue::ContainsAnchor {
                field: "consistency_audit".to_string(),
                anchor: QUESTION_LINE_PREFIX,
            }]
        );

        // Workbook payloads run before the question rules
        let mut payloads = Payloads::default();
        payloads.workbook_rationalisation.insert(
            "risk_register.json".to_string(),
            "WORKBOOK RATIONALISATION\n1. Risks\n".to_string(),
        );
        payloads.validate().unwrap();
    }

    #[test]
    fn test_context_check_placeholder() {
        let payloads = Payloads::default();
        let text = payloads.context_check_for("Risk Register");
        assert!(text.contains("a meaningful Risk Register rather than"));
        assert!(!text.contains(ARTIFACT_PLACEHOLDER));
    }
}
