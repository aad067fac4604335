//! Integration tests for the batch driver
//!
//! Runs the full rule set over a directory of realistic prompt documents and
//! checks placement, idempotency and exclusion behaviour.

use filetime::FileTime;
use prompt_patcher::{
    default_exclusions, Batch, BatchSummary, Document, FileProcessor, FileStatus, RuleSet,
    WriteMode,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BUDGET: &str = "You are preparing the Budget & Cost Baseline (P2.6).

STEP 1 — CLARIFICATION QUESTIONS
Ask the user the following:
1. What is the approved engagement budget?
2. What day rates apply per grade?

STEP 2 — REVIEW INPUTS
Summarise the Resource Plan.

STEP 3 — BUILD
Generate the Word and Excel deliverables.

EXCEL WORKBOOK STRUCTURE
Sheet 1: Budget Baseline
";

const SCHEDULE: &str = "Build the Schedule & Milestones (P2.2).

STEP 1 — QUESTIONS
1. When does the engagement start?

STEP 3 — BUILD THE SCHEDULE
Produce the Gantt.
";

const CRITICAL_PATH: &str = "Critical Path Analysis (P2.3).

STEP 1 — QUESTIONS
1. Which milestones are fixed?

STEP 3 — NETWORK ANALYSIS
Compute float.

EXCEL WORKBOOK STRUCTURE
Sheet 1: Critical Path
";

const PMO_PLAYBOOK: &str = "PMO Playbook (P3.1).

STEP 1 — CONSOLIDATION REVIEW
Read every planning document.
1. List the documents received.

PWC FORMATTING STANDARDS FOR EXCEL
Use the house style.
";

const CHARTER: &str = "Engagement Charter (P1.5).

STEP 1 — QUESTIONS
1. Who is the sponsor?

STEP 3 — BUILD
Word document only.
";

const LESSONS: &str = "Lessons learned.

STEP 1: GATHER
1. What went well?
";

const INTAKE: &str = "Engagement intake.

STEP 1 — QUESTIONS
1. Client name?
";

fn write_doc(dir: &Path, name: &str, fields: serde_json::Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(&fields).unwrap()).unwrap();
}

/// A prompts directory covering every rule category.
fn setup_prompts() -> TempDir {
    let dir = TempDir::new().unwrap();
    let p = dir.path();

    write_doc(
        p,
        "budget_cost_baseline.json",
        serde_json::json!({ "step": "P2.6", "artifact": "Budget & Cost Baseline", "instruction": BUDGET }),
    );
    write_doc(p, "schedule_milestones.json", serde_json::json!({ "instruction": SCHEDULE }));
    write_doc(p, "critical_path.json", serde_json::json!({ "instruction": CRITICAL_PATH }));
    write_doc(p, "pmo_playbook.json", serde_json::json!({ "instruction": PMO_PLAYBOOK }));
    write_doc(p, "engagement_charter.json", serde_json::json!({ "instruction": CHARTER }));
    write_doc(p, "lessons_learned.json", serde_json::json!({ "instruction": LESSONS }));
    write_doc(p, "appendix.json", serde_json::json!({ "instruction": "Reference only." }));
    write_doc(p, "engagement_intake.json", serde_json::json!({ "instruction": INTAKE }));
    write_doc(
        p,
        "governance_framework.json",
        serde_json::json!({ "instruction": "Governance.\nSTEP 1 — Q\n1. Boards?\n" }),
    );
    fs::write(p.join("README.md"), "not a prompt").unwrap();

    dir
}

fn run(dir: &Path) -> (BatchSummary, Vec<(String, FileStatus)>) {
    let processor = FileProcessor::new(RuleSet::default());
    let batch = Batch::new(dir, default_exclusions(), &processor);
    let mut statuses = Vec::new();
    let summary = batch
        .run(WriteMode::Write, |report| {
            statuses.push((report.name.clone(), report.status))
        })
        .unwrap();
    (summary, statuses)
}

fn instruction(dir: &Path, name: &str) -> String {
    Document::load(dir.join(name))
        .unwrap()
        .instruction()
        .to_string()
}

fn read_all(dir: &Path) -> Vec<(String, String)> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let path = e.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            (name, fs::read_to_string(&path).unwrap())
        })
        .collect();
    files.sort();
    files
}

fn pos(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{text}"))
}

#[test]
fn test_first_run_counts_and_order() {
    let dir = setup_prompts();
    let (summary, statuses) = run(dir.path());

    assert_eq!(
        summary,
        BatchSummary {
            processed: 7,
            updated: 7,
            unchanged: 0,
            excluded: 2,
        }
    );

    let names: Vec<&str> = statuses.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "appendix.json",
            "budget_cost_baseline.json",
            "critical_path.json",
            "engagement_charter.json",
            "engagement_intake.json",
            "governance_framework.json",
            "lessons_learned.json",
            "pmo_playbook.json",
            "schedule_milestones.json",
        ]
    );
    assert_eq!(statuses[4].1, FileStatus::Excluded);
    assert_eq!(statuses[5].1, FileStatus::Excluded);
}

#[test]
fn test_second_run_reports_no_updates() {
    let dir = setup_prompts();
    run(dir.path());

    let snapshot = read_all(dir.path());

    let (summary, statuses) = run(dir.path());
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.processed, 7);
    assert!(statuses.iter().all(|(_, s)| *s != FileStatus::Updated));

    assert_eq!(snapshot, read_all(dir.path()));
}

#[test]
fn test_unchanged_documents_are_not_rewritten() {
    let dir = setup_prompts();
    run(dir.path());

    let old = FileTime::from_unix_time(1_000_000_000, 0);
    for entry in fs::read_dir(dir.path()).unwrap() {
        filetime::set_file_mtime(entry.unwrap().path(), old).unwrap();
    }

    run(dir.path());

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let meta = fs::metadata(&path).unwrap();
        assert_eq!(
            FileTime::from_last_modification_time(&meta),
            old,
            "{} was rewritten",
            path.display()
        );
    }
}

#[test]
fn test_excluded_documents_untouched() {
    let dir = setup_prompts();
    let before = fs::read_to_string(dir.path().join("engagement_intake.json")).unwrap();
    let governance = fs::read_to_string(dir.path().join("governance_framework.json")).unwrap();

    run(dir.path());

    assert_eq!(
        fs::read_to_string(dir.path().join("engagement_intake.json")).unwrap(),
        before
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("governance_framework.json")).unwrap(),
        governance
    );
}

#[test]
fn test_fee_structure_sentinels_exactly_once() {
    let dir = setup_prompts();
    run(dir.path());
    run(dir.path());
    run(dir.path());

    let text = instruction(dir.path(), "budget_cost_baseline.json");
    assert_eq!(text.matches("Fee Structure Confirmation").count(), 1);
    assert_eq!(text.matches("FEE STRUCTURE ADAPTATION").count(), 1);
    assert_eq!(text.matches("ENGAGEMENT CONTEXT").count(), 1);
    assert_eq!(text.matches("CONTEXT CHECK").count(), 1);
    assert_eq!(text.matches("WORKBOOK RATIONALISATION").count(), 1);
}

#[test]
fn test_budget_placements() {
    let dir = setup_prompts();
    run(dir.path());
    let text = instruction(dir.path(), "budget_cost_baseline.json");

    assert!(text.starts_with("ENGAGEMENT CONTEXT — populate all fields"));
    assert!(text.contains("meaningful Budget & Cost Baseline rather than"));

    let header = pos(&text, "ENGAGEMENT CONTEXT");
    let gate = pos(&text, "CONTEXT CHECK");
    let step1 = pos(&text, "STEP 1 — CLARIFICATION QUESTIONS");
    let q0 = pos(&text, "0. **Fee Structure Confirmation");
    let q1 = pos(&text, "1. What is the approved engagement budget?");
    let build = pos(&text, "STEP 3 — BUILD\n\nFEE STRUCTURE ADAPTATION\n");
    let generate = pos(&text, "Generate the Word and Excel deliverables.");
    let workbook = pos(&text, "WORKBOOK RATIONALISATION — generate a maximum of 5 sheets");
    let excel = pos(&text, "EXCEL WORKBOOK STRUCTURE");

    assert!(header < gate && gate < step1 && step1 < q0 && q0 < q1);
    assert!(q1 < build && build < generate && generate < workbook && workbook < excel);
    assert!(text.contains("one view (Baseline Cost | Actual Cost"));
    assert!(text.contains("\nAsk the user the following:\n0. **Fee Structure Confirmation"));
    assert!(text.contains("invoicing milestone schedule.\n\n1. What is the approved"));
}

#[test]
fn test_other_fields_preserved_in_order() {
    let dir = setup_prompts();
    run(dir.path());

    let raw = fs::read_to_string(dir.path().join("budget_cost_baseline.json")).unwrap();
    let step = pos(&raw, "\"step\": \"P2.6\"");
    let artifact = pos(&raw, "\"artifact\"");
    let instruction = pos(&raw, "\"instruction\"");
    assert!(step < artifact && artifact < instruction);
    assert!(raw.starts_with("{\n  \"step\""));
    assert!(raw.contains("£"), "non-ASCII must not be escaped");
}

#[test]
fn test_methodology_branches() {
    let dir = setup_prompts();
    run(dir.path());

    let schedule = instruction(dir.path(), "schedule_milestones.json");
    assert!(schedule.contains(
        "STEP 3 — BUILD THE SCHEDULE\n\nMETHODOLOGY ADAPTATION — SCHEDULE\n"
    ));
    assert!(schedule.contains("The schedule approach differs"));
    assert!(pos(&schedule, "Delivery Methodology Confirmation") < pos(&schedule, "1. When does"));
    assert!(!schedule.contains("WORKBOOK RATIONALISATION"));

    let cpm = instruction(dir.path(), "critical_path.json");
    // Falls back to the bare "STEP 3 —" heading
    assert!(cpm.contains("STEP 3 — NETWORK ANALYSIS\n\nMETHODOLOGY ADAPTATION — CRITICAL PATH\n"));
    assert!(cpm.contains("Critical Path Method (CPM) is a Waterfall planning technique"));
    assert!(!cpm.contains("METHODOLOGY ADAPTATION — SCHEDULE"));
    assert!(pos(&cpm, "WORKBOOK RATIONALISATION") < pos(&cpm, "EXCEL WORKBOOK STRUCTURE"));
}

#[test]
fn test_consistency_audit_after_consolidation_heading() {
    let dir = setup_prompts();
    run(dir.path());

    let text = instruction(dir.path(), "pmo_playbook.json");
    assert!(text.contains(
        "STEP 1 — CONSOLIDATION REVIEW\n\nCROSS-DOCUMENT CONSISTENCY AUDIT\n"
    ));
    assert!(pos(&text, "CONTEXT CHECK") < pos(&text, "STEP 1 — CONSOLIDATION REVIEW"));
    assert!(
        pos(&text, "CROSS-DOCUMENT CONSISTENCY AUDIT")
            < pos(&text, "Read every planning document.")
    );
    // Second workbook anchor candidate
    assert!(
        pos(&text, "WORKBOOK RATIONALISATION") < pos(&text, "PWC FORMATTING STANDARDS FOR EXCEL")
    );
}

#[test]
fn test_charter_note_falls_back_to_step_three() {
    let dir = setup_prompts();
    run(dir.path());

    let text = instruction(dir.path(), "engagement_charter.json");
    assert!(text.contains("If the existing prompt describes any Excel output, omit it.\n\nSTEP 3 — BUILD"));
    assert!(!text.contains("WORKBOOK RATIONALISATION"));
}

#[test]
fn test_colon_heading_variant_and_anchorless_document() {
    let dir = setup_prompts();
    run(dir.path());

    let lessons = instruction(dir.path(), "lessons_learned.json");
    assert!(pos(&lessons, "CONTEXT CHECK") < pos(&lessons, "STEP 1: GATHER"));
    assert!(lessons.contains("meaningful Lessons Learned rather than"));

    let appendix = instruction(dir.path(), "appendix.json");
    assert!(appendix.starts_with("ENGAGEMENT CONTEXT"));
    assert!(appendix.ends_with("---\n\nReference only."));
    assert!(!appendix.contains("CONTEXT CHECK"));
}

#[test]
fn test_missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let processor = FileProcessor::default();
    let batch = Batch::new(dir.path().join("prompts"), default_exclusions(), &processor);
    let mut called = false;
    let result = batch.run(WriteMode::Write, |_| called = true);
    assert!(matches!(
        result,
        Err(prompt_patcher::BatchError::MissingDirectory(_))
    ));
    assert!(!called);
}

#[cfg(unix)]
#[test]
fn test_symlinked_document_patched_through_link() {
    let dir = setup_prompts();
    let store = TempDir::new().unwrap();
    write_doc(
        store.path(),
        "risk_register.json",
        serde_json::json!({ "instruction": "STEP 1 — QUESTIONS\n1. Top risks?\n" }),
    );
    let link = dir.path().join("risk_register.json");
    std::os::unix::fs::symlink(store.path().join("risk_register.json"), &link).unwrap();

    let (summary, statuses) = run(dir.path());
    assert_eq!(summary.processed, 8);
    assert!(statuses.contains(&("risk_register.json".to_string(), FileStatus::Updated)));

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    let text = instruction(store.path(), "risk_register.json");
    assert!(text.starts_with("ENGAGEMENT CONTEXT"));
    assert!(pos(&text, "CONTEXT CHECK") < pos(&text, "STEP 1 — QUESTIONS"));

    let (again, _) = run(dir.path());
    assert_eq!(again.updated, 0);
}
