//! Batch driver: every document in a directory, one at a time, in name order.

use crate::processor::{FileProcessor, ProcessError, ProcessedFile, WriteMode};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Documents that never receive any rule.
pub const EXCLUDED_DOCUMENTS: [&str; 3] = [
    "engagement_intake.json",
    "governance_framework.json",
    "work_breakdown_structure.json",
];

pub fn default_exclusions() -> BTreeSet<String> {
    EXCLUDED_DOCUMENTS.iter().map(|s| s.to_string()).collect()
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Target directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("Target path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to enumerate documents: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// At least one rule fired (and, outside dry runs, the file was rewritten)
    Updated,
    /// Every rule was already applied or not applicable
    Unchanged,
    /// In the exclusion set; never loaded
    Excluded,
}

/// Per-document report handed to the caller as the batch progresses.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: String,
    pub status: FileStatus,
    /// `None` for excluded documents
    pub processed: Option<ProcessedFile>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents handed to the file processor, changed or not
    pub processed: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub excluded: usize,
}

pub struct Batch<'a> {
    dir: PathBuf,
    exclusions: BTreeSet<String>,
    processor: &'a FileProcessor,
}

impl<'a> Batch<'a> {
    pub fn new(
        dir: impl Into<PathBuf>,
        exclusions: BTreeSet<String>,
        processor: &'a FileProcessor,
    ) -> Self {
        Self {
            dir: dir.into(),
            exclusions,
            processor,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All `*.json` files directly inside the target directory, sorted by name.
    ///
    /// Symlinked documents are followed and classified by their target.
    pub fn documents(&self) -> Result<Vec<PathBuf>, BatchError> {
        if !self.dir.exists() {
            return Err(BatchError::MissingDirectory(self.dir.clone()));
        }
        if !self.dir.is_dir() {
            return Err(BatchError::NotADirectory(self.dir.clone()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension().and_then(|s| s.to_str()) == Some("json")
            {
                files.push(entry.into_path());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Process every document, reporting each through `on_file` as it finishes.
    ///
    /// A structural failure in any document aborts the batch; documents
    /// already written stay written.
    pub fn run(
        &self,
        mode: WriteMode,
        mut on_file: impl FnMut(&FileReport),
    ) -> Result<BatchSummary, BatchError> {
        let files = self.documents()?;
        debug!(dir = %self.dir.display(), count = files.len(), "enumerated documents");

        let mut summary = BatchSummary::default();

        for path in files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if self.exclusions.contains(&name) {
                summary.excluded += 1;
                on_file(&FileReport {
                    name,
                    status: FileStatus::Excluded,
                    processed: None,
                });
                continue;
            }

            let processed = self.processor.process_path(&path, mode)?;
            summary.processed += 1;
            let status = if processed.outcome.changed {
                summary.updated += 1;
                FileStatus::Updated
            } else {
                summary.unchanged += 1;
                FileStatus::Unchanged
            };

            on_file(&FileReport {
                name,
                status,
                processed: Some(processed),
            });
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_doc(dir: &Path, name: &str, instruction: &str) {
        let json = serde_json::json!({ "instruction": instruction });
        fs::write(dir.join(name), json.to_string()).unwrap();
    }

    #[test]
    fn test_missing_directory() {
        let processor = FileProcessor::default();
        let batch = Batch::new("/nonexistent/prompts", default_exclusions(), &processor);
        let err = batch.run(WriteMode::Write, |_| {}).unwrap_err();
        assert!(matches!(err, BatchError::MissingDirectory(_)));
    }

    #[test]
    fn test_file_as_target_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("prompts");
        fs::write(&file, "").unwrap();

        let processor = FileProcessor::default();
        let batch = Batch::new(&file, default_exclusions(), &processor);
        let err = batch.documents().unwrap_err();
        assert!(matches!(err, BatchError::NotADirectory(_)));
        assert!(err.to_string().contains("not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_document_enumerated() {
        let dir = tempfile::tempdir().unwrap();
        let store = tempfile::tempdir().unwrap();
        write_doc(store.path(), "risk_register.json", "STEP 1 — Q\n1. a\n");
        std::os::unix::fs::symlink(
            store.path().join("risk_register.json"),
            dir.path().join("risk_register.json"),
        )
        .unwrap();
        std::os::unix::fs::symlink(store.path(), dir.path().join("linked_dir.json")).unwrap();

        let processor = FileProcessor::default();
        let batch = Batch::new(dir.path(), BTreeSet::new(), &processor);
        let files = batch.documents().unwrap();
        assert_eq!(files, vec![dir.path().join("risk_register.json")]);
    }

    #[test]
    fn test_documents_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "b.json", "");
        write_doc(dir.path(), "a.json", "");
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let processor = FileProcessor::default();
        let batch = Batch::new(dir.path(), BTreeSet::new(), &processor);
        let names: Vec<_> = batch
            .documents()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_run_counts() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "engagement_intake.json", "STEP 1 — Q\n1. a\n");
        write_doc(dir.path(), "risk_register.json", "STEP 1 — Q\n1. a\n");
        write_doc(dir.path(), "done.json", "ENGAGEMENT CONTEXT\nCONTEXT CHECK\n");

        let processor = FileProcessor::default();
        let batch = Batch::new(dir.path(), default_exclusions(), &processor);

        let mut seen = Vec::new();
        let summary = batch
            .run(WriteMode::Write, |report| {
                seen.push((report.name.clone(), report.status))
            })
            .unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                processed: 2,
                updated: 1,
                unchanged: 1,
                excluded: 1,
            }
        );
        assert_eq!(
            seen,
            vec![
                ("done.json".to_string(), FileStatus::Unchanged),
                ("engagement_intake.json".to_string(), FileStatus::Excluded),
                ("risk_register.json".to_string(), FileStatus::Updated),
            ]
        );
    }

    #[test]
    fn test_malformed_document_aborts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), r#"{"artifact": "A"}"#).unwrap();
        write_doc(dir.path(), "b.json", "STEP 1 — Q\n1. a\n");

        let processor = FileProcessor::default();
        let batch = Batch::new(dir.path(), default_exclusions(), &processor);
        let err = batch.run(WriteMode::Write, |_| {}).unwrap_err();

        assert!(matches!(err, BatchError::Process(_)));
        let untouched = fs::read_to_string(dir.path().join("b.json")).unwrap();
        assert!(!untouched.contains("ENGAGEMENT CONTEXT"));
    }
}
