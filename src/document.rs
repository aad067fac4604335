//! Prompt documents on disk.
//!
//! A document is a JSON object with a required string `instruction` field and
//! an optional `artifact` display label. Every other field is carried through
//! untouched, in its original order.

use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INSTRUCTION_FIELD: &str = "instruction";
pub const ARTIFACT_FIELD: &str = "artifact";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Document root is not a JSON object: {0}")]
    NotAnObject(PathBuf),

    #[error("Missing required string field '{field}' in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: PathBuf,
    name: String,
    instruction: String,
    fields: Map<String, Value>,
}

impl Document {
    /// Read and validate a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    /// Parse `contents` as the document stored at `path`.
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Result<Self, DocumentError> {
        let path = path.into();
        let value: Value = serde_json::from_str(contents).map_err(|source| {
            DocumentError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        let Value::Object(fields) = value else {
            return Err(DocumentError::NotAnObject(path));
        };

        let instruction = match fields.get(INSTRUCTION_FIELD) {
            Some(Value::String(text)) => text.clone(),
            _ => {
                return Err(DocumentError::MissingField {
                    path,
                    field: INSTRUCTION_FIELD,
                })
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path,
            name,
            instruction,
            fields,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name within the target directory; the document's identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub(crate) fn set_instruction(&mut self, text: String) {
        self.fields
            .insert(INSTRUCTION_FIELD.to_string(), Value::String(text.clone()));
        self.instruction = text;
    }

    /// Display label: the `artifact` field, or one derived from the file name.
    pub fn label(&self) -> String {
        match self.fields.get(ARTIFACT_FIELD) {
            Some(Value::String(artifact)) => artifact.clone(),
            _ => label_from_name(&self.name),
        }
    }

    /// Pretty JSON, two-space indented, non-ASCII kept verbatim.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.fields).map_err(|source| DocumentError::Serialize {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the document back to its path atomically.
    pub fn save(&self) -> Result<(), DocumentError> {
        let json = self.to_json()?;
        atomic_write(&self.path, json.as_bytes()).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// `risk_register.json` → `Risk Register`.
pub fn label_from_name(name: &str) -> String {
    title_case(&name.replace(".json", "").replace('_', " "))
}

/// Uppercase the first letter of each run of letters, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Atomic file write: tempfile + fsync + rename.
///
/// A symlinked path is written through to its target; the link survives.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let resolved;
    let path = if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
        resolved = fs::canonicalize(path)?;
        resolved.as_path()
    } else {
        path
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
