//! Payload configuration.
//!
//! Payloads are immutable data resolved once at startup and handed to the
//! [`RuleSet`](crate::rules::RuleSet) explicitly.

pub mod builtin;
pub mod loader;
pub mod schema;

pub use loader::{load_from_path, load_from_str, ConfigError};
pub use schema::{BranchPayloads, Payloads, ValidationError, ValidationIssue, ARTIFACT_PLACEHOLDER};
