use serde::Serialize;
use thiserror::Error;

use crate::render::Section;

/// Failure to obtain a renderable document. Either variant ends in the error panel.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document could not be fetched (missing file, HTTP error status, network failure)
    #[error("failed to fetch portfolio data from {source_name}: {reason}")]
    Transport { source_name: String, reason: String },
    /// The document was fetched but is not a usable portfolio document
    #[error("malformed portfolio document: {0}")]
    Malformed(#[from] DocumentError),
}

impl LoadError {
    pub fn transport(source_name: impl Into<String>, reason: impl ToString) -> Self {
        LoadError::Transport {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Transport { .. })
    }
}

/// Document-level schema violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Syntax(String),
    #[error("document root must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// An optional top-level field that was present but could not be decoded.
///
/// The field is treated as absent; only the sections reading it are affected.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("field `{field}` ignored: {reason}")]
pub struct SectionError {
    pub field: &'static str,
    pub reason: String,
}

/// Failure to write into a DOM
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum DomError {
    #[error("anchor element `{0}` not found")]
    MissingAnchor(String),
    #[error("cannot update `{target}`: {reason}")]
    Unsupported { target: String, reason: &'static str },
}

/// A section whose operations were not applied because the DOM rejected them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub error: DomError,
}
