//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading catalog or label documents.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Document is not valid JSON or does not have the expected shape.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    // === Content Errors ===
    /// A destination entry cannot be turned into a catalog item.
    #[error("invalid destination at index {index}{}: {reason}", id_suffix(.id))]
    InvalidItem {
        index: usize,
        id: Option<String>,
        reason: String,
    },
}

impl IngestError {
    pub(crate) fn invalid_item(index: usize, id: Option<&str>, reason: impl Into<String>) -> Self {
        Self::InvalidItem {
            index,
            id: id.map(str::to_string),
            reason: reason.into(),
        }
    }
}

fn id_suffix(id: &Option<String>) -> String {
    id.as_ref().map(|id| format!(" ({id})")).unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_item_display_with_id() {
        let err = IngestError::invalid_item(3, Some("salto"), "missing category");
        assert_eq!(
            err.to_string(),
            "invalid destination at index 3 (salto): missing category"
        );
    }

    #[test]
    fn test_invalid_item_display_without_id() {
        let err = IngestError::invalid_item(0, None, "missing id");
        assert_eq!(err.to_string(), "invalid destination at index 0: missing id");
    }
}
