//! Browser error types.
//!
//! Only load failures are errors. A detail request for an unknown id is a
//! reported condition carried by the render plan, and an empty result set is
//! a normal plan with `is_empty` set.

use catalog_ingest::IngestError;
use catalog_model::ModelError;
use thiserror::Error;

/// The data source failed or produced data that cannot form a catalog.
///
/// Puts the session into the error state until a reload is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not be read.
    #[error("failed to load destinations: {reason}")]
    Source {
        /// Description of what went wrong.
        reason: String,
    },

    /// The source was read but its content is unusable.
    #[error("destination data is invalid: {reason}")]
    InvalidData {
        /// Description of what went wrong.
        reason: String,
    },
}

impl LoadError {
    pub fn source(err: impl std::fmt::Display) -> Self {
        Self::Source {
            reason: err.to_string(),
        }
    }

    pub fn invalid_data(err: impl std::fmt::Display) -> Self {
        Self::InvalidData {
            reason: err.to_string(),
        }
    }
}

impl From<IngestError> for LoadError {
    fn from(err: IngestError) -> Self {
        match &err {
            IngestError::FileRead { .. } => Self::source(&err),
            IngestError::Parse { .. } | IngestError::InvalidItem { .. } => Self::invalid_data(&err),
        }
    }
}

impl From<ModelError> for LoadError {
    fn from(err: ModelError) -> Self {
        Self::invalid_data(err)
    }
}
