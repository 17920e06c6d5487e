use thiserror::Error;

/// Errors raised while constructing catalog values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Item identifiers must contain at least one non-whitespace character.
    #[error("item id must not be empty (got {0:?})")]
    EmptyItemId(String),

    /// Two items in one catalog share an identifier.
    #[error("duplicate item id: {0}")]
    DuplicateItemId(String),

    /// Category name outside the closed category set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
