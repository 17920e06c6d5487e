use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Unique key of a catalog item.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyItemId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = ItemId::new("  salto-del-laja ").unwrap();
        assert_eq!(id.as_str(), "salto-del-laja");
    }

    #[test]
    fn rejects_blank_ids() {
        assert_eq!(
            ItemId::new("   "),
            Err(ModelError::EmptyItemId("   ".to_string()))
        );
    }

    #[test]
    fn deserialize_validates() {
        let parsed: Result<ItemId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
        let parsed: ItemId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed.as_str(), "abc");
    }
}
