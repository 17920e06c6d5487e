//! Closed category set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Top-level destination category.
///
/// Display labels are not part of the model; they are looked up by the
/// presentation layer using [`Category::as_str`] as the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nature,
    Heritage,
    Culture,
    Gastronomy,
    Urban,
}

impl Category {
    /// All categories in display order.
    pub const fn all() -> &'static [Category] {
        &[
            Self::Nature,
            Self::Heritage,
            Self::Culture,
            Self::Gastronomy,
            Self::Urban,
        ]
    }

    /// Stable lowercase key (also the wire value).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Heritage => "heritage",
            Self::Culture => "culture",
            Self::Gastronomy => "gastronomy",
            Self::Urban => "urban",
        }
    }

    /// Accent colour for map markers.
    pub fn marker_color(&self) -> &'static str {
        match self {
            Self::Nature => "#4CAF50",
            Self::Heritage => "#795548",
            Self::Culture => "#673AB7",
            Self::Gastronomy => "#FF9800",
            Self::Urban => "#607D8B",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == key)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Nature ".parse::<Category>(), Ok(Category::Nature));
        assert_eq!("URBAN".parse::<Category>(), Ok(Category::Urban));
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert_eq!(
            "beaches".parse::<Category>(),
            Err(ModelError::UnknownCategory("beaches".to_string()))
        );
    }

    #[test]
    fn wire_value_matches_key() {
        for category in Category::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
