//! Filter state and item matching.
//!
//! A [`FilterState`] is a pure value: every setter returns a new state and
//! applies the selection rules:
//!
//! - selecting a category resets the subcategory, keeps the query
//! - selecting a subcategory never changes the category
//! - changing the query never touches category or subcategory

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_text, search_haystack};
use crate::{CatalogStore, Category, Item, ModelError};

// =============================================================================
// CATEGORY FILTER
// =============================================================================

/// Category selection: everything, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(*category),
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_KEY) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// FILTER STATE
// =============================================================================

/// Active category, subcategory and search selection.
///
/// Invariants held by construction:
/// - `subcategory` is `None` whenever `category` is [`CategoryFilter::All`]
/// - `query` is normalised (see [`normalize_text`])
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterState {
    category: CategoryFilter,
    subcategory: Option<String>,
    query: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, subcategory: Option<String>, query: &str) -> Self {
        Self::default()
            .with_category(category)
            .with_subcategory(subcategory)
            .with_query(query)
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a category. The subcategory is always reset.
    #[must_use]
    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            category,
            subcategory: None,
            query: self.query.clone(),
        }
    }

    /// Select a subcategory within the current category.
    ///
    /// Ignored (reset to `None`) while the category is `All`.
    #[must_use]
    pub fn with_subcategory(&self, subcategory: Option<String>) -> Self {
        let subcategory = match self.category {
            CategoryFilter::All => None,
            CategoryFilter::Only(_) => subcategory
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };
        Self {
            category: self.category,
            subcategory,
            query: self.query.clone(),
        }
    }

    /// Replace the search query; the stored form is normalised.
    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        Self {
            category: self.category,
            subcategory: self.subcategory.clone(),
            query: normalize_text(query),
        }
    }

    /// Drop a subcategory that does not occur under the selected category.
    ///
    /// Unknown subcategories fail open to a category-only filter.
    #[must_use]
    pub fn sanitized(self, store: &CatalogStore) -> Self {
        let known = match (self.category, self.subcategory.as_deref()) {
            (CategoryFilter::Only(category), Some(sub)) => store.has_subcategory(category, sub),
            _ => true,
        };
        if known {
            self
        } else {
            Self {
                subcategory: None,
                ..self
            }
        }
    }

    /// Whether `item` passes this filter.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_structure(item)
            && (self.query.is_empty() || search_haystack(item).contains(&self.query))
    }

    /// Category and subcategory test only.
    pub(crate) fn matches_structure(&self, item: &Item) -> bool {
        if !self.category.admits(item.category) {
            return false;
        }
        match &self.subcategory {
            Some(sub) => item.subcategory.as_deref() == Some(sub.as_str()),
            None => true,
        }
    }

    /// Query test against a precomputed haystack.
    pub(crate) fn matches_haystack(&self, haystack: &str) -> bool {
        self.query.is_empty() || haystack.contains(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe() -> Item {
        Item::new("cafe", Category::Gastronomy, "Café Central")
            .unwrap()
            .with_subcategory("coffee")
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FilterState::default();
        assert_eq!(filter.category(), CategoryFilter::All);
        assert!(filter.matches(&cafe()));
    }

    #[test]
    fn query_is_normalized_on_set() {
        let filter = FilterState::default().with_query("  CAFÉ ");
        assert_eq!(filter.query(), "cafe");
        assert!(filter.matches(&cafe()));
    }

    #[test]
    fn category_change_resets_subcategory_but_keeps_query() {
        let filter = FilterState::default()
            .with_category(Category::Gastronomy.into())
            .with_subcategory(Some("coffee".into()))
            .with_query("central");
        let changed = filter.with_category(Category::Urban.into());
        assert_eq!(changed.subcategory(), None);
        assert_eq!(changed.query(), "central");
    }

    #[test]
    fn subcategory_ignored_for_all() {
        let filter = FilterState::default().with_subcategory(Some("coffee".into()));
        assert_eq!(filter.subcategory(), None);
    }

    #[test]
    fn subcategory_must_match_exactly() {
        let filter = FilterState::new(Category::Gastronomy.into(), Some("wine".into()), "");
        assert!(!filter.matches(&cafe()));
    }

    #[test]
    fn category_mismatch_excludes() {
        let filter = FilterState::default().with_category(Category::Nature.into());
        assert!(!filter.matches(&cafe()));
    }

    #[test]
    fn category_filter_parses_all() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "culture".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Culture))
        );
    }
}
