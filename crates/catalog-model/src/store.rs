//! Immutable item store.

use std::collections::HashMap;

use crate::normalize::search_haystack;
use crate::{Category, FilterState, Item, ItemId, ModelError};

/// The loaded catalog.
///
/// Built once from a sequence of items and never mutated afterwards; a
/// reload builds a new store. Iteration order is the load order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<Item>,
    /// Normalised search text per item, same order as `items`.
    haystacks: Vec<String>,
    index: HashMap<ItemId, usize>,
}

impl CatalogStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, ModelError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(ModelError::DuplicateItemId(item.id.to_string()));
            }
        }
        let haystacks = items.iter().map(search_haystack).collect();
        Ok(Self {
            items,
            haystacks,
            index,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Items passing `filter`, in store order.
    pub fn visible(&self, filter: &FilterState) -> Vec<&Item> {
        self.items
            .iter()
            .zip(&self.haystacks)
            .filter(|(item, haystack)| {
                filter.matches_structure(item) && filter.matches_haystack(haystack)
            })
            .map(|(item, _)| item)
            .collect()
    }

    /// Distinct subcategories under `category`, in first-seen order.
    pub fn subcategories(&self, category: Category) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if item.category != category {
                continue;
            }
            if let Some(sub) = item.subcategory.as_deref()
                && !seen.contains(&sub)
            {
                seen.push(sub);
            }
        }
        seen
    }

    pub fn has_subcategory(&self, category: Category, subcategory: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.category == category && item.subcategory.as_deref() == Some(subcategory))
    }

    /// Item count per category, in [`Category::all`] order, skipping empty ones.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .map(|&category| {
                let count = self.items.iter().filter(|i| i.category == category).count();
                (category, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
