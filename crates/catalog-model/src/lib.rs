//! Catalog data model for the destination browser.
//!
//! This crate provides the value types the browser state machine works on:
//!
//! - [`Item`]: one point of interest, immutable once loaded
//! - [`CatalogStore`]: the loaded item sequence with an id index
//! - [`FilterState`]: category, subcategory and search selection
//! - [`ViewTarget`]: which pane is visible (list or a single detail)
//!
//! # Example
//!
//! ```
//! use catalog_model::{CatalogStore, Category, CategoryFilter, FilterState, Item};
//!
//! let store = CatalogStore::new(vec![
//!     Item::new("a", Category::Nature, "Laguna del Laja").unwrap(),
//!     Item::new("b", Category::Culture, "Café Literario").unwrap(),
//! ])
//! .unwrap();
//!
//! let filter = FilterState::default().with_query("cafe");
//! let visible = store.visible(&filter);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id.as_str(), "b");
//!
//! let nature = FilterState::default().with_category(CategoryFilter::Only(Category::Nature));
//! assert_eq!(store.visible(&nature)[0].id.as_str(), "a");
//! ```

mod category;
mod error;
mod filter;
mod ids;
mod item;
mod normalize;
mod store;
mod view;

pub use category::Category;
pub use error::{ModelError, Result};
pub use filter::{CategoryFilter, FilterState};
pub use ids::ItemId;
pub use item::{Coordinates, Item};
pub use normalize::{normalize_text, search_haystack};
pub use store::CatalogStore;
pub use view::ViewTarget;
