//! Events accepted by the view controller.

use catalog_model::{CategoryFilter, FilterState, Item};

use crate::error::LoadError;
use crate::plan::Layout;

/// Every input the controller reacts to.
///
/// User intents, router notifications and data source outcomes all arrive
/// here and are processed one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // === Filtering ===
    /// Replace the whole filter.
    FilterChanged(FilterState),
    /// Select a category; the subcategory resets.
    CategorySelected(CategoryFilter),
    /// Select or clear the subcategory within the current category.
    SubcategorySelected(Option<String>),
    /// Replace the free-text query.
    QueryChanged(String),

    // === Navigation ===
    /// Open an item by id. Ids arrive raw from links and may be unknown.
    OpenDetail(String),
    CloseDetail,
    /// The host reported a fragment the router did not produce.
    RouteChanged(String),
    LayoutChanged(Layout),
    /// Show the catalog in another language. Target and filter are kept.
    LanguageChanged(String),

    // === Data ===
    DataLoaded(Vec<Item>),
    DataFailed(LoadError),
    ReloadRequested,
}

impl Event {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FilterChanged(_) => "filter_changed",
            Self::CategorySelected(_) => "category_selected",
            Self::SubcategorySelected(_) => "subcategory_selected",
            Self::QueryChanged(_) => "query_changed",
            Self::OpenDetail(_) => "open_detail",
            Self::CloseDetail => "close_detail",
            Self::RouteChanged(_) => "route_changed",
            Self::LayoutChanged(_) => "layout_changed",
            Self::LanguageChanged(_) => "language_changed",
            Self::DataLoaded(_) => "data_loaded",
            Self::DataFailed(_) => "data_failed",
            Self::ReloadRequested => "reload_requested",
        }
    }
}
