//! Render plans.
//!
//! A [`RenderPlan`] is everything a renderer needs to paint one frame. It is
//! derived from a ready session and owns its data, so renderers never reach
//! back into controller state.

use std::fmt;
use std::str::FromStr;

use catalog_model::{CatalogStore, CategoryFilter, Coordinates, FilterState, Item, ItemId, ViewTarget};
use serde::{Deserialize, Serialize};

use crate::fragment::fragment_for;

/// How the list pane arranges items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
    Map,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Grid, Layout::List, Layout::Map];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown layout: {s}"))
    }
}

/// One map pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: ItemId,
    pub title: String,
    pub coordinates: Coordinates,
    /// CSS hex colour of the item's category.
    pub color: &'static str,
}

impl MapMarker {
    fn for_item(item: &Item) -> Option<Self> {
        item.coordinates.map(|coordinates| Self {
            id: item.id.clone(),
            title: item.title.clone(),
            coordinates,
            color: item.category.marker_color(),
        })
    }
}

/// Everything needed to paint one frame of a ready session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub target: ViewTarget,
    pub filter: FilterState,
    /// Matching items in store order.
    pub visible_items: Vec<Item>,
    pub is_empty: bool,
    pub errored: bool,
    /// Canonical fragment for `target`, without `#`.
    pub fragment: String,
    /// A detail was requested for an id the store does not hold.
    pub not_found: Option<String>,
    /// The opened item when `target` is a detail.
    pub detail: Option<Item>,
    /// Subcategory choices for the selected category.
    ///
    /// Empty unless a single category is selected and it has at least two
    /// distinct subcategories.
    pub subcategories: Vec<String>,
    pub layout: Layout,
    /// Language the item text is in; renderers pick labels to match.
    pub language: String,
    /// Pins for visible items that have coordinates.
    pub markers: Vec<MapMarker>,
}

impl RenderPlan {
    pub fn build(
        store: &CatalogStore,
        target: &ViewTarget,
        filter: &FilterState,
        layout: Layout,
        language: &str,
        not_found: Option<String>,
    ) -> Self {
        let visible_items: Vec<Item> = store.visible(filter).into_iter().cloned().collect();
        let markers = visible_items.iter().filter_map(MapMarker::for_item).collect();
        let detail = target
            .detail_id()
            .and_then(|id| store.get(id.as_str()))
            .cloned();

        Self {
            target: target.clone(),
            filter: filter.clone(),
            is_empty: visible_items.is_empty(),
            visible_items,
            errored: false,
            fragment: fragment_for(target),
            not_found,
            detail,
            subcategories: subcategory_options(store, filter),
            layout,
            language: language.to_string(),
            markers,
        }
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible_items.iter().map(|item| item.id.as_str()).collect()
    }
}

fn subcategory_options(store: &CatalogStore, filter: &FilterState) -> Vec<String> {
    let CategoryFilter::Only(category) = filter.category() else {
        return Vec::new();
    };
    let options = store.subcategories(category);
    if options.len() < 2 {
        return Vec::new();
    }
    options.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use catalog_model::{Category, Item};

    use super::*;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            Item::new("lake", Category::Nature, "Lake")
                .unwrap()
                .with_subcategory("lakes")
                .with_coordinates(-37.0, -72.0),
            Item::new("falls", Category::Nature, "Falls")
                .unwrap()
                .with_subcategory("waterfalls"),
            Item::new("museum", Category::Culture, "Museum")
                .unwrap()
                .with_subcategory("museums")
                .with_coordinates(-37.4, -72.3),
        ])
        .unwrap()
    }

    #[test]
    fn list_plan_for_everything() {
        let plan = RenderPlan::build(
            &store(),
            &ViewTarget::List,
            &FilterState::default(),
            Layout::Grid,
            "en",
            None,
        );
        assert_eq!(plan.visible_ids(), vec!["lake", "falls", "museum"]);
        assert!(!plan.is_empty);
        assert!(!plan.errored);
        assert_eq!(plan.fragment, "");
        assert!(plan.detail.is_none());
        assert!(plan.subcategories.is_empty());
        assert_eq!(plan.markers.len(), 2);
        assert_eq!(plan.markers[1].color, Category::Culture.marker_color());
    }

    #[test]
    fn subcategories_need_two_options() {
        let store = store();
        let nature = FilterState::default().with_category(Category::Nature.into());
        let plan = RenderPlan::build(&store, &ViewTarget::List, &nature, Layout::Map, "en", None);
        assert_eq!(plan.subcategories, vec!["lakes", "waterfalls"]);

        let culture = FilterState::default().with_category(Category::Culture.into());
        let plan = RenderPlan::build(&store, &ViewTarget::List, &culture, Layout::Map, "en", None);
        assert!(plan.subcategories.is_empty());
    }

    #[test]
    fn detail_plan_carries_the_item() {
        let target = ViewTarget::Detail(ItemId::new("falls").unwrap());
        let plan = RenderPlan::build(
            &store(),
            &target,
            &FilterState::default(),
            Layout::List,
            "en",
            None,
        );
        assert_eq!(plan.fragment, "dest/falls");
        assert_eq!(plan.detail.map(|item| item.title), Some("Falls".to_string()));
    }

    #[test]
    fn layout_parsing() {
        assert_eq!("Map".parse::<Layout>(), Ok(Layout::Map));
        assert_eq!(" grid ".parse::<Layout>(), Ok(Layout::Grid));
        assert!("table".parse::<Layout>().is_err());
    }
}
