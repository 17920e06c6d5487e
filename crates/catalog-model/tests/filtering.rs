//! Filtering properties of the catalog model.

use catalog_model::{CatalogStore, Category, CategoryFilter, FilterState, Item};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::all().to_vec())
}

fn category_filter_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        category_strategy().prop_map(CategoryFilter::Only),
    ]
}

fn store_strategy() -> impl Strategy<Value = CatalogStore> {
    prop::collection::vec(
        (
            category_strategy(),
            prop::option::of(prop::sample::select(vec!["lakes", "parks", "museums"])),
            "[a-zA-Záéíóú ]{0,12}",
        ),
        0..20,
    )
    .prop_map(|rows| {
        let items = rows
            .into_iter()
            .enumerate()
            .map(|(n, (category, sub, title))| {
                let item = Item::new(format!("item-{n}"), category, title).unwrap();
                match sub {
                    Some(sub) => item.with_subcategory(sub),
                    None => item,
                }
            })
            .collect();
        CatalogStore::new(items).unwrap()
    })
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        category_filter_strategy(),
        prop::option::of(prop::sample::select(vec!["lakes", "parks", "museums"])),
        "[a-zé ]{0,3}",
    )
        .prop_map(|(category, sub, query)| {
            FilterState::new(category, sub.map(String::from), &query)
        })
}

/// True when `sub` appears in `full` in order.
fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|needle| rest.any(|candidate| candidate == needle))
}

proptest! {
    #[test]
    fn visible_items_are_an_ordered_subsequence(store in store_strategy(), filter in filter_strategy()) {
        let all: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        let visible: Vec<&str> = store.visible(&filter).iter().map(|i| i.id.as_str()).collect();
        prop_assert!(is_subsequence(&visible, &all));
    }

    #[test]
    fn store_visible_agrees_with_matches(store in store_strategy(), filter in filter_strategy()) {
        let by_store: Vec<&str> = store.visible(&filter).iter().map(|i| i.id.as_str()).collect();
        let by_matches: Vec<&str> = store
            .items()
            .iter()
            .filter(|item| filter.matches(item))
            .map(|i| i.id.as_str())
            .collect();
        prop_assert_eq!(by_store, by_matches);
    }

    #[test]
    fn selecting_a_category_clears_subcategory(filter in filter_strategy(), category in category_filter_strategy()) {
        let changed = filter.with_category(category);
        prop_assert_eq!(changed.subcategory(), None);
        prop_assert_eq!(changed.query(), filter.query());
        prop_assert_eq!(changed.category(), category);
    }

    #[test]
    fn query_and_subcategory_keep_category(filter in filter_strategy(), query in "\\PC{0,8}") {
        let queried = filter.with_query(&query);
        prop_assert_eq!(queried.category(), filter.category());
        prop_assert_eq!(queried.subcategory(), filter.subcategory());

        let sub = filter.with_subcategory(Some("parks".into()));
        prop_assert_eq!(sub.category(), filter.category());
    }
}

#[test]
fn category_scenario_from_two_items() {
    let store = CatalogStore::new(vec![
        Item::new("a", Category::Nature, "Laguna").unwrap(),
        Item::new("b", Category::Culture, "Teatro").unwrap(),
    ])
    .unwrap();

    let nature = FilterState::default().with_category(Category::Nature.into());
    let ids: Vec<&str> = store.visible(&nature).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);

    let all = nature.with_category(CategoryFilter::All);
    let ids: Vec<&str> = store.visible(&all).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn accent_free_query_matches_accented_title() {
    let store = CatalogStore::new(vec![Item::new("c", Category::Gastronomy, "Café").unwrap()])
        .unwrap();
    let filter = FilterState::default().with_query("cafe");
    assert_eq!(store.visible(&filter).len(), 1);
}

#[test]
fn empty_result_is_not_an_error() {
    let store = CatalogStore::new(vec![Item::new("c", Category::Urban, "Plaza").unwrap()]).unwrap();
    let filter = FilterState::default().with_query("volcán");
    assert!(store.visible(&filter).is_empty());
}
