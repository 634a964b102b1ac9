use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::query;
use crate::stats;
use crate::store::KeyValueStore;
use crate::view::{SortDir, SortKey, ViewState};

use super::helpers::{listed, save_view};

/// View changes requested alongside a listing. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<SortKey>,
    pub sort_dir: Option<SortDir>,
}

pub fn run<S: KeyValueStore>(
    inventory: &Inventory<S>,
    view: &mut ViewState,
    options: ListOptions,
) -> Result<CmdResult> {
    let mut next = view.clone();
    if let Some(search) = options.search {
        next.search = search;
    }
    if let Some(category) = options.category {
        next.filter_category = category.trim().to_string();
    }
    if let Some(key) = options.sort_by {
        next.sort_by = key;
    }
    if let Some(dir) = options.sort_dir {
        next.sort_dir = dir;
    }

    let mut result = CmdResult::default();
    if next != *view {
        *view = next;
        if let Some(e) = save_view(inventory.backend(), view) {
            result.add_message(CmdMessage::storage(&e));
        }
    }

    Ok(snapshot(inventory, view, result))
}

/// Fills in everything a listing shows: rows, totals, category choices.
pub fn snapshot<S: KeyValueStore>(
    inventory: &Inventory<S>,
    view: &ViewState,
    mut result: CmdResult,
) -> CmdResult {
    let products = inventory.products();
    let rows = listed(products, view);
    result.total_products = products.len();

    if rows.is_empty() {
        if products.is_empty() {
            result.add_message(CmdMessage::info("No products yet."));
        } else {
            result.add_message(CmdMessage::info("No products match the current filters."));
        }
    }

    result
        .with_listed_products(rows)
        .with_stats(stats::compute(products))
        .with_categories(query::categories(products))
        .with_view(view.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn setup() -> (Inventory<InMemoryStore>, ViewState) {
        let inv = Inventory::load(StoreFixture::new().with_mouse_and_keyboard().store);
        let view = ViewState::load(inv.backend());
        (inv, view)
    }

    fn names(result: &CmdResult) -> Vec<String> {
        result
            .listed_products
            .iter()
            .map(|dp| dp.product.name.clone())
            .collect()
    }

    #[test]
    fn lists_in_default_order() {
        let (inv, mut view) = setup();
        let result = run(&inv, &mut view, ListOptions::default()).unwrap();
        assert_eq!(names(&result), vec!["Keyboard", "Mouse"]);
        assert_eq!(result.stats.unwrap().total_items, 16);
    }

    #[test]
    fn search_narrows_and_persists() {
        let (inv, mut view) = setup();
        let options = ListOptions {
            search: Some("mouse".into()),
            ..ListOptions::default()
        };
        let result = run(&inv, &mut view, options).unwrap();
        assert_eq!(names(&result), vec!["Mouse"]);
        assert_eq!(result.total_products, 2);
        assert_eq!(ViewState::load(inv.backend()).search, "mouse");
    }

    #[test]
    fn price_desc_puts_keyboard_first() {
        let (inv, mut view) = setup();
        let options = ListOptions {
            sort_by: Some(SortKey::Price),
            sort_dir: Some(SortDir::Desc),
            ..ListOptions::default()
        };
        let result = run(&inv, &mut view, options).unwrap();
        assert_eq!(names(&result), vec!["Keyboard", "Mouse"]);
        assert_eq!(result.listed_products[0].index, 1);
    }

    #[test]
    fn stats_ignore_filters() {
        let (inv, mut view) = setup();
        let options = ListOptions {
            category: Some("Home".into()),
            ..ListOptions::default()
        };
        let result = run(&inv, &mut view, options).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.stats.unwrap().total_items, 16);
        assert!(result.messages[0].content.contains("No products match"));
    }

    #[test]
    fn unchanged_view_is_not_rewritten() {
        let (inv, mut view) = setup();
        run(&inv, &mut view, ListOptions::default()).unwrap();
        assert!(inv.backend().raw(keys::STATE).is_none());
    }

    #[test]
    fn failed_view_write_warns_but_lists() {
        let (inv, mut view) = setup();
        inv.backend().set_simulate_write_error(true);
        let options = ListOptions {
            search: Some("key".into()),
            ..ListOptions::default()
        };
        let result = run(&inv, &mut view, options).unwrap();
        assert_eq!(names(&result), vec!["Keyboard"]);
        assert!(result.has_warnings());
    }
}
