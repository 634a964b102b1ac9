//! # Filtering and Sorting
//!
//! Pure functions from a snapshot of the collection to the sequence shown to
//! the user. Nothing here mutates or owns records.
//!
//! Sorting is stable: records whose keys compare equal keep their collection
//! order in both directions, so the displayed order is fully deterministic.

use crate::model::{Product, SEED_CATEGORIES};
use crate::view::{SortDir, SortKey, ViewState, ALL_CATEGORIES};
use std::cmp::Ordering;

/// Keeps records matching the category filter and the (case-insensitive) name
/// search. Input order is preserved.
pub fn derive<'a>(products: &'a [Product], search: &str, category: &str) -> Vec<&'a Product> {
    let term = search.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
        .collect()
}

pub fn sort<'a>(mut filtered: Vec<&'a Product>, by: SortKey, dir: SortDir) -> Vec<&'a Product> {
    filtered.sort_by(|a, b| {
        let ord = compare(a, b, by);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
    filtered
}

/// Derive then sort, per the given view state.
pub fn apply<'a>(products: &'a [Product], view: &ViewState) -> Vec<&'a Product> {
    let filtered = derive(products, &view.search, &view.filter_category);
    sort(filtered, view.sort_by, view.sort_dir)
}

fn compare(a: &Product, b: &Product, by: SortKey) -> Ordering {
    match by {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

/// Category choices: the seed categories plus every category in use,
/// de-duplicated and sorted case-insensitively.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut cats: Vec<String> = SEED_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for p in products {
        if !cats.contains(&p.category) {
            cats.push(p.category.clone());
        }
    }
    cats.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    cats
}
