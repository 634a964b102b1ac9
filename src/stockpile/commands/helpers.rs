use crate::error::{Result, StockpileError};
use crate::index::{index_products, DisplayProduct, RowSelector};
use crate::model::{Product, ProductId};
use crate::query;
use crate::store::KeyValueStore;
use crate::view::ViewState;
use tracing::warn;

/// The current view of `products`, numbered for display.
pub fn listed(products: &[Product], view: &ViewState) -> Vec<DisplayProduct> {
    index_products(&query::apply(products, view))
}

/// Maps selectors to ids. Row numbers are read against `view`; id prefixes
/// against the whole collection.
pub fn resolve_selectors(
    products: &[Product],
    view: &ViewState,
    selectors: &[RowSelector],
) -> Result<Vec<(RowSelector, ProductId)>> {
    let rows = query::apply(products, view);

    selectors
        .iter()
        .map(|sel| {
            let id = match sel {
                RowSelector::Row(n) => n
                    .checked_sub(1)
                    .and_then(|i| rows.get(i))
                    .map(|p| p.id.clone())
                    .ok_or_else(|| {
                        StockpileError::Api(format!("Row {} not found in current view", n))
                    })?,
                RowSelector::Id(prefix) => by_prefix(products, prefix)?,
            };
            Ok((sel.clone(), id))
        })
        .collect()
}

fn by_prefix(products: &[Product], prefix: &str) -> Result<ProductId> {
    if let Some(p) = products.iter().find(|p| p.id.as_str() == prefix) {
        return Ok(p.id.clone());
    }
    let matches: Vec<&Product> = products
        .iter()
        .filter(|p| p.id.as_str().starts_with(prefix))
        .collect();
    match matches.as_slice() {
        [only] => Ok(only.id.clone()),
        [] => Err(StockpileError::NotFound(prefix.to_string())),
        _ => Err(StockpileError::Api(format!(
            "Id prefix {} matches {} products",
            prefix,
            matches.len()
        ))),
    }
}

/// Persists the view state, turning a failed write into a log line. The view
/// still applies for this session.
pub fn save_view<S: KeyValueStore + ?Sized>(store: &S, view: &ViewState) -> Option<StockpileError> {
    match view.save(store) {
        Ok(()) => None,
        Err(e) => {
            warn!(error = %e, "view state not saved");
            Some(e)
        }
    }
}
