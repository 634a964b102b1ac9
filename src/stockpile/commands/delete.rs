use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RowSelector;
use crate::inventory::Inventory;
use crate::model::ProductId;
use crate::store::KeyValueStore;
use crate::view::ViewState;
use std::thread;
use std::time::Duration;
use tracing::debug;

use super::helpers::resolve_selectors;

/// Whether a confirmed delete pauses before it is committed.
///
/// The pause only exists so a UI can show the row leaving. It happens once per
/// call, after every selector has been resolved, and cannot be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePacing {
    #[default]
    Immediate,
    Animated(Duration),
}

pub fn run<S: KeyValueStore>(
    inventory: &mut Inventory<S>,
    view: &ViewState,
    selectors: &[RowSelector],
    pacing: DeletePacing,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(inventory.products(), view, selectors)?;
    let mut result = CmdResult::default();

    if let DeletePacing::Animated(pause) = pacing {
        debug!(?pause, "pausing before delete");
        thread::sleep(pause);
    }

    // The same record may be named twice (row and id); the first name wins.
    let mut targets: Vec<(RowSelector, ProductId)> = Vec::with_capacity(resolved.len());
    for (sel, id) in resolved {
        if !targets.iter().any(|(_, seen)| *seen == id) {
            targets.push((sel, id));
        }
    }
    let ids: Vec<ProductId> = targets.iter().map(|(_, id)| id.clone()).collect();

    match inventory.remove_many(&ids) {
        Ok(removed) => {
            for (sel, id) in &targets {
                if let Some(product) = removed.iter().find(|p| &p.id == id) {
                    result.add_message(CmdMessage::success(format!(
                        "Product deleted ({}): {}",
                        sel, product.name
                    )));
                    result.affected_products.push(product.clone());
                }
            }
        }
        Err(e) if e.is_storage() => result.add_message(CmdMessage::storage(&e)),
        Err(e) => return Err(e),
    }

    Ok(result)
}
