use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::KeyValueStore;
use crate::view::{SortKey, ViewState};
use tracing::warn;

use super::helpers::save_view;
use super::list::snapshot;

/// Column-header sort: the active key flips direction, a new key sorts
/// ascending.
pub fn sort<S: KeyValueStore>(
    inventory: &Inventory<S>,
    view: &mut ViewState,
    key: SortKey,
) -> Result<CmdResult> {
    view.sort_by_header(key);
    let mut result = CmdResult::default();
    if let Some(e) = save_view(inventory.backend(), view) {
        result.add_message(CmdMessage::storage(&e));
    }
    result.add_message(CmdMessage::info(format!(
        "Sorted by {} ({})",
        view.sort_by, view.sort_dir
    )));
    Ok(snapshot(inventory, view, result))
}

/// Clears search, filter and sort back to the defaults.
pub fn clear<S: KeyValueStore>(inventory: &Inventory<S>, view: &mut ViewState) -> Result<CmdResult> {
    view.clear();
    let mut result = CmdResult::default();
    if let Err(e) = ViewState::forget(inventory.backend()) {
        warn!(error = %e, "view state not cleared");
        result.add_message(CmdMessage::storage(&e));
    }
    result.add_message(CmdMessage::success("Filters cleared"));
    Ok(snapshot(inventory, view, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::view::SortDir;

    #[test]
    fn sort_toggles_and_persists() {
        let inv = Inventory::load(StoreFixture::new().with_mouse_and_keyboard().store);
        let mut view = ViewState::default();

        let result = sort(&inv, &mut view, SortKey::Price).unwrap();
        assert_eq!(result.listed_products[0].product.name, "Mouse");

        let result = sort(&inv, &mut view, SortKey::Price).unwrap();
        assert_eq!(result.listed_products[0].product.name, "Keyboard");
        assert_eq!(ViewState::load(inv.backend()).sort_dir, SortDir::Desc);
    }

    #[test]
    fn clear_resets_persisted_state() {
        let inv = Inventory::load(StoreFixture::new().with_mouse_and_keyboard().store);
        let mut view = ViewState {
            search: "zzz".into(),
            ..ViewState::default()
        };
        view.save(inv.backend()).unwrap();

        let result = clear(&inv, &mut view).unwrap();
        assert_eq!(result.listed_products.len(), 2);
        assert!(inv.backend().raw(keys::STATE).is_none());
        assert_eq!(ViewState::load(inv.backend()), ViewState::default());
    }

    #[test]
    fn clear_warns_when_store_rejects_it() {
        let inv = Inventory::load(StoreFixture::new().with_mouse_and_keyboard().store);
        inv.backend().set_simulate_write_error(true);
        let mut view = ViewState {
            search: "zzz".into(),
            ..ViewState::default()
        };

        let result = clear(&inv, &mut view).unwrap();
        assert_eq!(view, ViewState::default());
        assert!(result.has_warnings());
    }
}
