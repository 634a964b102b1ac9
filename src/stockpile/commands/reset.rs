use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::seed_products;
use crate::store::KeyValueStore;

/// Replaces the collection with the sample inventory. Asking first is up to
/// the caller.
pub fn run<S: KeyValueStore>(inventory: &mut Inventory<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match inventory.replace_all(seed_products()) {
        Ok(()) => {
            result.add_message(CmdMessage::success("Sample inventory restored"));
            result.affected_products = inventory.products().to_vec();
        }
        Err(e) if e.is_storage() => result.add_message(CmdMessage::storage(&e)),
        Err(e) => return Err(e),
    }
    Ok(result)
}
