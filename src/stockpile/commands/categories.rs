use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::query;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(query::categories(inventory.products())))
}
