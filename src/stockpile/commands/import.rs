use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::inventory::Inventory;
use crate::store::KeyValueStore;
use crate::transfer::{self, ImportPolicy};
use std::fs;
use std::path::Path;

/// Replaces the whole collection with the contents of a JSON file.
///
/// The file is read and fully converted before anything is replaced; a bad
/// document leaves the collection as it was.
pub fn run<S: KeyValueStore>(
    inventory: &mut Inventory<S>,
    path: &Path,
    policy: ImportPolicy,
) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(StockpileError::Io)?;
    let outcome = transfer::import_json(&text, policy)?;
    let count = outcome.products.len();

    let mut result = CmdResult::default();
    for warning in &outcome.warnings {
        result.add_message(CmdMessage::warning(warning.clone()));
    }

    match inventory.replace_all(outcome.products) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "Imported {} products from {}",
                count,
                path.display()
            )));
            result.affected_products = inventory.products().to_vec();
        }
        Err(e) if e.is_storage() => result.add_message(CmdMessage::storage(&e)),
        Err(e) => return Err(e),
    }

    Ok(result)
}
