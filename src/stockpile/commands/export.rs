use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::inventory::Inventory;
use crate::store::KeyValueStore;
use crate::transfer;
use std::fs;
use std::path::Path;
use tracing::info;

/// Exports the whole collection. With a path the document is written there;
/// without one it is returned in [`CmdResult::exported`].
pub fn run<S: KeyValueStore>(inventory: &Inventory<S>, output: Option<&Path>) -> Result<CmdResult> {
    let products = inventory.products();
    let json = transfer::export_json(products)?;
    let mut result = CmdResult::default();

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", json)).map_err(StockpileError::Io)?;
            info!(path = %path.display(), count = products.len(), "exported products");
            result.add_message(CmdMessage::success(format!(
                "Exported {} products to {}",
                products.len(),
                path.display()
            )));
            result.written_to = Some(path.to_path_buf());
        }
        None => result.exported = Some(json),
    }

    Ok(result)
}
