use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::inventory::Inventory;
use crate::model::ProductDraft;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    inventory: &mut Inventory<S>,
    draft: &ProductDraft,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match inventory.add_draft(draft) {
        Ok(product) => {
            result.add_message(CmdMessage::success(format!(
                "Product added: {}",
                product.name
            )));
            result.affected_products.push(product);
        }
        Err(StockpileError::Validation(errors)) => {
            for (field, msg) in &errors.errors {
                result.add_message(CmdMessage::error(format!("{}: {}", field, msg)));
            }
            result = result.with_field_errors(errors);
        }
        Err(e) if e.is_storage() => result.add_message(CmdMessage::storage(&e)),
        Err(e) => return Err(e),
    }

    Ok(result)
}
